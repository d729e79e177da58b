use anchor_lang::prelude::*;

use crate::constants::STATE_SEED;
use crate::errors::AuthError;
use crate::events::PauseToggled;
use crate::state::ProgramState;

#[derive(Accounts)]
pub struct TogglePause<'info> {
    #[account(
        mut,
        seeds = [STATE_SEED],
        bump = program_state.bump,
        has_one = authority @ AuthError::Unauthorized
    )]
    pub program_state: Account<'info, ProgramState>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<TogglePause>) -> Result<()> {
    let state = &mut ctx.accounts.program_state;
    state.paused = !state.paused;

    emit!(PauseToggled {
        authority: state.authority,
        paused: state.paused,
    });

    msg!("Pause flag set to {}", state.paused);
    Ok(())
}
