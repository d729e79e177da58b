use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::constants::{COLLECTION_SEED, STATE_SEED};
use crate::state::ProgramState;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Global configuration PDA
    #[account(
        init,
        payer = authority,
        space = ProgramState::SIZE,
        seeds = [STATE_SEED],
        bump
    )]
    pub program_state: Account<'info, ProgramState>,

    /// Brand collection mint, held uncapped until create_collection finalizes it
    #[account(
        init,
        payer = authority,
        mint::decimals = 0,
        mint::authority = collection_mint,
        seeds = [COLLECTION_SEED],
        bump
    )]
    pub collection_mint: Account<'info, Mint>,

    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: Treasury wallet, recorded as-is
    pub treasury: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let state = &mut ctx.accounts.program_state;
    state.authority = ctx.accounts.authority.key();
    state.treasury = ctx.accounts.treasury.key();
    state.collection_mint = ctx.accounts.collection_mint.key();
    state.paused = false;
    state.total_registered = 0;
    state.total_minted = 0;
    state.bump = ctx.bumps.program_state;

    msg!(
        "Program state initialized, authority: {}",
        state.authority
    );
    Ok(())
}
