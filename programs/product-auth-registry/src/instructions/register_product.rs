use anchor_lang::prelude::*;

use crate::constants::{MAX_QR_CODE_LENGTH, MAX_SKU_LENGTH, MAX_URI_LENGTH, PRODUCT_SEED, STATE_SEED};
use crate::errors::AuthError;
use crate::events::ProductRegistered;
use crate::state::{ProductRecord, ProgramState};

#[derive(Accounts)]
#[instruction(qr_code: String)]
pub struct RegisterProduct<'info> {
    /// One record per QR code; re-creating an occupied PDA fails in the
    /// System Program, which is what makes registration at-most-once
    #[account(
        init,
        payer = authority,
        space = ProductRecord::SIZE,
        seeds = [PRODUCT_SEED, qr_code.as_bytes()],
        bump
    )]
    pub product_record: Account<'info, ProductRecord>,

    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [STATE_SEED],
        bump = program_state.bump,
        has_one = authority @ AuthError::Unauthorized
    )]
    pub program_state: Account<'info, ProgramState>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<RegisterProduct>,
    qr_code: String,
    sku: Option<String>,
    metadata_uri: Option<String>,
) -> Result<()> {
    require!(qr_code.len() <= MAX_QR_CODE_LENGTH, AuthError::QrCodeTooLong);

    let sku = sku.unwrap_or_default();
    let metadata_uri = metadata_uri.unwrap_or_default();
    require!(sku.len() <= MAX_SKU_LENGTH, AuthError::SkuTooLong);
    require!(metadata_uri.len() <= MAX_URI_LENGTH, AuthError::UriTooLong);

    let state = &mut ctx.accounts.program_state;
    require!(!state.paused, AuthError::ProgramPaused);

    state.total_registered = state
        .total_registered
        .checked_add(1)
        .ok_or(AuthError::Overflow)?;

    let record = &mut ctx.accounts.product_record;
    record.qr_code = qr_code.clone();
    record.sku = sku;
    record.metadata_uri = metadata_uri;
    record.registered = true;
    record.minted = false;
    record.nft_mint = Pubkey::default();
    record.registrant = ctx.accounts.authority.key();
    record.registered_at = Clock::get()?.unix_timestamp;
    record.bump = ctx.bumps.product_record;

    emit!(ProductRegistered {
        qr_code,
        record: record.key(),
        registrant: record.registrant,
        total_registered: state.total_registered,
    });

    msg!("Product registered: {}", record.qr_code);
    Ok(())
}
