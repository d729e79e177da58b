use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{mint_to, Mint, MintTo, Token, TokenAccount};

use crate::constants::{NFT_MINT_SEED, PRODUCT_SEED, STATE_SEED};
use crate::errors::AuthError;
use crate::events::NftMinted;
use crate::state::{ProductRecord, ProgramState};

#[derive(Accounts)]
#[instruction(qr_code: String)]
pub struct MintNft<'info> {
    #[account(
        mut,
        seeds = [PRODUCT_SEED, qr_code.as_bytes()],
        bump = product_record.bump
    )]
    pub product_record: Account<'info, ProductRecord>,

    #[account(
        mut,
        seeds = [STATE_SEED],
        bump = program_state.bump
    )]
    pub program_state: Account<'info, ProgramState>,

    /// Authentication NFT mint, authority held by the PDA itself.
    /// init_if_needed so a repeat call reaches the minted-flag check instead
    /// of dying inside the System Program
    #[account(
        init_if_needed,
        payer = user,
        mint::decimals = 0,
        mint::authority = nft_mint,
        seeds = [NFT_MINT_SEED, qr_code.as_bytes()],
        bump
    )]
    pub nft_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = nft_mint,
        associated_token::authority = user
    )]
    pub nft_token_account: Account<'info, TokenAccount>,

    /// Scanning customer; any fee-paying signer may claim a registered product
    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler(ctx: Context<MintNft>, qr_code: String) -> Result<()> {
    require!(
        ctx.accounts.product_record.registered,
        AuthError::ProductNotRegistered
    );
    require!(!ctx.accounts.program_state.paused, AuthError::ProgramPaused);
    require!(!ctx.accounts.product_record.minted, AuthError::AlreadyMinted);

    let bump = ctx.bumps.nft_mint;
    let signer_seeds: &[&[&[u8]]] = &[&[NFT_MINT_SEED, qr_code.as_bytes(), &[bump]]];

    mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.nft_mint.to_account_info(),
                to: ctx.accounts.nft_token_account.to_account_info(),
                authority: ctx.accounts.nft_mint.to_account_info(),
            },
            signer_seeds,
        ),
        1,
    )?;

    let record = &mut ctx.accounts.product_record;
    record.minted = true;
    record.nft_mint = ctx.accounts.nft_mint.key();

    let state = &mut ctx.accounts.program_state;
    state.total_minted = state
        .total_minted
        .checked_add(1)
        .ok_or(AuthError::Overflow)?;

    emit!(NftMinted {
        qr_code,
        nft_mint: record.nft_mint,
        owner: ctx.accounts.user.key(),
        total_minted: state.total_minted,
    });

    msg!(
        "Authentication NFT minted: {} -> {}",
        record.qr_code,
        record.nft_mint
    );
    Ok(())
}
