use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::metadata::{
    create_metadata_accounts_v3,
    mpl_token_metadata::types::{Creator, DataV2},
    CreateMetadataAccountsV3, Metadata,
};
use anchor_spl::token::{
    mint_to, set_authority, spl_token::instruction::AuthorityType, Mint, MintTo, SetAuthority,
    Token, TokenAccount,
};

use crate::constants::{
    COLLECTION_SEED, MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH, STATE_SEED,
};
use crate::errors::AuthError;
use crate::events::CollectionCreated;
use crate::state::ProgramState;

#[derive(Accounts)]
pub struct CreateCollection<'info> {
    #[account(
        seeds = [STATE_SEED],
        bump = program_state.bump,
        has_one = authority @ AuthError::Unauthorized,
        has_one = collection_mint
    )]
    pub program_state: Account<'info, ProgramState>,

    #[account(
        mut,
        seeds = [COLLECTION_SEED],
        bump
    )]
    pub collection_mint: Account<'info, Mint>,

    /// Authority's ATA, receives the single collection unit
    #[account(
        init,
        payer = authority,
        associated_token::mint = collection_mint,
        associated_token::authority = authority
    )]
    pub collection_token_account: Account<'info, TokenAccount>,

    /// CHECK: Created by the Metaplex Token Metadata program
    #[account(
        mut,
        seeds = [
            b"metadata",
            metadata_program.key().as_ref(),
            collection_mint.key().as_ref(),
        ],
        seeds::program = metadata_program.key(),
        bump
    )]
    pub collection_metadata: UncheckedAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub metadata_program: Program<'info, Metadata>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(
    ctx: Context<CreateCollection>,
    uri: String,
    name: String,
    symbol: String,
) -> Result<()> {
    require!(uri.len() <= MAX_URI_LENGTH, AuthError::UriTooLong);
    require!(name.len() <= MAX_NAME_LENGTH, AuthError::NameTooLong);
    require!(symbol.len() <= MAX_SYMBOL_LENGTH, AuthError::SymbolTooLong);
    require!(!ctx.accounts.program_state.paused, AuthError::ProgramPaused);

    // Metadata attachment is the one-way marker for collection finalization
    require!(
        ctx.accounts.collection_metadata.data_is_empty(),
        AuthError::CollectionAlreadyExists
    );

    let bump = ctx.bumps.collection_mint;
    let signer_seeds: &[&[&[u8]]] = &[&[COLLECTION_SEED, &[bump]]];

    // Single collection unit to the authority
    mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.collection_mint.to_account_info(),
                to: ctx.accounts.collection_token_account.to_account_info(),
                authority: ctx.accounts.collection_mint.to_account_info(),
            },
            signer_seeds,
        ),
        1,
    )?;

    let creators = vec![Creator {
        address: ctx.accounts.authority.key(),
        verified: true,
        share: 100,
    }];

    create_metadata_accounts_v3(
        CpiContext::new_with_signer(
            ctx.accounts.metadata_program.to_account_info(),
            CreateMetadataAccountsV3 {
                metadata: ctx.accounts.collection_metadata.to_account_info(),
                mint: ctx.accounts.collection_mint.to_account_info(),
                mint_authority: ctx.accounts.collection_mint.to_account_info(),
                update_authority: ctx.accounts.authority.to_account_info(),
                payer: ctx.accounts.authority.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
                rent: ctx.accounts.rent.to_account_info(),
            },
            signer_seeds,
        ),
        DataV2 {
            name: name.clone(),
            symbol,
            uri: uri.clone(),
            seller_fee_basis_points: 0,
            creators: Some(creators),
            collection: None,
            uses: None,
        },
        true,
        true,
        None,
    )?;

    // Revoke mint authority so the supply stays at 1 forever
    set_authority(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            SetAuthority {
                current_authority: ctx.accounts.collection_mint.to_account_info(),
                account_or_mint: ctx.accounts.collection_mint.to_account_info(),
            },
            signer_seeds,
        ),
        AuthorityType::MintTokens,
        None,
    )?;

    emit!(CollectionCreated {
        collection_mint: ctx.accounts.collection_mint.key(),
        authority: ctx.accounts.authority.key(),
        name,
        uri,
    });

    msg!("Collection finalized: {}", ctx.accounts.collection_mint.key());
    Ok(())
}
