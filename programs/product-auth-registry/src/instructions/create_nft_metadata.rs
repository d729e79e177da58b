use anchor_lang::prelude::*;
use anchor_spl::metadata::{
    create_master_edition_v3, create_metadata_accounts_v3,
    mpl_token_metadata::types::DataV2, CreateMasterEditionV3, CreateMetadataAccountsV3, Metadata,
};
use anchor_spl::token::Token;

use crate::constants::{MAX_NAME_LENGTH, NFT_MINT_SEED, NFT_SYMBOL, PRODUCT_SEED, STATE_SEED};
use crate::errors::AuthError;
use crate::events::NftMetadataCreated;
use crate::state::{ProductRecord, ProgramState};

#[derive(Accounts)]
#[instruction(qr_code: String)]
pub struct CreateNftMetadata<'info> {
    #[account(
        seeds = [PRODUCT_SEED, qr_code.as_bytes()],
        bump = product_record.bump
    )]
    pub product_record: Account<'info, ProductRecord>,

    #[account(
        seeds = [STATE_SEED],
        bump = program_state.bump
    )]
    pub program_state: Account<'info, ProgramState>,

    /// CHECK: Address recomputed from seeds; existence and binding to the
    /// record are checked in the handler so an unminted product surfaces a
    /// lifecycle error rather than a deserialization failure
    #[account(
        seeds = [NFT_MINT_SEED, qr_code.as_bytes()],
        bump
    )]
    pub nft_mint: UncheckedAccount<'info>,

    /// CHECK: Created by the Metaplex Token Metadata program
    #[account(
        mut,
        seeds = [
            b"metadata",
            metadata_program.key().as_ref(),
            nft_mint.key().as_ref(),
        ],
        seeds::program = metadata_program.key(),
        bump
    )]
    pub nft_metadata: UncheckedAccount<'info>,

    /// CHECK: Created by the Metaplex Token Metadata program
    #[account(
        mut,
        seeds = [
            b"metadata",
            metadata_program.key().as_ref(),
            nft_mint.key().as_ref(),
            b"edition",
        ],
        seeds::program = metadata_program.key(),
        bump
    )]
    pub nft_master_edition: UncheckedAccount<'info>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub metadata_program: Program<'info, Metadata>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(ctx: Context<CreateNftMetadata>, qr_code: String) -> Result<()> {
    let record = &ctx.accounts.product_record;
    require!(record.registered, AuthError::ProductNotRegistered);
    require!(record.minted, AuthError::ProductNotMinted);
    require!(!ctx.accounts.program_state.paused, AuthError::ProgramPaused);
    require_keys_eq!(
        ctx.accounts.nft_mint.key(),
        record.nft_mint,
        AuthError::ProductNotMinted
    );

    // Occupied metadata PDA means this already ran; fail rather than overwrite
    require!(
        ctx.accounts.nft_metadata.data_is_empty(),
        AuthError::MetadataAlreadyExists
    );

    let mut name = if record.sku.is_empty() {
        record.qr_code.clone()
    } else {
        record.sku.clone()
    };
    if name.len() > MAX_NAME_LENGTH {
        let mut end = MAX_NAME_LENGTH;
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        name.truncate(end);
    }

    let bump = ctx.bumps.nft_mint;
    let signer_seeds: &[&[&[u8]]] = &[&[NFT_MINT_SEED, qr_code.as_bytes(), &[bump]]];

    create_metadata_accounts_v3(
        CpiContext::new_with_signer(
            ctx.accounts.metadata_program.to_account_info(),
            CreateMetadataAccountsV3 {
                metadata: ctx.accounts.nft_metadata.to_account_info(),
                mint: ctx.accounts.nft_mint.to_account_info(),
                mint_authority: ctx.accounts.nft_mint.to_account_info(),
                update_authority: ctx.accounts.nft_mint.to_account_info(),
                payer: ctx.accounts.user.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
                rent: ctx.accounts.rent.to_account_info(),
            },
            signer_seeds,
        ),
        DataV2 {
            name,
            symbol: NFT_SYMBOL.to_string(),
            uri: record.metadata_uri.clone(),
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        },
        true,
        true,
        None,
    )?;

    // Max supply 0: no prints, the edition marker just pins the supply
    create_master_edition_v3(
        CpiContext::new_with_signer(
            ctx.accounts.metadata_program.to_account_info(),
            CreateMasterEditionV3 {
                edition: ctx.accounts.nft_master_edition.to_account_info(),
                mint: ctx.accounts.nft_mint.to_account_info(),
                update_authority: ctx.accounts.nft_mint.to_account_info(),
                mint_authority: ctx.accounts.nft_mint.to_account_info(),
                payer: ctx.accounts.user.to_account_info(),
                metadata: ctx.accounts.nft_metadata.to_account_info(),
                token_program: ctx.accounts.token_program.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
                rent: ctx.accounts.rent.to_account_info(),
            },
            signer_seeds,
        ),
        Some(0),
    )?;

    emit!(NftMetadataCreated {
        qr_code,
        nft_mint: record.nft_mint,
        metadata: ctx.accounts.nft_metadata.key(),
    });

    msg!("Metadata attached for mint {}", record.nft_mint);
    Ok(())
}
