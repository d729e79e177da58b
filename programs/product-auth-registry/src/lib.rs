use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("6epCVS2Rjeo4iSRPuegBBy2rSugmXKAFQyH6r5QHAedm");

// Security contact information (embedded on-chain)
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Product Auth Registry",
    project_url: "https://github.com/product-auth/registry",
    contacts: "email:security@productauth.io",
    policy: "https://github.com/product-auth/registry/blob/main/SECURITY.md",
    preferred_languages: "en",
    source_code: "https://github.com/product-auth/registry"
}

#[program]
pub mod product_auth_registry {
    use super::*;

    /// One-time setup: creates the program state and the collection mint PDA
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Finalize the brand collection: mint its single unit to the authority,
    /// attach Metaplex metadata, and revoke the mint authority
    pub fn create_collection(
        ctx: Context<CreateCollection>,
        uri: String,
        name: String,
        symbol: String,
    ) -> Result<()> {
        instructions::create_collection::handler(ctx, uri, name, symbol)
    }

    /// Register a printed QR code, creating its product record exactly once
    pub fn register_product(
        ctx: Context<RegisterProduct>,
        qr_code: String,
        sku: Option<String>,
        metadata_uri: Option<String>,
    ) -> Result<()> {
        instructions::register_product::handler(ctx, qr_code, sku, metadata_uri)
    }

    /// Mint the single authentication NFT bound to a registered product
    pub fn mint_nft(ctx: Context<MintNft>, qr_code: String) -> Result<()> {
        instructions::mint_nft::handler(ctx, qr_code)
    }

    /// Attach Metaplex metadata and a master edition to a minted product NFT
    pub fn create_nft_metadata(ctx: Context<CreateNftMetadata>, qr_code: String) -> Result<()> {
        instructions::create_nft_metadata::handler(ctx, qr_code)
    }

    /// Flip the global pause switch (authority only)
    pub fn toggle_pause(ctx: Context<TogglePause>) -> Result<()> {
        instructions::toggle_pause::handler(ctx)
    }
}
