use anchor_lang::prelude::*;

/// Global program configuration
/// PDA seeds: [b"state"]
#[account]
pub struct ProgramState {
    /// Authority for collection setup, registration and pause control
    pub authority: Pubkey,

    /// Treasury wallet recorded at initialization
    pub treasury: Pubkey,

    /// Brand collection mint PDA
    pub collection_mint: Pubkey,

    /// Global pause switch; blocks everything except toggle_pause
    pub paused: bool,

    /// Total product records created
    pub total_registered: u64,

    /// Total authentication NFTs minted
    pub total_minted: u64,

    /// PDA bump seed (stored for efficient CPI signing)
    pub bump: u8,
}

impl ProgramState {
    /// discriminator (8) + authority (32) + treasury (32) + collection_mint (32)
    /// + paused (1) + total_registered (8) + total_minted (8) + bump (1)
    pub const SIZE: usize = 8 + 32 + 32 + 32 + 1 + 8 + 8 + 1; // 122 bytes
}

/// Per-QR product record
/// PDA seeds: [b"product", qr_code.as_bytes()]
///
/// Lifecycle: Registered -> Minted -> MetadataAttached (terminal).
/// Registration uniqueness is enforced by the PDA init itself; the flags
/// below gate the remaining one-way transitions.
#[account]
pub struct ProductRecord {
    pub qr_code: String,
    pub sku: String,
    pub metadata_uri: String,
    pub registered: bool,
    pub minted: bool,

    /// Mint bound at mint_nft; Pubkey::default() until then
    pub nft_mint: Pubkey,

    /// Signer that registered the product
    pub registrant: Pubkey,

    /// Unix timestamp at registration
    pub registered_at: i64,

    pub bump: u8,
}

impl ProductRecord {
    /// discriminator (8) + qr_code (4+32) + sku (4+64) + metadata_uri (4+200)
    /// + registered (1) + minted (1) + nft_mint (32) + registrant (32)
    /// + registered_at (8) + bump (1)
    pub const SIZE: usize = 8 + (4 + 32) + (4 + 64) + (4 + 200) + 1 + 1 + 32 + 32 + 8 + 1; // 391 bytes
}
