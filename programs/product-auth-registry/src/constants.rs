/// Seed for the global program state PDA
pub const STATE_SEED: &[u8] = b"state";

/// Seed for the brand collection mint PDA
pub const COLLECTION_SEED: &[u8] = b"collection";

/// Seed prefix for per-QR product record PDAs
pub const PRODUCT_SEED: &[u8] = b"product";

/// Seed prefix for per-QR authentication NFT mint PDAs
pub const NFT_MINT_SEED: &[u8] = b"nft_mint";

/// Maximum length for a QR code (bytes); bounded by the 32-byte PDA seed limit
pub const MAX_QR_CODE_LENGTH: usize = 32;

/// Maximum length for a SKU (bytes)
pub const MAX_SKU_LENGTH: usize = 64;

/// Maximum length for a metadata URI (bytes)
pub const MAX_URI_LENGTH: usize = 200;

/// Maximum length for a token name (bytes)
pub const MAX_NAME_LENGTH: usize = 32;

/// Maximum length for a token symbol (bytes)
pub const MAX_SYMBOL_LENGTH: usize = 10;

/// Symbol stamped on every product authentication NFT
pub const NFT_SYMBOL: &str = "PAUTH";
