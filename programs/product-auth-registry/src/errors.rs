use anchor_lang::prelude::*;

#[error_code]
pub enum AuthError {
    #[msg("Signer does not match the stored authority")]
    Unauthorized,

    #[msg("Program is paused")]
    ProgramPaused,

    #[msg("Product is not registered")]
    ProductNotRegistered,

    #[msg("Product NFT has already been minted")]
    AlreadyMinted,

    #[msg("Product NFT has not been minted yet")]
    ProductNotMinted,

    #[msg("Collection metadata already exists")]
    CollectionAlreadyExists,

    #[msg("NFT metadata already exists")]
    MetadataAlreadyExists,

    #[msg("QR code too long (max 32 bytes)")]
    QrCodeTooLong,

    #[msg("SKU too long (max 64 bytes)")]
    SkuTooLong,

    #[msg("URI too long (max 200 bytes)")]
    UriTooLong,

    #[msg("Name too long (max 32 bytes)")]
    NameTooLong,

    #[msg("Symbol too long (max 10 bytes)")]
    SymbolTooLong,

    #[msg("Arithmetic overflow")]
    Overflow,
}
