use anchor_lang::prelude::*;

#[event]
pub struct CollectionCreated {
    pub collection_mint: Pubkey,
    pub authority: Pubkey,
    pub name: String,
    pub uri: String,
}

#[event]
pub struct ProductRegistered {
    pub qr_code: String,
    pub record: Pubkey,
    pub registrant: Pubkey,
    pub total_registered: u64,
}

#[event]
pub struct NftMinted {
    pub qr_code: String,
    pub nft_mint: Pubkey,
    pub owner: Pubkey,
    pub total_minted: u64,
}

#[event]
pub struct NftMetadataCreated {
    pub qr_code: String,
    pub nft_mint: Pubkey,
    pub metadata: Pubkey,
}

#[event]
pub struct PauseToggled {
    pub authority: Pubkey,
    pub paused: bool,
}
