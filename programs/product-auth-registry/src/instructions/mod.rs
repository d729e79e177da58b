#![allow(ambiguous_glob_reexports)]

pub mod create_collection;
pub mod create_nft_metadata;
pub mod initialize;
pub mod mint_nft;
pub mod register_product;
pub mod toggle_pause;

pub use create_collection::*;
pub use create_nft_metadata::*;
pub use initialize::*;
pub use mint_nft::*;
pub use register_product::*;
pub use toggle_pause::*;
