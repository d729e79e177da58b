//! Test helpers for product-auth-registry Mollusk tests
//!
//! NOTE: This module is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! Key differences from 0.7.x:
//! - All imports from solana_sdk::* (not modular crates like solana_pubkey)
//! - Token accounts MUST have owner explicitly set to the token program

pub mod errors;

pub use errors::*;

use mollusk_svm::Mollusk;
use mollusk_svm_programs_token::{associated_token, token};

/// Setup Mollusk with the SPL Token and Associated Token programs
///
/// Uses SBF_OUT_DIR to tell Mollusk where to find the program binary.
/// For an Anchor workspace: tests live in programs/product-auth-registry/tests,
/// the binary at workspace_root/target/deploy/
pub fn setup_mollusk() -> Mollusk {
    // From programs/product-auth-registry/, go up 2 levels to workspace root
    let deploy_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent() // programs/
        .unwrap()
        .parent() // workspace root
        .unwrap()
        .join("target/deploy");

    std::env::set_var("SBF_OUT_DIR", deploy_dir);

    let mut mollusk = Mollusk::new(&instructions::PROGRAM_ID, "product_auth_registry");

    // SPL Token + Associated Token, used by initialize / create_collection / mint_nft
    token::add_program(&mut mollusk);
    associated_token::add_program(&mut mollusk);

    mollusk
}
