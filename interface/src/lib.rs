//! Client-side interface to the deployed stablecoin transfer-hook program.
//!
//! Covers the full instruction ABI (discriminators, account lists, argument
//! encoding), the PDA seed schema, account state layouts, the custom error
//! table, and the event formats the program emits through `Program data:`
//! logs.

pub mod discriminator;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

pub mod program {
    use solana_pubkey::Pubkey;

    pub const ID: Pubkey = Pubkey::from_str_const("FSkkSmrThcLpU9Uybrn4xcpbQKswUJn7KvoUQBsLPExD");
}

/// Seed of the singleton config PDA: `["config", authority]`.
pub const CONFIG_SEED: &[u8] = b"config";
/// Seed of allowlist entry PDAs: `["whitelist", authority, address]`.
pub const WHITELIST_SEED: &[u8] = b"whitelist";
/// Seed of blacklist entry PDAs: `["blacklist", authority, address]`.
pub const BLACKLIST_SEED: &[u8] = b"blacklist";
