//! Command-line argument structure for `hook-admin`, one subcommand per
//! authority operation on the deployed transfer-hook program.

use clap::{Parser, Subcommand};
use solana_sdk::pubkey::Pubkey;

/// Administration tool for the stablecoin transfer hook.
///
/// Every mutating subcommand signs with the configured authority keypair
/// and targets the config PDA derived from it.
#[derive(Parser, Debug)]
#[command(name = "hook-admin", about = "Stablecoin transfer-hook administration", version)]
pub struct HookAdminCli {
    /// RPC endpoint.
    #[arg(long, env = "RPC_URL", default_value = "http://localhost:8899")]
    pub url: String,

    /// Path to the authority keypair file.
    #[arg(long, env = "KEYPAIR", default_value = "~/.config/solana/id.json")]
    pub keypair: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the config PDA with the initial fee parameters.
    Init {
        /// Fee rate where 100 = 1%.
        #[arg(long, default_value_t = 0)]
        fee_bps: u16,
        /// Absolute cap on the fee taken from a single transfer.
        #[arg(long, default_value_t = 0)]
        max_fee: u64,
    },
    /// Replace the fee configuration.
    Fee {
        /// Fee rate where 100 = 1%.
        fee_bps: u16,
        max_fee: u64,
        min_transfer: u64,
    },
    /// Pause every transfer through the hook.
    Pause,
    /// Resume transfers.
    Resume,
    /// Set or clear the permanent delegate.
    Delegate {
        /// Omit to clear the delegate.
        delegate: Option<Pubkey>,
    },
    /// Manage the allowlist.
    Allowlist {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Manage the blacklist.
    Blacklist {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Toggle blacklist enforcement on the transfer path.
    Enforcement { enabled: bool },
    /// Fetch and print the decoded config.
    Show,
    /// Close the config and reclaim its rent.
    Close,
}

#[derive(Subcommand, Debug)]
pub enum ListAction {
    /// Create an entry for the wallet.
    Add { address: Pubkey },
    /// Remove the wallet's entry and reclaim its rent.
    Remove { address: Pubkey },
}
