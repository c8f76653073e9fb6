//! Entry point for the `hook-admin` binary.
//!
//! Parses CLI arguments, loads the authority keypair, derives the config
//! PDA, and submits the requested admin instruction through the client
//! crate.

mod cli;

use anyhow::Context;
use clap::Parser;
use client::{
    logs::{log_info, log_success},
    pda,
    transactions::{self, InitializeOutcome},
};
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use sss_interface::{
    instructions::{
        AddToList, CloseConfig, RemoveFromList, SetBlacklistEnabled, SetPaused,
        SetPermanentDelegate, UpdateFeeConfig,
    },
    state::{ListKind, TransferHookConfig},
};

use cli::{Commands, HookAdminCli, ListAction};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = HookAdminCli::parse();

    let rpc = RpcClient::new(cli.url.clone());
    let authority = load_keypair(&cli.keypair)?;
    let (config, _bump) = pda::find_config_address(&authority.pubkey());

    match cli.command {
        Commands::Init { fee_bps, max_fee } => {
            match transactions::initialize_hook(&rpc, &authority, fee_bps, max_fee).await? {
                InitializeOutcome::Initialized(sig) => log_success("Initialized", sig),
                InitializeOutcome::AlreadyInitialized => {
                    log_info("Initialized", format!("{config} already exists"))
                }
            }
        }
        Commands::Fee {
            fee_bps,
            max_fee,
            min_transfer,
        } => {
            let ix = UpdateFeeConfig {
                config,
                authority: authority.pubkey(),
                transfer_fee_basis_points: fee_bps,
                max_transfer_fee: max_fee,
                min_transfer_amount: min_transfer,
            }
            .instruction();
            transactions::send_transaction(&rpc, &authority, &[], &[ix]).await?;
        }
        Commands::Pause => {
            set_paused(&rpc, &authority, config, true).await?;
        }
        Commands::Resume => {
            set_paused(&rpc, &authority, config, false).await?;
        }
        Commands::Delegate { delegate } => {
            let ix = SetPermanentDelegate {
                config,
                authority: authority.pubkey(),
                delegate,
            }
            .instruction();
            transactions::send_transaction(&rpc, &authority, &[], &[ix]).await?;
        }
        Commands::Allowlist { action } => {
            manage_list(&rpc, &authority, config, ListKind::Whitelist, action).await?;
        }
        Commands::Blacklist { action } => {
            manage_list(&rpc, &authority, config, ListKind::Blacklist, action).await?;
        }
        Commands::Enforcement { enabled } => {
            let ix = SetBlacklistEnabled {
                config,
                authority: authority.pubkey(),
                enabled,
            }
            .instruction();
            transactions::send_transaction(&rpc, &authority, &[], &[ix]).await?;
        }
        Commands::Show => {
            show_config(&rpc, config)?;
        }
        Commands::Close => {
            let ix = CloseConfig {
                config,
                authority: authority.pubkey(),
            }
            .instruction();
            transactions::send_transaction(&rpc, &authority, &[], &[ix]).await?;
        }
    }

    Ok(())
}

async fn set_paused(
    rpc: &RpcClient,
    authority: &Keypair,
    config: Pubkey,
    paused: bool,
) -> anyhow::Result<()> {
    let ix = SetPaused {
        config,
        authority: authority.pubkey(),
        paused,
    }
    .instruction();
    transactions::send_transaction(rpc, authority, &[], &[ix]).await?;
    Ok(())
}

async fn manage_list(
    rpc: &RpcClient,
    authority: &Keypair,
    config: Pubkey,
    kind: ListKind,
    action: ListAction,
) -> anyhow::Result<()> {
    let ix = match action {
        ListAction::Add { address } => {
            let (list_entry, _bump) =
                pda::find_list_entry_address(kind, &authority.pubkey(), &address);
            AddToList {
                config,
                list_entry,
                authority: authority.pubkey(),
                address,
                kind,
            }
            .instruction()
        }
        ListAction::Remove { address } => {
            let (list_entry, _bump) =
                pda::find_list_entry_address(kind, &authority.pubkey(), &address);
            RemoveFromList {
                config,
                list_entry,
                authority: authority.pubkey(),
                address,
                kind,
            }
            .instruction()
        }
    };
    transactions::send_transaction(rpc, authority, &[], &[ix]).await?;
    Ok(())
}

fn show_config(rpc: &RpcClient, config: Pubkey) -> anyhow::Result<()> {
    let data = rpc
        .get_account_data(&config)
        .with_context(|| format!("Failed to fetch config account {config}"))?;
    let decoded = TransferHookConfig::try_from_bytes(&data)
        .with_context(|| format!("Account {config} is not a hook config"))?;

    log_info("Config", config);
    log_info("Authority", decoded.authority);
    log_info("Fee bps", decoded.transfer_fee_basis_points);
    log_info("Max fee", decoded.max_transfer_fee);
    log_info("Min transfer", decoded.min_transfer_amount);
    log_info("Fees collected", decoded.total_fees_collected);
    log_info("Paused", decoded.is_paused);
    log_info(
        "Delegate",
        decoded
            .permanent_delegate
            .map_or_else(|| "none".to_string(), |d| d.to_string()),
    );
    log_info("Blacklist enforced", decoded.blacklist_enabled);

    Ok(())
}

fn load_keypair(path: &str) -> anyhow::Result<Keypair> {
    let expanded = expand_home(path);
    solana_keypair::read_keypair_file(&expanded)
        .map_err(|e| anyhow::Error::msg(format!("Failed to read keypair {expanded}: {e}")))
}

fn expand_home(path: &str) -> String {
    match (path.strip_prefix("~/"), std::env::var("HOME")) {
        (Some(rest), Ok(home)) => format!("{home}/{rest}"),
        _ => path.to_string(),
    }
}
