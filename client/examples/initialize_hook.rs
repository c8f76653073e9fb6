//! Manual check against a running validator: funds a payer, derives the
//! config PDA, submits the hook's `initialize`, and reports whether the
//! config was created or already existed.

use client::{
    logs::{log_info, log_success},
    pda,
    transactions::{fund_account, initialize_hook, InitializeOutcome},
};
use solana_client::rpc_client::RpcClient;
use solana_sdk::signature::Signer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let url = std::env::var("RPC_URL").unwrap_or_else(|_| "http://localhost:8899".to_string());
    log_info("RPC", &url);
    let rpc = RpcClient::new(url);

    let payer = fund_account(&rpc, None).await?;
    let (config, bump) = pda::find_config_address(&payer.pubkey());
    log_info("Authority", payer.pubkey());
    log_info("Config PDA", format!("{config} (bump {bump})"));

    // 50 bps with a 1-token cap at 6 decimals.
    match initialize_hook(&rpc, &payer, 50, 1_000_000).await? {
        InitializeOutcome::Initialized(sig) => log_success("Initialized", sig),
        InitializeOutcome::AlreadyInitialized => {
            log_info("Initialized", "config already exists for this authority")
        }
    }

    Ok(())
}
