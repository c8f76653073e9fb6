use anyhow::Context;
use solana_client::{
    client_error::{ClientError, ClientErrorKind},
    rpc_client::RpcClient,
    rpc_response::RpcSimulateTransactionResult,
};
use solana_commitment_config::CommitmentConfig;
use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_sdk::{
    message::{Instruction, Message},
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use solana_transaction_status::{EncodedConfirmedTransactionWithStatusMeta, UiTransactionEncoding};
use sss_interface::{error::HookError, instructions, instructions::HookInstruction};

use crate::{
    events::parse_events,
    logs::{log_error, log_info, log_success, log_warning},
    pda,
};

/// The substring the RPC error carries when account creation hits an
/// existing account; distinguishes "config PDA already initialized" from
/// real failures.
const ALREADY_IN_USE: &str = "already in use";

pub async fn fund_account(rpc: &RpcClient, keypair: Option<Keypair>) -> anyhow::Result<Keypair> {
    let payer = keypair.unwrap_or_else(Keypair::new);

    let airdrop_signature = rpc
        .request_airdrop(&payer.pubkey(), 10_000_000_000)
        .context("Failed to request airdrop")?;

    let mut i = 0;
    // Wait for airdrop confirmation.
    while !rpc
        .confirm_transaction(&airdrop_signature)
        .context("Couldn't confirm transaction")?
        && i < 10
    {
        std::thread::sleep(std::time::Duration::from_millis(500));
        i += 1;
    }

    Ok(payer)
}

pub struct SendTransactionConfig {
    pub compute_budget: Option<u32>,
    pub debug_logs: bool,
}

impl Default for SendTransactionConfig {
    fn default() -> Self {
        SendTransactionConfig {
            compute_budget: None,
            debug_logs: true,
        }
    }
}

pub async fn send_transaction(
    rpc: &RpcClient,
    payer: &Keypair,
    signers: &[&Keypair],
    instructions: &[Instruction],
) -> anyhow::Result<Signature> {
    send_transaction_with_config(rpc, payer, signers, instructions, None).await
}

pub async fn send_transaction_with_config(
    rpc: &RpcClient,
    payer: &Keypair,
    signers: &[&Keypair],
    instructions: &[Instruction],
    config: Option<SendTransactionConfig>,
) -> anyhow::Result<Signature> {
    let blockhash = rpc
        .get_latest_blockhash()
        .context("Failed to fetch a recent blockhash")?;

    let SendTransactionConfig {
        compute_budget,
        debug_logs,
    } = config.unwrap_or_default();

    let msg = Message::new(
        &[
            compute_budget.map_or(vec![], |budget| {
                vec![
                    ComputeBudgetInstruction::set_compute_unit_limit(budget),
                    ComputeBudgetInstruction::set_compute_unit_price(1),
                ]
            }),
            instructions.to_vec(),
        ]
        .concat(),
        Some(&payer.pubkey()),
    );

    let mut tx = Transaction::new_unsigned(msg);
    tx.try_sign(
        &[std::iter::once(payer)
            .chain(signers.iter().cloned())
            .collect::<Vec<_>>()]
        .concat(),
        blockhash,
    )
    .context("Failed to sign transaction")?;

    match rpc.send_and_confirm_transaction(&tx) {
        Ok(sig) => {
            if debug_logs {
                log_success("Signature", sig);
                if let Ok(encoded) = get_transaction_json(rpc, sig).await {
                    if let Some(meta) = encoded.transaction.meta {
                        for event in parse_events(&meta) {
                            log_info("Event", format!("{event:?}"));
                        }
                    }
                }
            }
            Ok(sig)
        }
        Err(error) => {
            log_hook_error(&error, instructions);
            log_info("Payer", payer.pubkey());

            Err(error).context("Failed transaction submission")
        }
    }
}

pub async fn get_transaction_json(
    rpc: &RpcClient,
    sig: Signature,
) -> anyhow::Result<EncodedConfirmedTransactionWithStatusMeta> {
    rpc.get_transaction_with_config(
        &sig,
        solana_client::rpc_config::RpcTransactionConfig {
            encoding: Some(UiTransactionEncoding::Json),
            commitment: Some(CommitmentConfig::confirmed()),
            max_supported_transaction_version: Some(0),
        },
    )
    .context("Should be able to fetch transaction with config")
}

/// Walks a preflight failure down to the failing instruction and, when it
/// belongs to the hook program, prints the decoded custom error.
pub fn log_hook_error(error: &ClientError, instructions: &[Instruction]) {
    use solana_client::rpc_request::{RpcError::RpcResponseError, RpcResponseErrorData};
    use solana_instruction_error::InstructionError;
    use solana_transaction_error::TransactionError;

    let kind = error.kind();
    if let ClientErrorKind::RpcError(RpcResponseError {
        data:
            RpcResponseErrorData::SendTransactionPreflightFailure(RpcSimulateTransactionResult {
                err: Some(ui_err),
                ..
            }),
        ..
    }) = kind
    {
        if let TransactionError::InstructionError(ixn_idx, ixn_error) = ui_err.clone().into() {
            let Some(instruction) = instructions.get(ixn_idx as usize) else {
                log_error("Generic error", error);
                return;
            };

            match ixn_error {
                InstructionError::Custom(code)
                    if instruction.program_id == sss_interface::program::ID =>
                {
                    let tag = HookInstruction::try_from_data(&instruction.data);
                    let name = tag.map_or("unknown", HookInstruction::name);
                    match HookError::from_code(code) {
                        Some(hook_error) => {
                            let msg: &str = hook_error.into();
                            log_error("Hook error", format!("({name}, {msg})"));
                        }
                        None => log_error("Hook error", format!("({name}, custom code {code})")),
                    }
                }
                _ => log_error("Generic error", error),
            }
        }
    } else {
        log_error("Generic error", error);
    }
}

/// Result of submitting the hook's `initialize` for an authority.
#[derive(Debug)]
pub enum InitializeOutcome {
    /// The config PDA was created in this transaction.
    Initialized(Signature),
    /// The config PDA already exists for this authority.
    AlreadyInitialized,
}

/// Derives the config PDA for `authority`, submits `initialize` with the
/// given fee parameters, and classifies the outcome.
pub async fn initialize_hook(
    rpc: &RpcClient,
    authority: &Keypair,
    transfer_fee_basis_points: u16,
    max_transfer_fee: u64,
) -> anyhow::Result<InitializeOutcome> {
    let (config, _bump) = pda::find_config_address(&authority.pubkey());

    let ix = instructions::Initialize {
        config,
        authority: authority.pubkey(),
        transfer_fee_basis_points,
        max_transfer_fee,
    }
    .instruction();

    match send_transaction(rpc, authority, &[], &[ix]).await {
        Ok(sig) => Ok(InitializeOutcome::Initialized(sig)),
        Err(error) if is_already_in_use(&error) => {
            log_warning("Config", format!("{config} already initialized"));
            Ok(InitializeOutcome::AlreadyInitialized)
        }
        Err(error) => Err(error),
    }
}

/// True when the failure is the config account already existing: the
/// preflight simulation logs carry the system program's "already in use"
/// line for the PDA.
fn is_already_in_use(error: &anyhow::Error) -> bool {
    use solana_client::rpc_request::{RpcError::RpcResponseError, RpcResponseErrorData};

    if let Some(client_error) = error.downcast_ref::<ClientError>() {
        if let ClientErrorKind::RpcError(RpcResponseError {
            data: RpcResponseErrorData::SendTransactionPreflightFailure(result),
            ..
        }) = client_error.kind()
        {
            if let Some(logs) = &result.logs {
                return logs.iter().any(|log| log.contains(ALREADY_IN_USE));
            }
        }
    }

    format!("{error:#}").contains(ALREADY_IN_USE)
}
