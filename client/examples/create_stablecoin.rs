//! Walks the tier presets: validates each one, plans its Token-2022 mint
//! bootstrap, and prints the resulting instruction sequence without
//! submitting anything.

use client::{
    context::{hook_initialize, MintKeys, MintPlan},
    logs::log_info,
};
use presets::{Preset, TransferFeeParams};
use solana_sdk::signature::{Keypair, Signer};

// Placeholder rent; a live flow fetches the rent-exempt minimum for
// `plan.space` instead.
const RENT_LAMPORTS: u64 = 10_000_000;

fn main() -> anyhow::Result<()> {
    let authority = Keypair::new();

    let fee = TransferFeeParams {
        basis_points: 50,
        max_fee: 1_000_000,
        min_transfer_amount: 1,
    };
    let auditor = [1u8; 32];

    for preset in [
        Preset::sss1(),
        Preset::sss2(fee),
        Preset::sss3(fee, auditor),
        Preset::private_stablecoin(fee, auditor),
    ] {
        let mint = Keypair::new();
        let keys = MintKeys {
            mint: mint.pubkey(),
            authority: authority.pubkey(),
            payer: authority.pubkey(),
        };

        let plan = MintPlan::from_preset(&preset, &keys, RENT_LAMPORTS)?;
        log_info(
            preset.name,
            format!(
                "{} instructions, {} byte mint account",
                plan.instructions.len(),
                plan.space,
            ),
        );
        for ix in &plan.instructions {
            log_info(
                "  instruction",
                format!(
                    "{} ({} accounts, {} data bytes)",
                    ix.program_id,
                    ix.accounts.len(),
                    ix.data.len(),
                ),
            );
        }

        if let Some(ix) = hook_initialize(&preset, &authority.pubkey()) {
            log_info(
                "  hook config",
                format!("initialize at {}", ix.accounts[0].pubkey),
            );
        }
    }

    Ok(())
}
