//! End-to-end checks over the full instruction surface: every builder's
//! output must identify back through the discriminator table and target the
//! hook program.

use solana_instruction::Instruction;
use solana_pubkey::Pubkey;
use sss_interface::{
    instructions::{
        AddToList, CloseConfig, ExecuteTransferHook, HookInstruction, Initialize, RemoveFromList,
        SetBlacklistEnabled, SetPaused, SetPermanentDelegate, UpdateFeeConfig,
    },
    state::ListKind,
};

fn all_instructions() -> Vec<(HookInstruction, Instruction)> {
    let config = Pubkey::new_unique();
    let authority = Pubkey::new_unique();
    let list_entry = Pubkey::new_unique();
    let address = Pubkey::new_unique();

    vec![
        (
            HookInstruction::Initialize,
            Initialize {
                config,
                authority,
                transfer_fee_basis_points: 50,
                max_transfer_fee: 1_000_000,
            }
            .instruction(),
        ),
        (
            HookInstruction::UpdateFeeConfig,
            UpdateFeeConfig {
                config,
                authority,
                transfer_fee_basis_points: 100,
                max_transfer_fee: 2_000_000,
                min_transfer_amount: 10,
            }
            .instruction(),
        ),
        (
            HookInstruction::AddWhitelist,
            AddToList {
                config,
                list_entry,
                authority,
                address,
                kind: ListKind::Whitelist,
            }
            .instruction(),
        ),
        (
            HookInstruction::RemoveWhitelist,
            RemoveFromList {
                config,
                list_entry,
                authority,
                address,
                kind: ListKind::Whitelist,
            }
            .instruction(),
        ),
        (
            HookInstruction::AddBlacklist,
            AddToList {
                config,
                list_entry,
                authority,
                address,
                kind: ListKind::Blacklist,
            }
            .instruction(),
        ),
        (
            HookInstruction::RemoveBlacklist,
            RemoveFromList {
                config,
                list_entry,
                authority,
                address,
                kind: ListKind::Blacklist,
            }
            .instruction(),
        ),
        (
            HookInstruction::SetPermanentDelegate,
            SetPermanentDelegate {
                config,
                authority,
                delegate: Some(Pubkey::new_unique()),
            }
            .instruction(),
        ),
        (
            HookInstruction::SetBlacklistEnabled,
            SetBlacklistEnabled {
                config,
                authority,
                enabled: true,
            }
            .instruction(),
        ),
        (
            HookInstruction::SetPaused,
            SetPaused {
                config,
                authority,
                paused: true,
            }
            .instruction(),
        ),
        (
            HookInstruction::CloseConfig,
            CloseConfig { config, authority }.instruction(),
        ),
        (
            HookInstruction::ExecuteTransferHook,
            ExecuteTransferHook {
                config,
                source: Pubkey::new_unique(),
                destination: Pubkey::new_unique(),
                mint: Pubkey::new_unique(),
                whitelist: Pubkey::new_unique(),
                blacklist: Pubkey::new_unique(),
                amount: 1_000,
            }
            .instruction(),
        ),
    ]
}

#[test]
fn builders_round_trip_through_the_discriminator_table() {
    for (expected, ix) in all_instructions() {
        assert_eq!(ix.program_id, sss_interface::program::ID);
        assert_eq!(
            HookInstruction::try_from_data(&ix.data),
            Some(expected),
            "{expected}",
        );
    }
}

#[test]
fn admin_instructions_require_the_authority_signature() {
    for (tag, ix) in all_instructions() {
        // The transfer path carries no signer; everything else must.
        let expected_signers = match tag {
            HookInstruction::ExecuteTransferHook => 0,
            _ => 1,
        };
        let signers = ix.accounts.iter().filter(|m| m.is_signer).count();
        assert_eq!(signers, expected_signers, "{tag}");
    }
}
