use borsh::BorshSerialize;
use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::instructions::{pack_data, HookInstruction};

/// Creates the config PDA and writes the initial fee configuration.
///
/// Rejected on-chain with `FeeTooHigh` when `transfer_fee_basis_points`
/// exceeds 1000 (10%).
///
/// ### Accounts
///  0. `[WRITE]` Config PDA, `["config", authority]`
///  1. `[WRITE, SIGNER]` Authority, pays for the account
///  2. `[READ]` System program
pub struct Initialize {
    /// The config PDA derived from the authority.
    pub config: Pubkey,
    /// The authority initializing and funding the config.
    pub authority: Pubkey,
    /// Fee rate where 100 = 1%.
    pub transfer_fee_basis_points: u16,
    /// Absolute cap on the fee taken from a single transfer.
    pub max_transfer_fee: u64,
}

#[derive(BorshSerialize)]
struct Args {
    transfer_fee_basis_points: u16,
    max_transfer_fee: u64,
}

impl Initialize {
    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: crate::program::ID,
            accounts: vec![
                AccountMeta::new(self.config, false),
                AccountMeta::new(self.authority, true),
                AccountMeta::new_readonly(solana_system_interface::program::ID, false),
            ],
            data: pack_data(
                HookInstruction::Initialize,
                &Args {
                    transfer_fee_basis_points: self.transfer_fee_basis_points,
                    max_transfer_fee: self.max_transfer_fee,
                },
            ),
        }
    }
}
