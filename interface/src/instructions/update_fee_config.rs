use borsh::BorshSerialize;
use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::instructions::{pack_data, HookInstruction};

/// Replaces the fee configuration. Authority only.
///
/// ### Accounts
///  0. `[WRITE]` Config PDA
///  1. `[SIGNER]` Authority
pub struct UpdateFeeConfig {
    pub config: Pubkey,
    pub authority: Pubkey,
    /// Fee rate where 100 = 1%.
    pub transfer_fee_basis_points: u16,
    pub max_transfer_fee: u64,
    pub min_transfer_amount: u64,
}

#[derive(BorshSerialize)]
struct Args {
    transfer_fee_basis_points: u16,
    max_transfer_fee: u64,
    min_transfer_amount: u64,
}

impl UpdateFeeConfig {
    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: crate::program::ID,
            accounts: vec![
                AccountMeta::new(self.config, false),
                AccountMeta::new_readonly(self.authority, true),
            ],
            data: pack_data(
                HookInstruction::UpdateFeeConfig,
                &Args {
                    transfer_fee_basis_points: self.transfer_fee_basis_points,
                    max_transfer_fee: self.max_transfer_fee,
                    min_transfer_amount: self.min_transfer_amount,
                },
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_layout() {
        let ix = UpdateFeeConfig {
            config: Pubkey::new_unique(),
            authority: Pubkey::new_unique(),
            transfer_fee_basis_points: 250,
            max_transfer_fee: 5_000,
            min_transfer_amount: 10,
        }
        .instruction();

        assert_eq!(ix.data.len(), 8 + 2 + 8 + 8);
        assert_eq!(ix.data[..8], HookInstruction::UpdateFeeConfig.discriminator());
        assert_eq!(ix.data[8..10], 250u16.to_le_bytes());
        assert_eq!(ix.data[10..18], 5_000u64.to_le_bytes());
        assert_eq!(ix.data[18..26], 10u64.to_le_bytes());
    }
}
