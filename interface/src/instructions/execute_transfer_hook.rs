use borsh::BorshSerialize;
use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::instructions::{pack_data, HookInstruction};

/// The per-transfer validation entrypoint.
///
/// Token-2022 invokes this on every transfer of a mint carrying the hook
/// extension; clients never submit it directly. The encoder is part of the
/// ABI surface so tooling can recognize and decode hook invocations in
/// fetched transactions.
///
/// ### Accounts
///  0. `[READ]` Config PDA
///  1. `[READ]` Source token account
///  2. `[READ]` Destination token account
///  3. `[READ]` Mint
///  4. `[READ]` Allowlist entry PDA for the source owner, or the system
///     program when none exists
///  5. `[READ]` Blacklist entry PDA for the source owner, or the system
///     program when none exists
pub struct ExecuteTransferHook {
    pub config: Pubkey,
    pub source: Pubkey,
    pub destination: Pubkey,
    pub mint: Pubkey,
    pub whitelist: Pubkey,
    pub blacklist: Pubkey,
    pub amount: u64,
}

#[derive(BorshSerialize)]
struct Args {
    amount: u64,
}

impl ExecuteTransferHook {
    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: crate::program::ID,
            accounts: vec![
                AccountMeta::new_readonly(self.config, false),
                AccountMeta::new_readonly(self.source, false),
                AccountMeta::new_readonly(self.destination, false),
                AccountMeta::new_readonly(self.mint, false),
                AccountMeta::new_readonly(self.whitelist, false),
                AccountMeta::new_readonly(self.blacklist, false),
            ],
            data: pack_data(HookInstruction::ExecuteTransferHook, &Args { amount: self.amount }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_layout() {
        let ix = ExecuteTransferHook {
            config: Pubkey::new_unique(),
            source: Pubkey::new_unique(),
            destination: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            whitelist: Pubkey::new_unique(),
            blacklist: Pubkey::new_unique(),
            amount: 123_456,
        }
        .instruction();

        assert_eq!(ix.data.len(), 16);
        assert_eq!(
            ix.data[..8],
            HookInstruction::ExecuteTransferHook.discriminator()
        );
        assert_eq!(ix.data[8..], 123_456u64.to_le_bytes());
        // Every account is readonly; the hook only inspects state.
        assert!(ix.accounts.iter().all(|m| !m.is_writable && !m.is_signer));
    }
}
