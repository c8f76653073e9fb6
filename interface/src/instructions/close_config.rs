use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::instructions::{pack_data, HookInstruction};

/// Closes the config PDA, returning its rent to the authority.
///
/// ### Accounts
///  0. `[WRITE]` Config PDA
///  1. `[WRITE, SIGNER]` Authority, receives the rent
pub struct CloseConfig {
    pub config: Pubkey,
    pub authority: Pubkey,
}

impl CloseConfig {
    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: crate::program::ID,
            accounts: vec![
                AccountMeta::new(self.config, false),
                AccountMeta::new(self.authority, true),
            ],
            data: pack_data(HookInstruction::CloseConfig, &()),
        }
    }
}
