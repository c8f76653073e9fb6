//! Single-field config updates gated on the authority.
//!
//! All three share the `UpdateConfig` account shape:
//!  0. `[WRITE]` Config PDA
//!  1. `[SIGNER]` Authority

use borsh::BorshSerialize;
use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::instructions::{pack_data, HookInstruction};

fn update_config_accounts(config: Pubkey, authority: Pubkey) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new(config, false),
        AccountMeta::new_readonly(authority, true),
    ]
}

/// Sets or clears the permanent delegate that bypasses every restriction.
pub struct SetPermanentDelegate {
    pub config: Pubkey,
    pub authority: Pubkey,
    /// `None` clears the delegate.
    pub delegate: Option<Pubkey>,
}

impl SetPermanentDelegate {
    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: crate::program::ID,
            accounts: update_config_accounts(self.config, self.authority),
            data: pack_data(HookInstruction::SetPermanentDelegate, &self.delegate),
        }
    }
}

/// Toggles blacklist enforcement on the transfer path.
pub struct SetBlacklistEnabled {
    pub config: Pubkey,
    pub authority: Pubkey,
    pub enabled: bool,
}

impl SetBlacklistEnabled {
    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: crate::program::ID,
            accounts: update_config_accounts(self.config, self.authority),
            data: pack_data(HookInstruction::SetBlacklistEnabled, &self.enabled),
        }
    }
}

/// Emergency pause: while set, every transfer through the hook fails.
pub struct SetPaused {
    pub config: Pubkey,
    pub authority: Pubkey,
    pub paused: bool,
}

impl SetPaused {
    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: crate::program::ID,
            accounts: update_config_accounts(self.config, self.authority),
            data: pack_data(HookInstruction::SetPaused, &self.paused),
        }
    }
}
