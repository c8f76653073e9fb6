use borsh::BorshSerialize;
use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{
    instructions::{pack_data, HookInstruction},
    state::ListKind,
};

/// Args shared by the four list-management instructions. The target address
/// is followed by the list kind, which the account resolution reads to pick
/// the entry PDA's seed prefix.
#[derive(BorshSerialize)]
struct Args {
    address: Pubkey,
    kind: ListKind,
}

fn list_accounts(
    config: Pubkey,
    list_entry: Pubkey,
    authority: Pubkey,
) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new_readonly(config, false),
        AccountMeta::new(list_entry, false),
        AccountMeta::new(authority, true),
        AccountMeta::new_readonly(solana_system_interface::program::ID, false),
    ]
}

/// Creates an allowlist or blacklist entry for `address`. Authority only.
///
/// ### Accounts
///  0. `[READ]` Config PDA
///  1. `[WRITE]` List entry PDA, `[kind.seed(), authority, address]`
///  2. `[WRITE, SIGNER]` Authority, pays for the entry
///  3. `[READ]` System program
pub struct AddToList {
    pub config: Pubkey,
    pub list_entry: Pubkey,
    pub authority: Pubkey,
    /// The wallet being listed.
    pub address: Pubkey,
    pub kind: ListKind,
}

impl AddToList {
    pub fn instruction(&self) -> Instruction {
        let tag = match self.kind {
            ListKind::Whitelist => HookInstruction::AddWhitelist,
            ListKind::Blacklist => HookInstruction::AddBlacklist,
        };
        Instruction {
            program_id: crate::program::ID,
            accounts: list_accounts(self.config, self.list_entry, self.authority),
            data: pack_data(
                tag,
                &Args {
                    address: self.address,
                    kind: self.kind,
                },
            ),
        }
    }
}

/// Removes a list entry, returning its rent to the authority.
///
/// ### Accounts
///  0. `[READ]` Config PDA
///  1. `[WRITE]` List entry PDA
///  2. `[WRITE, SIGNER]` Authority, receives the rent
///  3. `[READ]` System program
pub struct RemoveFromList {
    pub config: Pubkey,
    pub list_entry: Pubkey,
    pub authority: Pubkey,
    pub address: Pubkey,
    pub kind: ListKind,
}

impl RemoveFromList {
    pub fn instruction(&self) -> Instruction {
        let tag = match self.kind {
            ListKind::Whitelist => HookInstruction::RemoveWhitelist,
            ListKind::Blacklist => HookInstruction::RemoveBlacklist,
        };
        Instruction {
            program_id: crate::program::ID,
            accounts: list_accounts(self.config, self.list_entry, self.authority),
            data: pack_data(
                tag,
                &Args {
                    address: self.address,
                    kind: self.kind,
                },
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_selects_discriminator() {
        let keys = (
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        );

        for (kind, add_tag, remove_tag) in [
            (
                ListKind::Whitelist,
                HookInstruction::AddWhitelist,
                HookInstruction::RemoveWhitelist,
            ),
            (
                ListKind::Blacklist,
                HookInstruction::AddBlacklist,
                HookInstruction::RemoveBlacklist,
            ),
        ] {
            let add = AddToList {
                config: keys.0,
                list_entry: keys.1,
                authority: keys.2,
                address: keys.3,
                kind,
            }
            .instruction();
            assert_eq!(add.data[..8], add_tag.discriminator());

            let remove = RemoveFromList {
                config: keys.0,
                list_entry: keys.1,
                authority: keys.2,
                address: keys.3,
                kind,
            }
            .instruction();
            assert_eq!(remove.data[..8], remove_tag.discriminator());
        }
    }

    #[test]
    fn data_layout() {
        let address = Pubkey::new_unique();
        let ix = AddToList {
            config: Pubkey::new_unique(),
            list_entry: Pubkey::new_unique(),
            authority: Pubkey::new_unique(),
            address,
            kind: ListKind::Blacklist,
        }
        .instruction();

        // Data layout:
        //   - [0..8]: discriminator
        //   - [8..40]: target address
        //   - [40]: list kind
        assert_eq!(ix.data.len(), 41);
        assert_eq!(ix.data[8..40], address.to_bytes());
        assert_eq!(ix.data[40], ListKind::Blacklist as u8);
    }

    #[test]
    fn authority_is_the_only_signer() {
        let authority = Pubkey::new_unique();
        let ix = RemoveFromList {
            config: Pubkey::new_unique(),
            list_entry: Pubkey::new_unique(),
            authority,
            address: Pubkey::new_unique(),
            kind: ListKind::Whitelist,
        }
        .instruction();

        let signers: Vec<_> = ix.accounts.iter().filter(|m| m.is_signer).collect();
        assert_eq!(signers.len(), 1);
        assert_eq!(signers[0].pubkey, authority);
    }
}
