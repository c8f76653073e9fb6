//! PDA helpers for deriving hook program addresses.

use solana_sdk::pubkey::Pubkey;
use sss_interface::{state::ListKind, CONFIG_SEED};

pub fn find_config_address(authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[CONFIG_SEED, authority.as_ref()],
        &sss_interface::program::ID,
    )
}

pub fn find_list_entry_address(
    kind: ListKind,
    authority: &Pubkey,
    address: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[kind.seed(), authority.as_ref(), address.as_ref()],
        &sss_interface::program::ID,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivations_are_deterministic() {
        let authority = Pubkey::new_unique();
        assert_eq!(find_config_address(&authority), find_config_address(&authority));
    }

    #[test]
    fn list_kinds_derive_distinct_entries() {
        let authority = Pubkey::new_unique();
        let address = Pubkey::new_unique();

        let (whitelist, _) = find_list_entry_address(ListKind::Whitelist, &authority, &address);
        let (blacklist, _) = find_list_entry_address(ListKind::Blacklist, &authority, &address);
        assert_ne!(whitelist, blacklist);
    }

    #[test]
    fn config_depends_on_authority() {
        let (a, _) = find_config_address(&Pubkey::new_unique());
        let (b, _) = find_config_address(&Pubkey::new_unique());
        assert_ne!(a, b);
    }
}
