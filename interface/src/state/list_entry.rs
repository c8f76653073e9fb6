//! Allowlist/blacklist entry accounts.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_pubkey::Pubkey;

use crate::{
    discriminator::DISCRIMINATOR_LEN,
    state::{strip_discriminator, DecodeError},
    BLACKLIST_SEED, WHITELIST_SEED,
};

/// Which list an entry belongs to. The discriminant doubles as the borsh
/// encoding of the program's `ListType` argument.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
#[derive(strum_macros::Display)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum ListKind {
    Whitelist,
    Blacklist,
}

impl ListKind {
    /// The PDA seed prefix for entries of this kind.
    pub fn seed(self) -> &'static [u8] {
        match self {
            ListKind::Whitelist => WHITELIST_SEED,
            ListKind::Blacklist => BLACKLIST_SEED,
        }
    }
}

/// Entry state at the `[kind.seed(), authority, address]` PDA.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ListEntry {
    pub address: Pubkey,
    pub is_active: bool,
    pub entry_type: ListKind,
    pub created_at: i64,
    pub bump: u8,
}

impl ListEntry {
    pub const DISCRIMINATOR: [u8; DISCRIMINATOR_LEN] = [93, 206, 4, 61, 118, 228, 176, 120];

    pub const SIZE: usize = 32 + 1 + 1 + 8 + 1;
    pub const SPACE: usize = DISCRIMINATOR_LEN + Self::SIZE;

    pub fn try_from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        let mut payload = strip_discriminator(data, &Self::DISCRIMINATOR)?;
        Self::deserialize(&mut payload).map_err(|_| DecodeError::Malformed)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::discriminator::account_discriminator;

    #[test]
    fn discriminator_matches_account_name() {
        assert_eq!(ListEntry::DISCRIMINATOR, account_discriminator("ListEntry"));
    }

    #[test]
    fn seed_prefixes_are_distinct() {
        let seeds: Vec<&[u8]> = ListKind::iter().map(ListKind::seed).collect();
        assert_eq!(seeds, vec![&b"whitelist"[..], &b"blacklist"[..]]);
    }

    #[test]
    fn entry_fits_allocation() {
        let entry = ListEntry {
            address: Pubkey::new_unique(),
            is_active: true,
            entry_type: ListKind::Blacklist,
            created_at: 1_700_000_000,
            bump: 255,
        };
        let encoded = borsh::to_vec(&entry).unwrap();
        assert_eq!(encoded.len(), ListEntry::SIZE);

        let mut data = ListEntry::DISCRIMINATOR.to_vec();
        data.extend_from_slice(&encoded);
        assert_eq!(ListEntry::try_from_bytes(&data).unwrap(), entry);
    }
}
