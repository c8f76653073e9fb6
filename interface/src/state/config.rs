//! The singleton hook configuration account.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_pubkey::Pubkey;
use static_assertions::const_assert;

use crate::{
    discriminator::DISCRIMINATOR_LEN,
    state::{strip_discriminator, DecodeError},
};

/// Configuration state at the `["config", authority]` PDA.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TransferHookConfig {
    pub authority: Pubkey,
    /// Fee rate where 100 = 1%.
    pub transfer_fee_basis_points: u16,
    pub max_transfer_fee: u64,
    pub min_transfer_amount: u64,
    pub total_fees_collected: u64,
    pub bump: u8,
    pub is_paused: bool,
    /// Super-admin that bypasses every restriction; used for seizure.
    pub permanent_delegate: Option<Pubkey>,
    pub blacklist_enabled: bool,
}

impl TransferHookConfig {
    pub const DISCRIMINATOR: [u8; DISCRIMINATOR_LEN] = [168, 122, 191, 221, 204, 201, 149, 88];

    /// Upper bound on the serialized struct, including spare room the
    /// program allocates for future fields.
    pub const SIZE: usize = 32 + 2 + 8 + 8 + 8 + 1 + 1 + 36 + 1 + 64;

    /// Total account allocation: discriminator plus [`Self::SIZE`].
    pub const SPACE: usize = DISCRIMINATOR_LEN + Self::SIZE;

    /// Decodes account data, validating the discriminator. Trailing
    /// padding after the struct is ignored.
    pub fn try_from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        let mut payload = strip_discriminator(data, &Self::DISCRIMINATOR)?;
        Self::deserialize(&mut payload).map_err(|_| DecodeError::Malformed)
    }
}

// The largest possible serialization (delegate set) must fit the allocation.
const_assert!(32 + 2 + 8 + 8 + 8 + 1 + 1 + 33 + 1 <= TransferHookConfig::SIZE);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discriminator::account_discriminator;

    fn sample() -> TransferHookConfig {
        TransferHookConfig {
            authority: Pubkey::new_unique(),
            transfer_fee_basis_points: 50,
            max_transfer_fee: 1_000_000,
            min_transfer_amount: 1,
            total_fees_collected: 0,
            bump: 254,
            is_paused: false,
            permanent_delegate: None,
            blacklist_enabled: true,
        }
    }

    fn account_data(config: &TransferHookConfig) -> Vec<u8> {
        let mut data = TransferHookConfig::DISCRIMINATOR.to_vec();
        config.serialize(&mut data).unwrap();
        // Accounts are allocated with spare space; pad like the chain does.
        data.resize(TransferHookConfig::SPACE, 0);
        data
    }

    #[test]
    fn discriminator_matches_account_name() {
        assert_eq!(
            TransferHookConfig::DISCRIMINATOR,
            account_discriminator("TransferHookConfig"),
        );
    }

    #[test]
    fn decodes_padded_account_data() {
        let config = sample();
        let decoded = TransferHookConfig::try_from_bytes(&account_data(&config)).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn decodes_delegate_when_set() {
        let delegate = Pubkey::new_unique();
        let mut config = sample();
        config.permanent_delegate = Some(delegate);

        let decoded = TransferHookConfig::try_from_bytes(&account_data(&config)).unwrap();
        assert_eq!(decoded.permanent_delegate, Some(delegate));
    }

    #[test]
    fn rejects_wrong_discriminator() {
        let mut data = account_data(&sample());
        data[0] ^= 0xff;
        assert_eq!(
            TransferHookConfig::try_from_bytes(&data),
            Err(DecodeError::WrongDiscriminator),
        );
    }

    #[test]
    fn rejects_truncated_data() {
        assert_eq!(
            TransferHookConfig::try_from_bytes(&[1, 2, 3]),
            Err(DecodeError::TooShort),
        );

        let data = account_data(&sample());
        // Discriminator intact but the struct cut off mid-field.
        assert_eq!(
            TransferHookConfig::try_from_bytes(&data[..20]),
            Err(DecodeError::Malformed),
        );
    }
}
