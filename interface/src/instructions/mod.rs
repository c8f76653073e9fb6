use borsh::BorshSerialize;

use crate::discriminator::DISCRIMINATOR_LEN;

pub mod close_config;
pub mod execute_transfer_hook;
pub mod initialize;
pub mod manage_list;
pub mod toggles;
pub mod update_fee_config;

pub use close_config::CloseConfig;
pub use execute_transfer_hook::ExecuteTransferHook;
pub use initialize::Initialize;
pub use manage_list::{AddToList, RemoveFromList};
pub use toggles::{SetBlacklistEnabled, SetPaused, SetPermanentDelegate};
pub use update_fee_config::UpdateFeeConfig;

/// Every instruction the deployed hook program exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[derive(strum_macros::Display)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum HookInstruction {
    Initialize,
    ExecuteTransferHook,
    UpdateFeeConfig,
    AddWhitelist,
    RemoveWhitelist,
    AddBlacklist,
    RemoveBlacklist,
    SetPermanentDelegate,
    SetBlacklistEnabled,
    SetPaused,
    CloseConfig,
}

impl HookInstruction {
    const ALL: [HookInstruction; 11] = [
        HookInstruction::Initialize,
        HookInstruction::ExecuteTransferHook,
        HookInstruction::UpdateFeeConfig,
        HookInstruction::AddWhitelist,
        HookInstruction::RemoveWhitelist,
        HookInstruction::AddBlacklist,
        HookInstruction::RemoveBlacklist,
        HookInstruction::SetPermanentDelegate,
        HookInstruction::SetBlacklistEnabled,
        HookInstruction::SetPaused,
        HookInstruction::CloseConfig,
    ];

    /// The snake-case handler name the discriminator is derived from.
    pub fn name(self) -> &'static str {
        match self {
            HookInstruction::Initialize => "initialize",
            HookInstruction::ExecuteTransferHook => "execute_transfer_hook",
            HookInstruction::UpdateFeeConfig => "update_fee_config",
            HookInstruction::AddWhitelist => "add_whitelist",
            HookInstruction::RemoveWhitelist => "remove_whitelist",
            HookInstruction::AddBlacklist => "add_blacklist",
            HookInstruction::RemoveBlacklist => "remove_blacklist",
            HookInstruction::SetPermanentDelegate => "set_permanent_delegate",
            HookInstruction::SetBlacklistEnabled => "set_blacklist_enabled",
            HookInstruction::SetPaused => "set_paused",
            HookInstruction::CloseConfig => "close_config",
        }
    }

    pub fn discriminator(self) -> [u8; DISCRIMINATOR_LEN] {
        match self {
            HookInstruction::Initialize => [175, 175, 109, 31, 13, 152, 155, 237],
            HookInstruction::ExecuteTransferHook => [120, 157, 67, 141, 88, 144, 143, 220],
            HookInstruction::UpdateFeeConfig => [104, 184, 103, 242, 88, 151, 107, 20],
            HookInstruction::AddWhitelist => [215, 46, 143, 176, 108, 113, 24, 1],
            HookInstruction::RemoveWhitelist => [148, 244, 73, 234, 131, 55, 247, 90],
            HookInstruction::AddBlacklist => [217, 13, 249, 96, 5, 121, 73, 110],
            HookInstruction::RemoveBlacklist => [39, 82, 241, 133, 41, 2, 161, 21],
            HookInstruction::SetPermanentDelegate => [48, 105, 136, 107, 21, 76, 203, 115],
            HookInstruction::SetBlacklistEnabled => [216, 12, 64, 199, 15, 191, 89, 228],
            HookInstruction::SetPaused => [91, 60, 125, 192, 176, 225, 166, 218],
            HookInstruction::CloseConfig => [145, 9, 72, 157, 95, 125, 61, 85],
        }
    }

    /// Identifies the instruction from raw instruction data, if the leading
    /// 8 bytes match a known discriminator.
    pub fn try_from_data(data: &[u8]) -> Option<Self> {
        let disc: [u8; DISCRIMINATOR_LEN] = data.get(..DISCRIMINATOR_LEN)?.try_into().ok()?;
        Self::ALL.into_iter().find(|ix| ix.discriminator() == disc)
    }
}

/// Instruction data: the 8-byte discriminator followed by borsh args.
pub(crate) fn pack_data(tag: HookInstruction, args: &impl BorshSerialize) -> Vec<u8> {
    let mut data = tag.discriminator().to_vec();
    args.serialize(&mut data)
        .expect("Writing borsh to a Vec should not fail");
    data
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;
    use crate::discriminator::instruction_discriminator;

    #[test]
    fn discriminators_derive_from_names() {
        for ix in HookInstruction::iter() {
            assert_eq!(
                ix.discriminator(),
                instruction_discriminator(ix.name()),
                "{ix}",
            );
        }
    }

    #[test]
    fn discriminators_are_unique() {
        let set = HookInstruction::iter()
            .map(HookInstruction::discriminator)
            .collect::<HashSet<_>>();
        assert_eq!(set.len(), HookInstruction::ALL.len());
    }

    #[test]
    fn try_from_data_round_trips() {
        for ix in HookInstruction::iter() {
            let mut data = ix.discriminator().to_vec();
            // Trailing args must not affect identification.
            data.extend_from_slice(&[0xaa; 16]);
            assert_eq!(HookInstruction::try_from_data(&data), Some(ix));
        }

        assert_eq!(HookInstruction::try_from_data(&[0u8; 8]), None);
        assert_eq!(HookInstruction::try_from_data(&[1, 2, 3]), None);
    }
}
