//! The hook program's custom error table.

/// Anchor custom error codes start at this offset.
const ERROR_CODE_BASE: u32 = 6000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
#[derive(strum_macros::FromRepr, strum_macros::Display)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum HookError {
    FeeTooHigh,
    InvalidAuthority,
    AmountTooLow,
    ContractPaused,
    AddressBlacklisted,
}

impl HookError {
    /// The on-chain custom error code for this variant.
    pub fn code(self) -> u32 {
        ERROR_CODE_BASE + self as u32
    }

    /// Maps an `InstructionError::Custom` code back to a variant.
    pub fn from_code(code: u32) -> Option<Self> {
        let repr = code.checked_sub(ERROR_CODE_BASE)?;
        Self::from_repr(u8::try_from(repr).ok()?)
    }
}

impl From<HookError> for &'static str {
    fn from(value: HookError) -> Self {
        match value {
            HookError::FeeTooHigh => "Fee amount too high (max 10%)",
            HookError::InvalidAuthority => "Invalid authority",
            HookError::AmountTooLow => "Transfer amount too low",
            HookError::ContractPaused => "Contract is paused",
            HookError::AddressBlacklisted => "Address is blacklisted",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn code_round_trip_exhaustive() {
        for variant in HookError::iter() {
            assert_eq!(HookError::from_code(variant.code()), Some(variant));
        }
    }

    #[test]
    fn unknown_codes_rejected() {
        let valids = HookError::iter().map(HookError::code).collect::<HashSet<_>>();

        for code in 0..7000u32 {
            if valids.contains(&code) {
                assert!(HookError::from_code(code).is_some());
            } else {
                assert!(HookError::from_code(code).is_none(), "code {code}");
            }
        }
    }

    #[test]
    fn codes_start_at_anchor_base() {
        assert_eq!(HookError::FeeTooHigh.code(), 6000);
        assert_eq!(HookError::AddressBlacklisted.code(), 6004);
    }
}
