//! Tiered stablecoin mint presets and their validation predicates.
//!
//! A [`Preset`] is an immutable bundle of feature flags and fee parameters
//! describing one stablecoin configuration tier. Presets are constructed,
//! read, and validated; nothing here touches the chain.

pub mod fee;

pub use fee::{calculate_fee, fee_breakdown, FeeBreakdown};

/// Maximum transfer fee in basis points accepted by the hook program (10%).
pub const MAX_FEE_BASIS_POINTS: u16 = 1000;

/// Maximum mint decimals accepted by the presets.
pub const MAX_DECIMALS: u8 = 9;

/// Stablecoin feature tiers, ordered by capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(test, derive(strum_macros::EnumIter, strum_macros::Display))]
pub enum Tier {
    /// Plain mint, no extensions.
    Sss1,
    /// Transfer-hook enabled: fees, allowlist, blacklist enforcement.
    Sss2,
    /// Confidential-transfer enabled on top of the hook feature set.
    Sss3,
}

/// Token-2022 extension toggles carried by a preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    pub transfer_hook: bool,
    pub confidential_transfers: bool,
    pub permanent_delegate: bool,
    pub default_frozen: bool,
    pub allowlist: bool,
}

/// Fee parameters enforced by the transfer hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferFeeParams {
    /// Fee rate where 100 = 1%.
    pub basis_points: u16,
    /// Absolute cap on the fee taken from a single transfer.
    pub max_fee: u64,
    /// Transfers below this amount are rejected by the hook.
    pub min_transfer_amount: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresetError {
    FeeBasisPointsTooHigh,
    FeeWithoutTransferHook,
    AllowlistWithoutTransferHook,
    ConfidentialWithoutAuditor,
    DecimalsTooHigh,
    ArithmeticOverflow,
}

impl From<PresetError> for &'static str {
    fn from(value: PresetError) -> Self {
        match value {
            PresetError::FeeBasisPointsTooHigh => "Fee basis points above the 10% bound",
            PresetError::FeeWithoutTransferHook => "Fee parameters require the transfer hook",
            PresetError::AllowlistWithoutTransferHook => "Allowlist requires the transfer hook",
            PresetError::ConfidentialWithoutAuditor => {
                "Confidential transfers require an auditor key"
            }
            PresetError::DecimalsTooHigh => "Decimals above the supported bound",
            PresetError::ArithmeticOverflow => "Arithmetic overflow",
        }
    }
}

impl core::fmt::Display for PresetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(<&'static str>::from(*self))
    }
}

impl std::error::Error for PresetError {}

/// A named, immutable stablecoin configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub tier: Tier,
    pub decimals: u8,
    pub features: FeatureFlags,
    pub fee: Option<TransferFeeParams>,
    /// Auditor ElGamal-registration key for confidential tiers, raw bytes.
    pub auditor: Option<[u8; 32]>,
}

impl Preset {
    /// Basic tier: a plain Token-2022 mint with no extensions.
    pub const fn sss1() -> Self {
        Preset {
            name: "sss-1",
            tier: Tier::Sss1,
            decimals: 6,
            features: FeatureFlags {
                transfer_hook: false,
                confidential_transfers: false,
                permanent_delegate: false,
                default_frozen: false,
                allowlist: false,
            },
            fee: None,
            auditor: None,
        }
    }

    /// Hook tier: transfer fees and blacklist enforcement.
    pub const fn sss2(fee: TransferFeeParams) -> Self {
        Preset {
            name: "sss-2",
            tier: Tier::Sss2,
            decimals: 6,
            features: FeatureFlags {
                transfer_hook: true,
                confidential_transfers: false,
                permanent_delegate: false,
                default_frozen: false,
                allowlist: false,
            },
            fee: Some(fee),
            auditor: None,
        }
    }

    /// Confidential tier: hook feature set plus confidential transfers.
    pub const fn sss3(fee: TransferFeeParams, auditor: [u8; 32]) -> Self {
        Preset {
            name: "sss-3",
            tier: Tier::Sss3,
            decimals: 6,
            features: FeatureFlags {
                transfer_hook: true,
                confidential_transfers: true,
                permanent_delegate: false,
                default_frozen: false,
                allowlist: false,
            },
            fee: Some(fee),
            auditor: Some(auditor),
        }
    }

    /// The "private stablecoin" declaration: SSS-3 with allowlist gating,
    /// a permanent delegate for seizure, and accounts frozen by default
    /// until allowlisted.
    pub const fn private_stablecoin(fee: TransferFeeParams, auditor: [u8; 32]) -> Self {
        Preset {
            name: "private-stablecoin",
            tier: Tier::Sss3,
            decimals: 6,
            features: FeatureFlags {
                transfer_hook: true,
                confidential_transfers: true,
                permanent_delegate: true,
                default_frozen: true,
                allowlist: true,
            },
            fee: Some(fee),
            auditor: Some(auditor),
        }
    }

    /// Checks the numeric ranges and flag implications of this preset.
    pub fn validate(&self) -> Result<(), PresetError> {
        if self.decimals > MAX_DECIMALS {
            return Err(PresetError::DecimalsTooHigh);
        }

        if let Some(fee) = &self.fee {
            if !self.features.transfer_hook {
                return Err(PresetError::FeeWithoutTransferHook);
            }
            if fee.basis_points > MAX_FEE_BASIS_POINTS {
                return Err(PresetError::FeeBasisPointsTooHigh);
            }
        }

        if self.features.allowlist && !self.features.transfer_hook {
            return Err(PresetError::AllowlistWithoutTransferHook);
        }

        if self.features.confidential_transfers && self.auditor.is_none() {
            return Err(PresetError::ConfidentialWithoutAuditor);
        }

        Ok(())
    }
}
