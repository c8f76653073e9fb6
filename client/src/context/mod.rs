//! Preset-driven instruction planning on top of the SPL interface crates.

mod mint;

pub use mint::{MintKeys, MintPlan};

use presets::Preset;
use solana_instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use sss_interface::instructions::Initialize;

use crate::pda;

/// The hook `initialize` instruction a preset calls for, or `None` when the
/// preset has no transfer hook.
pub fn hook_initialize(preset: &Preset, authority: &Pubkey) -> Option<Instruction> {
    let fee = preset.fee.as_ref()?;
    if !preset.features.transfer_hook {
        return None;
    }

    let (config, _bump) = pda::find_config_address(authority);
    Some(
        Initialize {
            config,
            authority: *authority,
            transfer_fee_basis_points: fee.basis_points,
            max_transfer_fee: fee.max_fee,
        }
        .instruction(),
    )
}
