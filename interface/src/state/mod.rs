//! Account state layouts.
//!
//! On-chain account data is the 8-byte account discriminator followed by the
//! borsh-encoded struct, then zero padding up to the allocated space.

mod config;
mod list_entry;

pub use config::TransferHookConfig;
pub use list_entry::{ListEntry, ListKind};

use crate::discriminator::DISCRIMINATOR_LEN;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeError {
    TooShort,
    WrongDiscriminator,
    Malformed,
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for DecodeError {}

/// Validates the leading discriminator and returns the borsh payload.
pub(crate) fn strip_discriminator<'a>(
    data: &'a [u8],
    expected: &[u8; DISCRIMINATOR_LEN],
) -> Result<&'a [u8], DecodeError> {
    if data.len() < DISCRIMINATOR_LEN {
        return Err(DecodeError::TooShort);
    }
    if &data[..DISCRIMINATOR_LEN] != expected {
        return Err(DecodeError::WrongDiscriminator);
    }
    Ok(&data[DISCRIMINATOR_LEN..])
}
