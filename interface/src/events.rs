//! Events the program emits through `Program data:` log lines.
//!
//! An emitted payload is the 8-byte event discriminator followed by the
//! borsh-encoded struct, base64-encoded into the log message. This module
//! decodes the raw payload bytes; log scanning and base64 live client-side.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_pubkey::Pubkey;

use crate::{discriminator::DISCRIMINATOR_LEN, state::ListKind};

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TransferHookEvent {
    pub source: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub fee: u64,
    pub is_delegate_transfer: bool,
    pub timestamp: i64,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct FeeConfigUpdated {
    pub authority: Pubkey,
    pub transfer_fee_basis_points: u16,
    pub max_transfer_fee: u64,
    pub min_transfer_amount: u64,
    pub timestamp: i64,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ListEntryAdded {
    pub address: Pubkey,
    pub entry_type: ListKind,
    pub added_by: Pubkey,
    pub timestamp: i64,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ListEntryRemoved {
    pub address: Pubkey,
    pub entry_type: ListKind,
    pub removed_by: Pubkey,
    pub timestamp: i64,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PermanentDelegateUpdated {
    pub delegate: Option<Pubkey>,
    pub updated_by: Pubkey,
    pub timestamp: i64,
}

macro_rules! event_discriminators {
    ($($name:ident => $disc:expr;)*) => {
        $(
            impl $name {
                pub const DISCRIMINATOR: [u8; DISCRIMINATOR_LEN] = $disc;
            }
        )*

        /// Any decoded hook event.
        #[derive(Clone, Debug, PartialEq, Eq)]
        #[derive(strum_macros::Display)]
        pub enum HookEvent {
            $($name($name),)*
        }

        impl HookEvent {
            /// Decodes a raw event payload (discriminator + borsh body).
            ///
            /// Returns `None` for unknown discriminators or short payloads so
            /// callers can skip events emitted by other programs.
            pub fn decode(payload: &[u8]) -> Option<Self> {
                let (disc, mut body) = payload.split_at_checked(DISCRIMINATOR_LEN)?;
                match <[u8; DISCRIMINATOR_LEN]>::try_from(disc).ok()? {
                    $(
                        $name::DISCRIMINATOR => {
                            Some(HookEvent::$name($name::deserialize(&mut body).ok()?))
                        }
                    )*
                    _ => None,
                }
            }
        }
    };
}

event_discriminators! {
    TransferHookEvent => [134, 131, 72, 156, 18, 105, 177, 94];
    FeeConfigUpdated => [45, 50, 42, 173, 193, 67, 52, 244];
    ListEntryAdded => [254, 152, 108, 37, 231, 44, 230, 119];
    ListEntryRemoved => [157, 60, 145, 12, 47, 48, 254, 47];
    PermanentDelegateUpdated => [72, 88, 110, 48, 52, 177, 191, 171];
}

/// Encodes an event the way the program does, discriminator first. Test and
/// fixture helper for tooling that consumes [`HookEvent::decode`].
pub fn encode_event<E: BorshSerialize>(
    discriminator: [u8; DISCRIMINATOR_LEN],
    event: &E,
) -> Vec<u8> {
    let mut payload = discriminator.to_vec();
    event
        .serialize(&mut payload)
        .expect("Writing borsh to a Vec should not fail");
    payload
}
