//! Extracts hook events from fetched transaction metadata.
//!
//! Emitted events appear in the log stream as
//! `Program data: <base64 payload>` where the payload is the 8-byte event
//! discriminator followed by the borsh body. Lines that fail to decode, or
//! decode to an unknown discriminator, belong to other programs and are
//! skipped.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use solana_transaction_status::UiTransactionStatusMeta;
use sss_interface::events::HookEvent;

const PROGRAM_DATA_PREFIX: &str = "Program data: ";

/// Decodes every hook event in a transaction's log messages.
pub fn parse_events(meta: &UiTransactionStatusMeta) -> Vec<HookEvent> {
    parse_events_from_logs(
        meta.log_messages
            .as_ref()
            .unwrap_or(&vec![])
            .iter()
            .map(String::as_str),
    )
}

pub fn parse_events_from_logs<'a>(logs: impl IntoIterator<Item = &'a str>) -> Vec<HookEvent> {
    logs.into_iter()
        .filter_map(|log| log.strip_prefix(PROGRAM_DATA_PREFIX))
        .filter_map(|payload| STANDARD.decode(payload).ok())
        .filter_map(|bytes| HookEvent::decode(&bytes))
        .collect()
}
