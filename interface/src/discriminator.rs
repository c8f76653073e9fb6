//! Anchor-convention 8-byte discriminators.
//!
//! The program derives them as `sha256("<namespace>:<name>")[..8]` with
//! namespace `global` for instructions, `account` for account types, and
//! `event` for emitted events. The constants scattered through this crate
//! are precomputed with [`instruction_discriminator`] and friends; tests
//! assert the two stay in sync.

use sha2::{Digest, Sha256};

pub const DISCRIMINATOR_LEN: usize = 8;

fn sighash(namespace: &str, name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(namespace.as_bytes());
    hasher.update(b":");
    hasher.update(name.as_bytes());
    let digest = hasher.finalize();

    let mut out = [0u8; DISCRIMINATOR_LEN];
    out.copy_from_slice(&digest[..DISCRIMINATOR_LEN]);
    out
}

/// Discriminator of an instruction, from its snake-case handler name.
pub fn instruction_discriminator(name: &str) -> [u8; DISCRIMINATOR_LEN] {
    sighash("global", name)
}

/// Discriminator of an account type, from its struct name.
pub fn account_discriminator(name: &str) -> [u8; DISCRIMINATOR_LEN] {
    sighash("account", name)
}

/// Discriminator of an event type, from its struct name.
pub fn event_discriminator(name: &str) -> [u8; DISCRIMINATOR_LEN] {
    sighash("event", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_instruction_discriminator() {
        // Spot check against the value extracted from the deployed program.
        assert_eq!(
            instruction_discriminator("initialize"),
            [175, 175, 109, 31, 13, 152, 155, 237]
        );
    }

    #[test]
    fn namespaces_disagree() {
        assert_ne!(
            instruction_discriminator("initialize"),
            account_discriminator("initialize"),
        );
        assert_ne!(
            account_discriminator("initialize"),
            event_discriminator("initialize"),
        );
    }
}
