//! Client-side utilities for the stablecoin standard.
//!
//! Transaction submission and error decoding, PDA derivations, preset-driven
//! mint planning, and event extraction from fetched transactions.

pub mod context;
pub mod events;
pub mod logs;
pub mod pda;
pub mod transactions;

pub use logs::LogColor;
