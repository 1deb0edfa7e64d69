//! Durable engine state
//!
//! `EngineConfig` holds the immutable collateral registry; `Position` is the
//! per-user ledger row. Both are borsh-serialized program accounts with an
//! 8-byte discriminator checked on every load.

pub mod config;
pub mod position;

pub use config::{CollateralAssetConfig, EngineConfig};
pub use position::Position;

/// True when an account buffer has never been written (zeroed discriminator)
pub fn is_uninitialized(data: &[u8]) -> bool {
    data.len() < 8 || data[..8] == [0u8; 8]
}
