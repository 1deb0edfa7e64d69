//! Read-only queries
//!
//! Library-level views over deserialized engine state, used by off-chain
//! consumers and tests. State-only queries are total: an absent or empty
//! position yields zeros and a maximal health factor, never an error.

use solana_program::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey};

use crate::{
    solvency,
    state::{CollateralAssetConfig, EngineConfig, Position},
    valuation,
};

/// Collateral balance for an asset; zero for absent positions or
/// unregistered mints
pub fn collateral_balance_of(
    config: &EngineConfig,
    position: Option<&Position>,
    mint: &Pubkey,
) -> u128 {
    match (position, config.asset_index(mint)) {
        (Some(position), Some(index)) => position.collateral_balance(index),
        _ => 0,
    }
}

/// Outstanding debt; zero for absent positions
pub fn debt_of(position: Option<&Position>) -> u128 {
    position.map_or(0, |p| p.debt)
}

/// The registered collateral assets, in registry order
pub fn registered_assets(config: &EngineConfig) -> &[CollateralAssetConfig] {
    &config.assets
}

/// Total USD value of a position's collateral at live prices
pub fn collateral_value_of(
    config: &EngineConfig,
    position: Option<&Position>,
    feed_infos: &[AccountInfo],
    now: i64,
) -> Result<u128, ProgramError> {
    match position {
        Some(position) => {
            valuation::total_collateral_usd_value(config, position, feed_infos, now)
        }
        None => Ok(0),
    }
}

/// Health factor at live prices; `u128::MAX` for debt-free positions
pub fn health_factor_of(
    config: &EngineConfig,
    position: Option<&Position>,
    feed_infos: &[AccountInfo],
    now: i64,
) -> Result<u128, ProgramError> {
    let position = match position {
        Some(position) => position,
        None => return Ok(u128::MAX),
    };
    if position.debt == 0 {
        return Ok(u128::MAX);
    }
    let value = valuation::total_collateral_usd_value(config, position, feed_infos, now)?;
    solvency::health_factor(value, position.debt)
}
