//! USD valuation of collateral
//!
//! Converts ledger balances and oracle prices into USD-denominated totals
//! and back. All conversions multiply before dividing so no precision is
//! lost to early truncation.

use solana_program::{account_info::AccountInfo, program_error::ProgramError};

use crate::{
    constants::PRECISION,
    error::SynthEngineError,
    math::mul_div,
    oracle,
    state::{EngineConfig, Position},
};

/// USD value (18-decimal scale) of `amount` units of an asset priced at
/// `price` USD per unit.
pub fn usd_value(price: u128, amount: u128) -> Result<u128, ProgramError> {
    mul_div(price, amount, PRECISION)
}

/// Inverse of `usd_value`: the asset quantity worth `usd_amount`, used to
/// translate a covered debt amount into seized collateral.
pub fn asset_amount_for_usd(price: u128, usd_amount: u128) -> Result<u128, ProgramError> {
    if price == 0 {
        return Err(SynthEngineError::InvalidOraclePrice.into());
    }
    mul_div(usd_amount, PRECISION, price)
}

/// Total USD value of a position's collateral across the whole registry.
///
/// `feed_infos` must carry the registry's price feeds in registry order;
/// each account is checked against the asset's oracle binding. Assets with a
/// zero balance are skipped without touching their feed, so a dead feed for
/// an unheld asset cannot freeze an unrelated position.
pub fn total_collateral_usd_value(
    config: &EngineConfig,
    position: &Position,
    feed_infos: &[AccountInfo],
    now: i64,
) -> Result<u128, ProgramError> {
    if feed_infos.len() < config.asset_count() {
        return Err(ProgramError::NotEnoughAccountKeys);
    }

    let mut total: u128 = 0;
    for (index, asset) in config.assets.iter().enumerate() {
        let balance = position.collateral_balance(index);
        if balance == 0 {
            continue;
        }

        let feed_info = &feed_infos[index];
        if *feed_info.key != asset.price_feed {
            return Err(SynthEngineError::PriceFeedMismatch.into());
        }

        let reading = oracle::read_price(feed_info, now)?;
        let value = usd_value(reading.price, balance)?;
        total = total
            .checked_add(value)
            .ok_or(SynthEngineError::MathOverflow)?;
    }

    Ok(total)
}
