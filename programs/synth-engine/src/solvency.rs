//! Health factor and solvency policy
//!
//! A position is solvent while its threshold-adjusted collateral value stays
//! at or above its debt. Per-user enforcement of this policy is what keeps
//! the engine's aggregate collateral worth at least the outstanding debt
//! supply.

use solana_program::program_error::ProgramError;

use crate::{
    constants::{LIQUIDATION_THRESHOLD, MIN_HEALTH_FACTOR, PERCENT_DIVISOR, PRECISION},
    error::SynthEngineError,
    math::mul_div,
};

/// Health factor at `PRECISION` scale: threshold-adjusted collateral value
/// over debt. A debt-free position is maximally healthy regardless of its
/// collateral, never a division error.
pub fn health_factor(total_collateral_usd: u128, debt: u128) -> Result<u128, ProgramError> {
    if debt == 0 {
        return Ok(u128::MAX);
    }
    let adjusted = mul_div(total_collateral_usd, LIQUIDATION_THRESHOLD, PERCENT_DIVISOR)?;
    mul_div(adjusted, PRECISION, debt)
}

/// True when the position may be liquidated
pub fn is_liquidatable(health_factor: u128) -> bool {
    health_factor < MIN_HEALTH_FACTOR
}

/// Fails with `HealthFactorBroken` when the health factor is below minimum
pub fn assert_solvent(health_factor: u128) -> Result<(), ProgramError> {
    if health_factor < MIN_HEALTH_FACTOR {
        return Err(SynthEngineError::HealthFactorBroken.into());
    }
    Ok(())
}
