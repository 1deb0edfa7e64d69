//! Integer math for the valuation engine
//!
//! All engine arithmetic is fixed-point integer at 18 decimals. Products of
//! two wad-scaled values overflow `u128`, so `mul_div` routes through a
//! 256-bit intermediate.

pub mod u256;

use solana_program::program_error::ProgramError;

use crate::error::SynthEngineError;
use u256::U256;

/// Computes `a * b / denominator` with a 256-bit intermediate product.
///
/// Multiplies before dividing, so no precision is lost to an early
/// truncation. Fails with `DivisionByZero` for a zero denominator and
/// `MathOverflow` when the quotient does not fit in a `u128`.
pub fn mul_div(a: u128, b: u128, denominator: u128) -> Result<u128, ProgramError> {
    if denominator == 0 {
        return Err(SynthEngineError::DivisionByZero.into());
    }

    let product = U256::mul_u128(a, b);
    let (quotient, _remainder) = product.div_rem_u128(denominator);

    quotient
        .to_u128()
        .ok_or_else(|| SynthEngineError::MathOverflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PRECISION;

    #[test]
    fn test_mul_div_small() {
        assert_eq!(mul_div(6, 7, 2).unwrap(), 21);
        assert_eq!(mul_div(0, 1_000_000, 3).unwrap(), 0);
    }

    #[test]
    fn test_mul_div_wad_product_exceeds_u128() {
        // 15e18 units at $3460 (wad price) exceeds u128 as a raw product
        let amount = 15 * PRECISION;
        let price = 3460 * PRECISION;
        let usd = mul_div(price, amount, PRECISION).unwrap();
        assert_eq!(usd, 51_900 * PRECISION);
    }

    #[test]
    fn test_mul_div_truncates_toward_zero() {
        assert_eq!(mul_div(10, 1, 3).unwrap(), 3);
        assert_eq!(mul_div(2, 1, 3).unwrap(), 0);
    }

    #[test]
    fn test_mul_div_division_by_zero() {
        assert_eq!(
            mul_div(1, 1, 0).unwrap_err(),
            SynthEngineError::DivisionByZero.into()
        );
    }

    #[test]
    fn test_mul_div_overflow() {
        assert_eq!(
            mul_div(u128::MAX, u128::MAX, 1).unwrap_err(),
            SynthEngineError::MathOverflow.into()
        );
    }

    #[test]
    fn test_mul_div_max_identity() {
        assert_eq!(mul_div(u128::MAX, 1, 1).unwrap(), u128::MAX);
        assert_eq!(mul_div(u128::MAX, u128::MAX, u128::MAX).unwrap(), u128::MAX);
    }
}
