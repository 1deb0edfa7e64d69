//! Price oracle adapter
//!
//! Wraps an external aggregator-style price feed account. Every valuation
//! re-reads the live feed; nothing is cached across operations. Readings are
//! untrusted input: the adapter rejects stale timestamps and non-positive
//! answers, and normalizes the feed's fixed-point scale to the engine's
//! 18-decimal scale.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{account_info::AccountInfo, msg, program_error::ProgramError};

use crate::{
    constants::{PRICE_FEED_DISCRIMINATOR, STALE_PRICE_TIMEOUT},
    error::SynthEngineError,
};

/// On-chain layout of an external price feed account.
///
/// Mirrors the aggregator's `latestRoundData` shape: a round identifier, the
/// signed answer at the feed's own decimal scale, and the round timestamps.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
pub struct PriceFeed {
    /// Discriminator
    pub discriminator: [u8; 8],
    /// Fixed-point scale of `answer` (8 for canonical USD feeds)
    pub decimals: u8,
    /// Round identifier
    pub round_id: u64,
    /// Latest answer, USD per whole asset unit at `decimals` scale
    pub answer: i128,
    /// Unix timestamp the round started
    pub started_at: i64,
    /// Unix timestamp of the latest answer
    pub updated_at: i64,
    /// Round in which the answer was computed
    pub answered_in_round: u64,
}

impl PriceFeed {
    pub const SIZE: usize = 8 + 1 + 8 + 16 + 8 + 8 + 8;

    pub fn new(decimals: u8, round_id: u64, answer: i128, updated_at: i64) -> Self {
        Self {
            discriminator: PRICE_FEED_DISCRIMINATOR,
            decimals,
            round_id,
            answer,
            started_at: updated_at,
            updated_at,
            answered_in_round: round_id,
        }
    }

    /// Validate the feed account shape
    pub fn validate(&self) -> Result<(), ProgramError> {
        if self.discriminator != PRICE_FEED_DISCRIMINATOR {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(())
    }
}

/// A validated, normalized price reading. Ephemeral; never persisted.
#[derive(Debug, Clone, Copy)]
pub struct PriceReading {
    /// USD per whole asset unit at `PRECISION` (18-decimal) scale
    pub price: u128,
    /// Unix timestamp of the reading
    pub updated_at: i64,
}

/// Read and validate the latest price from a feed account.
///
/// Fails closed on every suspicious reading: `StalePrice` once the answer is
/// `STALE_PRICE_TIMEOUT` old, `InvalidOraclePrice` for answers that are zero,
/// negative, or carry an unusable decimal scale.
pub fn read_price(feed_info: &AccountInfo, now: i64) -> Result<PriceReading, ProgramError> {
    let data = feed_info.try_borrow_data()?;
    let feed = PriceFeed::deserialize(&mut &data[..])
        .map_err(|_| ProgramError::InvalidAccountData)?;
    feed.validate()?;

    if feed.answer <= 0 {
        msg!("Oracle: non-positive answer rejected");
        return Err(SynthEngineError::InvalidOraclePrice.into());
    }

    let age = now.saturating_sub(feed.updated_at);
    if age >= STALE_PRICE_TIMEOUT {
        msg!("Oracle: price is {} seconds old", age);
        return Err(SynthEngineError::StalePrice.into());
    }

    if feed.decimals > 18 {
        msg!("Oracle: unsupported feed scale of {} decimals", feed.decimals);
        return Err(SynthEngineError::InvalidOraclePrice.into());
    }

    let scale = 10u128.pow((18 - feed.decimals) as u32);
    let price = (feed.answer as u128)
        .checked_mul(scale)
        .ok_or(SynthEngineError::MathOverflow)?;

    Ok(PriceReading {
        price,
        updated_at: feed.updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PRECISION;
    use solana_program::pubkey::Pubkey;

    fn feed_account_data(feed: &PriceFeed) -> Vec<u8> {
        let mut data = vec![0u8; PriceFeed::SIZE];
        feed.serialize(&mut &mut data[..]).unwrap();
        data
    }

    fn with_feed<R>(feed: &PriceFeed, f: impl FnOnce(&AccountInfo) -> R) -> R {
        let key = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut lamports = 0u64;
        let mut data = feed_account_data(feed);
        let info = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut data,
            &owner,
            false,
            0,
        );
        f(&info)
    }

    #[test]
    fn test_normalizes_eight_decimal_feed() {
        // $3500 at 8 decimals
        let feed = PriceFeed::new(8, 1, 3_500_00000000, 1_000_000);
        let reading = with_feed(&feed, |info| read_price(info, 1_000_100)).unwrap();
        assert_eq!(reading.price, 3_500 * PRECISION);
    }

    #[test]
    fn test_eighteen_decimal_feed_passes_through() {
        let feed = PriceFeed::new(18, 1, 2 * PRECISION as i128, 50);
        let reading = with_feed(&feed, |info| read_price(info, 100)).unwrap();
        assert_eq!(reading.price, 2 * PRECISION);
    }

    #[test]
    fn test_rejects_stale_price_at_timeout() {
        let feed = PriceFeed::new(8, 1, 100_00000000, 1_000);
        let err = with_feed(&feed, |info| read_price(info, 1_000 + STALE_PRICE_TIMEOUT))
            .unwrap_err();
        assert_eq!(err, SynthEngineError::StalePrice.into());
    }

    #[test]
    fn test_accepts_price_just_under_timeout() {
        let feed = PriceFeed::new(8, 1, 100_00000000, 1_000);
        let reading =
            with_feed(&feed, |info| read_price(info, 1_000 + STALE_PRICE_TIMEOUT - 1)).unwrap();
        assert_eq!(reading.updated_at, 1_000);
    }

    #[test]
    fn test_rejects_zero_and_negative_answers() {
        for answer in [0i128, -1, -100_00000000] {
            let feed = PriceFeed::new(8, 1, answer, 1_000);
            let err = with_feed(&feed, |info| read_price(info, 1_001)).unwrap_err();
            assert_eq!(err, SynthEngineError::InvalidOraclePrice.into());
        }
    }

    #[test]
    fn test_rejects_unusable_decimal_scale() {
        let feed = PriceFeed::new(19, 1, 1_000, 1_000);
        let err = with_feed(&feed, |info| read_price(info, 1_001)).unwrap_err();
        assert_eq!(err, SynthEngineError::InvalidOraclePrice.into());
    }

    #[test]
    fn test_rejects_wrong_discriminator() {
        let mut feed = PriceFeed::new(8, 1, 100_00000000, 1_000);
        feed.discriminator = [0; 8];
        let err = with_feed(&feed, |info| read_price(info, 1_001)).unwrap_err();
        assert_eq!(err, ProgramError::InvalidAccountData);
    }
}
