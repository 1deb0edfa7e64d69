//! Global constants for the synth engine
//!
//! Central location for all engine-wide scales, thresholds, and seeds

/// Internal fixed-point scale for USD values (18 decimals)
pub const PRECISION: u128 = 1_000_000_000_000_000_000;

/// Canonical price-feed scale (Chainlink-style 8 decimals)
pub const FEED_DECIMALS: u8 = 8;

/// Percent of collateral value that counts toward solvency (50 = 200%
/// collateralization required at the margin)
pub const LIQUIDATION_THRESHOLD: u128 = 50;

/// Divisor for percentage constants
pub const PERCENT_DIVISOR: u128 = 100;

/// Bonus collateral paid to a liquidator, in percent of the covered debt
pub const LIQUIDATION_BONUS: u128 = 10;

/// Minimum health factor (1.0 at `PRECISION` scale)
pub const MIN_HEALTH_FACTOR: u128 = PRECISION;

/// Maximum oracle price age in seconds (3 hours). A feed at or past this age
/// freezes every valuation-dependent operation instead of mispricing.
pub const STALE_PRICE_TIMEOUT: i64 = 10_800;

/// Upper bound on the collateral registry
pub const MAX_COLLATERAL_ASSETS: usize = 16;

/// Engine config PDA seed
pub const CONFIG_SEED: &[u8] = b"engine_config";

/// Position PDA seed (suffixed with the owner key)
pub const POSITION_SEED: &[u8] = b"position";

/// Vault authority PDA seed; this PDA owns the collateral vaults and is the
/// sole mint authority of the debt token
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";

/// Reentrancy guard PDA seed
pub const GUARD_SEED: &[u8] = b"reentrancy_guard";

/// Account discriminators
pub const CONFIG_DISCRIMINATOR: [u8; 8] = [83, 89, 78, 67, 70, 71, 86, 49]; // "SYNCFGV1"
pub const POSITION_DISCRIMINATOR: [u8; 8] = [83, 89, 78, 80, 79, 83, 86, 49]; // "SYNPOSV1"
pub const GUARD_DISCRIMINATOR: [u8; 8] = [83, 89, 78, 71, 82, 68, 86, 49]; // "SYNGRDV1"
pub const PRICE_FEED_DISCRIMINATOR: [u8; 8] = [80, 82, 67, 70, 69, 69, 68, 49]; // "PRCFEED1"
