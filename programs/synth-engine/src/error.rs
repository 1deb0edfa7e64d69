//! Error types for the synth engine

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use solana_program::{
    decode_error::DecodeError,
    msg,
    program_error::{PrintProgramError, ProgramError},
};
use thiserror::Error;

/// Custom error type for the synth engine
#[derive(Clone, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum SynthEngineError {
    // Input validation errors (7100-7109)
    #[error("Amount must be greater than zero")]
    AmountMustBeGreaterThanZero = 7100,

    #[error("Collateral asset is not registered")]
    UnregisteredCollateralAsset = 7101,

    #[error("Configuration lists differ in length")]
    ConfigurationLengthMismatch = 7102,

    #[error("Collateral asset listed twice")]
    DuplicateCollateralAsset = 7103,

    #[error("Collateral registry full")]
    CollateralRegistryFull = 7104,

    #[error("Amount exceeds the token layer's range")]
    AmountTooLarge = 7105,

    // Insufficient-resource errors (7110-7119)
    #[error("Insufficient collateral balance")]
    InsufficientCollateralBalance = 7110,

    #[error("Burn amount exceeds outstanding debt")]
    BurnAmountExceedsBalance = 7111,

    // External-call errors (7120-7129)
    #[error("Collateral transfer failed")]
    TransferFailed = 7120,

    #[error("Debt token mint failed")]
    DebtTokenMintFailed = 7121,

    #[error("Debt token burn failed")]
    DebtTokenBurnFailed = 7122,

    // Solvency errors (7130-7139)
    #[error("Health factor below minimum")]
    HealthFactorBroken = 7130,

    #[error("Position is healthy - cannot liquidate")]
    HealthFactorOk = 7131,

    #[error("Liquidation did not improve health factor")]
    HealthFactorNotImproved = 7132,

    // Stale-data errors (7140-7149)
    #[error("Stale price data")]
    StalePrice = 7140,

    #[error("Invalid oracle price")]
    InvalidOraclePrice = 7141,

    #[error("Price feed account does not match the asset's oracle binding")]
    PriceFeedMismatch = 7142,

    // State and plumbing errors (7150-7159)
    #[error("Already initialized")]
    AlreadyInitialized = 7150,

    #[error("Engine not initialized")]
    NotInitialized = 7151,

    #[error("Unauthorized access")]
    UnauthorizedAccess = 7152,

    #[error("Math overflow")]
    MathOverflow = 7153,

    #[error("Division by zero")]
    DivisionByZero = 7154,

    // Reentrancy guard errors (7160-7169)
    #[error("Reentrancy detected")]
    ReentrancyDetected = 7160,

    #[error("Invalid guard state")]
    InvalidGuardState = 7161,
}

impl PrintProgramError for SynthEngineError {
    fn print<E>(&self)
    where
        E: 'static + std::error::Error + DecodeError<E> + PrintProgramError + FromPrimitive,
    {
        msg!("Synth Engine Error: {}", self);
    }
}

impl From<SynthEngineError> for ProgramError {
    fn from(e: SynthEngineError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl<T> DecodeError<T> for SynthEngineError {
    fn type_of() -> &'static str {
        "SynthEngineError"
    }
}

/// Helper function to log and return errors
pub fn error_msg<T>(error: SynthEngineError, message: &str) -> Result<T, ProgramError> {
    msg!("Error: {} - {}", error, message);
    Err(error.into())
}
