//! Synth Engine - Native Solana Program
//!
//! Over-collateralized synthetic-debt accounting engine. Users lock approved
//! collateral assets in program vaults, mint a synthetic debt token against
//! that collateral up to a safety threshold, and later repay (burn) debt to
//! unlock collateral. Undercollateralized positions can be liquidated by any
//! third party in exchange for a bonus slice of the position's collateral.

#[cfg(not(feature = "no-entrypoint"))]
pub mod entrypoint;

pub mod constants;
pub mod error;
pub mod instruction;
pub mod processor;

// Core modules
pub mod math;
pub mod oracle;
pub mod pda;
pub mod solvency;
pub mod state;
pub mod token;
pub mod validation;
pub mod valuation;

// Operation handlers
pub mod engine;

// Event logging
pub mod events;

// Security modules
pub mod security;

pub use error::SynthEngineError;

solana_program::declare_id!("ESL7wZ1YTTQwqM8JEsXCpvc9JMfHr3eGfonM9YCNnh5D");
