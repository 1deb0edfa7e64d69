//! Instruction definitions for the synth engine
//!
//! Amounts are `u128` at the engine's accounting scale; the token boundary
//! narrows them to the SPL `u64` range when assets actually move. Account
//! layouts are documented on each handler in `engine`.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

/// Instructions accepted by the engine
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
pub enum SynthEngineInstruction {
    /// Create the engine configuration and reentrancy guard.
    ///
    /// The two lists plus the trailing vault accounts form the collateral
    /// registry; mismatched lengths fail with `ConfigurationLengthMismatch`.
    InitializeEngine {
        collateral_mints: Vec<Pubkey>,
        price_feeds: Vec<Pubkey>,
    },

    /// Lock collateral in the asset's vault
    DepositCollateral { amount: u128 },

    /// Mint debt tokens against locked collateral
    MintDebt { amount: u128 },

    /// Deposit and mint in one operation
    DepositAndMint {
        deposit_amount: u128,
        mint_amount: u128,
    },

    /// Withdraw collateral, subject to the solvency check
    RedeemCollateral { amount: u128 },

    /// Repay debt by burning debt tokens
    BurnDebt { amount: u128 },

    /// Burn debt then redeem collateral in one operation
    RedeemForDebt {
        redeem_amount: u128,
        burn_amount: u128,
    },

    /// Repay part of an unhealthy position's debt in exchange for a bonus
    /// slice of its collateral
    Liquidate { debt_to_cover: u128 },
}
