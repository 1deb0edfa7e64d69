//! Event logging
//!
//! Observer-only side channel for external indexers. Events are borsh
//! structs logged through `msg!` with a type tag and a bs58 payload; no
//! engine behavior depends on them.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{msg, pubkey::Pubkey};

/// Event type discriminator
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq)]
pub enum EventType {
    EngineInitialized = 1,

    // Collateral events
    CollateralDeposited = 10,
    CollateralRedeemed = 11,

    // Debt events
    DebtMinted = 20,
    DebtBurned = 21,

    // Liquidation events
    PositionLiquidated = 30,
}

/// Base event trait
pub trait Event: BorshSerialize {
    fn event_type() -> EventType;

    fn emit(&self) {
        msg!("SYNTH_ENGINE_EVENT");
        msg!("TYPE:{:?}", Self::event_type());

        if let Ok(data) = self.try_to_vec() {
            msg!("DATA:{}", bs58::encode(&data).into_string());
        }
    }
}

/// Engine came online with its collateral registry
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
pub struct EngineInitialized {
    pub debt_mint: Pubkey,
    pub asset_count: u8,
}

impl Event for EngineInitialized {
    fn event_type() -> EventType {
        EventType::EngineInitialized
    }
}

/// Collateral entered a vault
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
pub struct CollateralDeposited {
    pub user: Pubkey,
    pub asset_mint: Pubkey,
    pub amount: u128,
}

impl Event for CollateralDeposited {
    fn event_type() -> EventType {
        EventType::CollateralDeposited
    }
}

/// Collateral left a vault. On a user redeem `redeemed_from` and
/// `redeemed_to` coincide; on liquidation they are the target and the
/// liquidator.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
pub struct CollateralRedeemed {
    pub redeemed_from: Pubkey,
    pub redeemed_to: Pubkey,
    pub asset_mint: Pubkey,
    pub amount: u128,
}

impl Event for CollateralRedeemed {
    fn event_type() -> EventType {
        EventType::CollateralRedeemed
    }
}

/// Debt tokens created against a position
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
pub struct DebtMinted {
    pub user: Pubkey,
    pub amount: u128,
}

impl Event for DebtMinted {
    fn event_type() -> EventType {
        EventType::DebtMinted
    }
}

/// Debt repaid and destroyed. `payer` supplied the tokens; `on_behalf_of`
/// is the position whose debt shrank.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
pub struct DebtBurned {
    pub on_behalf_of: Pubkey,
    pub payer: Pubkey,
    pub amount: u128,
}

impl Event for DebtBurned {
    fn event_type() -> EventType {
        EventType::DebtBurned
    }
}

/// A third party repaid part of an unhealthy position's debt for a bonus
/// slice of its collateral
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
pub struct PositionLiquidated {
    pub liquidator: Pubkey,
    pub user: Pubkey,
    pub asset_mint: Pubkey,
    pub debt_covered: u128,
    pub collateral_seized: u128,
}

impl Event for PositionLiquidated {
    fn event_type() -> EventType {
        EventType::PositionLiquidated
    }
}
