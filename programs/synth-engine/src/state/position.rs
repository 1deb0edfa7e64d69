//! Position ledger account
//!
//! Per-user collateral balances (one counter per registered asset) and the
//! outstanding debt. This is a pure state container: every business rule
//! lives in the operation handlers, the ledger only rejects underflow and
//! overflow. A position is created implicitly on first deposit and never
//! destroyed; a zero-balance position is indistinguishable from an absent
//! one.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey};

use crate::{constants::POSITION_DISCRIMINATOR, error::SynthEngineError};

/// A user's position: collateral per registered asset plus total debt
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
pub struct Position {
    /// Discriminator
    pub discriminator: [u8; 8],
    /// Owner of the position
    pub owner: Pubkey,
    /// Collateral deposited, indexed in registry order
    pub collateral: Vec<u128>,
    /// Outstanding debt minted against the collateral
    pub debt: u128,
}

impl Position {
    /// Account size for `asset_count` registry entries
    pub fn size_for(asset_count: usize) -> usize {
        8 + 32 + 4 + asset_count * 16 + 16
    }

    /// Fresh empty position
    pub fn new(owner: Pubkey, asset_count: usize) -> Self {
        Self {
            discriminator: POSITION_DISCRIMINATOR,
            owner,
            collateral: vec![0; asset_count],
            debt: 0,
        }
    }

    pub fn increase_collateral(&mut self, index: usize, amount: u128) -> Result<(), ProgramError> {
        let slot = self
            .collateral
            .get_mut(index)
            .ok_or(ProgramError::InvalidArgument)?;
        *slot = slot
            .checked_add(amount)
            .ok_or(SynthEngineError::MathOverflow)?;
        Ok(())
    }

    pub fn decrease_collateral(&mut self, index: usize, amount: u128) -> Result<(), ProgramError> {
        let slot = self
            .collateral
            .get_mut(index)
            .ok_or(ProgramError::InvalidArgument)?;
        *slot = slot
            .checked_sub(amount)
            .ok_or(SynthEngineError::InsufficientCollateralBalance)?;
        Ok(())
    }

    pub fn increase_debt(&mut self, amount: u128) -> Result<(), ProgramError> {
        self.debt = self
            .debt
            .checked_add(amount)
            .ok_or(SynthEngineError::MathOverflow)?;
        Ok(())
    }

    pub fn decrease_debt(&mut self, amount: u128) -> Result<(), ProgramError> {
        self.debt = self
            .debt
            .checked_sub(amount)
            .ok_or(SynthEngineError::BurnAmountExceedsBalance)?;
        Ok(())
    }

    /// Collateral balance for a registry index; zero when out of range
    pub fn collateral_balance(&self, index: usize) -> u128 {
        self.collateral.get(index).copied().unwrap_or(0)
    }

    /// Validate the account shape
    pub fn validate(&self) -> Result<(), ProgramError> {
        if self.discriminator != POSITION_DISCRIMINATOR {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(())
    }

    /// True when the account buffer has never been written
    pub fn is_uninitialized(data: &[u8]) -> bool {
        super::is_uninitialized(data)
    }

    /// Load an existing position, verifying its owner.
    pub fn load(position_info: &AccountInfo, owner: &Pubkey) -> Result<Self, ProgramError> {
        let data = position_info.try_borrow_data()?;
        let position = Self::deserialize(&mut &data[..])
            .map_err(|_| ProgramError::InvalidAccountData)?;
        position.validate()?;
        if position.owner != *owner {
            return Err(SynthEngineError::UnauthorizedAccess.into());
        }
        Ok(position)
    }

    /// Load an existing position or initialize an empty one in place.
    pub fn load_or_new(
        position_info: &AccountInfo,
        owner: &Pubkey,
        asset_count: usize,
    ) -> Result<Self, ProgramError> {
        let data = position_info.try_borrow_data()?;
        if Self::is_uninitialized(&data) {
            return Ok(Self::new(*owner, asset_count));
        }
        drop(data);
        Self::load(position_info, owner)
    }

    /// Serialize into the account
    pub fn save(&self, position_info: &AccountInfo) -> Result<(), ProgramError> {
        self.serialize(&mut &mut position_info.try_borrow_mut_data()?[..])?;
        Ok(())
    }
}
