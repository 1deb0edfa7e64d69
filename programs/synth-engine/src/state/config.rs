//! Engine configuration account
//!
//! The registry of supported collateral assets and their oracle bindings.
//! Written once at initialization; set membership is immutable afterwards.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey};

use crate::{
    constants::{CONFIG_DISCRIMINATOR, MAX_COLLATERAL_ASSETS},
    error::SynthEngineError,
};

/// One accepted collateral asset and its bindings
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct CollateralAssetConfig {
    /// SPL mint of the collateral asset
    pub mint: Pubkey,
    /// Price feed account quoting USD per whole unit of the asset
    pub price_feed: Pubkey,
    /// Vault token account holding deposits, owned by the vault authority
    pub vault: Pubkey,
}

/// Engine configuration account
#[derive(BorshSerialize, BorshDeserialize, Debug)]
pub struct EngineConfig {
    /// Discriminator
    pub discriminator: [u8; 8],
    /// Mint of the synthetic debt token; the vault authority PDA is its sole
    /// mint authority
    pub debt_mint: Pubkey,
    /// Bump of the vault authority PDA
    pub vault_authority_bump: u8,
    /// Registered collateral assets, in registry order
    pub assets: Vec<CollateralAssetConfig>,
}

impl EngineConfig {
    /// Account size for a registry of `asset_count` entries
    pub fn size_for(asset_count: usize) -> usize {
        8 + 32 + 1 + 4 + asset_count * (32 + 32 + 32)
    }

    /// Build the registry from the parallel configuration lists.
    pub fn new(
        debt_mint: Pubkey,
        vault_authority_bump: u8,
        collateral_mints: &[Pubkey],
        price_feeds: &[Pubkey],
        vaults: &[Pubkey],
    ) -> Result<Self, ProgramError> {
        if collateral_mints.len() != price_feeds.len() || collateral_mints.len() != vaults.len() {
            return Err(SynthEngineError::ConfigurationLengthMismatch.into());
        }
        if collateral_mints.len() > MAX_COLLATERAL_ASSETS {
            return Err(SynthEngineError::CollateralRegistryFull.into());
        }

        let mut assets = Vec::with_capacity(collateral_mints.len());
        for (i, mint) in collateral_mints.iter().enumerate() {
            if collateral_mints[..i].contains(mint) {
                return Err(SynthEngineError::DuplicateCollateralAsset.into());
            }
            assets.push(CollateralAssetConfig {
                mint: *mint,
                price_feed: price_feeds[i],
                vault: vaults[i],
            });
        }

        Ok(Self {
            discriminator: CONFIG_DISCRIMINATOR,
            debt_mint,
            vault_authority_bump,
            assets,
        })
    }

    /// Registry index of a collateral mint, if registered
    pub fn asset_index(&self, mint: &Pubkey) -> Option<usize> {
        self.assets.iter().position(|a| a.mint == *mint)
    }

    /// Number of registered assets
    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    /// Validate the account shape
    pub fn validate(&self) -> Result<(), ProgramError> {
        if self.discriminator != CONFIG_DISCRIMINATOR {
            return Err(SynthEngineError::NotInitialized.into());
        }
        Ok(())
    }

    /// Load and validate from an account
    pub fn load(config_info: &AccountInfo) -> Result<Self, ProgramError> {
        let data = config_info.try_borrow_data()?;
        let config = Self::deserialize(&mut &data[..])
            .map_err(|_| ProgramError::InvalidAccountData)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize into the account
    pub fn save(&self, config_info: &AccountInfo) -> Result<(), ProgramError> {
        self.serialize(&mut &mut config_info.try_borrow_mut_data()?[..])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(n: usize) -> Vec<Pubkey> {
        (0..n).map(|_| Pubkey::new_unique()).collect()
    }

    #[test]
    fn test_new_builds_registry_in_order() {
        let mints = keys(3);
        let feeds = keys(3);
        let vaults = keys(3);
        let config =
            EngineConfig::new(Pubkey::new_unique(), 255, &mints, &feeds, &vaults).unwrap();

        assert_eq!(config.asset_count(), 3);
        for i in 0..3 {
            assert_eq!(config.assets[i].mint, mints[i]);
            assert_eq!(config.assets[i].price_feed, feeds[i]);
            assert_eq!(config.assets[i].vault, vaults[i]);
            assert_eq!(config.asset_index(&mints[i]), Some(i));
        }
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let err = EngineConfig::new(Pubkey::new_unique(), 255, &keys(2), &keys(3), &keys(2))
            .unwrap_err();
        assert_eq!(err, SynthEngineError::ConfigurationLengthMismatch.into());

        let err = EngineConfig::new(Pubkey::new_unique(), 255, &keys(2), &keys(2), &keys(1))
            .unwrap_err();
        assert_eq!(err, SynthEngineError::ConfigurationLengthMismatch.into());
    }

    #[test]
    fn test_duplicate_mint_rejected() {
        let mut mints = keys(2);
        mints.push(mints[0]);
        let err = EngineConfig::new(Pubkey::new_unique(), 255, &mints, &keys(3), &keys(3))
            .unwrap_err();
        assert_eq!(err, SynthEngineError::DuplicateCollateralAsset.into());
    }

    #[test]
    fn test_registry_bound_enforced() {
        let n = MAX_COLLATERAL_ASSETS + 1;
        let err =
            EngineConfig::new(Pubkey::new_unique(), 255, &keys(n), &keys(n), &keys(n)).unwrap_err();
        assert_eq!(err, SynthEngineError::CollateralRegistryFull.into());
    }

    #[test]
    fn test_unregistered_mint_has_no_index() {
        let config = EngineConfig::new(Pubkey::new_unique(), 255, &keys(2), &keys(2), &keys(2))
            .unwrap();
        assert_eq!(config.asset_index(&Pubkey::new_unique()), None);
    }

    #[test]
    fn test_round_trips_through_exact_buffer() {
        let config = EngineConfig::new(Pubkey::new_unique(), 7, &keys(2), &keys(2), &keys(2))
            .unwrap();
        let mut buf = vec![0u8; EngineConfig::size_for(2)];
        config.serialize(&mut &mut buf[..]).unwrap();
        let loaded = EngineConfig::deserialize(&mut &buf[..]).unwrap();
        assert_eq!(loaded.debt_mint, config.debt_mint);
        assert_eq!(loaded.vault_authority_bump, 7);
        assert_eq!(loaded.assets, config.assets);
    }
}
