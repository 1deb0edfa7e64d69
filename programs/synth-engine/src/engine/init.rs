//! Engine initialization
//!
//! Writes the collateral registry and the reentrancy guard. Runs once; the
//! registry is immutable afterwards.

use borsh::BorshSerialize;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    program_option::COption,
    program_pack::Pack,
    pubkey::Pubkey,
};
use spl_token::state::{Account as TokenAccount, Mint};

use crate::{
    error::SynthEngineError,
    events::{EngineInitialized, Event},
    pda,
    security::ReentrancyGuard,
    state::EngineConfig,
    validation,
};

/// Initialize the engine.
///
/// Accounts:
/// 0. `[signer]` Initializer (pays for the pre-allocated accounts)
/// 1. `[writable]` Engine config PDA, pre-allocated and owned by the program
/// 2. `[writable]` Reentrancy guard PDA, pre-allocated and owned by the program
/// 3. `[]` Debt token mint; its mint authority must be the vault authority PDA
/// 4.. `[]` One vault token account per collateral mint, in list order
pub fn process_initialize_engine(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    collateral_mints: &[Pubkey],
    price_feeds: &[Pubkey],
) -> ProgramResult {
    let account_iter = &mut accounts.iter();

    let initializer = next_account_info(account_iter)?;
    let config_info = next_account_info(account_iter)?;
    let guard_info = next_account_info(account_iter)?;
    let debt_mint_info = next_account_info(account_iter)?;

    validation::expect_signer(initializer)?;
    validation::expect_writable(config_info)?;
    validation::expect_writable(guard_info)?;
    validation::expect_owner(config_info, program_id)?;
    validation::expect_owner(guard_info, program_id)?;

    let (config_key, _) = pda::derive_config_address(program_id);
    validation::expect_key(config_info, &config_key)?;
    let (guard_key, _) = pda::derive_guard_address(program_id);
    validation::expect_key(guard_info, &guard_key)?;

    if !crate::state::is_uninitialized(&config_info.try_borrow_data()?) {
        msg!("Error: engine already initialized");
        return Err(SynthEngineError::AlreadyInitialized.into());
    }

    if collateral_mints.len() != price_feeds.len() {
        return Err(SynthEngineError::ConfigurationLengthMismatch.into());
    }

    let vault_infos: Vec<&AccountInfo> = account_iter.collect();
    if vault_infos.len() != collateral_mints.len() {
        msg!("Error: one vault account required per collateral mint");
        return Err(SynthEngineError::ConfigurationLengthMismatch.into());
    }

    let (vault_authority, vault_authority_bump) = pda::derive_vault_authority(program_id);

    // The engine must be the only party able to create debt
    let mint_state = Mint::unpack(&debt_mint_info.try_borrow_data()?)?;
    if mint_state.mint_authority != COption::Some(vault_authority) {
        msg!("Error: debt mint authority must be the vault authority PDA");
        return Err(ProgramError::InvalidArgument);
    }

    let mut vaults = Vec::with_capacity(vault_infos.len());
    for (i, vault_info) in vault_infos.iter().enumerate() {
        let vault_state = TokenAccount::unpack(&vault_info.try_borrow_data()?)?;
        if vault_state.mint != collateral_mints[i] || vault_state.owner != vault_authority {
            msg!("Error: vault {} is not bound to asset {}", vault_info.key, i);
            return Err(ProgramError::InvalidArgument);
        }
        vaults.push(*vault_info.key);
    }

    let config = EngineConfig::new(
        *debt_mint_info.key,
        vault_authority_bump,
        collateral_mints,
        price_feeds,
        &vaults,
    )?;
    config.save(config_info)?;

    ReentrancyGuard::new().serialize(&mut &mut guard_info.try_borrow_mut_data()?[..])?;

    EngineInitialized {
        debt_mint: *debt_mint_info.key,
        asset_count: collateral_mints.len() as u8,
    }
    .emit();

    msg!("Engine initialized with {} collateral assets", collateral_mints.len());
    Ok(())
}
