//! Position engine
//!
//! One handler module per operation. Every mutating handler follows the same
//! discipline: validate inputs and account identities, enter the reentrancy
//! scope, mutate ledger state in memory, re-check solvency where required,
//! persist, move tokens last, emit events, release the scope. Any failure
//! aborts the whole instruction; the runtime discards partial writes.

pub mod burn;
pub mod deposit;
pub mod init;
pub mod liquidate;
pub mod mint;
pub mod queries;
pub mod redeem;


use solana_program::{
    account_info::AccountInfo, clock::Clock, program_error::ProgramError, pubkey::Pubkey,
    sysvar::Sysvar,
};

use crate::{pda, state::EngineConfig, validation};

/// Load the engine config after checking the account's identity
pub(crate) fn load_config(
    program_id: &Pubkey,
    config_info: &AccountInfo,
) -> Result<EngineConfig, ProgramError> {
    validation::expect_owner(config_info, program_id)?;
    let (expected, _) = pda::derive_config_address(program_id);
    validation::expect_key(config_info, &expected)?;
    EngineConfig::load(config_info)
}

/// Check that the guard account is the engine's guard PDA
pub(crate) fn check_guard_account(
    program_id: &Pubkey,
    guard_info: &AccountInfo,
) -> Result<(), ProgramError> {
    validation::expect_owner(guard_info, program_id)?;
    validation::expect_writable(guard_info)?;
    let (expected, _) = pda::derive_guard_address(program_id);
    validation::expect_key(guard_info, &expected)
}

/// Check that a position account is the PDA for `owner`
pub(crate) fn check_position_account(
    program_id: &Pubkey,
    position_info: &AccountInfo,
    owner: &Pubkey,
) -> Result<(), ProgramError> {
    validation::expect_owner(position_info, program_id)?;
    let (expected, _) = pda::derive_position_address(program_id, owner);
    validation::expect_key(position_info, &expected)
}

/// Check that the vault authority account is the engine's authority PDA
pub(crate) fn check_vault_authority(
    program_id: &Pubkey,
    authority_info: &AccountInfo,
) -> Result<(), ProgramError> {
    let (expected, _) = pda::derive_vault_authority(program_id);
    validation::expect_key(authority_info, &expected)
}

/// Current unix time from the clock sysvar account
pub(crate) fn read_clock(clock_info: &AccountInfo) -> Result<i64, ProgramError> {
    let clock = Clock::from_account_info(clock_info)?;
    Ok(clock.unix_timestamp)
}
