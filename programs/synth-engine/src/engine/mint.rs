//! Debt minting

use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

use crate::{
    constants::VAULT_AUTHORITY_SEED,
    error::SynthEngineError,
    events::{DebtMinted, Event},
    security::ReentrancyScope,
    solvency,
    state::Position,
    token, validation, valuation,
};

use super::{
    check_guard_account, check_position_account, check_vault_authority, load_config, read_clock,
};

/// Mint debt tokens against locked collateral. The whole registry is valued
/// at live prices and the caller's health factor must stay at or above the
/// minimum after the new debt is booked, or nothing happens.
///
/// Accounts:
/// 0. `[signer]` Borrower
/// 1. `[]` Engine config PDA
/// 2. `[writable]` Reentrancy guard PDA
/// 3. `[writable]` Borrower's position PDA
/// 4. `[writable]` Debt token mint
/// 5. `[writable]` Borrower's debt token account
/// 6. `[]` Vault authority PDA (debt mint authority)
/// 7. `[]` Token program
/// 8. `[]` Clock sysvar
/// 9.. `[]` Price feeds, one per registered asset in registry order
pub fn process_mint_debt(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    amount: u128,
) -> ProgramResult {
    let account_iter = &mut accounts.iter();

    let user = next_account_info(account_iter)?;
    let config_info = next_account_info(account_iter)?;
    let guard_info = next_account_info(account_iter)?;
    let position_info = next_account_info(account_iter)?;
    let debt_mint_info = next_account_info(account_iter)?;
    let user_debt_token_info = next_account_info(account_iter)?;
    let vault_authority_info = next_account_info(account_iter)?;
    let token_program = next_account_info(account_iter)?;
    let clock_info = next_account_info(account_iter)?;
    let feed_infos = account_iter.as_slice();

    if amount == 0 {
        return Err(SynthEngineError::AmountMustBeGreaterThanZero.into());
    }
    validation::expect_signer(user)?;

    let config = load_config(program_id, config_info)?;
    validation::expect_key(debt_mint_info, &config.debt_mint)?;
    check_vault_authority(program_id, vault_authority_info)?;
    check_guard_account(program_id, guard_info)?;
    check_position_account(program_id, position_info, user.key)?;
    validation::expect_writable(position_info)?;

    let scope = ReentrancyScope::enter(guard_info)?;

    let mut position = Position::load_or_new(position_info, user.key, config.asset_count())?;
    position.increase_debt(amount)?;

    let now = read_clock(clock_info)?;
    let collateral_value =
        valuation::total_collateral_usd_value(&config, &position, feed_infos, now)?;
    let health = solvency::health_factor(collateral_value, position.debt)?;
    solvency::assert_solvent(health)?;

    position.save(position_info)?;

    let seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY_SEED, &[config.vault_authority_bump]]];
    token::mint_debt_to(
        token_program,
        debt_mint_info,
        user_debt_token_info,
        vault_authority_info,
        seeds,
        token::to_token_amount(amount)?,
    )?;

    DebtMinted {
        user: *user.key,
        amount,
    }
    .emit();

    scope.exit()?;
    msg!("Minted {} debt to {}", amount, user.key);
    Ok(())
}
