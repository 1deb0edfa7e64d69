//! Debt repayment

use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

use crate::{
    error::SynthEngineError,
    events::{DebtBurned, Event},
    security::ReentrancyScope,
    state::Position,
    token, validation,
};

use super::{check_guard_account, check_position_account, load_config};

/// Repay debt. The engine pulls debt tokens from the caller and destroys
/// them; the ledger debt shrinks by the same amount. No solvency post-check:
/// repaying debt cannot reduce a health factor.
///
/// Accounts:
/// 0. `[signer]` Payer (and position owner)
/// 1. `[]` Engine config PDA
/// 2. `[writable]` Reentrancy guard PDA
/// 3. `[writable]` Payer's position PDA
/// 4. `[writable]` Debt token mint
/// 5. `[writable]` Payer's debt token account
/// 6. `[]` Token program
pub fn process_burn_debt(
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
    let token_program = next_account_info(account_iter)?;

    if amount == 0 {
        return Err(SynthEngineError::AmountMustBeGreaterThanZero.into());
    }
    validation::expect_signer(user)?;

    let config = load_config(program_id, config_info)?;
    validation::expect_key(debt_mint_info, &config.debt_mint)?;
    check_guard_account(program_id, guard_info)?;
    check_position_account(program_id, position_info, user.key)?;
    validation::expect_writable(position_info)?;

    let scope = ReentrancyScope::enter(guard_info)?;

    let mut position = Position::load_or_new(position_info, user.key, config.asset_count())?;
    position.decrease_debt(amount)?;
    position.save(position_info)?;

    token::burn_debt_from(
        token_program,
        debt_mint_info,
        user_debt_token_info,
        user,
        token::to_token_amount(amount)?,
    )?;

    DebtBurned {
        on_behalf_of: *user.key,
        payer: *user.key,
        amount,
    }
    .emit();

    scope.exit()?;
    msg!("Burned {} debt from {}", amount, user.key);
    Ok(())
}
