//! Collateral deposit

use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

use crate::{
    error::SynthEngineError,
    events::{CollateralDeposited, Event},
    security::ReentrancyScope,
    state::Position,
    token, validation,
};

use super::{check_guard_account, check_position_account, load_config};

/// Lock collateral in the asset's vault.
///
/// Accounts:
/// 0. `[signer]` Depositor
/// 1. `[]` Engine config PDA
/// 2. `[writable]` Reentrancy guard PDA
/// 3. `[writable]` Depositor's position PDA
/// 4. `[]` Collateral mint (selects the asset)
/// 5. `[writable]` Depositor's collateral token account
/// 6. `[writable]` Asset vault token account
/// 7. `[]` Token program
pub fn process_deposit_collateral(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    amount: u128,
) -> ProgramResult {
    let account_iter = &mut accounts.iter();

    let user = next_account_info(account_iter)?;
    let config_info = next_account_info(account_iter)?;
    let guard_info = next_account_info(account_iter)?;
    let position_info = next_account_info(account_iter)?;
    let collateral_mint = next_account_info(account_iter)?;
    let user_token_info = next_account_info(account_iter)?;
    let vault_info = next_account_info(account_iter)?;
    let token_program = next_account_info(account_iter)?;

    if amount == 0 {
        return Err(SynthEngineError::AmountMustBeGreaterThanZero.into());
    }
    validation::expect_signer(user)?;

    let config = load_config(program_id, config_info)?;
    let asset_index = config
        .asset_index(collateral_mint.key)
        .ok_or(SynthEngineError::UnregisteredCollateralAsset)?;
    validation::expect_key(vault_info, &config.assets[asset_index].vault)?;

    check_guard_account(program_id, guard_info)?;
    check_position_account(program_id, position_info, user.key)?;
    validation::expect_writable(position_info)?;

    let scope = ReentrancyScope::enter(guard_info)?;

    let mut position = Position::load_or_new(position_info, user.key, config.asset_count())?;
    position.increase_collateral(asset_index, amount)?;
    position.save(position_info)?;

    // Funds move only after every check and ledger write
    token::pull_collateral(
        token_program,
        user_token_info,
        vault_info,
        user,
        token::to_token_amount(amount)?,
    )?;

    CollateralDeposited {
        user: *user.key,
        asset_mint: *collateral_mint.key,
        amount,
    }
    .emit();

    scope.exit()?;
    msg!("Deposited {} of {}", amount, collateral_mint.key);
    Ok(())
}

/// Deposit collateral and mint debt in one transaction. A convenience
/// composition of the two primitives with no extra invariants.
///
/// Accounts:
/// 0. `[signer]` Depositor
/// 1. `[]` Engine config PDA
/// 2. `[writable]` Reentrancy guard PDA
/// 3. `[writable]` Depositor's position PDA
/// 4. `[]` Collateral mint
/// 5. `[writable]` Depositor's collateral token account
/// 6. `[writable]` Asset vault token account
/// 7. `[writable]` Debt token mint
/// 8. `[writable]` Depositor's debt token account
/// 9. `[]` Vault authority PDA
/// 10. `[]` Token program
/// 11. `[]` Clock sysvar
/// 12.. `[]` Price feeds, one per registered asset in registry order
pub fn process_deposit_and_mint(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    deposit_amount: u128,
    mint_amount: u128,
) -> ProgramResult {
    if accounts.len() < 12 {
        return Err(solana_program::program_error::ProgramError::NotEnoughAccountKeys);
    }

    let deposit_accounts = [
        accounts[0].clone(),
        accounts[1].clone(),
        accounts[2].clone(),
        accounts[3].clone(),
        accounts[4].clone(),
        accounts[5].clone(),
        accounts[6].clone(),
        accounts[10].clone(),
    ];
    process_deposit_collateral(program_id, &deposit_accounts, deposit_amount)?;

    let mut mint_accounts = vec![
        accounts[0].clone(),
        accounts[1].clone(),
        accounts[2].clone(),
        accounts[3].clone(),
        accounts[7].clone(),
        accounts[8].clone(),
        accounts[9].clone(),
        accounts[10].clone(),
        accounts[11].clone(),
    ];
    mint_accounts.extend_from_slice(&accounts[12..]);
    super::mint::process_mint_debt(program_id, &mint_accounts, mint_amount)
}
