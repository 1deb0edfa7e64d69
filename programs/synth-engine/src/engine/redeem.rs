//! Collateral redemption

use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::{
    constants::VAULT_AUTHORITY_SEED,
    error::SynthEngineError,
    events::{CollateralRedeemed, Event},
    security::ReentrancyScope,
    solvency,
    state::Position,
    token, validation, valuation,
};

use super::{
    check_guard_account, check_position_account, check_vault_authority, load_config, read_clock,
};

/// Withdraw collateral from the asset's vault. The position is re-valued at
/// live prices after the decrease; a health factor below minimum aborts the
/// whole operation.
///
/// Accounts:
/// 0. `[signer]` Redeemer
/// 1. `[]` Engine config PDA
/// 2. `[writable]` Reentrancy guard PDA
/// 3. `[writable]` Redeemer's position PDA
/// 4. `[]` Collateral mint (selects the asset)
/// 5. `[writable]` Redeemer's collateral token account
/// 6. `[writable]` Asset vault token account
/// 7. `[]` Vault authority PDA
/// 8. `[]` Token program
/// 9. `[]` Clock sysvar
/// 10.. `[]` Price feeds, one per registered asset in registry order
pub fn process_redeem_collateral(
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
    let vault_authority_info = next_account_info(account_iter)?;
    let token_program = next_account_info(account_iter)?;
    let clock_info = next_account_info(account_iter)?;
    let feed_infos = account_iter.as_slice();

    if amount == 0 {
        return Err(SynthEngineError::AmountMustBeGreaterThanZero.into());
    }
    validation::expect_signer(user)?;

    let config = load_config(program_id, config_info)?;
    let asset_index = config
        .asset_index(collateral_mint.key)
        .ok_or(SynthEngineError::UnregisteredCollateralAsset)?;
    validation::expect_key(vault_info, &config.assets[asset_index].vault)?;
    check_vault_authority(program_id, vault_authority_info)?;
    check_guard_account(program_id, guard_info)?;
    check_position_account(program_id, position_info, user.key)?;
    validation::expect_writable(position_info)?;

    let scope = ReentrancyScope::enter(guard_info)?;

    let mut position = Position::load_or_new(position_info, user.key, config.asset_count())?;
    position.decrease_collateral(asset_index, amount)?;

    let now = read_clock(clock_info)?;
    let collateral_value =
        valuation::total_collateral_usd_value(&config, &position, feed_infos, now)?;
    let health = solvency::health_factor(collateral_value, position.debt)?;
    solvency::assert_solvent(health)?;

    position.save(position_info)?;

    let seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY_SEED, &[config.vault_authority_bump]]];
    token::push_collateral(
        token_program,
        vault_info,
        user_token_info,
        vault_authority_info,
        seeds,
        token::to_token_amount(amount)?,
    )?;

    CollateralRedeemed {
        redeemed_from: *user.key,
        redeemed_to: *user.key,
        asset_mint: *collateral_mint.key,
        amount,
    }
    .emit();

    scope.exit()?;
    msg!("Redeemed {} of {}", amount, collateral_mint.key);
    Ok(())
}

/// Burn debt then redeem collateral in one transaction. A convenience
/// composition of the two primitives with no extra invariants.
///
/// Accounts:
/// 0. `[signer]` Redeemer
/// 1. `[]` Engine config PDA
/// 2. `[writable]` Reentrancy guard PDA
/// 3. `[writable]` Redeemer's position PDA
/// 4. `[]` Collateral mint
/// 5. `[writable]` Redeemer's collateral token account
/// 6. `[writable]` Asset vault token account
/// 7. `[]` Vault authority PDA
/// 8. `[writable]` Debt token mint
/// 9. `[writable]` Redeemer's debt token account
/// 10. `[]` Token program
/// 11. `[]` Clock sysvar
/// 12.. `[]` Price feeds, one per registered asset in registry order
pub fn process_redeem_for_debt(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    redeem_amount: u128,
    burn_amount: u128,
) -> ProgramResult {
    if accounts.len() < 12 {
        return Err(ProgramError::NotEnoughAccountKeys);
    }

    let burn_accounts = [
        accounts[0].clone(),
        accounts[1].clone(),
        accounts[2].clone(),
        accounts[3].clone(),
        accounts[8].clone(),
        accounts[9].clone(),
        accounts[10].clone(),
    ];
    super::burn::process_burn_debt(program_id, &burn_accounts, burn_amount)?;

    let mut redeem_accounts = vec![
        accounts[0].clone(),
        accounts[1].clone(),
        accounts[2].clone(),
        accounts[3].clone(),
        accounts[4].clone(),
        accounts[5].clone(),
        accounts[6].clone(),
        accounts[7].clone(),
        accounts[10].clone(),
        accounts[11].clone(),
    ];
    redeem_accounts.extend_from_slice(&accounts[12..]);
    process_redeem_collateral(program_id, &redeem_accounts, redeem_amount)
}
