//! Liquidation
//!
//! Any third party may repay part of an unhealthy position's debt and take
//! the equivalent collateral plus a bonus. The target's health factor must
//! strictly improve, and the liquidator must end the operation solvent.

use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

use crate::{
    constants::{LIQUIDATION_BONUS, PERCENT_DIVISOR, VAULT_AUTHORITY_SEED},
    error::SynthEngineError,
    events::{CollateralRedeemed, Event, PositionLiquidated},
    math::mul_div,
    oracle,
    security::ReentrancyScope,
    solvency,
    state::Position,
    token, validation, valuation,
};

use super::{
    check_guard_account, check_position_account, check_vault_authority, load_config, read_clock,
};

/// Liquidate an undercollateralized position.
///
/// The seized quantity is the covered debt translated into the chosen asset
/// at the live price, plus the liquidation bonus. Collateral is valued twice
/// (seizure sizing and the post-check); each valuation re-reads the feeds,
/// so the two may observe different prices if the feed moves mid-operation.
///
/// If aggregate collateralization has fallen to 100% or below, the seizure
/// plus bonus can exceed what the position holds and the ledger underflow
/// check aborts the call. At that point liquidation is no longer
/// incentivized; this degradation is an accepted limit of the bonus design.
///
/// Accounts:
/// 0. `[signer]` Liquidator
/// 1. `[]` Engine config PDA
/// 2. `[writable]` Reentrancy guard PDA
/// 3. `[]` Target user (the position owner being liquidated)
/// 4. `[writable]` Target user's position PDA
/// 5. `[]` Liquidator's position PDA (may be unused / never written)
/// 6. `[]` Collateral mint (asset to seize)
/// 7. `[writable]` Liquidator's collateral token account
/// 8. `[writable]` Asset vault token account
/// 9. `[]` Vault authority PDA
/// 10. `[writable]` Debt token mint
/// 11. `[writable]` Liquidator's debt token account
/// 12. `[]` Token program
/// 13. `[]` Clock sysvar
/// 14.. `[]` Price feeds, one per registered asset in registry order
pub fn process_liquidate(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    debt_to_cover: u128,
) -> ProgramResult {
    let account_iter = &mut accounts.iter();

    let liquidator = next_account_info(account_iter)?;
    let config_info = next_account_info(account_iter)?;
    let guard_info = next_account_info(account_iter)?;
    let target_user = next_account_info(account_iter)?;
    let target_position_info = next_account_info(account_iter)?;
    let liquidator_position_info = next_account_info(account_iter)?;
    let collateral_mint = next_account_info(account_iter)?;
    let liquidator_token_info = next_account_info(account_iter)?;
    let vault_info = next_account_info(account_iter)?;
    let vault_authority_info = next_account_info(account_iter)?;
    let debt_mint_info = next_account_info(account_iter)?;
    let liquidator_debt_token_info = next_account_info(account_iter)?;
    let token_program = next_account_info(account_iter)?;
    let clock_info = next_account_info(account_iter)?;
    let feed_infos = account_iter.as_slice();

    if debt_to_cover == 0 {
        return Err(SynthEngineError::AmountMustBeGreaterThanZero.into());
    }
    validation::expect_signer(liquidator)?;

    let config = load_config(program_id, config_info)?;
    let asset_index = config
        .asset_index(collateral_mint.key)
        .ok_or(SynthEngineError::UnregisteredCollateralAsset)?;
    validation::expect_key(vault_info, &config.assets[asset_index].vault)?;
    validation::expect_key(debt_mint_info, &config.debt_mint)?;
    check_vault_authority(program_id, vault_authority_info)?;
    check_guard_account(program_id, guard_info)?;
    check_position_account(program_id, target_position_info, target_user.key)?;
    check_position_account(program_id, liquidator_position_info, liquidator.key)?;
    validation::expect_writable(target_position_info)?;

    let scope = ReentrancyScope::enter(guard_info)?;

    let mut target =
        Position::load_or_new(target_position_info, target_user.key, config.asset_count())?;
    let now = read_clock(clock_info)?;

    let starting_value =
        valuation::total_collateral_usd_value(&config, &target, feed_infos, now)?;
    let starting_health = solvency::health_factor(starting_value, target.debt)?;
    if !solvency::is_liquidatable(starting_health) {
        msg!("Error: target position is healthy");
        return Err(SynthEngineError::HealthFactorOk.into());
    }

    // Translate the covered debt into the chosen asset and add the bonus
    validation::expect_key(&feed_infos[asset_index], &config.assets[asset_index].price_feed)?;
    let reading = oracle::read_price(&feed_infos[asset_index], now)?;
    let base_seizure = valuation::asset_amount_for_usd(reading.price, debt_to_cover)?;
    let bonus = mul_div(base_seizure, LIQUIDATION_BONUS, PERCENT_DIVISOR)?;
    let seized = base_seizure
        .checked_add(bonus)
        .ok_or(SynthEngineError::MathOverflow)?;

    target.decrease_collateral(asset_index, seized)?;
    target.decrease_debt(debt_to_cover)?;

    // Second valuation; the feed may have moved since the first read
    let ending_value = valuation::total_collateral_usd_value(&config, &target, feed_infos, now)?;
    let ending_health = solvency::health_factor(ending_value, target.debt)?;
    if ending_health <= starting_health {
        msg!("Error: liquidation did not improve target health");
        return Err(SynthEngineError::HealthFactorNotImproved.into());
    }

    target.save(target_position_info)?;

    // The liquidator's own position must remain solvent. Self-liquidation
    // reuses the freshly mutated target state.
    let liquidator_position = if liquidator.key == target_user.key {
        target.clone()
    } else {
        Position::load_or_new(liquidator_position_info, liquidator.key, config.asset_count())?
    };
    let liquidator_value =
        valuation::total_collateral_usd_value(&config, &liquidator_position, feed_infos, now)?;
    let liquidator_health = solvency::health_factor(liquidator_value, liquidator_position.debt)?;
    solvency::assert_solvent(liquidator_health)?;

    let seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY_SEED, &[config.vault_authority_bump]]];
    token::push_collateral(
        token_program,
        vault_info,
        liquidator_token_info,
        vault_authority_info,
        seeds,
        token::to_token_amount(seized)?,
    )?;
    token::burn_debt_from(
        token_program,
        debt_mint_info,
        liquidator_debt_token_info,
        liquidator,
        token::to_token_amount(debt_to_cover)?,
    )?;

    CollateralRedeemed {
        redeemed_from: *target_user.key,
        redeemed_to: *liquidator.key,
        asset_mint: *collateral_mint.key,
        amount: seized,
    }
    .emit();
    PositionLiquidated {
        liquidator: *liquidator.key,
        user: *target_user.key,
        asset_mint: *collateral_mint.key,
        debt_covered: debt_to_cover,
        collateral_seized: seized,
    }
    .emit();

    scope.exit()?;
    msg!(
        "Liquidated {}: covered {} debt for {} collateral",
        target_user.key,
        debt_to_cover,
        seized
    );
    Ok(())
}
