//! SPL token boundary
//!
//! All asset movement goes through these wrappers: collateral pulls into the
//! vaults, collateral pushes back out under the vault authority, and debt
//! token mint/burn. On-chain they compile to token-program CPIs; under
//! `cfg(test)` they mutate the packed token accounts directly so operation
//! handlers run on the host.

use solana_program::{account_info::AccountInfo, program_error::ProgramError};

#[cfg(not(test))]
use solana_program::program::{invoke, invoke_signed};

#[cfg(test)]
use solana_program::program_pack::Pack;
#[cfg(test)]
use spl_token::state::{Account as TokenAccount, Mint};

use crate::error::SynthEngineError;

/// Narrow a ledger amount to the token layer's u64 range
pub fn to_token_amount(amount: u128) -> Result<u64, ProgramError> {
    u64::try_from(amount).map_err(|_| SynthEngineError::AmountTooLarge.into())
}

/// Pull collateral from the depositor's token account into a vault.
/// The depositor signs the transaction, so they authorize the transfer.
pub fn pull_collateral<'a>(
    _token_program: &AccountInfo<'a>,
    source: &AccountInfo<'a>,
    vault: &AccountInfo<'a>,
    _authority: &AccountInfo<'a>,
    amount: u64,
) -> Result<(), ProgramError> {
    #[cfg(not(test))]
    {
        let ix = spl_token::instruction::transfer(
            _token_program.key,
            source.key,
            vault.key,
            _authority.key,
            &[],
            amount,
        )?;
        invoke(
            &ix,
            &[
                source.clone(),
                vault.clone(),
                _authority.clone(),
                _token_program.clone(),
            ],
        )
        .map_err(|_| SynthEngineError::TransferFailed.into())
    }
    #[cfg(test)]
    {
        move_tokens(source, vault, amount)
    }
}

/// Push collateral out of a vault, signed by the vault authority PDA.
pub fn push_collateral<'a>(
    _token_program: &AccountInfo<'a>,
    vault: &AccountInfo<'a>,
    destination: &AccountInfo<'a>,
    _vault_authority: &AccountInfo<'a>,
    _signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<(), ProgramError> {
    #[cfg(not(test))]
    {
        let ix = spl_token::instruction::transfer(
            _token_program.key,
            vault.key,
            destination.key,
            _vault_authority.key,
            &[],
            amount,
        )?;
        invoke_signed(
            &ix,
            &[
                vault.clone(),
                destination.clone(),
                _vault_authority.clone(),
                _token_program.clone(),
            ],
            _signer_seeds,
        )
        .map_err(|_| SynthEngineError::TransferFailed.into())
    }
    #[cfg(test)]
    {
        move_tokens(vault, destination, amount)
    }
}

/// Mint debt tokens to the recipient. Only the engine's vault authority PDA
/// holds the mint authority, so the token boundary enforces the engine's
/// exclusive right to create debt.
pub fn mint_debt_to<'a>(
    _token_program: &AccountInfo<'a>,
    mint: &AccountInfo<'a>,
    destination: &AccountInfo<'a>,
    _mint_authority: &AccountInfo<'a>,
    _signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<(), ProgramError> {
    #[cfg(not(test))]
    {
        let ix = spl_token::instruction::mint_to(
            _token_program.key,
            mint.key,
            destination.key,
            _mint_authority.key,
            &[],
            amount,
        )?;
        invoke_signed(
            &ix,
            &[
                mint.clone(),
                destination.clone(),
                _mint_authority.clone(),
                _token_program.clone(),
            ],
            _signer_seeds,
        )
        .map_err(|_| SynthEngineError::DebtTokenMintFailed.into())
    }
    #[cfg(test)]
    {
        let mut mint_data = mint.try_borrow_mut_data()?;
        let mut mint_state = Mint::unpack(&mint_data)?;
        mint_state.supply = mint_state
            .supply
            .checked_add(amount)
            .ok_or(SynthEngineError::DebtTokenMintFailed)?;
        Mint::pack(mint_state, &mut mint_data)?;

        let mut dst_data = destination.try_borrow_mut_data()?;
        let mut dst_state = TokenAccount::unpack(&dst_data)?;
        dst_state.amount = dst_state
            .amount
            .checked_add(amount)
            .ok_or(SynthEngineError::DebtTokenMintFailed)?;
        TokenAccount::pack(dst_state, &mut dst_data)?;
        Ok(())
    }
}

/// Burn debt tokens out of the payer's own token account. The payer signed
/// the transaction, which authorizes the burn.
pub fn burn_debt_from<'a>(
    _token_program: &AccountInfo<'a>,
    mint: &AccountInfo<'a>,
    source: &AccountInfo<'a>,
    _owner: &AccountInfo<'a>,
    amount: u64,
) -> Result<(), ProgramError> {
    #[cfg(not(test))]
    {
        let ix = spl_token::instruction::burn(
            _token_program.key,
            source.key,
            mint.key,
            _owner.key,
            &[],
            amount,
        )?;
        invoke(
            &ix,
            &[
                source.clone(),
                mint.clone(),
                _owner.clone(),
                _token_program.clone(),
            ],
        )
        .map_err(|_| SynthEngineError::DebtTokenBurnFailed.into())
    }
    #[cfg(test)]
    {
        let mut src_data = source.try_borrow_mut_data()?;
        let mut src_state = TokenAccount::unpack(&src_data)?;
        src_state.amount = src_state
            .amount
            .checked_sub(amount)
            .ok_or(SynthEngineError::BurnAmountExceedsBalance)?;
        TokenAccount::pack(src_state, &mut src_data)?;

        let mut mint_data = mint.try_borrow_mut_data()?;
        let mut mint_state = Mint::unpack(&mint_data)?;
        mint_state.supply = mint_state
            .supply
            .checked_sub(amount)
            .ok_or(SynthEngineError::DebtTokenBurnFailed)?;
        Mint::pack(mint_state, &mut mint_data)?;
        Ok(())
    }
}

#[cfg(test)]
fn move_tokens(source: &AccountInfo, dest: &AccountInfo, amount: u64) -> Result<(), ProgramError> {
    let mut src_data = source.try_borrow_mut_data()?;
    let mut src_state = TokenAccount::unpack(&src_data)?;
    src_state.amount = src_state
        .amount
        .checked_sub(amount)
        .ok_or(SynthEngineError::TransferFailed)?;
    TokenAccount::pack(src_state, &mut src_data)?;

    let mut dst_data = dest.try_borrow_mut_data()?;
    let mut dst_state = TokenAccount::unpack(&dst_data)?;
    dst_state.amount = dst_state
        .amount
        .checked_add(amount)
        .ok_or(SynthEngineError::TransferFailed)?;
    TokenAccount::pack(dst_state, &mut dst_data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_token_amount_bounds() {
        assert_eq!(to_token_amount(0).unwrap(), 0);
        assert_eq!(to_token_amount(u64::MAX as u128).unwrap(), u64::MAX);
        assert_eq!(
            to_token_amount(u64::MAX as u128 + 1).unwrap_err(),
            SynthEngineError::AmountTooLarge.into()
        );
    }
}
