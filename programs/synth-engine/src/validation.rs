//! Account-level validation helpers

use solana_program::{
    account_info::AccountInfo, msg, program_error::ProgramError, pubkey::Pubkey,
};

pub fn expect_signer(account_info: &AccountInfo) -> Result<(), ProgramError> {
    if !account_info.is_signer {
        msg!("Error: account {} must sign", account_info.key);
        return Err(ProgramError::MissingRequiredSignature);
    }
    Ok(())
}

pub fn expect_writable(account_info: &AccountInfo) -> Result<(), ProgramError> {
    if !account_info.is_writable {
        msg!("Error: account {} must be writable", account_info.key);
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(())
}

pub fn expect_owner(account_info: &AccountInfo, owner: &Pubkey) -> Result<(), ProgramError> {
    if account_info.owner != owner {
        msg!("Error: account {} has the wrong owner", account_info.key);
        return Err(ProgramError::IllegalOwner);
    }
    Ok(())
}

pub fn expect_key(account_info: &AccountInfo, expected: &Pubkey) -> Result<(), ProgramError> {
    if account_info.key != expected {
        msg!(
            "Error: account {} does not match expected {}",
            account_info.key,
            expected
        );
        return Err(ProgramError::InvalidArgument);
    }
    Ok(())
}
