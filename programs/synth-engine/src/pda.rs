//! PDA derivation helpers

use solana_program::pubkey::Pubkey;

use crate::constants::{CONFIG_SEED, GUARD_SEED, POSITION_SEED, VAULT_AUTHORITY_SEED};

/// Derive the engine config PDA
pub fn derive_config_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED], program_id)
}

/// Derive a user's position PDA
pub fn derive_position_address(program_id: &Pubkey, owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POSITION_SEED, owner.as_ref()], program_id)
}

/// Derive the vault authority PDA
pub fn derive_vault_authority(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_AUTHORITY_SEED], program_id)
}

/// Derive the reentrancy guard PDA
pub fn derive_guard_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GUARD_SEED], program_id)
}
