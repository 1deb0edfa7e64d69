//! Main processor for handling all instructions
//!
//! Routes instructions to their respective handlers

use borsh::BorshDeserialize;
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, msg, program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::{engine, instruction::SynthEngineInstruction};

/// Main instruction processor
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = SynthEngineInstruction::try_from_slice(instruction_data)
        .map_err(|_| ProgramError::InvalidInstructionData)?;

    match instruction {
        SynthEngineInstruction::InitializeEngine {
            collateral_mints,
            price_feeds,
        } => {
            msg!("Instruction: InitializeEngine");
            engine::init::process_initialize_engine(
                program_id,
                accounts,
                &collateral_mints,
                &price_feeds,
            )
        }

        SynthEngineInstruction::DepositCollateral { amount } => {
            msg!("Instruction: DepositCollateral");
            engine::deposit::process_deposit_collateral(program_id, accounts, amount)
        }

        SynthEngineInstruction::MintDebt { amount } => {
            msg!("Instruction: MintDebt");
            engine::mint::process_mint_debt(program_id, accounts, amount)
        }

        SynthEngineInstruction::DepositAndMint {
            deposit_amount,
            mint_amount,
        } => {
            msg!("Instruction: DepositAndMint");
            engine::deposit::process_deposit_and_mint(
                program_id,
                accounts,
                deposit_amount,
                mint_amount,
            )
        }

        SynthEngineInstruction::RedeemCollateral { amount } => {
            msg!("Instruction: RedeemCollateral");
            engine::redeem::process_redeem_collateral(program_id, accounts, amount)
        }

        SynthEngineInstruction::BurnDebt { amount } => {
            msg!("Instruction: BurnDebt");
            engine::burn::process_burn_debt(program_id, accounts, amount)
        }

        SynthEngineInstruction::RedeemForDebt {
            redeem_amount,
            burn_amount,
        } => {
            msg!("Instruction: RedeemForDebt");
            engine::redeem::process_redeem_for_debt(program_id, accounts, redeem_amount, burn_amount)
        }

        SynthEngineInstruction::Liquidate { debt_to_cover } => {
            msg!("Instruction: Liquidate");
            engine::liquidate::process_liquidate(program_id, accounts, debt_to_cover)
        }
    }
}
