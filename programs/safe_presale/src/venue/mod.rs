use crate::*;
use anchor_lang::solana_program::{
    instruction::{AccountMeta, Instruction},
    program::invoke,
};

mod raydium_amm;
pub use raydium_amm::*;

mod raydium_clmm;
pub use raydium_clmm::*;

/// Invokes a venue instruction. Every signer is a transaction signer, the pool pda never signs
/// for the venue.
fn invoke_venue(
    program: &AccountInfo,
    accounts: Vec<AccountMeta>,
    data: Vec<u8>,
    account_infos: &[AccountInfo],
) -> Result<()> {
    invoke(
        &Instruction {
            program_id: program.key(),
            accounts,
            data,
        },
        account_infos,
    )?;
    Ok(())
}
