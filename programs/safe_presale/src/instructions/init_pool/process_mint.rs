use crate::*;
use anchor_spl::{token_2022::spl_token_2022::instruction::AuthorityType, token_interface::*};

pub struct ProcessMintTokenSupplyArgs<'a, 'info> {
    pub mint: AccountInfo<'info>,
    pub reward_vault: AccountInfo<'info>,
    pub pool: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub pool_signer_seeds: &'a [&'a [&'a [u8]]],
    pub total_supply: u64,
}

pub fn process_mint_token_supply(params: ProcessMintTokenSupplyArgs) -> Result<()> {
    let ProcessMintTokenSupplyArgs {
        mint,
        reward_vault,
        pool,
        token_program,
        pool_signer_seeds,
        total_supply,
    } = params;

    // 1. Mint
    mint_to_pool(
        pool.clone(),
        pool_signer_seeds,
        mint.clone(),
        reward_vault,
        token_program.clone(),
        total_supply,
    )?;

    // 2. Give up mint authority
    anchor_spl::token_interface::set_authority(
        CpiContext::new_with_signer(
            token_program,
            SetAuthority {
                current_authority: pool,
                account_or_mint: mint,
            },
            pool_signer_seeds,
        ),
        AuthorityType::MintTokens,
        None,
    )?;

    Ok(())
}
