use crate::*;
use anchor_spl::token_interface::Mint;

pub struct ProcessSettleLaunchArgs<'a, 'info> {
    pub pool: AccountInfo<'info>,
    pub pool_signer_seeds: &'a [&'a [&'a [u8]]],
    pub mint: &'a InterfaceAccount<'info, Mint>,
    pub quote_mint: &'a InterfaceAccount<'info, Mint>,
    pub pool_reward_vault: AccountInfo<'info>,
    pub pool_quote_vault: AccountInfo<'info>,
    pub authority_quote_token: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub plan: &'a LaunchPlan,
}

/// Pays the creator fee and the unused quote to the authority, and burns the unused reward tokens.
pub fn process_settle_launch(params: ProcessSettleLaunchArgs) -> Result<()> {
    let ProcessSettleLaunchArgs {
        pool,
        pool_signer_seeds,
        mint,
        quote_mint,
        pool_reward_vault,
        pool_quote_vault,
        authority_quote_token,
        token_program,
        plan,
    } = params;

    let creator_proceeds = plan.get_creator_proceeds()?;
    if creator_proceeds > 0 {
        transfer_from_pool(
            pool.clone(),
            pool_signer_seeds,
            quote_mint,
            pool_quote_vault,
            authority_quote_token,
            token_program.clone(),
            creator_proceeds,
        )?;
    }

    if plan.reward_residual > 0 {
        burn_from_pool(
            pool,
            pool_signer_seeds,
            mint.to_account_info(),
            pool_reward_vault,
            token_program,
            plan.reward_residual,
        )?;
    }

    Ok(())
}
