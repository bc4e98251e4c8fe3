use crate::*;

pub struct ConstantProductHandler;

impl LaunchStrategyHandler for ConstantProductHandler {
    fn build_launch_plan(&self, pool: &Pool, _launch_args: &LaunchArgs) -> Result<LaunchPlan> {
        let (quote_amount, creator_fee) = get_launch_quote_amounts(pool)?;
        let reward_amount = pool.liquidity_pool_supply;

        require!(
            quote_amount > 0 && reward_amount > 0,
            PresaleError::ZeroAmount
        );

        let (mint_0, mint_1, reward_is_token_0) = sort_mints(pool.mint, pool.quote_mint);
        let (amount_0, amount_1) = if reward_is_token_0 {
            (reward_amount, quote_amount)
        } else {
            (quote_amount, reward_amount)
        };

        Ok(LaunchPlan {
            mint_0,
            mint_1,
            reward_is_token_0,
            sqrt_price_x64: get_initial_sqrt_price_x64(amount_0, amount_1)?,
            deposit: LiquidityDeposit {
                amount_0,
                amount_1,
                liquidity: get_constant_product_liquidity(amount_0, amount_1)?,
                tick_range: None,
            },
            creator_fee,
            quote_residual: 0,
            reward_residual: 0,
        })
    }

    fn can_distribute_lp_tokens(&self) -> bool {
        true
    }

    fn can_withdraw_position(&self) -> bool {
        false
    }
}
