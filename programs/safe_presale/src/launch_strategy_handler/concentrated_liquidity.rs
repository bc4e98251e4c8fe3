use crate::*;

pub struct ConcentratedLiquidityHandler;

impl LaunchStrategyHandler for ConcentratedLiquidityHandler {
    fn build_launch_plan(&self, pool: &Pool, launch_args: &LaunchArgs) -> Result<LaunchPlan> {
        let (quote_amount, creator_fee) = get_launch_quote_amounts(pool)?;
        let reward_amount = pool.liquidity_pool_supply;

        require!(
            quote_amount > 0 && reward_amount > 0,
            PresaleError::ZeroAmount
        );

        let (mint_0, mint_1, reward_is_token_0) = sort_mints(pool.mint, pool.quote_mint);
        let (available_0, available_1) = if reward_is_token_0 {
            (reward_amount, quote_amount)
        } else {
            (quote_amount, reward_amount)
        };

        let sqrt_price_x64 = get_initial_sqrt_price_x64(available_0, available_1)?;
        let tick_range =
            get_launch_tick_range(sqrt_price_x64, reward_is_token_0, launch_args.tick_spacing)?;
        let sqrt_price_lower_x64 = tick_range.sqrt_price_lower_x64()?;
        let sqrt_price_upper_x64 = tick_range.sqrt_price_upper_x64()?;

        let liquidity = get_liquidity_from_amounts(
            sqrt_price_x64,
            sqrt_price_lower_x64,
            sqrt_price_upper_x64,
            available_0,
            available_1,
        )?;
        require!(liquidity > 0, PresaleError::ZeroAmount);

        let (amount_0, amount_1) = get_amounts_for_liquidity(
            sqrt_price_x64,
            sqrt_price_lower_x64,
            sqrt_price_upper_x64,
            liquidity,
        )?;

        let residual_0 = available_0.safe_sub(amount_0)?;
        let residual_1 = available_1.safe_sub(amount_1)?;
        let (reward_residual, quote_residual) = if reward_is_token_0 {
            (residual_0, residual_1)
        } else {
            (residual_1, residual_0)
        };

        Ok(LaunchPlan {
            mint_0,
            mint_1,
            reward_is_token_0,
            sqrt_price_x64,
            deposit: LiquidityDeposit {
                amount_0,
                amount_1,
                liquidity,
                tick_range: Some(tick_range),
            },
            creator_fee,
            quote_residual,
            reward_residual,
        })
    }

    fn can_distribute_lp_tokens(&self) -> bool {
        false
    }

    fn can_withdraw_position(&self) -> bool {
        true
    }
}
