use crate::*;

mod constant_product;
pub use constant_product::*;

mod concentrated_liquidity;
pub use concentrated_liquidity::*;

/// Token amounts handed to the venue, in venue token order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LiquidityDeposit {
    pub amount_0: u64,
    pub amount_1: u64,
    /// Position liquidity. For constant product pools this is sqrt(amount_0 * amount_1)
    pub liquidity: u128,
    /// Price range of a concentrated liquidity position
    pub tick_range: Option<TickRange>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiquidityPosition {
    /// Lp mint, or position nft mint
    pub lp_mint: Pubkey,
    /// Lp tokens now held by the pool
    pub lp_amount: u64,
    pub liquidity: u128,
}

/// External market the pool hands its funds to at launch.
pub trait LiquidityVenue {
    fn create_market(&mut self, mint_0: Pubkey, mint_1: Pubkey) -> Result<Pubkey>;
    fn create_pool(&mut self, market: Pubkey, sqrt_price_x64: u128) -> Result<Pubkey>;
    fn provide_liquidity(
        &mut self,
        venue_pool: Pubkey,
        deposit: &LiquidityDeposit,
    ) -> Result<LiquidityPosition>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LaunchArgs {
    pub tick_spacing: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchPlan {
    pub mint_0: Pubkey,
    pub mint_1: Pubkey,
    pub reward_is_token_0: bool,
    pub sqrt_price_x64: u128,
    pub deposit: LiquidityDeposit,
    /// Quote paid to the creator out of the collected liquidity
    pub creator_fee: u64,
    /// Quote not needed by the venue. Goes to the creator along with the fee
    pub quote_residual: u64,
    /// Reward tokens not needed by the venue. Burned
    pub reward_residual: u64,
}

impl LaunchPlan {
    pub fn get_reward_deposit(&self) -> u64 {
        if self.reward_is_token_0 {
            self.deposit.amount_0
        } else {
            self.deposit.amount_1
        }
    }

    pub fn get_quote_deposit(&self) -> u64 {
        if self.reward_is_token_0 {
            self.deposit.amount_1
        } else {
            self.deposit.amount_0
        }
    }

    pub fn get_creator_proceeds(&self) -> Result<u64> {
        Ok(self.creator_fee.safe_add(self.quote_residual)?)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LaunchOutcome {
    pub plan: LaunchPlan,
    pub venue_pool: Pubkey,
    pub position: LiquidityPosition,
}

pub trait LaunchStrategyHandler {
    fn build_launch_plan(&self, pool: &Pool, launch_args: &LaunchArgs) -> Result<LaunchPlan>;
    fn can_distribute_lp_tokens(&self) -> bool;
    fn can_withdraw_position(&self) -> bool;
}

pub fn get_launch_strategy_handler(
    launch_strategy: LaunchStrategy,
) -> Box<dyn LaunchStrategyHandler> {
    match launch_strategy {
        LaunchStrategy::ConstantProduct => Box::new(ConstantProductHandler),
        LaunchStrategy::ConcentratedLiquidity => Box::new(ConcentratedLiquidityHandler),
    }
}

/// Venue token order. Both sides of a market agree on it by comparing mint bytes.
pub fn sort_mints(reward_mint: Pubkey, quote_mint: Pubkey) -> (Pubkey, Pubkey, bool) {
    if reward_mint.to_bytes() < quote_mint.to_bytes() {
        (reward_mint, quote_mint, true)
    } else {
        (quote_mint, reward_mint, false)
    }
}

/// Quote side of the launch: collected liquidity minus the creator fee.
pub fn get_launch_quote_amounts(pool: &Pool) -> Result<(u64, u64)> {
    let creator_fee = calculate_creator_fee(pool.liquidity_collected, pool.creator_fee_basis_points)?;
    let quote_amount = pool.liquidity_collected.safe_sub(creator_fee)?;
    Ok((quote_amount, creator_fee))
}

fn map_venue_error(err: Error) -> Error {
    msg!("Liquidity venue error: {}", err);
    PresaleError::LaunchVenueFailure.into()
}

/// Validates the launch, plans it for the pool strategy and hands the funds to `venue`.
/// The pool is only written once the venue accepted the liquidity.
pub fn launch_pool<V: LiquidityVenue + ?Sized>(
    pool: &mut Pool,
    signer: &Pubkey,
    launch_strategy: LaunchStrategy,
    launch_args: &LaunchArgs,
    venue: &mut V,
    current_timestamp: u64,
) -> Result<LaunchOutcome> {
    pool.validate_launch(signer, current_timestamp)?;
    require!(
        pool.get_launch_strategy()? == launch_strategy,
        PresaleError::InvalidLaunchStrategy
    );

    let handler = get_launch_strategy_handler(launch_strategy);
    let plan = handler.build_launch_plan(pool, launch_args)?;

    let market = venue
        .create_market(plan.mint_0, plan.mint_1)
        .map_err(map_venue_error)?;
    let venue_pool = venue
        .create_pool(market, plan.sqrt_price_x64)
        .map_err(map_venue_error)?;
    let position = venue
        .provide_liquidity(venue_pool, &plan.deposit)
        .map_err(map_venue_error)?;

    pool.complete_launch(&plan, venue_pool, &position, current_timestamp)?;

    Ok(LaunchOutcome {
        plan,
        venue_pool,
        position,
    })
}
