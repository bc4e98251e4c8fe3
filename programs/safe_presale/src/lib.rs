#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

#[macro_use]
pub mod macros;

mod errors;
pub use errors::*;

mod instructions;
pub use instructions::*;

mod constants;
pub use constants::*;

mod state;
pub use state::*;

mod events;
pub use events::*;

mod math;
pub use math::*;

mod metadata;
pub use metadata::*;

mod token;
pub use token::*;

mod launch_strategy_handler;
pub use launch_strategy_handler::*;

mod venue;
pub use venue::*;

declare_id!("6DvsdPa3nXFjFG8ENuABoWeRjQaHUks2pKKqGD9ihekw");

#[program]
pub mod safe_presale {
    use super::*;

    pub fn init_identifier(ctx: Context<InitIdentifierCtx>) -> Result<()> {
        instructions::handle_init_identifier(ctx)
    }

    pub fn init_pool(ctx: Context<InitPoolCtx>, params: InitPoolArgs) -> Result<()> {
        instructions::handle_init_pool(ctx, &params)
    }

    pub fn buy_presale(ctx: Context<BuyPresaleCtx>, amount: u64) -> Result<()> {
        instructions::handle_buy_presale(ctx, amount)
    }

    pub fn launch_token_amm(
        ctx: Context<LaunchTokenAmmCtx>,
        nonce: u8,
        open_time: u64,
    ) -> Result<()> {
        instructions::handle_launch_token_amm(ctx, nonce, open_time)
    }

    pub fn launch_token_clmm(
        ctx: Context<LaunchTokenClmmCtx>,
        tick_spacing: u16,
        open_time: u64,
    ) -> Result<()> {
        instructions::handle_launch_token_clmm(ctx, tick_spacing, open_time)
    }

    pub fn check_claim_eligibility(ctx: Context<CheckClaimEligibilityCtx>) -> Result<()> {
        instructions::handle_check_claim_eligibility(ctx)
    }

    pub fn claim_rewards(ctx: Context<ClaimRewardsCtx>) -> Result<()> {
        instructions::handle_claim_rewards(ctx)
    }

    pub fn withdraw_lp_tokens(ctx: Context<WithdrawLpTokensCtx>) -> Result<()> {
        instructions::handle_withdraw_lp_tokens(ctx)
    }

    pub fn claim_reward_token_for_creator(
        ctx: Context<ClaimRewardTokenForCreatorCtx>,
    ) -> Result<()> {
        instructions::handle_claim_reward_token_for_creator(ctx)
    }

    pub fn withdraw_position_for_creator(
        ctx: Context<WithdrawPositionForCreatorCtx>,
    ) -> Result<()> {
        instructions::handle_withdraw_position_for_creator(ctx)
    }

    pub fn cancel_pool(ctx: Context<CancelPoolCtx>) -> Result<()> {
        instructions::handle_cancel_pool(ctx)
    }

    pub fn refund_presale(ctx: Context<RefundPresaleCtx>) -> Result<()> {
        instructions::handle_refund_presale(ctx)
    }
}
