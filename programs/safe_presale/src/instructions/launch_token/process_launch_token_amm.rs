use crate::{
    instructions::launch_token::process_settle_launch::{
        process_settle_launch, ProcessSettleLaunchArgs,
    },
    *,
};
use anchor_spl::{
    associated_token::AssociatedToken,
    token::Token,
    token_interface::{Mint, TokenAccount},
};

#[event_cpi]
#[derive(Accounts)]
pub struct LaunchTokenAmmCtx<'info> {
    #[account(
        mut,
        has_one = mint @ PresaleError::InvalidRewardMint,
        has_one = quote_mint @ PresaleError::InvalidQuoteMint,
    )]
    pub pool: Box<Account<'info, Pool>>,

    pub mint: Box<InterfaceAccount<'info, Mint>>,
    pub quote_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = pool,
        associated_token::token_program = token_program,
    )]
    pub pool_reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = quote_mint,
        associated_token::authority = pool,
        associated_token::token_program = token_program,
    )]
    pub pool_quote_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: pool lp vault, created during the launch
    #[account(mut)]
    pub pool_lp_token: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = mint,
        associated_token::authority = authority,
        associated_token::token_program = token_program,
    )]
    pub authority_reward_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = quote_mint,
        associated_token::authority = authority,
        associated_token::token_program = token_program,
    )]
    pub authority_quote_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: authority lp token account, created by the amm
    #[account(mut)]
    pub authority_lp_token: UncheckedAccount<'info>,

    /// CHECK: amm program
    #[account(address = venue_program::RAYDIUM_AMM_V4 @ PresaleError::InvalidVenueAccounts)]
    pub amm_program: UncheckedAccount<'info>,

    /// CHECK: validated by the amm program
    #[account(mut)]
    pub amm_pool: UncheckedAccount<'info>,

    /// CHECK: validated by the amm program
    pub amm_authority: UncheckedAccount<'info>,

    /// CHECK: validated by the amm program
    #[account(mut)]
    pub amm_open_orders: UncheckedAccount<'info>,

    /// CHECK: validated by the amm program
    #[account(mut)]
    pub amm_lp_mint: UncheckedAccount<'info>,

    /// CHECK: validated by the amm program
    #[account(mut)]
    pub amm_coin_vault: UncheckedAccount<'info>,

    /// CHECK: validated by the amm program
    #[account(mut)]
    pub amm_pc_vault: UncheckedAccount<'info>,

    /// CHECK: validated by the amm program
    #[account(mut)]
    pub amm_target_orders: UncheckedAccount<'info>,

    /// CHECK: validated by the amm program
    pub amm_config: UncheckedAccount<'info>,

    /// CHECK: validated by the amm program
    #[account(mut)]
    pub create_fee_destination: UncheckedAccount<'info>,

    /// CHECK: openbook program
    pub market_program: UncheckedAccount<'info>,

    /// CHECK: owner checked against the market program
    pub market: UncheckedAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handle_launch_token_amm(
    mut ctx: Context<LaunchTokenAmmCtx>,
    nonce: u8,
    open_time: u64,
) -> Result<()> {
    let current_timestamp: u64 = Clock::get()?.unix_timestamp.safe_cast()?;

    let pool_info = ctx.accounts.pool.to_account_info();
    let seed_prefix = ctx.accounts.pool.get_seed_prefix();
    let pool_key_bytes = ctx.accounts.pool.identifier.to_le_bytes();
    let bump = [ctx.accounts.pool.bump];
    let signer_seeds: &[&[&[u8]]] = &[&pool_seeds!(seed_prefix, pool_key_bytes, bump)[..]];

    // Coin is token 0
    let accounts = &mut ctx.accounts;
    let (_, _, reward_is_token_0) = sort_mints(accounts.mint.key(), accounts.quote_mint.key());
    let (coin_mint, pc_mint, user_token_coin, user_token_pc, pool_token_coin, pool_token_pc) =
        if reward_is_token_0 {
            (
                &accounts.mint,
                &accounts.quote_mint,
                &accounts.authority_reward_token,
                &accounts.authority_quote_token,
                &accounts.pool_reward_vault,
                &accounts.pool_quote_vault,
            )
        } else {
            (
                &accounts.quote_mint,
                &accounts.mint,
                &accounts.authority_quote_token,
                &accounts.authority_reward_token,
                &accounts.pool_quote_vault,
                &accounts.pool_reward_vault,
            )
        };

    let mut venue = RaydiumAmmVenue {
        amm_program: accounts.amm_program.to_account_info(),
        amm_pool: accounts.amm_pool.to_account_info(),
        amm_authority: accounts.amm_authority.to_account_info(),
        amm_open_orders: accounts.amm_open_orders.to_account_info(),
        amm_lp_mint: accounts.amm_lp_mint.to_account_info(),
        amm_coin_vault: accounts.amm_coin_vault.to_account_info(),
        amm_pc_vault: accounts.amm_pc_vault.to_account_info(),
        amm_target_orders: accounts.amm_target_orders.to_account_info(),
        amm_config: accounts.amm_config.to_account_info(),
        create_fee_destination: accounts.create_fee_destination.to_account_info(),
        market_program: accounts.market_program.to_account_info(),
        market: accounts.market.to_account_info(),
        coin_mint,
        pc_mint,
        user_wallet: accounts.authority.to_account_info(),
        user_token_coin: user_token_coin.to_account_info(),
        user_token_pc: user_token_pc.to_account_info(),
        user_token_lp: accounts.authority_lp_token.to_account_info(),
        pool: pool_info.clone(),
        pool_signer_seeds: signer_seeds,
        pool_token_coin: pool_token_coin.to_account_info(),
        pool_token_pc: pool_token_pc.to_account_info(),
        pool_token_lp: accounts.pool_lp_token.to_account_info(),
        token_program: accounts.token_program.to_account_info(),
        associated_token_program: accounts.associated_token_program.to_account_info(),
        system_program: accounts.system_program.to_account_info(),
        rent: accounts.rent.to_account_info(),
        nonce,
        open_time,
    };

    let LaunchOutcome {
        plan,
        venue_pool,
        position,
    } = launch_pool(
        &mut accounts.pool,
        &accounts.authority.key(),
        LaunchStrategy::ConstantProduct,
        &LaunchArgs::default(),
        &mut venue,
        current_timestamp,
    )?;

    process_settle_launch(ProcessSettleLaunchArgs {
        pool: pool_info,
        pool_signer_seeds: signer_seeds,
        mint: &accounts.mint,
        quote_mint: &accounts.quote_mint,
        pool_reward_vault: accounts.pool_reward_vault.to_account_info(),
        pool_quote_vault: accounts.pool_quote_vault.to_account_info(),
        authority_quote_token: accounts.authority_quote_token.to_account_info(),
        token_program: accounts.token_program.to_account_info(),
        plan: &plan,
    })?;

    emit_cpi!(EvtLaunch {
        pool: ctx.accounts.pool.key(),
        launch_strategy: ctx.accounts.pool.launch_strategy,
        venue_pool,
        lp_mint: position.lp_mint,
        lp_amount: position.lp_amount,
        liquidity: position.liquidity,
        sqrt_price_x64: plan.sqrt_price_x64,
        reward_amount: plan.get_reward_deposit(),
        quote_amount: plan.get_quote_deposit(),
        creator_fee: plan.creator_fee,
        reward_burned: plan.reward_residual,
        vesting_started_at: current_timestamp,
        vesting_period_end: ctx
            .accounts
            .pool
            .vesting_period_end
            .unwrap_or(current_timestamp),
    });

    Ok(())
}
