use crate::{
    instructions::launch_token::process_settle_launch::{
        process_settle_launch, ProcessSettleLaunchArgs,
    },
    *,
};
use anchor_spl::{
    associated_token::AssociatedToken,
    token::Token,
    token_2022::Token2022,
    token_interface::{Mint, TokenAccount},
};

#[event_cpi]
#[derive(Accounts)]
pub struct LaunchTokenClmmCtx<'info> {
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

    /// CHECK: clmm program
    #[account(address = venue_program::RAYDIUM_CLMM @ PresaleError::InvalidVenueAccounts)]
    pub clmm_program: UncheckedAccount<'info>,

    /// CHECK: owner checked against the clmm program
    pub amm_config: UncheckedAccount<'info>,

    /// CHECK: validated by the clmm program
    #[account(mut)]
    pub pool_state: UncheckedAccount<'info>,

    /// CHECK: validated by the clmm program
    #[account(mut)]
    pub token_vault_0: UncheckedAccount<'info>,

    /// CHECK: validated by the clmm program
    #[account(mut)]
    pub token_vault_1: UncheckedAccount<'info>,

    /// CHECK: validated by the clmm program
    #[account(mut)]
    pub observation_state: UncheckedAccount<'info>,

    /// CHECK: validated by the clmm program
    #[account(mut)]
    pub tick_array_bitmap: UncheckedAccount<'info>,

    /// CHECK: validated by the clmm program
    #[account(mut)]
    pub protocol_position: UncheckedAccount<'info>,

    /// CHECK: validated by the clmm program
    #[account(mut)]
    pub tick_array_lower: UncheckedAccount<'info>,

    /// CHECK: validated by the clmm program
    #[account(mut)]
    pub tick_array_upper: UncheckedAccount<'info>,

    /// CHECK: validated by the clmm program
    #[account(mut)]
    pub personal_position: UncheckedAccount<'info>,

    #[account(mut)]
    pub position_nft_mint: Signer<'info>,

    /// CHECK: pool position nft account, created by the clmm program
    #[account(mut)]
    pub position_nft_account: UncheckedAccount<'info>,

    /// CHECK: position nft metadata, created by the clmm program
    #[account(mut)]
    pub position_metadata: UncheckedAccount<'info>,

    /// CHECK: metadata program
    #[account(address = mpl_token_metadata::ID)]
    pub metadata_program: UncheckedAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub token_program_2022: Program<'info, Token2022>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handle_launch_token_clmm(
    mut ctx: Context<LaunchTokenClmmCtx>,
    tick_spacing: u16,
    open_time: u64,
) -> Result<()> {
    let current_timestamp: u64 = Clock::get()?.unix_timestamp.safe_cast()?;

    let pool_info = ctx.accounts.pool.to_account_info();
    let seed_prefix = ctx.accounts.pool.get_seed_prefix();
    let pool_key_bytes = ctx.accounts.pool.identifier.to_le_bytes();
    let bump = [ctx.accounts.pool.bump];
    let signer_seeds: &[&[&[u8]]] = &[&pool_seeds!(seed_prefix, pool_key_bytes, bump)[..]];

    let accounts = &mut ctx.accounts;
    let (_, _, reward_is_token_0) = sort_mints(accounts.mint.key(), accounts.quote_mint.key());
    let (mint_0, mint_1, user_token_0, user_token_1, pool_token_0, pool_token_1) =
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

    let mut venue = RaydiumClmmVenue {
        clmm_program: accounts.clmm_program.to_account_info(),
        amm_config: accounts.amm_config.to_account_info(),
        pool_state: accounts.pool_state.to_account_info(),
        token_vault_0: accounts.token_vault_0.to_account_info(),
        token_vault_1: accounts.token_vault_1.to_account_info(),
        observation_state: accounts.observation_state.to_account_info(),
        tick_array_bitmap: accounts.tick_array_bitmap.to_account_info(),
        protocol_position: accounts.protocol_position.to_account_info(),
        tick_array_lower: accounts.tick_array_lower.to_account_info(),
        tick_array_upper: accounts.tick_array_upper.to_account_info(),
        personal_position: accounts.personal_position.to_account_info(),
        position_nft_mint: accounts.position_nft_mint.to_account_info(),
        position_nft_account: accounts.position_nft_account.to_account_info(),
        position_metadata: accounts.position_metadata.to_account_info(),
        mint_0,
        mint_1,
        user_wallet: accounts.authority.to_account_info(),
        user_token_0: user_token_0.to_account_info(),
        user_token_1: user_token_1.to_account_info(),
        pool: pool_info.clone(),
        pool_signer_seeds: signer_seeds,
        pool_token_0: pool_token_0.to_account_info(),
        pool_token_1: pool_token_1.to_account_info(),
        token_program: accounts.token_program.to_account_info(),
        token_program_2022: accounts.token_program_2022.to_account_info(),
        associated_token_program: accounts.associated_token_program.to_account_info(),
        metadata_program: accounts.metadata_program.to_account_info(),
        system_program: accounts.system_program.to_account_info(),
        rent: accounts.rent.to_account_info(),
        open_time,
    };

    let LaunchOutcome {
        plan,
        venue_pool,
        position,
    } = launch_pool(
        &mut accounts.pool,
        &accounts.authority.key(),
        LaunchStrategy::ConcentratedLiquidity,
        &LaunchArgs { tick_spacing },
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
