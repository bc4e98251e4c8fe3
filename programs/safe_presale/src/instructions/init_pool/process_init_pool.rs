use crate::{
    instructions::init_pool::{
        process_create_metaplex_metadata::{
            process_create_mpl_token_metadata, ProcessCreateTokenMetadataArgs,
        },
        process_mint::{process_mint_token_supply, ProcessMintTokenSupplyArgs},
    },
    *,
};
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

#[event_cpi]
#[derive(Accounts)]
#[instruction(params: InitPoolArgs)]
pub struct InitPoolCtx<'info> {
    #[account(
        mut,
        seeds = [crate::constants::seeds::IDENTIFIER_PREFIX.as_ref()],
        bump = identifier.bump,
    )]
    pub identifier: Box<Account<'info, Identifier>>,

    /// Created on first use. An existing pool at this address is rejected by the handler
    #[account(
        init_if_needed,
        seeds = [
            get_pool_seed_prefix(params.random_key.is_some()),
            identifier.get_pool_key(params.random_key).to_le_bytes().as_ref(),
        ],
        bump,
        payer = authority,
        space = 8 + Pool::INIT_SPACE
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        init,
        signer,
        payer = authority,
        mint::decimals = params.decimals,
        mint::authority = pool,
        mint::token_program = token_program,
    )]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init,
        payer = authority,
        associated_token::mint = mint,
        associated_token::authority = pool,
        associated_token::token_program = token_program,
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub quote_mint: Box<InterfaceAccount<'info, Mint>>,

    /// CHECK: created and validated by the metadata program
    #[account(mut)]
    pub mint_metadata: UncheckedAccount<'info>,

    /// CHECK: metadata program
    #[account(address = mpl_token_metadata::ID)]
    pub metadata_program: UncheckedAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handle_init_pool(ctx: Context<InitPoolCtx>, params: &InitPoolArgs) -> Result<()> {
    // 1. Validate config
    params.validate()?;
    require_keys_neq!(
        ctx.accounts.mint.key(),
        ctx.accounts.quote_mint.key(),
        PresaleError::InvalidQuoteMint
    );

    let pool_info = ctx.accounts.pool.to_account_info();
    let pool = &mut ctx.accounts.pool;
    require!(!pool.is_initialized(), PresaleError::DuplicatePool);

    // 2. Initialize pool
    let current_timestamp: u64 = Clock::get()?.unix_timestamp.safe_cast()?;
    let pool_key = ctx.accounts.identifier.consume(params.random_key)?;

    pool.initialize(
        params,
        PoolAccountKeys {
            authority: ctx.accounts.authority.key(),
            mint: ctx.accounts.mint.key(),
            quote_mint: ctx.accounts.quote_mint.key(),
        },
        pool_key,
        ctx.bumps.pool,
        current_timestamp,
    )?;

    let seed_prefix = pool.get_seed_prefix();
    let pool_key_bytes = pool.identifier.to_le_bytes();
    let bump = [pool.bump];
    let signer_seeds: &[&[&[u8]]] = &[&pool_seeds!(seed_prefix, pool_key_bytes, bump)[..]];

    // 3. Reward token metadata
    process_create_mpl_token_metadata(ProcessCreateTokenMetadataArgs {
        system_program: ctx.accounts.system_program.to_account_info(),
        payer: ctx.accounts.authority.to_account_info(),
        pool: pool_info.clone(),
        authority: ctx.accounts.authority.to_account_info(),
        mint: ctx.accounts.mint.to_account_info(),
        metadata_program: ctx.accounts.metadata_program.to_account_info(),
        mint_metadata: ctx.accounts.mint_metadata.to_account_info(),
        pool_signer_seeds: signer_seeds,
        name: &params.name,
        symbol: &params.symbol,
        uri: &params.uri,
    })?;

    // 4. Mint the whole supply to the pool and give up the mint authority
    process_mint_token_supply(ProcessMintTokenSupplyArgs {
        mint: ctx.accounts.mint.to_account_info(),
        reward_vault: ctx.accounts.reward_vault.to_account_info(),
        pool: pool_info,
        token_program: ctx.accounts.token_program.to_account_info(),
        pool_signer_seeds: signer_seeds,
        total_supply: pool.total_supply,
    })?;

    emit_cpi!(EvtPoolCreate {
        pool: ctx.accounts.pool.key(),
        identifier: ctx.accounts.pool.identifier,
        authority: ctx.accounts.pool.authority,
        mint: ctx.accounts.pool.mint,
        quote_mint: ctx.accounts.pool.quote_mint,
        launch_strategy: ctx.accounts.pool.launch_strategy,
        total_supply: ctx.accounts.pool.total_supply,
        initial_supply_for_creator: ctx.accounts.pool.initial_supply_for_creator,
        liquidity_pool_supply: ctx.accounts.pool.liquidity_pool_supply,
        presale_target: ctx.accounts.pool.presale_target,
        max_amount_per_purchase: ctx.accounts.pool.max_amount_per_purchase,
        creator_fee_basis_points: ctx.accounts.pool.creator_fee_basis_points,
        buy_fee_basis_points: ctx.accounts.pool.buy_fee_basis_points,
        presale_duration: ctx.accounts.pool.presale_duration,
        vesting_period: ctx.accounts.pool.vesting_period,
    });

    Ok(())
}
