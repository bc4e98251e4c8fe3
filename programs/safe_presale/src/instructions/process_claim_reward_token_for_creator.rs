use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::*;

#[event_cpi]
#[derive(Accounts)]
pub struct ClaimRewardTokenForCreatorCtx<'info> {
    #[account(
        mut,
        has_one = mint @ PresaleError::InvalidRewardMint,
    )]
    pub pool: Box<Account<'info, Pool>>,

    pub mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = pool,
        associated_token::token_program = token_program,
    )]
    pub pool_reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = mint,
        associated_token::authority = authority,
        associated_token::token_program = token_program,
    )]
    pub authority_reward_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handle_claim_reward_token_for_creator(
    ctx: Context<ClaimRewardTokenForCreatorCtx>,
) -> Result<()> {
    let current_timestamp: u64 = Clock::get()?.unix_timestamp.safe_cast()?;

    let pool_info = ctx.accounts.pool.to_account_info();
    let authority = ctx.accounts.authority.key();
    let pool = &mut ctx.accounts.pool;
    let claim_amount = pool.claim_creator_rewards(&authority, current_timestamp)?;

    let seed_prefix = pool.get_seed_prefix();
    let pool_key_bytes = pool.identifier.to_le_bytes();
    let bump = [pool.bump];
    let signer_seeds: &[&[&[u8]]] = &[&pool_seeds!(seed_prefix, pool_key_bytes, bump)[..]];
    transfer_from_pool(
        pool_info,
        signer_seeds,
        &ctx.accounts.mint,
        ctx.accounts.pool_reward_vault.to_account_info(),
        ctx.accounts.authority_reward_token.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        claim_amount,
    )?;

    emit_cpi!(EvtCreatorClaim {
        pool: ctx.accounts.pool.key(),
        authority,
        claim_amount,
        creator_total_claim_amount: ctx.accounts.pool.creator_mint_claimed,
    });

    Ok(())
}
