use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::*;

#[event_cpi]
#[derive(Accounts)]
pub struct ClaimRewardsCtx<'info> {
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
        mut,
        has_one = pool @ PresaleError::InvalidPool,
    )]
    pub purchase_receipt: Box<Account<'info, PurchaseReceipt>>,

    /// Token account holding the identity token of the receipt
    pub owner_original_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = mint,
        associated_token::authority = owner,
        associated_token::token_program = token_program,
    )]
    pub owner_reward_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handle_claim_rewards(ctx: Context<ClaimRewardsCtx>) -> Result<()> {
    let current_timestamp: u64 = Clock::get()?.unix_timestamp.safe_cast()?;

    // 1. Ensure the signer holds the identity token
    validate_receipt_owner(
        &ctx.accounts.purchase_receipt,
        &ctx.accounts.owner_original_token,
        &ctx.accounts.owner.key(),
    )?;

    // 2. Process claim
    let pool_info = ctx.accounts.pool.to_account_info();
    let receipt = &mut ctx.accounts.purchase_receipt;
    let pool = &mut ctx.accounts.pool;
    let claim_amount = pool.claim_rewards(receipt, current_timestamp)?;

    // 3. Transfer
    let seed_prefix = pool.get_seed_prefix();
    let pool_key_bytes = pool.identifier.to_le_bytes();
    let bump = [pool.bump];
    let signer_seeds: &[&[&[u8]]] = &[&pool_seeds!(seed_prefix, pool_key_bytes, bump)[..]];
    transfer_from_pool(
        pool_info,
        signer_seeds,
        &ctx.accounts.mint,
        ctx.accounts.pool_reward_vault.to_account_info(),
        ctx.accounts.owner_reward_token.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        claim_amount,
    )?;

    emit_cpi!(EvtClaimRewards {
        pool: ctx.accounts.pool.key(),
        purchase_receipt: ctx.accounts.purchase_receipt.key(),
        owner: ctx.accounts.owner.key(),
        claim_amount,
        receipt_total_claim_amount: ctx.accounts.purchase_receipt.mint_claimed,
        pool_total_claim_amount: ctx.accounts.pool.total_mint_claimed,
    });

    Ok(())
}
