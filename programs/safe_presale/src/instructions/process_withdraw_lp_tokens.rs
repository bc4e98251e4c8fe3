use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::*;

#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawLpTokensCtx<'info> {
    #[account(mut)]
    pub pool: Box<Account<'info, Pool>>,

    pub lp_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = lp_mint,
        associated_token::authority = pool,
        associated_token::token_program = token_program,
    )]
    pub pool_lp_token: Box<InterfaceAccount<'info, TokenAccount>>,

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
        associated_token::mint = lp_mint,
        associated_token::authority = owner,
        associated_token::token_program = token_program,
    )]
    pub owner_lp_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handle_withdraw_lp_tokens(ctx: Context<WithdrawLpTokensCtx>) -> Result<()> {
    let current_timestamp: u64 = Clock::get()?.unix_timestamp.safe_cast()?;

    // 1. Ensure the signer holds the identity token
    validate_receipt_owner(
        &ctx.accounts.purchase_receipt,
        &ctx.accounts.owner_original_token,
        &ctx.accounts.owner.key(),
    )?;

    // 2. Ensure lp mint is the one recorded at launch
    let lp_mint = ctx.accounts.pool.lp_mint.ok_or(PresaleError::NotLaunched)?;
    require_keys_eq!(
        lp_mint,
        ctx.accounts.lp_mint.key(),
        PresaleError::InvalidLpMint
    );

    // 3. Process withdraw
    let pool_info = ctx.accounts.pool.to_account_info();
    let receipt = &mut ctx.accounts.purchase_receipt;
    let pool = &mut ctx.accounts.pool;
    let withdraw_amount = pool.withdraw_lp_tokens(receipt, current_timestamp)?;

    // 4. Transfer
    let seed_prefix = pool.get_seed_prefix();
    let pool_key_bytes = pool.identifier.to_le_bytes();
    let bump = [pool.bump];
    let signer_seeds: &[&[&[u8]]] = &[&pool_seeds!(seed_prefix, pool_key_bytes, bump)[..]];
    transfer_from_pool(
        pool_info,
        signer_seeds,
        &ctx.accounts.lp_mint,
        ctx.accounts.pool_lp_token.to_account_info(),
        ctx.accounts.owner_lp_token.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        withdraw_amount,
    )?;

    emit_cpi!(EvtWithdrawLpTokens {
        pool: ctx.accounts.pool.key(),
        purchase_receipt: ctx.accounts.purchase_receipt.key(),
        owner: ctx.accounts.owner.key(),
        withdraw_amount,
        receipt_total_withdraw_amount: ctx.accounts.purchase_receipt.lp_claimed,
        pool_total_withdraw_amount: ctx.accounts.pool.total_lp_claimed,
    });

    Ok(())
}
