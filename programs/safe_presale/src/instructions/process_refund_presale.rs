use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::*;

#[event_cpi]
#[derive(Accounts)]
pub struct RefundPresaleCtx<'info> {
    #[account(
        mut,
        has_one = quote_mint @ PresaleError::InvalidQuoteMint,
    )]
    pub pool: Box<Account<'info, Pool>>,

    pub quote_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = quote_mint,
        associated_token::authority = pool,
        associated_token::token_program = token_program,
    )]
    pub pool_quote_vault: Box<InterfaceAccount<'info, TokenAccount>>,

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
        associated_token::mint = quote_mint,
        associated_token::authority = owner,
        associated_token::token_program = token_program,
    )]
    pub owner_quote_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handle_refund_presale(ctx: Context<RefundPresaleCtx>) -> Result<()> {
    let current_timestamp: u64 = Clock::get()?.unix_timestamp.safe_cast()?;

    // 1. Ensure the signer holds the identity token
    validate_receipt_owner(
        &ctx.accounts.purchase_receipt,
        &ctx.accounts.owner_original_token,
        &ctx.accounts.owner.key(),
    )?;

    // 2. Process refund
    let pool_info = ctx.accounts.pool.to_account_info();
    let receipt = &mut ctx.accounts.purchase_receipt;
    let pool = &mut ctx.accounts.pool;
    let refund_amount = pool.refund(receipt, current_timestamp)?;

    // 3. Transfer
    let seed_prefix = pool.get_seed_prefix();
    let pool_key_bytes = pool.identifier.to_le_bytes();
    let bump = [pool.bump];
    let signer_seeds: &[&[&[u8]]] = &[&pool_seeds!(seed_prefix, pool_key_bytes, bump)[..]];
    transfer_from_pool(
        pool_info,
        signer_seeds,
        &ctx.accounts.quote_mint,
        ctx.accounts.pool_quote_vault.to_account_info(),
        ctx.accounts.owner_quote_token.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        refund_amount,
    )?;

    // 4. Hand native SOL back as lamports
    if ctx.accounts.quote_mint.key() == NATIVE_MINT {
        unwrap_native(
            &ctx.accounts.owner,
            &ctx.accounts.owner_quote_token,
            &ctx.accounts.token_program,
        )?;
    }

    emit_cpi!(EvtRefund {
        pool: ctx.accounts.pool.key(),
        purchase_receipt: ctx.accounts.purchase_receipt.key(),
        owner: ctx.accounts.owner.key(),
        refund_amount,
        pool_total_refund_amount: ctx.accounts.pool.liquidity_refunded,
    });

    Ok(())
}
