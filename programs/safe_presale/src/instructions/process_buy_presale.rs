use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::*;

#[event_cpi]
#[derive(Accounts)]
pub struct BuyPresaleCtx<'info> {
    #[account(
        mut,
        has_one = quote_mint @ PresaleError::InvalidQuoteMint,
    )]
    pub pool: Box<Account<'info, Pool>>,

    pub quote_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = quote_mint,
        associated_token::authority = pool,
        associated_token::token_program = token_program,
    )]
    pub pool_quote_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Identity token the receipt is tied to
    pub original_mint: Box<InterfaceAccount<'info, Mint>>,

    /// CHECK: metaplex metadata of the identity token, validated when reading the collection
    pub original_mint_metadata: UncheckedAccount<'info>,

    /// Token account holding the identity token
    pub payer_original_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        seeds = [
            crate::constants::seeds::PURCHASE_RECEIPT_PREFIX.as_ref(),
            pool.key().as_ref(),
            original_mint.key().as_ref(),
        ],
        bump,
        payer = payer,
        space = 8 + PurchaseReceipt::INIT_SPACE
    )]
    pub purchase_receipt: Box<Account<'info, PurchaseReceipt>>,

    /// Source of the quote tokens. Left out to pay a native quote mint with lamports
    #[account(mut)]
    pub payer_quote_token: Option<Box<InterfaceAccount<'info, TokenAccount>>>,

    /// Required when the pool charges a buy fee
    #[account(mut)]
    pub fee_collector_token: Option<Box<InterfaceAccount<'info, TokenAccount>>>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> BuyPresaleCtx<'info> {
    fn pay(
        &self,
        destination: &InterfaceAccount<'info, TokenAccount>,
        amount: u64,
    ) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }

        match &self.payer_quote_token {
            Some(payer_quote_token) => transfer_from_user(
                &self.payer,
                &self.quote_mint,
                payer_quote_token,
                destination,
                &self.token_program,
                amount,
            ),
            None => {
                require_keys_eq!(
                    self.quote_mint.key(),
                    NATIVE_MINT,
                    PresaleError::InvalidQuoteMint
                );
                wrap_native(
                    &self.payer,
                    destination,
                    &self.system_program,
                    &self.token_program,
                    amount,
                )
            }
        }
    }
}

pub fn handle_buy_presale(ctx: Context<BuyPresaleCtx>, amount: u64) -> Result<()> {
    let current_timestamp: u64 = Clock::get()?.unix_timestamp.safe_cast()?;
    let pool_key = ctx.accounts.pool.key();

    // 1. Ensure pool is open and the window is running
    ctx.accounts
        .pool
        .validate_open_for_purchase(current_timestamp)?;

    // 2. Collection gate
    let original_mint = ctx.accounts.original_mint.key();
    if !ctx.accounts.pool.requires_collections.is_empty() {
        let collection = get_verified_collection(
            &ctx.accounts.original_mint_metadata.to_account_info(),
            &original_mint,
        )?;
        ctx.accounts
            .pool
            .validate_collection_membership(collection)?;
    }

    // 3. Identity token ownership
    require!(
        is_identity_token_owner(
            &ctx.accounts.payer_original_token,
            &original_mint,
            &ctx.accounts.payer.key(),
        ),
        PresaleError::NotOwner
    );

    // 4. Credit pool and receipt
    let receipt = &mut ctx.accounts.purchase_receipt;
    if !receipt.is_initialized() {
        receipt.initialize(
            ctx.bumps.purchase_receipt,
            pool_key,
            original_mint,
            ctx.accounts.payer.key(),
            current_timestamp,
        );
    }

    let pool = &mut ctx.accounts.pool;
    let BuyFeeExcludedCalculation {
        fee,
        amount_excluded_fee,
    } = pool.buy(receipt, amount)?;

    // 5. Transfer
    if fee > 0 {
        let fee_collector = pool.fee_collector.ok_or(PresaleError::InvalidFeeCollector)?;
        let fee_collector_token = ctx
            .accounts
            .fee_collector_token
            .as_ref()
            .ok_or(PresaleError::InvalidFeeCollector)?;
        require!(
            fee_collector_token.owner == fee_collector
                && fee_collector_token.mint == ctx.accounts.quote_mint.key(),
            PresaleError::InvalidFeeCollector
        );

        ctx.accounts.pay(fee_collector_token, fee)?;
    }

    ctx.accounts
        .pay(&ctx.accounts.pool_quote_vault, amount_excluded_fee)?;

    emit_cpi!(EvtBuyPresale {
        pool: pool_key,
        purchase_receipt: ctx.accounts.purchase_receipt.key(),
        original_mint,
        buyer: ctx.accounts.payer.key(),
        amount: amount_excluded_fee,
        fee,
        receipt_total_amount: ctx.accounts.purchase_receipt.amount,
        pool_liquidity_collected: ctx.accounts.pool.liquidity_collected,
    });

    Ok(())
}
