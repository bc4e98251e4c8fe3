use anchor_spl::token_interface::TokenAccount;

use crate::*;

#[event_cpi]
#[derive(Accounts)]
pub struct CheckClaimEligibilityCtx<'info> {
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        mut,
        has_one = pool @ PresaleError::InvalidPool,
    )]
    pub purchase_receipt: Box<Account<'info, PurchaseReceipt>>,

    /// Token account holding the identity token of the receipt
    pub owner_original_token: Box<InterfaceAccount<'info, TokenAccount>>,

    pub owner: Signer<'info>,
}

pub fn handle_check_claim_eligibility(ctx: Context<CheckClaimEligibilityCtx>) -> Result<()> {
    let current_timestamp: u64 = Clock::get()?.unix_timestamp.safe_cast()?;

    validate_receipt_owner(
        &ctx.accounts.purchase_receipt,
        &ctx.accounts.owner_original_token,
        &ctx.accounts.owner.key(),
    )?;

    let receipt = &mut ctx.accounts.purchase_receipt;
    ctx.accounts
        .pool
        .check_claim_eligibility(receipt, current_timestamp)?;

    emit_cpi!(EvtCheckClaimEligibility {
        pool: ctx.accounts.pool.key(),
        purchase_receipt: ctx.accounts.purchase_receipt.key(),
        mint_eligible: ctx.accounts.purchase_receipt.mint_eligible.unwrap_or_default(),
        lp_eligible: ctx.accounts.purchase_receipt.lp_eligible,
    });

    Ok(())
}
