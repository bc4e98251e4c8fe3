use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::*;

#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawPositionForCreatorCtx<'info> {
    #[account(mut)]
    pub pool: Box<Account<'info, Pool>>,

    pub position_nft_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = position_nft_mint,
        associated_token::authority = pool,
        associated_token::token_program = token_program,
    )]
    pub pool_position_nft_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = position_nft_mint,
        associated_token::authority = authority,
        associated_token::token_program = token_program,
    )]
    pub authority_position_nft_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handle_withdraw_position_for_creator(
    ctx: Context<WithdrawPositionForCreatorCtx>,
) -> Result<()> {
    let current_timestamp: u64 = Clock::get()?.unix_timestamp.safe_cast()?;

    let pool_info = ctx.accounts.pool.to_account_info();
    let authority = ctx.accounts.authority.key();
    let pool = &mut ctx.accounts.pool;
    pool.withdraw_creator_position(&authority, current_timestamp)?;

    let position_nft_mint = pool.lp_mint.ok_or(PresaleError::NotLaunched)?;
    require_keys_eq!(
        position_nft_mint,
        ctx.accounts.position_nft_mint.key(),
        PresaleError::InvalidLpMint
    );

    let seed_prefix = pool.get_seed_prefix();
    let pool_key_bytes = pool.identifier.to_le_bytes();
    let bump = [pool.bump];
    let signer_seeds: &[&[&[u8]]] = &[&pool_seeds!(seed_prefix, pool_key_bytes, bump)[..]];
    transfer_from_pool(
        pool_info,
        signer_seeds,
        &ctx.accounts.position_nft_mint,
        ctx.accounts.pool_position_nft_account.to_account_info(),
        ctx.accounts.authority_position_nft_account.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.pool_position_nft_account.amount,
    )?;

    emit_cpi!(EvtCreatorWithdrawPosition {
        pool: ctx.accounts.pool.key(),
        authority,
        position_nft_mint,
    });

    Ok(())
}
