use crate::*;

#[event_cpi]
#[derive(Accounts)]
pub struct CancelPoolCtx<'info> {
    #[account(mut)]
    pub pool: Box<Account<'info, Pool>>,

    pub authority: Signer<'info>,
}

pub fn handle_cancel_pool(ctx: Context<CancelPoolCtx>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    ctx.accounts.pool.cancel(&authority)?;

    emit_cpi!(EvtPoolCancel {
        pool: ctx.accounts.pool.key(),
        authority,
        liquidity_collected: ctx.accounts.pool.liquidity_collected,
    });

    Ok(())
}
