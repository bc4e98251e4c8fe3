use crate::*;

#[event_cpi]
#[derive(Accounts)]
pub struct InitIdentifierCtx<'info> {
    #[account(
        init,
        seeds = [crate::constants::seeds::IDENTIFIER_PREFIX.as_ref()],
        bump,
        payer = payer,
        space = 8 + Identifier::INIT_SPACE
    )]
    pub identifier: Account<'info, Identifier>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_init_identifier(ctx: Context<InitIdentifierCtx>) -> Result<()> {
    let identifier = &mut ctx.accounts.identifier;
    identifier.initialize(ctx.bumps.identifier);

    emit_cpi!(EvtIdentifierCreate {
        identifier: ctx.accounts.identifier.key(),
        count: ctx.accounts.identifier.count,
    });

    Ok(())
}
