use anchor_client::solana_sdk::{
    instruction::Instruction, pubkey::Pubkey, signature::Keypair, signer::Signer,
};
use anchor_lang::*;
use litesvm::{types::FailedTransactionMetadata, LiteSVM};
use std::rc::Rc;

use crate::helpers::{derive_event_authority, process_transaction};

#[derive(Clone)]
pub struct HandleCancelPoolArgs {
    pub pool: Pubkey,
    pub authority: Rc<Keypair>,
}

pub fn create_cancel_pool_ix(args: &HandleCancelPoolArgs) -> Vec<Instruction> {
    let ix_data = safe_presale::instruction::CancelPool {}.data();

    let accounts = safe_presale::accounts::CancelPoolCtx {
        pool: args.pool,
        authority: args.authority.pubkey(),
        event_authority: derive_event_authority(&safe_presale::ID),
        program: safe_presale::ID,
    }
    .to_account_metas(None);

    vec![Instruction {
        program_id: safe_presale::ID,
        accounts,
        data: ix_data,
    }]
}

pub fn handle_cancel_pool(lite_svm: &mut LiteSVM, args: HandleCancelPoolArgs) {
    let instructions = create_cancel_pool_ix(&args);
    let authority_pubkey = args.authority.pubkey();
    process_transaction(
        lite_svm,
        &instructions,
        Some(&authority_pubkey),
        &[&args.authority],
    )
    .unwrap();
}

pub fn handle_cancel_pool_err(
    lite_svm: &mut LiteSVM,
    args: HandleCancelPoolArgs,
) -> FailedTransactionMetadata {
    let instructions = create_cancel_pool_ix(&args);
    let authority_pubkey = args.authority.pubkey();
    process_transaction(
        lite_svm,
        &instructions,
        Some(&authority_pubkey),
        &[&args.authority],
    )
    .unwrap_err()
}
