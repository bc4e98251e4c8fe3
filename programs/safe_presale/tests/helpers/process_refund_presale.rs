use anchor_client::solana_sdk::{
    instruction::Instruction, pubkey::Pubkey, signature::Keypair, signer::Signer,
};
use anchor_lang::*;
use anchor_spl::associated_token::get_associated_token_address;
use litesvm::{types::FailedTransactionMetadata, LiteSVM};
use safe_presale::Pool;
use std::rc::Rc;

use crate::helpers::{
    derive_event_authority, derive_purchase_receipt, process_transaction, LiteSVMExt,
};

#[derive(Clone)]
pub struct HandleRefundPresaleArgs {
    pub pool: Pubkey,
    pub owner: Rc<Keypair>,
    pub original_mint: Pubkey,
    pub owner_original_token: Pubkey,
}

pub fn create_refund_presale_ix(
    lite_svm: &LiteSVM,
    args: &HandleRefundPresaleArgs,
) -> Vec<Instruction> {
    let HandleRefundPresaleArgs {
        pool,
        owner,
        original_mint,
        owner_original_token,
    } = args;

    let pool_state: Pool = lite_svm.get_deserialized_account(pool).unwrap();
    let owner_pubkey = owner.pubkey();

    let ix_data = safe_presale::instruction::RefundPresale {}.data();

    let accounts = safe_presale::accounts::RefundPresaleCtx {
        pool: *pool,
        quote_mint: pool_state.quote_mint,
        pool_quote_vault: get_associated_token_address(pool, &pool_state.quote_mint),
        purchase_receipt: derive_purchase_receipt(pool, original_mint, &safe_presale::ID),
        owner_original_token: *owner_original_token,
        owner_quote_token: get_associated_token_address(&owner_pubkey, &pool_state.quote_mint),
        owner: owner_pubkey,
        token_program: anchor_spl::token::ID,
        associated_token_program: anchor_spl::associated_token::ID,
        system_program: anchor_lang::system_program::ID,
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

pub fn handle_refund_presale(lite_svm: &mut LiteSVM, args: HandleRefundPresaleArgs) {
    let instructions = create_refund_presale_ix(lite_svm, &args);
    let owner_pubkey = args.owner.pubkey();
    process_transaction(lite_svm, &instructions, Some(&owner_pubkey), &[&args.owner]).unwrap();
}

pub fn handle_refund_presale_err(
    lite_svm: &mut LiteSVM,
    args: HandleRefundPresaleArgs,
) -> FailedTransactionMetadata {
    let instructions = create_refund_presale_ix(lite_svm, &args);
    let owner_pubkey = args.owner.pubkey();
    process_transaction(lite_svm, &instructions, Some(&owner_pubkey), &[&args.owner]).unwrap_err()
}
