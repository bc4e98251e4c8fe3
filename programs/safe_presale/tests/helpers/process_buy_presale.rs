use anchor_client::solana_sdk::{
    instruction::Instruction, pubkey::Pubkey, signature::Keypair, signer::Signer,
};
use anchor_lang::*;
use anchor_spl::associated_token::get_associated_token_address;
use litesvm::{types::FailedTransactionMetadata, LiteSVM};
use safe_presale::Pool;
use std::rc::Rc;

use crate::helpers::{
    derive_event_authority, derive_mint_metadata, derive_purchase_receipt, process_transaction,
    LiteSVMExt,
};

#[derive(Clone)]
pub struct HandleBuyPresaleArgs {
    pub pool: Pubkey,
    pub payer: Rc<Keypair>,
    pub original_mint: Pubkey,
    pub payer_original_token: Pubkey,
    /// None pays a native quote mint with lamports
    pub payer_quote_token: Option<Pubkey>,
    pub fee_collector_token: Option<Pubkey>,
    pub amount: u64,
}

pub fn create_buy_presale_ix(lite_svm: &LiteSVM, args: &HandleBuyPresaleArgs) -> Vec<Instruction> {
    let HandleBuyPresaleArgs {
        pool,
        payer,
        original_mint,
        payer_original_token,
        payer_quote_token,
        fee_collector_token,
        amount,
    } = args;

    let pool_state: Pool = lite_svm.get_deserialized_account(pool).unwrap();

    let ix_data = safe_presale::instruction::BuyPresale { amount: *amount }.data();

    let accounts = safe_presale::accounts::BuyPresaleCtx {
        pool: *pool,
        quote_mint: pool_state.quote_mint,
        pool_quote_vault: get_associated_token_address(pool, &pool_state.quote_mint),
        original_mint: *original_mint,
        original_mint_metadata: derive_mint_metadata(original_mint),
        payer_original_token: *payer_original_token,
        purchase_receipt: derive_purchase_receipt(pool, original_mint, &safe_presale::ID),
        payer_quote_token: *payer_quote_token,
        fee_collector_token: *fee_collector_token,
        payer: payer.pubkey(),
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

pub fn handle_buy_presale(lite_svm: &mut LiteSVM, args: HandleBuyPresaleArgs) {
    let instructions = create_buy_presale_ix(lite_svm, &args);
    let payer_pubkey = args.payer.pubkey();
    process_transaction(lite_svm, &instructions, Some(&payer_pubkey), &[&args.payer]).unwrap();
}

pub fn handle_buy_presale_err(
    lite_svm: &mut LiteSVM,
    args: HandleBuyPresaleArgs,
) -> FailedTransactionMetadata {
    let instructions = create_buy_presale_ix(lite_svm, &args);
    let payer_pubkey = args.payer.pubkey();
    process_transaction(lite_svm, &instructions, Some(&payer_pubkey), &[&args.payer]).unwrap_err()
}
