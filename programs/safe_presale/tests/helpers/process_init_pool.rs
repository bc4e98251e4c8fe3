use anchor_client::solana_sdk::{
    compute_budget::ComputeBudgetInstruction, instruction::Instruction, pubkey::Pubkey,
    signature::Keypair, signer::Signer,
};
use anchor_lang::*;
use anchor_spl::associated_token::get_associated_token_address;
use litesvm::{types::FailedTransactionMetadata, LiteSVM};
use safe_presale::{Identifier, InitPoolArgs};
use std::rc::Rc;

use crate::helpers::{
    derive_event_authority, derive_identifier, derive_mint_metadata, derive_pool,
    process_transaction, LiteSVMExt,
};

#[derive(Clone)]
pub struct HandleInitPoolArgs {
    pub mint: Rc<Keypair>,
    pub quote_mint: Pubkey,
    pub authority: Rc<Keypair>,
    pub params: InitPoolArgs,
}

/// Builds the init pool instructions and the address the pool lands at.
pub fn create_init_pool_ix(lite_svm: &LiteSVM, args: &HandleInitPoolArgs) -> (Vec<Instruction>, Pubkey) {
    let HandleInitPoolArgs {
        mint,
        quote_mint,
        authority,
        params,
    } = args;

    let identifier = derive_identifier(&safe_presale::ID);
    let identifier_state: Identifier = lite_svm.get_deserialized_account(&identifier).unwrap();
    let pool_key = identifier_state.get_pool_key(params.random_key);
    let pool = derive_pool(pool_key, params.random_key.is_some(), &safe_presale::ID);

    let mint_pubkey = mint.pubkey();

    let ix_data = safe_presale::instruction::InitPool {
        params: params.clone(),
    }
    .data();

    let accounts = safe_presale::accounts::InitPoolCtx {
        identifier,
        pool,
        mint: mint_pubkey,
        reward_vault: get_associated_token_address(&pool, &mint_pubkey),
        quote_mint: *quote_mint,
        mint_metadata: derive_mint_metadata(&mint_pubkey),
        metadata_program: mpl_token_metadata::ID,
        authority: authority.pubkey(),
        token_program: anchor_spl::token::ID,
        associated_token_program: anchor_spl::associated_token::ID,
        system_program: anchor_lang::system_program::ID,
        event_authority: derive_event_authority(&safe_presale::ID),
        program: safe_presale::ID,
    }
    .to_account_metas(None);

    let instructions = vec![
        // Metadata creation does not fit in the default budget
        ComputeBudgetInstruction::set_compute_unit_limit(400_000),
        Instruction {
            program_id: safe_presale::ID,
            accounts,
            data: ix_data,
        },
    ];

    (instructions, pool)
}

pub fn handle_init_pool(lite_svm: &mut LiteSVM, args: HandleInitPoolArgs) -> Pubkey {
    let (instructions, pool) = create_init_pool_ix(lite_svm, &args);
    let HandleInitPoolArgs {
        mint, authority, ..
    } = args;
    let authority_pubkey = authority.pubkey();

    process_transaction(
        lite_svm,
        &instructions,
        Some(&authority_pubkey),
        &[&authority, &mint],
    )
    .unwrap();

    pool
}

pub fn handle_init_pool_err(
    lite_svm: &mut LiteSVM,
    args: HandleInitPoolArgs,
) -> FailedTransactionMetadata {
    let (instructions, _) = create_init_pool_ix(lite_svm, &args);
    let HandleInitPoolArgs {
        mint, authority, ..
    } = args;
    let authority_pubkey = authority.pubkey();

    process_transaction(
        lite_svm,
        &instructions,
        Some(&authority_pubkey),
        &[&authority, &mint],
    )
    .unwrap_err()
}
