use anchor_client::solana_sdk::{
    instruction::Instruction, signature::Keypair, signer::Signer,
};
use anchor_lang::*;
use litesvm::LiteSVM;
use std::rc::Rc;

use crate::helpers::{derive_event_authority, derive_identifier, process_transaction};

pub fn handle_init_identifier(lite_svm: &mut LiteSVM, payer: Rc<Keypair>) {
    let payer_pubkey = payer.pubkey();

    let ix_data = safe_presale::instruction::InitIdentifier {}.data();

    let accounts = safe_presale::accounts::InitIdentifierCtx {
        identifier: derive_identifier(&safe_presale::ID),
        payer: payer_pubkey,
        system_program: anchor_lang::system_program::ID,
        event_authority: derive_event_authority(&safe_presale::ID),
        program: safe_presale::ID,
    }
    .to_account_metas(None);

    let instruction = Instruction {
        program_id: safe_presale::ID,
        accounts,
        data: ix_data,
    };

    process_transaction(lite_svm, &[instruction], Some(&payer_pubkey), &[&payer]).unwrap();
}
