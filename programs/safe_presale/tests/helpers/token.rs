use crate::helpers::process_transaction;
use anchor_client::solana_sdk::pubkey::Pubkey;
use anchor_client::solana_sdk::{
    program_pack::Pack, signature::Keypair, signer::Signer, system_instruction::create_account,
};
use anchor_lang::prelude::Rent;
use anchor_spl::associated_token::{
    get_associated_token_address,
    spl_associated_token_account::instruction::create_associated_token_account_idempotent,
};
use anchor_spl::token::spl_token::instruction::{initialize_mint, mint_to};
use litesvm::LiteSVM;
use std::rc::Rc;

pub struct CreateTokenArgs<'a> {
    pub lite_svm: &'a mut LiteSVM,
    pub mint: Rc<Keypair>,
    pub mint_authority: Rc<Keypair>,
    pub payer: Rc<Keypair>,
    pub decimals: u8,
}

pub fn create_token(args: CreateTokenArgs) {
    let CreateTokenArgs {
        lite_svm,
        mint,
        mint_authority,
        payer,
        decimals,
    } = args;

    let mint_pubkey = mint.pubkey();
    let mint_authority_pubkey = mint_authority.pubkey();
    let payer_pubkey = payer.pubkey();

    let rent = lite_svm.get_sysvar::<Rent>();

    let space = anchor_spl::token::spl_token::state::Mint::LEN;
    let lamports = rent.minimum_balance(space);

    let create_account_ix = create_account(
        &payer_pubkey,
        &mint_pubkey,
        lamports,
        space as u64,
        &anchor_spl::token::spl_token::ID,
    );

    let initialize_mint_ix = initialize_mint(
        &anchor_spl::token::spl_token::ID,
        &mint_pubkey,
        &mint_authority_pubkey,
        None,
        decimals,
    )
    .expect("Failed to create initialize_mint instruction");

    process_transaction(
        lite_svm,
        &[create_account_ix, initialize_mint_ix],
        Some(&payer_pubkey),
        &[&payer, &mint],
    )
    .unwrap();
}

pub struct MintToOwnerArgs<'a> {
    pub lite_svm: &'a mut LiteSVM,
    pub mint: Pubkey,
    pub mint_authority: Rc<Keypair>,
    pub owner: Pubkey,
    pub amount: u64,
}

/// Mints `amount` into the associated token account of `owner`, creating it when missing.
pub fn mint_to_owner(args: MintToOwnerArgs) -> Pubkey {
    let MintToOwnerArgs {
        lite_svm,
        mint,
        mint_authority,
        owner,
        amount,
    } = args;

    let mint_authority_pubkey = mint_authority.pubkey();
    let owner_token = get_associated_token_address(&owner, &mint);

    let create_ata_ix = create_associated_token_account_idempotent(
        &mint_authority_pubkey,
        &owner,
        &mint,
        &anchor_spl::token::spl_token::ID,
    );

    let mint_to_ix = mint_to(
        &anchor_spl::token::spl_token::ID,
        &mint,
        &owner_token,
        &mint_authority_pubkey,
        &[],
        amount,
    )
    .expect("Failed to create mint_to instruction");

    process_transaction(
        lite_svm,
        &[create_ata_ix, mint_to_ix],
        Some(&mint_authority_pubkey),
        &[&mint_authority],
    )
    .unwrap();

    owner_token
}

/// Identity token held by `owner`. Returns the mint and the token account holding it.
pub fn create_identity_token(
    lite_svm: &mut LiteSVM,
    owner: Rc<Keypair>,
) -> (Pubkey, Pubkey) {
    let mint = Rc::new(Keypair::new());

    create_token(CreateTokenArgs {
        lite_svm,
        mint: Rc::clone(&mint),
        mint_authority: Rc::clone(&owner),
        payer: Rc::clone(&owner),
        decimals: 0,
    });

    let owner_token = mint_to_owner(MintToOwnerArgs {
        lite_svm,
        mint: mint.pubkey(),
        mint_authority: Rc::clone(&owner),
        owner: owner.pubkey(),
        amount: 1,
    });

    (mint.pubkey(), owner_token)
}

/// Associated token account of `owner` for `mint`, created empty when missing.
pub fn create_associated_token_account(
    lite_svm: &mut LiteSVM,
    payer: Rc<Keypair>,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Pubkey {
    let payer_pubkey = payer.pubkey();

    let create_ata_ix = create_associated_token_account_idempotent(
        &payer_pubkey,
        owner,
        mint,
        &anchor_spl::token::spl_token::ID,
    );

    process_transaction(lite_svm, &[create_ata_ix], Some(&payer_pubkey), &[&payer]).unwrap();

    get_associated_token_address(owner, mint)
}
