use std::rc::Rc;

use anchor_client::solana_sdk::account::Account;
use anchor_client::solana_sdk::instruction::Instruction;
use anchor_client::solana_sdk::message::{Message, VersionedMessage};
use anchor_client::solana_sdk::signature::Keypair;
use anchor_client::solana_sdk::signer::Signer;
use anchor_client::solana_sdk::transaction::VersionedTransaction;
use anchor_lang::error::{Error, ERROR_CODE_OFFSET};
use anchor_lang::prelude::{Clock, Pubkey, Rent};
use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;
use anchor_lang::solana_program::program_option::COption;
use anchor_lang::solana_program::program_pack::Pack;
use anchor_lang::AccountDeserialize;
use anchor_spl::token::spl_token;
use anchor_spl::token_2022::spl_token_2022::state::{Account as SplTokenAccount, AccountState};
use anchor_spl::token_interface::TokenAccount;
use litesvm::types::{FailedTransactionMetadata, TransactionResult};
use litesvm::LiteSVM;
use safe_presale::{PresaleError, NATIVE_MINT};

use super::POOL_CREATED_AT;

pub fn assert_err<T: std::fmt::Debug>(result: anchor_lang::Result<T>, expected_err: PresaleError) {
    let err_code = ERROR_CODE_OFFSET + expected_err as u32;

    match result {
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number, err_code,
            "expected error number {}, got {}",
            err_code, err.error_name
        ),
        other => panic!("expected error number {}, got {:?}", err_code, other),
    }
}

/// Token account holding `amount` of the identity token `mint`.
pub fn identity_token_account(mint: Pubkey, owner: Pubkey, amount: u64) -> TokenAccount {
    let account = SplTokenAccount {
        mint,
        owner,
        amount,
        state: AccountState::Initialized,
        ..SplTokenAccount::default()
    };

    let mut data = vec![0u8; SplTokenAccount::LEN];
    SplTokenAccount::pack(account, &mut data).unwrap();

    TokenAccount::try_deserialize(&mut data.as_slice()).unwrap()
}

pub struct SetupContext {
    pub lite_svm: LiteSVM,
    pub user: Rc<Keypair>,
}

impl SetupContext {
    pub fn initialize() -> Self {
        let mut svm = LiteSVM::new()
            .with_sysvars()
            .with_lamports(10_000 * LAMPORTS_PER_SOL)
            .with_spl_programs()
            .with_sigverify(true)
            .with_blockhash_check(true);

        load_programs(&mut svm);
        create_native_mint(&mut svm);
        warp_time(&mut svm, POOL_CREATED_AT);

        let user = Keypair::new();
        let user_address = user.pubkey();
        svm.airdrop(&user_address, 1000 * LAMPORTS_PER_SOL)
            .expect("Failed to airdrop SOL to user");

        Self {
            lite_svm: svm,
            user: Rc::new(user),
        }
    }
}

/// Fresh funded wallet, for buyers and fee collectors.
pub fn create_funded_keypair(lite_svm: &mut LiteSVM) -> Rc<Keypair> {
    let keypair = Keypair::new();
    lite_svm
        .airdrop(&keypair.pubkey(), 100 * LAMPORTS_PER_SOL)
        .expect("Failed to airdrop SOL");
    Rc::new(keypair)
}

fn load_programs(svm: &mut LiteSVM) {
    let program_path = format!(
        "{}/../../target/deploy/safe_presale.so",
        env!("CARGO_MANIFEST_DIR")
    );
    println!("Loading program from: {}", program_path);
    let program_bytes = std::fs::read(program_path).expect("Failed to read program file");
    svm.add_program(safe_presale::ID, &program_bytes);

    // Programs dumped from mainnet, named after their address
    let other_program_path = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    println!("Loading other programs from: {}", other_program_path);

    let dir = std::fs::read_dir(other_program_path).expect("Failed to read fixtures directory");
    for entry in dir {
        let path = entry.expect("Failed to read entry").path();
        if path.extension().and_then(|s| s.to_str()) == Some("so") {
            let program_bytes = std::fs::read(&path).expect("Failed to read program file");
            let program_address = path
                .file_stem()
                .and_then(|s| s.to_str())
                .expect("Failed to get file stem");
            let program_pubkey = Pubkey::from_str_const(program_address);
            svm.add_program(program_pubkey, &program_bytes);
            println!("Added program: {}", program_pubkey);
        }
    }
}

fn create_native_mint(svm: &mut LiteSVM) {
    let mint = spl_token::state::Mint {
        mint_authority: COption::None,
        supply: 0,
        decimals: 9,
        is_initialized: true,
        freeze_authority: COption::None,
    };
    let mut data = vec![0u8; spl_token::state::Mint::LEN];
    spl_token::state::Mint::pack(mint, &mut data).unwrap();

    let rent = svm.get_sysvar::<Rent>();
    svm.set_account(
        NATIVE_MINT,
        Account {
            lamports: rent.minimum_balance(data.len()),
            data,
            owner: spl_token::ID,
            executable: false,
            rent_epoch: 0,
        },
    )
    .unwrap();
}

pub fn process_transaction(
    lite_svm: &mut LiteSVM,
    instructions: &[Instruction],
    payer: Option<&Pubkey>,
    signers: &[&Keypair],
) -> TransactionResult {
    // Identical transactions in a row would otherwise be rejected as already processed
    lite_svm.expire_blockhash();
    let blockhash = lite_svm.latest_blockhash();
    let msg = Message::new_with_blockhash(instructions, payer, &blockhash);
    let tx = VersionedTransaction::try_new(VersionedMessage::Legacy(msg), signers).unwrap();

    lite_svm.send_transaction(tx)
}

pub fn warp_time(lite_svm: &mut LiteSVM, unix_timestamp: u64) {
    let mut clock = lite_svm.get_sysvar::<Clock>();
    clock.unix_timestamp = unix_timestamp as i64;
    lite_svm.set_sysvar::<Clock>(&clock);
}

pub fn get_current_timestamp(lite_svm: &LiteSVM) -> u64 {
    lite_svm.get_sysvar::<Clock>().unix_timestamp as u64
}

pub fn assert_err_logs(err: &FailedTransactionMetadata, expected_err: PresaleError) {
    let err_code = ERROR_CODE_OFFSET + expected_err as u32;
    let err_str = format!("Error Number: {}.", err_code);
    assert!(
        err.meta.logs.iter().any(|log| log.contains(&err_str)),
        "expected error number {} in logs {:#?}",
        err_code,
        err.meta.logs
    );
}
