use anchor_client::solana_sdk::pubkey::Pubkey;
use safe_presale::{get_pool_seed_prefix, seeds};

pub fn derive_identifier(program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[seeds::IDENTIFIER_PREFIX.as_ref()], program_id).0
}

pub fn derive_pool(pool_key: u64, is_random_key: bool, program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[
            get_pool_seed_prefix(is_random_key),
            pool_key.to_le_bytes().as_ref(),
        ],
        program_id,
    )
    .0
}

pub fn derive_purchase_receipt(pool: &Pubkey, original_mint: &Pubkey, program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[
            seeds::PURCHASE_RECEIPT_PREFIX.as_ref(),
            pool.as_ref(),
            original_mint.as_ref(),
        ],
        program_id,
    )
    .0
}

pub fn derive_mint_metadata(mint: &Pubkey) -> Pubkey {
    mpl_token_metadata::accounts::Metadata::find_pda(mint).0
}

pub fn derive_event_authority(program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[b"__event_authority"], program_id).0
}
