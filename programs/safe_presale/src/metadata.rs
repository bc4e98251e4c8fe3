use crate::*;
use anchor_spl::token_interface::TokenAccount;
use mpl_token_metadata::accounts::Metadata;

/// Verified collection of an identity token, read from its metaplex metadata account.
/// Identity tokens without metadata or without a verified collection have none.
pub fn get_verified_collection(
    metadata_account: &AccountInfo,
    identity_mint: &Pubkey,
) -> Result<Option<Pubkey>> {
    if metadata_account.data_is_empty() {
        return Ok(None);
    }

    require_keys_eq!(
        *metadata_account.owner,
        mpl_token_metadata::ID,
        PresaleError::InvalidMintMetadata
    );

    let metadata = Metadata::safe_deserialize(&metadata_account.try_borrow_data()?)
        .map_err(|_| PresaleError::InvalidMintMetadata)?;
    require_keys_eq!(
        metadata.mint,
        *identity_mint,
        PresaleError::InvalidMintMetadata
    );

    Ok(metadata
        .collection
        .filter(|collection| collection.verified)
        .map(|collection| collection.key))
}

/// Whether `owner` holds the identity token in `token_account`.
pub fn is_identity_token_owner(
    token_account: &TokenAccount,
    identity_mint: &Pubkey,
    owner: &Pubkey,
) -> bool {
    token_account.mint == *identity_mint && token_account.owner == *owner && token_account.amount > 0
}

/// Claims and refunds follow the identity token, not the wallet that opened the receipt.
pub fn validate_receipt_owner(
    receipt: &PurchaseReceipt,
    owner_original_token: &TokenAccount,
    owner: &Pubkey,
) -> Result<()> {
    require!(
        is_identity_token_owner(owner_original_token, &receipt.original_mint, owner),
        PresaleError::NotReceiptOwner
    );
    Ok(())
}
