use anchor_lang::prelude::*;
use mpl_token_metadata::types::DataV2;

pub struct ProcessCreateTokenMetadataArgs<'a, 'info> {
    pub system_program: AccountInfo<'info>,
    pub payer: AccountInfo<'info>,      // signer
    pub pool: AccountInfo<'info>,       // mint authority, signs with pool seeds
    pub authority: AccountInfo<'info>,  // update authority, signer
    pub mint: AccountInfo<'info>,
    pub metadata_program: AccountInfo<'info>,
    pub mint_metadata: AccountInfo<'info>,
    pub pool_signer_seeds: &'a [&'a [&'a [u8]]],
    pub name: &'a str,
    pub symbol: &'a str,
    pub uri: &'a str,
}

pub fn process_create_mpl_token_metadata(params: ProcessCreateTokenMetadataArgs) -> Result<()> {
    let mut builder = mpl_token_metadata::instructions::CreateMetadataAccountV3CpiBuilder::new(
        &params.metadata_program,
    );
    builder.mint(&params.mint);
    builder.metadata(&params.mint_metadata);
    builder.is_mutable(false);
    builder.mint_authority(&params.pool);
    builder.update_authority(&params.authority, true);
    builder.payer(&params.payer);
    builder.system_program(&params.system_program);
    let data = DataV2 {
        collection: None,
        creators: None,
        name: params.name.to_string(),
        symbol: params.symbol.to_string(),
        seller_fee_basis_points: 0,
        uses: None,
        uri: params.uri.to_string(),
    };
    builder.data(data);
    builder.invoke_signed(params.pool_signer_seeds)?;

    Ok(())
}
