use super::invoke_venue;
use crate::*;
use anchor_lang::solana_program::instruction::AccountMeta;
use anchor_spl::token_interface::Mint;

const CREATE_POOL_DISCRIMINATOR: [u8; 8] = [233, 146, 209, 142, 207, 104, 64, 188];
const OPEN_POSITION_V2_DISCRIMINATOR: [u8; 8] = [77, 184, 74, 214, 112, 86, 241, 199];

/// Raydium concentrated liquidity. The position nft is minted to an account owned by the pool.
pub struct RaydiumClmmVenue<'a, 'info> {
    pub clmm_program: AccountInfo<'info>,
    pub amm_config: AccountInfo<'info>,
    pub pool_state: AccountInfo<'info>,
    pub token_vault_0: AccountInfo<'info>,
    pub token_vault_1: AccountInfo<'info>,
    pub observation_state: AccountInfo<'info>,
    pub tick_array_bitmap: AccountInfo<'info>,
    pub protocol_position: AccountInfo<'info>,
    pub tick_array_lower: AccountInfo<'info>,
    pub tick_array_upper: AccountInfo<'info>,
    pub personal_position: AccountInfo<'info>,
    pub position_nft_mint: AccountInfo<'info>,
    pub position_nft_account: AccountInfo<'info>,
    pub position_metadata: AccountInfo<'info>,
    pub mint_0: &'a InterfaceAccount<'info, Mint>,
    pub mint_1: &'a InterfaceAccount<'info, Mint>,
    /// Pool authority. Signs the deposit and pays for the venue accounts
    pub user_wallet: AccountInfo<'info>,
    pub user_token_0: AccountInfo<'info>,
    pub user_token_1: AccountInfo<'info>,
    pub pool: AccountInfo<'info>,
    pub pool_signer_seeds: &'a [&'a [&'a [u8]]],
    pub pool_token_0: AccountInfo<'info>,
    pub pool_token_1: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub token_program_2022: AccountInfo<'info>,
    pub associated_token_program: AccountInfo<'info>,
    pub metadata_program: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
    pub rent: AccountInfo<'info>,
    pub open_time: u64,
}

impl<'a, 'info> RaydiumClmmVenue<'a, 'info> {
    fn open_position(&self, tick_range: &TickRange, deposit: &LiquidityDeposit) -> Result<()> {
        let accounts = vec![
            AccountMeta::new(self.user_wallet.key(), true),
            AccountMeta::new_readonly(self.pool.key(), false),
            AccountMeta::new(self.position_nft_mint.key(), true),
            AccountMeta::new(self.position_nft_account.key(), false),
            AccountMeta::new(self.position_metadata.key(), false),
            AccountMeta::new(self.pool_state.key(), false),
            AccountMeta::new(self.protocol_position.key(), false),
            AccountMeta::new(self.tick_array_lower.key(), false),
            AccountMeta::new(self.tick_array_upper.key(), false),
            AccountMeta::new(self.personal_position.key(), false),
            AccountMeta::new(self.user_token_0.key(), false),
            AccountMeta::new(self.user_token_1.key(), false),
            AccountMeta::new(self.token_vault_0.key(), false),
            AccountMeta::new(self.token_vault_1.key(), false),
            AccountMeta::new_readonly(self.rent.key(), false),
            AccountMeta::new_readonly(self.system_program.key(), false),
            AccountMeta::new_readonly(self.token_program.key(), false),
            AccountMeta::new_readonly(self.associated_token_program.key(), false),
            AccountMeta::new_readonly(self.metadata_program.key(), false),
            AccountMeta::new_readonly(self.token_program_2022.key(), false),
            AccountMeta::new_readonly(self.mint_0.key(), false),
            AccountMeta::new_readonly(self.mint_1.key(), false),
        ];

        let mut data = Vec::with_capacity(8 + 16 + 16 + 16 + 2);
        data.extend_from_slice(&OPEN_POSITION_V2_DISCRIMINATOR);
        data.extend_from_slice(&tick_range.tick_lower.to_le_bytes());
        data.extend_from_slice(&tick_range.tick_upper.to_le_bytes());
        data.extend_from_slice(&tick_range.tick_array_lower_start.to_le_bytes());
        data.extend_from_slice(&tick_range.tick_array_upper_start.to_le_bytes());
        data.extend_from_slice(&deposit.liquidity.to_le_bytes());
        data.extend_from_slice(&deposit.amount_0.to_le_bytes());
        data.extend_from_slice(&deposit.amount_1.to_le_bytes());
        // with_metadata
        data.push(1);
        // base_flag: None
        data.push(0);

        let account_infos = [
            self.user_wallet.clone(),
            self.pool.clone(),
            self.position_nft_mint.clone(),
            self.position_nft_account.clone(),
            self.position_metadata.clone(),
            self.pool_state.clone(),
            self.protocol_position.clone(),
            self.tick_array_lower.clone(),
            self.tick_array_upper.clone(),
            self.personal_position.clone(),
            self.user_token_0.clone(),
            self.user_token_1.clone(),
            self.token_vault_0.clone(),
            self.token_vault_1.clone(),
            self.rent.clone(),
            self.system_program.clone(),
            self.token_program.clone(),
            self.associated_token_program.clone(),
            self.metadata_program.clone(),
            self.token_program_2022.clone(),
            self.mint_0.to_account_info(),
            self.mint_1.to_account_info(),
            self.clmm_program.clone(),
        ];

        invoke_venue(&self.clmm_program, accounts, data, &account_infos)
    }
}

impl<'a, 'info> LiquidityVenue for RaydiumClmmVenue<'a, 'info> {
    /// The fee tier config plays the role of the market.
    fn create_market(&mut self, mint_0: Pubkey, mint_1: Pubkey) -> Result<Pubkey> {
        require!(
            self.mint_0.key() == mint_0 && self.mint_1.key() == mint_1,
            PresaleError::InvalidVenueAccounts
        );
        require_keys_eq!(
            *self.amm_config.owner,
            self.clmm_program.key(),
            PresaleError::InvalidVenueAccounts
        );

        Ok(self.amm_config.key())
    }

    fn create_pool(&mut self, market: Pubkey, sqrt_price_x64: u128) -> Result<Pubkey> {
        require_keys_eq!(
            market,
            self.amm_config.key(),
            PresaleError::InvalidVenueAccounts
        );

        let accounts = vec![
            AccountMeta::new(self.user_wallet.key(), true),
            AccountMeta::new_readonly(self.amm_config.key(), false),
            AccountMeta::new(self.pool_state.key(), false),
            AccountMeta::new_readonly(self.mint_0.key(), false),
            AccountMeta::new_readonly(self.mint_1.key(), false),
            AccountMeta::new(self.token_vault_0.key(), false),
            AccountMeta::new(self.token_vault_1.key(), false),
            AccountMeta::new(self.observation_state.key(), false),
            AccountMeta::new(self.tick_array_bitmap.key(), false),
            AccountMeta::new_readonly(self.token_program.key(), false),
            AccountMeta::new_readonly(self.token_program.key(), false),
            AccountMeta::new_readonly(self.system_program.key(), false),
            AccountMeta::new_readonly(self.rent.key(), false),
        ];

        let mut data = Vec::with_capacity(8 + 16 + 8);
        data.extend_from_slice(&CREATE_POOL_DISCRIMINATOR);
        data.extend_from_slice(&sqrt_price_x64.to_le_bytes());
        data.extend_from_slice(&self.open_time.to_le_bytes());

        let account_infos = [
            self.user_wallet.clone(),
            self.amm_config.clone(),
            self.pool_state.clone(),
            self.mint_0.to_account_info(),
            self.mint_1.to_account_info(),
            self.token_vault_0.clone(),
            self.token_vault_1.clone(),
            self.observation_state.clone(),
            self.tick_array_bitmap.clone(),
            self.token_program.clone(),
            self.system_program.clone(),
            self.rent.clone(),
            self.clmm_program.clone(),
        ];

        invoke_venue(&self.clmm_program, accounts, data, &account_infos)?;

        Ok(self.pool_state.key())
    }

    fn provide_liquidity(
        &mut self,
        venue_pool: Pubkey,
        deposit: &LiquidityDeposit,
    ) -> Result<LiquidityPosition> {
        require_keys_eq!(
            venue_pool,
            self.pool_state.key(),
            PresaleError::InvalidVenueAccounts
        );
        let tick_range = deposit
            .tick_range
            .ok_or(PresaleError::InvalidVenueAccounts)?;

        transfer_from_pool(
            self.pool.clone(),
            self.pool_signer_seeds,
            self.mint_0,
            self.pool_token_0.clone(),
            self.user_token_0.clone(),
            self.token_program.clone(),
            deposit.amount_0,
        )?;
        transfer_from_pool(
            self.pool.clone(),
            self.pool_signer_seeds,
            self.mint_1,
            self.pool_token_1.clone(),
            self.user_token_1.clone(),
            self.token_program.clone(),
            deposit.amount_1,
        )?;

        self.open_position(&tick_range, deposit)?;

        Ok(LiquidityPosition {
            lp_mint: self.position_nft_mint.key(),
            lp_amount: 1,
            liquidity: deposit.liquidity,
        })
    }
}
