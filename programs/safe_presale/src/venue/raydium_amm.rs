use super::invoke_venue;
use crate::*;
use anchor_lang::solana_program::instruction::AccountMeta;
use anchor_spl::{
    associated_token::{self, Create},
    token::accessor,
    token_interface::{self, Mint, TransferChecked},
};

const INITIALIZE2_TAG: u8 = 1;

/// Raydium AMM v4. The market is an existing OpenBook market, the pool is created together with
/// its first deposit by `initialize2`.
pub struct RaydiumAmmVenue<'a, 'info> {
    pub amm_program: AccountInfo<'info>,
    pub amm_pool: AccountInfo<'info>,
    pub amm_authority: AccountInfo<'info>,
    pub amm_open_orders: AccountInfo<'info>,
    pub amm_lp_mint: AccountInfo<'info>,
    pub amm_coin_vault: AccountInfo<'info>,
    pub amm_pc_vault: AccountInfo<'info>,
    pub amm_target_orders: AccountInfo<'info>,
    pub amm_config: AccountInfo<'info>,
    pub create_fee_destination: AccountInfo<'info>,
    pub market_program: AccountInfo<'info>,
    pub market: AccountInfo<'info>,
    /// Coin is token 0, pc is token 1
    pub coin_mint: &'a InterfaceAccount<'info, Mint>,
    pub pc_mint: &'a InterfaceAccount<'info, Mint>,
    /// Pool authority. Signs the deposit and pays for the venue accounts
    pub user_wallet: AccountInfo<'info>,
    pub user_token_coin: AccountInfo<'info>,
    pub user_token_pc: AccountInfo<'info>,
    pub user_token_lp: AccountInfo<'info>,
    pub pool: AccountInfo<'info>,
    pub pool_signer_seeds: &'a [&'a [&'a [u8]]],
    pub pool_token_coin: AccountInfo<'info>,
    pub pool_token_pc: AccountInfo<'info>,
    pub pool_token_lp: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub associated_token_program: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
    pub rent: AccountInfo<'info>,
    pub nonce: u8,
    pub open_time: u64,
}

impl<'a, 'info> RaydiumAmmVenue<'a, 'info> {
    fn initialize2(&self, init_coin_amount: u64, init_pc_amount: u64) -> Result<()> {
        let accounts = vec![
            // spl & sys
            AccountMeta::new_readonly(self.token_program.key(), false),
            AccountMeta::new_readonly(self.associated_token_program.key(), false),
            AccountMeta::new_readonly(self.system_program.key(), false),
            AccountMeta::new_readonly(self.rent.key(), false),
            // amm
            AccountMeta::new(self.amm_pool.key(), false),
            AccountMeta::new_readonly(self.amm_authority.key(), false),
            AccountMeta::new(self.amm_open_orders.key(), false),
            AccountMeta::new(self.amm_lp_mint.key(), false),
            AccountMeta::new_readonly(self.coin_mint.key(), false),
            AccountMeta::new_readonly(self.pc_mint.key(), false),
            AccountMeta::new(self.amm_coin_vault.key(), false),
            AccountMeta::new(self.amm_pc_vault.key(), false),
            AccountMeta::new(self.amm_target_orders.key(), false),
            AccountMeta::new_readonly(self.amm_config.key(), false),
            AccountMeta::new(self.create_fee_destination.key(), false),
            // market
            AccountMeta::new_readonly(self.market_program.key(), false),
            AccountMeta::new_readonly(self.market.key(), false),
            // user
            AccountMeta::new(self.user_wallet.key(), true),
            AccountMeta::new(self.user_token_coin.key(), false),
            AccountMeta::new(self.user_token_pc.key(), false),
            AccountMeta::new(self.user_token_lp.key(), false),
        ];

        let mut data = Vec::with_capacity(26);
        data.push(INITIALIZE2_TAG);
        data.push(self.nonce);
        data.extend_from_slice(&self.open_time.to_le_bytes());
        data.extend_from_slice(&init_pc_amount.to_le_bytes());
        data.extend_from_slice(&init_coin_amount.to_le_bytes());

        let account_infos = [
            self.token_program.clone(),
            self.associated_token_program.clone(),
            self.system_program.clone(),
            self.rent.clone(),
            self.amm_pool.clone(),
            self.amm_authority.clone(),
            self.amm_open_orders.clone(),
            self.amm_lp_mint.clone(),
            self.coin_mint.to_account_info(),
            self.pc_mint.to_account_info(),
            self.amm_coin_vault.clone(),
            self.amm_pc_vault.clone(),
            self.amm_target_orders.clone(),
            self.amm_config.clone(),
            self.create_fee_destination.clone(),
            self.market_program.clone(),
            self.market.clone(),
            self.user_wallet.clone(),
            self.user_token_coin.clone(),
            self.user_token_pc.clone(),
            self.user_token_lp.clone(),
            self.amm_program.clone(),
        ];

        invoke_venue(&self.amm_program, accounts, data, &account_infos)
    }

    /// Moves the minted lp tokens from the authority into a pool owned vault.
    fn move_lp_tokens_to_pool(&self) -> Result<u64> {
        associated_token::create(CpiContext::new(
            self.associated_token_program.clone(),
            Create {
                payer: self.user_wallet.clone(),
                associated_token: self.pool_token_lp.clone(),
                authority: self.pool.clone(),
                mint: self.amm_lp_mint.clone(),
                system_program: self.system_program.clone(),
                token_program: self.token_program.clone(),
            },
        ))?;

        let lp_amount = accessor::amount(&self.user_token_lp)?;
        require!(lp_amount > 0, PresaleError::LaunchVenueFailure);

        // lp mint decimals follow the coin mint
        token_interface::transfer_checked(
            CpiContext::new(
                self.token_program.clone(),
                TransferChecked {
                    from: self.user_token_lp.clone(),
                    mint: self.amm_lp_mint.clone(),
                    to: self.pool_token_lp.clone(),
                    authority: self.user_wallet.clone(),
                },
            ),
            lp_amount,
            self.coin_mint.decimals,
        )?;

        Ok(lp_amount)
    }
}

impl<'a, 'info> LiquidityVenue for RaydiumAmmVenue<'a, 'info> {
    fn create_market(&mut self, mint_0: Pubkey, mint_1: Pubkey) -> Result<Pubkey> {
        require!(
            self.coin_mint.key() == mint_0 && self.pc_mint.key() == mint_1,
            PresaleError::InvalidVenueAccounts
        );
        require_keys_eq!(
            *self.market.owner,
            self.market_program.key(),
            PresaleError::InvalidVenueAccounts
        );

        Ok(self.market.key())
    }

    fn create_pool(&mut self, market: Pubkey, _sqrt_price_x64: u128) -> Result<Pubkey> {
        // price is implied by the first deposit
        require_keys_eq!(market, self.market.key(), PresaleError::InvalidVenueAccounts);
        require!(
            self.amm_pool.data_is_empty(),
            PresaleError::InvalidVenueAccounts
        );

        Ok(self.amm_pool.key())
    }

    fn provide_liquidity(
        &mut self,
        venue_pool: Pubkey,
        deposit: &LiquidityDeposit,
    ) -> Result<LiquidityPosition> {
        require_keys_eq!(
            venue_pool,
            self.amm_pool.key(),
            PresaleError::InvalidVenueAccounts
        );

        transfer_from_pool(
            self.pool.clone(),
            self.pool_signer_seeds,
            self.coin_mint,
            self.pool_token_coin.clone(),
            self.user_token_coin.clone(),
            self.token_program.clone(),
            deposit.amount_0,
        )?;
        transfer_from_pool(
            self.pool.clone(),
            self.pool_signer_seeds,
            self.pc_mint,
            self.pool_token_pc.clone(),
            self.user_token_pc.clone(),
            self.token_program.clone(),
            deposit.amount_1,
        )?;

        self.initialize2(deposit.amount_0, deposit.amount_1)?;
        let lp_amount = self.move_lp_tokens_to_pool()?;

        Ok(LiquidityPosition {
            lp_mint: self.amm_lp_mint.key(),
            lp_amount,
            liquidity: deposit.liquidity,
        })
    }
}
