use anchor_lang::prelude::*;
use safe_presale::{LiquidityDeposit, LiquidityPosition, LiquidityVenue};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VenueFailure {
    None,
    CreateMarket,
    CreatePool,
    ProvideLiquidity,
}

/// In memory liquidity venue. Locks `10^lp_decimals` of the constant product liquidity like the
/// Raydium amm does.
pub struct MockVenue {
    pub fail_at: VenueFailure,
    pub lp_decimals: u8,
    pub market: Pubkey,
    pub venue_pool: Pubkey,
    pub lp_mint: Pubkey,
    pub created_market: Option<(Pubkey, Pubkey)>,
    pub initial_sqrt_price_x64: Option<u128>,
    pub deposit: Option<LiquidityDeposit>,
}

impl MockVenue {
    pub fn new(lp_decimals: u8) -> Self {
        Self {
            fail_at: VenueFailure::None,
            lp_decimals,
            market: Pubkey::new_unique(),
            venue_pool: Pubkey::new_unique(),
            lp_mint: Pubkey::new_unique(),
            created_market: None,
            initial_sqrt_price_x64: None,
            deposit: None,
        }
    }

    pub fn failing_at(lp_decimals: u8, fail_at: VenueFailure) -> Self {
        Self {
            fail_at,
            ..Self::new(lp_decimals)
        }
    }

    pub fn locked_liquidity(&self) -> u64 {
        10u64.pow(self.lp_decimals.into())
    }
}

impl LiquidityVenue for MockVenue {
    fn create_market(&mut self, mint_0: Pubkey, mint_1: Pubkey) -> Result<Pubkey> {
        if self.fail_at == VenueFailure::CreateMarket {
            return Err(ProgramError::InvalidAccountData.into());
        }
        self.created_market = Some((mint_0, mint_1));
        Ok(self.market)
    }

    fn create_pool(&mut self, market: Pubkey, sqrt_price_x64: u128) -> Result<Pubkey> {
        if self.fail_at == VenueFailure::CreatePool {
            return Err(ProgramError::InvalidArgument.into());
        }
        assert_eq!(market, self.market);
        self.initial_sqrt_price_x64 = Some(sqrt_price_x64);
        Ok(self.venue_pool)
    }

    fn provide_liquidity(
        &mut self,
        venue_pool: Pubkey,
        deposit: &LiquidityDeposit,
    ) -> Result<LiquidityPosition> {
        if self.fail_at == VenueFailure::ProvideLiquidity {
            return Err(ProgramError::InsufficientFunds.into());
        }
        assert_eq!(venue_pool, self.venue_pool);
        self.deposit = Some(*deposit);

        let lp_amount = match deposit.tick_range {
            Some(_) => 1,
            None => u64::try_from(deposit.liquidity).unwrap() - self.locked_liquidity(),
        };

        Ok(LiquidityPosition {
            lp_mint: self.lp_mint,
            lp_amount,
            liquidity: deposit.liquidity,
        })
    }
}
