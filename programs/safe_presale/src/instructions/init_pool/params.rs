use crate::*;

/// Supply split of a new pool, in base units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tokenomics {
    pub total_supply: u64,
    pub initial_supply: u64,
    pub initial_supply_for_creator: u64,
    pub liquidity_pool_supply: u64,
}

impl Tokenomics {
    /// Share of the initial supply distributed to buyers
    pub fn get_buyer_supply(&self) -> Result<u64> {
        Ok(self
            .initial_supply
            .safe_sub(self.initial_supply_for_creator)?)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug)]
pub struct InitPoolArgs {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub decimals: u8,
    /// Quote amount to collect before launch
    pub presale_target: u64,
    /// Cumulative cap per receipt, net of buy fees. Zero means unlimited
    pub max_amount_per_purchase: u64,
    pub creator_fee_basis_points: u16,
    pub buy_fee_basis_points: u16,
    pub fee_collector: Option<Pubkey>,
    pub vesting_period: u64,
    /// In whole tokens. Shared between the creator and the buyers
    pub initial_supply: u64,
    /// In whole tokens. Seeded into the liquidity venue at launch
    pub liquidity_pool_supply: u64,
    pub presale_duration: u64,
    pub launch_strategy: u8,
    pub requires_collections: Vec<Pubkey>,
    /// Pool key used instead of the identifier counter
    pub random_key: Option<u64>,
}

impl InitPoolArgs {
    pub fn validate(&self) -> Result<()> {
        require!(
            !self.name.is_empty() && self.name.len() <= MAX_NAME_LENGTH,
            PresaleError::InvalidConfig
        );
        require!(
            !self.symbol.is_empty() && self.symbol.len() <= MAX_SYMBOL_LENGTH,
            PresaleError::InvalidConfig
        );
        require!(self.uri.len() <= MAX_URI_LENGTH, PresaleError::InvalidConfig);
        require!(self.decimals <= MAX_DECIMALS, PresaleError::InvalidConfig);

        require!(self.presale_target > 0, PresaleError::InvalidConfig);
        require!(
            u64::from(self.creator_fee_basis_points) <= MAX_BASIS_POINTS,
            PresaleError::InvalidConfig
        );
        require!(
            u64::from(self.buy_fee_basis_points) <= MAX_BUY_FEE_BPS,
            PresaleError::InvalidConfig
        );
        if self.buy_fee_basis_points > 0 {
            require!(
                self.fee_collector.is_some(),
                PresaleError::InvalidFeeCollector
            );
        }

        require!(
            self.initial_supply > 0 && self.liquidity_pool_supply > 0,
            PresaleError::InvalidConfig
        );
        // Supply must fit in the mint once scaled
        let tokenomics = self
            .get_tokenomics()
            .map_err(|_| PresaleError::InvalidConfig)?;
        require!(
            tokenomics.get_buyer_supply()? > 0,
            PresaleError::InvalidConfig
        );

        require!(
            self.presale_duration >= MINIMUM_PRESALE_DURATION
                && self.presale_duration <= MAXIMUM_PRESALE_DURATION,
            PresaleError::InvalidConfig
        );
        require!(
            self.vesting_period <= MAXIMUM_VESTING_PERIOD,
            PresaleError::InvalidConfig
        );

        require!(
            LaunchStrategy::try_from(self.launch_strategy).is_ok(),
            PresaleError::InvalidConfig
        );

        require!(
            self.requires_collections.len() <= MAX_REQUIRED_COLLECTIONS,
            PresaleError::InvalidConfig
        );

        Ok(())
    }

    pub fn get_tokenomics(&self) -> Result<Tokenomics> {
        let multiplier = 10u64
            .checked_pow(self.decimals.into())
            .ok_or(PresaleError::MathOverflow)?;

        let initial_supply = self.initial_supply.safe_mul(multiplier)?;
        let liquidity_pool_supply = self.liquidity_pool_supply.safe_mul(multiplier)?;
        let total_supply = initial_supply.safe_add(liquidity_pool_supply)?;

        let initial_supply_for_creator: u64 = u128::from(initial_supply)
            .safe_mul(CREATOR_SUPPLY_BPS.into())?
            .safe_div(MAX_BASIS_POINTS.into())?
            .safe_cast()?;

        Ok(Tokenomics {
            total_supply,
            initial_supply,
            initial_supply_for_creator,
            liquidity_pool_supply,
        })
    }
}
