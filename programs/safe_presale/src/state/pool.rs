use crate::*;
use num_enum::{IntoPrimitive, TryFromPrimitive};

#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum LaunchStrategy {
    /// Constant product market. Lp tokens are distributed to buyers
    ConstantProduct,
    /// Concentrated liquidity position around the launch price. The position stays with the pool
    ConcentratedLiquidity,
}

pub struct PoolAccountKeys {
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub quote_mint: Pubkey,
}

#[account]
#[derive(InitSpace, Debug, Default)]
pub struct Pool {
    pub bump: u8,
    /// Key used in the pool seeds. Either the identifier count or a caller supplied random key
    pub identifier: u64,
    /// Whether `identifier` is a caller supplied random key rather than a counter value
    pub is_random_key: bool,
    /// Creator of the pool. Launches the token and collects the creator fee
    pub authority: Pubkey,
    /// Reward token
    pub mint: Pubkey,
    /// Token accepted as payment
    pub quote_mint: Pubkey,
    pub launch_strategy: u8,
    pub allow_purchase: bool,
    pub is_closed: bool,
    pub launched: bool,
    /// Reward token decimals
    pub decimals: u8,
    /// initial_supply + liquidity_pool_supply
    pub total_supply: u64,
    /// Supply shared between the creator and the buyers
    pub initial_supply: u64,
    /// Creator share carved out of the initial supply
    pub initial_supply_for_creator: u64,
    /// Supply seeded into the liquidity venue at launch
    pub liquidity_pool_supply: u64,
    /// Quote amount to collect before launch
    pub presale_target: u64,
    /// Cap on the cumulative amount of a single receipt. Zero means unlimited
    pub max_amount_per_purchase: u64,
    /// Share of the collected liquidity paid to the creator at launch
    pub creator_fee_basis_points: u16,
    /// Share of every buy routed to the fee collector
    pub buy_fee_basis_points: u16,
    pub fee_collector: Option<Pubkey>,
    /// Quote collected net of buy fees
    pub liquidity_collected: u64,
    /// Quote returned to buyers through refunds
    pub liquidity_refunded: u64,
    /// Total buy fees routed to the fee collector. For statistic purpose only
    pub total_buy_fees: u64,
    /// Creator fee paid at launch
    pub launch_creator_fee: u64,
    /// Total number of receipts. For statistic purpose only
    pub total_purchases: u64,
    pub created_at: u64,
    pub presale_duration: u64,
    pub vesting_period: u64,
    pub vesting_started_at: Option<u64>,
    pub vesting_period_end: Option<u64>,
    /// Collections an identity token must belong to. Empty means no gate
    #[max_len(5)]
    pub requires_collections: Vec<Pubkey>,
    /// Lp mint for constant product launches, position nft mint for concentrated liquidity launches
    pub lp_mint: Option<Pubkey>,
    pub lp_supply: u64,
    /// Market created on the liquidity venue
    pub venue_pool: Option<Pubkey>,
    pub total_mint_claimed: u64,
    pub total_lp_claimed: u64,
    pub creator_mint_claimed: u64,
    pub creator_position_withdrawn: bool,
}

static_assertions::const_assert_eq!(MAX_REQUIRED_COLLECTIONS, 5);
// Accounts created through cpi are capped at 10KiB
static_assertions::const_assert!(Pool::INIT_SPACE + 8 <= 10_240);

impl Pool {
    pub fn initialize(
        &mut self,
        args: &InitPoolArgs,
        keys: PoolAccountKeys,
        identifier: u64,
        bump: u8,
        current_timestamp: u64,
    ) -> Result<()> {
        let Tokenomics {
            total_supply,
            initial_supply,
            initial_supply_for_creator,
            liquidity_pool_supply,
        } = args.get_tokenomics()?;

        let PoolAccountKeys {
            authority,
            mint,
            quote_mint,
        } = keys;

        self.bump = bump;
        self.identifier = identifier;
        self.is_random_key = args.random_key.is_some();
        self.authority = authority;
        self.mint = mint;
        self.quote_mint = quote_mint;
        self.launch_strategy = args.launch_strategy;
        self.allow_purchase = true;
        self.is_closed = false;
        self.launched = false;
        self.decimals = args.decimals;

        self.total_supply = total_supply;
        self.initial_supply = initial_supply;
        self.initial_supply_for_creator = initial_supply_for_creator;
        self.liquidity_pool_supply = liquidity_pool_supply;

        self.presale_target = args.presale_target;
        self.max_amount_per_purchase = args.max_amount_per_purchase;
        self.creator_fee_basis_points = args.creator_fee_basis_points;
        self.buy_fee_basis_points = args.buy_fee_basis_points;
        self.fee_collector = args.fee_collector;

        self.liquidity_collected = 0;
        self.created_at = current_timestamp;
        self.presale_duration = args.presale_duration;
        self.vesting_period = args.vesting_period;
        self.vesting_started_at = None;
        self.vesting_period_end = None;
        self.requires_collections = args.requires_collections.clone();

        Ok(())
    }

    pub fn get_seed_prefix(&self) -> &'static [u8] {
        get_pool_seed_prefix(self.is_random_key)
    }

    pub fn is_initialized(&self) -> bool {
        self.mint != Pubkey::default()
    }

    pub fn get_launch_strategy(&self) -> Result<LaunchStrategy> {
        LaunchStrategy::try_from(self.launch_strategy)
            .map_err(|_| PresaleError::InvalidLaunchStrategy.into())
    }

    pub fn get_presale_end_time(&self) -> Result<u64> {
        Ok(self.created_at.safe_add(self.presale_duration)?)
    }

    /// Last moment the creator can launch. Past it, buyers can take their funds back.
    pub fn get_launch_deadline(&self) -> Result<u64> {
        Ok(self.get_presale_end_time()?.safe_add(LAUNCH_GRACE_PERIOD)?)
    }

    /// Buyer share of the initial supply
    pub fn get_buyer_supply(&self) -> Result<u64> {
        Ok(self
            .initial_supply
            .safe_sub(self.initial_supply_for_creator)?)
    }

    pub fn is_target_reached(&self) -> bool {
        self.liquidity_collected >= self.presale_target
    }

    pub fn validate_open_for_purchase(&self, current_timestamp: u64) -> Result<()> {
        require!(
            self.allow_purchase && !self.launched && !self.is_closed,
            PresaleError::PoolNotOpen
        );

        require!(
            current_timestamp >= self.created_at
                && current_timestamp <= self.get_presale_end_time()?,
            PresaleError::WindowClosed
        );

        Ok(())
    }

    /// `collection` is the verified collection of the identity token, if any.
    pub fn validate_collection_membership(&self, collection: Option<Pubkey>) -> Result<()> {
        if self.requires_collections.is_empty() {
            return Ok(());
        }

        let is_member = collection
            .map(|collection| self.requires_collections.contains(&collection))
            .unwrap_or(false);
        require!(is_member, PresaleError::NotCollectionMember);

        Ok(())
    }

    /// Credits `amount` minus the buy fee to the pool and the receipt. Nothing is written
    /// unless every check passes.
    pub fn buy(
        &mut self,
        receipt: &mut PurchaseReceipt,
        amount: u64,
    ) -> Result<BuyFeeExcludedCalculation> {
        require!(amount > 0, PresaleError::ZeroAmount);

        let buy_fee_bps = if self.fee_collector.is_some() {
            self.buy_fee_basis_points
        } else {
            0
        };
        let calculation = calculate_buy_fee_excluded_amount(amount, buy_fee_bps)?;
        let net_amount = calculation.amount_excluded_fee;

        require!(net_amount > 0, PresaleError::ZeroAmount);

        let liquidity_collected = self.liquidity_collected.safe_add(net_amount)?;
        require!(
            liquidity_collected <= self.presale_target,
            PresaleError::PresaleTargetExceeded
        );

        let receipt_amount = receipt.amount.safe_add(net_amount)?;
        if self.max_amount_per_purchase > 0 {
            require!(
                receipt_amount <= self.max_amount_per_purchase,
                PresaleError::PerBuyerCapExceeded
            );
        }

        if receipt.amount == 0 {
            self.total_purchases = self.total_purchases.safe_add(1)?;
        }
        self.liquidity_collected = liquidity_collected;
        self.total_buy_fees = self.total_buy_fees.safe_add(calculation.fee)?;
        receipt.amount = receipt_amount;

        Ok(calculation)
    }

    pub fn validate_launch(&self, signer: &Pubkey, current_timestamp: u64) -> Result<()> {
        require_keys_eq!(self.authority, *signer, PresaleError::NotAuthority);
        require!(!self.launched, PresaleError::AlreadyLaunched);
        require!(!self.is_closed, PresaleError::PoolNotOpen);
        require!(
            current_timestamp <= self.get_launch_deadline()?,
            PresaleError::PoolExpired
        );
        require!(self.is_target_reached(), PresaleError::TargetNotReached);

        Ok(())
    }

    pub fn complete_launch(
        &mut self,
        plan: &LaunchPlan,
        venue_pool: Pubkey,
        position: &LiquidityPosition,
        current_timestamp: u64,
    ) -> Result<()> {
        let vesting_period_end = current_timestamp.safe_add(self.vesting_period)?;

        self.launched = true;
        self.allow_purchase = false;
        self.lp_mint = Some(position.lp_mint);
        self.lp_supply = position.lp_amount;
        self.venue_pool = Some(venue_pool);
        self.launch_creator_fee = plan.creator_fee;
        self.vesting_started_at = Some(current_timestamp);
        self.vesting_period_end = Some(vesting_period_end);

        Ok(())
    }

    /// Vesting start once the pool launched and the current time reached it.
    fn get_claim_vesting_start(&self, current_timestamp: u64) -> Result<u64> {
        require!(self.launched, PresaleError::NotLaunched);
        let vesting_start_time = self
            .vesting_started_at
            .ok_or(PresaleError::NotLaunched)?;
        require!(
            current_timestamp >= vesting_start_time,
            PresaleError::VestingNotStarted
        );
        Ok(vesting_start_time)
    }

    pub fn get_mint_entitlement(&self, receipt: &PurchaseReceipt) -> Result<u64> {
        calculate_entitlement(
            receipt.amount,
            self.get_buyer_supply()?,
            self.liquidity_collected,
        )
    }

    pub fn get_lp_entitlement(&self, receipt: &PurchaseReceipt) -> Result<u64> {
        calculate_entitlement(receipt.amount, self.lp_supply, self.liquidity_collected)
    }

    /// Records the full entitlements of a receipt. Lp entitlement is only recorded when the
    /// launch strategy distributes lp tokens.
    pub fn check_claim_eligibility(
        &self,
        receipt: &mut PurchaseReceipt,
        current_timestamp: u64,
    ) -> Result<()> {
        self.get_claim_vesting_start(current_timestamp)?;
        require!(!receipt.refunded, PresaleError::AlreadyRefunded);

        receipt.mint_eligible = Some(self.get_mint_entitlement(receipt)?);

        let handler = get_launch_strategy_handler(self.get_launch_strategy()?);
        if handler.can_distribute_lp_tokens() {
            receipt.lp_eligible = Some(self.get_lp_entitlement(receipt)?);
        }

        Ok(())
    }

    /// Moves the newly vested reward tokens of a receipt to claimed. Returns the amount to transfer.
    pub fn claim_rewards(
        &mut self,
        receipt: &mut PurchaseReceipt,
        current_timestamp: u64,
    ) -> Result<u64> {
        let vesting_start_time = self.get_claim_vesting_start(current_timestamp)?;
        require!(!receipt.refunded, PresaleError::AlreadyRefunded);

        let entitlement = self.get_mint_entitlement(receipt)?;
        receipt.mint_eligible = Some(entitlement);

        let claimable = calculate_claimable_amount(
            entitlement,
            receipt.mint_claimed,
            vesting_start_time,
            self.vesting_period,
            current_timestamp,
        )?;
        require!(claimable > 0, PresaleError::NothingToClaim);

        receipt.record_mint_claim(claimable, current_timestamp)?;
        self.total_mint_claimed = self.total_mint_claimed.safe_add(claimable)?;

        Ok(claimable)
    }

    /// Same as `claim_rewards` for the lp tokens of a constant product launch.
    pub fn withdraw_lp_tokens(
        &mut self,
        receipt: &mut PurchaseReceipt,
        current_timestamp: u64,
    ) -> Result<u64> {
        let vesting_start_time = self.get_claim_vesting_start(current_timestamp)?;
        require!(!receipt.refunded, PresaleError::AlreadyRefunded);

        let handler = get_launch_strategy_handler(self.get_launch_strategy()?);
        require!(
            handler.can_distribute_lp_tokens(),
            PresaleError::LpTokensNotDistributable
        );

        let entitlement = self.get_lp_entitlement(receipt)?;
        receipt.lp_eligible = Some(entitlement);

        let claimable = calculate_claimable_amount(
            entitlement,
            receipt.lp_claimed,
            vesting_start_time,
            self.vesting_period,
            current_timestamp,
        )?;
        require!(claimable > 0, PresaleError::NothingToClaim);

        receipt.record_lp_claim(claimable, current_timestamp)?;
        self.total_lp_claimed = self.total_lp_claimed.safe_add(claimable)?;

        Ok(claimable)
    }

    pub fn claim_creator_rewards(&mut self, signer: &Pubkey, current_timestamp: u64) -> Result<u64> {
        require_keys_eq!(self.authority, *signer, PresaleError::NotAuthority);
        let vesting_start_time = self.get_claim_vesting_start(current_timestamp)?;

        let claimable = calculate_claimable_amount(
            self.initial_supply_for_creator,
            self.creator_mint_claimed,
            vesting_start_time,
            self.vesting_period,
            current_timestamp,
        )?;
        require!(claimable > 0, PresaleError::NothingToClaim);

        self.creator_mint_claimed = self.creator_mint_claimed.safe_add(claimable)?;

        Ok(claimable)
    }

    /// Releases the concentrated liquidity position to the creator once vesting is over.
    pub fn withdraw_creator_position(&mut self, signer: &Pubkey, current_timestamp: u64) -> Result<()> {
        require_keys_eq!(self.authority, *signer, PresaleError::NotAuthority);

        let handler = get_launch_strategy_handler(self.get_launch_strategy()?);
        require!(
            handler.can_withdraw_position(),
            PresaleError::InvalidLaunchStrategy
        );

        self.get_claim_vesting_start(current_timestamp)?;
        let vesting_period_end = self
            .vesting_period_end
            .ok_or(PresaleError::NotLaunched)?;
        require!(
            current_timestamp >= vesting_period_end,
            PresaleError::VestingNotEnded
        );
        require!(
            !self.creator_position_withdrawn,
            PresaleError::NothingToClaim
        );

        self.creator_position_withdrawn = true;

        Ok(())
    }

    pub fn cancel(&mut self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(self.authority, *signer, PresaleError::NotAuthority);
        require!(!self.launched, PresaleError::AlreadyLaunched);
        require!(!self.is_closed, PresaleError::PoolNotOpen);

        self.is_closed = true;
        self.allow_purchase = false;

        Ok(())
    }

    /// Refunds are open on a pool that never launched and never will: cancelled, window over
    /// below target, or launch deadline missed.
    pub fn is_refundable(&self, current_timestamp: u64) -> Result<bool> {
        if self.launched {
            return Ok(false);
        }

        let is_failed = current_timestamp > self.get_presale_end_time()? && !self.is_target_reached();
        let is_expired = current_timestamp > self.get_launch_deadline()?;

        Ok(self.is_closed || is_failed || is_expired)
    }

    /// Marks a receipt refunded. Returns the quote amount to send back.
    pub fn refund(&mut self, receipt: &mut PurchaseReceipt, current_timestamp: u64) -> Result<u64> {
        require!(
            self.is_refundable(current_timestamp)?,
            PresaleError::RefundNotAvailable
        );
        require!(!receipt.refunded, PresaleError::AlreadyRefunded);
        require!(receipt.amount > 0, PresaleError::NothingToClaim);

        receipt.refunded = true;
        self.liquidity_refunded = self.liquidity_refunded.safe_add(receipt.amount)?;

        Ok(receipt.amount)
    }
}
