use super::{identity_token_account, MockVenue};
use anchor_lang::prelude::Pubkey;
use anchor_spl::token_interface::TokenAccount;
use safe_presale::{
    is_identity_token_owner, launch_pool, BuyFeeExcludedCalculation, InitPoolArgs, LaunchArgs,
    LaunchOutcome, LaunchStrategy, Pool, PoolAccountKeys, PresaleError, PurchaseReceipt,
};

pub const POOL_CREATED_AT: u64 = 1_700_000_000;

pub const ONE_SOL: u64 = 1_000_000_000;
pub const PRESALE_TARGET: u64 = ONE_SOL / 2;
pub const MAX_AMOUNT_PER_PURCHASE: u64 = ONE_SOL;
pub const PRESALE_DURATION: u64 = 60 * 60;
pub const VESTING_PERIOD: u64 = 60 * 60 * 24;

pub fn reward_mint_key() -> Pubkey {
    Pubkey::new_from_array([1u8; 32])
}

pub fn quote_mint_key() -> Pubkey {
    Pubkey::new_from_array([2u8; 32])
}

pub fn default_init_pool_args() -> InitPoolArgs {
    InitPoolArgs {
        name: "Safe Presale".to_string(),
        symbol: "SAFE".to_string(),
        uri: "https://example.com/safe.json".to_string(),
        decimals: 6,
        presale_target: PRESALE_TARGET,
        max_amount_per_purchase: MAX_AMOUNT_PER_PURCHASE,
        creator_fee_basis_points: 500,
        buy_fee_basis_points: 0,
        fee_collector: None,
        vesting_period: VESTING_PERIOD,
        initial_supply: 700_000_000,
        liquidity_pool_supply: 300_000_000,
        presale_duration: PRESALE_DURATION,
        launch_strategy: LaunchStrategy::ConstantProduct.into(),
        requires_collections: vec![],
        random_key: None,
    }
}

pub struct PoolFixture {
    pub pool_key: Pubkey,
    pub authority: Pubkey,
    pub pool: Pool,
}

impl PoolFixture {
    pub fn new(args: &InitPoolArgs) -> Self {
        Self::with_mints(args, reward_mint_key(), quote_mint_key())
    }

    pub fn with_mints(args: &InitPoolArgs, mint: Pubkey, quote_mint: Pubkey) -> Self {
        args.validate().unwrap();

        let authority = Pubkey::new_unique();
        let mut pool = Pool::default();
        pool.initialize(
            args,
            PoolAccountKeys {
                authority,
                mint,
                quote_mint,
            },
            1,
            255,
            POOL_CREATED_AT,
        )
        .unwrap();

        Self {
            pool_key: Pubkey::new_unique(),
            authority,
            pool,
        }
    }

    pub fn new_receipt(&self) -> PurchaseReceipt {
        let mut receipt = PurchaseReceipt::default();
        receipt.initialize(
            254,
            self.pool_key,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            POOL_CREATED_AT,
        );
        receipt
    }

    pub fn presale_end_time(&self) -> u64 {
        self.pool.get_presale_end_time().unwrap()
    }

    /// Same checks as the buy instruction, in the same order.
    pub fn buy(
        &mut self,
        receipt: &mut PurchaseReceipt,
        buyer: Pubkey,
        identity_token: &TokenAccount,
        collection: Option<Pubkey>,
        amount: u64,
        current_timestamp: u64,
    ) -> anchor_lang::Result<BuyFeeExcludedCalculation> {
        self.pool.validate_open_for_purchase(current_timestamp)?;
        self.pool.validate_collection_membership(collection)?;
        anchor_lang::require!(
            is_identity_token_owner(identity_token, &receipt.original_mint, &buyer),
            PresaleError::NotOwner
        );
        self.pool.buy(receipt, amount)
    }

    /// Buy from the receipt's own buyer holding its identity token.
    pub fn buy_as_owner(
        &mut self,
        receipt: &mut PurchaseReceipt,
        amount: u64,
        current_timestamp: u64,
    ) -> anchor_lang::Result<BuyFeeExcludedCalculation> {
        let buyer = receipt.buyer;
        let identity_token = identity_token_account(receipt.original_mint, buyer, 1);
        self.buy(
            receipt,
            buyer,
            &identity_token,
            None,
            amount,
            current_timestamp,
        )
    }

    /// Fills the presale up to its target with a single receipt.
    pub fn fill_presale(&mut self) -> PurchaseReceipt {
        let mut receipt = self.new_receipt();
        let target = self.pool.presale_target;
        self.buy_as_owner(&mut receipt, target, POOL_CREATED_AT)
            .unwrap();
        receipt
    }

    pub fn launch(
        &mut self,
        venue: &mut MockVenue,
        current_timestamp: u64,
    ) -> anchor_lang::Result<LaunchOutcome> {
        let launch_strategy = self.pool.get_launch_strategy()?;
        let authority = self.authority;
        launch_pool(
            &mut self.pool,
            &authority,
            launch_strategy,
            &LaunchArgs { tick_spacing: 60 },
            venue,
            current_timestamp,
        )
    }
}
