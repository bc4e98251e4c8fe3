use crate::*;

#[event]
pub struct EvtIdentifierCreate {
    pub identifier: Pubkey,
    pub count: u64,
}

#[event]
pub struct EvtPoolCreate {
    pub pool: Pubkey,
    pub identifier: u64,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub quote_mint: Pubkey,
    pub launch_strategy: u8,
    pub total_supply: u64,
    pub initial_supply_for_creator: u64,
    pub liquidity_pool_supply: u64,
    pub presale_target: u64,
    pub max_amount_per_purchase: u64,
    pub creator_fee_basis_points: u16,
    pub buy_fee_basis_points: u16,
    pub presale_duration: u64,
    pub vesting_period: u64,
}

#[event]
pub struct EvtBuyPresale {
    pub pool: Pubkey,
    pub purchase_receipt: Pubkey,
    pub original_mint: Pubkey,
    pub buyer: Pubkey,
    pub amount: u64,
    pub fee: u64,
    pub receipt_total_amount: u64,
    pub pool_liquidity_collected: u64,
}

#[event]
pub struct EvtLaunch {
    pub pool: Pubkey,
    pub launch_strategy: u8,
    pub venue_pool: Pubkey,
    pub lp_mint: Pubkey,
    pub lp_amount: u64,
    pub liquidity: u128,
    pub sqrt_price_x64: u128,
    pub reward_amount: u64,
    pub quote_amount: u64,
    pub creator_fee: u64,
    pub reward_burned: u64,
    pub vesting_started_at: u64,
    pub vesting_period_end: u64,
}

#[event]
pub struct EvtCheckClaimEligibility {
    pub pool: Pubkey,
    pub purchase_receipt: Pubkey,
    pub mint_eligible: u64,
    pub lp_eligible: Option<u64>,
}

#[event]
pub struct EvtClaimRewards {
    pub pool: Pubkey,
    pub purchase_receipt: Pubkey,
    pub owner: Pubkey,
    pub claim_amount: u64,
    pub receipt_total_claim_amount: u64,
    pub pool_total_claim_amount: u64,
}

#[event]
pub struct EvtWithdrawLpTokens {
    pub pool: Pubkey,
    pub purchase_receipt: Pubkey,
    pub owner: Pubkey,
    pub withdraw_amount: u64,
    pub receipt_total_withdraw_amount: u64,
    pub pool_total_withdraw_amount: u64,
}

#[event]
pub struct EvtCreatorClaim {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub claim_amount: u64,
    pub creator_total_claim_amount: u64,
}

#[event]
pub struct EvtCreatorWithdrawPosition {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub position_nft_mint: Pubkey,
}

#[event]
pub struct EvtPoolCancel {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub liquidity_collected: u64,
}

#[event]
pub struct EvtRefund {
    pub pool: Pubkey,
    pub purchase_receipt: Pubkey,
    pub owner: Pubkey,
    pub refund_amount: u64,
    pub pool_total_refund_amount: u64,
}
