use anchor_lang::prelude::*;
use static_assertions::const_assert;

pub const MAX_BASIS_POINTS: u64 = 10_000;

// Share of the initial supply reserved for the pool creator
pub const CREATOR_SUPPLY_BPS: u64 = 500; // 5%

pub const MAX_BUY_FEE_BPS: u64 = 1000; // 10%

// Minimum time window for presale
pub const MINIMUM_PRESALE_DURATION: u64 = 30; // 30 seconds

// Maximum time window for presale
pub const MAXIMUM_PRESALE_DURATION: u64 = 60 * 60 * 24 * 30; // 30 days

pub const MAXIMUM_VESTING_PERIOD: u64 = 60 * 60 * 24 * 365 * 10; // 10 year

// Time the creator has to launch once the presale window is over
pub const LAUNCH_GRACE_PERIOD: u64 = 60 * 60 * 24 * 7; // 7 days

pub const MAX_REQUIRED_COLLECTIONS: usize = 5;

pub const MAX_DECIMALS: u8 = 9;

pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_URI_LENGTH: usize = 200;

// Concentrated liquidity range around the launch price
pub const PRICE_RANGE_BPS: u64 = 5000; // 50%

const_assert!(CREATOR_SUPPLY_BPS < MAX_BASIS_POINTS);
const_assert!(MAX_BUY_FEE_BPS < MAX_BASIS_POINTS);
const_assert!(PRICE_RANGE_BPS < MAX_BASIS_POINTS);
const_assert!(MINIMUM_PRESALE_DURATION < MAXIMUM_PRESALE_DURATION);

pub const NATIVE_MINT: Pubkey =
    Pubkey::from_str_const("So11111111111111111111111111111111111111112");

#[cfg(not(feature = "devnet"))]
pub mod venue_program {
    use super::*;

    pub const RAYDIUM_AMM_V4: Pubkey =
        Pubkey::from_str_const("675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8");
    pub const RAYDIUM_CLMM: Pubkey =
        Pubkey::from_str_const("CAMMCzo5YL8w4VFF8KVHrK22GGUsp5VTaW7grrKgrWqK");
}

#[cfg(feature = "devnet")]
pub mod venue_program {
    use super::*;

    pub const RAYDIUM_AMM_V4: Pubkey =
        Pubkey::from_str_const("HWy1jotHpo6UqeQxx49dpYYdQB8wj9Qk9MdxwjLvDHB8");
    pub const RAYDIUM_CLMM: Pubkey =
        Pubkey::from_str_const("devi51mZmdwUJGU9hjN27vEz64Gps7uUefqxg27EAtH");
}

// PDA's seeds
pub mod seeds {
    pub const IDENTIFIER_PREFIX: &[u8] = b"identifier";
    pub const POOL_PREFIX: &[u8] = b"pool";
    pub const POOL_RANDOM_PREFIX: &[u8] = b"pool_random";
    pub const PURCHASE_RECEIPT_PREFIX: &[u8] = b"receipt";
}
