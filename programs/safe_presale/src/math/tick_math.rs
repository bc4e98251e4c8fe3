use crate::*;

pub const MIN_TICK: i32 = -443636;
pub const MAX_TICK: i32 = -MIN_TICK;

pub const MIN_SQRT_PRICE_X64: u128 = 4295048016;
pub const MAX_SQRT_PRICE_X64: u128 = 79226673521066979257578248091;

pub const TICK_ARRAY_SIZE: i32 = 60;

pub const ONE_X64: u128 = 1u128 << 64;

// floor(2^64 / sqrt(1.0001)^(2^i))
const SQRT_PRICE_TICK_FACTORS: [u128; 19] = [
    0xfffcb933bd6fad37,
    0xfff97272373d4132,
    0xfff2e50f5f656932,
    0xffe5caca7e10e4e6,
    0xffcb9843d60f6159,
    0xff973b41fa98c081,
    0xff2ea16466c96a38,
    0xfe5dee046a99a2a8,
    0xfcbe86c7900a88ae,
    0xf987a7253ac41317,
    0xf3392b0822b70005,
    0xe7159475a2c29b74,
    0xd097f3bdfd2022b8,
    0xa9f746462d870fdf,
    0x70d869a156d2a1b8,
    0x31be135f97d08fd9,
    0x9aa508b5b7a84e1,
    0x5d6af8dedb8119,
    0x2216e584f5fa,
];

/// sqrt(1.0001^tick) as a Q64.64 number.
pub fn get_sqrt_price_at_tick(tick: i32) -> Result<u128> {
    require!(
        (MIN_TICK..=MAX_TICK).contains(&tick),
        PresaleError::PriceOutOfRange
    );

    let abs_tick = tick.unsigned_abs();
    let mut ratio = ONE_X64;
    for (bit, factor) in SQRT_PRICE_TICK_FACTORS.iter().enumerate() {
        if abs_tick & (1u32 << bit) != 0 {
            // both operands are at most 2^64
            ratio = ratio.safe_mul(*factor)?.safe_shr(64)?;
        }
    }

    if tick > 0 {
        ratio = u128::MAX.safe_div(ratio)?;
    }

    Ok(ratio)
}

/// Greatest tick whose sqrt price does not exceed `sqrt_price_x64`.
pub fn get_tick_at_sqrt_price(sqrt_price_x64: u128) -> Result<i32> {
    require!(
        (MIN_SQRT_PRICE_X64..MAX_SQRT_PRICE_X64).contains(&sqrt_price_x64),
        PresaleError::PriceOutOfRange
    );

    let mut low = MIN_TICK;
    let mut high = MAX_TICK;
    while low < high {
        // rounds towards +inf so the loop always makes progress
        let mid = low + (high - low + 1) / 2;
        if get_sqrt_price_at_tick(mid)? <= sqrt_price_x64 {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Ok(low)
}

pub fn floor_tick_to_spacing(tick: i32, tick_spacing: u16) -> i32 {
    let tick_spacing = i32::from(tick_spacing);
    tick.div_euclid(tick_spacing) * tick_spacing
}

pub fn ceil_tick_to_spacing(tick: i32, tick_spacing: u16) -> i32 {
    let floored = floor_tick_to_spacing(tick, tick_spacing);
    if floored == tick {
        tick
    } else {
        floored + i32::from(tick_spacing)
    }
}

pub fn get_tick_array_start_index(tick: i32, tick_spacing: u16) -> i32 {
    let ticks_in_array = TICK_ARRAY_SIZE * i32::from(tick_spacing);
    tick.div_euclid(ticks_in_array) * ticks_in_array
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickRange {
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub tick_array_lower_start: i32,
    pub tick_array_upper_start: i32,
}

impl TickRange {
    pub fn new(tick_lower: i32, tick_upper: i32, tick_spacing: u16) -> Result<Self> {
        require!(tick_spacing > 0, PresaleError::InvalidTickSpacing);
        require!(tick_lower < tick_upper, PresaleError::PriceOutOfRange);
        require!(
            tick_lower >= MIN_TICK && tick_upper <= MAX_TICK,
            PresaleError::PriceOutOfRange
        );

        Ok(Self {
            tick_lower,
            tick_upper,
            tick_array_lower_start: get_tick_array_start_index(tick_lower, tick_spacing),
            tick_array_upper_start: get_tick_array_start_index(tick_upper, tick_spacing),
        })
    }

    pub fn sqrt_price_lower_x64(&self) -> Result<u128> {
        get_sqrt_price_at_tick(self.tick_lower)
    }

    pub fn sqrt_price_upper_x64(&self) -> Result<u128> {
        get_sqrt_price_at_tick(self.tick_upper)
    }
}

fn scale_sqrt_price(sqrt_price_x64: u128, numerator: u64, denominator: u64) -> Result<u128> {
    // price in Q128, scaled, then back to a Q64 square root
    let scaled_price_x128 = U256::from(sqrt_price_x64)
        .checked_mul(U256::from(sqrt_price_x64))
        .and_then(|price| price.checked_mul(U256::from(numerator)))
        .and_then(|price| price.checked_div(U256::from(denominator)))
        .ok_or(PresaleError::MathOverflow)?;

    let scaled_sqrt_price = u256_to_u128(scaled_price_x128.integer_sqrt())?;

    Ok(scaled_sqrt_price.clamp(MIN_SQRT_PRICE_X64, MAX_SQRT_PRICE_X64 - 1))
}

/// Tick range covering the reward token price +/- `PRICE_RANGE_BPS` around the launch price.
///
/// The venue prices token 1 in units of token 0. When the reward token is token 1 the range is
/// computed on the inverted price so it stays symmetric around the reward token price.
pub fn get_launch_tick_range(
    sqrt_price_x64: u128,
    reward_is_token_0: bool,
    tick_spacing: u16,
) -> Result<TickRange> {
    require!(tick_spacing > 0, PresaleError::InvalidTickSpacing);

    let lower_bps = MAX_BASIS_POINTS.safe_sub(PRICE_RANGE_BPS)?;
    let upper_bps = MAX_BASIS_POINTS.safe_add(PRICE_RANGE_BPS)?;

    let (sqrt_price_lower, sqrt_price_upper) = if reward_is_token_0 {
        (
            scale_sqrt_price(sqrt_price_x64, lower_bps, MAX_BASIS_POINTS)?,
            scale_sqrt_price(sqrt_price_x64, upper_bps, MAX_BASIS_POINTS)?,
        )
    } else {
        (
            scale_sqrt_price(sqrt_price_x64, MAX_BASIS_POINTS, upper_bps)?,
            scale_sqrt_price(sqrt_price_x64, MAX_BASIS_POINTS, lower_bps)?,
        )
    };

    let min_usable_tick = ceil_tick_to_spacing(MIN_TICK, tick_spacing);
    let max_usable_tick = floor_tick_to_spacing(MAX_TICK, tick_spacing);

    let tick_lower = floor_tick_to_spacing(get_tick_at_sqrt_price(sqrt_price_lower)?, tick_spacing)
        .max(min_usable_tick);
    let mut tick_upper =
        ceil_tick_to_spacing(get_tick_at_sqrt_price(sqrt_price_upper)?, tick_spacing)
            .min(max_usable_tick);

    if tick_upper <= tick_lower {
        tick_upper = tick_lower.safe_add(tick_spacing.into())?;
    }

    TickRange::new(tick_lower, tick_upper, tick_spacing)
}
