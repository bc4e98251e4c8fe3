use crate::*;

fn mul_div_floor(x: U256, y: U256, denominator: U256) -> Result<U256> {
    let result = x
        .checked_mul(y)
        .and_then(|product| product.checked_div(denominator))
        .ok_or(PresaleError::MathOverflow)?;
    Ok(result)
}

fn mul_div_ceil(x: U256, y: U256, denominator: U256) -> Result<U256> {
    require!(!denominator.is_zero(), PresaleError::MathOverflow);
    let product = x.checked_mul(y).ok_or(PresaleError::MathOverflow)?;
    let (quotient, remainder) = product.div_mod(denominator);
    if remainder.is_zero() {
        Ok(quotient)
    } else {
        Ok(quotient + U256::one())
    }
}

fn sorted(sqrt_price_a_x64: u128, sqrt_price_b_x64: u128) -> (u128, u128) {
    if sqrt_price_a_x64 > sqrt_price_b_x64 {
        (sqrt_price_b_x64, sqrt_price_a_x64)
    } else {
        (sqrt_price_a_x64, sqrt_price_b_x64)
    }
}

/// Initial pool price for a deposit of `amount_0` token 0 against `amount_1` token 1.
/// sqrt(amount_1 / amount_0) in Q64.64.
pub fn get_initial_sqrt_price_x64(amount_0: u64, amount_1: u64) -> Result<u128> {
    require!(amount_0 > 0 && amount_1 > 0, PresaleError::ZeroAmount);

    let price_x128 = (U256::from(amount_1) << 128) / U256::from(amount_0);
    let sqrt_price_x64 = u256_to_u128(price_x128.integer_sqrt())?;

    require!(
        (MIN_SQRT_PRICE_X64..MAX_SQRT_PRICE_X64).contains(&sqrt_price_x64),
        PresaleError::PriceOutOfRange
    );

    Ok(sqrt_price_x64)
}

pub fn get_liquidity_from_amount_0(
    sqrt_price_a_x64: u128,
    sqrt_price_b_x64: u128,
    amount_0: u64,
) -> Result<u128> {
    let (sqrt_price_a_x64, sqrt_price_b_x64) = sorted(sqrt_price_a_x64, sqrt_price_b_x64);
    let intermediate = mul_div_floor(
        U256::from(sqrt_price_a_x64),
        U256::from(sqrt_price_b_x64),
        U256::from(ONE_X64),
    )?;
    let liquidity = mul_div_floor(
        U256::from(amount_0),
        intermediate,
        U256::from(sqrt_price_b_x64.safe_sub(sqrt_price_a_x64)?),
    )?;

    Ok(u256_to_u128(liquidity)?)
}

pub fn get_liquidity_from_amount_1(
    sqrt_price_a_x64: u128,
    sqrt_price_b_x64: u128,
    amount_1: u64,
) -> Result<u128> {
    let (sqrt_price_a_x64, sqrt_price_b_x64) = sorted(sqrt_price_a_x64, sqrt_price_b_x64);
    let liquidity = mul_div_floor(
        U256::from(amount_1),
        U256::from(ONE_X64),
        U256::from(sqrt_price_b_x64.safe_sub(sqrt_price_a_x64)?),
    )?;

    Ok(u256_to_u128(liquidity)?)
}

/// Largest liquidity both token amounts can back inside `[sqrt_price_a, sqrt_price_b]`.
pub fn get_liquidity_from_amounts(
    sqrt_price_x64: u128,
    sqrt_price_a_x64: u128,
    sqrt_price_b_x64: u128,
    amount_0: u64,
    amount_1: u64,
) -> Result<u128> {
    let (sqrt_price_a_x64, sqrt_price_b_x64) = sorted(sqrt_price_a_x64, sqrt_price_b_x64);

    if sqrt_price_x64 <= sqrt_price_a_x64 {
        get_liquidity_from_amount_0(sqrt_price_a_x64, sqrt_price_b_x64, amount_0)
    } else if sqrt_price_x64 < sqrt_price_b_x64 {
        let liquidity_0 = get_liquidity_from_amount_0(sqrt_price_x64, sqrt_price_b_x64, amount_0)?;
        let liquidity_1 = get_liquidity_from_amount_1(sqrt_price_a_x64, sqrt_price_x64, amount_1)?;
        Ok(liquidity_0.min(liquidity_1))
    } else {
        get_liquidity_from_amount_1(sqrt_price_a_x64, sqrt_price_b_x64, amount_1)
    }
}

pub fn get_delta_amount_0_round_up(
    sqrt_price_a_x64: u128,
    sqrt_price_b_x64: u128,
    liquidity: u128,
) -> Result<u64> {
    let (sqrt_price_a_x64, sqrt_price_b_x64) = sorted(sqrt_price_a_x64, sqrt_price_b_x64);
    require!(sqrt_price_a_x64 > 0, PresaleError::PriceOutOfRange);

    let numerator_1 = U256::from(liquidity) << 64;
    let numerator_2 = U256::from(sqrt_price_b_x64.safe_sub(sqrt_price_a_x64)?);

    let amount = mul_div_ceil(numerator_1, numerator_2, U256::from(sqrt_price_b_x64))?;
    let amount = mul_div_ceil(amount, U256::one(), U256::from(sqrt_price_a_x64))?;

    Ok(u256_to_u128(amount)?.safe_cast()?)
}

pub fn get_delta_amount_1_round_up(
    sqrt_price_a_x64: u128,
    sqrt_price_b_x64: u128,
    liquidity: u128,
) -> Result<u64> {
    let (sqrt_price_a_x64, sqrt_price_b_x64) = sorted(sqrt_price_a_x64, sqrt_price_b_x64);

    let amount = mul_div_ceil(
        U256::from(liquidity),
        U256::from(sqrt_price_b_x64.safe_sub(sqrt_price_a_x64)?),
        U256::from(ONE_X64),
    )?;

    Ok(u256_to_u128(amount)?.safe_cast()?)
}

/// Token amounts the venue pulls for `liquidity` at the current price.
pub fn get_amounts_for_liquidity(
    sqrt_price_x64: u128,
    sqrt_price_a_x64: u128,
    sqrt_price_b_x64: u128,
    liquidity: u128,
) -> Result<(u64, u64)> {
    let (sqrt_price_a_x64, sqrt_price_b_x64) = sorted(sqrt_price_a_x64, sqrt_price_b_x64);

    if sqrt_price_x64 <= sqrt_price_a_x64 {
        Ok((
            get_delta_amount_0_round_up(sqrt_price_a_x64, sqrt_price_b_x64, liquidity)?,
            0,
        ))
    } else if sqrt_price_x64 < sqrt_price_b_x64 {
        Ok((
            get_delta_amount_0_round_up(sqrt_price_x64, sqrt_price_b_x64, liquidity)?,
            get_delta_amount_1_round_up(sqrt_price_a_x64, sqrt_price_x64, liquidity)?,
        ))
    } else {
        Ok((
            0,
            get_delta_amount_1_round_up(sqrt_price_a_x64, sqrt_price_b_x64, liquidity)?,
        ))
    }
}

/// Liquidity of a constant product pool seeded with both amounts: sqrt(amount_0 * amount_1).
pub fn get_constant_product_liquidity(amount_0: u64, amount_1: u64) -> Result<u128> {
    let product = U256::from(amount_0)
        .checked_mul(U256::from(amount_1))
        .ok_or(PresaleError::MathOverflow)?;

    Ok(u256_to_u128(product.integer_sqrt())?)
}
