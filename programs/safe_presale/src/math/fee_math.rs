use crate::*;

pub enum Rounding {
    Up,
    Down,
}

pub fn mul_div_u64(x: u64, y: u64, denominator: u64, rounding: Rounding) -> Result<u64> {
    let numerator = u128::from(x).safe_mul(y.into())?;
    let denominator = u128::from(denominator);

    let result = match rounding {
        Rounding::Up => numerator
            .safe_add(denominator.safe_sub(1)?)?
            .safe_div(denominator)?,
        Rounding::Down => numerator.safe_div(denominator)?,
    };

    Ok(result.safe_cast()?)
}

#[derive(Debug, PartialEq, Eq)]
pub struct BuyFeeExcludedCalculation {
    pub fee: u64,
    pub amount_excluded_fee: u64,
}

/// Splits a purchase into the fee slice routed to the fee collector and the net amount credited to
/// the pool. The fee is rounded up in favour of the collector.
pub fn calculate_buy_fee_excluded_amount(
    amount: u64,
    fee_bps: u16,
) -> Result<BuyFeeExcludedCalculation> {
    let fee = mul_div_u64(amount, fee_bps.into(), MAX_BASIS_POINTS, Rounding::Up)?;
    let amount_excluded_fee = amount.safe_sub(fee)?;

    Ok(BuyFeeExcludedCalculation {
        fee,
        amount_excluded_fee,
    })
}

pub fn calculate_creator_fee(liquidity_collected: u64, creator_fee_bps: u16) -> Result<u64> {
    mul_div_u64(
        liquidity_collected,
        creator_fee_bps.into(),
        MAX_BASIS_POINTS,
        Rounding::Down,
    )
}
