use crate::*;

/// Pro-rata share of `distributable_supply` owned by a contribution of `amount` out of `total`.
pub fn calculate_entitlement(amount: u64, distributable_supply: u64, total: u64) -> Result<u64> {
    if total == 0 {
        return Ok(0);
    }

    let entitlement = u128::from(amount)
        .safe_mul(distributable_supply.into())?
        .safe_div(total.into())?;

    Ok(entitlement.safe_cast()?)
}

/// Portion of `entitlement` unlocked at `current_timestamp` under a linear schedule starting at
/// `vesting_start_time`. A zero `vesting_period` unlocks everything at once.
pub fn calculate_vested_amount(
    entitlement: u64,
    vesting_start_time: u64,
    vesting_period: u64,
    current_timestamp: u64,
) -> Result<u64> {
    if current_timestamp < vesting_start_time {
        return Ok(0);
    }

    if vesting_period == 0 {
        return Ok(entitlement);
    }

    let elapsed_seconds = current_timestamp
        .safe_sub(vesting_start_time)?
        .min(vesting_period);

    let vested = u128::from(entitlement)
        .safe_mul(elapsed_seconds.into())?
        .safe_div(vesting_period.into())?;

    Ok(vested.safe_cast()?)
}

/// Newly unlocked amount on top of what was already claimed. Clamped at zero.
pub fn calculate_claimable_amount(
    entitlement: u64,
    already_claimed: u64,
    vesting_start_time: u64,
    vesting_period: u64,
    current_timestamp: u64,
) -> Result<u64> {
    let vested = calculate_vested_amount(
        entitlement,
        vesting_start_time,
        vesting_period,
        current_timestamp,
    )?;

    Ok(vested.saturating_sub(already_claimed))
}
