multiversx_sc::imports!();

use crate::types::RatioType;

/// Fixed-point scale used by `ratio`, `feeRatio` and `managementFee`.
pub const PRECISION: u64 = 1_000_000_000_000_000_000;

pub fn precision<M: ManagedTypeApi>() -> BigUint<M> {
    BigUint::from(PRECISION)
}

pub fn mul_div_floor<M: ManagedTypeApi>(
    a: &BigUint<M>,
    b: &BigUint<M>,
    denominator: &BigUint<M>,
) -> BigUint<M> {
    (a * b) / denominator
}

pub fn mul_div_ceil<M: ManagedTypeApi>(
    a: &BigUint<M>,
    b: &BigUint<M>,
    denominator: &BigUint<M>,
) -> BigUint<M> {
    let product = a * b;
    let quotient = &product / denominator;
    if &quotient * denominator < product {
        quotient + BigUint::from(1u64)
    } else {
        quotient
    }
}

/// Shares minted for `value` entering the pool. 1:1 on an empty pool.
pub fn shares_for_deposit<M: ManagedTypeApi>(
    value: &BigUint<M>,
    total_value: &BigUint<M>,
    total_shares: &BigUint<M>,
) -> BigUint<M> {
    if *total_shares == 0u64 {
        value.clone()
    } else {
        mul_div_floor(value, total_shares, total_value)
    }
}

/// Shares that must be burned to take `value` out of the pool.
pub fn shares_for_removal<M: ManagedTypeApi>(
    value: &BigUint<M>,
    total_value: &BigUint<M>,
    total_shares: &BigUint<M>,
) -> BigUint<M> {
    if *total_value == 0u64 {
        return BigUint::zero();
    }
    mul_div_ceil(value, total_shares, total_value)
}

pub fn value_of_shares<M: ManagedTypeApi>(
    shares: &BigUint<M>,
    total_value: &BigUint<M>,
    total_shares: &BigUint<M>,
) -> BigUint<M> {
    if *total_shares == 0u64 {
        return BigUint::zero();
    }
    mul_div_floor(shares, total_value, total_shares)
}

/// Shares that, once minted, are worth exactly `fee` at the post-mint rate:
/// `fee * S / (V - fee)`. Zero when the fee would swallow the whole pool.
pub fn fee_shares<M: ManagedTypeApi>(
    fee: &BigUint<M>,
    total_value: &BigUint<M>,
    total_shares: &BigUint<M>,
) -> BigUint<M> {
    if fee >= total_value {
        return BigUint::zero();
    }
    let remaining = total_value - fee;
    mul_div_floor(fee, total_shares, &remaining)
}

/// `amount * rate / 1e18`, rounded down.
pub fn apply_rate<M: ManagedTypeApi>(amount: &BigUint<M>, rate: &BigUint<M>) -> BigUint<M> {
    mul_div_floor(amount, rate, &precision())
}

/// Cost a punisher pays for `punishment`. `None` when punishing is disallowed.
pub fn punishment_cost<M: ManagedTypeApi>(
    ratio_type: RatioType,
    punishment: &BigUint<M>,
    ratio: &BigUint<M>,
) -> Option<BigUint<M>> {
    match ratio_type {
        RatioType::NaN => None,
        RatioType::Inf => Some(BigUint::zero()),
        RatioType::Dec => Some(mul_div_ceil(punishment, ratio, &precision())),
        RatioType::Flat => Some(ratio.clone()),
    }
}

/// Inverse of `punishment_cost`, only meaningful for `Dec`.
pub fn punishment_for_cost<M: ManagedTypeApi>(
    ratio_type: RatioType,
    cost: &BigUint<M>,
    ratio: &BigUint<M>,
) -> Option<BigUint<M>> {
    match ratio_type {
        RatioType::Dec => Some(mul_div_floor(cost, &precision(), ratio)),
        _ => None,
    }
}
