use crate::errors::ErrorCode;

/// Splits a captured payment between the app owner and the seller.
/// The fee is floor-divided, so the rounding remainder stays with the
/// seller.
pub fn withdraw_amounts(fee_basis_points: u16, price: u64) -> Result<(u64, u64), ErrorCode> {
    let fee = (fee_basis_points as u128)
        .checked_mul(price as u128)
        .ok_or(ErrorCode::NumericalOverflow)?
        .checked_div(10_000)
        .ok_or(ErrorCode::NumericalOverflow)? as u64;
    let seller_amount = price.checked_sub(fee).ok_or(ErrorCode::NumericalOverflow)?;

    Ok((fee, seller_amount))
}
