use crate::errors::ServiceError;
use rust_decimal::Decimal;
use validator::ValidationError;

/// Highest unit price a request may carry, in whole currency units.
pub const MAX_UNIT_PRICE: i64 = 1_000_000_000;

pub fn validate_unit_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        return Err(ValidationError::new("negative_price")
            .with_message("Unit price cannot be negative".into()));
    }
    if *price > Decimal::from(MAX_UNIT_PRICE) {
        return Err(ValidationError::new("price_too_large")
            .with_message(format!("Unit price cannot exceed {MAX_UNIT_PRICE}").into()));
    }
    Ok(())
}

fn overflow() -> ServiceError {
    ServiceError::Validation(vec!["Amount exceeds the supported range".to_string()])
}

/// `unit_price × quantity`, failing instead of overflowing.
pub fn line_subtotal(unit_price: Decimal, quantity: i32) -> Result<Decimal, ServiceError> {
    unit_price
        .checked_mul(Decimal::from(quantity))
        .ok_or_else(overflow)
}

pub fn checked_sum<I>(amounts: I) -> Result<Decimal, ServiceError>
where
    I: IntoIterator<Item = Result<Decimal, ServiceError>>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, |acc, amount| {
        acc.checked_add(amount?).ok_or_else(overflow)
    })
}
