//! Request validation and order arithmetic
//!
//! These checks run before anything reaches a store, so a rejected request
//! never leaves a trace behind.

use crate::core::dto::{CreateOrderItemRequest, CreateOrderRequest};
use crate::core::entity::{DEFAULT_CURRENCY, NewCustomer};
use crate::core::error::{AppError, Result};
use validator::ValidateEmail;

/// Check a customer and return it with surrounding whitespace trimmed
///
/// Both store backends call this at their boundary.
pub fn validate_new_customer(customer: &NewCustomer) -> Result<NewCustomer> {
    let name = customer.name.trim();
    let email = customer.email.trim();

    if name.is_empty() {
        return Err(AppError::field("name", "name required"));
    }
    if email.is_empty() {
        return Err(AppError::field("email", "email required"));
    }
    if !email.validate_email() {
        return Err(AppError::field("email", "email must be a valid address"));
    }

    Ok(NewCustomer::new(name, email))
}

/// Key used for email uniqueness
pub fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Guard an order request, returning the customer id and the items
pub fn validate_create_order(req: &CreateOrderRequest) -> Result<(i64, &[CreateOrderItemRequest])> {
    let customer_id = req
        .customer_id
        .ok_or_else(|| AppError::field("customerId", "customerId required"))?;

    let items = match req.items.as_deref() {
        Some(items) if !items.is_empty() => items,
        _ => return Err(AppError::field("items", "items required")),
    };

    for item in items {
        validate_item(item)?;
    }

    Ok((customer_id, items))
}

fn validate_item(item: &CreateOrderItemRequest) -> Result<()> {
    if item.qty <= 0 {
        return Err(AppError::field("qty", "qty must be >=1"));
    }
    if item.unit_price_cents < 0 {
        return Err(AppError::field(
            "unitPriceCents",
            "unitPriceCents must be >= 0",
        ));
    }
    if item.sku.trim().is_empty() {
        return Err(AppError::field("sku", "sku required"));
    }
    Ok(())
}

/// Resolve the order currency: absent or blank means `USD`
pub fn normalize_currency(currency: Option<&str>) -> Result<String> {
    let currency = match currency.map(str::trim) {
        None | Some("") => return Ok(DEFAULT_CURRENCY.to_string()),
        Some(c) => c,
    };

    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::field(
            "currency",
            "currency must be a 3-letter code",
        ));
    }

    Ok(currency.to_ascii_uppercase())
}

/// Sum of `qty × unitPriceCents` in 64-bit integer arithmetic
pub fn compute_total(items: &[CreateOrderItemRequest]) -> Result<i64> {
    items.iter().try_fold(0i64, |total, item| {
        i64::from(item.qty)
            .checked_mul(item.unit_price_cents)
            .and_then(|line| total.checked_add(line))
            .ok_or_else(|| AppError::field("items", "order total out of range"))
    })
}
