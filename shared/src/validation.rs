//! Validation utilities for the Pharmacy Inventory Management Platform
//!
//! The browser performs only type coercion; these checks are applied by the
//! backend services before any mutation.

use rust_decimal::Decimal;

/// Validate a medicine or warehouse name is non-empty
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name must not be empty");
    }
    Ok(())
}

/// Validate a stock quantity or sale amount is positive
pub fn validate_quantity(quantity: u32) -> Result<(), &'static str> {
    if quantity == 0 {
        return Err("Quantity must be positive");
    }
    Ok(())
}

/// Validate a unit price is not negative
pub fn validate_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Price cannot be negative");
    }
    Ok(())
}

/// Validate a transfer quantity against the source batch quantity
pub fn validate_transfer_quantity(requested: u32, available: u32) -> Result<(), &'static str> {
    if requested == 0 {
        return Err("Transfer quantity must be positive");
    }
    if requested > available {
        return Err("Transfer quantity exceeds batch quantity");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_valid() {
        assert!(validate_name("Paracetamol 500mg").is_ok());
        assert!(validate_name("A").is_ok());
    }

    #[test]
    fn test_validate_name_invalid() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(10_000).is_ok());
        assert!(validate_quantity(0).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Decimal::ZERO).is_ok());
        assert!(validate_price(Decimal::new(12_500, 2)).is_ok());
        assert!(validate_price(Decimal::new(-1, 0)).is_err());
    }

    #[test]
    fn test_validate_transfer_quantity() {
        assert!(validate_transfer_quantity(10, 10).is_ok());
        assert!(validate_transfer_quantity(1, 10).is_ok());
        assert!(validate_transfer_quantity(11, 10).is_err());
        assert!(validate_transfer_quantity(0, 10).is_err());
    }
}
