use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::error::{GarageError, Result};

/// Unique, immutable identity of a car within the collection.
pub type CarId = u64;

pub const MIN_PRICE: f64 = 1.0;
pub const MIN_YEAR: i32 = 1900;

/// A single car record. Serializes to the on-disk JSON object shape
/// `{id, brand, model, year, price}` with no extra fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
}

impl Car {
    pub fn new(id: CarId, fields: CarFields) -> Self {
        Self {
            id,
            brand: fields.brand,
            model: fields.model,
            year: fields.year,
            price: fields.price,
        }
    }
}

/// Unvalidated draft of a car, the input to create and update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarFields {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
}

impl CarFields {
    pub fn new(brand: String, model: String, year: i32, price: f64) -> Self {
        Self {
            brand,
            model,
            year,
            price,
        }
    }

    /// Check the price and year rules, price first. The first failing rule
    /// wins and the whole draft is rejected.
    ///
    /// The upper year bound is the current calendar year, read at validation
    /// time.
    pub fn validate(&self) -> Result<()> {
        // NaN and infinities must not pass: serde_json writes non-finite
        // floats as null, which would poison the stored snapshot.
        if !self.price.is_finite() || self.price < MIN_PRICE {
            return Err(GarageError::Validation(format!(
                "Price must be at least {}",
                MIN_PRICE as i64
            )));
        }
        let max_year = current_year();
        if self.year < MIN_YEAR || self.year > max_year {
            return Err(GarageError::Validation(format!(
                "Year must be between {} and {}",
                MIN_YEAR, max_year
            )));
        }
        Ok(())
    }
}

pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(year: i32, price: f64) -> CarFields {
        CarFields::new("Toyota".into(), "Corolla".into(), year, price)
    }

    #[test]
    fn accepts_valid_fields() {
        assert!(fields(2020, 15000.0).validate().is_ok());
    }

    #[test]
    fn rejects_price_below_minimum() {
        let err = fields(2020, 0.0).validate().unwrap_err();
        assert_eq!(err.to_string(), "Price must be at least 1");
    }

    #[test]
    fn price_rule_fires_before_year_rule() {
        // Both fields invalid: the price message must win.
        let err = fields(1899, 0.5).validate().unwrap_err();
        assert_eq!(err.to_string(), "Price must be at least 1");
    }

    #[test]
    fn rejects_year_out_of_range() {
        let err = fields(1899, 10.0).validate().unwrap_err();
        let expected = format!("Year must be between 1900 and {}", current_year());
        assert_eq!(err.to_string(), expected);

        assert!(fields(current_year() + 1, 10.0).validate().is_err());
        assert!(fields(MIN_YEAR, 10.0).validate().is_ok());
        assert!(fields(current_year(), 10.0).validate().is_ok());
    }

    #[test]
    fn price_of_exactly_one_is_accepted() {
        assert!(fields(2020, 1.0).validate().is_ok());
    }

    #[test]
    fn rejects_non_finite_prices() {
        let err = fields(2020, f64::NAN).validate().unwrap_err();
        assert_eq!(err.to_string(), "Price must be at least 1");

        assert!(fields(2020, f64::INFINITY).validate().is_err());
        assert!(fields(2020, f64::NEG_INFINITY).validate().is_err());
    }
}
