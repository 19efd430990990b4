//! Catalog product: identity and pricing shared by every sellable item
//!
//! A [`Product`] is embedded in concrete catalog entries (see
//! [`Disc`](crate::disc::Disc)) instead of being a base type. Pricing is
//! pass-through: a [`Money`] value is stored and shown, never computed with.

use crate::error::{Result, VideoshopError};
use crate::types::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An exact monetary amount in a named currency
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Exact decimal amount
    pub amount: Decimal,
    /// ISO 4217 currency code, e.g. `EUR`
    pub currency: String,
}

impl Money {
    /// Create a money value
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Create a money value in euros
    pub fn euros(amount: Decimal) -> Self {
        Self::new(amount, "EUR")
    }

    /// Parse `"9.99 EUR"`, `"EUR 9.99"` or a bare `"9.99"`.
    ///
    /// A bare amount takes `default_currency`.
    pub fn parse(s: &str, default_currency: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split_whitespace().collect();

        let (amount, currency) = match parts.as_slice() {
            [amount] => (*amount, default_currency),
            [first, second] => {
                if first.chars().all(|c| c.is_ascii_alphabetic()) {
                    (*second, *first)
                } else {
                    (*first, *second)
                }
            }
            _ => {
                return Err(VideoshopError::Validation(format!(
                    "Invalid price: '{}'",
                    s
                )))
            }
        };

        if currency.is_empty() || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(VideoshopError::Validation(format!(
                "Invalid currency code: '{}'",
                currency
            )));
        }

        let amount = Decimal::from_str(amount).map_err(|e| {
            VideoshopError::Validation(format!("Invalid amount '{}': {}", amount, e))
        })?;

        Ok(Self::new(amount, currency.to_ascii_uppercase()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Identity and price of a sellable catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
}

impl Product {
    /// Create a product with a fresh identifier
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            id: ProductId::new(),
            name: name.into(),
            price,
        }
    }

    /// Create a product with a known identifier
    pub fn with_id(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &Money {
        &self.price
    }
}
