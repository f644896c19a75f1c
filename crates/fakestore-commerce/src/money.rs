//! Prices and totals in integer minor units.
//!
//! The product API sends prices as decimal floats. They are converted once, at
//! the edge, with [`Money::from_decimal`]; from then on cart totals are sums of
//! integers, so `0.1 * 3 + 22.3` comes out as exactly `22.60`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CommerceError;

/// Currency a cart is priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Digits after the decimal point; 0 for yen.
    pub fn decimal_places(self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    fn minor_per_major(self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An amount in the smallest unit of its currency (cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    pub amount_cents: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Round a decimal price to the nearest minor unit.
    ///
    /// ```
    /// use fakestore_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(109.95, Currency::USD);
    /// assert_eq!(price.amount_cents, 10995);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let scaled = amount * currency.minor_per_major() as f64;
        Self::new(scaled.round() as i64, currency)
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// The amount in major units, for display and JSON output.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / self.currency.minor_per_major() as f64
    }

    /// Symbol and fixed decimals, e.g. `"$49.99"`.
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), self.to_decimal())
    }

    /// Add two amounts of the same currency.
    pub fn checked_add(self, other: Money) -> Result<Money, CommerceError> {
        if self.currency != other.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency,
                got: other.currency,
            });
        }
        Ok(self.saturating_add(other))
    }

    /// Add amounts without a currency check. Callers guarantee both share one.
    pub(crate) fn saturating_add(self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents), self.currency)
    }

    /// Price of `quantity` units.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money::new(
            self.amount_cents.saturating_mul(i64::from(quantity)),
            self.currency,
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal_rounds_to_cents() {
        assert_eq!(Money::from_decimal(22.3, Currency::USD).amount_cents, 2230);
        assert_eq!(Money::from_decimal(0.1, Currency::USD).amount_cents, 10);
        assert_eq!(Money::from_decimal(695.0, Currency::JPY).amount_cents, 695);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(2500, Currency::USD).display(), "$25.00");
        assert_eq!(Money::new(5, Currency::USD).to_string(), "$0.05");
        assert_eq!(Money::new(100, Currency::JPY).display(), "\u{00a5}100");
    }

    #[test]
    fn test_float_prices_sum_exactly() {
        let dime = Money::from_decimal(0.1, Currency::USD);
        let total = dime
            .multiply(3)
            .checked_add(Money::from_decimal(22.3, Currency::USD))
            .unwrap();
        assert_eq!(total.amount_cents, 2260);
        assert_eq!(total.display(), "$22.60");
    }

    #[test]
    fn test_multiply() {
        let m = Money::new(1099, Currency::USD);
        assert_eq!(m.multiply(3).amount_cents, 3297);
        assert!(m.multiply(0).is_zero());
    }

    #[test]
    fn test_checked_add_rejects_mixed_currencies() {
        let usd = Money::new(1000, Currency::USD);
        let eur = Money::new(1000, Currency::EUR);
        assert_eq!(
            usd.checked_add(eur),
            Err(CommerceError::CurrencyMismatch {
                expected: Currency::USD,
                got: Currency::EUR,
            })
        );
    }

    #[test]
    fn test_currency_serde_uses_code() {
        let json = serde_json::to_string(&Currency::EUR).unwrap();
        assert_eq!(json, "\"EUR\"");
        assert_eq!(Currency::EUR.to_string(), "EUR");
    }
}
