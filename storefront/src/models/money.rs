// storefront/src/models/money.rs

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;

/// ISO 4217 codes whose minor unit is the major unit itself.
const ZERO_DECIMAL_CURRENCIES: &[&str] = &[
  "BIF", "CLP", "DJF", "GNF", "ISK", "JPY", "KMF", "KRW", "MGA", "PYG", "RWF", "UGX", "VND", "VUV", "XAF", "XOF", "XPF",
];

/// Upper-case three-letter currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
  pub fn parse(code: &str) -> Result<Self, String> {
    let code = code.trim();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
      return Err(format!("'{}' is not a three-letter currency code", code));
    }
    Ok(Currency(code.to_ascii_uppercase()))
  }

  pub fn usd() -> Self {
    Currency("USD".to_string())
  }

  pub fn code(&self) -> &str {
    &self.0
  }

  /// Lower-case form expected by Stripe.
  pub fn to_lowercase(&self) -> String {
    self.0.to_ascii_lowercase()
  }

  pub fn minor_unit_digits(&self) -> u32 {
    if ZERO_DECIMAL_CURRENCIES.contains(&self.0.as_str()) {
      0
    } else {
      2
    }
  }

  /// Scales `amount` to minor units, rounding half away from zero.
  /// `None` when the result does not fit an `i64`.
  pub fn to_minor_units(&self, amount: Decimal) -> Option<i64> {
    let factor = Decimal::from(10_i64.pow(self.minor_unit_digits()));
    amount
      .checked_mul(factor)?
      .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
      .to_i64()
  }
}

impl Default for Currency {
  fn default() -> Self {
    Self::usd()
  }
}

impl fmt::Display for Currency {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::str::FromStr;

  fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
  }

  #[test]
  fn usd_amounts_scale_by_one_hundred() {
    let usd = Currency::usd();
    assert_eq!(usd.to_minor_units(dec("19.99")), Some(1999));
    assert_eq!(usd.to_minor_units(dec("5.00")), Some(500));
    assert_eq!(usd.to_minor_units(dec("0.1")), Some(10));
  }

  #[test]
  fn midpoints_round_away_from_zero() {
    let usd = Currency::usd();
    assert_eq!(usd.to_minor_units(dec("1.005")), Some(101));
    assert_eq!(usd.to_minor_units(dec("1.004")), Some(100));
    assert_eq!(usd.to_minor_units(dec("-1.005")), Some(-101));
  }

  #[test]
  fn zero_decimal_currencies_keep_major_units() {
    let jpy = Currency::parse("jpy").unwrap();
    assert_eq!(jpy.code(), "JPY");
    assert_eq!(jpy.minor_unit_digits(), 0);
    assert_eq!(jpy.to_minor_units(dec("1500")), Some(1500));
    assert_eq!(jpy.to_minor_units(dec("1500.5")), Some(1501));
  }

  #[test]
  fn parse_rejects_malformed_codes() {
    assert!(Currency::parse("US").is_err());
    assert!(Currency::parse("US1").is_err());
    assert!(Currency::parse("EURO").is_err());
    assert_eq!(Currency::parse(" eur ").unwrap().to_lowercase(), "eur");
  }

  #[test]
  fn overflow_yields_none() {
    assert_eq!(Currency::usd().to_minor_units(Decimal::MAX), None);
  }
}
