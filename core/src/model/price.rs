// catalog/src/model/price.rs

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::PriceError;

/// A non-negative amount with two decimal places, stored as whole cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
  cents: i64,
}

impl Price {
  pub const ZERO: Price = Price { cents: 0 };
  /// Largest amount a `decimal(10, 2)` column holds.
  pub const MAX: Price = Price { cents: 9_999_999_999 };

  pub fn from_cents(cents: i64) -> Result<Self, PriceError> {
    if cents < 0 {
      return Err(PriceError::Negative);
    }
    if cents > Self::MAX.cents {
      return Err(PriceError::TooLarge);
    }
    Ok(Price { cents })
  }

  pub fn cents(self) -> i64 {
    self.cents
  }

  /// Parses user input such as `"12"`, `"12.5"`, `"12.50"` or `".5"`.
  pub fn parse(input: &str) -> Result<Self, PriceError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
      return Err(PriceError::Empty);
    }
    let not_a_number = || PriceError::NotANumber(trimmed.to_string());

    // Decimal also takes `_` separators; a price field does not.
    if !trimmed.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+')) {
      return Err(not_a_number());
    }
    let amount = Decimal::from_str(trimmed).map_err(|_| not_a_number())?;

    if amount.is_sign_negative() && !amount.is_zero() {
      return Err(PriceError::Negative);
    }
    if amount.scale() > 2 {
      return Err(PriceError::TooManyDecimals);
    }
    if amount > Decimal::new(Self::MAX.cents, 2) {
      return Err(PriceError::TooLarge);
    }

    let cents = (amount.abs() * Decimal::ONE_HUNDRED).trunc().to_i64().ok_or(PriceError::TooLarge)?;
    Self::from_cents(cents)
  }

  /// Addition for totals. A total may exceed [`Price::MAX`]; only single
  /// amounts are bounded by it.
  pub fn saturating_add(self, other: Price) -> Price {
    Price {
      cents: self.cents.saturating_add(other.cents),
    }
  }

  /// Formats as en-US dollars, e.g. `$1,234.50`.
  pub fn format_usd(self) -> String {
    let dollars = (self.cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
      if i > 0 && (dollars.len() - i) % 3 == 0 {
        grouped.push(',');
      }
      grouped.push(ch);
    }
    format!("${}.{:02}", grouped, self.cents % 100)
  }
}

impl fmt::Display for Price {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
  }
}

impl FromStr for Price {
  type Err = PriceError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Price::parse(s)
  }
}

impl std::iter::Sum for Price {
  fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
    iter.fold(Price::ZERO, Price::saturating_add)
  }
}

impl<'a> std::iter::Sum<&'a Price> for Price {
  fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Price {
    iter.copied().sum()
  }
}

impl Serialize for Price {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for Price {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let text = super::text_or_number(deserializer)?;
    Price::parse(&text).map_err(serde::de::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_common_inputs() {
    assert_eq!(Price::parse("12").unwrap().cents(), 1200);
    assert_eq!(Price::parse("12.5").unwrap().cents(), 1250);
    assert_eq!(Price::parse(" 12.50 ").unwrap().cents(), 1250);
    assert_eq!(Price::parse(".5").unwrap().cents(), 50);
    assert_eq!(Price::parse("0").unwrap(), Price::ZERO);
    assert_eq!(Price::parse("-0.00").unwrap(), Price::ZERO);
    assert_eq!(Price::parse("99999999.99").unwrap(), Price::MAX);
  }

  #[test]
  fn rejects_bad_inputs() {
    assert_eq!(Price::parse("   "), Err(PriceError::Empty));
    assert_eq!(Price::parse("abc"), Err(PriceError::NotANumber("abc".into())));
    assert_eq!(Price::parse("."), Err(PriceError::NotANumber(".".into())));
    assert_eq!(Price::parse("1.2.3"), Err(PriceError::NotANumber("1.2.3".into())));
    assert_eq!(Price::parse("-3"), Err(PriceError::Negative));
    assert_eq!(Price::parse("1.999"), Err(PriceError::TooManyDecimals));
    assert_eq!(Price::parse("100000000"), Err(PriceError::TooLarge));
    assert_eq!(Price::parse("123456789012345678901234"), Err(PriceError::TooLarge));
    assert_eq!(Price::parse("1_000"), Err(PriceError::NotANumber("1_000".into())));
    assert_eq!(Price::parse("-1.999"), Err(PriceError::Negative));
    assert_eq!(Price::parse("1.990"), Err(PriceError::TooManyDecimals));
  }

  #[test]
  fn formats_currency_with_grouping() {
    assert_eq!(Price::ZERO.format_usd(), "$0.00");
    assert_eq!(Price::from_cents(99).unwrap().format_usd(), "$0.99");
    assert_eq!(Price::from_cents(123_456).unwrap().format_usd(), "$1,234.56");
    assert_eq!(Price::from_cents(100_000_000).unwrap().format_usd(), "$1,000,000.00");
    assert_eq!(Price::from_cents(123_450).unwrap().to_string(), "1234.50");
  }

  #[test]
  fn json_accepts_strings_and_numbers() {
    let from_string: Price = serde_json::from_str(r#""19.99""#).unwrap();
    let from_number: Price = serde_json::from_str("19.99").unwrap();
    let from_integer: Price = serde_json::from_str("20").unwrap();
    assert_eq!(from_string.cents(), 1999);
    assert_eq!(from_number.cents(), 1999);
    assert_eq!(from_integer.cents(), 2000);
    assert_eq!(serde_json::to_string(&from_string).unwrap(), r#""19.99""#);
  }
}
