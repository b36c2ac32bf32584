use std::fmt::{self, Display};
use std::str::FromStr;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error, PartialEq)]
#[error("`{0}` is not a valid number.")]
#[diagnostic(code(surveyor::survey::value::parse))]
pub struct NumberParseError(pub String);

/// Value of a numeric field: a sample numeric answer or a slider bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
  /// Integer value.
  Integer(i64),
  /// Floating point value.
  Float(f64),
}

impl Number {
  /// Widens the value to a float, e.g. for slider track math.
  pub fn as_f64(&self) -> f64 {
    match self {
      | Self::Integer(int) => *int as f64,
      | Self::Float(float) => *float,
    }
  }
}

impl Display for Number {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Integer(int) => write!(f, "{int}"),
      | Self::Float(float) => write!(f, "{float}"),
    }
  }
}

impl From<i64> for Number {
  fn from(int: i64) -> Self {
    Self::Integer(int)
  }
}

impl From<f64> for Number {
  fn from(float: f64) -> Self {
    Self::Float(float)
  }
}

impl FromStr for Number {
  type Err = NumberParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.parse::<i64>()
      .map(Self::Integer)
      .or_else(|_| s.parse::<f64>().map(Self::Float))
      .map_err(|_| NumberParseError(s.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_integer() {
    assert_eq!(Number::from_str("42"), Ok(Number::Integer(42)));
    assert_eq!(Number::from_str("-5"), Ok(Number::Integer(-5)));
  }

  #[test]
  fn parse_float() {
    assert_eq!(Number::from_str("2.5"), Ok(Number::Float(2.5)));
  }

  #[test]
  fn parse_invalid() {
    assert_eq!(
      Number::from_str("nope"),
      Err(NumberParseError("nope".to_string()))
    );
  }

  #[test]
  fn display() {
    let cases = [
      (Number::Integer(50), "50"),
      (Number::Float(0.5), "0.5"),
      (Number::Float(50.0), "50"),
    ];

    for (number, expected) in cases {
      assert_eq!(number.to_string(), expected);
    }
  }
}
