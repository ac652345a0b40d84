use crate::shared::error::ValidationError;
use serde::{Deserialize, Serialize};

pub const MIN_FIELD_COUNT: u8 = 5;
pub const MAX_FIELD_COUNT: u8 = 10;
pub const DEFAULT_FIELD_COUNT: u8 = 7;

/// Number of fields the AI generator is asked for, always in 5..=10
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct FieldCount(u8);

impl FieldCount {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (MIN_FIELD_COUNT as i64..=MAX_FIELD_COUNT as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::FieldCountOutOfRange(value))
        }
    }

    /// Parses the number input; non-numeric input is out of range
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let value = input
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::FieldCountOutOfRange(0))?;
        Self::new(value)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for FieldCount {
    fn default() -> Self {
        Self(DEFAULT_FIELD_COUNT)
    }
}

impl TryFrom<i64> for FieldCount {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FieldCount> for u8 {
    fn from(count: FieldCount) -> Self {
        count.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(FieldCount::new(4), Err(ValidationError::FieldCountOutOfRange(4)));
        assert_eq!(FieldCount::new(11), Err(ValidationError::FieldCountOutOfRange(11)));
        assert_eq!(FieldCount::new(5).map(|c| c.get()), Ok(5));
        assert_eq!(FieldCount::new(10).map(|c| c.get()), Ok(10));
    }

    #[test]
    fn test_parse_and_default() {
        assert_eq!(FieldCount::default().get(), 7);
        assert_eq!(FieldCount::parse(" 8 ").map(|c| c.get()), Ok(8));
        assert!(FieldCount::parse("huit").is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&FieldCount::default()).unwrap();
        assert_eq!(json, "7");
        assert!(serde_json::from_str::<FieldCount>("12").is_err());
    }
}
