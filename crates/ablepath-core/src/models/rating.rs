use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A 1–5 Likert rating. Construction is the only place the range is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(try_from = "i64", into = "u8")]
#[ts(export)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, CoreError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Rating(value as u8))
        } else {
            Err(CoreError::InvalidInput(format!(
                "rating must be between {} and {} (got {value})",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    /// Validate an optional request field, naming the field in the error.
    pub fn required(field: &str, value: Option<i64>) -> Result<Self, CoreError> {
        let value =
            value.ok_or_else(|| CoreError::InvalidInput(format!("{field} is required")))?;
        Self::new(value).map_err(|_| {
            CoreError::InvalidInput(format!(
                "{field} must be between {} and {} (got {value})",
                Self::MIN,
                Self::MAX
            ))
        })
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
