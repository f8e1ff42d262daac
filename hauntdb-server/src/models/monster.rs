//! Monster field validation
//!
//! The original UI enforced these only through form widgets; here they
//! are constructor invariants.

use super::ValidationError;

/// Maximum length for monster names
const MAX_MONSTER_NAME_LEN: usize = 128;

/// Validated, trimmed monster name (required, non-empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonsterName(String);

impl MonsterName {
    /// Create a monster name. Leading/trailing whitespace is trimmed;
    /// an empty or whitespace-only name is rejected.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if trimmed.len() > MAX_MONSTER_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_MONSTER_NAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MonsterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Scare level in the 1..=10 range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScareLevel(i32);

impl ScareLevel {
    pub fn new(level: i32) -> Result<Self, ValidationError> {
        if (1..=10).contains(&level) {
            Ok(Self(level))
        } else {
            Err(ValidationError::OutOfRange {
                field: "scare level",
                min: 1,
                max: 10,
            })
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }
}
