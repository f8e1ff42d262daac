//! Shared validation for the ptm/drug text keys

use super::ValidationError;

/// Maximum length for ptm/drug names
const MAX_COMPOUND_NAME_LEN: usize = 256;

/// Validated, trimmed ptm or drug name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundName(String);

impl CompoundName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if trimmed.len() > MAX_COMPOUND_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_COMPOUND_NAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CompoundName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_realistic_keys() {
        assert!(CompoundName::new("AARS ubi k474").is_ok());
        assert!(CompoundName::new("H3122SEPTM_pTyr.PR2").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            CompoundName::new("  ").unwrap_err(),
            ValidationError::Empty { .. }
        ));
    }

    #[test]
    fn rejects_overlong() {
        assert!(CompoundName::new(&"x".repeat(257)).is_err());
        assert!(CompoundName::new(&"x".repeat(256)).is_ok());
    }
}
