//! Row limit for list queries
//!
//! The original sidebar allowed 1..=2000 with a default of 200; the
//! same bounds apply to the `limit` query parameter.

/// Maximum rows per list query
const MAX_ROW_LIMIT: u32 = 2000;

/// Default rows per list query
const DEFAULT_ROW_LIMIT: u32 = 200;

/// Clamped row limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLimit(u32);

impl RowLimit {
    /// Create a row limit, clamped to 1..=2000.
    pub fn new(limit: u32) -> Self {
        Self(limit.clamp(1, MAX_ROW_LIMIT))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// LIMIT bind value.
    pub fn as_i64(self) -> i64 {
        i64::from(self.0)
    }
}

impl Default for RowLimit {
    fn default() -> Self {
        Self(DEFAULT_ROW_LIMIT)
    }
}

impl From<Option<u32>> for RowLimit {
    fn from(limit: Option<u32>) -> Self {
        limit.map(Self::new).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_bounds() {
        assert_eq!(RowLimit::new(0).get(), 1);
        assert_eq!(RowLimit::new(50).get(), 50);
        assert_eq!(RowLimit::new(9999).get(), 2000);
    }

    #[test]
    fn default_matches_sidebar() {
        assert_eq!(RowLimit::default().get(), 200);
        assert_eq!(RowLimit::from(None).get(), 200);
        assert_eq!(RowLimit::from(Some(25)).get(), 25);
    }
}
