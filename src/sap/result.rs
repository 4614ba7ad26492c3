//! The value returned by a shortest-ancestral-path query.

use serde::{Deserialize, Serialize};

/// Length and meeting vertex of a shortest ancestral path.
///
/// Both fields are `Some` when the two sides share an ancestor and both are
/// `None` otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SapResult {
    /// Total number of edges on the path, summed over both sides.
    pub length: Option<usize>,
    /// A common ancestor on which a shortest path meets.
    pub ancestor: Option<usize>,
}

impl SapResult {
    /// The result for two sides with no common ancestor.
    pub const NONE: Self = Self {
        length: None,
        ancestor: None,
    };

    pub(crate) fn found(length: usize, ancestor: usize) -> Self {
        Self {
            length: Some(length),
            ancestor: Some(ancestor),
        }
    }

    /// Returns `true` if a common ancestor exists.
    pub fn is_found(&self) -> bool {
        self.ancestor.is_some()
    }

    /// Length as a signed integer, `-1` meaning "no common ancestor".
    pub fn length_or_sentinel(&self) -> i64 {
        to_sentinel(self.length)
    }

    /// Ancestor as a signed integer, `-1` meaning "no common ancestor".
    pub fn ancestor_or_sentinel(&self) -> i64 {
        to_sentinel(self.ancestor)
    }
}

fn to_sentinel(value: Option<usize>) -> i64 {
    value.map_or(-1, |v| i64::try_from(v).unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::SapResult;

    #[test]
    fn sentinels() {
        assert_eq!(SapResult::NONE.length_or_sentinel(), -1);
        assert_eq!(SapResult::NONE.ancestor_or_sentinel(), -1);
        assert!(!SapResult::NONE.is_found());

        let found = SapResult::found(2, 7);
        assert!(found.is_found());
        assert_eq!(found.length_or_sentinel(), 2);
        assert_eq!(found.ancestor_or_sentinel(), 7);
    }

    #[test]
    fn serializes_missing_ancestor_as_null() {
        let json = serde_json::to_string(&SapResult::NONE).unwrap();
        assert_eq!(json, r#"{"length":null,"ancestor":null}"#);
        let back: SapResult = serde_json::from_str(r#"{"length":3,"ancestor":1}"#).unwrap();
        assert_eq!(back, SapResult::found(3, 1));
    }
}
