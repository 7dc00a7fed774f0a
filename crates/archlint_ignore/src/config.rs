use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-declared ignore pattern, kept in its rendered string form
/// (e.g. `"mypackage.a -> mypackage.b"`). How the pattern selects concrete
/// edges is decided by the graph's matching oracle, not here.
///
/// Ordering is lexicographic over the string form, which is what all
/// user-visible output is sorted by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IgnoreExpression(String);

impl IgnoreExpression {
    pub fn new(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IgnoreExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for IgnoreExpression {
    fn from(expression: &str) -> Self {
        Self::new(expression)
    }
}

/// How to treat ignore expressions that matched no concrete import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    /// Silently drop unmatched expressions.
    None,
    /// Return one warning per unmatched expression.
    Warn,
    /// Fail the whole check on the first unmatched expression.
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_level_deserializes_from_lowercase() {
        assert_eq!(serde_json::from_str::<AlertLevel>("\"none\"").unwrap(), AlertLevel::None);
        assert_eq!(serde_json::from_str::<AlertLevel>("\"warn\"").unwrap(), AlertLevel::Warn);
        assert_eq!(serde_json::from_str::<AlertLevel>("\"error\"").unwrap(), AlertLevel::Error);
        assert!(serde_json::from_str::<AlertLevel>("\"fatal\"").is_err());
    }

    #[test]
    fn test_ignore_expression_is_a_transparent_string() {
        let expression: IgnoreExpression = serde_json::from_str("\"pkg.a -> pkg.b\"").unwrap();
        assert_eq!(expression, IgnoreExpression::new("pkg.a -> pkg.b"));
        assert_eq!(expression.to_string(), "pkg.a -> pkg.b");
    }

    #[test]
    fn test_ignore_expression_orders_lexicographically() {
        let mut expressions =
            vec![IgnoreExpression::new("z -> a"), IgnoreExpression::new("a -> z")];
        expressions.sort();
        assert_eq!(expressions[0].as_str(), "a -> z");
    }
}
