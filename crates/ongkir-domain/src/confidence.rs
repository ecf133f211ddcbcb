//! Confidence module - how far a fee resolution can be trusted

use serde::{Deserialize, Serialize};

/// Categorical trust level of a resolution
///
/// Ordered by trust: `High > Medium > Low > None`. The level reflects which
/// matching strategy produced the result, not the fee itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Nothing matched; the fee is a placeholder
    None,

    /// Matched through administrative-prefix extraction
    Low,

    /// Matched through token overlap
    Medium,

    /// Exact keyword hit, out-of-range hit or measured distance
    High,
}

impl Confidence {
    /// Get the confidence name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
            Confidence::None => "none",
        }
    }

    /// Whether a resolution at this level counts as a recognised address
    pub fn is_recognised(&self) -> bool {
        *self != Confidence::None
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trust_ordering() {
        assert!(Confidence::High > Confidence::Medium);
        assert!(Confidence::Medium > Confidence::Low);
        assert!(Confidence::Low > Confidence::None);
    }

    #[test]
    fn test_recognised() {
        assert!(Confidence::Low.is_recognised());
        assert!(!Confidence::None.is_recognised());
    }
}
