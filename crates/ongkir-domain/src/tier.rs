//! Tier module - pricing brackets ordered by distance from the store

use serde::{Deserialize, Serialize};

/// Identifier of a delivery pricing tier
///
/// Geographic tiers run from nearest to farthest:
/// - Free: the store's own district
/// - Tier1 .. Tier6: progressively farther districts and regencies
///
/// Two sentinel tiers sit outside the geographic ordering:
/// - OutOfRange: recognised as too far away for normal service
/// - Unknown: nothing matched, staff must confirm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierId {
    /// Store area, no delivery charge
    Free,

    /// Nearest neighbouring districts
    Tier1,

    /// Surrounding districts
    Tier2,

    /// Edge of the home regency
    Tier3,

    /// Nearby neighbouring regencies
    Tier4,

    /// Mid-distance regencies
    Tier5,

    /// Largest city still in reach
    Tier6,

    /// Recognised as outside the service area
    OutOfRange,

    /// Not recognised at all
    Unknown,
}

impl TierId {
    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TierId::Free => "free",
            TierId::Tier1 => "tier1",
            TierId::Tier2 => "tier2",
            TierId::Tier3 => "tier3",
            TierId::Tier4 => "tier4",
            TierId::Tier5 => "tier5",
            TierId::Tier6 => "tier6",
            TierId::OutOfRange => "out_of_range",
            TierId::Unknown => "unknown",
        }
    }

    /// Parse a tier from a string
    ///
    /// `gratis` is accepted as an alias of `free`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "free" | "gratis" => Some(TierId::Free),
            "tier1" => Some(TierId::Tier1),
            "tier2" => Some(TierId::Tier2),
            "tier3" => Some(TierId::Tier3),
            "tier4" => Some(TierId::Tier4),
            "tier5" => Some(TierId::Tier5),
            "tier6" => Some(TierId::Tier6),
            "out_of_range" => Some(TierId::OutOfRange),
            "unknown" => Some(TierId::Unknown),
            _ => None,
        }
    }

    /// Whether this tier is one of the geographic pricing brackets
    pub fn is_geographic(&self) -> bool {
        !matches!(self, TierId::OutOfRange | TierId::Unknown)
    }

    /// Whether results in this tier always need staff confirmation
    pub fn is_sentinel(&self) -> bool {
        !self.is_geographic()
    }
}

impl std::fmt::Display for TierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TierId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid tier: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [TierId; 9] = [
        TierId::Free,
        TierId::Tier1,
        TierId::Tier2,
        TierId::Tier3,
        TierId::Tier4,
        TierId::Tier5,
        TierId::Tier6,
        TierId::OutOfRange,
        TierId::Unknown,
    ];

    #[test]
    fn test_order_is_nearest_first() {
        let mut sorted = ALL;
        sorted.sort();
        assert_eq!(sorted, ALL);
        assert!(TierId::Free < TierId::Tier1);
        assert!(TierId::Tier6 < TierId::OutOfRange);
    }

    #[test]
    fn test_parse_round_trips_names() {
        for tier in ALL {
            assert_eq!(TierId::parse(tier.as_str()), Some(tier));
        }
        assert_eq!(TierId::parse("Gratis"), Some(TierId::Free));
        assert!("tier9".parse::<TierId>().is_err());
    }

    #[test]
    fn test_sentinels() {
        assert!(TierId::OutOfRange.is_sentinel());
        assert!(TierId::Unknown.is_sentinel());
        assert!(TierId::Tier3.is_geographic());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&TierId::OutOfRange).unwrap(), "\"out_of_range\"");
        assert_eq!(serde_json::to_string(&TierId::Tier4).unwrap(), "\"tier4\"");
    }
}
