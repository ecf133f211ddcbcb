//! Read-only views of the tier table: listings, suggestions, validation reports

use crate::{Confidence, TierId};
use serde::{Deserialize, Serialize};

/// Inclusive distance bracket in kilometres
///
/// Serialized as a two-element array `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct DistanceRange {
    /// Lower bound (km)
    pub min_km: f64,
    /// Upper bound (km)
    pub max_km: f64,
}

impl DistanceRange {
    /// Create a new range
    pub const fn new(min_km: f64, max_km: f64) -> Self {
        Self { min_km, max_km }
    }

    /// Check if the range contains a distance, bounds included
    pub fn contains(&self, km: f64) -> bool {
        km >= self.min_km && km <= self.max_km
    }
}

impl From<[f64; 2]> for DistanceRange {
    fn from([min_km, max_km]: [f64; 2]) -> Self {
        Self { min_km, max_km }
    }
}

impl From<DistanceRange> for [f64; 2] {
    fn from(range: DistanceRange) -> Self {
        [range.min_km, range.max_km]
    }
}

/// One autocomplete candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Matching keyword
    pub keyword: String,
    /// Tier owning the keyword
    pub tier: TierId,
    /// Tier fee in rupiah
    pub fee: u64,
    /// Tier display name
    pub area_name: String,
    /// Tier description
    pub description: String,
}

/// Where the store is and how distances are measured
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreInfo {
    /// Short store location
    pub location: String,
    /// Regency of the store
    pub regency: String,
    /// Province of the store
    pub province: String,
    /// Explanation shown alongside fees
    pub note: String,
}

/// Address check with feedback for the customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True unless nothing matched
    pub is_valid: bool,
    /// Confidence of the underlying resolution
    pub confidence_level: Confidence,
    /// Area name of the underlying resolution
    pub detected_area: String,
    /// Fee of the underlying resolution
    pub delivery_fee: u64,
    /// Alternatives, only populated when nothing matched
    pub suggestions: Vec<Suggestion>,
    /// Canned message for the confidence level
    pub feedback_message: String,
    /// Store origin
    pub store_info: StoreInfo,
}

/// Summary of one tier for area listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaInfo {
    /// Tier identifier
    pub tier: TierId,
    /// Fee in rupiah
    pub fee: u64,
    /// Display name
    pub area_name: String,
    /// Description
    pub description: String,
    /// Textual distance estimate, e.g. "3-8 km"
    pub distance_estimate: String,
    /// Raw distance bracket
    pub distance_range: DistanceRange,
    /// A handful of keywords from the tier
    pub example_areas: Vec<String>,
    /// Number of keywords in the tier
    pub total_areas: usize,
    /// Remark for staff
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_contains_bounds() {
        let range = DistanceRange::new(3.0, 8.0);
        assert!(range.contains(3.0));
        assert!(range.contains(8.0));
        assert!(range.contains(5.5));
        assert!(!range.contains(8.01));
        assert!(!range.contains(f64::NAN));
    }

    #[test]
    fn test_range_serializes_as_pair() {
        let json = serde_json::to_string(&DistanceRange::new(0.0, 3.0)).unwrap();
        assert_eq!(json, "[0.0,3.0]");
        let back: DistanceRange = serde_json::from_str("[60, 80]").unwrap();
        assert_eq!(back, DistanceRange::new(60.0, 80.0));
    }
}
