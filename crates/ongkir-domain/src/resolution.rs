//! Resolution results returned by the fee resolver

use crate::{Confidence, TierId};
use serde::{Deserialize, Serialize};

/// Which strategy produced a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    /// Address contains a known out-of-range city or region
    OutOfRangeDetection,

    /// A tier keyword is a substring of the address
    ExactKeywordMatch,

    /// Address and keyword share an overlapping word token
    PartialKeywordMatch,

    /// Token extracted after an administrative prefix matched a keyword
    PatternMatch,

    /// Nothing matched the address
    DefaultFallback,

    /// Measured distance fell inside a tier range
    ManualDistance,

    /// Measured distance beyond the farthest tier but under the ceiling
    ManualDistanceOutOfRange,

    /// Measured distance beyond the ceiling
    ManualDistanceUnknown,

    /// Distance was negative, NaN or not a number
    ManualDistanceInvalid,
}

impl DetectionMethod {
    /// Get the method tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMethod::OutOfRangeDetection => "out_of_range_detection",
            DetectionMethod::ExactKeywordMatch => "exact_keyword_match",
            DetectionMethod::PartialKeywordMatch => "partial_keyword_match",
            DetectionMethod::PatternMatch => "pattern_match",
            DetectionMethod::DefaultFallback => "default_fallback",
            DetectionMethod::ManualDistance => "manual_distance",
            DetectionMethod::ManualDistanceOutOfRange => "manual_distance_out_of_range",
            DetectionMethod::ManualDistanceUnknown => "manual_distance_unknown",
            DetectionMethod::ManualDistanceInvalid => "manual_distance_invalid",
        }
    }
}

impl std::fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of resolving one address or distance
///
/// Exactly one of these is produced per call. Callers branch on
/// `confidence` and `requires_confirmation`; a result with
/// `requires_confirmation` set must not be trusted without a human check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// Resolved tier
    pub tier: TierId,

    /// Delivery fee in rupiah
    pub fee: u64,

    /// Display name of the area
    pub area_name: String,

    /// Human-readable explanation
    pub description: String,

    /// Trust level of this resolution
    pub confidence: Confidence,

    /// Strategy that produced the result
    pub detection_method: DetectionMethod,

    /// Keyword that matched, for keyword strategies only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_keyword: Option<String>,

    /// Staff or customer must confirm before the fee is final
    #[serde(default)]
    pub requires_confirmation: bool,

    /// Measured distance in km, for distance resolution only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,

    /// Remark for staff
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ResolutionResult {
    /// Whether the address was recognised at all
    pub fn is_recognised(&self) -> bool {
        self.confidence.is_recognised()
    }
}
