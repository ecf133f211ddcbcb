//! Delivery fee resolution

use crate::checkout::{settle_checkout_fee, SettledFee};
use crate::config::ResolverConfig;
use crate::error::ResolverError;
use crate::matcher::{self, KeywordMatch};
use crate::table::{
    self, format_rupiah, OUT_OF_RANGE_DISPLAY_MAX_KM, OUT_OF_RANGE_EXAMPLES, OUT_OF_RANGE_KEYWORDS,
    STORE_FEEDBACK_LOCATION, TIERS,
};
use ongkir_domain::{
    AreaInfo, Confidence, DetectionMethod, DistanceRange, FeeResolver, ResolutionResult, StoreInfo,
    Suggestion, TierId, ValidationReport,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Combined fee request: an address, a measured distance, or both
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRequest {
    /// Free-text delivery address
    #[serde(default)]
    pub address: Option<String>,

    /// Manually measured distance in km; takes precedence over the address
    #[serde(default)]
    pub manual_distance: Option<f64>,
}

/// Fee quote returned for a [`DeliveryRequest`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryQuote {
    /// Underlying resolution
    #[serde(flatten)]
    pub resolution: ResolutionResult,

    /// Textual distance estimate for the resolved tier
    pub distance_estimate: String,
}

/// Resolves delivery fees from addresses and distances
///
/// Stateless apart from its configuration; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct DeliveryFeeResolver {
    config: ResolverConfig,
}

impl DeliveryFeeResolver {
    /// Create a resolver after validating the configuration
    pub fn new(config: ResolverConfig) -> Result<Self, ResolverError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a resolver with the default configuration
    pub fn default_config() -> Self {
        Self {
            config: ResolverConfig::default(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a free-text delivery address
    ///
    /// Strategies run in order and the first hit wins:
    /// out-of-range, exact keyword, partial token, administrative pattern,
    /// then the unknown fallback.
    pub fn resolve_from_address(&self, raw_address: &str) -> ResolutionResult {
        let address = matcher::normalize(raw_address);

        if let Some(keyword) = matcher::find_out_of_range(&address, OUT_OF_RANGE_KEYWORDS) {
            info!(keyword, "Address is outside the service area");
            return self.out_of_range_result();
        }

        let cascade = matcher::find_exact(&address, &TIERS)
            .map(|m| (m, Confidence::High, DetectionMethod::ExactKeywordMatch))
            .or_else(|| {
                matcher::find_partial(&address, &TIERS)
                    .map(|m| (m, Confidence::Medium, DetectionMethod::PartialKeywordMatch))
            })
            .or_else(|| {
                matcher::find_by_pattern(&address, &TIERS)
                    .map(|m| (m, Confidence::Low, DetectionMethod::PatternMatch))
            });

        match cascade {
            Some((hit, confidence, method)) => {
                debug!(
                    tier = %hit.tier.id,
                    keyword = hit.keyword,
                    method = %method,
                    "Address matched"
                );
                keyword_result(hit, confidence, method)
            }
            None => {
                info!(
                    candidates = ?matcher::extract_place_names(&address),
                    "Address not recognised, using fallback fee"
                );
                self.unknown_result()
            }
        }
    }

    /// Resolve a manually measured distance in kilometres
    pub fn resolve_from_distance(&self, km: f64) -> ResolutionResult {
        if km.is_nan() || km < 0.0 {
            debug!(km, "Rejected invalid distance");
            return self.invalid_distance_result();
        }

        if let Some(tier) = TIERS.iter().find(|t| t.distance_range.contains(km)) {
            debug!(km, tier = %tier.id, "Distance matched tier");
            return ResolutionResult {
                tier: tier.id,
                fee: tier.fee,
                area_name: format!("{} ({} km)", tier.area_name, km),
                description: format!("{} - Jarak: {} km", tier.description, km),
                confidence: Confidence::High,
                detection_method: DetectionMethod::ManualDistance,
                matched_keyword: None,
                requires_confirmation: false,
                distance: Some(km),
                note: None,
            };
        }

        let fee = format_rupiah(self.config.out_of_range_fee);
        if km > table::farthest_tier().distance_range.max_km
            && km <= self.config.out_of_range_ceiling_km
        {
            info!(km, "Distance beyond farthest tier");
            return ResolutionResult {
                tier: TierId::OutOfRange,
                fee: self.config.out_of_range_fee,
                area_name: format!("Area Sangat Jauh ({} km)", km),
                description: format!(
                    "Jarak {} km - Di luar jangkauan normal, {} (perlu konfirmasi)",
                    km, fee
                ),
                confidence: Confidence::High,
                detection_method: DetectionMethod::ManualDistanceOutOfRange,
                matched_keyword: None,
                requires_confirmation: true,
                distance: Some(km),
                note: None,
            };
        }

        info!(km, "Distance beyond ceiling, using fallback fee");
        ResolutionResult {
            tier: TierId::Unknown,
            fee: self.config.unknown_fee,
            area_name: format!("Area Tidak Dikenal ({} km)", km),
            description: format!(
                "Jarak {} km - {} (akan dikonfirmasi admin)",
                km,
                format_rupiah(self.config.unknown_fee)
            ),
            confidence: Confidence::Medium,
            detection_method: DetectionMethod::ManualDistanceUnknown,
            matched_keyword: None,
            requires_confirmation: true,
            distance: Some(km),
            note: None,
        }
    }

    /// Resolve a distance typed as text
    ///
    /// Text that is not a number yields the invalid-input result.
    pub fn resolve_from_distance_input(&self, input: &str) -> ResolutionResult {
        match input.trim().parse::<f64>() {
            Ok(km) => self.resolve_from_distance(km),
            Err(_) => {
                debug!(input, "Distance input is not a number");
                self.invalid_distance_result()
            }
        }
    }

    /// Keywords containing the partial input, best candidates first
    ///
    /// Ordering: exact keyword, shorter keyword, lower fee, then table order.
    pub fn suggestions(&self, partial_input: &str) -> Vec<Suggestion> {
        let input = partial_input.to_lowercase();
        if input.chars().count() < self.config.min_suggestion_chars {
            return Vec::new();
        }
        let needle = input.as_str();

        let mut suggestions: Vec<Suggestion> = TIERS
            .iter()
            .flat_map(|tier| {
                tier.keywords
                    .iter()
                    .filter(move |keyword| keyword.contains(needle))
                    .map(move |keyword| Suggestion {
                        keyword: keyword.to_string(),
                        tier: tier.id,
                        fee: tier.fee,
                        area_name: tier.area_name.to_string(),
                        description: tier.description.to_string(),
                    })
            })
            .collect();

        // stable sort keeps table order for ties
        suggestions.sort_by_key(|s| (s.keyword != input, s.keyword.len(), s.fee));
        suggestions.truncate(self.config.suggestion_limit);
        suggestions
    }

    /// Resolve an address and attach customer feedback
    pub fn validate_address(&self, address: &str) -> ValidationReport {
        let result = self.resolve_from_address(address);
        let suggestions = if result.confidence == Confidence::None {
            self.suggestions(address)
        } else {
            Vec::new()
        };

        ValidationReport {
            is_valid: result.is_recognised(),
            confidence_level: result.confidence,
            feedback_message: feedback_message(&result),
            detected_area: result.area_name,
            delivery_fee: result.fee,
            suggestions,
            store_info: table::store_info(),
        }
    }

    /// All tiers nearest first, followed by one out-of-range entry
    pub fn list_areas(&self) -> Vec<AreaInfo> {
        let limit = self.config.example_area_limit;
        let farthest_km = table::farthest_tier().distance_range.max_km;

        TIERS
            .iter()
            .map(|tier| AreaInfo {
                tier: tier.id,
                fee: tier.fee,
                area_name: tier.area_name.to_string(),
                description: tier.description.to_string(),
                distance_estimate: table::distance_estimate(tier.id).to_string(),
                distance_range: tier.distance_range,
                example_areas: tier.keywords.iter().take(limit).map(|k| k.to_string()).collect(),
                total_areas: tier.keywords.len(),
                note: None,
            })
            .chain(std::iter::once(AreaInfo {
                tier: TierId::OutOfRange,
                fee: self.config.out_of_range_fee,
                area_name: "Di Luar Jangkauan".to_string(),
                description: format!(
                    "Area di luar Jawa Tengah Selatan - {} (perlu konfirmasi)",
                    format_rupiah(self.config.out_of_range_fee)
                ),
                distance_estimate: format!("{}+ km", farthest_km),
                distance_range: DistanceRange::new(farthest_km, OUT_OF_RANGE_DISPLAY_MAX_KM),
                example_areas: OUT_OF_RANGE_EXAMPLES
                    .iter()
                    .take(limit)
                    .map(|k| k.to_string())
                    .collect(),
                total_areas: OUT_OF_RANGE_KEYWORDS.len(),
                note: Some("Layanan terbatas, perlu konfirmasi admin".to_string()),
            }))
            .collect()
    }

    /// Textual distance estimate for a tier
    pub fn distance_estimate(&self, tier: TierId) -> &'static str {
        table::distance_estimate(tier)
    }

    /// Store origin details
    pub fn store_info(&self) -> StoreInfo {
        table::store_info()
    }

    /// Quote a fee from an address and/or a measured distance
    ///
    /// A measured distance wins over the address. An empty address counts
    /// as absent.
    pub fn quote(&self, request: &DeliveryRequest) -> Result<DeliveryQuote, ResolverError> {
        let resolution = match (request.manual_distance, request.address.as_deref()) {
            (Some(km), _) => self.resolve_from_distance(km),
            (None, Some(address)) if !address.is_empty() => self.resolve_from_address(address),
            _ => return Err(ResolverError::MissingInput),
        };

        Ok(DeliveryQuote {
            distance_estimate: table::distance_estimate(resolution.tier).to_string(),
            resolution,
        })
    }

    /// Cross-check a client-quoted fee using the configured tolerance
    pub fn settle_checkout_fee(
        &self,
        address: &str,
        client_fee: Option<u64>,
    ) -> Result<SettledFee, ResolverError> {
        settle_checkout_fee(self, address, client_fee, self.config.checkout_tolerance)
    }

    fn out_of_range_result(&self) -> ResolutionResult {
        ResolutionResult {
            tier: TierId::OutOfRange,
            fee: self.config.out_of_range_fee,
            area_name: "Di Luar Jangkauan".to_string(),
            description: format!(
                "Area di luar jangkauan layanan - {} (perlu konfirmasi admin)",
                format_rupiah(self.config.out_of_range_fee)
            ),
            confidence: Confidence::High,
            detection_method: DetectionMethod::OutOfRangeDetection,
            matched_keyword: None,
            requires_confirmation: true,
            distance: None,
            note: Some(
                "Area terlalu jauh dari Banjarnegara, akan dikonfirmasi ketersediaan layanan"
                    .to_string(),
            ),
        }
    }

    fn unknown_result(&self) -> ResolutionResult {
        ResolutionResult {
            tier: TierId::Unknown,
            fee: self.config.unknown_fee,
            area_name: "Area Tidak Dikenal".to_string(),
            description: format!(
                "Area belum terdaftar - {} (akan dikonfirmasi admin)",
                format_rupiah(self.config.unknown_fee)
            ),
            confidence: Confidence::None,
            detection_method: DetectionMethod::DefaultFallback,
            matched_keyword: None,
            requires_confirmation: true,
            distance: None,
            note: Some(
                "Mohon konfirmasi lokasi dengan admin untuk memastikan layanan tersedia".to_string(),
            ),
        }
    }

    fn invalid_distance_result(&self) -> ResolutionResult {
        ResolutionResult {
            tier: TierId::Unknown,
            fee: self.config.unknown_fee,
            area_name: "Input Tidak Valid".to_string(),
            description: "Jarak harus berupa angka positif".to_string(),
            confidence: Confidence::None,
            detection_method: DetectionMethod::ManualDistanceInvalid,
            matched_keyword: None,
            requires_confirmation: false,
            distance: None,
            note: None,
        }
    }
}

impl FeeResolver for DeliveryFeeResolver {
    fn resolve_from_address(&self, address: &str) -> ResolutionResult {
        DeliveryFeeResolver::resolve_from_address(self, address)
    }

    fn resolve_from_distance(&self, distance_km: f64) -> ResolutionResult {
        DeliveryFeeResolver::resolve_from_distance(self, distance_km)
    }
}

fn keyword_result(hit: KeywordMatch, confidence: Confidence, method: DetectionMethod) -> ResolutionResult {
    ResolutionResult {
        tier: hit.tier.id,
        fee: hit.tier.fee,
        area_name: hit.tier.area_name.to_string(),
        description: hit.tier.description.to_string(),
        confidence,
        detection_method: method,
        matched_keyword: Some(hit.keyword.to_string()),
        requires_confirmation: false,
        distance: None,
        note: None,
    }
}

fn feedback_message(result: &ResolutionResult) -> String {
    match result.confidence {
        Confidence::High => format!("✅ Alamat terdeteksi dengan baik di area {}", result.area_name),
        Confidence::Medium => format!(
            "⚠️ Alamat terdeteksi di area {}, mohon konfirmasi jika kurang tepat",
            result.area_name
        ),
        Confidence::Low => format!(
            "🔍 Area {} terdeteksi dengan estimasi dari {}",
            result.area_name, STORE_FEEDBACK_LOCATION
        ),
        Confidence::None => {
            "❌ Area belum terdaftar, silakan pilih dari suggestion atau hubungi admin".to_string()
        }
    }
}
