//! Resolver configuration
//!
//! Sentinel fees, the distance ceiling and listing limits. The tier table
//! itself is static data in [`crate::table`]; only the knobs around it are
//! configurable.

use crate::error::ResolverError;
use crate::table::{farthest_tier, TIERS};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the delivery fee resolver
///
/// # Examples
///
/// ```
/// use ongkir_resolver::ResolverConfig;
///
/// let config = ResolverConfig::default();
/// assert_eq!(config.unknown_fee, 30_000);
/// assert_eq!(config.out_of_range_fee, 35_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Fee charged when nothing matched (rupiah)
    /// Must sit above every tier fee and below the out-of-range fee
    pub unknown_fee: u64,

    /// Fee charged for out-of-range addresses and distances (rupiah)
    pub out_of_range_fee: u64,

    /// Distances above the farthest tier but at most this far are out of range;
    /// anything farther is treated as unknown
    pub out_of_range_ceiling_km: f64,

    /// Maximum number of suggestions returned
    pub suggestion_limit: usize,

    /// Shortest input that produces suggestions (characters)
    pub min_suggestion_chars: usize,

    /// Example keywords listed per area
    pub example_area_limit: usize,

    /// Allowed difference between a client-quoted fee and the computed fee (rupiah)
    pub checkout_tolerance: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            unknown_fee: 30_000,
            out_of_range_fee: 35_000,
            out_of_range_ceiling_km: 80.0,
            suggestion_limit: 10,
            min_suggestion_chars: 2,
            example_area_limit: 5,
            checkout_tolerance: 1_000,
        }
    }
}

impl ResolverConfig {
    /// Permissive checkout: accept client fees within Rp 5.000
    pub fn permissive() -> Self {
        Self {
            checkout_tolerance: 5_000,
            ..Self::default()
        }
    }

    /// Strict checkout: client fee must equal the computed fee
    pub fn strict() -> Self {
        Self {
            checkout_tolerance: 0,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file and validate it
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ResolverError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text and validate it
    ///
    /// Missing fields take their default values.
    pub fn from_toml_str(contents: &str) -> Result<Self, ResolverError> {
        let config: ResolverConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the fee ordering and distance invariants against the tier table
    pub fn validate(&self) -> Result<(), ResolverError> {
        let max_tier_fee = TIERS.iter().map(|t| t.fee).max().unwrap_or(0);
        if self.unknown_fee <= max_tier_fee {
            return Err(ResolverError::Config(format!(
                "unknown_fee {} must exceed the highest tier fee {}",
                self.unknown_fee, max_tier_fee
            )));
        }

        if self.out_of_range_fee <= self.unknown_fee {
            return Err(ResolverError::Config(format!(
                "out_of_range_fee {} must exceed unknown_fee {}",
                self.out_of_range_fee, self.unknown_fee
            )));
        }

        let farthest_km = farthest_tier().distance_range.max_km;
        if self.out_of_range_ceiling_km.is_nan() || self.out_of_range_ceiling_km < farthest_km {
            return Err(ResolverError::Config(format!(
                "out_of_range_ceiling_km {} must be at least the farthest tier bound {}",
                self.out_of_range_ceiling_km, farthest_km
            )));
        }

        if self.suggestion_limit == 0 {
            return Err(ResolverError::Config("suggestion_limit must be positive".to_string()));
        }

        if self.min_suggestion_chars == 0 {
            return Err(ResolverError::Config("min_suggestion_chars must be positive".to_string()));
        }

        if self.example_area_limit == 0 {
            return Err(ResolverError::Config("example_area_limit must be positive".to_string()));
        }

        Ok(())
    }
}
