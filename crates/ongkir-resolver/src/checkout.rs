//! Checkout fee settlement
//!
//! At checkout the client may send the delivery fee it showed the customer.
//! The fee is cross-checked against the server-side resolution and rejected
//! when the two disagree by more than the tolerance.

use crate::error::ResolverError;
use ongkir_domain::{FeeResolver, ResolutionResult};
use serde::Serialize;
use tracing::{debug, warn};

/// Where the settled fee came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeSource {
    /// Client-quoted fee, within tolerance of the computed fee
    Client,
    /// Computed from the address because the client sent none
    Computed,
}

/// Fee accepted for an order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettledFee {
    /// Fee to charge (rupiah)
    pub fee: u64,
    /// Origin of the fee
    pub source: FeeSource,
    /// Server-side resolution of the delivery address
    pub resolution: ResolutionResult,
}

impl SettledFee {
    /// Whether staff must confirm the delivery area before the order proceeds
    pub fn requires_confirmation(&self) -> bool {
        self.resolution.requires_confirmation
    }
}

/// Settle the delivery fee for a checkout
///
/// # Arguments
///
/// * `resolver` - Fee resolver used for the server-side expectation
/// * `address` - Delivery address from the order
/// * `client_fee` - Fee quoted by the client, if any
/// * `tolerance` - Largest accepted absolute difference (rupiah)
///
/// # Returns
///
/// The settled fee, or `ResolverError::FeeMismatch` when the client fee is
/// out of tolerance
pub fn settle_checkout_fee<R: FeeResolver + ?Sized>(
    resolver: &R,
    address: &str,
    client_fee: Option<u64>,
    tolerance: u64,
) -> Result<SettledFee, ResolverError> {
    let resolution = resolver.resolve_from_address(address);
    let expected_fee = resolution.fee;

    let Some(client_fee) = client_fee else {
        debug!(fee = expected_fee, tier = %resolution.tier, "Using computed delivery fee");
        return Ok(SettledFee {
            fee: expected_fee,
            source: FeeSource::Computed,
            resolution,
        });
    };

    if client_fee.abs_diff(expected_fee) > tolerance {
        warn!(client_fee, expected_fee, tolerance, "Delivery fee mismatch at checkout");
        return Err(ResolverError::FeeMismatch {
            client_fee,
            expected_fee,
            tolerance,
        });
    }

    Ok(SettledFee {
        fee: client_fee,
        source: FeeSource::Client,
        resolution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ongkir_domain::{Confidence, DetectionMethod, TierId};

    // Fixed-fee resolver for testing (no matching)
    struct FlatResolver(u64);

    impl FeeResolver for FlatResolver {
        fn resolve_from_address(&self, _address: &str) -> ResolutionResult {
            ResolutionResult {
                tier: TierId::Tier1,
                fee: self.0,
                area_name: "Flat".to_string(),
                description: "Flat".to_string(),
                confidence: Confidence::High,
                detection_method: DetectionMethod::ExactKeywordMatch,
                matched_keyword: Some("flat".to_string()),
                requires_confirmation: false,
                distance: None,
                note: None,
            }
        }

        fn resolve_from_distance(&self, _distance_km: f64) -> ResolutionResult {
            self.resolve_from_address("")
        }
    }

    #[test]
    fn test_computed_when_client_omits_fee() {
        let settled = settle_checkout_fee(&FlatResolver(3000), "anywhere", None, 1000).unwrap();
        assert_eq!(settled.fee, 3000);
        assert_eq!(settled.source, FeeSource::Computed);
        assert!(!settled.requires_confirmation());
    }

    #[test]
    fn test_client_fee_within_tolerance() {
        let settled = settle_checkout_fee(&FlatResolver(3000), "anywhere", Some(3500), 1000).unwrap();
        assert_eq!(settled.fee, 3500);
        assert_eq!(settled.source, FeeSource::Client);

        // boundary is inclusive
        let settled = settle_checkout_fee(&FlatResolver(3000), "anywhere", Some(2000), 1000).unwrap();
        assert_eq!(settled.fee, 2000);
    }

    #[test]
    fn test_client_fee_out_of_tolerance() {
        let err = settle_checkout_fee(&FlatResolver(3000), "anywhere", Some(0), 1000).unwrap_err();
        match err {
            ResolverError::FeeMismatch {
                client_fee,
                expected_fee,
                tolerance,
            } => {
                assert_eq!(client_fee, 0);
                assert_eq!(expected_fee, 3000);
                assert_eq!(tolerance, 1000);
            }
            other => panic!("Expected FeeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_tolerance() {
        assert!(settle_checkout_fee(&FlatResolver(5000), "x", Some(5001), 0).is_err());
        assert!(settle_checkout_fee(&FlatResolver(5000), "x", Some(5000), 0).is_ok());
    }
}
