//! Trait definitions for external interactions
//!
//! Checkout, admin estimation and any other caller depend on this trait
//! rather than on the concrete resolver.

use crate::ResolutionResult;

/// Resolves a delivery fee from an address or a measured distance
///
/// Implemented by `ongkir-resolver`. Implementations never fail: every
/// input, however malformed, yields exactly one result.
pub trait FeeResolver {
    /// Resolve a free-text delivery address
    fn resolve_from_address(&self, address: &str) -> ResolutionResult;

    /// Resolve a manually measured distance in kilometres
    fn resolve_from_distance(&self, distance_km: f64) -> ResolutionResult;
}
