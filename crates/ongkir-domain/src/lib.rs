//! Ongkir Domain Layer
//!
//! This crate contains the value types shared by every part of the delivery
//! fee ("ongkir") system. It holds no matching logic and performs no I/O; the
//! resolver in `ongkir-resolver` produces these types and callers consume them.
//!
//! ## Key Concepts
//!
//! - **Tier**: A pricing bracket covering a contiguous distance range from the store
//! - **Confidence**: How much a resolution can be trusted (high → none)
//! - **Resolution**: The single tier, fee and explanation produced for one address or distance
//! - **Area listing**: Read-only views of the tier table for autocomplete and display
//!
//! ## Architecture
//!
//! - Serde derives only, so results can travel over any transport
//! - The `FeeResolver` trait is the seam external collaborators call into

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod area;
pub mod confidence;
pub mod resolution;
pub mod tier;
pub mod traits;

// Re-exports for convenience
pub use area::{AreaInfo, DistanceRange, StoreInfo, Suggestion, ValidationReport};
pub use confidence::Confidence;
pub use resolution::{DetectionMethod, ResolutionResult};
pub use tier::TierId;
pub use traits::FeeResolver;
