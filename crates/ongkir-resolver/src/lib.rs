//! Ongkir Resolver
//!
//! Classifies a free-text Indonesian delivery address into a pricing tier.
//!
//! The resolver provides:
//! - Address resolution through an ordered cascade (out-of-range, exact,
//!   partial, pattern, fallback)
//! - Distance resolution for manually measured kilometres
//! - Autocomplete suggestions and address validation feedback
//! - Area listings for display
//! - Checkout fee settlement against a client-quoted fee
//!
//! # Examples
//!
//! ```
//! use ongkir_resolver::DeliveryFeeResolver;
//! use ongkir_domain::{Confidence, TierId};
//!
//! let resolver = DeliveryFeeResolver::default_config();
//!
//! let result = resolver.resolve_from_address("Ds. Karangjati RT 01, Kec. Susukan");
//! assert_eq!(result.tier, TierId::Free);
//! assert_eq!(result.confidence, Confidence::High);
//! ```

#![warn(missing_docs)]

mod checkout;
mod config;
mod error;
mod matcher;
mod resolver;
pub mod table;

pub use checkout::{settle_checkout_fee, FeeSource, SettledFee};
pub use config::ResolverConfig;
pub use error::ResolverError;
pub use resolver::{DeliveryFeeResolver, DeliveryQuote, DeliveryRequest};
