//! Resolver error types

use thiserror::Error;

/// Errors raised around resolution
///
/// Resolution itself never fails; these cover configuration and the
/// checkout and quote surfaces built on top of it.
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Configuration violates a fee or distance invariant
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read a configuration file
    #[error("Failed to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// Failed to parse a configuration file
    #[error("Failed to parse config TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Neither an address nor a distance was supplied
    #[error("Address or manual distance is required")]
    MissingInput,

    /// Client-quoted fee disagrees with the computed fee
    #[error("Delivery fee mismatch: client quoted {client_fee}, expected {expected_fee} (tolerance {tolerance})")]
    FeeMismatch {
        /// Fee sent by the client
        client_fee: u64,
        /// Fee computed from the address
        expected_fee: u64,
        /// Allowed absolute difference
        tolerance: u64,
    },
}
