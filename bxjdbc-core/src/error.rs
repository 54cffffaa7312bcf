//! Error types for connection URL building.
//!
//! Building a URL can only fail in two ways: a required property is missing
//! or the requested protocol is not one the driver understands. The
//! remaining variants are produced by the configuration loaders and by
//! [`JdbcUrl::parse`](crate::JdbcUrl::parse).
//!
//! ```rust
//! use bxjdbc_core::DriverError;
//!
//! let err = DriverError::missing_property("Mysql", "database");
//! assert!(err.is_missing_property());
//! assert_eq!(
//!     err.to_string(),
//!     "The database property is required for the Mysql JDBC Driver"
//! );
//! ```

use thiserror::Error;

/// Result type for driver operations.
pub type DriverResult<T> = Result<T, DriverError>;

/// Errors raised while validating a datasource configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    /// A required property is absent or empty.
    #[error("The {property} property is required for the {driver} JDBC Driver")]
    MissingRequiredProperty {
        /// Driver that rejected the configuration.
        driver: String,
        /// Name of the missing property.
        property: String,
    },

    /// The protocol alias is not supported by the driver.
    #[error(
        "The protocol '{protocol}' is not valid for the {driver} Driver. Available protocols are [{}]",
        .available.join(", ")
    )]
    InvalidProtocol {
        /// Driver that rejected the configuration.
        driver: String,
        /// The rejected protocol value.
        protocol: String,
        /// Protocol aliases the driver accepts.
        available: Vec<String>,
    },

    /// A configuration document could not be loaded.
    #[error("Invalid datasource configuration: {0}")]
    InvalidConfig(String),

    /// A JDBC URL could not be parsed.
    #[error("Invalid JDBC URL: {0}")]
    InvalidUrl(String),
}

impl DriverError {
    /// Create a missing property error.
    pub fn missing_property(driver: impl Into<String>, property: impl Into<String>) -> Self {
        Self::MissingRequiredProperty {
            driver: driver.into(),
            property: property.into(),
        }
    }

    /// Create an invalid protocol error.
    pub fn invalid_protocol<I, S>(
        driver: impl Into<String>,
        protocol: impl Into<String>,
        available: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::InvalidProtocol {
            driver: driver.into(),
            protocol: protocol.into(),
            available: available.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a configuration loading error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a URL parsing error.
    pub fn url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }

    /// Check if this is a missing property error.
    pub fn is_missing_property(&self) -> bool {
        matches!(self, Self::MissingRequiredProperty { .. })
    }

    /// Check if this is an invalid protocol error.
    pub fn is_invalid_protocol(&self) -> bool {
        matches!(self, Self::InvalidProtocol { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_protocol_lists_options() {
        let err = DriverError::invalid_protocol("Mysql", "http", ["loadbalance", "replication"]);
        assert!(err.is_invalid_protocol());
        assert_eq!(
            err.to_string(),
            "The protocol 'http' is not valid for the Mysql Driver. Available protocols are [loadbalance, replication]"
        );
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(
            DriverError::config("bad"),
            DriverError::InvalidConfig(_)
        ));
        assert!(matches!(DriverError::url("bad"), DriverError::InvalidUrl(_)));
        assert!(!DriverError::config("bad").is_missing_property());
    }

    #[test]
    fn test_error_display() {
        let err = DriverError::url("missing 'jdbc:' prefix");
        assert!(err.to_string().contains("Invalid JDBC URL"));
        assert!(err.to_string().contains("jdbc:"));
    }
}
