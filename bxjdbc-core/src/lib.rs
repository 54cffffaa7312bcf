//! # bxjdbc-core
//!
//! Shared building blocks for JDBC connection URL drivers:
//!
//! - [`DatasourceConfig`]: the untyped property bag a host hands to a driver
//! - [`Properties`] / [`PropertyValue`] / [`Key`]: ordered, case-insensitive properties
//! - [`query_string`]: delimiter-aware query string encoding
//! - [`JdbcDriver`]: the contract every database family implements
//! - [`JdbcUrl`]: a typed view of a built connection URL
//!
//! ## Building parameters
//!
//! ```rust
//! use bxjdbc_core::{DatasourceConfig, Properties, query_string};
//!
//! let mut config = DatasourceConfig::new()
//!     .with("database", "mydb")
//!     .with("custom", "useSSL=false&serverTimezone=UTC");
//!
//! // String custom parameters are rewritten into a struct in place.
//! let custom = config.normalize_custom_params("&");
//! assert_eq!(query_string::serialize(&custom, "&"), "useSSL=false&serverTimezone=UTC");
//!
//! // Defaults never replace what the caller set.
//! config.apply_default_properties(&Properties::of([("database", "other")]));
//! assert_eq!(config.string_property("database"), "mydb");
//! ```

#![deny(missing_docs)]

pub mod config;
pub mod driver;
pub mod error;
pub mod jdbc_url;
pub mod key;
pub mod logging;
pub mod properties;
pub mod query_string;
pub mod value;

pub use config::{DatasourceConfig, keys};
pub use driver::{DriverType, JdbcDriver};
pub use error::{DriverError, DriverResult};
pub use jdbc_url::JdbcUrl;
pub use key::Key;
pub use properties::Properties;
pub use value::PropertyValue;
