//! Datasource configuration.
//!
//! A [`DatasourceConfig`] is the property bag a host hands to a driver. It is
//! deliberately untyped: drivers read the keys they understand and leave
//! everything else alone.
//!
//! ```rust
//! use bxjdbc_core::DatasourceConfig;
//!
//! let config = DatasourceConfig::from_toml_str(r#"
//!     database = "mydb"
//!     host = "db.internal"
//!     port = 3307
//! "#).unwrap();
//!
//! assert_eq!(config.string_property("database"), "mydb");
//! assert_eq!(config.string_property("port"), "3307");
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{DriverError, DriverResult};
use crate::key::Key;
use crate::properties::Properties;
use crate::query_string;
use crate::value::PropertyValue;

/// Well-known property names.
pub mod keys {
    /// Database (schema) name.
    pub const DATABASE: &str = "database";
    /// Server host.
    pub const HOST: &str = "host";
    /// Server port.
    pub const PORT: &str = "port";
    /// Driver specific connection protocol alias.
    pub const PROTOCOL: &str = "protocol";
    /// Extra URL parameters, as a struct or a delimited string.
    pub const CUSTOM: &str = "custom";
    /// Login user.
    pub const USERNAME: &str = "username";
    /// Login password.
    pub const PASSWORD: &str = "password";
    /// Driver name the host resolved this config with.
    pub const DRIVER: &str = "driver";
}

/// The property bag describing how to connect to a database instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasourceConfig {
    /// Raw properties.
    pub properties: Properties,
}

impl DatasourceConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from key/value pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<PropertyValue>,
    {
        Self {
            properties: Properties::of(pairs),
        }
    }

    /// Parse a configuration from a JSON object.
    pub fn from_json_str(input: &str) -> DriverResult<Self> {
        let config: Self =
            serde_json::from_str(input).map_err(|e| DriverError::config(e.to_string()))?;
        debug!(properties = config.properties.len(), "Loaded datasource config from JSON");
        Ok(config)
    }

    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(input: &str) -> DriverResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| DriverError::config(e.to_string()))?;
        debug!(properties = config.properties.len(), "Loaded datasource config from TOML");
        Ok(config)
    }

    /// Set a property.
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key, value);
        self
    }

    /// Set a property in place.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<PropertyValue>) {
        self.properties.insert(key, value);
    }

    /// Look up a property.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Check if a property is present.
    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Render a property as a string, empty if absent or null.
    pub fn string_property(&self, key: &str) -> String {
        self.get(key).map(ToString::to_string).unwrap_or_default()
    }

    /// Render a property as a string, `None` if absent or
    /// [blank](PropertyValue::is_blank).
    pub fn non_empty(&self, key: &str) -> Option<String> {
        self.get(key)
            .filter(|value| !value.is_blank())
            .map(ToString::to_string)
    }

    /// Return the `custom` parameters as a struct.
    ///
    /// A string value is parsed with `delimiter` and written back into the
    /// configuration as a struct. Values of any other type are ignored.
    pub fn normalize_custom_params(&mut self, delimiter: &str) -> Properties {
        let parsed = match self.properties.get(keys::CUSTOM) {
            Some(PropertyValue::String(raw)) => query_string::parse(raw, delimiter),
            Some(PropertyValue::Struct(params)) => return params.clone(),
            Some(other) => {
                debug!(kind = other.kind(), "Ignoring custom parameters of unsupported type");
                return Properties::new();
            }
            None => return Properties::new(),
        };

        trace!(count = parsed.len(), "Normalized custom parameter string");
        self.properties
            .insert(keys::CUSTOM, PropertyValue::Struct(parsed.clone()));
        parsed
    }

    /// Add every default whose key is not already set.
    ///
    /// Existing values are never replaced. Returns the keys that were added.
    pub fn apply_default_properties(&mut self, defaults: &Properties) -> Vec<Key> {
        defaults
            .iter()
            .filter(|(key, value)| self.properties.insert_if_absent(*key, (*value).clone()))
            .map(|(key, _)| key.clone())
            .collect()
    }
}
