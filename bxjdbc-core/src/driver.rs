//! The driver contract.
//!
//! Each database family implements [`JdbcDriver`]. The provided methods hold
//! the parameter merging shared by every driver, so an implementation only
//! has to validate its own keys and format its URL.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::{DatasourceConfig, keys};
use crate::error::{DriverError, DriverResult};
use crate::key::Key;
use crate::properties::Properties;
use crate::query_string;

/// Database family a driver targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DriverType {
    /// MySQL
    Mysql,
    /// MariaDB
    MariaDb,
    /// PostgreSQL
    Postgresql,
    /// Microsoft SQL Server
    Mssql,
    /// Oracle
    Oracle,
    /// Apache Derby
    Derby,
    /// HyperSQL
    HyperSql,
    /// Any other JDBC driver.
    Generic,
}

impl DriverType {
    /// Upper-case identifier, e.g. `MYSQL`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mysql => "MYSQL",
            Self::MariaDb => "MARIADB",
            Self::Postgresql => "POSTGRESQL",
            Self::Mssql => "MSSQL",
            Self::Oracle => "ORACLE",
            Self::Derby => "DERBY",
            Self::HyperSql => "HYPERSQL",
            Self::Generic => "GENERIC",
        }
    }
}

impl fmt::Display for DriverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriverType {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MYSQL" => Ok(Self::Mysql),
            "MARIADB" => Ok(Self::MariaDb),
            "POSTGRESQL" | "POSTGRES" => Ok(Self::Postgresql),
            "MSSQL" | "SQLSERVER" => Ok(Self::Mssql),
            "ORACLE" => Ok(Self::Oracle),
            "DERBY" => Ok(Self::Derby),
            "HYPERSQL" | "HSQLDB" => Ok(Self::HyperSql),
            "GENERIC" => Ok(Self::Generic),
            other => Err(DriverError::config(format!("unknown driver type '{}'", other))),
        }
    }
}

/// A JDBC driver that turns a datasource configuration into a connection URL.
pub trait JdbcDriver: Send + Sync {
    /// Name the host registers the driver under.
    fn name(&self) -> Key;

    /// Database family.
    fn driver_type(&self) -> DriverType;

    /// Fully qualified JDBC driver class.
    fn driver_class_name(&self) -> &'static str;

    /// Delimiter used for custom parameter strings and the URL query.
    fn default_delimiter(&self) -> &'static str {
        query_string::DEFAULT_DELIMITER
    }

    /// URL parameters every connection starts with.
    fn default_custom_params(&self) -> Properties {
        Properties::new()
    }

    /// Tuning properties injected into the configuration when absent.
    fn default_properties(&self) -> Properties {
        Properties::new()
    }

    /// Validate the configuration and build the connection URL.
    ///
    /// On success the configuration's `custom` value is normalized to a
    /// struct and missing default properties are added to it.
    fn build_connection_url(&self, config: &mut DatasourceConfig) -> DriverResult<String>;

    /// Merge default, custom, tuning and credential parameters.
    ///
    /// Order: default custom params, the caller's custom params, every
    /// default property not already given as a custom param (using the
    /// configuration's value when the caller set one), then `user` and
    /// `password` when non-empty.
    fn merge_url_params(&self, config: &mut DatasourceConfig) -> Properties {
        let mut params = self.default_custom_params();
        params.extend(config.normalize_custom_params(self.default_delimiter()));

        let defaults = self.default_properties();
        let injected = config.apply_default_properties(&defaults);
        trace!(
            driver = %self.name(),
            injected = injected.len(),
            "Applied default properties"
        );

        for key in defaults.keys() {
            if params.contains(key) {
                continue;
            }
            if let Some(value) = config.get(key.as_str()) {
                params.insert(key, value.clone());
            }
        }

        if let Some(user) = config.non_empty(keys::USERNAME) {
            params.insert("user", user);
        }
        if let Some(password) = config.non_empty(keys::PASSWORD) {
            params.insert(keys::PASSWORD, password);
        }

        params
    }

    /// Merge the URL parameters and serialize them as a query string.
    fn custom_params_to_query_string(&self, config: &mut DatasourceConfig) -> String {
        let params = self.merge_url_params(config);
        query_string::serialize(&params, self.default_delimiter())
    }
}
