//! Static MySQL defaults.

use bxjdbc_core::{Properties, PropertyValue};

/// Name the driver registers under.
pub const DRIVER_NAME: &str = "Mysql";

/// Connector/J driver class.
pub const DRIVER_CLASS_NAME: &str = "com.mysql.cj.jdbc.Driver";

/// JDBC subprotocol.
pub const SUBPROTOCOL: &str = "mysql";

/// Host used when none is configured.
pub const DEFAULT_HOST: &str = "localhost";

/// Port used when none is configured or the port is `0`.
pub const DEFAULT_PORT: &str = "3306";

/// Delimiter for custom parameter strings and the URL query.
pub const DEFAULT_DELIMITER: &str = "&";

/// Connector/J performance settings, injected when the caller has not set them.
///
/// See the Connector/J performance notes: statement caching only helps once
/// `cachePrepStmts` is on, which it is not by default.
pub const TUNING_PROPERTIES: &[(&str, PropertyValue)] = &[
    // prepared statements cached per connection
    ("prepStmtCacheSize", PropertyValue::Int(250)),
    // longest statement the cache will hold
    ("prepStmtCacheSqlLimit", PropertyValue::Int(2048)),
    ("cachePrepStmts", PropertyValue::Bool(true)),
    ("useServerPrepStmts", PropertyValue::Bool(true)),
    ("useLocalSessionState", PropertyValue::Bool(true)),
    ("rewriteBatchedStatements", PropertyValue::Bool(true)),
    ("cacheResultSetMetadata", PropertyValue::Bool(true)),
    ("cacheServerConfiguration", PropertyValue::Bool(true)),
    ("elideSetAutoCommits", PropertyValue::Bool(true)),
    ("maintainTimeStats", PropertyValue::Bool(false)),
];

/// The tuning table as a property bag.
pub fn tuning_properties() -> Properties {
    TUNING_PROPERTIES
        .iter()
        .map(|(key, value)| (*key, value.clone()))
        .collect()
}
