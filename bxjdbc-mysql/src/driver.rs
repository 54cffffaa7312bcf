//! The MySQL connection URL driver.

use bxjdbc_core::{
    DatasourceConfig, DriverError, DriverResult, DriverType, JdbcDriver, JdbcUrl, Key,
    Properties, keys,
};
use tracing::debug;

use crate::defaults::{
    DEFAULT_DELIMITER, DEFAULT_HOST, DEFAULT_PORT, DRIVER_CLASS_NAME, DRIVER_NAME, SUBPROTOCOL,
    tuning_properties,
};
use crate::protocol::Protocol;

/// Builds `jdbc:mysql:` URLs for MySQL Connector/J.
///
/// ```rust
/// use bxjdbc_core::{DatasourceConfig, JdbcDriver};
/// use bxjdbc_mysql::MysqlDriver;
///
/// let mut config = DatasourceConfig::new()
///     .with("database", "mydb")
///     .with("protocol", "loadbalance")
///     .with("host", "db1,db2");
///
/// let url = MysqlDriver::new().build_connection_url(&mut config).unwrap();
/// assert!(url.starts_with("jdbc:mysql:loadbalance://db1,db2:3306/mydb?"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MysqlDriver;

impl MysqlDriver {
    /// Create the driver.
    pub fn new() -> Self {
        Self
    }

    /// Validate the configuration and build a typed URL.
    ///
    /// Fails if `database` is missing or empty, or if `protocol` is set to
    /// something other than a [`Protocol`] alias. The configuration is only
    /// modified once validation has passed.
    pub fn build_jdbc_url(&self, config: &mut DatasourceConfig) -> DriverResult<JdbcUrl> {
        let database = config.string_property(keys::DATABASE);
        if database.is_empty() {
            return Err(DriverError::missing_property(DRIVER_NAME, keys::DATABASE));
        }

        let host = config
            .non_empty(keys::HOST)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let protocol = config
            .non_empty(keys::PROTOCOL)
            .map(|alias| {
                Protocol::from_alias(&alias).ok_or_else(|| {
                    DriverError::invalid_protocol(DRIVER_NAME, alias.as_str(), Protocol::aliases())
                })
            })
            .transpose()?;

        let port = match config.non_empty(keys::PORT) {
            Some(port) if port != "0" => port,
            _ => DEFAULT_PORT.to_string(),
        };

        debug!(
            host = %host,
            port = %port,
            database = %database,
            protocol = ?protocol.map(|p| p.canonical()),
            "Building MySQL connection URL"
        );

        let params = self.merge_url_params(config);

        Ok(JdbcUrl {
            subprotocol: SUBPROTOCOL.to_string(),
            protocol: protocol.map(|p| p.alias().to_string()),
            host,
            port: Some(port),
            database,
            params,
            delimiter: DEFAULT_DELIMITER.to_string(),
        })
    }
}

impl JdbcDriver for MysqlDriver {
    fn name(&self) -> Key {
        Key::new(DRIVER_NAME)
    }

    fn driver_type(&self) -> DriverType {
        DriverType::Mysql
    }

    fn driver_class_name(&self) -> &'static str {
        DRIVER_CLASS_NAME
    }

    fn default_delimiter(&self) -> &'static str {
        DEFAULT_DELIMITER
    }

    fn default_properties(&self) -> Properties {
        tuning_properties()
    }

    fn build_connection_url(&self, config: &mut DatasourceConfig) -> DriverResult<String> {
        self.build_jdbc_url(config).map(|url| url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bxjdbc_core::PropertyValue;
    use pretty_assertions::assert_eq;

    const DEFAULT_QUERY: &str = "prepStmtCacheSize=250&prepStmtCacheSqlLimit=2048\
        &cachePrepStmts=true&useServerPrepStmts=true&useLocalSessionState=true\
        &rewriteBatchedStatements=true&cacheResultSetMetadata=true\
        &cacheServerConfiguration=true&elideSetAutoCommits=true&maintainTimeStats=false";

    fn build(config: &mut DatasourceConfig) -> DriverResult<String> {
        MysqlDriver::new().build_connection_url(config)
    }

    #[test]
    fn test_name_and_type() {
        let driver = MysqlDriver::new();
        assert_eq!(driver.name(), Key::new("Mysql"));
        assert_eq!(driver.driver_type(), DriverType::Mysql);
        assert_eq!(driver.driver_class_name(), "com.mysql.cj.jdbc.Driver");
    }

    #[test]
    fn test_build_minimal() {
        let mut config = DatasourceConfig::new()
            .with("driver", "Mysql")
            .with("database", "mydb");

        assert_eq!(
            build(&mut config).unwrap(),
            format!("jdbc:mysql://localhost:3306/mydb?{}", DEFAULT_QUERY)
        );
    }

    #[test]
    fn test_missing_database() {
        let err = build(&mut DatasourceConfig::new()).unwrap_err();
        assert!(err.is_missing_property());

        let err = build(&mut DatasourceConfig::new().with("database", "")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The database property is required for the Mysql JDBC Driver"
        );
    }

    #[test]
    fn test_invalid_protocol() {
        let mut config = DatasourceConfig::new()
            .with("database", "mydb")
            .with("protocol", "invalid");

        let err = build(&mut config).unwrap_err();
        assert_eq!(
            err,
            DriverError::InvalidProtocol {
                driver: "Mysql".into(),
                protocol: "invalid".into(),
                available: vec!["loadbalance".into(), "replication".into()],
            }
        );
    }

    #[test]
    fn test_failed_build_leaves_config_untouched() {
        let mut config = DatasourceConfig::new()
            .with("database", "mydb")
            .with("protocol", "http")
            .with("custom", "useSSL=false");
        let before = config.clone();

        assert!(build(&mut config).is_err());
        assert_eq!(config, before);
    }

    #[test]
    fn test_protocol_prefix() {
        let mut config = DatasourceConfig::new()
            .with("database", "mydb")
            .with("protocol", "loadbalance")
            .with("host", "localhost");

        let url = build(&mut config).unwrap();
        assert!(url.starts_with("jdbc:mysql:loadbalance://localhost:3306/mydb?"));

        let mut config = DatasourceConfig::new()
            .with("database", "mydb")
            .with("protocol", "replication");
        let url = build(&mut config).unwrap();
        assert!(url.starts_with("jdbc:mysql:replication://localhost:3306/mydb?"));
    }

    #[test]
    fn test_host_and_port_defaults() {
        for port in [PropertyValue::from(""), PropertyValue::from("0"), PropertyValue::Int(0)] {
            let mut config = DatasourceConfig::new()
                .with("database", "mydb")
                .with("host", "")
                .with("port", port);
            let url = MysqlDriver.build_jdbc_url(&mut config).unwrap();
            assert_eq!(url.host, "localhost");
            assert_eq!(url.port.as_deref(), Some("3306"));
        }

        let mut config = DatasourceConfig::new()
            .with("database", "mydb")
            .with("host", "db.internal")
            .with("port", 3307);
        let url = MysqlDriver.build_jdbc_url(&mut config).unwrap();
        assert_eq!(url.host, "db.internal");
        assert_eq!(url.port.as_deref(), Some("3307"));
    }

    #[test]
    fn test_empty_struct_host_falls_back() {
        let mut config = DatasourceConfig::new()
            .with("database", "mydb")
            .with("host", Properties::new());

        let url = MysqlDriver.build_jdbc_url(&mut config).unwrap();
        assert_eq!(url.host, "localhost");
    }

    #[test]
    fn test_custom_string_params() {
        let mut config = DatasourceConfig::new()
            .with("database", "mydb")
            .with("custom", "useSSL=false&serverTimezone=UTC");

        let url = build(&mut config).unwrap();
        assert_eq!(
            url,
            format!(
                "jdbc:mysql://localhost:3306/mydb?useSSL=false&serverTimezone=UTC&{}",
                DEFAULT_QUERY
            )
        );
        assert!(config.get("custom").and_then(PropertyValue::as_struct).is_some());
    }

    #[test]
    fn test_caller_values_win() {
        let mut config = DatasourceConfig::new()
            .with("database", "mydb")
            .with("prepStmtCacheSize", 500)
            .with("custom", Properties::of([("cachePrepStmts", false)]));

        let url = MysqlDriver.build_jdbc_url(&mut config).unwrap();
        assert_eq!(url.params.get("prepStmtCacheSize"), Some(&PropertyValue::Int(500)));
        assert_eq!(url.params.get("cachePrepStmts"), Some(&PropertyValue::Bool(false)));
        assert_eq!(config.get("prepStmtCacheSize"), Some(&PropertyValue::Int(500)));
        assert_eq!(config.get("cachePrepStmts"), Some(&PropertyValue::Bool(true)));
        assert_eq!(url.params.len(), 10);
    }

    #[test]
    fn test_credentials() {
        let mut config = DatasourceConfig::new()
            .with("database", "mydb")
            .with("username", "root")
            .with("password", "p@ss&word");

        let url = build(&mut config).unwrap();
        assert!(url.ends_with("&maintainTimeStats=false&user=root&password=p%40ss%26word"));
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let mut config = DatasourceConfig::new()
            .with("DATABASE", "mydb")
            .with("Host", "db1")
            .with("PROTOCOL", "replication");

        let url = MysqlDriver.build_jdbc_url(&mut config).unwrap();
        assert_eq!(url.database, "mydb");
        assert_eq!(url.host, "db1");
        assert_eq!(url.protocol.as_deref(), Some("replication"));
    }
}
