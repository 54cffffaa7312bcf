//! MySQL driver for bxjdbc.
//!
//! Turns a datasource configuration into a Connector/J connection URL:
//!
//! ```text
//! jdbc:mysql:[loadbalance:|replication:]//<host>:<port>/<database>?<params>
//! ```
//!
//! # Properties
//!
//! | key | |
//! |---|---|
//! | `database` | required |
//! | `host` | defaults to `localhost` |
//! | `port` | defaults to `3306` (also when `0`) |
//! | `protocol` | `loadbalance` or `replication` |
//! | `custom` | extra parameters, a struct or an `&`-delimited string |
//! | `username` / `password` | sent as `user` / `password` |
//!
//! Connector/J tuning flags from [`defaults::TUNING_PROPERTIES`] are added to
//! the configuration when missing and always appear in the query string.
//!
//! # Example
//!
//! ```rust
//! use bxjdbc_core::{DatasourceConfig, JdbcDriver};
//! use bxjdbc_mysql::MysqlDriver;
//!
//! let mut config = DatasourceConfig::new().with("database", "mydb");
//! let url = MysqlDriver::new().build_connection_url(&mut config)?;
//! assert!(url.starts_with("jdbc:mysql://localhost:3306/mydb?prepStmtCacheSize=250"));
//! # Ok::<(), bxjdbc_core::DriverError>(())
//! ```

pub mod defaults;
pub mod driver;
pub mod protocol;

pub use driver::MysqlDriver;
pub use protocol::Protocol;
