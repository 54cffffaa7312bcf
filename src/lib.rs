//! # bxjdbc
//!
//! JDBC connection URL builders for datasource configurations.
//!
//! A host hands a driver an untyped property bag; the driver validates it,
//! merges in its default tuning flags and returns a connection URL:
//!
//! ```rust
//! use bxjdbc::prelude::*;
//!
//! let mut config = DatasourceConfig::from_json_str(r#"{
//!     "database": "inventory",
//!     "host": "db.internal",
//!     "protocol": "replication",
//!     "username": "app"
//! }"#)?;
//!
//! let url = MysqlDriver::new().build_connection_url(&mut config)?;
//! assert!(url.starts_with("jdbc:mysql:replication://db.internal:3306/inventory?"));
//! assert!(url.ends_with("&user=app"));
//! # Ok::<(), bxjdbc::DriverError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub use bxjdbc_core::{
    DatasourceConfig, DriverError, DriverResult, DriverType, JdbcDriver, JdbcUrl, Key,
    Properties, PropertyValue, keys, logging, query_string,
};

/// MySQL driver.
#[cfg(feature = "mysql")]
pub mod mysql {
    pub use bxjdbc_mysql::*;
}

#[cfg(feature = "mysql")]
pub use bxjdbc_mysql::MysqlDriver;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{DatasourceConfig, DriverError, DriverType, JdbcDriver, JdbcUrl, Properties};

    #[cfg(feature = "mysql")]
    pub use crate::MysqlDriver;
}
