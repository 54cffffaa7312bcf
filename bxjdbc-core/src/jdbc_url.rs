//! Typed JDBC connection URLs.

use std::fmt;

use tracing::debug;
use url::Url;

use crate::error::{DriverError, DriverResult};
use crate::properties::Properties;
use crate::query_string;

/// A JDBC URL of the form
/// `jdbc:<subprotocol>:[<protocol>:]//<host>[:<port>]/<database>?<query>`.
///
/// ```rust
/// use bxjdbc_core::JdbcUrl;
///
/// let url = JdbcUrl::parse("jdbc:mysql:replication://db1:3306/app?useSSL=false").unwrap();
/// assert_eq!(url.subprotocol, "mysql");
/// assert_eq!(url.protocol.as_deref(), Some("replication"));
/// assert_eq!(url.host, "db1");
/// assert_eq!(url.database, "app");
/// assert_eq!(url.to_string(), "jdbc:mysql:replication://db1:3306/app?useSSL=false");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JdbcUrl {
    /// Driver subprotocol, e.g. `mysql`.
    pub subprotocol: String,
    /// Optional connection mode alias, e.g. `loadbalance`.
    pub protocol: Option<String>,
    /// Server host, or a comma-separated host list.
    pub host: String,
    /// Server port, kept verbatim. `None` omits the `:port` part.
    pub port: Option<String>,
    /// Database name, kept verbatim.
    pub database: String,
    /// Query parameters in order.
    pub params: Properties,
    /// Delimiter between query parameters.
    pub delimiter: String,
}

impl JdbcUrl {
    /// Split a JDBC URL into its parts.
    pub fn parse(input: &str) -> DriverResult<Self> {
        debug!(url_len = input.len(), "JdbcUrl::parse()");

        let rest = input
            .strip_prefix("jdbc:")
            .ok_or_else(|| DriverError::url("missing 'jdbc:' prefix"))?;
        let (subprotocol, rest) = rest
            .split_once(':')
            .ok_or_else(|| DriverError::url("missing subprotocol"))?;

        let (protocol, rest) = match rest.strip_prefix("//") {
            Some(authority) => (None, authority),
            None => {
                let (protocol, authority) = rest
                    .split_once(':')
                    .and_then(|(p, r)| Some((p, r.strip_prefix("//")?)))
                    .ok_or_else(|| DriverError::url("missing '//' before host"))?;
                (Some(protocol.to_string()), authority)
            }
        };

        let (location, query) = rest.split_once('?').unwrap_or((rest, ""));
        let (authority, database) = location.split_once('/').unwrap_or((location, ""));

        let (host, port) = if authority.contains(',') {
            split_host_list(authority)?
        } else {
            let parsed = Url::parse(&format!("{}://{}", subprotocol, authority))
                .map_err(|e| DriverError::url(e.to_string()))?;
            let host = parsed
                .host_str()
                .filter(|h| !h.is_empty())
                .ok_or_else(|| DriverError::url("missing host"))?
                .to_string();
            (host, parsed.port().map(|p| p.to_string()))
        };

        Ok(Self {
            subprotocol: subprotocol.to_string(),
            protocol,
            host,
            port,
            database: database.to_string(),
            params: query_string::parse(query, query_string::DEFAULT_DELIMITER),
            delimiter: query_string::DEFAULT_DELIMITER.to_string(),
        })
    }

    /// The query string, without the leading `?`.
    pub fn query(&self) -> String {
        query_string::serialize(&self.params, &self.delimiter)
    }
}

/// Split a comma-separated host list from its trailing `:port`.
///
/// Only the port after the last host is checked; the list itself is kept
/// verbatim since hosts may carry their own ports.
fn split_host_list(authority: &str) -> DriverResult<(String, Option<String>)> {
    if authority.split(',').any(|h| h.trim().is_empty()) {
        return Err(DriverError::url("empty host in host list"));
    }

    let last = authority.rsplit(',').next().unwrap_or(authority);
    match last.rsplit_once(':') {
        Some((_, port)) if !last.ends_with(']') => {
            port.parse::<u16>().map_err(|_| DriverError::url("invalid port number"))?;
            let hosts = &authority[..authority.len() - port.len() - 1];
            Ok((hosts.to_string(), Some(port.to_string())))
        }
        _ => Ok((authority.to_string(), None)),
    }
}

impl fmt::Display for JdbcUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let protocol = self
            .protocol
            .as_deref()
            .map(|p| format!("{}:", p))
            .unwrap_or_default();
        let port = self
            .port
            .as_deref()
            .map(|p| format!(":{}", p))
            .unwrap_or_default();
        write!(
            f,
            "jdbc:{}:{}//{}{}/{}?{}",
            self.subprotocol,
            protocol,
            self.host,
            port,
            self.database,
            self.query()
        )
    }
}
