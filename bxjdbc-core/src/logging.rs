//! Logging bootstrap.
//!
//! The library itself only emits `tracing` events. Applications that do not
//! install their own subscriber can call [`init`], which reads:
//!
//! - `BXJDBC_DEBUG=true|1|yes` - enable debug logging
//! - `BXJDBC_LOG_LEVEL=trace|debug|info|warn|error` - explicit level
//! - `BXJDBC_LOG_FORMAT=json|pretty|compact` - output format (default: json)
//!
//! A subscriber is only installed when the `tracing-subscriber` feature is
//! enabled and one of the first two variables is set.
//!
//! ```rust,no_run
//! use bxjdbc_core::logging;
//!
//! logging::init();
//! ```

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Resolved logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Whether `BXJDBC_DEBUG` is set.
    pub debug: bool,
    /// Whether any logging was requested.
    pub enabled: bool,
    /// Level directive.
    pub level: &'static str,
    /// Output format.
    pub format: &'static str,
}

impl LogSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let debug = lookup("BXJDBC_DEBUG")
            .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false);
        let explicit = lookup("BXJDBC_LOG_LEVEL");

        let fallback = if debug { "debug" } else { "warn" };
        let level = explicit
            .as_deref()
            .map(|level| match level.to_lowercase().as_str() {
                "trace" => "trace",
                "debug" => "debug",
                "info" => "info",
                "warn" => "warn",
                "error" => "error",
                _ => fallback,
            })
            .unwrap_or(fallback);

        let format = lookup("BXJDBC_LOG_FORMAT")
            .map(|f| match f.to_lowercase().as_str() {
                "pretty" => "pretty",
                "compact" => "compact",
                _ => "json",
            })
            .unwrap_or("json");

        Self {
            debug,
            enabled: debug || explicit.is_some(),
            level,
            format,
        }
    }
}

/// Check if `BXJDBC_DEBUG` is set.
pub fn is_debug_enabled() -> bool {
    LogSettings::from_env().debug
}

/// Install a global subscriber from the environment. Later calls are no-ops.
pub fn init() {
    init_with(LogSettings::from_env());
}

/// Install a global subscriber with explicit settings. Later calls are no-ops.
pub fn init_with(settings: LogSettings) {
    INIT.call_once(|| {
        if !settings.enabled {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let filter = EnvFilter::try_new(format!(
                "bxjdbc={0},bxjdbc_core={0},bxjdbc_mysql={0}",
                settings.level
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            let registry = tracing_subscriber::registry().with(filter);
            let installed = match settings.format {
                "pretty" => registry.with(fmt::layer().pretty()).try_init(),
                "compact" => registry.with(fmt::layer().compact()).try_init(),
                _ => registry.with(fmt::layer().json()).try_init(),
            };

            if installed.is_ok() {
                tracing::info!(
                    level = settings.level,
                    format = settings.format,
                    "bxjdbc logging initialized"
                );
            }
        }
    });
}
