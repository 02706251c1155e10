//! Console logging for applications embedding `viewkit`.
//!
//! Library code only emits `tracing` events. Applications that do not set
//! up their own subscriber call [`install`] once at startup.

use std::str::FromStr;
use std::sync::{Once, OnceLock};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::reload;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

// ============================================================================
// Global State
// ============================================================================

static TRACING_INSTALLED: Once = Once::new();
static FILTER_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

fn default_filter() -> EnvFilter {
    EnvFilter::default().add_directive(DEFAULT_LOG_LEVEL.into())
}

/// Parses a filter directive string such as `"debug"` or `"viewkit=trace"`.
///
/// Falls back to the default level when the string does not parse.
#[must_use]
pub fn parse_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| default_filter())
}

/// Parses a bare level name, falling back to `info`.
#[must_use]
pub fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or(DEFAULT_LOG_LEVEL)
}

// ============================================================================
// Installation
// ============================================================================

/// Installs a console subscriber (idempotent).
///
/// The filter comes from `RUST_LOG` and defaults to `info`. If another
/// global subscriber is already set, a note goes to stderr and the existing
/// subscriber stays in charge.
pub fn install() {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());
        let (filter, handle) = reload::Layer::new(filter);

        let result = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .try_init();

        match result {
            Ok(()) => {
                let _ = FILTER_HANDLE.set(handle);
            }
            Err(error) => eprintln!("viewkit logging failed to initialize: {error}"),
        }
    });
}

/// Replaces the active filter of the subscriber set up by [`install`].
///
/// Returns false if [`install`] did not install a subscriber.
pub fn set_filter(directives: &str) -> bool {
    FILTER_HANDLE
        .get()
        .is_some_and(|handle| handle.reload(parse_filter(directives)).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing_falls_back_to_info() {
        assert_eq!(parse_level("debug"), LevelFilter::DEBUG);
        assert_eq!(parse_level("chatty"), LevelFilter::INFO);
    }

    #[test]
    fn invalid_directives_use_default_filter() {
        assert_eq!(parse_filter("viewkit=chatty").to_string(), "info");
        assert_eq!(parse_filter("viewkit=trace").to_string(), "viewkit=trace");
    }

    #[test]
    fn install_is_idempotent() {
        install();
        install();
        // Either this test installed the subscriber or another one already
        // existed; in both cases a second install must not panic.
        let _ = set_filter("warn");
    }
}
