//! Tracing subscriber setup.

use crate::config::default_log_level;
use tracing_subscriber::EnvFilter;

/// Pick the log filter: RUST_LOG wins, then `-v` flags, then the config value.
pub fn filter_directive(configured: &str, verbose: u8, env_override: Option<String>) -> String {
    if let Some(directive) = env_override.filter(|d| !d.trim().is_empty()) {
        return directive;
    }

    match verbose {
        0 => configured.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Parse a filter directive, falling back to the default level.
///
/// The second value describes the rejected directive, if any, so it can be
/// reported once a subscriber is listening.
pub fn build_filter(directive: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(e) => {
            let fallback = default_log_level();
            let rejected = format!(
                "Invalid log filter '{}' ({}), using '{}'",
                directive, e, fallback
            );
            (EnvFilter::new(fallback), Some(rejected))
        }
    }
}

/// Initialize tracing (log to stderr so stdout stays machine-readable).
///
/// A bad filter never stops the command; it is logged as a warning instead.
pub fn init(configured: &str, verbose: u8) {
    let directive = filter_directive(configured, verbose, std::env::var("RUST_LOG").ok());
    let (filter, rejected) = build_filter(&directive);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Some(message) = rejected {
        tracing::warn!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_override_wins() {
        let directive = filter_directive("warn", 2, Some("harmonia_domain=debug".to_string()));
        assert_eq!(directive, "harmonia_domain=debug");
    }

    #[test]
    fn test_verbose_levels() {
        assert_eq!(filter_directive("warn", 0, None), "warn");
        assert_eq!(filter_directive("warn", 1, None), "debug");
        assert_eq!(filter_directive("warn", 3, None), "trace");
    }

    #[test]
    fn test_blank_env_ignored() {
        assert_eq!(filter_directive("info", 0, Some("  ".to_string())), "info");
    }

    #[test]
    fn test_invalid_level_falls_back() {
        let (filter, rejected) = build_filter("harmonia=verbose");
        let message = rejected.unwrap();
        assert!(message.contains("harmonia=verbose"));
        assert!(message.contains("using 'warn'"));
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_valid_filter_accepted() {
        let (filter, rejected) = build_filter("harmonia_domain=debug,warn");
        assert!(rejected.is_none());
        assert!(filter.to_string().contains("harmonia_domain=debug"));
    }
}
