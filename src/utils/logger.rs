/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Parses a `LOGLEVEL` style value, defaulting to `INFO`
#[must_use]
pub fn parse_log_level(value: Option<&str>) -> Level {
    match value.map(|v| v.to_uppercase()).as_deref() {
        Some("TRACE") => Level::TRACE,
        Some("DEBUG") => Level::DEBUG,
        Some("WARN") => Level::WARN,
        Some("ERROR") => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Installs the global `tracing` subscriber
///
/// The level is taken from the `LOGLEVEL` environment variable. Calling this
/// more than once is harmless.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = parse_log_level(env::var("LOGLEVEL").ok().as_deref());

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("Error setting default subscriber");

        tracing::debug!("Log level set to: {}", level);
    });
}
