//! Log output setup
//!
//! Builds the subscriber used by the binary. Callers decide its scope,
//! e.g. with [`tracing::subscriber::set_default`].

use tracing::Level;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::MakeWriter;

/// Timestamp format of log lines
const TIME_FORMAT: &str = "%H:%M:%S";

/// Subscriber writing INFO and above to stderr
pub fn subscriber() -> impl tracing::Subscriber + Send + Sync + 'static {
    subscriber_with_writer(std::io::stderr)
}

/// Subscriber writing INFO and above to `writer`
pub fn subscriber_with_writer<W>(writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_thread_names(true)
        .with_target(false)
        .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
        .with_writer(writer)
        .finish()
}
