//! Subscriber setup for `tracing` output.
//!
//! Log lines go to stderr so that generated titles on stdout stay clean.

use brainstorm_foundation::{Error, ErrorKind, Result};
use tracing::Level;

/// Installs the global `fmt` subscriber at `level`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| Error::new(ErrorKind::Internal(format!("logging setup failed: {e}"))))
}
