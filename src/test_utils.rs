// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helpers for tests in this and dependent crates.

/// Prints `tracing` output of tests when the `RUST_LOG` environment variable is set.
pub fn setup_logging() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }
}
