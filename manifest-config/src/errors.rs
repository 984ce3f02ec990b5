//! Configuration loading errors.

use thiserror::Error;

/// Fatal errors while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No API key from the caller nor from metadata.
    #[error("no API key set")]
    MissingApiKey,

    /// Metadata could not be read at all.
    #[error("unable to read config from metadata: {0:#}")]
    SourceUnavailable(anyhow::Error),
}
