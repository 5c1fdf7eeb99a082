//! Content loading errors.

use thiserror::Error;

use crate::content::ProcessId;

/// Errors raised while loading or validating authored content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("read content file {0}: {1}")]
    Read(String, #[source] std::io::Error),

    #[error("parse content TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("process '{0}' has zero steps")]
    EmptySteps(ProcessId),
}
