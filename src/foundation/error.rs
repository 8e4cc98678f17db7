use std::path::{Path, PathBuf};

/// Crate-wide result alias.
pub type FolioResult<T> = Result<T, FolioError>;

/// Errors raised while defining or driving scroll choreography.
///
/// Runtime inputs (scroll offsets, progress values, unknown content keys) never produce an
/// error; they are sanitized into a defined output. Errors are reserved for malformed
/// definitions, unreadable data files and misuse of a session lifecycle.
#[derive(thiserror::Error, Debug)]
pub enum FolioError {
    /// A definition (scene, config, region) violates a static invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// A keyframe track could not be constructed.
    #[error("animation error: {0}")]
    Animation(String),

    /// A frame could not be evaluated or bound.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Content records are inconsistent.
    #[error("content error: {0}")]
    Content(String),

    /// A data file could not be opened or read.
    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document did not match the expected shape.
    #[error("invalid {what} JSON")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl FolioError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content(msg.into())
    }

    /// Wrap an IO failure on `path`.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Wrap a JSON failure while handling a `what` document.
    pub fn json(what: &'static str, source: serde_json::Error) -> Self {
        Self::Json { what, source }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
