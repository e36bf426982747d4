use thiserror::Error;

/// Failures surfaced by the walkthrough.
///
/// `AssetLoad` degrades visuals and is otherwise ignored; the other two are
/// start-up faults.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WalkthroughError {
    #[error("failed to load asset `{name}` from {path}: {reason}")]
    AssetLoad {
        name: String,
        path: String,
        reason: String,
    },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("render backend error: {0}")]
    RenderBackend(String),
}

impl WalkthroughError {
    pub fn is_fatal(&self) -> bool {
        !matches!(self, WalkthroughError::AssetLoad { .. })
    }
}

pub type Result<T> = std::result::Result<T, WalkthroughError>;
