use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to read model file {}: {source}", path.display())]
    ModelRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse model file {}: {source}", path.display())]
    ModelParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Model file {} has no pricing tiers", path.display())]
    EmptyTiers { path: PathBuf },

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },
}
