/// Errors raised while loading or maintaining the guide document.
///
/// Every variant is fatal for the operation that produced it: a catalog is either
/// built from a fully valid document or not built at all. Lookups that find nothing
/// are not errors and never surface here.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed guide document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid guide '{guide}': {message}")]
    Invalid { guide: String, message: String },

    #[error("duplicate guide id: {0}")]
    DuplicateId(String),

    #[error("unknown language code: '{0}' (expected 'en' or 'hi')")]
    UnknownLanguage(String),
}
