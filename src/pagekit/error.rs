use thiserror::Error;

pub type Result<T> = std::result::Result<T, PropsError>;

#[derive(Debug, Error)]
pub enum PropsError {
    #[error("page props could not be read from the window")]
    Unavailable,
    #[error("page props are not valid json: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("page props do not fit the {page} page: {source}")]
    Mismatch {
        page: &'static str,
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
#[error("dom operation failed: {0}")]
pub struct DomError(pub String);
