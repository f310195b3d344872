use thiserror::Error;

/// Errors raised while parsing model values from their canonical names.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Unrecognised requisition status name.
    #[error("unknown requisition status: {0}")]
    UnknownStatus(String),

    /// Unrecognised column source name.
    #[error("unknown column source: {0}")]
    UnknownSource(String),
}
