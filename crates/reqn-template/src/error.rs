//! Error types for template configuration operations.

use reqn_model::SourceType;
use thiserror::Error;

/// Business-rule violations raised by template column operations.
///
/// All variants are validation failures, raised at the point of violation
/// and never recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template has no column mapping at all. Distinct from a missing
    /// column: callers may treat "never configured" differently.
    #[error("template columns are not initialized")]
    ColumnsNotInitialized,

    /// No column exists under the requested key.
    #[error("column is not in template: {key}")]
    ColumnNotFound { key: String },

    /// The requested source is not permitted for this column.
    #[error("source {source} is not available for column {key}")]
    SourceNotAvailable { key: String, source: SourceType },

    /// The requested option is not permitted for this column.
    #[error("option {option} is not available for column {key}")]
    OptionNotAvailable { key: String, option: String },
}
