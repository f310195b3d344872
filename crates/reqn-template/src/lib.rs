//! Template column engine.
//!
//! A [`RequisitionTemplate`] owns an ordered, mutable collection of report
//! columns and enforces the configuration rules their
//! [`ColumnDefinition`](reqn_model::ColumnDefinition)s impose: constrained
//! reordering, display toggling, and source/option changes. Display order is
//! the authoritative ordering; the underlying map's iteration order carries
//! no meaning.

pub mod column;
pub mod error;
pub mod template;

pub use column::{
    APPROVED_QUANTITY_COLUMN, BEGINNING_BALANCE_COLUMN, PRODUCT_CODE_COLUMN,
    REMARKS_COLUMN, REQUESTED_QUANTITY_COLUMN, REQUESTED_QUANTITY_EXPLANATION_COLUMN,
    RequisitionTemplateColumn, SKIPPED_COLUMN, STOCK_ON_HAND_COLUMN,
    TOTAL_CONSUMED_QUANTITY_COLUMN, TOTAL_RECEIVED_QUANTITY_COLUMN,
    TOTAL_STOCKOUT_DAYS_COLUMN,
};
pub use error::TemplateError;
pub use template::{RequisitionTemplate, TemplateAssignment};
