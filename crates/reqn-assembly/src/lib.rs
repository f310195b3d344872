//! Requisition assembly.
//!
//! Composes a new or updated requisition from a template, a set of
//! externally supplied orderables, and raw imported line-item input,
//! applying the skip rule for still-editable requisitions.

pub mod builder;
pub mod error;
pub mod import;
pub mod skip;

pub use builder::{from_import, new_requisition};
pub use error::AssemblyError;
pub use import::{LineItemImport, RequisitionImport};
pub use skip::skip_line_item;
