//! Error types for requisition assembly.

use thiserror::Error;

use reqn_model::{OrderableId, ProgramId};
use reqn_template::TemplateError;

/// Business-rule violations raised while assembling a requisition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    /// A brand-new requisition needs a facility id, a program id and an
    /// emergency flag; at least one was absent.
    #[error("facility id, program id and emergency flag are all required")]
    MissingId,

    /// An imported line item references an orderable outside the supplied
    /// available list.
    #[error("orderable {orderable_id} is not in the available product list")]
    OrderableNotAvailable { orderable_id: OrderableId },

    /// The orderable exists but carries no association with the target
    /// program.
    #[error("orderable has no association with program {program_id}")]
    ProgramNotFound { program_id: ProgramId },

    /// The template rejected a column query during the skip transformation.
    #[error(transparent)]
    Template(#[from] TemplateError),
}
