//! Error types for period resolution.

use thiserror::Error;

use reqn_model::{FacilityId, PeriodId, ProgramId, ScheduleId};

use crate::ports::PortError;

/// Failures of one period-resolution call.
///
/// Every variant except [`Lookup`](ResolveError::Lookup) is a non-retryable
/// business-rule violation, raised at the point of violation with the
/// offending ids attached.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Emergency requisition requested while no period contains today's
    /// date.
    #[error("no current period is in progress for an emergency requisition")]
    IncorrectSuggestedPeriod,

    /// No eligible period exists, or the caller suggested a period other
    /// than the eligible one.
    #[error("period should be the oldest one not associated with a requisition")]
    PeriodShouldBeOldestAndNotAssociated { suggested: Option<PeriodId> },

    /// The previous period's requisition has not passed authorization yet.
    #[error("finish the requisition of period {period} before initiating the next one")]
    FinishPreviousRequisition { period: PeriodId },

    /// No schedule is configured for the program/facility pairing.
    #[error("no processing schedule found for program {program} and facility {facility}")]
    ScheduleNotFound {
        program: ProgramId,
        facility: FacilityId,
    },

    /// The eligible period belongs to a different schedule than the one
    /// resolved for the program/facility pairing.
    #[error("period {period} must belong to schedule {schedule}")]
    PeriodMustBelongToSameSchedule {
        period: PeriodId,
        schedule: ScheduleId,
    },

    /// A lookup port failed; transient transport fault, not a rule
    /// violation.
    #[error(transparent)]
    Lookup(#[from] PortError),
}
