//! Lookup ports implemented by external reference-data collaborators.
//!
//! All ports are synchronous; timeouts and cancellation belong to the
//! transport behind them. Implementations may be network clients, the
//! resolver never cares.

use chrono::NaiveDate;
use thiserror::Error;

use reqn_model::{
    FacilityId, PeriodId, ProcessingPeriod, ProcessingSchedule, ProgramId, Requisition, ScheduleId,
};

/// Transport failure inside a lookup port. Opaque to the resolver; carried
/// through so callers can distinguish it from a business-rule violation.
#[derive(Debug, Error)]
#[error("reference data lookup failed: {0}")]
pub struct PortError(#[from] anyhow::Error);

impl PortError {
    pub fn new(error: impl Into<anyhow::Error>) -> Self {
        Self(error.into())
    }
}

pub type PortResult<T> = Result<T, PortError>;

/// Access to processing periods.
pub trait PeriodPort {
    /// Periods valid for the program/facility pairing, ascending by start
    /// date.
    fn search_by_program_and_facility(
        &self,
        program_id: ProgramId,
        facility_id: FacilityId,
    ) -> PortResult<Vec<ProcessingPeriod>>;

    /// Periods on the schedule whose end date falls on or before `end_date`,
    /// descending by start date, at most `limit` entries.
    fn search_by_schedule(
        &self,
        schedule_id: ScheduleId,
        end_date: NaiveDate,
        limit: usize,
    ) -> PortResult<Vec<ProcessingPeriod>>;

    /// A single period by id.
    fn find_one(&self, period_id: PeriodId) -> PortResult<Option<ProcessingPeriod>>;
}

/// Access to existing requisitions.
pub trait RequisitionLookupPort {
    /// Requisitions filed for the period/facility/program with the given
    /// emergency flag. At most one element is expected when `emergency` is
    /// false.
    fn search(
        &self,
        period_id: PeriodId,
        facility_id: FacilityId,
        program_id: ProgramId,
        emergency: bool,
    ) -> PortResult<Vec<Requisition>>;
}

/// Access to processing schedules.
pub trait SchedulePort {
    /// Schedules valid for the program/facility pairing. When more than one
    /// is returned the resolver takes the first; no ordering is assumed
    /// beyond whatever the port itself documents.
    fn search_by_program_and_facility(
        &self,
        program_id: ProgramId,
        facility_id: FacilityId,
    ) -> PortResult<Vec<ProcessingSchedule>>;
}
