//! The period eligibility resolver.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use reqn_model::{
    FacilityId, PeriodId, ProcessingPeriod, ProgramId, RequisitionId, RequisitionStatus,
};

use crate::error::ResolveError;
use crate::ports::{PeriodPort, RequisitionLookupPort, SchedulePort};

/// A period paired with the pre-authorize requisition already filed against
/// it, if any. Rows of the period picker shown before initiating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequisitionPeriod {
    pub period: ProcessingPeriod,
    pub requisition_id: Option<RequisitionId>,
    pub requisition_status: Option<RequisitionStatus>,
}

impl RequisitionPeriod {
    fn bare(period: ProcessingPeriod) -> Self {
        Self {
            period,
            requisition_id: None,
            requisition_status: None,
        }
    }
}

/// Resolves the single period a facility may currently requisition against.
///
/// Stateless between calls; each resolution works on the snapshots its ports
/// return and never re-fetches mid-computation.
pub struct PeriodResolver<P, R, S> {
    periods: P,
    requisitions: R,
    schedules: S,
}

impl<P, R, S> PeriodResolver<P, R, S>
where
    P: PeriodPort,
    R: RequisitionLookupPort,
    S: SchedulePort,
{
    pub fn new(periods: P, requisitions: R, schedules: S) -> Self {
        Self {
            periods,
            requisitions,
            schedules,
        }
    }

    /// Periods for the pairing whose `[start_date, end_date]` interval
    /// contains `today`, in port order.
    pub fn current_periods(
        &self,
        program_id: ProgramId,
        facility_id: FacilityId,
        today: NaiveDate,
    ) -> Result<Vec<ProcessingPeriod>, ResolveError> {
        let periods = self
            .periods
            .search_by_program_and_facility(program_id, facility_id)?;
        Ok(periods
            .into_iter()
            .filter(|period| period.contains(today))
            .collect())
    }

    /// Determines the single eligible period for a new requisition.
    ///
    /// Emergency requisitions take the first period currently in progress.
    /// Standard requisitions take the oldest period with no requisition yet,
    /// provided the previous period's requisition is past the pre-authorize
    /// stage. The candidate is then checked against `suggested_period_id`
    /// and against the schedule resolved for the pairing.
    pub fn find_period(
        &self,
        program_id: ProgramId,
        facility_id: FacilityId,
        suggested_period_id: Option<PeriodId>,
        emergency: bool,
        today: NaiveDate,
    ) -> Result<ProcessingPeriod, ResolveError> {
        let candidate = if emergency {
            let current = self.current_periods(program_id, facility_id, today)?;
            if current.is_empty() {
                return Err(ResolveError::IncorrectSuggestedPeriod);
            }
            current.into_iter().next()
        } else {
            self.oldest_period_without_requisition(program_id, facility_id)?
        };

        let period = match candidate {
            Some(period)
                if suggested_period_id.is_none_or(|suggested| suggested == period.id) =>
            {
                period
            }
            _ => {
                return Err(ResolveError::PeriodShouldBeOldestAndNotAssociated {
                    suggested: suggested_period_id,
                });
            }
        };

        debug!(period = %period.id, emergency, "resolved candidate period");

        let schedules = self
            .schedules
            .search_by_program_and_facility(program_id, facility_id)?;
        let Some(schedule) = schedules.into_iter().next() else {
            return Err(ResolveError::ScheduleNotFound {
                program: program_id,
                facility: facility_id,
            });
        };

        if schedule.id != period.schedule_id {
            return Err(ResolveError::PeriodMustBelongToSameSchedule {
                period: period.id,
                schedule: schedule.id,
            });
        }

        Ok(period)
    }

    /// The period immediately preceding `period_id` within its schedule, or
    /// `None` for the first period of a schedule.
    pub fn find_previous_period(
        &self,
        period_id: PeriodId,
    ) -> Result<Option<ProcessingPeriod>, ResolveError> {
        Ok(self
            .find_previous_periods(period_id, 1)?
            .into_iter()
            .next())
    }

    /// Up to `amount` periods preceding `period_id` on its schedule, most
    /// recent first.
    pub fn find_previous_periods(
        &self,
        period_id: PeriodId,
        amount: usize,
    ) -> Result<Vec<ProcessingPeriod>, ResolveError> {
        let Some(period) = self.periods.find_one(period_id)? else {
            return Ok(Vec::new());
        };
        let Some(cutoff) = period.start_date.pred_opt() else {
            return Ok(Vec::new());
        };
        Ok(self
            .periods
            .search_by_schedule(period.schedule_id, cutoff, amount)?)
    }

    /// The period list offered before initiating: one row per selectable
    /// period, annotated with any requisition still open for it.
    ///
    /// Standard requisitions hide periods whose requisition is already past
    /// pre-authorize. Emergency requisitions keep the period selectable and
    /// add one extra row per open requisition within it.
    pub fn requisition_periods(
        &self,
        program_id: ProgramId,
        facility_id: FacilityId,
        emergency: bool,
        today: NaiveDate,
    ) -> Result<Vec<RequisitionPeriod>, ResolveError> {
        let periods = if emergency {
            self.current_periods(program_id, facility_id, today)?
        } else {
            self.periods
                .search_by_program_and_facility(program_id, facility_id)?
        };

        let mut rows = Vec::new();
        for period in periods {
            let requisitions =
                self.requisitions
                    .search(period.id, facility_id, program_id, emergency)?;
            let pre_authorize: Vec<_> = requisitions
                .iter()
                .filter(|requisition| requisition.status.is_pre_authorize())
                .collect();

            if emergency {
                rows.push(RequisitionPeriod::bare(period.clone()));
                for requisition in pre_authorize {
                    rows.push(RequisitionPeriod {
                        period: period.clone(),
                        requisition_id: requisition.id,
                        requisition_status: Some(requisition.status),
                    });
                }
            } else if requisitions.is_empty() {
                rows.push(RequisitionPeriod::bare(period));
            } else if let Some(open) = pre_authorize.first() {
                rows.push(RequisitionPeriod {
                    period,
                    requisition_id: open.id,
                    requisition_status: Some(open.status),
                });
            }
            // A standard period whose requisition is past pre-authorize is
            // no longer selectable and emits no row.
        }
        Ok(rows)
    }

    /// Scans periods in ascending start-date order for the oldest one with
    /// no regular requisition. Fails when the last requisition before the
    /// gap is still pre-authorize.
    fn oldest_period_without_requisition(
        &self,
        program_id: ProgramId,
        facility_id: FacilityId,
    ) -> Result<Option<ProcessingPeriod>, ResolveError> {
        let periods = self
            .periods
            .search_by_program_and_facility(program_id, facility_id)?;

        let mut previous: Option<(PeriodId, RequisitionStatus)> = None;
        for period in periods {
            // At most one regular requisition exists per period, facility
            // and program.
            let requisitions =
                self.requisitions
                    .search(period.id, facility_id, program_id, false)?;

            match requisitions.first() {
                Some(requisition) => previous = Some((period.id, requisition.status)),
                None => {
                    if let Some((previous_period, status)) = previous
                        && status.is_pre_authorize()
                    {
                        debug!(period = %previous_period, %status, "previous period still open");
                        return Err(ResolveError::FinishPreviousRequisition {
                            period: previous_period,
                        });
                    }
                    return Ok(Some(period));
                }
            }
        }
        Ok(None)
    }
}
