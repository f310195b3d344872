//! Resolver tests over in-memory ports.

use chrono::NaiveDate;

use reqn_model::{
    FacilityId, PeriodId, ProcessingPeriod, ProcessingSchedule, ProgramId, Requisition,
    RequisitionId, RequisitionStatus, ScheduleId,
};
use reqn_period::{
    PeriodPort, PeriodResolver, PortError, PortResult, RequisitionLookupPort, ResolveError,
    SchedulePort,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn month_period(schedule_id: ScheduleId, year: i32, month: u32, last_day: u32) -> ProcessingPeriod {
    ProcessingPeriod {
        id: PeriodId::random(),
        schedule_id,
        name: Some(format!("{year}-{month:02}")),
        start_date: date(year, month, 1),
        end_date: date(year, month, last_day),
        duration_months: 1,
    }
}

#[derive(Default)]
struct InMemoryPeriods {
    periods: Vec<ProcessingPeriod>,
}

impl PeriodPort for InMemoryPeriods {
    fn search_by_program_and_facility(
        &self,
        _program_id: ProgramId,
        _facility_id: FacilityId,
    ) -> PortResult<Vec<ProcessingPeriod>> {
        let mut periods = self.periods.clone();
        periods.sort_by_key(|period| period.start_date);
        Ok(periods)
    }

    fn search_by_schedule(
        &self,
        schedule_id: ScheduleId,
        end_date: NaiveDate,
        limit: usize,
    ) -> PortResult<Vec<ProcessingPeriod>> {
        let mut periods: Vec<_> = self
            .periods
            .iter()
            .filter(|period| period.schedule_id == schedule_id && period.end_date <= end_date)
            .cloned()
            .collect();
        periods.sort_by_key(|period| std::cmp::Reverse(period.start_date));
        periods.truncate(limit);
        Ok(periods)
    }

    fn find_one(&self, period_id: PeriodId) -> PortResult<Option<ProcessingPeriod>> {
        Ok(self
            .periods
            .iter()
            .find(|period| period.id == period_id)
            .cloned())
    }
}

#[derive(Default)]
struct InMemoryRequisitions {
    requisitions: Vec<Requisition>,
}

impl InMemoryRequisitions {
    fn with(
        statuses: impl IntoIterator<Item = (PeriodId, FacilityId, ProgramId, RequisitionStatus, bool)>,
    ) -> Self {
        let requisitions = statuses
            .into_iter()
            .map(|(period, facility, program, status, emergency)| {
                let mut requisition = Requisition::new(facility, program, emergency);
                requisition.id = Some(RequisitionId::random());
                requisition.processing_period_id = Some(period);
                requisition.status = status;
                requisition
            })
            .collect();
        Self { requisitions }
    }
}

impl RequisitionLookupPort for InMemoryRequisitions {
    fn search(
        &self,
        period_id: PeriodId,
        facility_id: FacilityId,
        program_id: ProgramId,
        emergency: bool,
    ) -> PortResult<Vec<Requisition>> {
        Ok(self
            .requisitions
            .iter()
            .filter(|requisition| {
                requisition.processing_period_id == Some(period_id)
                    && requisition.facility_id == facility_id
                    && requisition.program_id == program_id
                    && requisition.emergency == emergency
            })
            .cloned()
            .collect())
    }
}

struct InMemorySchedules {
    schedules: Vec<ProcessingSchedule>,
}

impl InMemorySchedules {
    fn single(schedule_id: ScheduleId) -> Self {
        Self {
            schedules: vec![ProcessingSchedule {
                id: schedule_id,
                code: Some("M1".to_string()),
                name: Some("Monthly".to_string()),
            }],
        }
    }
}

impl SchedulePort for InMemorySchedules {
    fn search_by_program_and_facility(
        &self,
        _program_id: ProgramId,
        _facility_id: FacilityId,
    ) -> PortResult<Vec<ProcessingSchedule>> {
        Ok(self.schedules.clone())
    }
}

struct Fixture {
    program: ProgramId,
    facility: FacilityId,
    schedule: ScheduleId,
    periods: Vec<ProcessingPeriod>,
}

impl Fixture {
    /// Three consecutive monthly periods on one schedule.
    fn new() -> Self {
        let schedule = ScheduleId::random();
        Self {
            program: ProgramId::random(),
            facility: FacilityId::random(),
            schedule,
            periods: vec![
                month_period(schedule, 2026, 1, 31),
                month_period(schedule, 2026, 2, 28),
                month_period(schedule, 2026, 3, 31),
            ],
        }
    }

    fn resolver(
        &self,
        requisitions: InMemoryRequisitions,
    ) -> PeriodResolver<InMemoryPeriods, InMemoryRequisitions, InMemorySchedules> {
        PeriodResolver::new(
            InMemoryPeriods {
                periods: self.periods.clone(),
            },
            requisitions,
            InMemorySchedules::single(self.schedule),
        )
    }

    fn requisition(
        &self,
        period: &ProcessingPeriod,
        status: RequisitionStatus,
    ) -> (PeriodId, FacilityId, ProgramId, RequisitionStatus, bool) {
        (period.id, self.facility, self.program, status, false)
    }
}

#[test]
fn standard_resolution_picks_oldest_period_without_requisition() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver(InMemoryRequisitions::with([
        fixture.requisition(&fixture.periods[0], RequisitionStatus::Released),
    ]));

    let period = resolver
        .find_period(fixture.program, fixture.facility, None, false, date(2026, 2, 10))
        .unwrap();

    assert_eq!(period.id, fixture.periods[1].id);
}

#[test]
fn standard_resolution_requires_previous_requisition_to_be_authorized() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver(InMemoryRequisitions::with([
        fixture.requisition(&fixture.periods[0], RequisitionStatus::Submitted),
    ]));

    let err = resolver
        .find_period(fixture.program, fixture.facility, None, false, date(2026, 2, 10))
        .unwrap_err();

    match err {
        ResolveError::FinishPreviousRequisition { period } => {
            assert_eq!(period, fixture.periods[0].id);
        }
        other => panic!("expected FinishPreviousRequisition, got {other:?}"),
    }
}

#[test]
fn standard_resolution_fails_when_every_period_is_taken() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver(InMemoryRequisitions::with(
        fixture
            .periods
            .iter()
            .map(|period| fixture.requisition(period, RequisitionStatus::Released))
            .collect::<Vec<_>>(),
    ));

    let err = resolver
        .find_period(fixture.program, fixture.facility, None, false, date(2026, 2, 10))
        .unwrap_err();

    assert!(matches!(
        err,
        ResolveError::PeriodShouldBeOldestAndNotAssociated { suggested: None }
    ));
}

#[test]
fn suggested_period_must_match_the_eligible_one() {
    let fixture = Fixture::new();
    let suggested = fixture.periods[2].id;
    let resolver = fixture.resolver(InMemoryRequisitions::default());

    let err = resolver
        .find_period(
            fixture.program,
            fixture.facility,
            Some(suggested),
            false,
            date(2026, 1, 15),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        ResolveError::PeriodShouldBeOldestAndNotAssociated { suggested: Some(id) } if id == suggested
    ));

    let period = resolver
        .find_period(
            fixture.program,
            fixture.facility,
            Some(fixture.periods[0].id),
            false,
            date(2026, 1, 15),
        )
        .unwrap();
    assert_eq!(period.id, fixture.periods[0].id);
}

#[test]
fn emergency_resolution_takes_the_first_current_period() {
    let fixture = Fixture::new();
    // An emergency requisition may exist already; it does not block another.
    let resolver = fixture.resolver(InMemoryRequisitions::with([(
        fixture.periods[1].id,
        fixture.facility,
        fixture.program,
        RequisitionStatus::Initiated,
        true,
    )]));

    let period = resolver
        .find_period(fixture.program, fixture.facility, None, true, date(2026, 2, 14))
        .unwrap();

    assert_eq!(period.id, fixture.periods[1].id);
}

#[test]
fn emergency_resolution_fails_outside_every_period() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver(InMemoryRequisitions::default());

    let err = resolver
        .find_period(fixture.program, fixture.facility, None, true, date(2027, 6, 1))
        .unwrap_err();

    assert!(matches!(err, ResolveError::IncorrectSuggestedPeriod));
}

#[test]
fn resolution_fails_without_a_schedule() {
    let fixture = Fixture::new();
    let resolver = PeriodResolver::new(
        InMemoryPeriods {
            periods: fixture.periods.clone(),
        },
        InMemoryRequisitions::default(),
        InMemorySchedules { schedules: vec![] },
    );

    let err = resolver
        .find_period(fixture.program, fixture.facility, None, false, date(2026, 1, 15))
        .unwrap_err();

    assert!(matches!(err, ResolveError::ScheduleNotFound { .. }));
}

#[test]
fn resolution_fails_when_period_is_on_another_schedule() {
    let fixture = Fixture::new();
    let other_schedule = ScheduleId::random();
    let resolver = PeriodResolver::new(
        InMemoryPeriods {
            periods: fixture.periods.clone(),
        },
        InMemoryRequisitions::default(),
        InMemorySchedules::single(other_schedule),
    );

    let err = resolver
        .find_period(fixture.program, fixture.facility, None, false, date(2026, 1, 15))
        .unwrap_err();

    match err {
        ResolveError::PeriodMustBelongToSameSchedule { period, schedule } => {
            assert_eq!(period, fixture.periods[0].id);
            assert_eq!(schedule, other_schedule);
        }
        other => panic!("expected PeriodMustBelongToSameSchedule, got {other:?}"),
    }
}

#[test]
fn previous_period_walks_back_within_the_schedule() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver(InMemoryRequisitions::default());

    let previous = resolver
        .find_previous_period(fixture.periods[1].id)
        .unwrap()
        .expect("previous period");
    assert_eq!(previous.id, fixture.periods[0].id);

    assert!(resolver.find_previous_period(fixture.periods[0].id).unwrap().is_none());
    assert!(resolver.find_previous_period(PeriodId::random()).unwrap().is_none());
}

#[test]
fn previous_periods_returns_most_recent_first() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver(InMemoryRequisitions::default());

    let previous = resolver
        .find_previous_periods(fixture.periods[2].id, 2)
        .unwrap();
    let ids: Vec<_> = previous.iter().map(|period| period.id).collect();
    assert_eq!(ids, vec![fixture.periods[1].id, fixture.periods[0].id]);
}

#[test]
fn standard_period_list_hides_finished_periods_and_annotates_open_ones() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver(InMemoryRequisitions::with([
        fixture.requisition(&fixture.periods[0], RequisitionStatus::Released),
        fixture.requisition(&fixture.periods[1], RequisitionStatus::Submitted),
    ]));

    let rows = resolver
        .requisition_periods(fixture.program, fixture.facility, false, date(2026, 2, 10))
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].period.id, fixture.periods[1].id);
    assert_eq!(rows[0].requisition_status, Some(RequisitionStatus::Submitted));
    assert!(rows[0].requisition_id.is_some());
    assert_eq!(rows[1].period.id, fixture.periods[2].id);
    assert_eq!(rows[1].requisition_status, None);
}

#[test]
fn emergency_period_list_adds_a_row_per_open_requisition() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver(InMemoryRequisitions::with([
        (
            fixture.periods[0].id,
            fixture.facility,
            fixture.program,
            RequisitionStatus::Initiated,
            true,
        ),
        (
            fixture.periods[0].id,
            fixture.facility,
            fixture.program,
            RequisitionStatus::Approved,
            true,
        ),
    ]));

    let rows = resolver
        .requisition_periods(fixture.program, fixture.facility, true, date(2026, 1, 20))
        .unwrap();

    // One selectable base row plus one row for the still-open requisition;
    // the approved one adds nothing.
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].requisition_id, None);
    assert_eq!(rows[1].requisition_status, Some(RequisitionStatus::Initiated));
}

struct FailingPeriods;

impl PeriodPort for FailingPeriods {
    fn search_by_program_and_facility(
        &self,
        _program_id: ProgramId,
        _facility_id: FacilityId,
    ) -> PortResult<Vec<ProcessingPeriod>> {
        Err(PortError::new(anyhow::anyhow!("reference data unreachable")))
    }

    fn search_by_schedule(
        &self,
        _schedule_id: ScheduleId,
        _end_date: NaiveDate,
        _limit: usize,
    ) -> PortResult<Vec<ProcessingPeriod>> {
        Err(PortError::new(anyhow::anyhow!("reference data unreachable")))
    }

    fn find_one(&self, _period_id: PeriodId) -> PortResult<Option<ProcessingPeriod>> {
        Err(PortError::new(anyhow::anyhow!("reference data unreachable")))
    }
}

#[test]
fn port_failures_surface_as_lookup_errors() {
    let fixture = Fixture::new();
    let resolver = PeriodResolver::new(
        FailingPeriods,
        InMemoryRequisitions::default(),
        InMemorySchedules::single(fixture.schedule),
    );

    let err = resolver
        .find_period(fixture.program, fixture.facility, None, false, date(2026, 1, 15))
        .unwrap_err();

    assert!(matches!(err, ResolveError::Lookup(_)));
}
