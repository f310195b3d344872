//! Processing periods and schedules.
//!
//! Both are owned by an external reference-data service; the core only reads
//! them. Periods within one schedule are ordered by start date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{PeriodId, ScheduleId};

/// A fixed calendar interval against which one regular requisition may be
/// filed per facility and program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingPeriod {
    pub id: PeriodId,
    pub schedule_id: ScheduleId,
    pub name: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_months: u32,
}

impl ProcessingPeriod {
    /// True when `date` falls within the period, both ends inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// A processing schedule grouping periods for a program/facility pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingSchedule {
    pub id: ScheduleId,
    pub code: Option<String>,
    pub name: Option<String>,
}
