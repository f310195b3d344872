//! Domain model for the requisition core.
//!
//! Pure data types shared by the template engine, the period eligibility
//! resolver and requisition assembly. Nothing in this crate performs I/O;
//! periods, schedules and orderables are snapshots handed in by external
//! lookup services.

pub mod column;
pub mod error;
pub mod ids;
pub mod orderable;
pub mod period;
pub mod requisition;
pub mod status;

pub use column::{ColumnCatalog, ColumnDefinition, ColumnOption, SourceType};
pub use error::ModelError;
pub use ids::{
    FacilityId, FacilityTypeId, OrderableId, PeriodId, ProgramId, RequisitionId, ScheduleId,
};
pub use orderable::{Orderable, ProgramOrderable};
pub use period::{ProcessingPeriod, ProcessingSchedule};
pub use requisition::{PhysicalStockCountDate, Requisition, RequisitionLineItem};
pub use status::RequisitionStatus;
