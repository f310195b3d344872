//! Period eligibility resolver.
//!
//! Decides which reporting period a facility may requisition against, for
//! standard and emergency requisitions, and enforces that a facility cannot
//! skip ahead while a prior period's requisition is still open. The resolver
//! holds no state of its own; periods, requisitions and schedules are
//! queried through the [`ports`] traits and treated as read-only snapshots
//! for the duration of one resolution call.

pub mod error;
pub mod ports;
pub mod resolver;

pub use error::ResolveError;
pub use ports::{PeriodPort, PortError, PortResult, RequisitionLookupPort, SchedulePort};
pub use resolver::{PeriodResolver, RequisitionPeriod};
