//! Typed identifiers for reference-data entities.
//!
//! Every entity owned by an external service (facility, program, period,
//! schedule, orderable) is addressed here only by id. Newtypes keep the ids
//! from being mixed up at call sites.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub const fn new(id: Uuid) -> Self {
                Self(id)
            }

            /// A fresh random id. Used by tests and by assembly of brand-new
            /// requisitions.
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            pub const fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

entity_id!(
    /// Id of a program a facility requisitions against.
    ProgramId
);
entity_id!(
    /// Id of a health facility.
    FacilityId
);
entity_id!(
    /// Id of a facility type, used in template assignments.
    FacilityTypeId
);
entity_id!(
    /// Id of a processing period.
    PeriodId
);
entity_id!(
    /// Id of a processing schedule.
    ScheduleId
);
entity_id!(
    /// Id of an orderable product.
    OrderableId
);
entity_id!(
    /// Id of a requisition.
    RequisitionId
);
