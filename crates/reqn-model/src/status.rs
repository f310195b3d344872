//! Requisition lifecycle status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Status of a requisition within its approval lifecycle.
///
/// The core only branches on one derived capability,
/// [`is_pre_authorize`](RequisitionStatus::is_pre_authorize); the remaining
/// variants exist so that externally fetched requisitions can be represented
/// without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequisitionStatus {
    Initiated,
    Submitted,
    Authorized,
    InApproval,
    Approved,
    Released,
    Rejected,
    Skipped,
}

impl RequisitionStatus {
    /// True while the requisition has not yet passed authorization and is
    /// still editable by the facility.
    pub fn is_pre_authorize(&self) -> bool {
        matches!(
            self,
            RequisitionStatus::Initiated | RequisitionStatus::Submitted
        )
    }

    /// Canonical upper-case name as used by the external requisition service.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequisitionStatus::Initiated => "INITIATED",
            RequisitionStatus::Submitted => "SUBMITTED",
            RequisitionStatus::Authorized => "AUTHORIZED",
            RequisitionStatus::InApproval => "IN_APPROVAL",
            RequisitionStatus::Approved => "APPROVED",
            RequisitionStatus::Released => "RELEASED",
            RequisitionStatus::Rejected => "REJECTED",
            RequisitionStatus::Skipped => "SKIPPED",
        }
    }
}

impl fmt::Display for RequisitionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequisitionStatus {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "INITIATED" => Ok(RequisitionStatus::Initiated),
            "SUBMITTED" => Ok(RequisitionStatus::Submitted),
            "AUTHORIZED" => Ok(RequisitionStatus::Authorized),
            "IN_APPROVAL" => Ok(RequisitionStatus::InApproval),
            "APPROVED" => Ok(RequisitionStatus::Approved),
            "RELEASED" => Ok(RequisitionStatus::Released),
            "REJECTED" => Ok(RequisitionStatus::Rejected),
            "SKIPPED" => Ok(RequisitionStatus::Skipped),
            other => Err(ModelError::UnknownStatus(other.to_string())),
        }
    }
}
