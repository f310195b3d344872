//! Raw imported requisition data, as handed over by the transport layer.
//!
//! Imports are untrusted input: ids may be missing, flags may be absent.
//! Assembly validates them against the supplied orderables and the template.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use reqn_model::{FacilityId, OrderableId, ProcessingPeriod};

/// One imported line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemImport {
    pub orderable_id: OrderableId,
    pub beginning_balance: Option<i32>,
    pub total_received_quantity: Option<i32>,
    pub total_consumed_quantity: Option<i32>,
    pub stock_on_hand: Option<i32>,
    pub requested_quantity: Option<i32>,
    pub requested_quantity_explanation: Option<String>,
    pub total_stockout_days: Option<i32>,
    pub approved_quantity: Option<i32>,
    pub remarks: Option<String>,
    pub skipped: Option<bool>,
}

impl LineItemImport {
    pub fn new(orderable_id: OrderableId) -> Self {
        Self {
            orderable_id,
            beginning_balance: None,
            total_received_quantity: None,
            total_consumed_quantity: None,
            stock_on_hand: None,
            requested_quantity: None,
            requested_quantity_explanation: None,
            total_stockout_days: None,
            approved_quantity: None,
            remarks: None,
            skipped: None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped == Some(true)
    }
}

/// An imported requisition update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequisitionImport {
    pub facility_id: FacilityId,
    pub emergency: bool,
    pub processing_period: ProcessingPeriod,
    pub line_items: Vec<LineItemImport>,
    pub draft_status_message: Option<String>,
    /// Carried through for optimistic-conflict detection downstream.
    pub modified_date: Option<DateTime<Utc>>,
    pub date_physical_stock_count_completed: Option<NaiveDate>,
}
