//! Requisitions and their line items.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{FacilityId, OrderableId, PeriodId, ProgramId, RequisitionId};
use crate::status::RequisitionStatus;

/// Date on which the facility completed its physical stock count, kept as a
/// distinct type so it cannot be confused with period bounds or audit stamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhysicalStockCountDate(NaiveDate);

impl PhysicalStockCountDate {
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub const fn date(&self) -> NaiveDate {
        self.0
    }
}

/// One commodity line on a requisition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequisitionLineItem {
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
    pub skipped: bool,
    pub non_full_supply: bool,
    pub price_per_pack: Option<f64>,
}

impl RequisitionLineItem {
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
            skipped: false,
            non_full_supply: false,
            price_per_pack: None,
        }
    }
}

/// A periodic request for resupply of commodities, submitted by one facility
/// against one program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requisition {
    pub id: Option<RequisitionId>,
    pub facility_id: FacilityId,
    pub program_id: ProgramId,
    pub processing_period_id: Option<PeriodId>,
    pub emergency: bool,
    pub status: RequisitionStatus,
    pub line_items: Vec<RequisitionLineItem>,
    pub number_of_months_in_period: Option<u32>,
    pub draft_status_message: Option<String>,
    /// Kept for optimistic-conflict detection by the persistence layer.
    pub modified_date: Option<DateTime<Utc>>,
    pub date_physical_stock_count_completed: Option<PhysicalStockCountDate>,
}

impl Requisition {
    /// A freshly initiated requisition with no period or line items yet.
    pub fn new(facility_id: FacilityId, program_id: ProgramId, emergency: bool) -> Self {
        Self {
            id: None,
            facility_id,
            program_id,
            processing_period_id: None,
            emergency,
            status: RequisitionStatus::Initiated,
            line_items: Vec::new(),
            number_of_months_in_period: None,
            draft_status_message: None,
            modified_date: None,
            date_physical_stock_count_completed: None,
        }
    }
}
