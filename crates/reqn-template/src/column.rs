//! A single configured template column.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use reqn_model::{ColumnDefinition, ColumnOption, SourceType};

/// Column key whose display order is pinned to 1 whenever the column is made
/// visible. Fixed UI contract: the product code always leads the report.
pub const PRODUCT_CODE_COLUMN: &str = "productCode";

/// Well-known column keys shared between templates and line items.
pub const SKIPPED_COLUMN: &str = "skipped";
pub const BEGINNING_BALANCE_COLUMN: &str = "beginningBalance";
pub const TOTAL_RECEIVED_QUANTITY_COLUMN: &str = "totalReceivedQuantity";
pub const TOTAL_CONSUMED_QUANTITY_COLUMN: &str = "totalConsumedQuantity";
pub const STOCK_ON_HAND_COLUMN: &str = "stockOnHand";
pub const REQUESTED_QUANTITY_COLUMN: &str = "requestedQuantity";
pub const REQUESTED_QUANTITY_EXPLANATION_COLUMN: &str = "requestedQuantityExplanation";
pub const TOTAL_STOCKOUT_DAYS_COLUMN: &str = "totalStockoutDays";
pub const APPROVED_QUANTITY_COLUMN: &str = "approvedQuantity";
pub const REMARKS_COLUMN: &str = "remarks";

/// One column instance inside a template.
///
/// The column references its static rules through a shared
/// [`ColumnDefinition`]; the definition's lifetime belongs to the catalog,
/// not to any template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequisitionTemplateColumn {
    pub name: String,
    pub label: String,
    pub indicator: String,
    /// None until the column is first placed in the display order.
    pub display_order: Option<i32>,
    pub is_displayed: bool,
    pub source: SourceType,
    pub option: Option<ColumnOption>,
    pub tag: Option<String>,
    pub definition: Arc<ColumnDefinition>,
}

impl RequisitionTemplateColumn {
    /// A hidden, unordered column for the given definition. The column key
    /// is taken from the definition name.
    pub fn new(
        definition: Arc<ColumnDefinition>,
        label: impl Into<String>,
        indicator: impl Into<String>,
        source: SourceType,
    ) -> Self {
        Self {
            name: definition.name.clone(),
            label: label.into(),
            indicator: indicator.into(),
            display_order: None,
            is_displayed: false,
            source,
            option: None,
            tag: None,
            definition,
        }
    }

    pub fn displayed(mut self) -> Self {
        self.is_displayed = true;
        self
    }

    pub fn with_display_order(mut self, order: i32) -> Self {
        self.display_order = Some(order);
        self
    }

    pub fn with_option(mut self, option: ColumnOption) -> Self {
        self.option = Some(option);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}
