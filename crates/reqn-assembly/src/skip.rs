//! The skip transformation for line items.

use reqn_model::RequisitionLineItem;
use reqn_template::{
    APPROVED_QUANTITY_COLUMN, BEGINNING_BALANCE_COLUMN, REMARKS_COLUMN,
    REQUESTED_QUANTITY_COLUMN, REQUESTED_QUANTITY_EXPLANATION_COLUMN, RequisitionTemplate,
    STOCK_ON_HAND_COLUMN, TOTAL_CONSUMED_QUANTITY_COLUMN, TOTAL_RECEIVED_QUANTITY_COLUMN,
    TOTAL_STOCKOUT_DAYS_COLUMN, TemplateError,
};

/// Marks a line item skipped and clears every value whose template column is
/// user-input. Values fed by calculation or external data keep their last
/// state; columns absent from the template are left alone.
pub fn skip_line_item(
    item: &mut RequisitionLineItem,
    template: &RequisitionTemplate,
) -> Result<(), TemplateError> {
    item.skipped = true;

    if clears(template, BEGINNING_BALANCE_COLUMN)? {
        item.beginning_balance = None;
    }
    if clears(template, TOTAL_RECEIVED_QUANTITY_COLUMN)? {
        item.total_received_quantity = None;
    }
    if clears(template, TOTAL_CONSUMED_QUANTITY_COLUMN)? {
        item.total_consumed_quantity = None;
    }
    if clears(template, STOCK_ON_HAND_COLUMN)? {
        item.stock_on_hand = None;
    }
    if clears(template, REQUESTED_QUANTITY_COLUMN)? {
        item.requested_quantity = None;
    }
    if clears(template, REQUESTED_QUANTITY_EXPLANATION_COLUMN)? {
        item.requested_quantity_explanation = None;
    }
    if clears(template, TOTAL_STOCKOUT_DAYS_COLUMN)? {
        item.total_stockout_days = None;
    }
    if clears(template, APPROVED_QUANTITY_COLUMN)? {
        item.approved_quantity = None;
    }
    if clears(template, REMARKS_COLUMN)? {
        item.remarks = None;
    }

    Ok(())
}

fn clears(template: &RequisitionTemplate, key: &str) -> Result<bool, TemplateError> {
    if !template.is_column_in_template(key) {
        return Ok(false);
    }
    template.is_column_user_input(key)
}
