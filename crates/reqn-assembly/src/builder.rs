//! Assembly of new and updated requisitions.

use std::collections::HashMap;

use tracing::debug;

use reqn_model::{
    FacilityId, Orderable, OrderableId, PhysicalStockCountDate, ProgramId, Requisition,
    RequisitionLineItem, RequisitionStatus,
};
use reqn_template::RequisitionTemplate;

use crate::error::AssemblyError;
use crate::import::{LineItemImport, RequisitionImport};
use crate::skip::skip_line_item;

/// Creates a brand-new requisition. All three inputs come from an untrusted
/// request and must be present.
pub fn new_requisition(
    facility_id: Option<FacilityId>,
    program_id: Option<ProgramId>,
    emergency: Option<bool>,
) -> Result<Requisition, AssemblyError> {
    match (facility_id, program_id, emergency) {
        (Some(facility_id), Some(program_id), Some(emergency)) => {
            Ok(Requisition::new(facility_id, program_id, emergency))
        }
        _ => Err(AssemblyError::MissingId),
    }
}

/// Builds an updated requisition from imported data.
///
/// Each imported line item is resolved against the supplied orderables and
/// the target program's association; skipped items of a still-editable
/// requisition get the template's skip transformation.
pub fn from_import(
    import: &RequisitionImport,
    template: &RequisitionTemplate,
    program_id: ProgramId,
    status: RequisitionStatus,
    orderables: &HashMap<OrderableId, Orderable>,
) -> Result<Requisition, AssemblyError> {
    let mut requisition = Requisition::new(import.facility_id, program_id, import.emergency);
    requisition.status = status;
    requisition.processing_period_id = Some(import.processing_period.id);

    for line_import in &import.line_items {
        let mut item = line_item_from(line_import);

        let orderable = orderables.get(&item.orderable_id).ok_or(
            AssemblyError::OrderableNotAvailable {
                orderable_id: item.orderable_id,
            },
        )?;
        let program_orderable = orderable
            .program_orderable(program_id)
            .ok_or(AssemblyError::ProgramNotFound { program_id })?;

        item.non_full_supply = !program_orderable.full_supply;
        item.price_per_pack = program_orderable.price_per_pack;

        if line_import.is_skipped() && status.is_pre_authorize() {
            skip_line_item(&mut item, template)?;
        }

        requisition.line_items.push(item);
    }

    requisition.number_of_months_in_period = Some(import.processing_period.duration_months);
    requisition.draft_status_message = import.draft_status_message.clone();
    requisition.modified_date = import.modified_date;
    requisition.date_physical_stock_count_completed = import
        .date_physical_stock_count_completed
        .map(PhysicalStockCountDate::new);

    debug!(
        line_items = requisition.line_items.len(),
        %program_id,
        "assembled requisition from import"
    );

    Ok(requisition)
}

fn line_item_from(import: &LineItemImport) -> RequisitionLineItem {
    let mut item = RequisitionLineItem::new(import.orderable_id);
    item.beginning_balance = import.beginning_balance;
    item.total_received_quantity = import.total_received_quantity;
    item.total_consumed_quantity = import.total_consumed_quantity;
    item.stock_on_hand = import.stock_on_hand;
    item.requested_quantity = import.requested_quantity;
    item.requested_quantity_explanation = import.requested_quantity_explanation.clone();
    item.total_stockout_days = import.total_stockout_days;
    item.approved_quantity = import.approved_quantity;
    item.remarks = import.remarks.clone();
    item.skipped = import.is_skipped();
    item
}
