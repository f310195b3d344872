//! The template column engine.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use reqn_model::{ColumnOption, FacilityTypeId, ProgramId, SourceType};

use crate::column::{PRODUCT_CODE_COLUMN, RequisitionTemplateColumn};
use crate::error::TemplateError;

/// Binds a template to one (program, facility type) pairing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TemplateAssignment {
    pub program_id: ProgramId,
    pub facility_type_id: Option<FacilityTypeId>,
}

/// Report template for requisitions: which columns appear, in what order,
/// fed from which source.
///
/// The column map keyed by column name is the primary structure; each entry's
/// `display_order` is a manual secondary index over it. Sorted views are
/// recomputed on demand, never maintained as a separate list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequisitionTemplate {
    pub number_of_periods_to_average: Option<u32>,
    pub populate_stock_on_hand_from_stock_cards: bool,
    /// `None` means the template was never given a column configuration,
    /// which is an error state for every per-column operation. An empty map
    /// is a configured template with no columns.
    columns: Option<BTreeMap<String, RequisitionTemplateColumn>>,
    pub assignments: BTreeSet<TemplateAssignment>,
}

impl RequisitionTemplate {
    /// A template with no column configuration yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A template with the given columns, keyed by column name.
    pub fn with_columns(
        columns: impl IntoIterator<Item = RequisitionTemplateColumn>,
    ) -> Self {
        let mut template = Self::new();
        template.set_columns(columns);
        template
    }

    /// Replaces the whole column configuration.
    pub fn set_columns(&mut self, columns: impl IntoIterator<Item = RequisitionTemplateColumn>) {
        self.columns = Some(
            columns
                .into_iter()
                .map(|column| (column.name.clone(), column))
                .collect(),
        );
    }

    pub fn assign(&mut self, program_id: ProgramId, facility_type_id: Option<FacilityTypeId>) {
        self.assignments.insert(TemplateAssignment {
            program_id,
            facility_type_id,
        });
    }

    /// Looks up a column by key, or fails with [`TemplateError::ColumnsNotInitialized`]
    /// when the template has no configuration and [`TemplateError::ColumnNotFound`]
    /// when the key is absent.
    pub fn find_column(&self, key: &str) -> Result<&RequisitionTemplateColumn, TemplateError> {
        self.columns
            .as_ref()
            .ok_or(TemplateError::ColumnsNotInitialized)?
            .get(key)
            .ok_or_else(|| TemplateError::ColumnNotFound {
                key: key.to_string(),
            })
    }

    fn find_column_mut(
        &mut self,
        key: &str,
    ) -> Result<&mut RequisitionTemplateColumn, TemplateError> {
        self.columns
            .as_mut()
            .ok_or(TemplateError::ColumnsNotInitialized)?
            .get_mut(key)
            .ok_or_else(|| TemplateError::ColumnNotFound {
                key: key.to_string(),
            })
    }

    pub fn is_column_displayed(&self, key: &str) -> Result<bool, TemplateError> {
        Ok(self.find_column(key)?.is_displayed)
    }

    pub fn is_column_calculated(&self, key: &str) -> Result<bool, TemplateError> {
        Ok(self.find_column(key)?.source == SourceType::Calculated)
    }

    pub fn is_column_user_input(&self, key: &str) -> Result<bool, TemplateError> {
        Ok(self.find_column(key)?.source == SourceType::UserInput)
    }

    /// Moves a column to `new_order`, shifting siblings to keep their
    /// relative order intact.
    ///
    /// Sibling displacement is unconditional; the target column's own order
    /// is only written when its definition allows order changes. A column
    /// with no order yet opens a gap at `new_order` instead of closing one.
    pub fn change_column_display_order(
        &mut self,
        key: &str,
        new_order: i32,
    ) -> Result<(), TemplateError> {
        let column = self.find_column(key)?;
        let old_order = column.display_order;
        let can_change = column.definition.can_change_order;

        let columns = self
            .columns
            .as_mut()
            .ok_or(TemplateError::ColumnsNotInitialized)?;

        match old_order {
            // Newly placed column: make room at new_order.
            None => shift(columns, |order| order >= new_order, 1),
            // Moving later: close the gap left behind.
            Some(old) if new_order > old => {
                shift(columns, |order| order > old && order <= new_order, -1);
            }
            // Moving earlier (or staying put): push the block aside.
            Some(old) => shift(columns, |order| order >= new_order && order < old, 1),
        }

        if can_change
            && let Some(column) = columns.get_mut(key)
        {
            column.display_order = Some(new_order);
        }

        Ok(())
    }

    /// Sets a column's display flag. Columns whose definition requires
    /// display are left untouched. Showing the product code column pins its
    /// order to 1.
    pub fn change_column_display(&mut self, key: &str, display: bool) -> Result<(), TemplateError> {
        let column = self.find_column_mut(key)?;
        if !column.definition.is_display_required {
            if display && key == PRODUCT_CODE_COLUMN {
                column.display_order = Some(1);
            }
            column.is_displayed = display;
        }
        Ok(())
    }

    pub fn change_column_label(
        &mut self,
        key: &str,
        label: impl Into<String>,
    ) -> Result<(), TemplateError> {
        self.find_column_mut(key)?.label = label.into();
        Ok(())
    }

    /// Changes a column's source after checking it against the definition's
    /// allowed set. State is untouched on failure.
    pub fn change_column_source(
        &mut self,
        key: &str,
        source: SourceType,
    ) -> Result<(), TemplateError> {
        let column = self.find_column_mut(key)?;
        if !column.definition.allows_source(source) {
            return Err(TemplateError::SourceNotAvailable {
                key: key.to_string(),
                source,
            });
        }
        column.source = source;
        Ok(())
    }

    /// Changes a column's option after checking it against the definition's
    /// allowed set. State is untouched on failure.
    pub fn change_column_option(
        &mut self,
        key: &str,
        option: ColumnOption,
    ) -> Result<(), TemplateError> {
        let column = self.find_column_mut(key)?;
        if !column.definition.allows_option(&option) {
            return Err(TemplateError::OptionNotAvailable {
                key: key.to_string(),
                option: option.name().to_string(),
            });
        }
        column.option = Some(option);
        Ok(())
    }

    /// Overwrites the averaging window and the entire column configuration
    /// with `other`'s. Full replacement, not a merge.
    pub fn update_from(&mut self, other: RequisitionTemplate) {
        self.number_of_periods_to_average = other.number_of_periods_to_average;
        self.columns = other.columns;
    }

    pub fn has_columns_defined(&self) -> bool {
        self.columns.as_ref().is_some_and(|columns| !columns.is_empty())
    }

    /// Existence predicate; total, never errors.
    pub fn is_column_in_template(&self, key: &str) -> bool {
        self.columns
            .as_ref()
            .is_some_and(|columns| columns.contains_key(key))
    }

    /// Existence-and-displayed predicate; total, never errors.
    pub fn is_column_in_template_and_displayed(&self, key: &str) -> bool {
        self.columns
            .as_ref()
            .and_then(|columns| columns.get(key))
            .is_some_and(|column| column.is_displayed)
    }

    /// Displayed columns sorted by display order, unordered ones last.
    /// Recomputed on every call.
    pub fn displayed_columns(&self) -> Vec<&RequisitionTemplateColumn> {
        let mut displayed: Vec<_> = self
            .columns
            .iter()
            .flat_map(|columns| columns.values())
            .filter(|column| column.is_displayed)
            .collect();
        displayed.sort_by_key(|column| (column.display_order.is_none(), column.display_order));
        displayed
    }

    /// All configured columns, in no particular order.
    pub fn columns(&self) -> impl Iterator<Item = &RequisitionTemplateColumn> {
        self.columns.iter().flat_map(|columns| columns.values())
    }
}

fn shift(
    columns: &mut BTreeMap<String, RequisitionTemplateColumn>,
    in_range: impl Fn(i32) -> bool,
    by: i32,
) {
    for column in columns.values_mut() {
        if let Some(order) = column.display_order
            && in_range(order)
        {
            column.display_order = Some(order + by);
        }
    }
}
