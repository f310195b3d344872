//! Static column rules: sources, options and the definition catalog.
//!
//! A [`ColumnDefinition`] carries the immutable rules for one column kind —
//! which sources may feed it, which options it accepts, whether its display
//! and order are user-changeable. Definitions are owned by the
//! [`ColumnCatalog`] and handed to template columns as shared references;
//! a template never owns a copy of the rules.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Where a column's value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SourceType {
    UserInput,
    Calculated,
    ReferenceData,
    StockCards,
    PreviousRequisition,
}

impl SourceType {
    /// Canonical upper-case name as used by the column catalog.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::UserInput => "USER_INPUT",
            SourceType::Calculated => "CALCULATED",
            SourceType::ReferenceData => "REFERENCE_DATA",
            SourceType::StockCards => "STOCK_CARDS",
            SourceType::PreviousRequisition => "PREVIOUS_REQUISITION",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for SourceType {}

impl FromStr for SourceType {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "USER_INPUT" => Ok(SourceType::UserInput),
            "CALCULATED" => Ok(SourceType::Calculated),
            "REFERENCE_DATA" => Ok(SourceType::ReferenceData),
            "STOCK_CARDS" => Ok(SourceType::StockCards),
            "PREVIOUS_REQUISITION" => Ok(SourceType::PreviousRequisition),
            other => Err(ModelError::UnknownSource(other.to_string())),
        }
    }
}

/// A named display option a column definition may permit.
///
/// Equality, ordering and hashing go by `name` only; the label is
/// presentation text.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct ColumnOption {
    name: String,
    label: Option<String>,
}

impl ColumnOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
        }
    }

    pub fn with_label(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: Some(label.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl PartialEq for ColumnOption {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl PartialOrd for ColumnOption {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ColumnOption {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl Hash for ColumnOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for ColumnOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Immutable rules for one column kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Catalog key; matches the template's column key for columns of this kind.
    pub name: String,
    /// Whether a template may move this column in the display order.
    pub can_change_order: bool,
    /// Whether the column must stay displayed in every template.
    pub is_display_required: bool,
    /// Sources permitted to feed the column. Empty means no source may be
    /// assigned through template configuration.
    pub sources: BTreeSet<SourceType>,
    /// Options permitted for the column. Empty means none may be chosen.
    pub options: BTreeSet<ColumnOption>,
}

impl ColumnDefinition {
    /// A definition with no restrictions lifted: order changeable, display
    /// optional, no sources, no options. Builder-style setters below tighten
    /// or extend it.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            can_change_order: true,
            is_display_required: false,
            sources: BTreeSet::new(),
            options: BTreeSet::new(),
        }
    }

    pub fn with_sources(mut self, sources: impl IntoIterator<Item = SourceType>) -> Self {
        self.sources = sources.into_iter().collect();
        self
    }

    pub fn with_options(mut self, options: impl IntoIterator<Item = ColumnOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    pub fn locked_order(mut self) -> Self {
        self.can_change_order = false;
        self
    }

    pub fn display_required(mut self) -> Self {
        self.is_display_required = true;
        self
    }

    pub fn allows_source(&self, source: SourceType) -> bool {
        self.sources.contains(&source)
    }

    pub fn allows_option(&self, option: &ColumnOption) -> bool {
        self.options.contains(option)
    }
}

/// Read-only catalog of column definitions, keyed by definition name.
///
/// The catalog is the single owner of definition identity; lookups hand out
/// shared references whose lifetime is independent of any template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnCatalog {
    definitions: BTreeMap<String, Arc<ColumnDefinition>>,
}

impl ColumnCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition under its own name, replacing any previous one.
    pub fn insert(&mut self, definition: ColumnDefinition) -> Arc<ColumnDefinition> {
        let shared = Arc::new(definition);
        self.definitions
            .insert(shared.name.clone(), Arc::clone(&shared));
        shared
    }

    pub fn definition(&self, name: &str) -> Option<Arc<ColumnDefinition>> {
        self.definitions.get(name).map(Arc::clone)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl FromIterator<ColumnDefinition> for ColumnCatalog {
    fn from_iter<I: IntoIterator<Item = ColumnDefinition>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for definition in iter {
            catalog.insert(definition);
        }
        catalog
    }
}
