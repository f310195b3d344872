//! Orderable products and their per-program associations.

use serde::{Deserialize, Serialize};

use crate::ids::{OrderableId, ProgramId};

/// Association of an orderable with one program's supply list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramOrderable {
    pub program_id: ProgramId,
    /// Whether the orderable belongs to the program's core (full) supply list.
    pub full_supply: bool,
    pub price_per_pack: Option<f64>,
}

/// A product that can appear on a requisition line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orderable {
    pub id: OrderableId,
    pub product_code: Option<String>,
    pub full_product_name: Option<String>,
    pub programs: Vec<ProgramOrderable>,
}

impl Orderable {
    pub fn new(id: OrderableId) -> Self {
        Self {
            id,
            product_code: None,
            full_product_name: None,
            programs: Vec::new(),
        }
    }

    pub fn with_program(mut self, program: ProgramOrderable) -> Self {
        self.programs.push(program);
        self
    }

    /// The association for `program_id`, if the orderable belongs to that
    /// program at all.
    pub fn program_orderable(&self, program_id: ProgramId) -> Option<&ProgramOrderable> {
        self.programs.iter().find(|p| p.program_id == program_id)
    }
}
