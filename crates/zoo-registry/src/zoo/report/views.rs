use serde::Serialize;

use super::super::domain::{InventoryItem, InventoryNumber};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryEntry {
    pub number: InventoryNumber,
    pub display_name: String,
}

impl InventoryEntry {
    pub fn from_item(item: &dyn InventoryItem) -> Self {
        Self {
            number: item.number(),
            display_name: item.display_name(),
        }
    }
}

/// Derived view of current holdings. Rebuilt on every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ZooSummary {
    pub animals_count: usize,
    pub total_food_kg_per_day: u64,
    pub interactive_names: Vec<String>,
    pub all_inventory: Vec<InventoryEntry>,
}
