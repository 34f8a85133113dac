use super::{InventoryItem, InventoryNumber};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThingKind {
    Table,
    Computer,
}

impl ThingKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Table => "Table",
            Self::Computer => "Computer",
        }
    }
}

/// Inanimate asset. Things skip the veterinary check entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thing {
    kind: ThingKind,
    inventory_number: InventoryNumber,
    name: String,
}

impl Thing {
    pub fn new(kind: ThingKind, inventory_number: i64, name: impl Into<String>) -> Self {
        Self {
            kind,
            inventory_number: InventoryNumber(inventory_number),
            name: name.into(),
        }
    }

    pub fn table(inventory_number: i64, name: impl Into<String>) -> Self {
        Self::new(ThingKind::Table, inventory_number, name)
    }

    pub fn computer(inventory_number: i64, name: impl Into<String>) -> Self {
        Self::new(ThingKind::Computer, inventory_number, name)
    }

    pub fn kind(&self) -> ThingKind {
        self.kind
    }

    pub fn inventory_number(&self) -> InventoryNumber {
        self.inventory_number
    }
}

impl InventoryItem for Thing {
    fn number(&self) -> InventoryNumber {
        self.inventory_number
    }

    fn kind_label(&self) -> &'static str {
        self.kind.label()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
