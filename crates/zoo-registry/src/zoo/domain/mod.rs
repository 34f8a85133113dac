mod animal;
mod thing;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use animal::{Animal, AnimalError, Category, Diet, Species, MAX_SCORE, MIN_SCORE};
pub use thing::{Thing, ThingKind};

/// Caller-supplied identifier attached to every animal and thing. Used for
/// display only; the registry never deduplicates on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryNumber(pub i64);

impl fmt::Display for InventoryNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Capability shared by everything the zoo keeps on its books.
pub trait InventoryItem {
    fn number(&self) -> InventoryNumber;

    /// Concrete kind shown in listings, e.g. `Rabbit` or `Table`.
    fn kind_label(&self) -> &'static str;

    fn name(&self) -> &str;

    /// `<Kind>(<name>)`, e.g. `Monkey(Chicha)`.
    fn display_name(&self) -> String {
        format!("{}({})", self.kind_label(), self.name())
    }
}
