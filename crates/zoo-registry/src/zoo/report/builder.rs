use super::super::domain::{Animal, Category, InventoryItem};
use super::super::store::{AnimalStore, ThingStore};
use super::views::{InventoryEntry, ZooSummary};

/// Herbivores at or above this kindness are suggested for the contact zoo.
pub const INTERACTIVE_KINDNESS_THRESHOLD: u8 = 5;

/// Aggregates the stores into a [`ZooSummary`]. Holds shared borrows only, so
/// the stores cannot change while a summary is being built.
#[derive(Debug, Clone, Copy)]
pub struct ReportBuilder<'a> {
    animals: &'a AnimalStore,
    things: &'a ThingStore,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(animals: &'a AnimalStore, things: &'a ThingStore) -> Self {
        Self { animals, things }
    }

    pub fn build_summary(&self) -> ZooSummary {
        let animals = self.animals.all();

        let total_food_kg_per_day = animals
            .iter()
            .map(|animal| u64::from(animal.food_kg_per_day()))
            .sum();

        let interactive_names = animals
            .iter()
            .filter(|animal| is_interactive(animal))
            .map(|animal| animal.display_name())
            .collect();

        let all_inventory = animals
            .iter()
            .map(|animal| animal as &dyn InventoryItem)
            .chain(self.things.iter().map(|thing| thing as &dyn InventoryItem))
            .map(InventoryEntry::from_item)
            .collect();

        ZooSummary {
            animals_count: animals.len(),
            total_food_kg_per_day,
            interactive_names,
            all_inventory,
        }
    }
}

fn is_interactive(animal: &Animal) -> bool {
    matches!(
        animal.category(),
        Category::Herbivore { kindness } if kindness >= INTERACTIVE_KINDNESS_THRESHOLD
    )
}
