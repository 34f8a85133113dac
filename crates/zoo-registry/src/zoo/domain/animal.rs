use super::{InventoryItem, InventoryNumber};
use serde::{Deserialize, Serialize};

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Rabbit,
    Monkey,
    Tiger,
    Wolf,
}

impl Species {
    pub const fn ordered() -> [Self; 4] {
        [Self::Rabbit, Self::Monkey, Self::Tiger, Self::Wolf]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rabbit => "Rabbit",
            Self::Monkey => "Monkey",
            Self::Tiger => "Tiger",
            Self::Wolf => "Wolf",
        }
    }

    pub const fn diet(self) -> Diet {
        match self {
            Self::Rabbit | Self::Monkey => Diet::Herbivore,
            Self::Tiger | Self::Wolf => Diet::Predator,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diet {
    Herbivore,
    Predator,
}

/// Behavioral category with its validated score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Herbivore { kindness: u8 },
    Predator { danger: u8 },
}

impl Category {
    pub const fn diet(self) -> Diet {
        match self {
            Self::Herbivore { .. } => Diet::Herbivore,
            Self::Predator { .. } => Diet::Predator,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnimalError {
    #[error("kindness must be within 0..=10, got {0}")]
    KindnessOutOfRange(i32),
    #[error("danger must be within 0..=10, got {0}")]
    DangerOutOfRange(i32),
}

/// An animal on the zoo's books. Immutable once built; the score is checked
/// against the species' category at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    species: Species,
    name: String,
    food_kg_per_day: u32,
    inventory_number: InventoryNumber,
    category: Category,
}

impl Animal {
    /// `score` is kindness for herbivores and danger for predators.
    pub fn new(
        species: Species,
        name: impl Into<String>,
        food_kg_per_day: u32,
        inventory_number: i64,
        score: i32,
    ) -> Result<Self, AnimalError> {
        let category = match species.diet() {
            Diet::Herbivore => Category::Herbivore {
                kindness: checked_score(score).ok_or(AnimalError::KindnessOutOfRange(score))?,
            },
            Diet::Predator => Category::Predator {
                danger: checked_score(score).ok_or(AnimalError::DangerOutOfRange(score))?,
            },
        };

        Ok(Self {
            species,
            name: name.into(),
            food_kg_per_day,
            inventory_number: InventoryNumber(inventory_number),
            category,
        })
    }

    pub fn rabbit(
        name: impl Into<String>,
        food_kg_per_day: u32,
        inventory_number: i64,
        kindness: i32,
    ) -> Result<Self, AnimalError> {
        Self::new(Species::Rabbit, name, food_kg_per_day, inventory_number, kindness)
    }

    pub fn monkey(
        name: impl Into<String>,
        food_kg_per_day: u32,
        inventory_number: i64,
        kindness: i32,
    ) -> Result<Self, AnimalError> {
        Self::new(Species::Monkey, name, food_kg_per_day, inventory_number, kindness)
    }

    pub fn tiger(
        name: impl Into<String>,
        food_kg_per_day: u32,
        inventory_number: i64,
        danger: i32,
    ) -> Result<Self, AnimalError> {
        Self::new(Species::Tiger, name, food_kg_per_day, inventory_number, danger)
    }

    pub fn wolf(
        name: impl Into<String>,
        food_kg_per_day: u32,
        inventory_number: i64,
        danger: i32,
    ) -> Result<Self, AnimalError> {
        Self::new(Species::Wolf, name, food_kg_per_day, inventory_number, danger)
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn food_kg_per_day(&self) -> u32 {
        self.food_kg_per_day
    }

    pub fn inventory_number(&self) -> InventoryNumber {
        self.inventory_number
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn kindness(&self) -> Option<u8> {
        match self.category {
            Category::Herbivore { kindness } => Some(kindness),
            Category::Predator { .. } => None,
        }
    }

    pub fn danger(&self) -> Option<u8> {
        match self.category {
            Category::Predator { danger } => Some(danger),
            Category::Herbivore { .. } => None,
        }
    }
}

impl InventoryItem for Animal {
    fn number(&self) -> InventoryNumber {
        self.inventory_number
    }

    fn kind_label(&self) -> &'static str {
        self.species.label()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn checked_score(score: i32) -> Option<u8> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        u8::try_from(score).ok()
    } else {
        None
    }
}
