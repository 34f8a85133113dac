//! JSON intake manifests: a batch of animals and things fed through the
//! [`ZooService`] in document order.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::clinic::{AdmissionPolicy, Verdict};
use super::domain::{
    Animal, AnimalError, InventoryItem, InventoryNumber, Species, Thing, ThingKind,
};
use super::service::ZooService;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IntakeManifest {
    #[serde(default)]
    pub animals: Vec<AnimalIntake>,
    #[serde(default)]
    pub things: Vec<ThingIntake>,
}

/// Manifest row for an animal. `score` is kindness for herbivore species and
/// danger for predator species.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnimalIntake {
    pub species: Species,
    pub name: String,
    pub food_kg_per_day: u32,
    pub inventory_number: InventoryNumber,
    pub score: i32,
}

impl AnimalIntake {
    pub fn build(&self) -> Result<Animal, AnimalError> {
        Animal::new(
            self.species,
            self.name.clone(),
            self.food_kg_per_day,
            self.inventory_number.0,
            self.score,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThingIntake {
    pub kind: ThingKind,
    pub inventory_number: InventoryNumber,
    pub name: String,
}

impl ThingIntake {
    pub fn build(&self) -> Thing {
        Thing::new(self.kind, self.inventory_number.0, self.name.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedIntake {
    pub display_name: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidIntake {
    pub index: usize,
    pub name: String,
    pub error: String,
}

/// What happened to each manifest row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntakeOutcome {
    pub admitted: Vec<String>,
    pub rejected: Vec<RejectedIntake>,
    pub invalid: Vec<InvalidIntake>,
    pub things_registered: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("unable to open manifest {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

impl IntakeManifest {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ManifestError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Feeds every row through the service. A row that fails validation is
    /// recorded in the outcome and the remaining rows still run.
    pub fn apply<P: AdmissionPolicy>(&self, service: &mut ZooService<P>) -> IntakeOutcome {
        let mut outcome = IntakeOutcome::default();

        for (index, entry) in self.animals.iter().enumerate() {
            let animal = match entry.build() {
                Ok(animal) => animal,
                Err(err) => {
                    warn!(
                        index,
                        name = %entry.name,
                        error = %err,
                        "skipping invalid manifest animal"
                    );
                    outcome.invalid.push(InvalidIntake {
                        index,
                        name: entry.name.clone(),
                        error: err.to_string(),
                    });
                    continue;
                }
            };

            let display_name = animal.display_name();
            match service.examine_and_admit(animal) {
                Verdict::Accepted => outcome.admitted.push(display_name),
                Verdict::Rejected(reason) => outcome.rejected.push(RejectedIntake {
                    display_name,
                    reason: reason.summary(),
                }),
            }
        }

        for entry in &self.things {
            service.add_thing(entry.build());
            outcome.things_registered += 1;
        }

        debug!(
            admitted = outcome.admitted.len(),
            rejected = outcome.rejected.len(),
            invalid = outcome.invalid.len(),
            things = outcome.things_registered,
            "manifest applied"
        );
        outcome
    }
}
