use tracing::{info, warn};

use super::clinic::{AdmissionPolicy, Verdict, VeterinaryClinic};
use super::domain::{Animal, InventoryItem, Thing};
use super::report::{ReportBuilder, ZooSummary};
use super::store::{AnimalStore, ThingStore};

/// Service composing the admission policy with the animal and thing stores.
#[derive(Debug)]
pub struct ZooService<P = VeterinaryClinic> {
    animals: AnimalStore,
    things: ThingStore,
    clinic: P,
}

impl ZooService<VeterinaryClinic> {
    pub fn new() -> Self {
        Self::with_policy(VeterinaryClinic)
    }
}

impl Default for ZooService<VeterinaryClinic> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> ZooService<P>
where
    P: AdmissionPolicy,
{
    pub fn with_policy(clinic: P) -> Self {
        Self {
            animals: AnimalStore::new(),
            things: ThingStore::new(),
            clinic,
        }
    }

    /// Examine the animal and store it only when the clinic accepts it.
    pub fn admit(&mut self, animal: Animal) -> bool {
        self.examine_and_admit(animal).is_accepted()
    }

    /// Same as [`ZooService::admit`] but hands back the full verdict.
    pub fn examine_and_admit(&mut self, animal: Animal) -> Verdict {
        let verdict = self.clinic.evaluate(&animal);
        match verdict {
            Verdict::Accepted => {
                info!(
                    animal = %animal.display_name(),
                    number = %animal.number(),
                    "animal admitted"
                );
                self.animals.add(animal);
            }
            Verdict::Rejected(reason) => {
                warn!(
                    animal = %animal.display_name(),
                    number = %animal.number(),
                    reason = %reason.summary(),
                    "animal rejected by veterinary clinic"
                );
            }
        }
        verdict
    }

    pub fn add_thing(&mut self, thing: Thing) {
        info!(
            thing = %thing.display_name(),
            number = %thing.number(),
            "thing registered"
        );
        self.things.add(thing);
    }

    pub fn animals(&self) -> &AnimalStore {
        &self.animals
    }

    pub fn things(&self) -> &ThingStore {
        &self.things
    }

    pub fn report(&self) -> ReportBuilder<'_> {
        ReportBuilder::new(&self.animals, &self.things)
    }

    pub fn summary(&self) -> ZooSummary {
        self.report().build_summary()
    }

    /// Drop every admitted animal and registered thing.
    pub fn reset(&mut self) {
        self.animals.clear();
        self.things.clear();
    }
}
