//! Zoo admission and reporting.
//!
//! Animals pass through the [`VeterinaryClinic`] before they are stored;
//! things are registered unconditionally. [`ReportBuilder`] reads both stores
//! and produces a fresh [`ZooSummary`] on every call.

pub mod clinic;
pub mod domain;
pub mod intake;
pub mod report;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use clinic::{
    AdmissionPolicy, RejectionReason, Verdict, VeterinaryClinic, MAX_ADMISSION_DANGER,
    MIN_ADMISSION_KINDNESS,
};
pub use domain::{
    Animal, AnimalError, Category, Diet, InventoryItem, InventoryNumber, Species, Thing, ThingKind,
};
pub use intake::{IntakeManifest, IntakeOutcome, ManifestError};
pub use report::{InventoryEntry, ReportBuilder, ZooSummary, INTERACTIVE_KINDNESS_THRESHOLD};
pub use service::ZooService;
pub use store::{AnimalStore, Store, ThingStore};
