//! Zoo registry core: the animal and thing model, the veterinary admission
//! policy, the inventory stores, and the holdings report.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod zoo;
