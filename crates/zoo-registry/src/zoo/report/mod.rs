mod builder;
pub mod views;

pub use builder::{ReportBuilder, INTERACTIVE_KINDNESS_THRESHOLD};
pub use views::{InventoryEntry, ZooSummary};
