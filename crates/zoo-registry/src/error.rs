use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::zoo::domain::AnimalError;
use crate::zoo::intake::ManifestError;

/// Process-level error surfaced by the `zoo` binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),
    #[error("invalid animal: {0}")]
    Animal(#[from] AnimalError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
