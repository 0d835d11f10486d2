use shared::ActivityMode;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CoachError {
    #[error("no route `{id}` available for mode {mode}")]
    UnknownRoute { id: String, mode: ActivityMode },
    #[error("failed to build GPX document: {0}")]
    Gpx(#[from] gpx::errors::GpxError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
