//! Error types
//!
//! Physics errors are construction-time parameter violations only. A tick
//! never fails: degenerate geometry is skipped, not reported.

use crate::sim::WallId;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f32),
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("wall extent must be positive and finite, got {length} x {thickness}")]
    InvalidExtent { length: f32, thickness: f32 },
    #[error("{0} must be finite")]
    NonFinite(&'static str),
    #[error("confinement bounds must have positive, finite size")]
    InvalidBounds,
    #[error("no wall with id {0:?}")]
    UnknownWall(WallId),
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("failed to read or write settings file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}
