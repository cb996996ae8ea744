//! Physics settings
//!
//! Every tunable constant the core consumes. Loaded once by the host and
//! never renegotiated mid-run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Contact material: restitution and Coulomb friction coefficient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Fraction of normal relative speed kept (1 = elastic)
    pub restitution: f32,
    /// Friction impulse per unit normal impulse
    pub friction: f32,
}

impl Material {
    pub const fn new(restitution: f32, friction: f32) -> Self {
        Self {
            restitution,
            friction,
        }
    }

    /// Perfectly elastic and frictionless
    pub const fn elastic() -> Self {
        Self::new(1.0, 0.0)
    }

    pub const fn ball_default() -> Self {
        Self::new(BALL_RESTITUTION, BALL_FRICTION)
    }

    pub const fn wall_default() -> Self {
        Self::new(WALL_RESTITUTION, WALL_FRICTION)
    }

    fn validate(&self, name: &str) -> Result<(), SettingsError> {
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(SettingsError::Invalid(format!(
                "{name}.restitution must be in [0, 1], got {}",
                self.restitution
            )));
        }
        if !(self.friction >= 0.0 && self.friction.is_finite()) {
            return Err(SettingsError::Invalid(format!(
                "{name}.friction must be non-negative, got {}",
                self.friction
            )));
        }
        Ok(())
    }
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed physics timestep in seconds
    pub timestep: f32,
    /// Cap on a single measured frame (seconds of simulated time)
    pub max_frame_time: f32,
    /// Ball-ball contact material
    pub ball_ball: Material,
    /// Ball-wall contact material
    pub ball_wall: Material,
    /// Restitution against the outer boundary
    pub boundary_restitution: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timestep: SIM_DT,
            max_frame_time: MAX_FRAME_TIME,
            ball_ball: Material::ball_default(),
            ball_wall: Material::wall_default(),
            boundary_restitution: BOUNDARY_RESTITUTION,
        }
    }
}

impl Settings {
    /// Elastic, frictionless contacts everywhere (useful for conservation checks)
    pub fn elastic() -> Self {
        Self {
            ball_ball: Material::elastic(),
            ball_wall: Material::elastic(),
            boundary_restitution: 1.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.timestep > 0.0 && self.timestep.is_finite()) {
            return Err(SettingsError::Invalid(format!(
                "timestep must be positive, got {}",
                self.timestep
            )));
        }
        if !(self.max_frame_time >= self.timestep && self.max_frame_time.is_finite()) {
            return Err(SettingsError::Invalid(format!(
                "max_frame_time ({}) must be at least one timestep ({})",
                self.max_frame_time, self.timestep
            )));
        }
        if !(0.0..=1.0).contains(&self.boundary_restitution) {
            return Err(SettingsError::Invalid(format!(
                "boundary_restitution must be in [0, 1], got {}",
                self.boundary_restitution
            )));
        }
        self.ball_ball.validate("ball_ball")?;
        self.ball_wall.validate("ball_wall")?;
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
