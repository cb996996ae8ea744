//! Wall Dynamics - balls, gravity and moving walls in a box
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, fixed timestep loop)
//! - `renderer`: Render sink boundary and interpolated pose snapshots
//! - `settings`: Data-driven physics tuning
//! - `setup`: Seeded scene initializer (kept out of the core)

pub mod error;
pub mod renderer;
pub mod settings;
pub mod setup;
pub mod sim;

pub use error::{PhysicsError, SettingsError};
pub use settings::{Material, Settings};

use glam::Vec2;
use std::f32::consts::TAU;

/// Simulation configuration constants
pub mod consts {
    /// Fixed physics timestep (400 Hz keeps tunneling rare at these speeds)
    pub const SIM_DT: f32 = 1.0 / 400.0;
    /// Longest frame the accumulator will accept (15 FPS floor)
    pub const MAX_FRAME_TIME: f32 = 1.0 / 15.0;

    /// Ball-ball contact
    pub const BALL_RESTITUTION: f32 = 0.6;
    pub const BALL_FRICTION: f32 = 0.05;

    /// Ball-wall contact (walls are grippier)
    pub const WALL_RESTITUTION: f32 = 0.6;
    pub const WALL_FRICTION: f32 = 0.4;

    /// Outer boundary bounce
    pub const BOUNDARY_RESTITUTION: f32 = 0.6;
}

/// Dot product of two vectors
#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.dot(b)
}

/// Euclidean length
#[inline]
pub fn magnitude(v: Vec2) -> f32 {
    v.length()
}

/// Unit vector along `v`, or `None` for a zero-length (or non-finite) vector.
///
/// Every collision normal and friction tangent goes through here so a
/// degenerate configuration drops the term instead of producing NaN.
#[inline]
pub fn direction(v: Vec2) -> Option<Vec2> {
    v.try_normalize()
}

/// Unsigned angle between two vectors in [0, π]. `None` if either is zero length.
pub fn angle_between(a: Vec2, b: Vec2) -> Option<f32> {
    if a.length_squared() > 0.0 && b.length_squared() > 0.0 {
        Some(a.angle_to(b).abs())
    } else {
        None
    }
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Unit direction vector (cos θ, sin θ)
#[inline]
pub fn unit_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// Velocity of a point at offset `r` on a body spinning at `omega` (ω × r in 2D)
#[inline]
pub fn spin_velocity(omega: f32, r: Vec2) -> Vec2 {
    Vec2::new(-r.y * omega, r.x * omega)
}
