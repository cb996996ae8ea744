//! Wall entity: a moving, spinning oriented rectangle
//!
//! The rectangle is centred on `pos` with its long axis (`length`) along
//! `theta` and its short axis (`thickness`) perpendicular to it.

use glam::Vec2;

use crate::error::PhysicsError;
use crate::{spin_velocity, unit_from_angle, wrap_angle};

/// A rigid wall
///
/// Walls have infinite mass: collisions never change their motion. Only
/// integration and external drivers (see [`super::WallDriver`]) do.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    pub(crate) pos: Vec2,
    pub(crate) prev_pos: Vec2,
    pub(crate) vel: Vec2,
    pub(crate) acc: Vec2,
    /// Rotation angle, always in [0, 2π)
    pub(crate) theta: f32,
    pub(crate) prev_theta: f32,
    /// Angular velocity (radians/sec)
    pub(crate) omega: f32,
    length: f32,
    thickness: f32,
}

impl Wall {
    /// Create a stationary wall spinning at `omega`
    pub fn new(
        pos: Vec2,
        length: f32,
        thickness: f32,
        theta: f32,
        omega: f32,
    ) -> Result<Self, PhysicsError> {
        let valid = |v: f32| v > 0.0 && v.is_finite();
        if !valid(length) || !valid(thickness) {
            return Err(PhysicsError::InvalidExtent { length, thickness });
        }
        if !pos.is_finite() {
            return Err(PhysicsError::NonFinite("position"));
        }
        if !theta.is_finite() {
            return Err(PhysicsError::NonFinite("theta"));
        }
        if !omega.is_finite() {
            return Err(PhysicsError::NonFinite("omega"));
        }

        let theta = wrap_angle(theta);
        Ok(Self {
            pos,
            prev_pos: pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            theta,
            prev_theta: theta,
            omega,
            length,
            thickness,
        })
    }

    /// Give the wall an initial linear velocity
    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn prev_pos(&self) -> Vec2 {
        self.prev_pos
    }

    #[inline]
    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    #[inline]
    pub fn acc(&self) -> Vec2 {
        self.acc
    }

    #[inline]
    pub fn theta(&self) -> f32 {
        self.theta
    }

    #[inline]
    pub fn prev_theta(&self) -> f32 {
        self.prev_theta
    }

    #[inline]
    pub fn omega(&self) -> f32 {
        self.omega
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    #[inline]
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn set_acc(&mut self, acc: Vec2) {
        self.acc = acc;
    }

    pub fn set_omega(&mut self, omega: f32) {
        self.omega = omega;
    }

    /// Advance by one step of `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.prev_theta = self.theta;
        self.prev_pos = self.pos;

        self.theta = wrap_angle(self.theta + self.omega * dt);

        self.pos += self.vel * dt + 0.5 * self.acc * dt * dt;
        self.vel += self.acc * dt;
    }

    /// Unit vector along the long axis
    #[inline]
    pub fn axis(&self) -> Vec2 {
        unit_from_angle(self.theta)
    }

    /// Corner points in cyclic order
    pub fn vertices(&self) -> [Vec2; 4] {
        corners(self.pos, self.axis(), self.length, self.thickness)
    }

    /// True if `point` lies inside (or on) the rectangle
    pub fn contains_point(&self, point: Vec2) -> bool {
        let axis = self.axis();
        let local = point - self.pos;
        let along = local.dot(axis);
        let across = local.dot(axis.perp());
        along.abs() <= self.length / 2.0 && across.abs() <= self.thickness / 2.0
    }

    /// Velocity of the wall's material at `point`: translation plus ω × r
    pub fn point_velocity(&self, point: Vec2) -> Vec2 {
        self.vel + spin_velocity(self.omega, point - self.pos)
    }
}

/// Corners of an oriented rectangle centred on `center` with long axis `axis`
pub(crate) fn corners(center: Vec2, axis: Vec2, length: f32, thickness: f32) -> [Vec2; 4] {
    let half_len = axis * (length / 2.0);
    let half_thick = axis.perp() * (thickness / 2.0);
    [
        center - half_len - half_thick,
        center + half_len - half_thick,
        center + half_len + half_thick,
        center - half_len + half_thick,
    ]
}
