//! Ball entity
//!
//! A non-rotating disk. Mass and radius are fixed at construction; position
//! and velocity change only through integration and collision response.

use glam::Vec2;

use super::scene::Bounds;
use crate::error::PhysicsError;
use crate::magnitude;

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub(crate) pos: Vec2,
    /// Position at the start of the last tick (render interpolation only)
    pub(crate) prev_pos: Vec2,
    pub(crate) vel: Vec2,
    pub(crate) acc: Vec2,
    mass: f32,
    radius: f32,
}

impl Ball {
    /// Create a ball, rejecting non-positive mass or radius
    pub fn new(pos: Vec2, vel: Vec2, acc: Vec2, mass: f32, radius: f32) -> Result<Self, PhysicsError> {
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(PhysicsError::InvalidMass(mass));
        }
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(PhysicsError::InvalidRadius(radius));
        }
        if !pos.is_finite() {
            return Err(PhysicsError::NonFinite("position"));
        }
        if !vel.is_finite() {
            return Err(PhysicsError::NonFinite("velocity"));
        }
        if !acc.is_finite() {
            return Err(PhysicsError::NonFinite("acceleration"));
        }

        Ok(Self {
            pos,
            prev_pos: pos,
            vel,
            acc,
            mass,
            radius,
        })
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
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_vel(&mut self, vel: Vec2) {
        self.vel = vel;
    }

    pub fn set_acc(&mut self, acc: Vec2) {
        self.acc = acc;
    }

    /// Teleport the ball (scene setup). Clears the interpolation history so
    /// the renderer doesn't streak it across the screen.
    pub fn place(&mut self, pos: Vec2) {
        self.pos = pos;
        self.prev_pos = pos;
    }

    /// Advance by one step of `dt` seconds
    ///
    /// Snapshots the current position first, then
    /// `pos += vel*dt + acc*dt²/2; vel += acc*dt`.
    pub fn integrate(&mut self, dt: f32) {
        self.prev_pos = self.pos;

        self.pos += self.vel * dt + 0.5 * self.acc * dt * dt;
        self.vel += self.acc * dt;
    }

    /// True if the two disks overlap (touching is not a collision)
    pub fn overlaps(&self, other: &Ball) -> bool {
        magnitude(other.pos - self.pos) < self.radius + other.radius
    }

    /// Keep the ball inside an axis-aligned box, bouncing with restitution `e`
    ///
    /// Each axis is handled on its own. Returns true if the ball was moved.
    pub fn confine(&mut self, bounds: &Bounds, e: f32) -> bool {
        let mut hit = false;

        if self.pos.x + self.radius > bounds.max.x {
            self.vel.x *= -e;
            self.pos.x = bounds.max.x - self.radius;
            hit = true;
        } else if self.pos.x - self.radius < bounds.min.x {
            self.vel.x *= -e;
            self.pos.x = bounds.min.x + self.radius;
            hit = true;
        }

        if self.pos.y + self.radius > bounds.max.y {
            self.vel.y *= -e;
            self.pos.y = bounds.max.y - self.radius;
            hit = true;
        } else if self.pos.y - self.radius < bounds.min.y {
            self.vel.y *= -e;
            self.pos.y = bounds.min.y + self.radius;
            hit = true;
        }

        hit
    }

    /// Render position, blended between the last two physics states
    pub fn interpolated_pos(&self, alpha: f32) -> Vec2 {
        self.pos * alpha + self.prev_pos * (1.0 - alpha)
    }

    pub fn momentum(&self) -> Vec2 {
        self.vel * self.mass
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.vel.length_squared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32, radius: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::ZERO, Vec2::ZERO, 1.0, radius).unwrap()
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert_eq!(
            Ball::new(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO, 0.0, 1.0),
            Err(PhysicsError::InvalidMass(0.0))
        );
        assert_eq!(
            Ball::new(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO, 1.0, -2.0),
            Err(PhysicsError::InvalidRadius(-2.0))
        );
        assert!(matches!(
            Ball::new(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO, f32::NAN, 1.0),
            Err(PhysicsError::InvalidMass(_))
        ));
        assert_eq!(
            Ball::new(Vec2::new(f32::INFINITY, 0.0), Vec2::ZERO, Vec2::ZERO, 1.0, 1.0),
            Err(PhysicsError::NonFinite("position"))
        );
    }

    #[test]
    fn test_falling_ball_one_step() {
        let dt = 0.0025;
        let mut ball =
            Ball::new(Vec2::new(0.0, 10.0), Vec2::ZERO, Vec2::new(0.0, 100.0), 1.0, 1.0).unwrap();
        ball.integrate(dt);

        assert!((ball.pos().y - (10.0 + 0.5 * 100.0 * dt * dt)).abs() < 1e-6);
        assert!((ball.vel().y - 100.0 * dt).abs() < 1e-6);
        assert_eq!(ball.prev_pos(), Vec2::new(0.0, 10.0));
    }

    #[test]
    fn test_overlap_touching_is_not_collision() {
        let a = ball_at(0.0, 0.0, 1.0);
        let b = ball_at(2.0, 0.0, 1.0);
        assert!(!a.overlaps(&b));
        let c = ball_at(1.9, 0.0, 1.0);
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_confine_bounces_off_edge() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0).unwrap();
        let mut ball = ball_at(99.0, 50.0, 5.0);
        ball.set_vel(Vec2::new(10.0, 3.0));

        assert!(ball.confine(&bounds, 0.6));
        assert_eq!(ball.pos().x, 95.0);
        assert!((ball.vel().x + 6.0).abs() < 1e-6);
        assert_eq!(ball.vel().y, 3.0);
    }

    #[test]
    fn test_confine_exactly_touching_is_unchanged() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0).unwrap();
        let mut ball = ball_at(5.0, 95.0, 5.0);
        ball.set_vel(Vec2::new(0.0, 0.0));
        let before = ball.clone();

        assert!(!ball.confine(&bounds, 0.6));
        assert_eq!(ball, before);
    }

    #[test]
    fn test_interpolated_pos() {
        let mut ball = ball_at(0.0, 0.0, 1.0);
        ball.set_vel(Vec2::new(400.0, 0.0));
        ball.integrate(0.01);
        assert!((ball.interpolated_pos(0.25).x - 1.0).abs() < 1e-5);
        assert_eq!(ball.interpolated_pos(0.0), Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_integrate_without_acceleration(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
            dt in 0.0f32..0.1,
        ) {
            let vel = Vec2::new(vx, vy);
            let mut ball = Ball::new(Vec2::new(x, y), vel, Vec2::ZERO, 1.0, 1.0).unwrap();
            ball.integrate(dt);

            let expected = Vec2::new(x, y) + vel * dt;
            prop_assert!((ball.pos() - expected).length() < 1e-3);
            prop_assert_eq!(ball.vel(), vel);
        }

        #[test]
        fn prop_overlap_is_symmetric(
            x1 in -50.0f32..50.0, y1 in -50.0f32..50.0, r1 in 0.1f32..20.0,
            x2 in -50.0f32..50.0, y2 in -50.0f32..50.0, r2 in 0.1f32..20.0,
        ) {
            let p = ball_at(x1, y1, r1);
            let q = ball_at(x2, y2, r2);
            prop_assert_eq!(p.overlaps(&q), q.overlaps(&p));
        }

        #[test]
        fn prop_confine_leaves_interior_ball_alone(
            x in 10.0f32..90.0,
            y in 10.0f32..90.0,
            vx in -100.0f32..100.0,
            vy in -100.0f32..100.0,
        ) {
            let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0).unwrap();
            let mut ball = ball_at(x, y, 10.0);
            ball.set_vel(Vec2::new(vx, vy));
            let before = ball.clone();

            prop_assert!(!ball.confine(&bounds, 0.6));
            prop_assert_eq!(ball, before);
        }
    }
}
