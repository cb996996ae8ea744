//! Rendering sink boundary
//!
//! The core never draws. Once per frame it hands each entity's previous and
//! current pose plus the interpolation fraction to a [`RenderSink`]; the sink
//! blends and presents them however it likes.

pub mod mesh;
pub mod shapes;
pub mod vertex;

pub use mesh::MeshSink;
pub use vertex::Vertex;

use glam::Vec2;

use crate::sim::{Ball, Wall};
use crate::{unit_from_angle, wrap_angle};

/// Receives interpolated poses from [`crate::sim::Simulation::render`]
pub trait RenderSink {
    fn begin_frame(&mut self, _alpha: f32) {}
    fn ball(&mut self, pose: &BallPose, alpha: f32);
    fn wall(&mut self, pose: &WallPose, alpha: f32);
    fn end_frame(&mut self) {}
}

/// Snapshot of a ball for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallPose {
    pub prev_pos: Vec2,
    pub pos: Vec2,
    pub radius: f32,
}

impl BallPose {
    /// Blended centre: `pos*α + prev_pos*(1-α)`
    pub fn blend(&self, alpha: f32) -> Vec2 {
        self.pos * alpha + self.prev_pos * (1.0 - alpha)
    }
}

impl From<&Ball> for BallPose {
    fn from(ball: &Ball) -> Self {
        Self {
            prev_pos: ball.prev_pos(),
            pos: ball.pos(),
            radius: ball.radius(),
        }
    }
}

/// Snapshot of a wall for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallPose {
    pub prev_pos: Vec2,
    pub pos: Vec2,
    pub prev_theta: f32,
    pub theta: f32,
    pub length: f32,
    pub thickness: f32,
}

impl WallPose {
    /// Blended centre and orientation
    ///
    /// The orientation is blended through the direction vectors rather than
    /// the raw angles, so a wrap from 2π back to 0 doesn't spin the wall the
    /// long way round.
    pub fn blend(&self, alpha: f32) -> (Vec2, f32) {
        let pos = self.pos * alpha + self.prev_pos * (1.0 - alpha);

        let dir = unit_from_angle(self.theta) * alpha + unit_from_angle(self.prev_theta) * (1.0 - alpha);
        let theta = if dir.length_squared() > f32::EPSILON {
            wrap_angle(dir.y.atan2(dir.x))
        } else {
            self.theta // Half-turn in one tick, no sensible midpoint
        };

        (pos, theta)
    }

    /// Blended corner points in cyclic order
    pub fn corners(&self, alpha: f32) -> [Vec2; 4] {
        let (pos, theta) = self.blend(alpha);
        crate::sim::wall::corners(pos, unit_from_angle(theta), self.length, self.thickness)
    }
}

impl From<&Wall> for WallPose {
    fn from(wall: &Wall) -> Self {
        Self {
            prev_pos: wall.prev_pos(),
            pos: wall.pos(),
            prev_theta: wall.prev_theta(),
            theta: wall.theta(),
            length: wall.length(),
            thickness: wall.thickness(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    fn pose(prev_theta: f32, theta: f32) -> WallPose {
        WallPose {
            prev_pos: Vec2::new(0.0, 0.0),
            pos: Vec2::new(10.0, 0.0),
            prev_theta,
            theta,
            length: 20.0,
            thickness: 2.0,
        }
    }

    #[test]
    fn test_ball_blend() {
        let pose = BallPose {
            prev_pos: Vec2::new(0.0, 0.0),
            pos: Vec2::new(4.0, -8.0),
            radius: 1.0,
        };
        assert_eq!(pose.blend(0.0), Vec2::ZERO);
        assert_eq!(pose.blend(1.0), Vec2::new(4.0, -8.0));
        assert_eq!(pose.blend(0.25), Vec2::new(1.0, -2.0));
    }

    #[test]
    fn test_wall_blend_across_wrap() {
        // Just below 2π to just above 0: midpoint is at 0, not at π
        let (pos, theta) = pose(TAU - 0.1, 0.1).blend(0.5);
        assert_eq!(pos, Vec2::new(5.0, 0.0));
        assert!(theta < 1e-4 || theta > TAU - 1e-4);
    }

    #[test]
    fn test_wall_blend_endpoints() {
        let p = pose(1.0, 1.2);
        assert!((p.blend(0.0).1 - 1.0).abs() < 1e-5);
        assert!((p.blend(1.0).1 - 1.2).abs() < 1e-5);
        let mid = p.blend(0.5).1;
        assert!((mid - 1.1).abs() < 1e-4);
    }

    #[test]
    fn test_wall_blend_half_turn_falls_back() {
        let (_, theta) = pose(0.0, std::f32::consts::PI).blend(0.5);
        assert!((theta - std::f32::consts::PI).abs() < 1e-5);
    }

    #[test]
    fn test_corners_follow_blend() {
        let corners = pose(0.0, 0.0).corners(0.5);
        assert!((corners[0] - Vec2::new(-5.0, -1.0)).length() < 1e-5);
        assert!((corners[2] - Vec2::new(15.0, 1.0)).length() < 1e-5);
    }
}
