//! Render sink that tessellates interpolated poses into triangles
//!
//! Produces a flat triangle list a GPU presenter can upload as-is
//! (`bytemuck::cast_slice`). No window or device code lives here.

use super::shapes::{circle, quad, segments_for_radius};
use super::vertex::{Vertex, colors};
use super::{BallPose, RenderSink, WallPose};

/// Collects one frame's worth of vertices
#[derive(Debug, Clone)]
pub struct MeshSink {
    vertices: Vec<Vertex>,
    /// Target edge length for circle tessellation (world units)
    pub max_edge: f32,
    pub ball_color: [f32; 4],
    pub wall_color: [f32; 4],
}

impl Default for MeshSink {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            max_edge: 4.0,
            ball_color: colors::BALL,
            wall_color: colors::WALL,
        }
    }
}

impl MeshSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex data as raw bytes, ready for a vertex buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl RenderSink for MeshSink {
    fn begin_frame(&mut self, _alpha: f32) {
        self.vertices.clear();
    }

    fn ball(&mut self, pose: &BallPose, alpha: f32) {
        let segments = segments_for_radius(pose.radius, self.max_edge);
        self.vertices
            .extend(circle(pose.blend(alpha), pose.radius, self.ball_color, segments));
    }

    fn wall(&mut self, pose: &WallPose, alpha: f32) {
        self.vertices
            .extend(quad(pose.corners(alpha), self.wall_color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_frame_is_rebuilt() {
        let mut sink = MeshSink::new();
        let ball = BallPose {
            prev_pos: Vec2::ZERO,
            pos: Vec2::new(2.0, 0.0),
            radius: 1.0,
        };
        let wall = WallPose {
            prev_pos: Vec2::ZERO,
            pos: Vec2::ZERO,
            prev_theta: 0.0,
            theta: 0.0,
            length: 10.0,
            thickness: 1.0,
        };

        for _ in 0..2 {
            sink.begin_frame(0.5);
            sink.wall(&wall, 0.5);
            sink.ball(&ball, 0.5);
            sink.end_frame();
        }

        // 6 for the wall, 8 segments * 3 for the ball, only the last frame kept
        assert_eq!(sink.vertices().len(), 6 + 24);
        assert_eq!(sink.vertices()[6].position, [1.0, 0.0]);
        assert_eq!(sink.as_bytes().len(), 30 * Vertex::STRIDE);
    }
}
