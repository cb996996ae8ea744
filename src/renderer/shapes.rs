//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled quad given its corners in cyclic order
pub fn quad(corners: [Vec2; 4], color: [f32; 4]) -> Vec<Vertex> {
    let [a, b, c, d] = corners;

    // Two triangles
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(d.x, d.y, color),
        Vertex::new(a.x, a.y, color),
    ]
}

/// Segment count that keeps a circle's edges roughly `max_edge` long
pub fn segments_for_radius(radius: f32, max_edge: f32) -> u32 {
    let circumference = 2.0 * PI * radius;
    ((circumference / max_edge.max(0.1)).ceil() as u32).clamp(8, 64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertex_count() {
        let v = circle(Vec2::new(1.0, 2.0), 3.0, [1.0; 4], 16);
        assert_eq!(v.len(), 48);
        assert_eq!(v[0].position, [1.0, 2.0]);
        assert!((v[1].position[0] - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_quad_triangles() {
        let corners = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        let v = quad(corners, [0.0; 4]);
        assert_eq!(v.len(), 6);
        assert_eq!(v[5].position, [0.0, 0.0]);
    }

    #[test]
    fn test_segments_for_radius() {
        assert_eq!(segments_for_radius(1.0, 10.0), 8);
        assert_eq!(segments_for_radius(1000.0, 1.0), 64);
        assert_eq!(segments_for_radius(20.0, 4.0), 32);
    }
}
