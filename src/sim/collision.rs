//! Collision detection
//!
//! Ball-ball is a plain distance test (see [`Ball::overlaps`]). Ball-wall
//! finds the closest point on the wall's outline, edge by edge.

use glam::Vec2;

use super::ball::Ball;
use super::wall::Wall;
use crate::{direction, dot, magnitude};

/// A ball touching a wall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallContact {
    /// Closest point on the wall outline
    pub point: Vec2,
    /// Unit normal from the contact point toward the ball centre
    pub normal: Vec2,
    /// How far the ball has sunk into the wall (radius - distance)
    pub depth: f32,
}

/// Closest point to `p` on the segment `a`-`b`
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let Some(edge) = direction(b - a) else {
        return a; // Degenerate segment
    };
    let lambda = dot(p - a, edge).clamp(0.0, magnitude(b - a));
    a + edge * lambda
}

/// Check a ball against a wall
///
/// Returns `None` when the outline is farther than the ball radius. A ball
/// big enough to swallow the whole rectangle is not special-cased.
///
/// If the ball centre lies exactly on the outline there is no centre-to-point
/// direction; the closest edge's outward normal (away from the wall centre)
/// is used instead, so the ball is pushed out by its full radius.
pub fn ball_wall_contact(ball: &Ball, wall: &Wall) -> Option<WallContact> {
    let vertices = wall.vertices();
    let pos = ball.pos();

    let mut closest_point = vertices[0];
    let mut closest_distance = f32::MAX;
    let mut closest_edge = 0;

    for i in 0..vertices.len() {
        let v1 = vertices[i];
        let v2 = vertices[(i + 1) % vertices.len()];

        let point = closest_point_on_segment(pos, v1, v2);
        let distance = magnitude(pos - point);
        if distance < closest_distance {
            closest_distance = distance;
            closest_point = point;
            closest_edge = i;
        }
    }

    if closest_distance >= ball.radius() {
        return None;
    }

    let normal = match direction(pos - closest_point) {
        Some(normal) => normal,
        None => {
            // Ball centre sits exactly on the outline: fall back to the edge's outward normal
            let v1 = vertices[closest_edge];
            let v2 = vertices[(closest_edge + 1) % vertices.len()];
            let Some(perp) = direction((v2 - v1).perp()) else {
                log::trace!("Skipping wall contact with no usable normal");
                return None;
            };
            if dot(perp, closest_point - wall.pos()) < 0.0 {
                -perp
            } else {
                perp
            }
        }
    };

    Some(WallContact {
        point: closest_point,
        normal,
        depth: ball.radius() - closest_distance,
    })
}
