//! Collision response
//!
//! Impulse-based bounces with restitution and a Coulomb-style friction kick.
//! The friction impulse is scaled by the normal impulse just applied, which
//! stands in for the normal force.

use super::ball::Ball;
use super::collision::WallContact;
use super::wall::Wall;
use crate::settings::Material;
use crate::{direction, dot, magnitude};

/// Bounce two overlapping balls off each other
///
/// Both balls change: normal velocities are exchanged with restitution,
/// friction opposes relative sliding, and the pair is pushed apart along the
/// centre line until they just touch. Coincident centres give no normal,
/// so nothing happens.
pub fn resolve_ball_ball(p: &mut Ball, q: &mut Ball, material: Material) {
    let Material {
        restitution: e,
        friction: mu,
    } = material;

    let (rp, rq) = (p.pos, q.pos);
    let (vp, vq) = (p.vel, q.vel);
    let (mp, mq) = (p.mass(), q.mass());
    let total = mp + mq;

    // Normal from q to p
    let Some(normal) = direction(rp - rq) else {
        log::trace!("Skipping ball-ball response: coincident centres at {rp}");
        return;
    };

    let vp_n = dot(vp, normal);
    let vq_n = dot(vq, normal);

    // 1D restitution collision along the normal
    let vp_n_new = (vp_n * (mp - e * mq) + vq_n * mq * (1.0 + e)) / total;
    let vq_n_new = (vq_n * (mq - e * mp) + vp_n * mp * (1.0 + e)) / total;

    let mut vp_new = vp + normal * (vp_n_new - vp_n);
    let mut vq_new = vq + normal * (vq_n_new - vq_n);

    // Friction opposes the pre-collision relative sliding
    let rel = vp - vq;
    if let Some(tangent) = direction(rel - dot(rel, normal) * normal) {
        let impulse_p = (vp_n_new - vp_n).abs();
        let impulse_q = (vq_n_new - vq_n).abs();
        vp_new -= mu * impulse_p * tangent;
        vq_new += mu * impulse_q * tangent;
    }

    p.vel = vp_new;
    q.vel = vq_new;

    // Split the overlap evenly so they just touch
    let push = 0.5 * ((p.radius() + q.radius()) - magnitude(rq - rp));
    p.pos = rp + normal * push;
    q.pos = rq - normal * push;

    log::trace!("Ball-ball contact resolved, overlap {:.4}", 2.0 * push);
}

/// Bounce a ball off a wall
///
/// The wall has infinite mass but moves: the bounce is taken relative to the
/// velocity of the wall material at the contact point (translation plus spin).
/// Only the ball changes.
pub fn resolve_ball_wall(ball: &mut Ball, wall: &Wall, contact: &WallContact, material: Material) {
    let Material {
        restitution: e,
        friction: mu,
    } = material;
    let normal = contact.normal;
    let vel = ball.vel;

    let contact_vel = wall.point_velocity(contact.point);

    // Direction of sliding relative to the surface (none if hitting square on)
    let rel = vel - contact_vel;
    let tangent = direction(rel - dot(rel, normal) * normal);

    let vel_n = dot(vel, normal);
    let contact_vel_n = dot(contact_vel, normal);

    // Zero the normal component, then bounce relative to the moving surface
    let normal_change = -vel_n + (1.0 + e) * contact_vel_n - e * vel_n;
    let mut new_vel = vel + normal * normal_change;

    if let Some(tangent) = tangent {
        new_vel -= mu * normal_change.abs() * tangent;

        // Friction may stop sliding within a tick but never reverse it
        let slide = dot(new_vel - contact_vel, tangent);
        if slide < 0.0 {
            new_vel -= slide * tangent;
        }
    }

    ball.vel = new_vel;
    ball.pos += normal * contact.depth;

    log::trace!(
        "Ball-wall contact at {}, depth {:.4}",
        contact.point,
        contact.depth
    );
}
