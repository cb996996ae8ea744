//! Fixed timestep simulation tick
//!
//! Advances the scene by exactly one physics step. Order matters and is
//! fixed: drivers, integration, ball-wall contacts, ball-ball contacts,
//! boundary confinement. Within each pass entities go in insertion order.

use super::ball::Ball;
use super::collision::ball_wall_contact;
use super::response::{resolve_ball_ball, resolve_ball_wall};
use super::scene::Scene;
use crate::settings::Settings;

/// Contact counts from one tick (diagnostics only)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    pub wall_contacts: u32,
    pub ball_contacts: u32,
    pub boundary_hits: u32,
}

impl std::ops::AddAssign for TickStats {
    fn add_assign(&mut self, rhs: Self) {
        self.wall_contacts += rhs.wall_contacts;
        self.ball_contacts += rhs.ball_contacts;
        self.boundary_hits += rhs.boundary_hits;
    }
}

/// Advance the scene by one fixed timestep
pub fn tick(scene: &mut Scene, settings: &Settings, dt: f32) -> TickStats {
    let mut stats = TickStats::default();

    scene.apply_drivers();

    for ball in &mut scene.balls {
        ball.integrate(dt);
    }
    for wall in &mut scene.walls {
        wall.update(dt);
    }

    // Wall contacts first, for every ball against every wall
    for ball in &mut scene.balls {
        for wall in &scene.walls {
            if let Some(contact) = ball_wall_contact(ball, wall) {
                resolve_ball_wall(ball, wall, &contact, settings.ball_wall);
                stats.wall_contacts += 1;
            }
        }
    }

    // Then each unordered ball pair once
    for i in 1..scene.balls.len() {
        for j in 0..i {
            let (p, q) = pair_mut(&mut scene.balls, i, j);
            if p.overlaps(q) {
                resolve_ball_ball(p, q, settings.ball_ball);
                stats.ball_contacts += 1;
            }
        }
    }

    let bounds = scene.bounds;
    for ball in &mut scene.balls {
        if ball.confine(&bounds, settings.boundary_restitution) {
            stats.boundary_hits += 1;
        }
    }

    stats
}

/// Two distinct balls borrowed mutably, `j < i`
fn pair_mut(balls: &mut [Ball], i: usize, j: usize) -> (&mut Ball, &mut Ball) {
    debug_assert!(j < i);
    let (head, tail) = balls.split_at_mut(i);
    (&mut tail[0], &mut head[j])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::scene::{Bounds, WallDriver};
    use crate::sim::wall::Wall;
    use glam::Vec2;

    fn big_scene() -> Scene {
        Scene::new(Bounds::new(-1000.0, -1000.0, 2000.0, 2000.0).unwrap())
    }

    #[test]
    fn test_falling_ball() {
        let mut scene = big_scene();
        let id = scene.add_ball(
            Ball::new(Vec2::ZERO, Vec2::ZERO, Vec2::new(0.0, 100.0), 1.0, 1.0).unwrap(),
        );
        let dt = 0.0025;

        tick(&mut scene, &Settings::default(), dt);

        let ball = scene.ball(id).unwrap();
        assert!((ball.pos().y - 0.5 * 100.0 * dt * dt).abs() < 1e-7);
        assert!((ball.vel().y - 100.0 * dt).abs() < 1e-6);
    }

    #[test]
    fn test_head_on_collision_swaps_velocities() {
        let mut scene = big_scene();
        let a = scene.add_ball(
            Ball::new(Vec2::new(-1.01, 0.0), Vec2::new(5.0, 0.0), Vec2::ZERO, 1.0, 1.0).unwrap(),
        );
        let b = scene.add_ball(
            Ball::new(Vec2::new(1.01, 0.0), Vec2::new(-5.0, 0.0), Vec2::ZERO, 1.0, 1.0).unwrap(),
        );
        let settings = Settings::elastic();

        let mut stats = TickStats::default();
        for _ in 0..4 {
            stats += tick(&mut scene, &settings, settings.timestep);
        }

        assert_eq!(stats.ball_contacts, 1);
        assert!((scene.ball(a).unwrap().vel() - Vec2::new(-5.0, 0.0)).length() < 1e-4);
        assert!((scene.ball(b).unwrap().vel() - Vec2::new(5.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_each_pair_resolved_once() {
        let mut scene = big_scene();
        for x in [0.0, 1.5, 3.0] {
            scene.add_ball(Ball::new(Vec2::new(x, 0.0), Vec2::ZERO, Vec2::ZERO, 1.0, 1.0).unwrap());
        }
        let stats = tick(&mut scene, &Settings::default(), 0.0);
        // (1,0) overlaps, (2,0) does not, (2,1) overlaps even after the first push
        assert_eq!(stats.ball_contacts, 2);
    }

    #[test]
    fn test_ball_rests_on_wall() {
        let mut scene = big_scene();
        scene.add_wall(Wall::new(Vec2::new(0.0, 50.0), 200.0, 10.0, 0.0, 0.0).unwrap());
        let id = scene.add_ball(
            Ball::new(Vec2::new(0.0, 30.0), Vec2::ZERO, Vec2::new(0.0, 300.0), 1.0, 10.0).unwrap(),
        );
        let settings = Settings::default();

        for _ in 0..2000 {
            tick(&mut scene, &settings, settings.timestep);
        }

        // Wall top face is at y = 45; the ball settles on it without sinking through
        let ball = scene.ball(id).unwrap();
        assert!(ball.pos().y <= 35.0 + 0.1);
        assert!(ball.pos().y > 30.0);
        assert!(ball.vel().y.abs() < 5.0);
    }

    #[test]
    fn test_confinement_runs_last() {
        let mut scene = Scene::new(Bounds::new(0.0, 0.0, 100.0, 100.0).unwrap());
        let id = scene.add_ball(
            Ball::new(Vec2::new(95.0, 50.0), Vec2::new(1000.0, 0.0), Vec2::ZERO, 1.0, 5.0).unwrap(),
        );
        let stats = tick(&mut scene, &Settings::default(), 0.01);

        assert_eq!(stats.boundary_hits, 1);
        let ball = scene.ball(id).unwrap();
        assert_eq!(ball.pos().x, 95.0);
        assert!((ball.vel().x + 600.0).abs() < 1e-3);
    }

    #[test]
    fn test_driver_applied_before_integration() {
        let mut scene = big_scene();
        let id = scene.add_wall(Wall::new(Vec2::new(10.0, 0.0), 20.0, 2.0, 0.0, 0.0).unwrap());
        scene
            .drive_wall(
                id,
                WallDriver::Spring {
                    anchor: Vec2::ZERO,
                    stiffness: Vec2::new(4.0, 0.0),
                },
            )
            .unwrap();

        tick(&mut scene, &Settings::default(), 0.1);

        let wall = scene.wall(id).unwrap();
        assert!((wall.vel().x + 4.0).abs() < 1e-5);
        assert!((wall.pos().x - 9.8).abs() < 1e-5);
    }
}
