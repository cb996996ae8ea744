//! Scene initializer
//!
//! Builds a starting scene from a seed. Lives outside `sim` so the physics
//! core never touches an RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::{FRAC_PI_4, PI};

use crate::error::PhysicsError;
use crate::sim::{Ball, Bounds, Scene, Wall, WallDriver, ball_wall_contact};

/// Give up on a ball after this many rejected placements
const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

/// Parameters for a randomly filled scene
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    pub seed: u64,
    pub width: f32,
    pub height: f32,
    pub ball_count: usize,
    pub mass: f32,
    pub radius_range: (f32, f32),
    /// Each velocity component is drawn from [-max_speed, max_speed]
    pub max_speed: f32,
    pub gravity: Vec2,
    /// Reject placements overlapping balls already placed
    pub avoid_overlap: bool,
}

impl SceneBuilder {
    /// The classic demo: 200 balls and a spinning, spring-loaded bar in a 1920x1080 box
    pub fn demo(seed: u64) -> Self {
        Self {
            seed,
            width: 1920.0,
            height: 1080.0,
            ball_count: 200,
            mass: 5.0,
            radius_range: (18.0, 30.0),
            max_speed: 200.0,
            gravity: Vec2::new(0.0, 300.0),
            avoid_overlap: true,
        }
    }

    pub fn build(&self) -> Result<Scene, PhysicsError> {
        let bounds = Bounds::new(0.0, 0.0, self.width, self.height)?;
        let mut scene = Scene::new(bounds);
        let mut rng = Pcg32::seed_from_u64(self.seed);

        // Bar through the left half, sprung toward the middle horizontally
        let bar = scene.add_wall(Wall::new(
            Vec2::new(self.width / 4.0, self.height / 2.0 + 80.0),
            900.0,
            15.0,
            PI,
            FRAC_PI_4,
        )?);
        scene.drive_wall(
            bar,
            WallDriver::Spring {
                anchor: Vec2::new(self.width / 2.0, 0.0),
                stiffness: Vec2::new(0.5, 0.0),
            },
        )?;

        let (r_min, r_max) = self.radius_range;
        let mut skipped = 0;
        for _ in 0..self.ball_count {
            let radius = if r_max > r_min {
                rng.random_range(r_min..r_max)
            } else {
                r_min
            };
            let vel = Vec2::new(
                rng.random_range(-self.max_speed..=self.max_speed),
                rng.random_range(-self.max_speed..=self.max_speed),
            );
            let ball = Ball::new(Vec2::ZERO, vel, self.gravity, self.mass, radius)?;

            match self.place(&mut rng, &scene, ball) {
                Some(ball) => {
                    scene.add_ball(ball);
                }
                None => skipped += 1,
            }
        }

        // One heavier ball with its own gravity
        let heavy = Ball::new(
            Vec2::new(400.0, 450.0),
            Vec2::new(100.0, 10.0),
            Vec2::new(0.0, 250.0),
            10.0,
            20.0,
        )?;
        if self.is_clear(&scene, &heavy) {
            scene.add_ball(heavy);
        } else if let Some(heavy) = self.place(&mut rng, &scene, heavy) {
            scene.add_ball(heavy);
        } else {
            skipped += 1;
        }

        if skipped > 0 {
            log::warn!("Could not place {skipped} balls after {MAX_PLACEMENT_ATTEMPTS} attempts each");
        }
        log::info!(
            "Built scene (seed {}): {} balls, {} walls, {}x{}",
            self.seed,
            scene.balls().len(),
            scene.walls().len(),
            self.width,
            self.height
        );

        Ok(scene)
    }

    /// Rejection-sample a position for `ball` inside the box
    fn place(&self, rng: &mut Pcg32, scene: &Scene, mut ball: Ball) -> Option<Ball> {
        let r = ball.radius();
        if 2.0 * r >= self.width || 2.0 * r >= self.height {
            return None;
        }

        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let pos = Vec2::new(
                rng.random_range(r..self.width - r),
                rng.random_range(r..self.height - r),
            );
            ball.place(pos);
            if self.is_clear(scene, &ball) {
                return Some(ball);
            }
        }

        None
    }

    fn is_clear(&self, scene: &Scene, ball: &Ball) -> bool {
        let clear_of_walls = scene.walls().iter().all(|wall| {
            !wall.contains_point(ball.pos()) && ball_wall_contact(ball, wall).is_none()
        });
        let clear_of_balls =
            !self.avoid_overlap || scene.balls().iter().all(|other| !other.overlaps(ball));
        clear_of_walls && clear_of_balls
    }
}
