//! Scene state
//!
//! Balls and walls live in flat arenas. Ids are indices and stay stable for
//! the life of the scene (nothing is removed mid-run).

use glam::Vec2;

use super::ball::Ball;
use super::wall::Wall;
use crate::error::PhysicsError;

/// Stable handle to a ball in a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BallId(usize);

impl BallId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Stable handle to a wall in a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallId(usize);

impl WallId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Axis-aligned confinement box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Box from its top-left corner and size (y grows downward, like screen space)
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Result<Self, PhysicsError> {
        let min = Vec2::new(left, top);
        let size = Vec2::new(width, height);
        if !min.is_finite() || !size.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(PhysicsError::InvalidBounds);
        }
        Ok(Self {
            min,
            max: min + size,
        })
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Per-tick forcing rule for a wall
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WallDriver {
    /// Acceleration is left alone
    #[default]
    Fixed,
    /// Restoring spring: `acc = -stiffness * (pos - anchor)`, per axis.
    /// A zero stiffness component leaves that axis free.
    Spring { anchor: Vec2, stiffness: Vec2 },
}

impl WallDriver {
    /// Set the wall's acceleration for the coming tick
    pub fn apply(&self, wall: &mut Wall) {
        match *self {
            WallDriver::Fixed => {}
            WallDriver::Spring { anchor, stiffness } => {
                wall.set_acc(-stiffness * (wall.pos() - anchor));
            }
        }
    }
}

/// Everything the physics core owns
#[derive(Debug, Clone)]
pub struct Scene {
    pub(crate) balls: Vec<Ball>,
    pub(crate) walls: Vec<Wall>,
    /// One driver per wall, same index
    pub(crate) drivers: Vec<WallDriver>,
    pub(crate) bounds: Bounds,
}

impl Scene {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            balls: Vec::new(),
            walls: Vec::new(),
            drivers: Vec::new(),
            bounds,
        }
    }

    pub fn add_ball(&mut self, ball: Ball) -> BallId {
        self.balls.push(ball);
        BallId(self.balls.len() - 1)
    }

    pub fn add_wall(&mut self, wall: Wall) -> WallId {
        self.walls.push(wall);
        self.drivers.push(WallDriver::Fixed);
        WallId(self.walls.len() - 1)
    }

    /// Attach a forcing rule to a wall (replaces any previous one)
    pub fn drive_wall(&mut self, id: WallId, driver: WallDriver) -> Result<(), PhysicsError> {
        let slot = self
            .drivers
            .get_mut(id.0)
            .ok_or(PhysicsError::UnknownWall(id))?;
        *slot = driver;
        Ok(())
    }

    /// Apply every wall driver once
    pub fn apply_drivers(&mut self) {
        for (wall, driver) in self.walls.iter_mut().zip(&self.drivers) {
            driver.apply(wall);
        }
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn ball(&self, id: BallId) -> Option<&Ball> {
        self.balls.get(id.0)
    }

    pub fn ball_mut(&mut self, id: BallId) -> Option<&mut Ball> {
        self.balls.get_mut(id.0)
    }

    pub fn wall(&self, id: WallId) -> Option<&Wall> {
        self.walls.get(id.0)
    }

    pub fn wall_mut(&mut self, id: WallId) -> Option<&mut Wall> {
        self.walls.get_mut(id.0)
    }

    /// Ids of every wall, in insertion order
    pub fn wall_ids(&self) -> impl Iterator<Item = WallId> + use<> {
        (0..self.walls.len()).map(WallId)
    }

    /// Ids of every ball, in insertion order
    pub fn ball_ids(&self) -> impl Iterator<Item = BallId> + use<> {
        (0..self.balls.len()).map(BallId)
    }

    pub fn driver(&self, id: WallId) -> Option<&WallDriver> {
        self.drivers.get(id.0)
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Total kinetic energy of all balls
    pub fn kinetic_energy(&self) -> f32 {
        self.balls.iter().map(Ball::kinetic_energy).sum()
    }

    /// Total linear momentum of all balls
    pub fn momentum(&self) -> Vec2 {
        self.balls.iter().map(Ball::momentum).sum()
    }
}
