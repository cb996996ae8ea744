//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - No RNG (scenes arrive already placed)
//! - Stable iteration order (insertion order of balls and walls)
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod response;
pub mod scene;
pub mod stepper;
pub mod tick;
pub mod wall;

pub use ball::Ball;
pub use collision::{WallContact, ball_wall_contact, closest_point_on_segment};
pub use response::{resolve_ball_ball, resolve_ball_wall};
pub use scene::{BallId, Bounds, Scene, WallDriver, WallId};
pub use stepper::{FrameClock, Simulation};
pub use tick::{TickStats, tick};
pub use wall::Wall;
