//! Fixed timestep driver
//!
//! Decouples the host's frame rate from the physics rate. Frame time goes
//! into an accumulator; whole physics ticks are drained from it; the
//! leftover fraction becomes the render interpolation factor.

use std::time::Instant;

use super::scene::Scene;
use super::tick::{TickStats, tick};
use crate::error::SettingsError;
use crate::renderer::{BallPose, RenderSink, WallPose};
use crate::settings::Settings;

/// Wall-clock frame timer for the host loop
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call (or since construction)
    pub fn restart(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        elapsed
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// A scene plus the accumulator that drives it
#[derive(Debug, Clone)]
pub struct Simulation {
    scene: Scene,
    settings: Settings,
    /// Unconsumed simulated time, always in [0, timestep) between frames
    accumulator: f32,
    /// Interpolation fraction from the last `advance`
    alpha: f32,
    ticks: u64,
    stats: TickStats,
}

impl Simulation {
    pub fn new(scene: Scene, settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        log::info!(
            "Simulation ready: {} balls, {} walls, dt = {:.5}s",
            scene.balls().len(),
            scene.walls().len(),
            settings.timestep
        );
        Ok(Self {
            scene,
            settings,
            accumulator: 0.0,
            alpha: 0.0,
            ticks: 0,
            stats: TickStats::default(),
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Physics ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Contact counts accumulated over all ticks
    pub fn stats(&self) -> TickStats {
        self.stats
    }

    /// Interpolation fraction from the last `advance`, in [0, 1)
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Feed one frame's elapsed time and run every whole tick it pays for
    ///
    /// Frame time is capped at `max_frame_time` so a stall (window drag,
    /// debugger, sleep) doesn't turn into a burst of catch-up ticks.
    /// Returns the interpolation fraction for rendering.
    pub fn advance(&mut self, frame_time: f32) -> f32 {
        let frame_time = if frame_time.is_nan() || frame_time < 0.0 {
            log::debug!("Ignoring invalid frame time {frame_time}");
            0.0
        } else if frame_time > self.settings.max_frame_time {
            log::warn!(
                "Frame took {:.3}s, clamping to {:.3}s",
                frame_time,
                self.settings.max_frame_time
            );
            self.settings.max_frame_time
        } else {
            frame_time
        };

        self.accumulator += frame_time;

        let dt = self.settings.timestep;
        let mut steps = 0u32;
        while self.accumulator >= dt {
            self.stats += tick(&mut self.scene, &self.settings, dt);
            self.accumulator -= dt;
            self.ticks += 1;
            steps += 1;
        }

        self.alpha = (self.accumulator / dt).clamp(0.0, 1.0);
        log::debug!(
            "Frame: {} ticks (total {}), alpha = {:.3}",
            steps,
            self.ticks,
            self.alpha
        );
        self.alpha
    }

    /// Push every entity's previous and current pose to the sink
    pub fn render<S: RenderSink>(&self, sink: &mut S) {
        sink.begin_frame(self.alpha);
        for wall in self.scene.walls() {
            sink.wall(&WallPose::from(wall), self.alpha);
        }
        for ball in self.scene.balls() {
            sink.ball(&BallPose::from(ball), self.alpha);
        }
        sink.end_frame();
    }
}
