//! Wall Dynamics entry point
//!
//! Headless native host: builds the demo scene, then runs the frame loop
//! (measure, advance, render to a mesh sink) for a fixed wall-clock span.

use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use wall_dynamics::Settings;
use wall_dynamics::renderer::{MeshSink, RenderSink};
use wall_dynamics::setup::SceneBuilder;
use wall_dynamics::sim::{FrameClock, Simulation};

/// Target presentation rate of the host loop
const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / 60);
/// How long the demo runs
const RUN_TIME: Duration = Duration::from_secs(10);

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Wall Dynamics (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Failed to load settings from {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    log::info!("Scene seed: {seed}");
    let scene = match SceneBuilder::demo(seed).build() {
        Ok(scene) => scene,
        Err(e) => {
            log::error!("Failed to build scene: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut sim = match Simulation::new(scene, settings) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("Invalid settings: {e}");
            return ExitCode::FAILURE;
        }
    };

    run(&mut sim, &mut MeshSink::new());

    let stats = sim.stats();
    log::info!(
        "Done: {} ticks, {} wall contacts, {} ball contacts, {} boundary hits",
        sim.ticks(),
        stats.wall_contacts,
        stats.ball_contacts,
        stats.boundary_hits
    );
    ExitCode::SUCCESS
}

/// The host frame loop
fn run(sim: &mut Simulation, sink: &mut impl RenderSink) {
    let start = Instant::now();
    let mut clock = FrameClock::new();
    let mut last_report = start;

    while start.elapsed() < RUN_TIME {
        let frame_start = Instant::now();

        sim.advance(clock.restart());
        sim.render(sink);

        if last_report.elapsed() >= Duration::from_secs(1) {
            let scene = sim.scene();
            log::info!(
                "t = {:.1}s, ticks = {}, kinetic energy = {:.0}, momentum = {}",
                start.elapsed().as_secs_f32(),
                sim.ticks(),
                scene.kinetic_energy(),
                scene.momentum()
            );
            last_report = Instant::now();
        }

        if let Some(rest) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}
