//! Bounce Lab entry point
//!
//! Runs the simulation headless at a fixed frame rate, driving it with a
//! short scripted input sequence. A windowed host would replace the script
//! with real events and hand `FrameData` to its renderer.

use std::path::Path;

use bounce_lab::SimConfig;
use bounce_lab::geometry::GeometrySet;
use bounce_lab::renderer::FrameData;
use bounce_lab::sim::{Command, Effect, HELP_TEXT, MouseButton, SimulationState, apply, step};

/// Headless run length in frames (10 s at 60 fps)
const DEMO_FRAMES: u64 = 600;
const FRAME_DT: f32 = 1.0 / 60.0;

/// (frame, command) pairs fed to the simulation
const SCRIPT: &[(u64, Command)] = &[
    (30, Command::CycleTrajectory),
    (60, Command::ToggleParticles),
    (90, Command::ToggleMultiObjects),
    (180, Command::CycleObject),
    (240, Command::CycleGrid),
    (300, Command::CycleTrajectory),
    (360, Command::SpeedUp),
    (420, Command::Launch),
    (480, Command::ToggleRainbow),
    (540, Command::Screenshot),
];

fn main() {
    env_logger::init();
    log::info!("Bounce Lab (headless) starting...");

    let config = SimConfig::load_or_default(Path::new(SimConfig::DEFAULT_PATH));
    let geometry = GeometrySet::load(Path::new("bunny.off"));

    let mut state = SimulationState::new(config);
    state.set_bunny_available(geometry.bunny_loaded());
    println!("{}", HELP_TEXT);

    let mut bounces = 0usize;
    let mut launches = 0usize;
    let mut peak_particles = 0usize;

    for frame in 0..DEMO_FRAMES {
        for &(at, command) in SCRIPT.iter().filter(|(at, _)| *at == frame) {
            match apply(&mut state, command) {
                Effect::None => {}
                Effect::Help => println!("{}", HELP_TEXT),
                Effect::Screenshot => {
                    log::info!("Screenshot requested at frame {}, no framebuffer when headless", at)
                }
                Effect::Quit => {
                    log::info!("Quit requested");
                    return;
                }
            }
        }
        if frame == 120 {
            // Exercise the mouse path too
            apply(&mut state, Command::from_mouse(MouseButton::Left));
        }

        let report = step(&mut state, FRAME_DT);
        bounces += report.ball_bounces + usize::from(report.primary_bounce.is_some());
        launches += usize::from(report.launched.is_some());
        peak_particles = peak_particles.max(state.particles.len());

        let frame_data = FrameData::build(&state);
        if geometry.mesh_for(frame_data.primary_kind).is_none() {
            log::warn!("No mesh for {:?}", frame_data.primary_kind);
        }
    }

    let p = &state.primary.body;
    log::info!(
        "Finished {} frames: {} bounces, {} timed launches, {} balls live, peak {} particles",
        DEMO_FRAMES,
        bounces,
        launches,
        state.balls.len(),
        peak_particles
    );
    println!(
        "Primary {} at ({:.1}, {:.1}) moving ({:.2}, {:.2}); trail {} points",
        state.primary.kind.as_str(),
        p.pos.x,
        p.pos.y,
        p.vel.x,
        p.vel.y,
        state.trajectory.len()
    );
}
