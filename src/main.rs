//! Crazy Gravity entry point
//!
//! Native headless driver: runs the simulation at a fixed 60 Hz with a simple
//! autopilot standing in for keyboard input, then prints the final frame as
//! JSON. Rendering and real audio output belong to a platform layer.

use std::time::{SystemTime, UNIX_EPOCH};

use crazy_gravity::sim::{Command, GamePhase, Session, TickInput, tick};
use crazy_gravity::{AudioManager, Settings};

/// Frame delta fed to the simulation
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up after this many seconds of play
const MAX_RUN_SECS: f32 = 120.0;
/// Flip away when a ghost gets this close
const DANGER_DISTANCE: f32 = 110.0;

fn main() {
    env_logger::init();
    log::info!("Crazy Gravity (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    let mut session = Session::with_tuning(seed, settings.tuning.clone());
    let mut audio = AudioManager::new(None, settings.sound_on);
    audio.start_music();
    log::info!("Game initialized with seed: {}", seed);

    session.apply(Command::Start);
    let mut frames = 0u32;
    while session.phase == GamePhase::Playing && session.elapsed < MAX_RUN_SECS {
        let input = autopilot(&session);
        tick(&mut session, &input, FRAME_DT);
        for event in session.drain_events() {
            audio.handle_event(&event);
        }
        frames += 1;
    }

    log::info!(
        "Run finished after {} frames ({:.1}s): score {}, phase {:?}",
        frames,
        session.elapsed,
        session.score,
        session.phase
    );

    match serde_json::to_string_pretty(&session.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not serialize final frame: {}", e),
    }

    session.apply(Command::ReturnToMenu);
}

/// Walk toward the nearest orb; flip gravity when a ghost gets close
fn autopilot(session: &Session) -> TickInput {
    let me = session.player.rect.center();

    let target_x = session
        .orbs
        .iter()
        .map(|o| o.pos)
        .min_by(|a, b| a.distance_squared(me).total_cmp(&b.distance_squared(me)))
        .map(|p| p.x);

    let threatened = session
        .ghosts
        .iter()
        .any(|g| g.rect.center().distance(me) < DANGER_DISTANCE);

    TickInput {
        left: target_x.is_some_and(|x| x < me.x - 4.0),
        right: target_x.is_some_and(|x| x > me.x + 4.0),
        flip: threatened,
    }
}
