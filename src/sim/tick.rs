//! Per-frame simulation step
//!
//! Advances a session by a variable time delta. All motion is scaled by `dt`,
//! so the host may call this at any frame rate.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GamePhase, Session};

/// Input signals sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Flip gravity (honoured only when the cooldown has elapsed)
    pub flip: bool,
}

/// Advance the session by `dt` seconds. Does nothing outside `Playing`.
pub fn tick(session: &mut Session, input: &TickInput, dt: f32) {
    if session.phase != GamePhase::Playing {
        return;
    }

    session.elapsed += dt;

    session.player.update(input, &session.platforms, &session.tuning, dt);

    // Ghosts
    if session.ghost_spawner.tick(dt, session.ghosts.len()) {
        session.spawn_ghost();
    }
    let target = session.player.rect;
    for ghost in &mut session.ghosts {
        ghost.update(dt, &target, &session.tuning);
    }
    session.ghosts.retain(|g| !g.is_gone());

    // Orbs
    if session.orb_spawner.tick(dt, session.orbs.len()) {
        session.spawn_orb();
    }
    let time = session.elapsed;
    for orb in &mut session.orbs {
        orb.update(time, &session.tuning);
    }

    // Pickups: every overlapping orb scores, all in the same frame
    let before = session.orbs.len();
    session.orbs.retain(|o| !target.intersects(&o.rect));
    let collected = (before - session.orbs.len()) as u32;
    if collected > 0 {
        let gained = collected.saturating_mul(session.tuning.orb_score_value);
        session.score = session.score.saturating_add(gained);
        session.emit(GameEvent::OrbsCollected { count: collected });
        log::debug!("Collected {} orb(s), score {}", collected, session.score);
    }

    // Any ghost touching the player ends the run immediately
    if let Some(ghost) = session.ghosts.iter().find(|g| target.intersects(&g.rect)) {
        log::info!("Player caught by ghost {} - final score {}", ghost.id, session.score);
        session.phase = GamePhase::GameOver;
        session.emit(GameEvent::PlayerHit);
    }
}
