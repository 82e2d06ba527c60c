//! Spawn timing and placement for ghosts and orbs

use glam::Vec2;
use rand::Rng;

use super::anim::Facing;
use super::collision::first_overlap;
use super::orb::Orb;
use super::rect::Rect;
use crate::consts::*;
use crate::screen_center;

/// Countdown that fires a spawn whenever the population is below its cap
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnTimer {
    pub interval: f32,
    pub remaining: f32,
    pub cap: usize,
}

impl SpawnTimer {
    /// A timer that fires on its first tick
    pub fn new(interval: f32, cap: usize) -> Self {
        Self {
            interval,
            remaining: 0.0,
            cap,
        }
    }

    /// Count down; returns true (and restarts) when a spawn should happen.
    ///
    /// While capped the timer keeps running below zero, so the next spawn
    /// happens as soon as there is room.
    pub fn tick(&mut self, dt: f32, population: usize) -> bool {
        self.remaining -= dt;
        if self.remaining <= 0.0 && population < self.cap {
            self.remaining = self.interval;
            true
        } else {
            false
        }
    }
}

/// Entry point just off a random side, at a random height
pub fn ghost_spawn_point(rng: &mut impl Rng) -> (Vec2, Facing) {
    let y = rng.random_range(GHOST_SPAWN_MARGIN_Y..=HEIGHT as i32 - GHOST_SPAWN_MARGIN_Y) as f32;
    if rng.random_bool(0.5) {
        (Vec2::new(-GHOST_SPAWN_OFFSET, y), Facing::Right)
    } else {
        (Vec2::new(WIDTH + GHOST_SPAWN_OFFSET, y), Facing::Left)
    }
}

/// Pick an orb position clear of the platforms and the player.
///
/// Tries a bounded number of random candidates; if none is clear, falls
/// back to the screen center so a spawn always succeeds.
pub fn random_orb_position(rng: &mut impl Rng, platforms: &[Rect], player: &Rect, radius: f32) -> Vec2 {
    let min_x = EDGE_BARRIER_MARGIN as i32 + ORB_SPAWN_MARGIN;
    let max_x = (WIDTH - EDGE_BARRIER_MARGIN) as i32 - ORB_SPAWN_MARGIN;
    let min_y = ORB_SPAWN_MARGIN;
    let max_y = HEIGHT as i32 - ORB_SPAWN_MARGIN;

    for _ in 0..ORB_SPAWN_ATTEMPTS {
        let candidate = Vec2::new(rng.random_range(min_x..=max_x) as f32, rng.random_range(min_y..=max_y) as f32);
        let bounds = Orb::bounds_at(candidate, radius);

        let blocked = first_overlap(&bounds, platforms).is_some() || bounds.intersects(player);
        if !blocked {
            return candidate;
        }
    }

    log::debug!("No clear orb position after {} attempts, using screen center", ORB_SPAWN_ATTEMPTS);
    screen_center()
}
