//! Collectible orbs
//!
//! The pulse only changes the drawn size. Pickup uses the square fixed at
//! spawn time, so a shrinking orb is never harder to grab.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::rect::Rect;
use crate::tuning::Tuning;

/// A collectible orb
#[derive(Debug, Clone)]
pub struct Orb {
    pub id: u32,
    pub pos: Vec2,
    pub base_radius: f32,
    /// Pulse phase offset so orbs don't throb in unison
    pub phase: f32,
    /// Radius to draw this frame
    pub visual_radius: f32,
    /// Pickup area, fixed for the orb's lifetime
    pub rect: Rect,
}

impl Orb {
    pub fn new(id: u32, pos: Vec2, radius: f32, rng: &mut impl Rng) -> Self {
        Self {
            id,
            pos,
            base_radius: radius,
            phase: rng.random_range(0.0..TAU),
            visual_radius: radius,
            rect: Self::bounds_at(pos, radius),
        }
    }

    /// Pickup square for an orb of `radius` centered at `pos`
    pub fn bounds_at(pos: Vec2, radius: f32) -> Rect {
        let d = (radius * 2.0).floor();
        Rect::from_center(pos.floor(), Vec2::splat(d))
    }

    /// Recompute the pulse for the given session time
    pub fn update(&mut self, time: f32, tuning: &Tuning) {
        let pulse = 1.0 + tuning.orb_pulse_amplitude * (time * tuning.orb_pulse_speed + self.phase).sin();
        self.visual_radius = self.base_radius * pulse;
    }
}
