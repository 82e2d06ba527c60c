//! Data-driven game balance
//!
//! Every value that shapes how the game plays lives here so it can be tweaked
//! from a JSON document without recompiling. Screen geometry stays in
//! [`crate::consts`].

use serde::{Deserialize, Serialize};

/// Balance values consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Gravity acceleration (pixels/s²)
    pub gravity_force: f32,
    /// Horizontal speed while a direction is held (pixels/s)
    pub move_speed: f32,
    /// Seconds before gravity can be flipped again
    pub flip_cooldown: f32,

    // === Ghosts ===
    pub ghost_spawn_interval: f32,
    /// Seconds a ghost chases before it leaves the screen
    pub ghost_lifetime: f32,
    pub ghost_chase_speed: f32,
    pub ghost_exit_speed: f32,
    pub ghost_max_count: usize,

    // === Orbs ===
    pub orb_spawn_interval: f32,
    pub orb_max_count: usize,
    pub orb_radius: f32,
    pub orb_score_value: u32,
    /// Pulse angular speed (radians/s)
    pub orb_pulse_speed: f32,
    /// Pulse size as a fraction of the base radius
    pub orb_pulse_amplitude: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity_force: 1800.0,
            move_speed: 300.0,
            flip_cooldown: 0.25,

            ghost_spawn_interval: 3.2,
            ghost_lifetime: 7.5,
            ghost_chase_speed: 140.0,
            ghost_exit_speed: 260.0,
            ghost_max_count: 3,

            orb_spawn_interval: 0.95,
            orb_max_count: 6,
            orb_radius: 10.0,
            orb_score_value: 1,
            orb_pulse_speed: 3.2,
            orb_pulse_amplitude: 0.35,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(json).map(Tuning::sanitized)
    }

    /// Clamp negative rates, speeds and sizes to zero
    pub fn sanitized(mut self) -> Self {
        for value in [
            &mut self.gravity_force,
            &mut self.move_speed,
            &mut self.flip_cooldown,
            &mut self.ghost_spawn_interval,
            &mut self.ghost_chase_speed,
            &mut self.ghost_exit_speed,
            &mut self.orb_spawn_interval,
            &mut self.orb_radius,
            &mut self.orb_pulse_speed,
        ] {
            if !value.is_finite() || *value < 0.0 {
                log::warn!("Ignoring invalid tuning value {}", value);
                *value = 0.0;
            }
        }
        self
    }
}
