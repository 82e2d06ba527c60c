//! Crazy Gravity - A single-screen gravity-flipping arcade platformer
//!
//! Core modules:
//! - `sim`: Simulation (player physics, ghosts, orbs, session flow)
//! - `audio`: Audio collaborator driven by simulation events
//! - `settings`: User preferences persisted as JSON
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use audio::{AudioBackend, AudioManager, SoundEffect};
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions
    pub const WIDTH: f32 = 960.0;
    pub const HEIGHT: f32 = 540.0;

    /// Width of the hard walls on both sides of the screen
    pub const EDGE_BARRIER_MARGIN: f32 = 100.0;

    /// Platforms (two, centered, above and below the vertical center)
    pub const PLATFORM_WIDTH: f32 = 320.0;
    pub const PLATFORM_HEIGHT: f32 = 18.0;
    pub const PLATFORM_OFFSET_Y: f32 = 90.0;

    /// Player spawn: this far right of the left barrier, standing on the floor
    pub const PLAYER_SPAWN_INSET: f32 = 20.0;
    pub const PLAYER_HITBOX_SCALE: f32 = 0.85;
    pub const GHOST_HITBOX_SCALE: f32 = 0.62;

    /// Horizontal speeds at or below this don't change facing
    pub const MOVEMENT_DEADZONE: f32 = 1.0;
    /// Ghosts closer than this to their target stop moving
    pub const CHASE_EPSILON: f32 = 0.001;

    /// Ghosts spawn this far outside the screen edge
    pub const GHOST_SPAWN_OFFSET: f32 = 120.0;
    pub const GHOST_SPAWN_MARGIN_Y: i32 = 60;
    /// Ghosts are removed once this far past either screen edge
    pub const GHOST_GONE_MARGIN: f32 = 140.0;

    /// Orb placement window (inset from the barriers and from top/bottom)
    pub const ORB_SPAWN_MARGIN: i32 = 40;
    pub const ORB_SPAWN_ATTEMPTS: u32 = 25;

    /// Animation playback
    pub const PLAYER_IDLE_FPS: f32 = 10.0;
    pub const PLAYER_IDLE_FRAMES: usize = 11;
    pub const PLAYER_WALK_FPS: f32 = 14.0;
    pub const PLAYER_WALK_FRAMES: usize = 12;
    pub const ENEMY_FPS: f32 = 12.0;
    pub const ENEMY_FRAMES: usize = 10;

    /// Pixel size of one source frame per sprite sheet
    pub const PLAYER_FRAME_SIZE: (f32, f32) = (48.0, 64.0);
    pub const ENEMY_FRAME_SIZE: (f32, f32) = (96.0, 96.0);
}

/// Center of the screen, snapped to whole pixels
#[inline]
pub fn screen_center() -> Vec2 {
    Vec2::new((consts::WIDTH / 2.0).floor(), (consts::HEIGHT / 2.0).floor())
}

/// Sign of a value with a deadzone: `Some(1.0)`/`Some(-1.0)` outside it, `None` inside
#[inline]
pub fn sign_outside_deadzone(value: f32, deadzone: f32) -> Option<f32> {
    if value > deadzone {
        Some(1.0)
    } else if value < -deadzone {
        Some(-1.0)
    } else {
        None
    }
}
