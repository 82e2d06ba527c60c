//! Sprite animation state
//!
//! The simulation only tracks which frame should be shown. Frames are
//! identified by a [`FrameId`] built from enumerated parts (sheet variant,
//! animation, index) instead of formatted strings; the renderer turns that
//! into an asset key with [`FrameId::asset_key`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sign_outside_deadzone;

/// Horizontal facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// Facing implied by a horizontal velocity, `None` inside the deadzone
    pub fn from_velocity(vx: f32) -> Option<Self> {
        sign_outside_deadzone(vx, MOVEMENT_DEADZONE).map(|s| if s > 0.0 { Facing::Right } else { Facing::Left })
    }
}

/// Which screen edge gravity currently pulls toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GravityDir {
    /// Toward increasing y (the floor)
    #[default]
    Down,
    /// Toward the ceiling
    Up,
}

impl GravityDir {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            GravityDir::Down => 1.0,
            GravityDir::Up => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            GravityDir::Down => GravityDir::Up,
            GravityDir::Up => GravityDir::Down,
        }
    }
}

/// Animation names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimName {
    Idle,
    Walk,
    Move,
}

/// Playback parameters for one animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub frame_count: usize,
    /// Frames per second
    pub fps: f32,
}

pub const PLAYER_ANIMATIONS: &[(AnimName, Animation)] = &[
    (
        AnimName::Idle,
        Animation {
            frame_count: PLAYER_IDLE_FRAMES,
            fps: PLAYER_IDLE_FPS,
        },
    ),
    (
        AnimName::Walk,
        Animation {
            frame_count: PLAYER_WALK_FRAMES,
            fps: PLAYER_WALK_FPS,
        },
    ),
];

pub const ENEMY_ANIMATIONS: &[(AnimName, Animation)] = &[(
    AnimName::Move,
    Animation {
        frame_count: ENEMY_FRAMES,
        fps: ENEMY_FPS,
    },
)];

/// Which set of frames an animation draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteVariant {
    Player { facing: Facing, gravity: GravityDir },
    Enemy { facing: Facing },
}

impl SpriteVariant {
    /// Pixel size of one frame of this sheet
    pub fn frame_size(self) -> Vec2 {
        let (w, h) = match self {
            SpriteVariant::Player { .. } => PLAYER_FRAME_SIZE,
            SpriteVariant::Enemy { .. } => ENEMY_FRAME_SIZE,
        };
        Vec2::new(w, h)
    }
}

/// Identifies a single frame for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameId {
    pub variant: SpriteVariant,
    pub anim: AnimName,
    pub index: usize,
}

impl FrameId {
    /// Asset key of the frame image, e.g. `player/player_walk_ru_3`
    pub fn asset_key(&self) -> String {
        let anim = match self.anim {
            AnimName::Idle => "idle",
            AnimName::Walk => "walk",
            AnimName::Move => "move",
        };
        match self.variant {
            SpriteVariant::Player { facing, gravity } => {
                let lr = match facing {
                    Facing::Right => 'r',
                    Facing::Left => 'l',
                };
                let du = match gravity {
                    GravityDir::Down => 'd',
                    GravityDir::Up => 'u',
                };
                format!("player/player_{anim}_{lr}{du}_{}", self.index)
            }
            SpriteVariant::Enemy { facing } => {
                let side = match facing {
                    Facing::Right => "right",
                    Facing::Left => "left",
                };
                format!("enemy/enemy_{side}_{}", self.index)
            }
        }
    }
}

/// Animation playback state, owned by the entity it animates
#[derive(Debug, Clone)]
pub struct AnimatedSprite {
    animations: &'static [(AnimName, Animation)],
    anim: AnimName,
    variant: SpriteVariant,
    frame_index: usize,
    /// Seconds accumulated toward the next frame
    acc: f32,
}

impl AnimatedSprite {
    /// `default_anim` must be one of `animations`
    pub fn new(animations: &'static [(AnimName, Animation)], default_anim: AnimName, variant: SpriteVariant) -> Self {
        debug_assert!(animations.iter().any(|(name, _)| *name == default_anim));
        Self {
            animations,
            anim: default_anim,
            variant,
            frame_index: 0,
            acc: 0.0,
        }
    }

    fn animation(&self) -> Option<&Animation> {
        self.animations
            .iter()
            .find(|(name, _)| *name == self.anim)
            .map(|(_, animation)| animation)
    }

    pub fn anim(&self) -> AnimName {
        self.anim
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn variant(&self) -> SpriteVariant {
        self.variant
    }

    /// Switch animation; restarts playback unless it is already active
    pub fn set_anim(&mut self, name: AnimName) {
        if name == self.anim {
            return;
        }
        if !self.animations.iter().any(|(n, _)| *n == name) {
            log::warn!("Unknown animation {:?} ignored", name);
            return;
        }
        self.anim = name;
        self.frame_index = 0;
        self.acc = 0.0;
    }

    /// Swap the frame set (facing/gravity changed). Playback position is kept.
    pub fn set_variant(&mut self, variant: SpriteVariant) {
        self.variant = variant;
    }

    /// Advance playback. Several frames may be stepped in one slow tick.
    pub fn update(&mut self, dt: f32) {
        let Some(&Animation { frame_count, fps }) = self.animation() else {
            return;
        };
        if fps <= 0.0 || frame_count <= 1 {
            return;
        }

        let frame_time = 1.0 / fps;
        self.acc += dt;
        while self.acc >= frame_time {
            self.acc -= frame_time;
            self.frame_index = (self.frame_index + 1) % frame_count;
        }
    }

    pub fn current_frame(&self) -> FrameId {
        FrameId {
            variant: self.variant,
            anim: self.anim,
            index: self.frame_index,
        }
    }

    pub fn frame_size(&self) -> Vec2 {
        self.variant.frame_size()
    }
}
