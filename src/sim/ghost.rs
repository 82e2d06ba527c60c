//! Ghosts: enemies that chase the player for a while, then leave
//!
//! A ghost starts in [`GhostMode::Chase`], steering straight at its target.
//! When its lifetime runs out it switches to [`GhostMode::Exit`] and flies
//! off the nearest side of the screen. Exit is terminal.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::{AnimName, AnimatedSprite, ENEMY_ANIMATIONS, Facing, SpriteVariant};
use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Ghost behavior phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GhostMode {
    /// Steering toward the target
    Chase,
    /// Leaving the screen in a fixed direction
    Exit(Facing),
}

/// A ghost entity
#[derive(Debug, Clone)]
pub struct Ghost {
    pub id: u32,
    pub rect: Rect,
    pub mode: GhostMode,
    pub facing: Facing,
    /// Seconds of chasing left
    pub life: f32,
    pub sprite: AnimatedSprite,
}

impl Ghost {
    /// Create a ghost centered on `center`
    pub fn new(id: u32, center: Vec2, facing: Facing, lifetime: f32) -> Self {
        let sprite = AnimatedSprite::new(ENEMY_ANIMATIONS, AnimName::Move, SpriteVariant::Enemy { facing });
        let size = (sprite.frame_size() * GHOST_HITBOX_SCALE).floor();
        Self {
            id,
            rect: Rect::from_center(center, size),
            mode: GhostMode::Chase,
            facing,
            life: lifetime,
            sprite,
        }
    }

    fn set_facing(&mut self, facing: Facing) {
        if facing != self.facing {
            self.facing = facing;
            self.sprite.set_variant(SpriteVariant::Enemy { facing });
        }
    }

    /// Leave toward whichever side of the screen the ghost is on
    fn start_exit(&mut self) {
        let dir = if self.rect.center().x < WIDTH / 2.0 {
            Facing::Left
        } else {
            Facing::Right
        };
        self.mode = GhostMode::Exit(dir);
        self.set_facing(dir);
        log::debug!("Ghost {} exiting {:?}", self.id, dir);
    }

    /// Advance one frame, chasing `target` while in chase mode
    pub fn update(&mut self, dt: f32, target: &Rect, tuning: &Tuning) {
        self.life -= dt;
        if self.mode == GhostMode::Chase && self.life <= 0.0 {
            self.start_exit();
        }

        match self.mode {
            GhostMode::Chase => {
                let delta = target.center() - self.rect.center();
                let dist = delta.length();
                if dist > CHASE_EPSILON {
                    let vel = delta / dist * tuning.ghost_chase_speed;
                    self.rect.translate(vel * dt);

                    if let Some(facing) = Facing::from_velocity(vel.x) {
                        self.set_facing(facing);
                    }
                }
            }
            GhostMode::Exit(dir) => {
                self.rect.x += dir.sign() * tuning.ghost_exit_speed * dt;
            }
        }

        // Never leaves vertically
        if self.rect.top() < 0.0 {
            self.rect.set_top(0.0);
        }
        if self.rect.bottom() > HEIGHT {
            self.rect.set_bottom(HEIGHT);
        }

        self.sprite.update(dt);
    }

    /// True once fully off-screen (with margin) on either side
    pub fn is_gone(&self) -> bool {
        self.rect.right() < -GHOST_GONE_MARGIN || self.rect.left() > WIDTH + GHOST_GONE_MARGIN
    }
}
