//! The player: a gravity-flipping physics body
//!
//! Each frame runs, in order: input, gravity, platform collision, world
//! bounds, timers, animation. Later steps rely on earlier ones (e.g. bounds
//! must see the post-collision position), so the order is fixed.

use glam::Vec2;

use super::anim::{AnimName, AnimatedSprite, Facing, GravityDir, PLAYER_ANIMATIONS, SpriteVariant};
use super::collision::{resolve_horizontal, resolve_vertical};
use super::rect::Rect;
use super::tick::TickInput;
use crate::consts::*;
use crate::tuning::Tuning;

/// The player character
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub vel: Vec2,
    pub gravity: GravityDir,
    pub facing: Facing,
    /// Seconds until gravity may be flipped again (<= 0 means ready)
    pub flip_cooldown: f32,
    pub sprite: AnimatedSprite,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        let facing = Facing::default();
        let gravity = GravityDir::default();
        let sprite = AnimatedSprite::new(PLAYER_ANIMATIONS, AnimName::Idle, SpriteVariant::Player { facing, gravity });

        // Hitbox is a little smaller than the drawn frame
        let size = (sprite.frame_size() * PLAYER_HITBOX_SCALE).floor();
        let mut player = Self {
            rect: Rect::new(0.0, 0.0, size.x, size.y),
            vel: Vec2::ZERO,
            gravity,
            facing,
            flip_cooldown: 0.0,
            sprite,
        };
        player.place_at_spawn();
        player
    }

    fn place_at_spawn(&mut self) {
        self.rect.set_left(EDGE_BARRIER_MARGIN + PLAYER_SPAWN_INSET);
        self.rect.set_bottom(HEIGHT);
    }

    /// Restore the start-of-session state
    pub fn reset(&mut self) {
        self.place_at_spawn();
        self.vel = Vec2::ZERO;
        self.gravity = GravityDir::Down;
        self.flip_cooldown = 0.0;
        self.facing = Facing::Right;
        self.sprite.set_anim(AnimName::Idle);
        self.refresh_frames();
    }

    fn refresh_frames(&mut self) {
        self.sprite.set_variant(SpriteVariant::Player {
            facing: self.facing,
            gravity: self.gravity,
        });
    }

    /// Advance the player by one frame
    pub fn update(&mut self, input: &TickInput, platforms: &[Rect], tuning: &Tuning, dt: f32) {
        self.handle_input(input, tuning);
        self.apply_gravity(tuning, dt);
        self.move_and_collide(platforms, dt);
        self.apply_world_bounds();
        self.update_timers(dt);
        self.update_animation(dt);
    }

    pub fn handle_input(&mut self, input: &TickInput, tuning: &Tuning) {
        let old_facing = self.facing;

        self.vel.x = 0.0;
        if input.left {
            self.vel.x = -tuning.move_speed;
        }
        // Right overrides left when both are held
        if input.right {
            self.vel.x = tuning.move_speed;
        }

        if input.flip && self.flip_cooldown <= 0.0 {
            self.flip_gravity(tuning);
        }

        if let Some(facing) = Facing::from_velocity(self.vel.x) {
            self.facing = facing;
        }
        if self.facing != old_facing {
            self.refresh_frames();
        }
    }

    /// Reverse gravity and start the cooldown
    pub fn flip_gravity(&mut self, tuning: &Tuning) {
        self.gravity = self.gravity.flipped();
        self.vel.y = 0.0;
        self.flip_cooldown = tuning.flip_cooldown;
        self.refresh_frames();
        log::trace!("Gravity flipped to {:?}", self.gravity);
    }

    pub fn apply_gravity(&mut self, tuning: &Tuning, dt: f32) {
        self.vel.y += tuning.gravity_force * self.gravity.sign() * dt;
    }

    /// Move horizontally then vertically, resolving platform hits after each axis
    pub fn move_and_collide(&mut self, platforms: &[Rect], dt: f32) {
        self.rect.x += self.vel.x * dt;
        resolve_horizontal(&mut self.rect, self.vel.x, platforms);

        self.rect.y += self.vel.y * dt;
        if resolve_vertical(&mut self.rect, self.vel.y, self.gravity, platforms) {
            self.vel.y = 0.0;
        }
    }

    /// Land on the floor or ceiling (whichever is "down") and stay between the barriers
    pub fn apply_world_bounds(&mut self) {
        match self.gravity {
            GravityDir::Down => {
                if self.rect.bottom() >= HEIGHT {
                    self.rect.set_bottom(HEIGHT);
                    self.vel.y = 0.0;
                }
            }
            GravityDir::Up => {
                if self.rect.top() <= 0.0 {
                    self.rect.set_top(0.0);
                    self.vel.y = 0.0;
                }
            }
        }

        if self.rect.left() < EDGE_BARRIER_MARGIN {
            self.rect.set_left(EDGE_BARRIER_MARGIN);
        }
        if self.rect.right() > WIDTH - EDGE_BARRIER_MARGIN {
            self.rect.set_right(WIDTH - EDGE_BARRIER_MARGIN);
        }
    }

    pub fn update_timers(&mut self, dt: f32) {
        if self.flip_cooldown > 0.0 {
            self.flip_cooldown -= dt;
        }
    }

    pub fn update_animation(&mut self, dt: f32) {
        if self.vel.x.abs() > MOVEMENT_DEADZONE {
            self.sprite.set_anim(AnimName::Walk);
        } else {
            self.sprite.set_anim(AnimName::Idle);
        }
        self.sprite.update(dt);
    }
}
