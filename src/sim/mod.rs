//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering,
//! audio and platform concerns:
//! - Time comes in as a delta from the host, never sampled here
//! - Seeded RNG only
//! - Outputs are plain data ([`FrameSnapshot`]) and events ([`GameEvent`])

pub mod anim;
pub mod collision;
pub mod ghost;
pub mod orb;
pub mod player;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use anim::{AnimName, AnimatedSprite, Facing, FrameId, GravityDir, SpriteVariant};
pub use collision::{first_overlap, resolve_horizontal, resolve_vertical};
pub use ghost::{Ghost, GhostMode};
pub use orb::Orb;
pub use player::Player;
pub use rect::Rect;
pub use spawn::{SpawnTimer, ghost_spawn_point, random_orb_position};
pub use state::{
    Command, FrameSnapshot, GameEvent, GamePhase, OrbView, Session, SpriteView, build_platforms, edge_barriers,
};
pub use tick::{TickInput, tick};
