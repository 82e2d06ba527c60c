//! Session state and core simulation types
//!
//! A [`Session`] owns everything that changes while playing: the player,
//! ghosts, orbs, score, spawn timers and the RNG. Hosts hold one and drive it
//! with [`super::tick`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::anim::FrameId;
use super::ghost::Ghost;
use super::orb::Orb;
use super::player::Player;
use super::rect::Rect;
use super::spawn::{SpawnTimer, ghost_spawn_point, random_orb_position};
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title menu, nothing simulated
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Player was caught; frozen until acknowledged
    GameOver,
}

/// Notifications for host collaborators (audio, UI)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    SessionStarted,
    /// One or more orbs were picked up this frame
    OrbsCollected { count: u32 },
    /// A ghost caught the player
    PlayerHit,
    /// Sound toggle requested from the menu
    AudioToggled,
}

/// Commands issued by the menu/UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Start,
    ReturnToMenu,
    ToggleAudio,
}

/// The two static platforms, above and below the vertical center
pub fn build_platforms() -> Vec<Rect> {
    let x = ((WIDTH - PLATFORM_WIDTH) / 2.0).floor();
    let mid = (HEIGHT / 2.0).floor();
    vec![
        Rect::new(x, mid - PLATFORM_OFFSET_Y, PLATFORM_WIDTH, PLATFORM_HEIGHT),
        Rect::new(x, mid + PLATFORM_OFFSET_Y, PLATFORM_WIDTH, PLATFORM_HEIGHT),
    ]
}

/// The walled-off strips on both sides of the play field
pub fn edge_barriers() -> [Rect; 2] {
    [
        Rect::new(0.0, 0.0, EDGE_BARRIER_MARGIN, HEIGHT),
        Rect::new(WIDTH - EDGE_BARRIER_MARGIN, 0.0, EDGE_BARRIER_MARGIN, HEIGHT),
    ]
}

/// A whole game session
#[derive(Debug, Clone)]
pub struct Session {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u32,
    /// Seconds since the current run started
    pub elapsed: f32,
    pub tuning: Tuning,
    /// Static level geometry
    pub platforms: Vec<Rect>,
    pub player: Player,
    pub ghosts: Vec<Ghost>,
    pub orbs: Vec<Orb>,
    pub ghost_spawner: SpawnTimer,
    pub orb_spawner: SpawnTimer,
    pub(crate) rng: Pcg32,
    /// Unbounded queue; the host drains it every frame
    events: Vec<GameEvent>,
    next_id: u32,
}

impl Session {
    /// Create a session in the menu with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            phase: GamePhase::Menu,
            score: 0,
            elapsed: 0.0,
            platforms: build_platforms(),
            player: Player::new(),
            ghosts: Vec::new(),
            orbs: Vec::new(),
            ghost_spawner: SpawnTimer::new(tuning.ghost_spawn_interval, tuning.ghost_max_count),
            orb_spawner: SpawnTimer::new(tuning.orb_spawn_interval, tuning.orb_max_count),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events queued since the last call.
    ///
    /// Call once per frame. Events are never dropped, so a host that stops
    /// draining grows the queue without bound.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin a fresh run. Spawners pick up the current `tuning`.
    pub fn start_session(&mut self) {
        self.player.reset();
        self.ghosts.clear();
        self.ghost_spawner = SpawnTimer::new(self.tuning.ghost_spawn_interval, self.tuning.ghost_max_count);
        self.orbs.clear();
        self.orb_spawner = SpawnTimer::new(self.tuning.orb_spawn_interval, self.tuning.orb_max_count);
        self.score = 0;
        self.elapsed = 0.0;

        self.spawn_orb();
        self.spawn_orb();

        self.phase = GamePhase::Playing;
        self.emit(GameEvent::SessionStarted);
        log::info!("Session started (seed {})", self.seed);
    }

    /// Leave the game-over screen. Ignored in any other phase.
    pub fn return_to_menu(&mut self) {
        if self.phase == GamePhase::GameOver {
            self.phase = GamePhase::Menu;
            log::info!("Returned to menu");
        }
    }

    /// Pass a sound toggle through to the audio collaborator
    pub fn toggle_audio(&mut self) {
        self.emit(GameEvent::AudioToggled);
    }

    /// Apply a menu/UI command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Start => {
                if self.phase == GamePhase::Menu {
                    self.start_session();
                } else {
                    log::debug!("Start ignored in {:?}", self.phase);
                }
            }
            Command::ReturnToMenu => self.return_to_menu(),
            Command::ToggleAudio => self.toggle_audio(),
        }
    }

    /// Spawn a ghost just off a random side of the screen
    pub fn spawn_ghost(&mut self) {
        let id = self.next_entity_id();
        let (pos, facing) = ghost_spawn_point(&mut self.rng);
        self.ghosts.push(Ghost::new(id, pos, facing, self.tuning.ghost_lifetime));
        log::debug!("Spawned ghost {} at ({}, {}) facing {:?}", id, pos.x, pos.y, facing);
    }

    /// Spawn an orb somewhere clear of the platforms and the player
    pub fn spawn_orb(&mut self) {
        let id = self.next_entity_id();
        let radius = self.tuning.orb_radius;
        let pos = random_orb_position(&mut self.rng, &self.platforms, &self.player.rect, radius);
        self.orbs.push(Orb::new(id, pos, radius, &mut self.rng));
        log::debug!("Spawned orb {} at ({}, {})", id, pos.x, pos.y);
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            phase: self.phase,
            score: self.score,
            elapsed: self.elapsed,
            platforms: self.platforms.clone(),
            barriers: edge_barriers().to_vec(),
            player: SpriteView {
                rect: self.player.rect,
                frame: self.player.sprite.current_frame(),
            },
            ghosts: self
                .ghosts
                .iter()
                .map(|g| SpriteView {
                    rect: g.rect,
                    frame: g.sprite.current_frame(),
                })
                .collect(),
            orbs: self
                .orbs
                .iter()
                .map(|o| OrbView {
                    pos: o.pos,
                    radius: o.visual_radius,
                })
                .collect(),
        }
    }
}

/// An animated entity as the renderer sees it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteView {
    pub rect: Rect,
    pub frame: FrameId,
}

/// An orb as the renderer sees it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub elapsed: f32,
    pub platforms: Vec<Rect>,
    pub barriers: Vec<Rect>,
    pub player: SpriteView,
    pub ghosts: Vec<SpriteView>,
    pub orbs: Vec<OrbView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_layout() {
        let platforms = build_platforms();
        assert_eq!(platforms.len(), 2);
        assert_eq!(platforms[0], Rect::new(320.0, 180.0, 320.0, 18.0));
        assert_eq!(platforms[1], Rect::new(320.0, 360.0, 320.0, 18.0));
    }

    #[test]
    fn test_new_session_in_menu() {
        let session = Session::new(1);
        assert_eq!(session.phase, GamePhase::Menu);
        assert_eq!(session.score, 0);
        assert!(session.ghosts.is_empty());
        assert!(session.orbs.is_empty());
    }

    #[test]
    fn test_start_session_resets_and_prespawns() {
        let mut session = Session::new(42);
        session.score = 17;
        session.elapsed = 12.0;
        session.spawn_ghost();
        session.player.rect.x = 600.0;

        session.start_session();
        assert_eq!(session.phase, GamePhase::Playing);
        assert_eq!(session.score, 0);
        assert_eq!(session.elapsed, 0.0);
        assert!(session.ghosts.is_empty());
        assert_eq!(session.orbs.len(), 2);
        assert_eq!(session.ghost_spawner.remaining, 0.0);
        assert_eq!(session.player.rect.left(), EDGE_BARRIER_MARGIN + PLAYER_SPAWN_INSET);
        assert_eq!(session.drain_events(), vec![GameEvent::SessionStarted]);
    }

    #[test]
    fn test_start_session_uses_current_tuning() {
        let mut session = Session::new(11);
        session.tuning.ghost_max_count = 1;
        session.tuning.orb_spawn_interval = 2.5;
        session.tuning.orb_max_count = 4;

        session.start_session();
        assert_eq!(session.ghost_spawner.cap, 1);
        assert_eq!(session.orb_spawner.interval, 2.5);
        assert_eq!(session.orb_spawner.cap, 4);
        assert_eq!(session.orb_spawner.remaining, 0.0);
    }

    #[test]
    fn test_orb_ids_are_unique() {
        let mut session = Session::new(3);
        session.start_session();
        session.spawn_orb();
        let mut ids: Vec<_> = session.orbs.iter().map(|o| o.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_commands() {
        let mut session = Session::new(7);

        session.apply(Command::ReturnToMenu);
        assert_eq!(session.phase, GamePhase::Menu);

        session.apply(Command::Start);
        assert_eq!(session.phase, GamePhase::Playing);

        // Start is only a menu action
        session.score = 3;
        session.apply(Command::Start);
        assert_eq!(session.score, 3);

        session.phase = GamePhase::GameOver;
        session.apply(Command::ReturnToMenu);
        assert_eq!(session.phase, GamePhase::Menu);

        session.drain_events();
        session.apply(Command::ToggleAudio);
        assert_eq!(session.drain_events(), vec![GameEvent::AudioToggled]);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = Session::new(99);
        let mut b = Session::new(99);
        a.start_session();
        b.start_session();
        for _ in 0..5 {
            a.spawn_ghost();
            b.spawn_ghost();
        }
        let pa: Vec<_> = a.orbs.iter().map(|o| o.pos).chain(a.ghosts.iter().map(|g| g.rect.center())).collect();
        let pb: Vec<_> = b.orbs.iter().map(|o| o.pos).chain(b.ghosts.iter().map(|g| g.rect.center())).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut session = Session::new(5);
        session.start_session();
        session.spawn_ghost();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, GamePhase::Playing);
        assert_eq!(snapshot.orbs.len(), 2);
        assert_eq!(snapshot.ghosts.len(), 1);
        assert_eq!(snapshot.barriers.len(), 2);

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.score, 0);
        assert_eq!(back.player.frame, snapshot.player.frame);
    }
}
