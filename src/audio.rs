//! Audio collaborator
//!
//! The simulation never plays sound itself; it emits [`GameEvent`]s and the
//! host forwards them here. Actual playback goes through an [`AudioBackend`]
//! supplied by the platform layer. Without one, audio is simply unavailable
//! and every call is a no-op.

use crate::sim::GameEvent;

/// Background music track name
pub const THEME_TRACK: &str = "theme";

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Orb picked up
    OrbCollect,
    /// Player caught by a ghost
    Hit,
}

impl SoundEffect {
    /// Asset name of the effect
    pub fn name(self) -> &'static str {
        match self {
            SoundEffect::OrbCollect => "orb",
            SoundEffect::Hit => "hit",
        }
    }
}

/// Platform audio output
pub trait AudioBackend {
    fn play_sfx(&mut self, effect: SoundEffect, volume: f32);
    fn play_music(&mut self, track: &str, volume: f32);
    fn stop_music(&mut self);
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<Box<dyn AudioBackend>>,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    music_on: bool,
    sfx_on: bool,
}

impl AudioManager {
    /// Create a manager. `sound_on` is the initial state of music and effects.
    pub fn new(backend: Option<Box<dyn AudioBackend>>, sound_on: bool) -> Self {
        if backend.is_none() {
            log::warn!("No audio backend - audio disabled");
        }
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            music_on: sound_on,
            sfx_on: sound_on,
        }
    }

    /// Whether sound can actually be produced
    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn music_on(&self) -> bool {
        self.music_on
    }

    pub fn sfx_on(&self) -> bool {
        self.sfx_on
    }

    /// Menu button label
    pub fn sound_label(&self) -> &'static str {
        if self.music_on || self.sfx_on {
            "Sound: ON"
        } else {
            "Sound: OFF"
        }
    }

    /// Start the theme if music is enabled
    pub fn start_music(&mut self) {
        if !self.music_on {
            return;
        }
        let vol = self.master_volume * self.music_volume;
        if let Some(backend) = self.backend.as_mut() {
            backend.play_music(THEME_TRACK, vol);
        }
    }

    /// Flip music and effects together
    pub fn toggle_sound(&mut self) {
        self.music_on = !self.music_on;
        self.sfx_on = self.music_on;

        if self.music_on {
            self.start_music();
        } else if let Some(backend) = self.backend.as_mut() {
            backend.stop_music();
        }
        log::info!("{}", self.sound_label());
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        if !self.sfx_on {
            return;
        }
        let vol = self.master_volume * self.sfx_volume;
        if vol <= 0.0 {
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        backend.play_sfx(effect, vol);
    }

    /// React to a simulation event
    pub fn handle_event(&mut self, event: &GameEvent) {
        match event {
            // One pickup sound per frame, however many orbs were taken
            GameEvent::OrbsCollected { .. } => self.play(SoundEffect::OrbCollect),
            GameEvent::PlayerHit => self.play(SoundEffect::Hit),
            GameEvent::AudioToggled => self.toggle_sound(),
            GameEvent::SessionStarted => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Sfx(SoundEffect),
        Music(String),
        Stop,
    }

    #[derive(Default, Clone)]
    struct Recorder {
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl AudioBackend for Recorder {
        fn play_sfx(&mut self, effect: SoundEffect, _volume: f32) {
            self.calls.borrow_mut().push(Call::Sfx(effect));
        }

        fn play_music(&mut self, track: &str, _volume: f32) {
            self.calls.borrow_mut().push(Call::Music(track.to_string()));
        }

        fn stop_music(&mut self) {
            self.calls.borrow_mut().push(Call::Stop);
        }
    }

    fn manager(sound_on: bool) -> (AudioManager, Rc<RefCell<Vec<Call>>>) {
        let recorder = Recorder::default();
        let calls = recorder.calls.clone();
        (AudioManager::new(Some(Box::new(recorder)), sound_on), calls)
    }

    #[test]
    fn test_events_map_to_effects() {
        let (mut audio, calls) = manager(true);
        audio.handle_event(&GameEvent::OrbsCollected { count: 3 });
        audio.handle_event(&GameEvent::PlayerHit);
        audio.handle_event(&GameEvent::SessionStarted);
        assert_eq!(
            *calls.borrow(),
            vec![Call::Sfx(SoundEffect::OrbCollect), Call::Sfx(SoundEffect::Hit)]
        );
    }

    #[test]
    fn test_toggle_stops_and_restarts_music() {
        let (mut audio, calls) = manager(true);
        assert_eq!(audio.sound_label(), "Sound: ON");

        audio.handle_event(&GameEvent::AudioToggled);
        assert!(!audio.music_on() && !audio.sfx_on());
        assert_eq!(audio.sound_label(), "Sound: OFF");

        // Muted effects are dropped
        audio.play(SoundEffect::Hit);

        audio.toggle_sound();
        assert_eq!(
            *calls.borrow(),
            vec![Call::Stop, Call::Music(THEME_TRACK.to_string())]
        );
    }

    #[test]
    fn test_zero_volume_is_silent() {
        let (mut audio, calls) = manager(true);
        audio.set_sfx_volume(0.0);
        audio.play(SoundEffect::OrbCollect);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_without_backend_everything_is_a_noop() {
        let mut audio = AudioManager::new(None, true);
        assert!(!audio.is_available());
        audio.start_music();
        audio.handle_event(&GameEvent::PlayerHit);
        audio.handle_event(&GameEvent::AudioToggled);
        assert_eq!(audio.sound_label(), "Sound: OFF");
    }

    #[test]
    fn test_effect_names() {
        assert_eq!(SoundEffect::OrbCollect.name(), "orb");
        assert_eq!(SoundEffect::Hit.name(), "hit");
    }
}
