//! Audio triggers
//!
//! The simulation never plays sound. It emits [`GameEvent`]s; this module
//! maps them to sound effects and forwards them to whatever backend the host
//! provides, honoring the player's volume and music preferences.

use crate::settings::Settings;
use crate::sim::{GameEvent, GameMode};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Coin picked up
    CoinCollect,
    /// Menu button pressed / game started
    Click,
    /// Player touched a zombie
    Hit,
    /// Door reached
    Victory,
}

impl SoundEffect {
    /// Effect for a simulation event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::CoinCollected { .. } => Some(SoundEffect::CoinCollect),
            GameEvent::PlayerHit => Some(SoundEffect::Hit),
            GameEvent::ModeChanged(GameMode::Playing) => Some(SoundEffect::Click),
            GameEvent::ModeChanged(GameMode::Victory) => Some(SoundEffect::Victory),
            GameEvent::ModeChanged(GameMode::Menu) | GameEvent::RoundReset => None,
        }
    }

    /// Asset key of the sample
    pub fn asset(&self) -> &'static str {
        match self {
            SoundEffect::CoinCollect => "collect_coin",
            SoundEffect::Click => "click_001",
            SoundEffect::Hit => "hit",
            SoundEffect::Victory => "victory",
        }
    }
}

/// Host-side sound output
pub trait AudioBackend {
    fn play_effect(&mut self, effect: SoundEffect, volume: f32);
    fn start_music(&mut self, volume: f32);
    fn stop_music(&mut self);
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    settings: Settings,
    muted: bool,
    music_playing: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    /// Wrap a backend; starts the soundtrack if music is enabled
    pub fn new(backend: B, settings: Settings) -> Self {
        let mut manager = Self {
            backend,
            settings,
            muted: false,
            music_playing: false,
        };
        manager.sync_music();
        manager
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.sync_music();
    }

    /// Flip the menu's music switch; returns the new state
    pub fn toggle_music(&mut self) -> bool {
        let on = self.settings.toggle_music();
        log::info!("Music {}", if on { "ON" } else { "OFF" });
        self.sync_music();
        on
    }

    /// Get effective effect volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.settings.master_volume * self.settings.sfx_volume
        }
    }

    /// Play the effect mapped to `event`, if any
    pub fn handle_event(&mut self, event: &GameEvent) {
        let Some(effect) = SoundEffect::for_event(event) else {
            return;
        };
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.play_effect(effect, vol);
    }

    fn sync_music(&mut self) {
        let want = self.settings.music_on && !self.muted;
        if want && !self.music_playing {
            let vol = self.settings.master_volume * self.settings.music_volume;
            self.backend.start_music(vol);
        } else if !want && self.music_playing {
            self.backend.stop_music();
        }
        self.music_playing = want;
    }
}
