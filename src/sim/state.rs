//! Game state and core simulation types
//!
//! One owned aggregate holds everything a tick touches: mode, score, fade,
//! and every entity collection.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::{Enemy, HomePlatform};
use super::fade::Fade;
use super::geometry::{Geometry, LayoutConfig};
use super::pickup::{Coin, Door};
use super::player::Player;
use crate::consts::*;
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Top-level game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Title menu, waiting for the start signal
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Door reached; terminal
    Victory,
}

/// Discrete events for external collaborators (audio, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A coin was picked up; carries the new score
    CoinCollected { score: u32 },
    /// An enemy touched the player and the death fade started
    PlayerHit,
    /// The round was rebuilt at the fade peak
    RoundReset,
    ModeChanged(GameMode),
}

/// RNG state wrapper for serialization.
///
/// Each round draws from its own PCG stream of the run seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Hand out a generator on the next unused stream
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream += 1;
        rng
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub mode: GameMode,
    pub score: u32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    pub door: Door,
    pub fade: Fade,
    /// Simulation tick counter (playing ticks only)
    pub time_ticks: u64,
    /// Completed death/reset cycles
    pub rounds: u32,
    pub(super) geometry: Geometry,
    pub(super) tuning: Tuning,
    rng_state: RngState,
    /// Pending events, drained by the host each frame
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Default layout and tuning
    pub fn new(seed: u64) -> Result<Self, ConfigError> {
        Self::with_config(seed, &LayoutConfig::default(), Tuning::default())
    }

    /// Build a world in `Menu` mode from explicit configuration
    pub fn with_config(
        seed: u64,
        layout: &LayoutConfig,
        tuning: Tuning,
    ) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let geometry = Geometry::new(layout)?;

        let mut rng_state = RngState::new(seed);
        let mut rng = rng_state.next_rng();
        let door = Door::on_platform(geometry.door_platform(), &mut rng);

        let mut state = Self {
            mode: GameMode::Menu,
            score: 0,
            player: Player::spawn(),
            enemies: Vec::new(),
            coins: Vec::new(),
            door,
            fade: Fade::default(),
            time_ticks: 0,
            rounds: 0,
            geometry,
            tuning,
            rng_state,
            events: Vec::new(),
        };
        state.enemies = state.generate_enemies(&mut rng);
        state.coins = state.spawn_coins(&mut rng);

        log::info!(
            "World ready: seed {}, {} platforms, {} enemies, {} coins",
            seed,
            state.geometry.platforms().len(),
            state.enemies.len(),
            state.coins.len()
        );
        Ok(state)
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every event queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// External start signal (the menu's Start button)
    pub fn start(&mut self) -> bool {
        self.request_mode(GameMode::Playing)
    }

    /// Apply a mode change if it is one of the defined transitions.
    ///
    /// Only `Menu -> Playing` and `Playing -> Victory` are accepted; anything
    /// else is ignored and reported as `false`.
    pub fn request_mode(&mut self, next: GameMode) -> bool {
        let allowed = matches!(
            (self.mode, next),
            (GameMode::Menu, GameMode::Playing) | (GameMode::Playing, GameMode::Victory)
        );
        if !allowed {
            log::warn!("Ignoring mode change {:?} -> {:?}", self.mode, next);
            return false;
        }
        log::info!("Mode {:?} -> {:?}", self.mode, next);
        self.mode = next;
        self.push_event(GameEvent::ModeChanged(next));
        true
    }

    /// Rebuild the round: player to spawn, fresh enemies and coins, score 0
    pub fn reset_round(&mut self) {
        let mut rng = self.rng_state.next_rng();
        self.player.reset();
        self.enemies = self.generate_enemies(&mut rng);
        self.coins = self.spawn_coins(&mut rng);
        self.score = 0;
        self.rounds += 1;
        log::info!(
            "Round reset #{}: {} enemies, {} coins",
            self.rounds,
            self.enemies.len(),
            self.coins.len()
        );
        self.push_event(GameEvent::RoundReset);
    }

    /// Draw `enemy_count` enemies, with replacement, from one ground spawn
    /// plus one spawn per platform
    fn generate_enemies<R: Rng>(&self, rng: &mut R) -> Vec<Enemy> {
        let width = self.geometry.world_width();
        let ground = self.geometry.ground_strip();
        let lo = TILE_SIZE.min(width / 2.0);
        let hi = (width - TILE_SIZE).max(lo);

        let mut options = Vec::with_capacity(self.geometry.platforms().len() + 1);
        options.push((
            Vec2::new(rng.random_range(lo..=hi), ground.top - TILE_SIZE),
            HomePlatform::ground(ground),
        ));
        options.extend(self.geometry.platforms().iter().map(|p| {
            (
                Vec2::new(p.centerx(), p.top - ENEMY_SIZE.1 / 2.0),
                HomePlatform::elevated(*p),
            )
        }));

        let speed = self.tuning.enemy_speed;
        let mut enemies = Vec::with_capacity(self.tuning.enemy_count);
        for _ in 0..self.tuning.enemy_count {
            if let Some(&(center, home)) = options.choose(rng) {
                let vel_x = if rng.random_bool(0.5) { speed } else { -speed };
                enemies.push(Enemy::new(center, home, vel_x));
            }
        }
        enemies
    }

    /// One coin above each platform plus the configured ground coins
    fn spawn_coins<R: Rng>(&self, rng: &mut R) -> Vec<Coin> {
        let ground_y = self.geometry.floor_top() - TILE_SIZE - COIN_LIFT;
        let on_platforms = self
            .geometry
            .platforms()
            .iter()
            .map(|p| Vec2::new(p.centerx(), p.top - COIN_LIFT));
        let on_ground = self
            .geometry
            .ground_coins()
            .iter()
            .map(|&x| Vec2::new(x, ground_y));
        on_platforms
            .chain(on_ground)
            .map(|center| Coin::new(center, rng))
            .collect()
    }
}
