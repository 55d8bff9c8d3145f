//! Zombie Escape headless runner
//!
//! Builds a world from optional JSON config, presses Start, and drives the
//! simulation with a scripted autopilot at a fixed cadence, logging events.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use zombie_escape::audio::{AudioBackend, AudioManager, SoundEffect};
use zombie_escape::consts::TICKS_PER_SECOND;
use zombie_escape::sim::{GameMode, GameState, LayoutConfig, TickInput, tick};
use zombie_escape::{Settings, Tuning};

#[derive(Parser)]
#[command(name = "zombie-escape")]
#[command(about = "Run the platformer simulation headless with a scripted player")]
struct Cli {
    /// World RNG seed
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Maximum number of ticks to simulate
    #[arg(long, default_value_t = 60 * TICKS_PER_SECOND as u64)]
    ticks: u64,

    /// Physics/AI tuning JSON
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Level layout JSON
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Audio settings JSON
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Sleep between ticks to run at wall-clock speed
    #[arg(long)]
    realtime: bool,

    /// Print the final render snapshot as JSON
    #[arg(long)]
    snapshot: bool,
}

/// Audio backend that only logs what it would play
struct LogAudio;

impl AudioBackend for LogAudio {
    fn play_effect(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("sfx {} @ {:.2}", effect.asset(), volume);
    }

    fn start_music(&mut self, volume: f32) {
        log::debug!("soundtrack start @ {:.2}", volume);
    }

    fn stop_music(&mut self) {
        log::debug!("soundtrack stop");
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn build_world(cli: &Cli) -> Result<GameState> {
    let tuning = match &cli.tuning {
        Some(path) => Tuning::from_json(&read(path)?)
            .with_context(|| format!("Invalid tuning in {}", path.display()))?,
        None => Tuning::default(),
    };
    let layout = match &cli.layout {
        Some(path) => LayoutConfig::from_json(&read(path)?)
            .with_context(|| format!("Invalid layout in {}", path.display()))?,
        None => LayoutConfig::default(),
    };
    Ok(GameState::with_config(cli.seed, &layout, tuning)?)
}

/// Settings are preferences: an unreadable file falls back to defaults
fn load_settings(path: Option<&Path>) -> Settings {
    let Some(path) = path else {
        return Settings::default();
    };
    match read(path) {
        Ok(json) => Settings::from_json(&json),
        Err(err) => {
            log::warn!("Using default settings ({err:#})");
            Settings::default()
        }
    }
}

/// Scripted input: run right, hop whenever an enemy is close ahead or the
/// player made no progress last tick, and take a periodic jump to reach
/// the platforms
#[derive(Default)]
struct Autopilot {
    last_left: Option<f32>,
}

impl Autopilot {
    fn input(&mut self, state: &GameState) -> TickInput {
        let me = state.player.rect;
        let threat = state.enemies.iter().any(|e| {
            let dx = e.rect.centerx() - me.centerx();
            (0.0..96.0).contains(&dx) && (e.rect.centery() - me.centery()).abs() < 48.0
        });
        let stalled = state.player.on_ground && self.last_left == Some(me.left);
        self.last_left = Some(me.left);
        TickInput {
            move_left: false,
            move_right: true,
            jump: threat || stalled || state.time_ticks % 45 == 0,
        }
    }
}

fn main() -> Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut state = build_world(&cli)?;
    let mut audio = AudioManager::new(LogAudio, load_settings(cli.settings.as_deref()));
    let mut autopilot = Autopilot::default();

    state.start();
    let frame = Duration::from_secs_f64(1.0 / TICKS_PER_SECOND as f64);

    for n in 0..cli.ticks {
        let input = autopilot.input(&state);
        tick(&mut state, &input);

        for event in state.drain_events() {
            log::debug!("tick {n}: {event:?}");
            audio.handle_event(&event);
        }

        if state.mode == GameMode::Victory && !state.fade.is_active() {
            log::info!("Escaped after {} ticks", state.time_ticks);
            break;
        }
        if cli.realtime {
            std::thread::sleep(frame);
        }
    }

    log::info!(
        "Finished: mode {:?}, score {}, rounds {}, ticks {}",
        state.mode,
        state.score,
        state.rounds,
        state.time_ticks
    );

    if cli.snapshot {
        let json = serde_json::to_string_pretty(&state.snapshot()).context("Snapshot failed")?;
        println!("{json}");
    }
    Ok(())
}
