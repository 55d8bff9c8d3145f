//! Fixed-cadence simulation tick
//!
//! Order within a playing tick: player, enemies, coins, enemy contact,
//! door, then the fade sub-machine.

use serde::{Deserialize, Serialize};

use super::fade::FadeSignal;
use super::player::MoveIntent;
use super::state::{GameEvent, GameMode, GameState};

/// Input intent for a single tick (sampled once by the host)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Jump key held this tick
    pub jump: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.mode {
        // Nothing moves until the start signal
        GameMode::Menu => return,
        GameMode::Playing => play(state, input),
        // Victory latch: entities are frozen, only the overlay settles
        GameMode::Victory => {}
    }

    match state.fade.advance(state.tuning.fade_step) {
        FadeSignal::ResetWorld if state.mode == GameMode::Playing => state.reset_round(),
        FadeSignal::ResetWorld => {
            log::debug!("Fade peaked in {:?}, skipping round reset", state.mode);
        }
        FadeSignal::Finished => log::debug!("Fade finished"),
        FadeSignal::Idle | FadeSignal::Ramping => {}
    }
}

fn play(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    let intent = MoveIntent::resolve(input.move_left, input.move_right);
    state
        .player
        .update(intent, input.jump, &state.geometry, &state.tuning);

    let player_rect = state.player.rect;
    for enemy in &mut state.enemies {
        enemy.update(&player_rect, &state.tuning);
    }

    // Coins float, then get tested against the player
    let mut collected = 0;
    state.coins.retain_mut(|coin| {
        coin.update();
        if coin.rect.overlaps(&player_rect) {
            collected += 1;
            false
        } else {
            true
        }
    });
    for _ in 0..collected {
        state.score += 1;
        log::debug!("Coin collected, score {}", state.score);
        state.push_event(GameEvent::CoinCollected { score: state.score });
    }

    let hit = state.enemies.iter().any(|e| e.rect.overlaps(&player_rect));
    if hit && state.fade.begin() {
        log::debug!("Player hit at {:?}", player_rect.center());
        state.push_event(GameEvent::PlayerHit);
    }

    state.door.update();
    if state.door.rect.overlaps(&player_rect) {
        state.request_mode(GameMode::Victory);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::enemy::{Enemy, HomePlatform};
    use crate::sim::fade::FadePhase;
    use crate::sim::rect::Rect;
    use glam::Vec2;

    fn playing(seed: u64) -> GameState {
        let mut state = GameState::new(seed).unwrap();
        state.start();
        state.drain_events();
        state
    }

    fn place_coin(state: &mut GameState, index: usize, center: Vec2) {
        let coin = &mut state.coins[index];
        coin.rect.set_center(center);
        coin.float.base_y = center.y;
    }

    #[test]
    fn test_tick_in_menu_is_inert() {
        let mut state = GameState::new(12345).unwrap();
        let player = state.player.rect;
        let input = TickInput {
            move_right: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &input);
        }
        assert_eq!(state.mode, GameMode::Menu);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.player.rect, player);
    }

    #[test]
    fn test_coin_pickup() {
        let mut state = playing(7);
        state.enemies.clear();
        let before = state.coins.len();
        let center = state.player.rect.center();
        place_coin(&mut state, 0, center);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 1);
        assert_eq!(state.coins.len(), before - 1);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::CoinCollected { score: 1 }]
        );

        // Same spot again: nothing left to collect there
        for _ in 0..5 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.score, 1);
        assert_eq!(state.coins.len(), before - 1);
    }

    #[test]
    fn test_enemy_contact_runs_one_fade_cycle() {
        let mut state = playing(99);
        let ground = HomePlatform::ground(state.geometry().ground_strip());
        state.enemies = vec![Enemy::new(state.player.rect.center(), ground, 1.5)];
        state.score = 3;

        let mut hits = 0;
        let mut resets = 0;
        let mut alphas = Vec::new();
        for _ in 0..64 {
            tick(&mut state, &TickInput::default());
            alphas.push(state.fade.alpha());
            for event in state.drain_events() {
                match event {
                    GameEvent::PlayerHit => hits += 1,
                    GameEvent::RoundReset => resets += 1,
                    _ => {}
                }
            }
        }

        assert_eq!(hits, 1);
        assert_eq!(resets, 1);
        assert_eq!(alphas[0], 8);
        assert_eq!(alphas[31], 255);
        assert_eq!(alphas[63], 0);
        assert!(alphas[..32].windows(2).all(|w| w[1] > w[0]));
        assert!(alphas[31..].windows(2).all(|w| w[1] < w[0]));
        assert!(!state.fade.is_active());
        assert_eq!(state.fade.phase(), FadePhase::None);
        assert_eq!(state.mode, GameMode::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.rounds, 1);
    }

    #[test]
    fn test_door_contact_wins() {
        let mut state = playing(3);
        state.enemies.clear();
        let door = state.door.rect.center();
        state.player.rect.set_center(door);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.mode, GameMode::Victory);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::ModeChanged(GameMode::Victory))
        );
    }

    #[test]
    fn test_victory_freezes_world() {
        let mut state = playing(3);
        let door = state.door.rect.center();
        state.player.rect.set_center(door);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.mode, GameMode::Victory);

        let player = state.player.rect;
        let enemies: Vec<Rect> = state.enemies.iter().map(|e| e.rect).collect();
        let coins = state.coins.len();
        let ticks = state.time_ticks;

        let input = TickInput {
            move_left: true,
            jump: true,
            ..Default::default()
        };
        for _ in 0..100 {
            tick(&mut state, &input);
        }
        assert_eq!(state.player.rect, player);
        assert_eq!(
            state.enemies.iter().map(|e| e.rect).collect::<Vec<_>>(),
            enemies
        );
        assert_eq!(state.coins.len(), coins);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.mode, GameMode::Victory);
    }

    #[test]
    fn test_fade_in_victory_skips_reset() {
        let mut state = playing(11);
        state.enemies.clear();
        state.score = 2;
        assert!(state.fade.begin());
        let door = state.door.rect.center();
        state.player.rect.set_center(door);

        for _ in 0..64 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.mode, GameMode::Victory);
        assert_eq!(state.rounds, 0);
        assert_eq!(state.score, 2);
        assert!(!state.fade.is_active());
        assert_eq!(state.fade.alpha(), 0);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = playing(99999);
        let mut state2 = playing(99999);

        let inputs = [
            TickInput {
                move_right: true,
                ..Default::default()
            },
            TickInput {
                move_right: true,
                jump: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                move_left: true,
                ..Default::default()
            },
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.player.rect, state2.player.rect);
        assert_eq!(state1.enemies.len(), state2.enemies.len());
    }
}
