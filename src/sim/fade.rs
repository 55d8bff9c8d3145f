//! Death fade sub-machine
//!
//! `None -> FadingOut -> FadingIn -> None`, one direction per cycle. The
//! world reset happens exactly once, at the FadingOut/FadingIn boundary.

use serde::{Deserialize, Serialize};

/// Phase of the screen fade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FadePhase {
    #[default]
    None,
    FadingOut,
    FadingIn,
}

/// What the caller must do after advancing the fade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeSignal {
    /// Nothing to do
    Idle,
    /// Alpha moved, no boundary crossed
    Ramping,
    /// Fade-out peaked: reset the round now
    ResetWorld,
    /// Fade-in finished, guard cleared
    Finished,
}

/// Overlay alpha plus the re-entrancy guard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fade {
    phase: FadePhase,
    alpha: u8,
    /// Set when a death starts the fade, cleared only when fade-in completes
    active: bool,
}

impl Fade {
    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// True while a death sequence is in progress
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start fading out. Returns false (and changes nothing) if a fade is
    /// already running.
    pub fn begin(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.phase = FadePhase::FadingOut;
        true
    }

    /// Move alpha one step and report any boundary crossed
    pub fn advance(&mut self, step: u8) -> FadeSignal {
        match self.phase {
            FadePhase::None => FadeSignal::Idle,
            FadePhase::FadingOut => {
                self.alpha = self.alpha.saturating_add(step);
                if self.alpha == u8::MAX {
                    self.phase = FadePhase::FadingIn;
                    FadeSignal::ResetWorld
                } else {
                    FadeSignal::Ramping
                }
            }
            FadePhase::FadingIn => {
                self.alpha = self.alpha.saturating_sub(step);
                if self.alpha == 0 {
                    self.phase = FadePhase::None;
                    self.active = false;
                    FadeSignal::Finished
                } else {
                    FadeSignal::Ramping
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FADE_STEP;

    #[test]
    fn test_dormant_by_default() {
        let mut fade = Fade::default();
        assert_eq!(fade.advance(FADE_STEP), FadeSignal::Idle);
        assert_eq!(fade.alpha(), 0);
        assert!(!fade.is_active());
    }

    #[test]
    fn test_full_cycle() {
        let mut fade = Fade::default();
        assert!(fade.begin());
        assert_eq!(fade.alpha(), 0);

        let mut resets = 0;
        let mut prev = 0u8;
        // Fade out: 8, 16, ... 248, then clamped to 255
        loop {
            let signal = fade.advance(FADE_STEP);
            assert!(fade.alpha() > prev);
            if signal == FadeSignal::ResetWorld {
                resets += 1;
                break;
            }
            assert_eq!(fade.alpha() - prev, FADE_STEP);
            assert!(fade.is_active());
            prev = fade.alpha();
        }
        assert_eq!(fade.alpha(), 255);
        assert_eq!(fade.phase(), FadePhase::FadingIn);

        // Fade in: 247, 239, ... 7, then clamped to 0
        prev = 255;
        loop {
            let signal = fade.advance(FADE_STEP);
            assert_ne!(signal, FadeSignal::ResetWorld);
            assert!(fade.alpha() < prev);
            if signal == FadeSignal::Finished {
                break;
            }
            assert_eq!(prev - fade.alpha(), FADE_STEP);
            assert!(fade.is_active());
            prev = fade.alpha();
        }
        assert_eq!(resets, 1);
        assert_eq!(fade.alpha(), 0);
        assert_eq!(fade.phase(), FadePhase::None);
        assert!(!fade.is_active());
    }

    #[test]
    fn test_tick_counts() {
        let mut fade = Fade::default();
        fade.begin();
        let out_ticks = (1..).find(|_| fade.advance(FADE_STEP) == FadeSignal::ResetWorld);
        assert_eq!(out_ticks, Some(32));
        let in_ticks = (1..).find(|_| fade.advance(FADE_STEP) == FadeSignal::Finished);
        assert_eq!(in_ticks, Some(32));
    }

    #[test]
    fn test_begin_is_not_reentrant() {
        let mut fade = Fade::default();
        assert!(fade.begin());
        for _ in 0..10 {
            fade.advance(FADE_STEP);
        }
        let alpha = fade.alpha();
        assert!(!fade.begin());
        assert_eq!(fade.alpha(), alpha);
        assert_eq!(fade.phase(), FadePhase::FadingOut);

        // Still guarded during fade-in
        while fade.advance(FADE_STEP) != FadeSignal::ResetWorld {}
        assert!(!fade.begin());
        assert_eq!(fade.phase(), FadePhase::FadingIn);
    }
}
