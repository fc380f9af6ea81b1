//! Playback controller
//!
//! A single cursor into the current [`OperationSequence`](crate::snapshot::OperationSequence)
//! plus the play/pause state machine that advances it on a timer.
//!
//! ```text
//!            play()                 tick at last index
//!  Paused ───────────▶ Playing ─────────────────────▶ Paused
//!    ▲                    │
//!    └────── pause() ─────┘
//! ```
//!
//! Every [`load`](PlaybackController::load) issues a new [`Generation`]. A tick
//! scheduled against an older generation is ignored, so a timer that fires
//! after the operation changed can never move the new cursor.

use crate::config::TICK_BASE_MS;
use crate::errors::EngineError;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Playback speed multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
    Half,
    #[default]
    Normal,
    OneAndHalf,
    Double,
}

impl Speed {
    pub const ALL: [Speed; 4] = [Speed::Half, Speed::Normal, Speed::OneAndHalf, Speed::Double];

    pub fn multiplier(self) -> f64 {
        match self {
            Speed::Half => 0.5,
            Speed::Normal => 1.0,
            Speed::OneAndHalf => 1.5,
            Speed::Double => 2.0,
        }
    }

    /// Parse `0.5`, `1`, `1.5` or `2`, with an optional trailing `x`
    pub fn parse(text: &str) -> Result<Speed, EngineError> {
        let invalid = || EngineError::InvalidSpeed {
            value: text.to_string(),
        };
        let number: f64 = text
            .trim()
            .trim_end_matches(['x', 'X'])
            .parse()
            .map_err(|_| invalid())?;
        Speed::ALL
            .into_iter()
            .find(|speed| (speed.multiplier() - number).abs() < f64::EPSILON)
            .ok_or_else(invalid)
    }

    pub fn label(self) -> &'static str {
        match self {
            Speed::Half => "0.5x",
            Speed::Normal => "1x",
            Speed::OneAndHalf => "1.5x",
            Speed::Double => "2x",
        }
    }

    /// Time between two automatic steps
    pub fn tick_period(self) -> Duration {
        Duration::from_millis((TICK_BASE_MS as f64 / self.multiplier()) as u64)
    }

    pub fn faster(self) -> Speed {
        match self {
            Speed::Half => Speed::Normal,
            Speed::Normal => Speed::OneAndHalf,
            Speed::OneAndHalf | Speed::Double => Speed::Double,
        }
    }

    pub fn slower(self) -> Speed {
        match self {
            Speed::Double => Speed::OneAndHalf,
            Speed::OneAndHalf => Speed::Normal,
            Speed::Normal | Speed::Half => Speed::Half,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Paused,
    Playing,
}

/// Token identifying one loaded sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

/// Read-only view of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    pub current_index: usize,
    pub total: usize,
    pub status: PlaybackStatus,
    pub speed: Speed,
}

#[derive(Debug, Clone)]
pub struct PlaybackController {
    current_index: usize,
    total: usize,
    status: PlaybackStatus,
    speed: Speed,
    generation: Generation,
    /// When the last automatic step happened (or playback started)
    last_tick: Option<Instant>,
}

impl Default for PlaybackController {
    fn default() -> Self {
        PlaybackController::new(0, Speed::default())
    }
}

impl PlaybackController {
    pub fn new(total: usize, speed: Speed) -> Self {
        PlaybackController {
            current_index: 0,
            total,
            status: PlaybackStatus::Paused,
            speed,
            generation: Generation(0),
            last_tick: None,
        }
    }

    /// Install a new sequence length: index 0, paused, fresh generation
    pub fn load(&mut self, total: usize) -> Generation {
        self.generation = Generation(self.generation.0 + 1);
        self.total = total;
        self.current_index = 0;
        self.status = PlaybackStatus::Paused;
        self.last_tick = None;
        debug!(total, generation = self.generation.0, "playback loaded");
        self.generation
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Takes effect from the next tick
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            current_index: self.current_index,
            total: self.total,
            status: self.status,
            speed: self.speed,
        }
    }

    fn last_index(&self) -> usize {
        self.total.saturating_sub(1)
    }

    pub fn is_at_end(&self) -> bool {
        self.current_index >= self.last_index()
    }

    /// Start playing; no-op when there is nothing left to play
    pub fn play(&mut self) -> bool {
        if self.total == 0 || self.is_at_end() {
            return false;
        }
        self.status = PlaybackStatus::Playing;
        self.last_tick = Some(Instant::now());
        true
    }

    pub fn pause(&mut self) {
        self.status = PlaybackStatus::Paused;
        self.last_tick = None;
    }

    /// Toggle between playing and paused; returns true when now playing
    pub fn toggle(&mut self) -> bool {
        if self.is_playing() {
            self.pause();
            false
        } else {
            self.play()
        }
    }

    /// Move one step forward, clamped at the last index
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Move one step back, clamped at 0
    pub fn step_backward(&mut self) -> bool {
        if self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Move up to `n` steps forward; returns how many were taken
    pub fn step_forward_by(&mut self, n: usize) -> usize {
        let target = self.current_index.saturating_add(n).min(self.last_index());
        let taken = target.saturating_sub(self.current_index);
        self.current_index = target.max(self.current_index);
        taken
    }

    /// Jump to an index, clamped to the sequence
    pub fn seek(&mut self, index: usize) {
        self.current_index = index.min(self.last_index());
    }

    /// Back to the first step, paused
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.pause();
    }

    /// To the last step, paused
    pub fn jump_to_end(&mut self) {
        self.current_index = self.last_index();
        self.pause();
    }

    /// Apply one timer tick issued for `generation`.
    ///
    /// Returns true when the cursor moved. Stale generations and ticks while
    /// paused are ignored. Reaching the last index pauses playback.
    pub fn tick(&mut self, generation: Generation) -> bool {
        if generation != self.generation {
            trace!(
                stale = generation.0,
                current = self.generation.0,
                "ignored stale tick"
            );
            return false;
        }
        if !self.is_playing() {
            return false;
        }

        let moved = self.step_forward();
        if self.is_at_end() {
            self.pause();
        }
        moved
    }

    /// Tick if a full period has elapsed since the last one
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(last) = self.last_tick else {
            return false;
        };
        if !self.is_playing() || now.saturating_duration_since(last) < self.speed.tick_period() {
            return false;
        }
        let moved = self.tick(self.generation);
        if self.is_playing() {
            self.last_tick = Some(now);
        }
        moved
    }
}
