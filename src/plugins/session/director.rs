//! Session state machine and spawn cadence table.
//!
//! A `Session` owns the per-play-through counters (score, lives, level) and
//! the phase machine `NotStarted -> Running -> Ended`. `Ended` is terminal:
//! a new play-through constructs a new `Session`. Counters are private and
//! only move through the operations below.

use std::time::Duration;

use bevy::prelude::*;

pub const STARTING_LIVES: u8 = 3;
pub const MAX_LIVES: u8 = 5;

/// Scores at which the level advances. Kills score exactly one point each,
/// so an equality check is sufficient; a `>=` check would re-trigger on
/// every score past the first threshold.
const LEVEL_UP_SCORES: [u32; 4] = [10, 25, 50, 75];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Ended,
}

#[derive(Resource, Debug, Clone)]
pub struct Session {
    phase: Phase,
    score: u32,
    lives: u8,
    level: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self { phase: Phase::NotStarted, score: 0, lives: STARTING_LIVES, level: 0 }
    }

    /// Begin the session and enter level 1. Returns the starting level.
    #[must_use]
    pub fn start(&mut self) -> u32 {
        debug_assert_eq!(self.phase, Phase::NotStarted);
        self.phase = Phase::Running;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.level = 0;
        self.advance_level()
    }

    /// Returns the new level. The caller rebuilds the spawn timers from it.
    #[must_use]
    pub fn advance_level(&mut self) -> u32 {
        self.level += 1;
        self.level
    }

    /// Score one kill. Returns `Some(new_level)` when a threshold is hit.
    #[must_use]
    pub fn add_score(&mut self) -> Option<u32> {
        if self.phase != Phase::Running {
            return None;
        }
        self.score += 1;
        LEVEL_UP_SCORES
            .contains(&self.score)
            .then(|| self.advance_level())
    }

    /// Returns true when this loss ended the session.
    pub fn lose_life(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.end();
            true
        } else {
            false
        }
    }

    pub fn gain_life(&mut self) {
        self.lives = (self.lives + 1).min(MAX_LIVES);
    }

    /// Terminal transition. Idempotent.
    pub fn end(&mut self) {
        self.phase = Phase::Ended;
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn lives(&self) -> u8 {
        self.lives
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }
}

/// Spawn cadence for one level: enemy interval shrinks as levels go up,
/// the bonus-life interval stretches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnSchedule {
    pub enemy_interval: Duration,
    pub life_interval: Duration,
}

impl SpawnSchedule {
    pub fn for_level(level: u32) -> Self {
        const TABLE: [(f32, f32); 5] =
            [(1.6, 8.0), (1.3, 9.0), (1.0, 10.0), (0.8, 11.0), (0.6, 12.0)];

        // Levels past the table keep the last row's cadence.
        let idx = (level.max(1) as usize - 1).min(TABLE.len() - 1);
        let (enemy, life) = TABLE[idx];
        Self {
            enemy_interval: Duration::from_secs_f32(enemy),
            life_interval: Duration::from_secs_f32(life),
        }
    }
}
