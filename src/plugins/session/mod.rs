//! Session plugin: the level/spawn director.
//!
//! Data flow:
//! ```text
//! contact resolver / escape watcher ──DirectorCommand──▶ apply_director_commands
//!                                                           │ (single writer of Session)
//!                                                           ├─ level up ─▶ rebuild SpawnTimers, LevelStarted
//!                                                           └─ ended ───▶ halt timers, GameOverDelay
//! tick_spawn_timers ──SpawnEnemy / SpawnLife──▶ enemies / pickups consumers
//! ```
//!
//! `Session` is mutated in exactly one system so score/lives/level cannot be
//! torn between producers. Producers only enqueue `DirectorCommand` intent.

use bevy::prelude::*;

use crate::common::messages::register_message;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::audio::SoundCue;

pub mod director;

pub use director::{Phase, Session, SpawnSchedule};

/// Counter/phase mutations requested by the rest of the game.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectorCommand {
    AddScore,
    LoseLife,
    GainLife,
    /// Fatal collision: end the session regardless of remaining lives.
    EndSession,
}

/// A new level began; the HUD shows a banner for it.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelStarted(pub u32);

/// Periodic spawn requests for the entity factories.
#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnEnemy;

#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnLife;

/// The two independent repeating spawn timers. Rebuilt wholesale on every
/// level advance, so a previous level's cadence can never keep firing.
#[derive(Resource, Debug)]
pub struct SpawnTimers {
    pub enemies: Timer,
    pub lives: Timer,
}

impl SpawnTimers {
    pub fn for_level(level: u32) -> Self {
        let schedule = SpawnSchedule::for_level(level);
        Self {
            enemies: Timer::new(schedule.enemy_interval, TimerMode::Repeating),
            lives: Timer::new(schedule.life_interval, TimerMode::Repeating),
        }
    }

    pub fn halt(&mut self) {
        self.enemies.pause();
        self.lives.pause();
    }

    pub fn is_halted(&self) -> bool {
        self.enemies.is_paused() && self.lives.is_paused()
    }
}

/// Countdown between the session ending and the game-over screen.
#[derive(Resource, Debug)]
pub struct GameOverDelay(pub Timer);

pub fn plugin(app: &mut App) {
    register_message::<DirectorCommand>(app);
    register_message::<LevelStarted>(app);
    register_message::<SpawnEnemy>(app);
    register_message::<SpawnLife>(app);

    app.add_systems(OnEnter(GameState::InGame), begin_session);

    app.add_systems(
        Update,
        (
            apply_director_commands,
            tick_spawn_timers.after(apply_director_commands),
            game_over_transition.after(apply_director_commands),
        )
            .run_if(in_state(GameState::InGame)),
    );
}

/// Fresh zeroed state for every play-through.
pub fn begin_session(mut commands: Commands, mut levels: MessageWriter<LevelStarted>) {
    let mut session = Session::new();
    let level = session.start();

    commands.insert_resource(SpawnTimers::for_level(level));
    commands.insert_resource(session);
    levels.write(LevelStarted(level));
    info!("session started");
}

/// Single writer of `Session`. Applies queued commands, then reacts once if
/// the batch ended the session.
pub fn apply_director_commands(
    mut commands: Commands,
    mut reader: MessageReader<DirectorCommand>,
    mut session: ResMut<Session>,
    mut timers: ResMut<SpawnTimers>,
    tunables: Res<Tunables>,
    mut levels: MessageWriter<LevelStarted>,
    mut cues: MessageWriter<SoundCue>,
) {
    let was_running = session.is_running();

    for cmd in reader.read() {
        match cmd {
            DirectorCommand::AddScore => {
                if let Some(level) = session.add_score() {
                    *timers = SpawnTimers::for_level(level);
                    levels.write(LevelStarted(level));
                    info!("level {level}");
                }
            }
            DirectorCommand::LoseLife => {
                session.lose_life();
            }
            DirectorCommand::GainLife => {
                session.gain_life();
                cues.write(SoundCue::GainLife);
            }
            DirectorCommand::EndSession => session.end(),
        }
    }

    if was_running && !session.is_running() {
        timers.halt();
        commands.insert_resource(GameOverDelay(Timer::from_seconds(
            tunables.game_over_delay_secs,
            TimerMode::Once,
        )));
        info!("session ended at score {}", session.score());
    }
}

/// Tick both spawn timers and emit spawn requests.
///
/// The phase guard makes a tick that races session end a no-op: nothing
/// spawns between the session ending and the timers halting.
pub fn tick_spawn_timers(
    time: Res<Time>,
    session: Res<Session>,
    mut timers: ResMut<SpawnTimers>,
    mut enemies: MessageWriter<SpawnEnemy>,
    mut lives: MessageWriter<SpawnLife>,
) {
    if !session.is_running() {
        return;
    }

    timers.enemies.tick(time.delta());
    timers.lives.tick(time.delta());

    for _ in 0..timers.enemies.times_finished_this_tick() {
        enemies.write(SpawnEnemy);
    }
    for _ in 0..timers.lives.times_finished_this_tick() {
        lives.write(SpawnLife);
    }
}

/// Hold on the ended session briefly, then hand the scene to game over.
pub fn game_over_transition(
    time: Res<Time>,
    delay: Option<ResMut<GameOverDelay>>,
    mut commands: Commands,
    mut next: ResMut<NextState<GameState>>,
) {
    let Some(mut delay) = delay else {
        return;
    };

    delay.0.tick(time.delta());
    if delay.0.is_finished() {
        commands.remove_resource::<GameOverDelay>();
        next.set(GameState::GameOver);
    }
}

#[cfg(test)]
mod tests;
