//! HUD and scene host.
//!
//! Owns everything the player reads: score/lives labels kept current from
//! the session, the transient "Level N" banner, the start prompt, and the
//! game-over screen. Also owns the tap transitions between scenes:
//! PreGame --tap--> InGame, GameOver --tap--> PreGame. (Taps *during* a
//! session fire bullets and belong to the player plugin.)

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{arena::Arena, state::GameState};
use crate::plugins::session::{LevelStarted, Session};

const BANNER_SECS: f32 = 1.4;

#[derive(Component)]
pub struct ScoreLabel;

#[derive(Component)]
pub struct LivesLabel;

#[derive(Component)]
pub struct Banner {
    timer: Timer,
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::PreGame), spawn_start_prompt)
        .add_systems(Update, start_on_tap.run_if(in_state(GameState::PreGame)))
        .add_systems(OnEnter(GameState::InGame), spawn_labels)
        .add_systems(
            Update,
            (update_labels, show_level_banner, animate_banners)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(OnEnter(GameState::GameOver), spawn_game_over)
        .add_systems(Update, restart_on_tap.run_if(in_state(GameState::GameOver)));
}

fn label(text: impl Into<String>, font_size: f32) -> (Text2d, TextFont, TextColor) {
    (
        Text2d::new(text),
        TextFont { font_size, ..default() },
        TextColor(Color::WHITE),
    )
}

fn spawn_start_prompt(mut commands: Commands) {
    commands.spawn((
        Name::new("StartPrompt"),
        label("Tap To Begin", 56.0),
        Transform::from_xyz(0.0, 0.0, 5.0),
        DespawnOnExit(GameState::PreGame),
    ));
}

fn start_on_tap(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    mut next: ResMut<NextState<GameState>>,
) {
    let Some(buttons) = buttons else {
        return;
    };
    if buttons.just_pressed(MouseButton::Left) {
        next.set(GameState::InGame);
    }
}

fn spawn_labels(mut commands: Commands, arena: Res<Arena>) {
    let y = arena.top() - 40.0;

    commands.spawn((
        Name::new("ScoreLabel"),
        ScoreLabel,
        label("Score: 0", 28.0),
        Transform::from_xyz(-arena.half_width * 0.5, y, 5.0),
        DespawnOnExit(GameState::InGame),
    ));
    commands.spawn((
        Name::new("LivesLabel"),
        LivesLabel,
        label("Lives: 3", 28.0),
        Transform::from_xyz(arena.half_width * 0.5, y, 5.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn update_labels(
    session: Res<Session>,
    // Disjointness proof: a score label is never a lives label.
    mut q_score: Query<&mut Text2d, (With<ScoreLabel>, Without<LivesLabel>)>,
    mut q_lives: Query<&mut Text2d, (With<LivesLabel>, Without<ScoreLabel>)>,
) {
    if !session.is_changed() {
        return;
    }
    if let Ok(mut text) = q_score.single_mut() {
        text.0 = format!("Score: {}", session.score());
    }
    if let Ok(mut text) = q_lives.single_mut() {
        text.0 = format!("Lives: {}", session.lives());
    }
}

fn show_level_banner(mut commands: Commands, mut levels: MessageReader<LevelStarted>) {
    for LevelStarted(level) in levels.read() {
        commands.spawn((
            Name::new("LevelBanner"),
            Banner { timer: Timer::from_seconds(BANNER_SECS, TimerMode::Once) },
            label(format!("Level {level}"), 72.0),
            Transform { translation: Vec3::new(0.0, 0.0, 5.0), scale: Vec3::splat(0.1), ..default() },
            DespawnOnExit(GameState::InGame),
        ));
    }
}

/// Scale in over the first half, fade out over the second.
fn animate_banners(
    time: Res<Time>,
    mut commands: Commands,
    mut q_banners: Query<(Entity, &mut Banner, &mut Transform, &mut TextColor)>,
) {
    for (e, mut banner, mut tf, mut color) in &mut q_banners {
        banner.timer.tick(time.delta());

        let dur = banner.timer.duration().as_secs_f32().max(0.0001);
        let t = (banner.timer.elapsed_secs() / dur).clamp(0.0, 1.0);

        tf.scale = Vec3::splat((t * 2.0).clamp(0.1, 1.0));
        let mut c = color.0.to_srgba();
        c.alpha = if t < 0.5 { 1.0 } else { 1.0 - (t - 0.5) * 2.0 };
        color.0 = c.into();

        if banner.timer.is_finished() {
            commands.entity(e).despawn();
        }
    }
}

fn spawn_game_over(mut commands: Commands, session: Res<Session>) {
    let screen = [
        ("Game Over", 72.0, 140.0),
        ("Tap To Retry", 30.0, -140.0),
    ];
    for (text, size, y) in screen {
        commands.spawn((
            label(text, size),
            Transform::from_xyz(0.0, y, 5.0),
            DespawnOnExit(GameState::GameOver),
        ));
    }
    commands.spawn((
        label(format!("Score: {}", session.score()), 44.0),
        Transform::from_xyz(0.0, 0.0, 5.0),
        DespawnOnExit(GameState::GameOver),
    ));
}

fn restart_on_tap(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    mut next: ResMut<NextState<GameState>>,
) {
    let Some(buttons) = buttons else {
        return;
    };
    if buttons.just_pressed(MouseButton::Left) {
        next.set(GameState::PreGame);
    }
}
