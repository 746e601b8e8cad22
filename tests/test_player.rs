mod common;

use glam::Vec2;

use spaceship_game::backend::{Clip, HeldKeys};
use spaceship_game::config::GameConfig;
use spaceship_game::entities::{GameState, Sprite};
use spaceship_game::player::Player;

use common::{AudioCall, RecordingAudio};

fn setup() -> (Player, GameState) {
    let config = GameConfig::default();
    let mut state = GameState::new(config.starting_lives);
    state.start_screen = false;
    (Player::new(&config), state)
}

fn hold(f: impl FnOnce(&mut HeldKeys)) -> HeldKeys {
    let mut held = HeldKeys::default();
    f(&mut held);
    held
}

// ── Anchors ───────────────────────────────────────────────────────────────────

#[test]
fn ship_starts_bottom_centre_with_laser_anchored() {
    let (player, _) = setup();
    assert_eq!(player.ship.midbottom(), Vec2::new(300.0, 700.0));
    assert_eq!(player.laser.midbottom(), Vec2::new(300.0, 700.0));
    assert_eq!(player.laser.pos, Vec2::new(300.0, 673.0));
}

// ── animate ───────────────────────────────────────────────────────────────────

#[test]
fn animation_cycles_three_frames() {
    let (mut player, _) = setup();
    player.animate(0.15);
    assert_eq!(player.frame(), 0);
    player.animate(0.15);
    assert_eq!(player.frame(), 1);
    assert_eq!(player.ship.sprite, Sprite::Spaceship(1));
    player.animate(0.25);
    assert_eq!(player.frame(), 2);
    player.animate(0.25);
    assert_eq!(player.frame(), 0);
    assert_eq!(player.ship.sprite, Sprite::Spaceship(0));
}

#[test]
fn animation_timer_resets_after_each_frame() {
    let (mut player, _) = setup();
    player.animate(0.5); // one frame, not two
    assert_eq!(player.frame(), 1);
    player.animate(0.1);
    assert_eq!(player.frame(), 1);
}

// ── steer ─────────────────────────────────────────────────────────────────────

#[test]
fn steer_moves_five_units_per_direction() {
    let (mut player, state) = setup();
    player.steer(&hold(|h| h.left = true), &state);
    assert_eq!(player.ship.pos.x, 295.0);
    player.steer(&hold(|h| h.up = true), &state);
    assert_eq!(player.ship.pos.y, 657.5);
    player.steer(&hold(|h| { h.right = true; h.down = true; }), &state);
    assert_eq!(player.ship.pos, Vec2::new(300.0, 662.5));
}

#[test]
fn idle_laser_tracks_the_ship() {
    let (mut player, state) = setup();
    player.steer(&hold(|h| h.left = true), &state);
    assert_eq!(player.laser.midbottom(), player.ship.midbottom());
}

#[test]
fn laser_in_flight_does_not_follow() {
    let (mut player, mut state) = setup();
    state.fire = true;
    player.laser.pos.y = 300.0;
    player.steer(&hold(|h| h.left = true), &state);
    assert_eq!(player.laser.pos, Vec2::new(300.0, 300.0));
}

#[test]
fn steer_clamps_to_the_field() {
    let (mut player, state) = setup();
    player.ship.pos.x = 52.0;
    player.steer(&hold(|h| h.left = true), &state);
    assert_eq!(player.ship.left(), 0.0);

    player.ship.pos.x = 548.0;
    player.steer(&hold(|h| h.right = true), &state);
    assert_eq!(player.ship.right(), 600.0);

    player.steer(&hold(|h| h.down = true), &state);
    assert_eq!(player.ship.bottom(), 700.0);

    player.ship.pos.y = 40.0;
    player.steer(&hold(|h| h.up = true), &state);
    assert_eq!(player.ship.top(), 0.0);
}

// ── fire / move_laser ─────────────────────────────────────────────────────────

#[test]
fn fire_launches_and_swaps_audio() {
    let (mut player, mut state) = setup();
    let mut audio = RecordingAudio::default();
    player.fire(true, &mut state, &mut audio);
    assert!(state.fire);
    assert_eq!(
        audio.calls,
        vec![
            AudioCall::Stop(Clip::BackgroundMusic),
            AudioCall::Play(Clip::Laser)
        ]
    );
}

#[test]
fn fire_is_silent_with_sound_off() {
    let (mut player, mut state) = setup();
    state.sound_on = false;
    let mut audio = RecordingAudio::default();
    player.fire(true, &mut state, &mut audio);
    assert!(state.fire);
    assert!(audio.calls.is_empty());
}

#[test]
fn fire_ignored_while_laser_in_flight_or_key_up() {
    let (mut player, mut state) = setup();
    let mut audio = RecordingAudio::default();
    player.fire(false, &mut state, &mut audio);
    assert!(!state.fire);

    state.fire = true;
    player.fire(true, &mut state, &mut audio);
    assert!(audio.calls.is_empty());
}

#[test]
fn laser_climbs_ten_units_per_tick() {
    let (mut player, mut state) = setup();
    state.fire = true;
    player.move_laser(&mut state);
    assert_eq!(player.laser.pos.y, 663.0);
    player.move_laser(&mut state);
    assert_eq!(player.laser.pos.y, 653.0);
    assert!(state.fire);
}

#[test]
fn laser_past_top_lands_back_on_ship() {
    let (mut player, mut state) = setup();
    state.fire = true;
    player.laser.pos.y = -7.0;
    player.move_laser(&mut state);
    assert!(!state.fire);
    assert_eq!(player.laser.midbottom(), player.ship.midbottom());
}
