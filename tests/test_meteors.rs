mod common;

use approx::assert_relative_eq;
use glam::Vec2;

use spaceship_game::config::GameConfig;
use spaceship_game::entities::Sprite;
use spaceship_game::meteors::MeteorField;

use common::seeded_rng;

fn parked_field(config: &GameConfig) -> MeteorField {
    let mut field = MeteorField::new(config, &mut seeded_rng());
    for (i, meteor) in field.meteors_mut().iter_mut().enumerate() {
        meteor.body.pos = Vec2::new(60.0 + 100.0 * i as f32, 100.0);
    }
    field
}

// ── Construction ──────────────────────────────────────────────────────────────

#[test]
fn new_field_spawns_every_slot_at_the_top() {
    let config = GameConfig::default();
    let field = MeteorField::new(&config, &mut seeded_rng());
    assert_eq!(field.len(), 5);
    for (i, meteor) in field.meteors().iter().enumerate() {
        assert_eq!(meteor.slot, i);
        assert_eq!(meteor.body.pos.y, 0.0);
        assert_eq!(meteor.body.angle, 0.0);
        assert!((40.0..=560.0).contains(&meteor.body.pos.x));
        assert!(matches!(meteor.body.sprite, Sprite::Meteor(v) if v < 8));
    }
}

#[test]
fn speed_is_bound_to_slot_index() {
    let config = GameConfig {
        meteor_speeds: vec![7, 9],
        ..GameConfig::default()
    };
    let field = MeteorField::new(&config, &mut seeded_rng());
    assert_eq!(field.speed(0), 7);
    assert_eq!(field.speed(1), 9);
    assert_eq!(field.speed(4), 7); // 4 % 2 == 0
}

// ── advance ───────────────────────────────────────────────────────────────────

#[test]
fn fall_distance_ignores_dt() {
    let config = GameConfig::default();
    for dt in [0.001, 0.016, 0.5] {
        let mut field = parked_field(&config);
        field.advance(dt, 700.0, |_| false);
        for (i, meteor) in field.meteors().iter().enumerate() {
            assert_eq!(meteor.body.pos.y, 100.0 + (i + 1) as f32);
        }
    }
}

#[test]
fn rotation_scales_with_dt() {
    let config = GameConfig::default();
    let mut field = parked_field(&config);
    field.advance(0.5, 700.0, |_| false);
    for meteor in field.meteors() {
        assert_relative_eq!(meteor.body.angle, 45.0);
    }
    field.advance(0.25, 700.0, |_| false);
    for meteor in field.meteors() {
        assert_relative_eq!(meteor.body.angle, 67.5);
    }
}

#[test]
fn advance_skips_involved_and_off_screen_meteors() {
    let config = GameConfig::default();
    let mut field = parked_field(&config);
    field.meteors_mut()[2].body.pos.y = 701.0;

    field.advance(0.1, 700.0, |slot| slot == 0);

    let m = field.meteors();
    assert_eq!(m[0].body.pos.y, 100.0);
    assert_eq!(m[0].body.angle, 0.0);
    assert_eq!(m[1].body.pos.y, 102.0);
    assert_eq!(m[2].body.pos.y, 701.0);
    assert_eq!(m[3].body.pos.y, 104.0);
}

// ── respawn ───────────────────────────────────────────────────────────────────

#[test]
fn respawn_resets_one_slot_only() {
    let config = GameConfig::default();
    let mut field = parked_field(&config);
    field.advance(1.0, 700.0, |_| false);
    let before = field.meteors().to_vec();

    let mut rng = seeded_rng();
    field.respawn(3, &mut rng);

    let after = field.meteors();
    assert_eq!(after[3].slot, 3);
    assert_eq!(after[3].body.pos.y, 0.0);
    assert_eq!(after[3].body.angle, 0.0);
    assert!((40.0..=560.0).contains(&after[3].body.pos.x));
    for i in [0, 1, 2, 4] {
        assert_eq!(after[i], before[i]);
    }
}

#[test]
fn respawn_all_keeps_the_count() {
    let config = GameConfig::default();
    let mut field = parked_field(&config);
    field.respawn_all(&mut seeded_rng());
    assert_eq!(field.len(), 5);
    assert!(field.meteors().iter().all(|m| m.body.pos.y == 0.0));
    assert!(field.meteors().iter().enumerate().all(|(i, m)| m.slot == i));
}
