//! Recording fakes for the renderer and audio collaborators, plus helpers
//! for building games in a known layout.
#![allow(dead_code)]

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use spaceship_game::backend::{Audio, Clip, Renderer, Rgb};
use spaceship_game::config::GameConfig;
use spaceship_game::entities::Sprite;
use spaceship_game::ui::Control;
use spaceship_game::Game;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCall {
    Play(Clip),
    Stop(Clip),
}

#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub calls: Vec<AudioCall>,
}

impl Audio for RecordingAudio {
    fn play(&mut self, clip: Clip) {
        self.calls.push(AudioCall::Play(clip));
    }

    fn stop(&mut self, clip: Clip) {
        self.calls.push(AudioCall::Stop(clip));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Fill(Rgb),
    Sprite { sprite: Sprite, pos: Vec2, rotation: f32 },
    Text(String),
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn sprites(&self) -> Vec<Sprite> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Sprite { sprite, .. } => Some(*sprite),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn fill_screen(&mut self, color: Rgb) -> std::io::Result<()> {
        self.calls.push(DrawCall::Fill(color));
        Ok(())
    }

    fn draw_sprite(
        &mut self,
        sprite: Sprite,
        position: Vec2,
        _size: Vec2,
        rotation: f32,
    ) -> std::io::Result<()> {
        self.calls.push(DrawCall::Sprite {
            sprite,
            pos: position,
            rotation,
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        _position: Vec2,
        _color: Rgb,
        _size: f32,
    ) -> std::io::Result<()> {
        self.calls.push(DrawCall::Text(text.to_string()));
        Ok(())
    }
}

/// Meteor x positions that keep clear of the ship's column (x = 300).
pub const PARKED_X: [f32; 5] = [60.0, 150.0, 240.0, 450.0, 540.0];

/// Fresh default game, already past the start screen.
pub fn playing_game() -> Game<StdRng> {
    let mut game = Game::new(GameConfig::default(), seeded_rng());
    game.apply_control(Control::Start, &mut RecordingAudio::default());
    game
}

/// Put every meteor high up the field, away from the ship and laser, with a
/// small unrotated image.
pub fn park_meteors(game: &mut Game<StdRng>) {
    for (meteor, x) in game.meteors.meteors_mut().iter_mut().zip(PARKED_X) {
        meteor.body.pos = Vec2::new(x, 100.0);
        meteor.body.sprite = Sprite::Meteor(6);
        meteor.body.angle = 0.0;
    }
}
