//! The player's ship and its single laser.

use glam::Vec2;
use log::debug;

use crate::backend::{Audio, Clip, HeldKeys};
use crate::config::GameConfig;
use crate::entities::{Entity, GameState, Sprite, SHIP_FRAMES};

#[derive(Clone, Debug)]
pub struct Player {
    pub ship: Entity,
    pub laser: Entity,
    frame: usize,
    animation_timer: f32,
    animation_speed: f32,
    step: f32,
    laser_step: f32,
    field: Vec2,
}

impl Player {
    /// Ship parked at the bottom centre of the field, laser anchored to it.
    pub fn new(config: &GameConfig) -> Self {
        let field = Vec2::new(config.field_width(), config.field_height());
        let mut player = Self {
            ship: Entity::new(Sprite::Spaceship(0), Vec2::ZERO),
            laser: Entity::new(Sprite::Laser, Vec2::ZERO),
            frame: 0,
            animation_timer: 0.0,
            animation_speed: config.animation_speed,
            step: config.ship_step,
            laser_step: config.laser_step,
            field,
        };
        player.reset_position();
        player
    }

    /// Current animation frame, `0..SHIP_FRAMES`.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Put the ship back on its default anchor and re-anchor the laser.
    pub fn reset_position(&mut self) {
        self.ship.set_midbottom(Vec2::new(self.field.x / 2.0, self.field.y));
        self.anchor_laser();
    }

    /// Snap the laser back onto the ship's bottom centre.
    pub fn anchor_laser(&mut self) {
        let anchor = self.ship.midbottom();
        self.laser.set_midbottom(anchor);
    }

    /// Cycle the ship image every `animation_speed` seconds.
    pub fn animate(&mut self, dt: f32) {
        self.animation_timer += dt;
        if self.animation_timer >= self.animation_speed {
            self.frame = (self.frame + 1) % SHIP_FRAMES;
            self.ship.sprite = Sprite::Spaceship(self.frame);
            self.animation_timer = 0.0;
        }
    }

    /// Shift the ship one step per held direction, keeping it on the field.
    /// An idle laser follows the ship.
    pub fn steer(&mut self, held: &HeldKeys, state: &GameState) {
        let half = self.ship.size() / 2.0;
        let moves = [
            (held.left, Vec2::new(-self.step, 0.0)),
            (held.right, Vec2::new(self.step, 0.0)),
            (held.up, Vec2::new(0.0, -self.step)),
            (held.down, Vec2::new(0.0, self.step)),
        ];
        for (pressed, delta) in moves {
            if !pressed {
                continue;
            }
            self.ship.pos = (self.ship.pos + delta).clamp(half, self.field - half);
            if !state.fire {
                self.anchor_laser();
            }
        }
    }

    /// Launch the laser if the fire key is down and none is in flight.
    pub fn fire(&mut self, pressed: bool, state: &mut GameState, audio: &mut impl Audio) {
        if !pressed || state.fire {
            return;
        }
        state.fire = true;
        debug!("laser fired from x={}", self.laser.pos.x);
        if state.sound_on {
            audio.stop(Clip::BackgroundMusic);
            audio.play(Clip::Laser);
        }
    }

    /// Climb one step while in flight; once past the top edge, land back on
    /// the ship and clear the fire flag.
    pub fn move_laser(&mut self, state: &mut GameState) {
        if state.fire && self.laser.pos.y > 0.0 {
            self.laser.pos.y -= self.laser_step;
        } else {
            state.fire = false;
            self.anchor_laser();
        }
    }
}
