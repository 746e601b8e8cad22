//! The fixed-size meteor field: per-slot fall speeds, rotation and respawn.
//!
//! Collision and off-screen checks live in `collision`; the field only moves
//! meteors and respawns the ones it is told to.

use glam::Vec2;
use log::trace;
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Entity, Meteor, Sprite, METEOR_VARIANTS};

#[derive(Clone, Debug)]
pub struct MeteorField {
    meteors: Vec<Meteor>,
    speeds: Vec<u32>,
    rotation_speed: f32,
    width: u32,
    margin: u32,
}

impl MeteorField {
    /// Spawn `config.meteor_count` meteors along the top edge.
    pub fn new(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let mut field = Self {
            meteors: Vec::with_capacity(config.meteor_count),
            speeds: config.meteor_speeds.clone(),
            rotation_speed: config.meteor_rotation_speed,
            width: config.width,
            margin: config.spawn_margin,
        };
        for slot in 0..config.meteor_count {
            let body = field.spawn_body(rng);
            field.meteors.push(Meteor { slot, body });
        }
        field
    }

    pub fn meteors(&self) -> &[Meteor] {
        &self.meteors
    }

    /// Mutable access to the meteors.  A slice, so the count cannot change.
    pub fn meteors_mut(&mut self) -> &mut [Meteor] {
        &mut self.meteors
    }

    pub fn len(&self) -> usize {
        self.meteors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meteors.is_empty()
    }

    /// Fall distance per tick for a slot.
    pub fn speed(&self, slot: usize) -> u32 {
        self.speeds[slot % self.speeds.len()]
    }

    /// Move every meteor that is still on the field and not `involved` in a
    /// collision this tick.
    ///
    /// The fall is a fixed distance per tick regardless of `dt`; only the
    /// spin is scaled by `dt`.
    pub fn advance<F>(&mut self, dt: f32, field_height: f32, mut involved: F)
    where
        F: FnMut(usize) -> bool,
    {
        for i in 0..self.meteors.len() {
            let speed = self.speed(self.meteors[i].slot) as f32;
            let meteor = &mut self.meteors[i];
            if involved(meteor.slot) || meteor.body.pos.y > field_height {
                continue;
            }
            meteor.body.pos.y += speed;
            meteor.body.angle += self.rotation_speed * dt;
        }
    }

    /// Send a meteor back to the top with a fresh x, image and angle.
    pub fn respawn(&mut self, slot: usize, rng: &mut impl Rng) {
        let body = self.spawn_body(rng);
        // Meteors are stored in slot order.
        if let Some(meteor) = self.meteors.get_mut(slot) {
            trace!("meteor {} respawned at x={}", slot, body.pos.x);
            meteor.body = body;
        }
    }

    pub fn respawn_all(&mut self, rng: &mut impl Rng) {
        for slot in 0..self.meteors.len() {
            self.respawn(slot, rng);
        }
    }

    fn spawn_body(&self, rng: &mut impl Rng) -> Entity {
        let x = rng.gen_range(self.margin..=self.width - self.margin) as f32;
        let sprite = Sprite::Meteor(rng.gen_range(0..METEOR_VARIANTS));
        Entity::new(sprite, Vec2::new(x, 0.0))
    }
}
