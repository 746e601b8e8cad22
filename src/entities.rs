//! Game entity types: plain data plus the bounding-box maths they share.
//!
//! Positions are sprite centres in playfield units (origin top-left, y grows
//! downward).  Rotation is in degrees, counter-clockwise.

use glam::Vec2;

/// Number of frames in the ship's engine animation.
pub const SHIP_FRAMES: usize = 3;

/// Number of distinct meteor images a respawn can pick from.
pub const METEOR_VARIANTS: u8 = 8;

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Visual tag of an entity.  The renderer owns the pixels; the core only
/// needs each tag's dimensions for collision and layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    /// Ship animation frame `0..SHIP_FRAMES`.
    Spaceship(usize),
    Laser,
    /// Meteor image `0..METEOR_VARIANTS`.
    Meteor(u8),
    Background,
    HomeBackground,
    ButtonStart,
    ButtonReplay,
    ButtonPause,
    ButtonExit,
    ButtonSoundOn,
    ButtonSoundOff,
}

/// Meteor image sizes, big rocks first.
const METEOR_SIZES: [(f32, f32); METEOR_VARIANTS as usize] = [
    (101.0, 84.0),
    (120.0, 98.0),
    (89.0, 82.0),
    (98.0, 96.0),
    (43.0, 43.0),
    (45.0, 40.0),
    (28.0, 28.0),
    (29.0, 26.0),
];

impl Sprite {
    /// Unrotated image dimensions.
    pub fn size(self) -> Vec2 {
        let (w, h) = match self {
            Sprite::Spaceship(_) => (99.0, 75.0),
            Sprite::Laser => (9.0, 54.0),
            Sprite::Meteor(variant) => METEOR_SIZES[variant as usize % METEOR_SIZES.len()],
            Sprite::Background | Sprite::HomeBackground => (600.0, 700.0),
            Sprite::ButtonStart
            | Sprite::ButtonReplay
            | Sprite::ButtonPause
            | Sprite::ButtonExit
            | Sprite::ButtonSoundOn
            | Sprite::ButtonSoundOff => (200.0, 60.0),
        };
        Vec2::new(w, h)
    }
}

// ── Entity ────────────────────────────────────────────────────────────────────

/// A positioned, rotatable, drawable object with an axis-aligned bounding box.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    /// Centre of the sprite.
    pub pos: Vec2,
    pub sprite: Sprite,
    /// Degrees, counter-clockwise.
    pub angle: f32,
}

impl Entity {
    pub fn new(sprite: Sprite, pos: Vec2) -> Self {
        Self {
            pos,
            sprite,
            angle: 0.0,
        }
    }

    /// Size of the bounding box: the axis-aligned hull of the rotated sprite.
    pub fn size(&self) -> Vec2 {
        let base = self.sprite.size();
        if self.angle == 0.0 {
            return base;
        }
        let (sin, cos) = self.angle.to_radians().sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        Vec2::new(base.x * cos + base.y * sin, base.x * sin + base.y * cos)
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.size().x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size().x / 2.0
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.size().y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size().y / 2.0
    }

    pub fn midbottom(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.bottom())
    }

    /// Move the entity so that the centre of its bottom edge sits on `point`.
    pub fn set_midbottom(&mut self, point: Vec2) {
        self.pos = Vec2::new(point.x, point.y - self.size().y / 2.0);
    }

    /// Rectangle intersection.  Boxes that merely touch do not overlap.
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Half-open point test: left/top edges are inside, right/bottom are not.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

/// One meteor together with the slot it occupies.  The slot never changes
/// and selects the meteor's fall speed.
#[derive(Clone, Debug, PartialEq)]
pub struct Meteor {
    pub slot: usize,
    pub body: Entity,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Effective screen mode, derived from the [`GameState`] flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    StartScreen,
    Playing,
    Paused,
    GameOver,
}

/// Score, lives and the screen flags.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub score: u32,
    pub lives: u32,
    /// A laser is currently in flight.
    pub fire: bool,
    pub start_screen: bool,
    pub game_over: bool,
    pub paused: bool,
    pub sound_on: bool,
}

impl GameState {
    /// Fresh state for process start: sitting on the start screen, sound on.
    pub fn new(starting_lives: u32) -> Self {
        Self {
            score: 0,
            lives: starting_lives,
            fire: false,
            start_screen: true,
            game_over: false,
            paused: false,
            sound_on: true,
        }
    }

    /// Priority: start screen, then game over, then paused, else playing.
    pub fn mode(&self) -> Mode {
        if self.start_screen {
            Mode::StartScreen
        } else if self.game_over {
            Mode::GameOver
        } else if self.paused {
            Mode::Paused
        } else {
            Mode::Playing
        }
    }

    /// Restore the per-session values.  The sound preference survives.
    pub fn reset(&mut self, starting_lives: u32) {
        self.score = 0;
        self.lives = starting_lives;
        self.fire = false;
        self.game_over = false;
        self.paused = false;
    }
}
