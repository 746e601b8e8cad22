//! Contracts for the collaborators the core drives: a renderer, an audio
//! sink, and the input source's view of held keys and pointer buttons.

use glam::Vec2;

use crate::entities::Sprite;

/// 8-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Draw calls issued once per frame.  Implementations own no game logic.
pub trait Renderer {
    fn fill_screen(&mut self, color: Rgb) -> std::io::Result<()>;

    /// `position` is the sprite centre; `rotation` is in degrees.
    fn draw_sprite(
        &mut self,
        sprite: Sprite,
        position: Vec2,
        size: Vec2,
        rotation: f32,
    ) -> std::io::Result<()>;

    /// `position` is the top-left corner of the text.
    fn draw_text(
        &mut self,
        text: &str,
        position: Vec2,
        color: Rgb,
        size: f32,
    ) -> std::io::Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Clip {
    BackgroundMusic,
    Laser,
}

/// Fire-and-forget sound playback.
///
/// `play(Clip::BackgroundMusic)` is issued every active tick; backends treat
/// a repeat play of a track that is already running as a no-op.
pub trait Audio {
    fn play(&mut self, clip: Clip);
    fn stop(&mut self, clip: Clip);
}

/// Audio sink that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Audio for Silent {
    fn play(&mut self, _clip: Clip) {}
    fn stop(&mut self, _clip: Clip) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// Keys currently held down, sampled once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}
