//! On-screen buttons: per-screen layout and pointer hit-testing.

use glam::Vec2;

use crate::backend::PointerButton;
use crate::entities::{Entity, GameState, Mode, Sprite};

/// High-level actions a click or shortcut key can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Start,
    TogglePause,
    Replay,
    ToggleSound,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Start,
    Sound,
    Exit,
    Replay,
    Pause,
}

/// Horizontal gap between neighbouring start-screen buttons.
const BUTTON_SPACING: f32 = 20.0;

impl Button {
    pub fn control(self) -> Control {
        match self {
            Button::Start => Control::Start,
            Button::Sound => Control::ToggleSound,
            Button::Exit => Control::Exit,
            Button::Replay => Control::Replay,
            Button::Pause => Control::TogglePause,
        }
    }

    /// The image reflects the state it toggles.
    pub fn sprite(self, state: &GameState) -> Sprite {
        match self {
            Button::Start => Sprite::ButtonStart,
            Button::Replay => Sprite::ButtonReplay,
            Button::Exit => Sprite::ButtonExit,
            Button::Pause if state.paused => Sprite::ButtonStart,
            Button::Pause => Sprite::ButtonPause,
            Button::Sound if state.sound_on => Sprite::ButtonSoundOn,
            Button::Sound => Sprite::ButtonSoundOff,
        }
    }

    /// Start and replay react to any button; the rest only to a left click.
    pub fn accepts(self, pointer: PointerButton) -> bool {
        matches!(self, Button::Start | Button::Replay) || pointer == PointerButton::Left
    }
}

/// Buttons visible on the screen for `state`, in hit-test order.
pub fn layout(state: &GameState, field: Vec2) -> Vec<(Button, Entity)> {
    let center = field / 2.0;
    let button_width = Sprite::ButtonStart.size().x;
    let placed: Vec<(Button, Vec2)> = match state.mode() {
        Mode::StartScreen => vec![
            (
                Button::Start,
                Vec2::new(center.x - button_width - BUTTON_SPACING, center.y),
            ),
            (Button::Sound, center),
            (
                Button::Exit,
                Vec2::new(center.x + button_width + BUTTON_SPACING, center.y),
            ),
        ],
        Mode::Playing | Mode::Paused => vec![
            (Button::Pause, Vec2::new(center.x - 100.0, 30.0)),
            (Button::Exit, Vec2::new(center.x + 100.0, 30.0)),
        ],
        Mode::GameOver => vec![
            (Button::Replay, Vec2::new(center.x, center.y + 80.0)),
            (Button::Exit, Vec2::new(center.x, center.y + 160.0)),
        ],
    };
    placed
        .into_iter()
        .map(|(button, pos)| (button, Entity::new(button.sprite(state), pos)))
        .collect()
}

/// The control behind the first visible button under `pos`, if it accepts
/// `pointer`.
pub fn hit_test(
    state: &GameState,
    field: Vec2,
    pos: Vec2,
    pointer: PointerButton,
) -> Option<Control> {
    layout(state, field)
        .into_iter()
        .find(|(_, entity)| entity.contains(pos))
        .filter(|(button, _)| button.accepts(pointer))
        .map(|(button, _)| button.control())
}
