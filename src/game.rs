//! The simulation context and its screen state machine.
//!
//! `Game` owns every piece of mutable game data.  The host hands it input
//! events and frame ticks; collaborators (audio, renderer) are passed in per
//! call and never stored.

use glam::Vec2;
use log::info;
use rand::rngs::StdRng;
use rand::Rng;

use crate::backend::{Audio, Clip, PointerButton};
use crate::config::GameConfig;
use crate::entities::{GameState, Mode};
use crate::meteors::MeteorField;
use crate::player::Player;
use crate::ui::{self, Control};

/// Whether the host should keep running after an input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Game<R = StdRng> {
    pub config: GameConfig,
    pub state: GameState,
    pub player: Player,
    pub meteors: MeteorField,
    pub(crate) rng: R,
}

impl<R: Rng> Game<R> {
    /// All randomness (meteor x and image) comes through `rng`, so a seeded
    /// generator gives a reproducible game.
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let meteors = MeteorField::new(&config, &mut rng);
        Self {
            state: GameState::new(config.starting_lives),
            player: Player::new(&config),
            meteors,
            config,
            rng,
        }
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn field(&self) -> Vec2 {
        Vec2::new(self.config.field_width(), self.config.field_height())
    }

    /// Pointer click at `pos` in playfield coordinates.
    pub fn on_input(
        &mut self,
        pos: Vec2,
        button: PointerButton,
        audio: &mut impl Audio,
    ) -> Flow {
        match ui::hit_test(&self.state, self.field(), pos, button) {
            Some(control) => self.apply_control(control, audio),
            None => Flow::Continue,
        }
    }

    /// Apply a control if it makes sense on the current screen.
    pub fn apply_control(&mut self, control: Control, audio: &mut impl Audio) -> Flow {
        let mode = self.mode();
        match control {
            Control::Exit => {
                info!("exit requested");
                return Flow::Exit;
            }
            Control::ToggleSound => self.toggle_sound(audio),
            Control::Start if mode == Mode::StartScreen => self.start(audio),
            Control::TogglePause if matches!(mode, Mode::Playing | Mode::Paused) => {
                self.toggle_pause()
            }
            Control::Replay if mode == Mode::GameOver => self.replay(),
            _ => {}
        }
        Flow::Continue
    }

    fn start(&mut self, audio: &mut impl Audio) {
        info!("game started");
        self.state.start_screen = false;
        self.state.paused = false;
        if self.state.sound_on {
            audio.play(Clip::BackgroundMusic);
        }
    }

    fn toggle_pause(&mut self) {
        self.state.paused = !self.state.paused;
        info!("{}", if self.state.paused { "paused" } else { "resumed" });
    }

    fn toggle_sound(&mut self, audio: &mut impl Audio) {
        self.state.sound_on = !self.state.sound_on;
        info!("sound {}", if self.state.sound_on { "on" } else { "off" });
        if !self.state.sound_on {
            audio.stop(Clip::BackgroundMusic);
        }
    }

    /// Full reset straight into play: score, lives, ship, laser and every
    /// meteor.
    fn replay(&mut self) {
        info!("replay after scoring {}", self.state.score);
        self.state.reset(self.config.starting_lives);
        self.state.start_screen = false;
        self.player.reset_position();
        self.meteors.respawn_all(&mut self.rng);
    }
}
