//! Per-frame orchestration: the update step and the draw dispatch.

use glam::Vec2;
use rand::Rng;

use crate::backend::{Audio, Clip, HeldKeys, Renderer, Rgb};
use crate::collision::{self, Resolution};
use crate::entities::{Mode, Sprite};
use crate::game::Game;
use crate::ui;

const TITLE_COLOR: Rgb = Rgb(0, 0, 0);
const GAME_OVER_FILL: Rgb = Rgb(250, 10, 10);
const GAME_OVER_TEXT: Rgb = Rgb(255, 255, 255);
const HUD_COLOR: Rgb = Rgb(0, 255, 255);

impl<R: Rng> Game<R> {
    /// Advance one tick.  Only the `Playing` screen simulates; paused and
    /// game-over ticks just keep the music stopped.
    ///
    /// Returns the per-meteor resolutions, empty when nothing was simulated.
    pub fn on_update(
        &mut self,
        dt: f32,
        held: &HeldKeys,
        audio: &mut impl Audio,
    ) -> Vec<Resolution> {
        match self.mode() {
            Mode::Paused | Mode::GameOver => {
                audio.stop(Clip::BackgroundMusic);
                return Vec::new();
            }
            Mode::StartScreen => return Vec::new(),
            Mode::Playing => {}
        }

        if self.state.sound_on {
            audio.play(Clip::BackgroundMusic);
        }
        self.player.animate(dt);
        let outcome = collision::resolve(
            &mut self.state,
            &mut self.player,
            &mut self.meteors,
            &self.config,
            &mut self.rng,
            dt,
        );

        self.player.steer(held, &self.state);
        self.player.fire(held.fire, &mut self.state, audio);
        if self.state.fire {
            self.player.move_laser(&mut self.state);
        }
        outcome
    }

    /// Issue this frame's draw calls for the current screen.
    pub fn on_draw(&self, renderer: &mut impl Renderer) -> std::io::Result<()> {
        match self.mode() {
            Mode::StartScreen => self.draw_start_screen(renderer)?,
            Mode::GameOver => self.draw_game_over_screen(renderer)?,
            Mode::Playing | Mode::Paused if self.state.lives > 0 => {
                self.draw_game_screen(renderer)?
            }
            Mode::Playing | Mode::Paused => {}
        }
        Ok(())
    }

    fn draw_start_screen(&self, renderer: &mut impl Renderer) -> std::io::Result<()> {
        let field = self.field();
        let home = Sprite::HomeBackground.size();
        renderer.draw_sprite(Sprite::HomeBackground, home / 2.0, home, 0.0)?;
        renderer.draw_text(
            "SPACESHIP GAME",
            Vec2::new(field.x / 2.0 - 150.0, 100.0),
            TITLE_COLOR,
            40.0,
        )?;
        self.draw_buttons(renderer)
    }

    fn draw_game_over_screen(&self, renderer: &mut impl Renderer) -> std::io::Result<()> {
        renderer.fill_screen(GAME_OVER_FILL)?;
        renderer.draw_text("Game Over", Vec2::new(150.0, 260.0), GAME_OVER_TEXT, 80.0)?;
        renderer.draw_text(
            &format!("Score: {}", self.state.score),
            Vec2::new(230.0, 350.0),
            GAME_OVER_TEXT,
            50.0,
        )?;
        self.draw_buttons(renderer)
    }

    fn draw_game_screen(&self, renderer: &mut impl Renderer) -> std::io::Result<()> {
        let field = self.field();
        renderer.draw_sprite(Sprite::Background, field / 2.0, field, 0.0)?;

        for entity in [&self.player.ship, &self.player.laser]
            .into_iter()
            .chain(self.meteors.meteors().iter().map(|m| &m.body))
        {
            renderer.draw_sprite(entity.sprite, entity.pos, entity.sprite.size(), entity.angle)?;
        }

        renderer.draw_text(
            &format!("Score={}", self.state.score),
            Vec2::new(10.0, 10.0),
            HUD_COLOR,
            30.0,
        )?;
        renderer.draw_text(
            &format!("Lives={}", self.state.lives),
            Vec2::new(field.x - 100.0, 10.0),
            HUD_COLOR,
            30.0,
        )?;
        self.draw_buttons(renderer)
    }

    fn draw_buttons(&self, renderer: &mut impl Renderer) -> std::io::Result<()> {
        for (_, entity) in ui::layout(&self.state, self.field()) {
            renderer.draw_sprite(entity.sprite, entity.pos, entity.sprite.size(), 0.0)?;
        }
        Ok(())
    }
}
