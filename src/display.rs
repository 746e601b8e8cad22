//! Rendering layer: all terminal output lives here.
//!
//! The game draws in playfield units (600×700 by default); `Viewport` scales
//! those onto whatever terminal grid is available and back again for mouse
//! clicks.  No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use glam::Vec2;

use spaceship_game::backend::{Renderer, Rgb};
use spaceship_game::entities::Sprite;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SPACE: Color = Color::Rgb { r: 5, g: 5, b: 25 };
const C_HOME: Color = Color::Rgb { r: 190, g: 215, b: 250 };
const C_SHIP: Color = Color::White;
const C_EXHAUST: Color = Color::DarkYellow;
const C_LASER: Color = Color::Cyan;
const C_METEOR_BIG: Color = Color::DarkYellow;
const C_METEOR_SMALL: Color = Color::Grey;
const C_BUTTON: Color = Color::Black;
const C_BUTTON_FACE: Color = Color::Rgb { r: 240, g: 200, b: 60 };

/// Exhaust flicker, one glyph per ship animation frame.
const EXHAUST: [&str; 3] = ["'", "\"", "*"];

/// Meteor glyphs, one per quarter turn.
const SPIN: [char; 4] = ['◐', '◓', '◑', '◒'];

// ── Coordinate mapping ────────────────────────────────────────────────────────

/// Maps playfield coordinates to terminal cells.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub field: Vec2,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, field: Vec2) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            field,
        }
    }

    /// Cell containing a playfield point, clamped to the screen.
    pub fn to_cell(&self, p: Vec2) -> (u16, u16) {
        let col = (p.x / self.field.x * self.cols as f32).floor();
        let row = (p.y / self.field.y * self.rows as f32).floor();
        (
            col.clamp(0.0, (self.cols - 1) as f32) as u16,
            row.clamp(0.0, (self.rows - 1) as f32) as u16,
        )
    }

    /// Playfield point at the centre of a cell.
    pub fn to_field(&self, col: u16, row: u16) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) / self.cols as f32 * self.field.x,
            (row as f32 + 0.5) / self.rows as f32 * self.field.y,
        )
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

// ── Renderer ──────────────────────────────────────────────────────────────────

pub struct TerminalRenderer<W: Write> {
    out: W,
    pub viewport: Viewport,
    bell: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, viewport: Viewport) -> Self {
        Self {
            out,
            viewport,
            bell: false,
        }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Reset colours and wipe the screen before a new frame.
    pub fn clear(&mut self) -> std::io::Result<()> {
        self.out.queue(style::ResetColor)?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    /// Ring the terminal bell with the next flush.
    pub fn ring(&mut self) {
        self.bell = true;
    }

    /// Park the cursor and flush the frame.
    pub fn present(&mut self) -> std::io::Result<()> {
        if std::mem::take(&mut self.bell) {
            self.out.queue(Print('\u{7}'))?;
        }
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.viewport.rows.saturating_sub(1)))?;
        self.out.flush()
    }

    /// Paint the whole screen in one background colour.
    fn flood(&mut self, bg: Color) -> std::io::Result<()> {
        self.out.queue(style::SetBackgroundColor(bg))?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    /// Print `text` centred on a playfield point.
    fn print_centered(&mut self, text: &str, at: Vec2, fg: Color) -> std::io::Result<()> {
        let (col, row) = self.viewport.to_cell(at);
        let half = text.chars().count() as u16 / 2;
        self.out.queue(cursor::MoveTo(col.saturating_sub(half), row))?;
        self.out.queue(style::SetForegroundColor(fg))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn draw_ship(&mut self, frame: usize, pos: Vec2, size: Vec2) -> std::io::Result<()> {
        // Sprite:
        //   /=A=\     ← body, one row above the exhaust
        //     *       ← exhaust, flickers with the animation frame
        let body = Vec2::new(pos.x, pos.y - size.y / 4.0);
        let exhaust = Vec2::new(pos.x, pos.y + size.y / 4.0);
        self.print_centered("/=A=\\", body, C_SHIP)?;
        self.print_centered(EXHAUST[frame % EXHAUST.len()], exhaust, C_EXHAUST)
    }

    fn draw_meteor(&mut self, variant: u8, pos: Vec2, rotation: f32) -> std::io::Result<()> {
        let quarter = (rotation / 90.0).floor() as i64;
        let glyph = SPIN[quarter.rem_euclid(SPIN.len() as i64) as usize];
        if variant < 4 {
            self.print_centered(&format!("({})", glyph), pos, C_METEOR_BIG)
        } else {
            self.print_centered(&glyph.to_string(), pos, C_METEOR_SMALL)
        }
    }

    fn draw_button(&mut self, label: &str, pos: Vec2) -> std::io::Result<()> {
        self.out.queue(style::SetBackgroundColor(C_BUTTON_FACE))?;
        self.print_centered(&format!("[ {} ]", label), pos, C_BUTTON)?;
        self.out.queue(style::SetBackgroundColor(Color::Reset))?;
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn fill_screen(&mut self, rgb: Rgb) -> std::io::Result<()> {
        self.flood(color(rgb))
    }

    fn draw_sprite(
        &mut self,
        sprite: Sprite,
        position: Vec2,
        size: Vec2,
        rotation: f32,
    ) -> std::io::Result<()> {
        match sprite {
            Sprite::Background => self.flood(C_SPACE),
            Sprite::HomeBackground => self.flood(C_HOME),
            Sprite::Spaceship(frame) => self.draw_ship(frame, position, size),
            Sprite::Laser => self.print_centered("║", position, C_LASER),
            Sprite::Meteor(variant) => self.draw_meteor(variant, position, rotation),
            Sprite::ButtonStart => self.draw_button("START", position),
            Sprite::ButtonReplay => self.draw_button("REPLAY", position),
            Sprite::ButtonPause => self.draw_button("PAUSE", position),
            Sprite::ButtonExit => self.draw_button("EXIT", position),
            Sprite::ButtonSoundOn => self.draw_button("SOUND ON", position),
            Sprite::ButtonSoundOff => self.draw_button("SOUND OFF", position),
        }
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Vec2,
        rgb: Rgb,
        _size: f32,
    ) -> std::io::Result<()> {
        let (col, row) = self.viewport.to_cell(position);
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(color(rgb)))?;
        self.out.queue(Print(text))?;
        Ok(())
    }
}
