//! Core of a single-player meteor shooter: entities, the meteor field, the
//! player's ship and laser, collision scoring, the screen state machine and
//! the per-frame update/draw loop.  Rendering, audio and input polling are
//! collaborators supplied by the host through the traits in [`backend`].

pub mod backend;
pub mod collision;
pub mod config;
pub mod entities;
pub mod error;
mod frame;
pub mod game;
pub mod meteors;
pub mod player;
pub mod ui;

pub use game::{Flow, Game};
