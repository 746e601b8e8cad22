//! Per-tick meteor resolution: off-screen respawns, laser hits, ship hits,
//! and normal motion for everything else.

use log::{debug, info};
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::GameState;
use crate::meteors::MeteorField;
use crate::player::Player;

/// What happened to one meteor during a tick.  Exactly one applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Fell past the bottom edge and was respawned.
    OffScreen,
    /// Shot down: score awarded, meteor respawned, laser reset.
    LaserHit,
    /// Rammed the ship: one life lost, meteor respawned.
    ShipHit,
    /// Untouched; advanced by the field.
    Clear,
}

/// Resolve every meteor in slot order, then advance the untouched ones.
///
/// Checks short-circuit in the order off-screen, laser, ship, so a meteor
/// overlapping both the laser and the ship counts as shot.  Returns one
/// entry per slot.
pub fn resolve(
    state: &mut GameState,
    player: &mut Player,
    field: &mut MeteorField,
    config: &GameConfig,
    rng: &mut impl Rng,
    dt: f32,
) -> Vec<Resolution> {
    let height = config.field_height();
    let mut outcome = Vec::with_capacity(field.len());

    for slot in 0..field.len() {
        let body = &field.meteors()[slot].body;
        let resolution = if body.pos.y > height {
            Resolution::OffScreen
        } else if body.overlaps(&player.laser) {
            Resolution::LaserHit
        } else if body.overlaps(&player.ship) {
            Resolution::ShipHit
        } else {
            Resolution::Clear
        };

        match resolution {
            Resolution::OffScreen => field.respawn(slot, rng),
            Resolution::LaserHit => {
                state.score += config.laser_score;
                debug!("meteor {} shot down, score {}", slot, state.score);
                field.respawn(slot, rng);
                player.anchor_laser();
                state.fire = false;
            }
            Resolution::ShipHit => {
                state.lives = state.lives.saturating_sub(1);
                debug!("meteor {} hit the ship, {} lives left", slot, state.lives);
                field.respawn(slot, rng);
                if state.lives == 0 && !state.game_over {
                    info!("game over with score {}", state.score);
                    state.game_over = true;
                }
            }
            Resolution::Clear => {}
        }
        outcome.push(resolution);
    }

    field.advance(dt, height, |slot| outcome[slot] != Resolution::Clear);
    outcome
}
