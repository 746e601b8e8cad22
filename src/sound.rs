//! Terminal stand-in for an audio device: the laser rings the bell, the
//! background track is tracked as a flag and logged.

use log::trace;

use spaceship_game::backend::{Audio, Clip};

#[derive(Debug, Default)]
pub struct TerminalAudio {
    music_playing: bool,
    bell: bool,
}

impl TerminalAudio {
    /// True once per laser shot since the last call.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell)
    }
}

impl Audio for TerminalAudio {
    fn play(&mut self, clip: Clip) {
        match clip {
            Clip::BackgroundMusic if !self.music_playing => {
                trace!("music started");
                self.music_playing = true;
            }
            Clip::BackgroundMusic => {}
            Clip::Laser => self.bell = true,
        }
    }

    fn stop(&mut self, clip: Clip) {
        if clip == Clip::BackgroundMusic && self.music_playing {
            trace!("music stopped");
            self.music_playing = false;
        }
    }
}
