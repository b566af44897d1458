//! Outbound sound notifications
//!
//! The simulation only names sounds. Playing them is up to whatever port
//! the host registers.

use log::debug;
use std::sync::mpsc::Sender;

/// Sound events emitted by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    BuildRoadStart,
    BuildRoadEnd,
    DestroyRoad,
    BuildLot,
}

impl Sound {
    /// Key the host audio platform knows this sound by
    pub fn key(self) -> &'static str {
        match self {
            Sound::BuildRoadStart => "build_road_start",
            Sound::BuildRoadEnd => "build_road_end",
            Sound::DestroyRoad => "destroy_road",
            Sound::BuildLot => "build_lot",
        }
    }
}

/// A host-side sink for sound requests
pub trait AudioPort {
    fn play(&mut self, key: &str);
}

/// Forward a sound to a port. Nothing is returned to the caller.
pub fn play_sound(port: &mut dyn AudioPort, sound: Sound) {
    port.play(sound.key());
}

/// Sends sound keys over a channel
pub struct ChannelAudio {
    sender: Sender<String>,
}

impl ChannelAudio {
    pub fn new(sender: Sender<String>) -> Self {
        Self { sender }
    }
}

impl AudioPort for ChannelAudio {
    fn play(&mut self, key: &str) {
        // A hung-up receiver just means nobody is listening any more
        let _ = self.sender.send(key.to_string());
    }
}

/// Logs sound keys instead of playing them
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioPort for LogAudio {
    fn play(&mut self, key: &str) {
        debug!("Playing sound {}", key);
    }
}
