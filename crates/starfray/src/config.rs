//! Game configuration

use serde::{Deserialize, Serialize};
use sim_engine::prelude::Config;

/// Skirmish configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// View width in world units
    pub screen_width: f32,

    /// View height in world units
    pub screen_height: f32,

    /// Simulation steps per second
    pub step_hz: f32,

    /// World RNG seed
    pub seed: u64,

    /// How long the headless skirmish runs before calling it a draw
    pub battle_seconds: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 1024.0,
            screen_height: 700.0,
            step_hz: 60.0,
            seed: 42,
            battle_seconds: 30.0,
        }
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Load configuration from a file, falling back to defaults if absent
    pub fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("using default config ({err})");
                Self::default()
            }
        }
    }
}
