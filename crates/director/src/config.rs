//! Session configuration accepted from the presentation collaborator

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Game mode. Gates when the collaborator asks for AI moves or hints;
/// it carries no rules semantics inside the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    HumanVsAi,
    HumanVsHuman,
    Training,
}

/// Session settings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub mode: GameMode,
    /// Search depth in plies; deeper is stronger and slower.
    pub depth: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsAi,
            depth: 4,
        }
    }
}

impl Config {
    /// Cycle Easy (2) -> Medium (4) -> Hard (6).
    pub fn cycle_difficulty(&mut self) {
        self.depth = if self.depth >= 6 { 2 } else { self.depth + 2 };
    }

    pub fn difficulty_label(&self) -> &'static str {
        match self.depth {
            0..=2 => "Easy",
            3..=4 => "Medium",
            _ => "Hard",
        }
    }

    /// Save settings to a TOML file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let text =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, text).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
