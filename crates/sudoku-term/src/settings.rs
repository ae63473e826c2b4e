use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use sudoku_engine::Difficulty;

fn settings_path() -> PathBuf {
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sudoku-term");
    config_dir.join("settings.json")
}

/// User preferences persisted across runs. A missing or unreadable file
/// falls back to defaults.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Settings {
    pub difficulty: Difficulty,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        let data = match std::fs::read_to_string(settings_path()) {
            Ok(data) => data,
            Err(_) => return Self::default(),
        };
        serde_json::from_str(&data).unwrap_or_default()
    }

    pub fn save(&self) -> std::io::Result<()> {
        let path = settings_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(self).expect("settings serialize");
        std::fs::write(path, json)
    }
}
