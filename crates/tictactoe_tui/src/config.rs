//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::Player;
use tracing::{debug, info, instrument};

/// Who plays O.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// A human plays X against the minimax search playing O.
    #[default]
    VsComputer,
    /// Two humans share the keyboard.
    Multiplayer,
}

impl GameMode {
    /// Returns the side the computer plays, if any.
    #[instrument]
    pub fn computer(self) -> Option<Player> {
        match self {
            Self::VsComputer => Some(Player::O),
            Self::Multiplayer => None,
        }
    }
}

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Opponent selection.
    #[serde(default)]
    mode: GameMode,

    /// Display name for X.
    #[serde(default)]
    #[getter(skip)]
    player_x: Option<String>,

    /// Display name for O. Ignored against the computer unless set.
    #[serde(default)]
    #[getter(skip)]
    player_o: Option<String>,

    /// File that receives logs while the terminal UI runs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

impl GameConfig {
    /// Creates a configuration with default names.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            player_x: None,
            player_o: None,
            log_file: default_log_file(),
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path`, or returns defaults if it doesn't exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        mode: Option<GameMode>,
        player_x: Option<String>,
        player_o: Option<String>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if player_x.is_some() {
            self.player_x = player_x;
        }
        if player_o.is_some() {
            self.player_o = player_o;
        }
        self
    }

    /// Returns the display name for `player`.
    ///
    /// Blank names fall back to "Player X" and "Player O", or "AI Bot" when
    /// the computer plays that side.
    pub fn player_name(&self, player: Player) -> String {
        let configured = match player {
            Player::X => self.player_x.as_deref(),
            Player::O => self.player_o.as_deref(),
        };

        match configured.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => name.to_string(),
            None if self.mode.computer() == Some(player) => "AI Bot".to_string(),
            None => format!("Player {}", player),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names_vs_computer() {
        let config = GameConfig::default();
        assert_eq!(*config.mode(), GameMode::VsComputer);
        assert_eq!(config.player_name(Player::X), "Player X");
        assert_eq!(config.player_name(Player::O), "AI Bot");
    }

    #[test]
    fn test_default_names_multiplayer() {
        let config = GameConfig::new(GameMode::Multiplayer);
        assert_eq!(config.player_name(Player::O), "Player O");
    }

    #[test]
    fn test_blank_name_falls_back() {
        let config = GameConfig::new(GameMode::Multiplayer).with_overrides(
            None,
            Some("   ".to_string()),
            Some("Bea".to_string()),
        );
        assert_eq!(config.player_name(Player::X), "Player X");
        assert_eq!(config.player_name(Player::O), "Bea");
    }

    #[test]
    fn test_overrides_replace_mode() {
        let config = GameConfig::default().with_overrides(Some(GameMode::Multiplayer), None, None);
        assert_eq!(*config.mode(), GameMode::Multiplayer);
        assert_eq!(config.mode().computer(), None);
    }

    #[test]
    fn test_mode_display_is_kebab_case() {
        assert_eq!(GameMode::VsComputer.to_string(), "vs-computer");
        assert_eq!(GameMode::Multiplayer.to_string(), "multiplayer");
    }
}
