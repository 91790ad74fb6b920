use serde::{Deserialize, Serialize};

use crate::isolation::BotType;
use super::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

pub const DEFAULT_CONFIG_FILE_NAME: &str = "isolation_config.yaml";

/// Searches always run to the end of the game, so boards stay small.
pub const MAX_BOARD_CELLS: usize = 25;

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, MatchConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<(), String> {
        if self.rows == 0 || self.cols == 0 {
            return Err(format!(
                "Board dimensions must be positive (got {}x{})",
                self.rows, self.cols
            ));
        }
        let cells = self.rows.saturating_mul(self.cols);
        if cells > MAX_BOARD_CELLS {
            return Err(format!(
                "Board {}x{} has {} cells, at most {} are supported",
                self.rows, self.cols, cells, MAX_BOARD_CELLS
            ));
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { rows: 4, cols: 4 }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct LogConfig {
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub verbose: bool,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct MatchConfig {
    pub board: BoardConfig,
    pub player_one: BotType,
    pub player_two: BotType,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub log: LogConfig,
}

impl Validate for MatchConfig {
    fn validate(&self) -> Result<(), String> {
        self.board.validate()?;
        if let Some(prefix) = &self.log.prefix
            && prefix.trim().is_empty()
        {
            return Err("Log prefix must not be blank".to_string());
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            player_one: BotType::Minimax,
            player_two: BotType::Minimax,
            seed: None,
            log: LogConfig::default(),
        }
    }
}
