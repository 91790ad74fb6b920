mod config_content_provider;
mod config_error;
mod config_manager;
mod config_serializer;
mod match_config;
mod validate;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_error::ConfigError;
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use match_config::{
    get_config_manager, BoardConfig, LogConfig, MatchConfig, DEFAULT_CONFIG_FILE_NAME,
    MAX_BOARD_CELLS,
};
pub use validate::Validate;
