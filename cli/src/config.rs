use gomoku_engine::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use gomoku_engine::game::{FirstPlayer, GomokuSessionSettings};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "gomoku_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(&get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GomokuLobbyConfig {
    pub board_size: u32,
    pub win_length: u32,
    pub search_depth: u32,
    pub first_player: FirstPlayer,
}

impl Default for GomokuLobbyConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            win_length: 5,
            search_depth: 5,
            first_player: FirstPlayer::Computer,
        }
    }
}

impl From<&GomokuLobbyConfig> for GomokuSessionSettings {
    fn from(config: &GomokuLobbyConfig) -> Self {
        Self {
            board_size: config.board_size as usize,
            win_length: config.win_length as usize,
            search_depth: config.search_depth as usize,
            first_player: config.first_player,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GomokuLobbyConfig,
    #[serde(default = "default_log_move_times")]
    pub log_move_times: bool,
}

fn default_log_move_times() -> bool {
    true
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        GomokuSessionSettings::from(&self.game).validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GomokuLobbyConfig::default(),
            log_move_times: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gomoku_engine::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        use std::env;
        let mut path = env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_gomoku_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialize_result = serializer.serialize(&default_config);
        assert!(serialize_result.is_ok());
        let serialized_string = serialize_result.unwrap();
        let deserialize_result = serializer.deserialize(&serialized_string);
        assert!(deserialize_result.is_ok());
        let deserialized_config: Config = deserialize_result.unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path);

        let serialize_result = serializer.serialize(&default_config);
        assert!(serialize_result.is_ok());
        let serialized_string = serialize_result.unwrap();
        let write_result = content_provider.set_config_content(&serialized_string);
        assert!(write_result.is_ok());

        let read_result = content_provider.get_config_content();
        assert!(read_result.is_ok());
        let read_string = read_result.unwrap().unwrap();

        let deserialize_result = serializer.deserialize(&read_string);
        assert!(deserialize_result.is_ok());
        let deserialized_config: Config = deserialize_result.unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_manager_falls_back_to_defaults_when_file_is_missing() {
        let manager: ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> =
            ConfigManager::from_yaml_file(&get_temp_file_path());
        let config = manager.get_config().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_manager_rejects_invalid_config() {
        let invalid = Config {
            game: GomokuLobbyConfig {
                board_size: 2,
                ..GomokuLobbyConfig::default()
            },
            ..Config::default()
        };
        let manager = get_config_manager();
        assert!(manager.set_config(&invalid).is_err());
    }
}
