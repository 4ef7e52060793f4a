use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::{GameMode, Mark, TicTacToeSettings};
use serde::{Deserialize, Serialize};

use super::PlayersConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub mode: GameMode,
    pub first_mark: Mark,
    pub bot_mark: Mark,
    pub players: PlayersConfig,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Config {
    pub fn settings(&self) -> TicTacToeSettings {
        TicTacToeSettings {
            mode: self.mode,
            first_mark: self.first_mark,
            bot_mark: self.bot_mark,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.settings().validate()?;
        self.players.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let settings = TicTacToeSettings::default();
        Self {
            mode: settings.mode,
            first_mark: settings.first_mark,
            bot_mark: settings.bot_mark,
            players: PlayersConfig::default(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        use std::env;
        let mut path = env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_tictactoe_client_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();

        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_yaml_uses_readable_names() {
        let serializer = YamlConfigSerializer::new();
        let config = Config {
            mode: GameMode::VersusComputer,
            ..Config::default()
        };

        let serialized_string = ConfigSerializer::<Config>::serialize(&serializer, &config).unwrap();

        assert!(serialized_string.contains("mode: versus_computer"));
        assert!(serialized_string.contains("first_mark: X"));
        assert!(serialized_string.contains("x_name: epilot"));
    }

    #[test]
    fn test_missing_seed_defaults_to_none() {
        let serializer = YamlConfigSerializer::new();
        let content = "mode: two_player\nfirst_mark: O\nbot_mark: X\nplayers:\n  x_name: a\n  o_name: b\n";

        let config: Config = serializer.deserialize(content).unwrap();

        assert_eq!(config.seed, None);
        assert_eq!(config.first_mark, Mark::O);
        assert_eq!(config.settings().bot_mark, Mark::X);
    }

    #[test]
    fn test_empty_bot_mark_is_invalid() {
        let config = Config {
            bot_mark: Mark::Empty,
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_file() {
        let config = Config {
            mode: GameMode::VersusComputer,
            seed: Some(77),
            ..Config::default()
        };
        let file_path = get_temp_file_path();

        let manager = get_config_manager(Some(&file_path));
        manager.set_config(&config).unwrap();

        let reloaded = get_config_manager(Some(&file_path)).get_config().unwrap();
        assert_eq!(config, reloaded);

        let raw = FileContentConfigProvider::new(file_path.clone())
            .get_config_content()
            .unwrap()
            .unwrap();
        assert!(raw.contains("seed: 77"));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_file_yields_default_config() {
        let manager = get_config_manager(Some(&get_temp_file_path()));

        assert_eq!(manager.get_config().unwrap(), Config::default());
    }
}
