pub(crate) use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};
use tictactoe_common::games::tictactoe::TournamentConfig;

pub const CONFIG_FILE: &str = "tictactoe_console_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub tournament: TournamentConfig,
    pub player_symbol: char,
    pub ai_symbol: char,
    pub show_hints: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tournament.validate()?;
        for (name, symbol) in [("player_symbol", self.player_symbol), ("ai_symbol", self.ai_symbol)] {
            if symbol.is_whitespace() || symbol.is_control() {
                return Err(format!("{} must be a visible character", name));
            }
        }
        if self.player_symbol == self.ai_symbol {
            return Err("player_symbol and ai_symbol must differ".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tournament: TournamentConfig::default(),
            player_symbol: 'X',
            ai_symbol: 'O',
            show_hints: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer};
    use tictactoe_common::games::tictactoe::FirstPlayerMode;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_console_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_same_symbols_rejected() {
        let config = Config {
            ai_symbol: 'X',
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_symbol_rejected() {
        let config = Config {
            player_symbol: ' ',
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_tournament_rejected() {
        let mut config = Config::default();
        config.tournament.matches = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let manager = get_config_manager(&get_temp_file_path());
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let serializer = YamlConfigSerializer;
        let config: Config = serializer
            .deserialize("ai_symbol: '@'\ntournament:\n  matches: 5\n  first_player: Random\n")
            .unwrap();
        assert_eq!(config.ai_symbol, '@');
        assert_eq!(config.player_symbol, 'X');
        assert_eq!(config.tournament.matches, 5);
        assert_eq!(config.tournament.first_player, FirstPlayerMode::Random);
    }

    #[test]
    fn test_save_and_reload() {
        let path = get_temp_file_path();
        let manager = get_config_manager(&path);
        let config = Config {
            show_hints: true,
            ..Config::default()
        };
        manager.set_config(&config).unwrap();

        let provider = FileContentConfigProvider::new(path.clone());
        assert!(provider.get_config_content().unwrap().is_some());
        assert_eq!(get_config_manager(&path).get_config().unwrap(), config);

        std::fs::remove_file(&path).unwrap();
    }
}
