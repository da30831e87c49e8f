use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::FirstPlayerMode;

pub const MAX_MATCHES: u32 = 99;
pub const DEFAULT_RESULT_LOG: &str = "game_log.txt";

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TournamentConfig {
    pub matches: u32,
    pub first_player: FirstPlayerMode,
    pub result_log: String,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            matches: 3,
            first_player: FirstPlayerMode::Ask,
            result_log: DEFAULT_RESULT_LOG.to_string(),
        }
    }
}

impl Validate for TournamentConfig {
    fn validate(&self) -> Result<(), String> {
        if self.matches == 0 {
            return Err("matches must be at least 1".to_string());
        }
        if self.matches > MAX_MATCHES {
            return Err(format!("matches must not exceed {}", MAX_MATCHES));
        }
        if self.result_log.trim().is_empty() {
            return Err("result_log must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSerializer, YamlConfigSerializer};

    #[test]
    fn test_default_is_valid() {
        assert!(TournamentConfig::default().validate().is_ok());
    }

    #[test]
    fn test_match_count_bounds() {
        let mut config = TournamentConfig::default();
        config.matches = 0;
        assert!(config.validate().is_err());
        config.matches = MAX_MATCHES + 1;
        assert!(config.validate().is_err());
        config.matches = 10;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_result_log_rejected() {
        let config = TournamentConfig {
            result_log: "  ".to_string(),
            ..TournamentConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_fills_missing_fields_with_defaults() {
        let serializer = YamlConfigSerializer;
        let config: TournamentConfig = serializer.deserialize("matches: 5\nfirst_player: Alternate\n").unwrap();
        assert_eq!(config.matches, 5);
        assert_eq!(config.first_player, FirstPlayerMode::Alternate);
        assert_eq!(config.result_log, DEFAULT_RESULT_LOG);
    }
}
