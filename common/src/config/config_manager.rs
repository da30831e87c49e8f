use std::cell::RefCell;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches one config value. Falls back to
/// `TConfig::default()` when the provider has nothing stored.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: RefCell<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer,
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: RefCell::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        if let Some(config) = self.config.borrow().as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        rounds: u32,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self { rounds: 3 }
        }
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.rounds == 0 {
                return Err("rounds must be greater than 0".to_string());
            }
            Ok(())
        }
    }

    struct MemoryProvider {
        content: RefCell<Option<String>>,
    }

    impl MemoryProvider {
        fn with(content: Option<&str>) -> Self {
            Self {
                content: RefCell::new(content.map(str::to_string)),
            }
        }
    }

    impl ConfigContentProvider for MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    fn manager(content: Option<&str>) -> ConfigManager<MemoryProvider, SampleConfig> {
        ConfigManager::new(MemoryProvider::with(content), YamlConfigSerializer)
    }

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_config_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_content_yields_default() {
        assert_eq!(manager(None).get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_reads_stored_content() {
        assert_eq!(manager(Some("rounds: 7\n")).get_config().unwrap().rounds, 7);
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let err = manager(Some("rounds: 0\n")).get_config().unwrap_err();
        assert!(err.contains("Config validation error"));

        let err = manager(Some("rounds: [")).get_config().unwrap_err();
        assert!(err.contains("Failed to deserialize config"));
    }

    #[test]
    fn test_set_config_validates_before_writing() {
        let manager = manager(None);
        assert!(manager.set_config(&SampleConfig { rounds: 0 }).is_err());
        assert!(manager.config_content_provider.get_config_content().unwrap().is_none());

        manager.set_config(&SampleConfig { rounds: 5 }).unwrap();
        assert_eq!(manager.get_config().unwrap().rounds, 5);
    }

    #[test]
    fn test_yaml_file_round_trip() {
        let path = get_temp_file_path();
        let writer: ConfigManager<_, SampleConfig> = ConfigManager::from_yaml_file(&path);
        writer.set_config(&SampleConfig { rounds: 9 }).unwrap();

        let reader: ConfigManager<_, SampleConfig> = ConfigManager::from_yaml_file(&path);
        assert_eq!(reader.get_config().unwrap().rounds, 9);

        std::fs::remove_file(&path).unwrap();
    }
}
