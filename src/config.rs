// Configuration module for reading Solver.toml

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub rules: RulesConfig,
    pub debug: DebugConfig,
}

/// Gameplay thresholds for the stone rules
#[derive(Debug, Deserialize, Clone)]
pub struct RulesConfig {
    /// Snake length at which stones become regular food
    pub min_length_to_eat_stone: usize,
    /// Snake length at which a boxed-in snake may eat a stone to survive
    pub min_length_for_forced_eating: usize,
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Solver.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Solver.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Solver.toml
    pub fn default_hardcoded() -> Self {
        Config {
            rules: RulesConfig {
                min_length_to_eat_stone: 35,
                min_length_for_forced_eating: 12,
            },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "snake_solver_debug.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            eprintln!(
                "Warning: Could not load Solver.toml ({}), using hardcoded defaults",
                e
            );
            Self::default_hardcoded()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_can_be_created() {
        let config = Config::default_hardcoded();
        assert_eq!(config.rules.min_length_to_eat_stone, 35);
        assert_eq!(config.rules.min_length_for_forced_eating, 12);
        assert!(!config.debug.enabled);
    }

    #[test]
    fn test_solver_toml_can_be_parsed() {
        // This test ensures Solver.toml is valid and can be parsed
        let result = Config::from_file("Solver.toml");
        assert!(
            result.is_ok(),
            "Failed to parse Solver.toml: {:?}",
            result.err()
        );
    }

    #[test]
    fn test_all_config_values_match_hardcoded_defaults() {
        let file_config = Config::from_file("Solver.toml").expect("Solver.toml should be parseable");
        let hardcoded_config = Config::default_hardcoded();

        assert_eq!(
            file_config.rules.min_length_to_eat_stone,
            hardcoded_config.rules.min_length_to_eat_stone
        );
        assert_eq!(
            file_config.rules.min_length_for_forced_eating,
            hardcoded_config.rules.min_length_for_forced_eating
        );
        assert_eq!(file_config.debug.enabled, hardcoded_config.debug.enabled);
        assert_eq!(
            file_config.debug.log_file_path,
            hardcoded_config.debug.log_file_path
        );
    }

    #[test]
    fn test_forced_eating_threshold_below_stone_threshold() {
        let config = Config::load_or_default();
        assert!(
            config.rules.min_length_for_forced_eating < config.rules.min_length_to_eat_stone,
            "forced eating must kick in before stones become regular food"
        );
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        // Test with a non-existent file
        let result = Config::from_file("nonexistent.toml");
        assert!(result.is_err());
    }
}
