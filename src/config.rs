use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Runtime configuration for the grid game. Defaults match the classic
/// setup: 6x8 grid of 100x100 cells in an 800x600 window.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: u32,
    pub cols: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    /// Match threshold as a fraction of the maximum RGB distance.
    pub tolerance: f32,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 8,
            cell_width: 100,
            cell_height: 100,
            tolerance: 0.2,
            window_width: 800,
            window_height: 600,
        }
    }
}

impl GameConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Invalid(
                "grid must have at least one row and one column".to_string(),
            ));
        }
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(ConfigError::Invalid(
                "cell dimensions must be nonzero".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.tolerance) {
            return Err(ConfigError::Invalid(format!(
                "tolerance must be within [0, 1], got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_setup() {
        let config = GameConfig::default();
        assert_eq!(config.rows, 6);
        assert_eq!(config.cols, 8);
        assert_eq!(config.cell_width, 100);
        assert_eq!(config.cell_height, 100);
        assert_eq!(config.tolerance, 0.2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"rows": 4, "cols": 5}"#).unwrap();
        assert_eq!(config.rows, 4);
        assert_eq!(config.cols, 5);
        assert_eq!(config.cell_width, 100);
        assert_eq!(config.tolerance, 0.2);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let mut config = GameConfig::default();
        config.rows = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.cell_width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_out_of_range_tolerance_rejected() {
        let mut config = GameConfig::default();
        config.tolerance = 1.5;
        assert!(config.validate().is_err());
        config.tolerance = -0.1;
        assert!(config.validate().is_err());
    }
}
