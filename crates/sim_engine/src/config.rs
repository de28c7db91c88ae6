//! Configuration system

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration trait: TOML-backed, with sensible defaults
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a TOML file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Save configuration to a TOML file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = toml::to_string_pretty(self).map_err(|source| ConfigError::Serialize {
            path: path.display().to_string(),
            source,
        })?;
        std::fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("could not read or write `{path}`")]
    Io {
        /// Offending path
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Parse error
    #[error("could not parse `{path}`")]
    Parse {
        /// Offending path
        path: String,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// Serialization error
    #[error("could not serialize `{path}`")]
    Serialize {
        /// Offending path
        path: String,
        /// Underlying error
        #[source]
        source: toml::ser::Error,
    },
}

/// Simulation tuning knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Determinant magnitude below which segments count as parallel
    pub parallel_epsilon: f32,
    /// Particles spawned when a spacecraft is destroyed
    pub burst_count: u32,
    /// Top speed of destruction debris
    pub burst_speed_max: f32,
    /// Longest lifetime of destruction debris
    pub burst_ttl_max: f32,
    /// Sparks spawned per projectile hit
    pub spark_count: u32,
    /// Angular spread of sparks around the reverse travel direction, radians
    pub spark_spread: f32,
    /// Spark speed as a fraction of the projectile speed
    pub spark_speed_scale: f32,
    /// Longest spark lifetime
    pub spark_ttl_max: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            parallel_epsilon: crate::geometry::DEFAULT_PARALLEL_EPSILON,
            burst_count: 500,
            burst_speed_max: 120.0,
            burst_ttl_max: 2.5,
            spark_count: 10,
            spark_spread: std::f32::consts::FRAC_PI_2,
            spark_speed_scale: 0.35,
            spark_ttl_max: 0.8,
        }
    }
}

impl Config for SimConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_counts() {
        let config = SimConfig::default();
        assert_eq!(config.burst_count, 500);
        assert_eq!(config.spark_count, 10);
        assert!(config.parallel_epsilon > 0.0);
    }

    #[test]
    fn test_partial_toml_fills_from_defaults() {
        let config: SimConfig = toml::from_str("burst_count = 64").expect("parses");
        assert_eq!(config.burst_count, 64);
        assert_eq!(config.spark_count, SimConfig::default().spark_count);
    }

    #[test]
    fn test_roundtrips_through_toml() {
        let config = SimConfig::default();
        let text = toml::to_string_pretty(&config).expect("serializes");
        let back: SimConfig = toml::from_str(&text).expect("parses");
        assert_eq!(back.burst_count, config.burst_count);
    }
}
