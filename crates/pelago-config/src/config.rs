//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ValidationError};

/// Top-level planet generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// World seed for deterministic generation.
    pub seed: u64,
    /// Sphere geometry settings.
    pub planet: PlanetSettings,
    /// Elevation noise layers, composited in order.
    pub noise_layers: Vec<NoiseLayerSettings>,
}

/// Sphere geometry settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetSettings {
    /// Vertices per cube-face side. Valid range: `2..=256`.
    pub resolution: u32,
    /// Ocean level threshold subtracted from raw elevation, in `0..=1`.
    /// Grid vertices at or below this elevation are classified as ocean.
    pub ocean_level: f64,
    /// Planet radius in world units.
    pub radius: f64,
}

/// Which noise filter a layer uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum NoiseLayerKind {
    /// Octave fBm noise.
    #[default]
    Simple,
    /// Ridged noise: sharp crests, good for mountain ranges.
    Rigid,
}

/// One elevation noise layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NoiseLayerSettings {
    /// Disabled layers contribute nothing but keep their slot.
    pub enabled: bool,
    /// Scale this layer by the first layer's value, confining its
    /// detail to the first layer's landmasses.
    pub use_first_layer_as_mask: bool,
    /// Which noise filter to use.
    pub kind: NoiseLayerKind,
    /// Output multiplier applied after the octave sum.
    pub strength: f64,
    /// Number of octaves to composite.
    pub octaves: u32,
    /// Frequency of the first octave.
    pub base_roughness: f64,
    /// Frequency multiplier between successive octaves.
    pub roughness: f64,
    /// Amplitude multiplier between successive octaves.
    pub persistence: f64,
    /// Offset added to the sample point, shifting the noise field.
    pub center: [f64; 3],
    /// Floor subtracted from the octave sum before scaling.
    pub min_value: f64,
    /// Rigid noise only: how strongly each octave is weighted by the
    /// previous octave's value.
    pub weight_multiplier: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            planet: PlanetSettings::default(),
            noise_layers: vec![
                NoiseLayerSettings::default(),
                NoiseLayerSettings {
                    use_first_layer_as_mask: true,
                    kind: NoiseLayerKind::Rigid,
                    strength: 0.6,
                    octaves: 5,
                    base_roughness: 1.6,
                    min_value: 0.3,
                    ..NoiseLayerSettings::default()
                },
            ],
        }
    }
}

impl Default for PlanetSettings {
    fn default() -> Self {
        Self {
            resolution: 64,
            ocean_level: 0.2,
            radius: 1.0,
        }
    }
}

impl Default for NoiseLayerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            use_first_layer_as_mask: false,
            kind: NoiseLayerKind::Simple,
            strength: 0.25,
            octaves: 4,
            base_roughness: 0.9,
            roughness: 2.1,
            persistence: 0.5,
            center: [0.0; 3],
            min_value: 0.8,
            weight_multiplier: 0.8,
        }
    }
}

impl GeneratorConfig {
    /// Load config from the given file, or create it with defaults.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
            ron::from_str(&content).map_err(ConfigError::Parse)
        } else {
            let config = Self::default();
            config.save(path)?;
            Ok(config)
        }
    }

    /// Save config to the given file as pretty-printed RON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(ConfigError::Serialize)?;
        std::fs::write(path, content).map_err(ConfigError::Write)
    }

    /// Reject invalid configuration before the pipeline runs.
    ///
    /// The generation pipeline assumes these bounds hold; validating
    /// here keeps mid-pipeline failures down to genuine internal
    /// consistency errors.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(2..=256).contains(&self.planet.resolution) {
            return Err(ValidationError::ResolutionOutOfRange {
                value: self.planet.resolution,
            });
        }
        if !(0.0..=1.0).contains(&self.planet.ocean_level) {
            return Err(ValidationError::OceanLevelOutOfRange {
                value: self.planet.ocean_level,
            });
        }
        if self.planet.radius <= 0.0 {
            return Err(ValidationError::NonPositiveRadius {
                value: self.planet.radius,
            });
        }
        if self.noise_layers.is_empty() {
            return Err(ValidationError::NoNoiseLayers);
        }
        if !self.noise_layers.iter().any(|layer| layer.enabled) {
            return Err(ValidationError::NoEnabledNoiseLayers);
        }
        for (i, layer) in self.noise_layers.iter().enumerate() {
            if layer.octaves == 0 {
                return Err(ValidationError::ZeroOctaves { layer: i });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GeneratorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_resolution_bounds_rejected() {
        let mut config = GeneratorConfig::default();
        config.planet.resolution = 1;
        assert_eq!(
            config.validate(),
            Err(ValidationError::ResolutionOutOfRange { value: 1 })
        );
        config.planet.resolution = 257;
        assert!(config.validate().is_err());
        config.planet.resolution = 2;
        assert_eq!(config.validate(), Ok(()));
        config.planet.resolution = 256;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_ocean_level_bounds_rejected() {
        let mut config = GeneratorConfig::default();
        config.planet.ocean_level = -0.1;
        assert!(config.validate().is_err());
        config.planet.ocean_level = 1.1;
        assert!(config.validate().is_err());
        config.planet.ocean_level = 0.0;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_radius_must_be_positive() {
        let mut config = GeneratorConfig::default();
        config.planet.radius = 0.0;
        assert_eq!(
            config.validate(),
            Err(ValidationError::NonPositiveRadius { value: 0.0 })
        );
    }

    #[test]
    fn test_empty_and_disabled_layer_lists_rejected() {
        let mut config = GeneratorConfig::default();
        config.noise_layers.clear();
        assert_eq!(config.validate(), Err(ValidationError::NoNoiseLayers));

        let mut config = GeneratorConfig::default();
        for layer in &mut config.noise_layers {
            layer.enabled = false;
        }
        assert_eq!(config.validate(), Err(ValidationError::NoEnabledNoiseLayers));
    }

    #[test]
    fn test_zero_octaves_rejected() {
        let mut config = GeneratorConfig::default();
        config.noise_layers[1].octaves = 0;
        assert_eq!(
            config.validate(),
            Err(ValidationError::ZeroOctaves { layer: 1 })
        );
    }

    #[test]
    fn test_ron_roundtrip() {
        let config = GeneratorConfig::default();
        let ron = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default()).unwrap();
        let parsed: GeneratorConfig = ron::from_str(&ron).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let parsed: GeneratorConfig = ron::from_str("(seed: 7)").unwrap();
        assert_eq!(parsed.seed, 7);
        assert_eq!(parsed.planet, PlanetSettings::default());
        assert_eq!(parsed.noise_layers, GeneratorConfig::default().noise_layers);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pelago.ron");
        let created = GeneratorConfig::load_or_create(&path).unwrap();
        assert_eq!(created, GeneratorConfig::default());
        assert!(path.exists());

        let loaded = GeneratorConfig::load_or_create(&path).unwrap();
        assert_eq!(loaded, created);
    }
}
