//! Configuration error types.

/// Errors that can occur when loading, saving, or parsing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    Read(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    Write(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] ron::Error),
}

/// Rejections produced by [`GeneratorConfig::validate`].
///
/// [`GeneratorConfig::validate`]: crate::GeneratorConfig::validate
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Grid resolution must be in `2..=256`.
    #[error("resolution {value} out of range (expected 2..=256)")]
    ResolutionOutOfRange {
        /// The rejected value.
        value: u32,
    },

    /// Ocean level must be in `0.0..=1.0`.
    #[error("ocean level {value} out of range (expected 0.0..=1.0)")]
    OceanLevelOutOfRange {
        /// The rejected value.
        value: f64,
    },

    /// Planet radius must be positive.
    #[error("planet radius {value} must be positive")]
    NonPositiveRadius {
        /// The rejected value.
        value: f64,
    },

    /// The noise layer list is empty.
    #[error("noise layer list is empty")]
    NoNoiseLayers,

    /// Every noise layer is disabled.
    #[error("all noise layers are disabled")]
    NoEnabledNoiseLayers,

    /// A noise layer has zero octaves.
    #[error("noise layer {layer} has zero octaves")]
    ZeroOctaves {
        /// Index of the offending layer.
        layer: usize,
    },
}
