//! Noise filters: octave fBm and ridged variants over simplex noise.

use glam::DVec3;
use noise::{NoiseFn, Simplex};
use pelago_config::{NoiseLayerKind, NoiseLayerSettings};

/// A scalar noise function over points on the unit sphere.
pub trait NoiseEvaluator {
    /// Evaluate the filter at a unit-sphere point.
    fn evaluate(&self, point: DVec3) -> f64;
}

/// Octave fBm noise: each octave's `[-1, 1]` sample is remapped to
/// `[0, 1]` and summed with geometrically decaying amplitude, then the
/// configured floor is subtracted and the result scaled.
pub struct SimpleNoise {
    noise: Simplex,
    settings: NoiseLayerSettings,
}

impl SimpleNoise {
    /// Create a filter from layer settings and a seed.
    #[must_use]
    pub fn new(settings: NoiseLayerSettings, seed: u32) -> Self {
        Self {
            noise: Simplex::new(seed),
            settings,
        }
    }
}

impl NoiseEvaluator for SimpleNoise {
    fn evaluate(&self, point: DVec3) -> f64 {
        let s = &self.settings;
        let center = DVec3::from_array(s.center);
        let mut value = 0.0;
        let mut frequency = s.base_roughness;
        let mut amplitude = 1.0;
        for _ in 0..s.octaves {
            let p = point * frequency + center;
            let v = self.noise.get([p.x, p.y, p.z]);
            value += (v + 1.0) * 0.5 * amplitude;
            frequency *= s.roughness;
            amplitude *= s.persistence;
        }
        (value - s.min_value).max(0.0) * s.strength
    }
}

/// Ridged noise: `(1 - |noise|)²` per octave, each octave weighted by
/// the previous octave's value so detail concentrates on the crests.
pub struct RigidNoise {
    noise: Simplex,
    settings: NoiseLayerSettings,
}

impl RigidNoise {
    /// Create a filter from layer settings and a seed.
    #[must_use]
    pub fn new(settings: NoiseLayerSettings, seed: u32) -> Self {
        Self {
            noise: Simplex::new(seed),
            settings,
        }
    }
}

impl NoiseEvaluator for RigidNoise {
    fn evaluate(&self, point: DVec3) -> f64 {
        let s = &self.settings;
        let center = DVec3::from_array(s.center);
        let mut value = 0.0;
        let mut frequency = s.base_roughness;
        let mut amplitude = 1.0;
        let mut weight = 1.0;
        for _ in 0..s.octaves {
            let p = point * frequency + center;
            let mut v = 1.0 - self.noise.get([p.x, p.y, p.z]).abs();
            v *= v;
            v *= weight;
            weight = (v * s.weight_multiplier).clamp(0.0, 1.0);
            value += v * amplitude;
            frequency *= s.roughness;
            amplitude *= s.persistence;
        }
        (value - s.min_value) * s.strength
    }
}

/// Construct the evaluator a layer's settings call for.
#[must_use]
pub fn evaluator_for_layer(settings: &NoiseLayerSettings, seed: u32) -> Box<dyn NoiseEvaluator> {
    match settings.kind {
        NoiseLayerKind::Simple => Box::new(SimpleNoise::new(settings.clone(), seed)),
        NoiseLayerKind::Rigid => Box::new(RigidNoise::new(settings.clone(), seed)),
    }
}
