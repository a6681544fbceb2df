//! The composite elevation field sampled by the terrain projector.

use glam::DVec3;
use pelago_config::NoiseLayerSettings;

use crate::filters::{NoiseEvaluator, evaluator_for_layer};
use crate::min_max::MinMax;

struct Layer {
    enabled: bool,
    use_first_layer_as_mask: bool,
    evaluator: Box<dyn NoiseEvaluator>,
}

/// Scalar elevation over the unit sphere, composited from noise layers.
///
/// The configured ocean level is subtracted before a sample leaves the
/// field, so callers see ocean-relative elevation: the shoreline is
/// always the `elevation == 0` isosurface and ocean is `elevation <= 0`.
/// The running min/max of emitted values is tracked for consumers that
/// normalize elevation after a generation pass.
pub struct ElevationField {
    layers: Vec<Layer>,
    ocean_level: f64,
    min_max: MinMax,
}

impl ElevationField {
    /// Build the field from layer settings.
    ///
    /// Each layer gets its own seeded noise source, derived from the
    /// world seed and the layer index, so layers decorrelate while the
    /// whole field stays deterministic per seed.
    #[must_use]
    pub fn new(layers: &[NoiseLayerSettings], seed: u64, ocean_level: f64) -> Self {
        let layers = layers
            .iter()
            .enumerate()
            .map(|(i, settings)| Layer {
                enabled: settings.enabled,
                use_first_layer_as_mask: settings.use_first_layer_as_mask,
                evaluator: evaluator_for_layer(settings, (seed as u32).wrapping_add(i as u32)),
            })
            .collect();
        Self {
            layers,
            ocean_level,
            min_max: MinMax::new(),
        }
    }

    /// Sample the ocean-relative elevation at a unit-sphere point.
    ///
    /// The first layer is always evaluated (even when disabled) because
    /// later layers may use it as a mask to confine their detail to the
    /// first layer's landmasses.
    pub fn sample(&mut self, point: DVec3) -> f64 {
        let mut first_layer_value = 0.0;
        let mut elevation = 0.0;

        if let Some(first) = self.layers.first() {
            first_layer_value = first.evaluator.evaluate(point);
            if first.enabled {
                elevation = first_layer_value;
            }
        }

        for layer in self.layers.iter().skip(1) {
            if !layer.enabled {
                continue;
            }
            let mask = if layer.use_first_layer_as_mask {
                first_layer_value
            } else {
                1.0
            };
            elevation += layer.evaluator.evaluate(point) * mask;
        }

        let relative = elevation - self.ocean_level;
        self.min_max.add(relative);
        relative
    }

    /// Running min/max of all emitted samples.
    #[must_use]
    pub fn min_max(&self) -> MinMax {
        self.min_max
    }

    /// The ocean level this field subtracts from raw elevation.
    #[must_use]
    pub fn ocean_level(&self) -> f64 {
        self.ocean_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pelago_config::NoiseLayerKind;

    fn layer() -> NoiseLayerSettings {
        NoiseLayerSettings {
            min_value: 0.0,
            ..NoiseLayerSettings::default()
        }
    }

    fn sample_points() -> Vec<DVec3> {
        (0..20)
            .map(|i| {
                let a = i as f64 * 0.61;
                DVec3::new(a.cos(), (a * 1.7).sin(), (a * 0.9).cos()).normalize()
            })
            .collect()
    }

    #[test]
    fn test_field_is_deterministic_per_seed() {
        let layers = vec![layer()];
        let mut a = ElevationField::new(&layers, 42, 0.2);
        let mut b = ElevationField::new(&layers, 42, 0.2);
        for p in sample_points() {
            assert_eq!(a.sample(p), b.sample(p));
        }
    }

    #[test]
    fn test_ocean_level_shifts_samples() {
        let layers = vec![layer()];
        let mut flat = ElevationField::new(&layers, 7, 0.0);
        let mut sunk = ElevationField::new(&layers, 7, 0.5);
        for p in sample_points() {
            assert!((flat.sample(p) - 0.5 - sunk.sample(p)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_disabled_layer_contributes_nothing() {
        let enabled = vec![layer()];
        let disabled_second = vec![
            layer(),
            NoiseLayerSettings {
                enabled: false,
                kind: NoiseLayerKind::Rigid,
                ..layer()
            },
        ];
        let mut a = ElevationField::new(&enabled, 3, 0.1);
        let mut b = ElevationField::new(&disabled_second, 3, 0.1);
        for p in sample_points() {
            assert_eq!(a.sample(p), b.sample(p));
        }
    }

    #[test]
    fn test_disabled_first_layer_still_masks() {
        // First layer disabled: its own value is dropped but a masked
        // second layer is still scaled by it.
        let masked = vec![
            NoiseLayerSettings {
                enabled: false,
                ..layer()
            },
            NoiseLayerSettings {
                use_first_layer_as_mask: true,
                ..layer()
            },
        ];
        let mut field = ElevationField::new(&masked, 9, 0.0);

        let mut first_only = ElevationField::new(&[layer()], 9, 0.0);
        let mut second_only = ElevationField::new(
            &[
                NoiseLayerSettings {
                    enabled: false,
                    ..layer()
                },
                layer(),
            ],
            9,
            0.0,
        );

        for p in sample_points() {
            let expected = first_only.sample(p) * second_only.sample(p);
            assert!((field.sample(p) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_min_max_tracks_emitted_range() {
        let mut field = ElevationField::new(&[layer()], 5, 0.2);
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for p in sample_points() {
            let v = field.sample(p);
            lo = lo.min(v);
            hi = hi.max(v);
        }
        assert_eq!(field.min_max().min(), Some(lo));
        assert_eq!(field.min_max().max(), Some(hi));
    }
}
