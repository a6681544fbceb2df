//! Named registry of generated planets.

use std::collections::BTreeMap;

use crate::error::RegistryError;
use crate::planet::Planet;

/// Keeps generated planets addressable by name.
///
/// An explicit object rather than process-wide state, so independent
/// pipelines (or tests) can each hold their own world of planets.
/// Names are unique; iteration order is the names' sort order.
#[derive(Default)]
pub struct PlanetRegistry {
    planets: BTreeMap<String, Planet>,
}

impl PlanetRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a planet under a name. Rejects duplicates.
    pub fn add(&mut self, name: impl Into<String>, planet: Planet) -> Result<(), RegistryError> {
        let name = name.into();
        if self.planets.contains_key(&name) {
            return Err(RegistryError::DuplicateName { name });
        }
        self.planets.insert(name, planet);
        Ok(())
    }

    /// Remove a planet, returning it if it was registered.
    pub fn remove(&mut self, name: &str) -> Option<Planet> {
        self.planets.remove(name)
    }

    /// Look up a planet by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Planet> {
        self.planets.get(name)
    }

    /// Mutable lookup, for regeneration in place.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Planet> {
        self.planets.get_mut(name)
    }

    /// Registered names in sort order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.planets.keys().map(String::as_str)
    }

    /// Number of registered planets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.planets.len()
    }

    /// True when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pelago_config::GeneratorConfig;

    fn planet() -> Planet {
        Planet::new(GeneratorConfig::default()).expect("default config is valid")
    }

    #[test]
    fn test_add_and_lookup() {
        let mut registry = PlanetRegistry::new();
        assert!(registry.is_empty());
        registry.add("kepler", planet()).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get("kepler").is_some());
        assert!(registry.get("vulcan").is_none());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut registry = PlanetRegistry::new();
        registry.add("gaia", planet()).unwrap();
        let err = registry.add("gaia", planet()).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateName {
                name: "gaia".to_string()
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_frees_the_name() {
        let mut registry = PlanetRegistry::new();
        registry.add("gaia", planet()).unwrap();
        assert!(registry.remove("gaia").is_some());
        assert!(registry.remove("gaia").is_none());
        registry.add("gaia", planet()).expect("removed names can be reused");
    }

    #[test]
    fn test_names_iterate_sorted() {
        let mut registry = PlanetRegistry::new();
        registry.add("c", planet()).unwrap();
        registry.add("a", planet()).unwrap();
        registry.add("b", planet()).unwrap();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
