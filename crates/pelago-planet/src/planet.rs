//! One generated planet and its regeneration pipeline.

use glam::DVec3;
use pelago_config::{GeneratorConfig, ValidationError};
use pelago_cubesphere::CubeFace;
use pelago_elevation::ElevationField;
use pelago_mesh::{Aabb, MeshData};
use pelago_ocean::{ContourMesher, SeamWelder, WeldedOcean};
use pelago_terrain::{TerrainFace, TerrainFaceOutput};
use tracing::{info, info_span};

use crate::error::GenerateError;

/// Stage statistics of one successful generation pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerateReport {
    /// Terrain vertices across all six faces.
    pub terrain_vertices: usize,
    /// Terrain triangles across all six faces.
    pub terrain_triangles: usize,
    /// Ocean vertex slots in the welded mesh, welded duplicates
    /// included.
    pub ocean_vertices: usize,
    /// Ocean triangles in the welded mesh.
    pub ocean_triangles: usize,
    /// Bounding box of the welded ocean, `None` for an all-land planet.
    pub ocean_bounds: Option<Aabb>,
}

/// A planet: validated configuration plus the meshes of the last
/// successful generation pass.
///
/// Regeneration builds everything into fresh buffers and swaps them in
/// only after every stage succeeded, so a failed pass never corrupts
/// the published meshes.
pub struct Planet {
    config: GeneratorConfig,
    faces: Option<[TerrainFaceOutput; 6]>,
    ocean: Option<WeldedOcean>,
    elevation_range: Option<(f64, f64)>,
}

impl Planet {
    /// Create a planet from a configuration, validating it up front.
    pub fn new(config: GeneratorConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self {
            config,
            faces: None,
            ocean: None,
            elevation_range: None,
        })
    }

    /// The configuration this planet was built from.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the full pipeline and publish the results.
    pub fn generate(&mut self) -> Result<GenerateReport, GenerateError> {
        let resolution = self.config.planet.resolution as usize;
        let radius = self.config.planet.radius;
        let mut elevation = ElevationField::new(
            &self.config.noise_layers,
            self.config.seed,
            self.config.planet.ocean_level,
        );

        let faces: [TerrainFaceOutput; 6] = {
            let _span = info_span!("terrain", resolution).entered();
            CubeFace::ALL
                .map(|face| TerrainFace::new(face, resolution, radius).construct(&mut elevation))
        };

        let ocean_faces = {
            let _span = info_span!("ocean_contour").entered();
            let mut meshes = Vec::with_capacity(6);
            for (face, output) in CubeFace::ALL.iter().zip(&faces) {
                let builder = TerrainFace::new(*face, resolution, radius);
                let mesher = ContourMesher::new(builder.grid(), radius);
                meshes.push(mesher.build(&output.grid_vertices)?);
            }
            let array: [_; 6] = meshes.try_into().expect("six faces were contoured");
            array
        };

        let ocean = {
            let _span = info_span!("ocean_weld").entered();
            SeamWelder::weld(&ocean_faces)
        };

        let report = GenerateReport {
            terrain_vertices: faces.iter().map(|f| f.mesh.positions.len()).sum(),
            terrain_triangles: faces.iter().map(|f| f.mesh.triangle_count()).sum(),
            ocean_vertices: ocean.mesh.positions.len(),
            ocean_triangles: ocean.mesh.triangle_count(),
            ocean_bounds: ocean.bounds,
        };
        info!(
            terrain_vertices = report.terrain_vertices,
            terrain_triangles = report.terrain_triangles,
            ocean_vertices = report.ocean_vertices,
            ocean_triangles = report.ocean_triangles,
            "planet generated"
        );

        // Every stage succeeded; only now replace the published meshes.
        let min_max = elevation.min_max();
        self.elevation_range = min_max.min().zip(min_max.max());
        self.faces = Some(faces);
        self.ocean = Some(ocean);
        Ok(report)
    }

    /// The six terrain face outputs of the last successful pass.
    #[must_use]
    pub fn faces(&self) -> Option<&[TerrainFaceOutput; 6]> {
        self.faces.as_ref()
    }

    /// Terrain meshes of the last successful pass, in face order.
    #[must_use]
    pub fn terrain_meshes(&self) -> Option<[&MeshData; 6]> {
        self.faces
            .as_ref()
            .map(|faces| std::array::from_fn(|i| &faces[i].mesh))
    }

    /// The welded ocean mesh of the last successful pass.
    #[must_use]
    pub fn ocean_mesh(&self) -> Option<&MeshData> {
        self.ocean.as_ref().map(|o| &o.mesh)
    }

    /// The `(min, max)` ocean-relative elevation observed while
    /// sampling the last successful pass.
    #[must_use]
    pub fn elevation_range(&self) -> Option<(f64, f64)> {
        self.elevation_range
    }

    /// Rewrite the biome channel (UV.x) of every terrain face from a
    /// blend function over the unit sphere.
    pub fn update_biome_uvs(&mut self, blend: impl Fn(DVec3) -> f32) {
        let resolution = self.config.planet.resolution as usize;
        let radius = self.config.planet.radius;
        if let Some(faces) = self.faces.as_mut() {
            for (face, output) in CubeFace::ALL.iter().zip(faces.iter_mut()) {
                TerrainFace::new(*face, resolution, radius).update_biome_uvs(output, &blend);
            }
        }
    }
}
