//! The six faces of a cubesphere and their basis vectors.

use glam::DVec3;

/// The six faces of the cube that forms the cubesphere.
///
/// Each variant corresponds to a face whose outward normal points
/// along the named axis direction. The ordering (up, down, left,
/// right, forward, back) is the canonical face index used throughout
/// the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// +Y face (up)
    PosY = 0,
    /// −Y face (down)
    NegY = 1,
    /// −X face (left)
    NegX = 2,
    /// +X face (right)
    PosX = 3,
    /// +Z face (forward)
    PosZ = 4,
    /// −Z face (back)
    NegZ = 5,
}

impl CubeFace {
    /// All six faces in canonical order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::NegX,
        CubeFace::PosX,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// Canonical face index, `0..6`.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Outward-pointing unit normal for this face.
    #[must_use]
    pub fn normal(self) -> DVec3 {
        match self {
            CubeFace::PosY => DVec3::Y,
            CubeFace::NegY => DVec3::NEG_Y,
            CubeFace::NegX => DVec3::NEG_X,
            CubeFace::PosX => DVec3::X,
            CubeFace::PosZ => DVec3::Z,
            CubeFace::NegZ => DVec3::NEG_Z,
        }
    }

    /// Tangent vector: direction of increasing grid `x` on this face.
    ///
    /// A cyclic swizzle of the normal, `(n.y, n.z, n.x)`, so every face
    /// uses the same construction.
    #[must_use]
    pub fn tangent(self) -> DVec3 {
        let n = self.normal();
        DVec3::new(n.y, n.z, n.x)
    }

    /// Bitangent vector: direction of increasing grid `y` on this face,
    /// `normal × tangent`.
    #[must_use]
    pub fn bitangent(self) -> DVec3 {
        self.normal().cross(self.tangent())
    }
}
