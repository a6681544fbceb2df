//! Dominant-axis cube-map UV projection.

use glam::{DVec3, Vec2};

/// Project a direction onto cube-map UV coordinates in `[0, 1]²`.
///
/// Selects the dominant axis of `dir` and applies the standard
/// cube-map formula for that face. Used to texture ocean vertices;
/// has no coupling to the meshing or welding algorithms.
#[must_use]
pub fn cube_map_uv(dir: DVec3) -> Vec2 {
    let abs = dir.abs();
    let (uc, vc, ma) = if abs.x >= abs.y && abs.x >= abs.z {
        if dir.x > 0.0 {
            (-dir.z, -dir.y, abs.x)
        } else {
            (dir.z, -dir.y, abs.x)
        }
    } else if abs.y >= abs.z {
        if dir.y > 0.0 {
            (dir.x, dir.z, abs.y)
        } else {
            (dir.x, -dir.z, abs.y)
        }
    } else if dir.z > 0.0 {
        (dir.x, -dir.y, abs.z)
    } else {
        (-dir.x, -dir.y, abs.z)
    };
    Vec2::new(
        (0.5 * (uc / ma + 1.0)) as f32,
        (0.5 * (vc / ma + 1.0)) as f32,
    )
}
