use crate::error::{require_extent, Result};
use crate::mesh::{pack_vertices, recalculate_normals, weld_vertices, MeshVertex};
use glam::Vec3;

/// Index table over the eight box corners, two triangles per face.
///
/// Each triangle winds counter-clockwise when seen from outside the box, so
/// recalculated normals point away from it.
pub const CUBE_TRIANGLES: [u32; 36] = [
    0, 2, 1, 0, 3, 2, // -Z
    2, 3, 4, 2, 4, 5, // +Y
    1, 2, 5, 1, 5, 6, // +X
    0, 7, 4, 0, 4, 3, // -X
    5, 4, 7, 5, 7, 6, // +Z
    0, 6, 7, 0, 1, 6, // -Y
];

/// Axis-aligned box with a square footprint centred on the origin,
/// standing on `y = 0`
#[derive(Debug, Clone, PartialEq)]
pub struct CubeMesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
    pub width: f32,
    pub height: f32,
}

impl CubeMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices.iter().map(|v| Vec3::from_array(v.position))
    }

    pub fn normals(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices.iter().map(|v| Vec3::from_array(v.normal))
    }

    /// Centre of the box volume
    pub fn centroid(&self) -> Vec3 {
        Vec3::new(0.0, self.height * 0.5, 0.0)
    }

    /// Weld coincident vertices and recompute normals.
    ///
    /// A box with positive extents has eight distinct corners and is left
    /// unchanged; a zero-width or zero-height box collapses.
    pub fn optimize(&mut self) {
        let positions: Vec<Vec3> = self.positions().collect();
        let (positions, indices) = weld_vertices(&positions, &self.indices);
        let normals = recalculate_normals(&positions, &indices);
        self.vertices = pack_vertices(&positions, &normals);
        self.indices = indices;
    }
}

/// Build a box `width` wide (X and Z) and `height` tall (Y).
///
/// Vertex order:
/// 0 `(-w/2, 0, -w/2)`, 1 `(w/2, 0, -w/2)`, 2 `(w/2, h, -w/2)`,
/// 3 `(-w/2, h, -w/2)`, 4 `(-w/2, h, w/2)`, 5 `(w/2, h, w/2)`,
/// 6 `(w/2, 0, w/2)`, 7 `(-w/2, 0, w/2)`.
///
/// Zero extents give a flat but well-formed mesh whose normals are partly
/// or entirely zero. Negative or non-finite extents are rejected.
pub fn build_cube(height: f32, width: f32) -> Result<CubeMesh> {
    require_extent("height", height)?;
    require_extent("width", width)?;

    if height == 0.0 || width == 0.0 {
        log::warn!("Building degenerate cube ({width} x {height}): zero volume");
    }

    // Footprint offset so the box is centred in X and Z
    let offset = Vec3::new(width * 0.5, 0.0, width * 0.5);

    let positions = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(width, 0.0, 0.0),
        Vec3::new(width, height, 0.0),
        Vec3::new(0.0, height, 0.0),
        Vec3::new(0.0, height, width),
        Vec3::new(width, height, width),
        Vec3::new(width, 0.0, width),
        Vec3::new(0.0, 0.0, width),
    ]
    .map(|corner| corner - offset);

    let normals = recalculate_normals(&positions, &CUBE_TRIANGLES);

    Ok(CubeMesh {
        vertices: pack_vertices(&positions, &normals),
        indices: CUBE_TRIANGLES.to_vec(),
        width,
        height,
    })
}
