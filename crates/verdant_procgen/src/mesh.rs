use glam::Vec3;
use std::collections::HashMap;

/// Vertex layout shared by every generated mesh
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Calculate smooth vertex normals by averaging face normals.
///
/// Face normals are `(p1 - p0) x (p2 - p0)`, so a triangle wound
/// counter-clockwise when seen from outside contributes an outward normal.
/// Larger faces weigh more. A vertex that only touches degenerate triangles
/// keeps a zero normal.
///
/// Panics if an index points past `positions`.
pub fn recalculate_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    // Accumulate face normals for each vertex
    for triangle in indices.chunks_exact(3) {
        let i0 = triangle[0] as usize;
        let i1 = triangle[1] as usize;
        let i2 = triangle[2] as usize;

        let p0 = positions[i0];
        let edge1 = positions[i1] - p0;
        let edge2 = positions[i2] - p0;
        let face_normal = edge1.cross(edge2);

        normals[i0] += face_normal;
        normals[i1] += face_normal;
        normals[i2] += face_normal;
    }

    for normal in &mut normals {
        *normal = normal.normalize_or_zero();
    }

    normals
}

/// Merge vertices with bit-identical positions and remap the index buffer.
///
/// The first occurrence of a position keeps its slot; later duplicates are
/// redirected to it. Output vertex order follows first appearance in
/// `positions`, not in `indices`.
pub fn weld_vertices(positions: &[Vec3], indices: &[u32]) -> (Vec<Vec3>, Vec<u32>) {
    let mut seen: HashMap<[u32; 3], u32> = HashMap::with_capacity(positions.len());
    let mut welded = Vec::with_capacity(positions.len());
    let mut remap = Vec::with_capacity(positions.len());

    for position in positions {
        let key = position.to_array().map(f32::to_bits);
        let slot = *seen.entry(key).or_insert_with(|| {
            welded.push(*position);
            (welded.len() - 1) as u32
        });
        remap.push(slot);
    }

    let indices = indices.iter().map(|&i| remap[i as usize]).collect();
    (welded, indices)
}

/// Zip positions and normals into the packed vertex layout
pub fn pack_vertices(positions: &[Vec3], normals: &[Vec3]) -> Vec<MeshVertex> {
    positions
        .iter()
        .zip(normals)
        .map(|(p, n)| MeshVertex {
            position: p.to_array(),
            normal: n.to_array(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_quad_normals() {
        // Counter-clockwise seen from +Y
        let positions = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
        ];
        let indices = [0, 1, 2, 0, 2, 3];

        let normals = recalculate_normals(&positions, &indices);
        for normal in normals {
            assert!((normal - Vec3::Y).length() < 1e-6, "{normal:?}");
        }
    }

    #[test]
    fn test_unused_vertex_keeps_zero_normal() {
        let positions = [Vec3::ZERO, Vec3::X, Vec3::Z, Vec3::splat(5.0)];
        let normals = recalculate_normals(&positions, &[0, 2, 1]);
        assert_eq!(normals[3], Vec3::ZERO);
        assert!((normals[0] - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_weld_merges_duplicates() {
        let positions = [Vec3::ZERO, Vec3::X, Vec3::ZERO, Vec3::Z];
        let indices = [0, 1, 3, 2, 3, 1];

        let (welded, remapped) = weld_vertices(&positions, &indices);
        assert_eq!(welded, vec![Vec3::ZERO, Vec3::X, Vec3::Z]);
        assert_eq!(remapped, vec![0, 1, 2, 0, 2, 1]);
    }

    #[test]
    fn test_pack_vertices() {
        let packed = pack_vertices(&[Vec3::new(1.0, 2.0, 3.0)], &[Vec3::Y]);
        assert_eq!(packed.len(), 1);
        assert_eq!(packed[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(packed[0].normal, [0.0, 1.0, 0.0]);
        assert_eq!(bytemuck::cast_slice::<MeshVertex, u8>(&packed).len(), 24);
    }
}
