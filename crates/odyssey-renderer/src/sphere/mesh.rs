//! UV sphere mesh generation and per-texture instance grouping.

use odyssey_universe::Odyssey;

use super::types::{InstanceGroup, SphereInstance, SphereVertex};

/// Generate a UV sphere of the given radius.
///
/// `width_segments` columns around the equator, `height_segments` rows from
/// pole to pole. Each quad becomes two triangles, so the mesh has
/// `width_segments * height_segments * 6` vertices (plain triangle list).
/// Texture `u` runs with longitude, `v` from the north pole (0) to the
/// south pole (1), matching equirectangular planet textures.
pub fn generate_sphere_mesh(radius: f32, width_segments: u32, height_segments: u32) -> Vec<SphereVertex> {
    let rows = height_segments.max(2);
    let cols = width_segments.max(3);

    let mut vertices = Vec::with_capacity((rows * cols * 6) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let v00 = sphere_vertex(radius, row, col, rows, cols);
            let v10 = sphere_vertex(radius, row + 1, col, rows, cols);
            let v01 = sphere_vertex(radius, row, col + 1, rows, cols);
            let v11 = sphere_vertex(radius, row + 1, col + 1, rows, cols);

            vertices.extend_from_slice(&[v00, v10, v01, v10, v11, v01]);
        }
    }
    vertices
}

fn sphere_vertex(radius: f32, row: u32, col: u32, rows: u32, cols: u32) -> SphereVertex {
    let u = col as f32 / cols as f32;
    let v = row as f32 / rows as f32;
    let theta = std::f32::consts::PI * v;
    let phi = std::f32::consts::TAU * u;

    let normal = [-phi.cos() * theta.sin(), theta.cos(), phi.sin() * theta.sin()];
    SphereVertex {
        position: [normal[0] * radius, normal[1] * radius, normal[2] * radius],
        normal,
        uv: [u, v],
    }
}

/// Group odysseys by palette texture so each texture is bound once per frame.
///
/// Texture indices past the palette fall back to the last entry.
pub fn group_by_texture<'a>(
    odysseys: impl IntoIterator<Item = &'a Odyssey>,
    palette_len: usize,
    radius: f32,
) -> Vec<InstanceGroup> {
    let palette_len = palette_len.max(1);
    let mut groups: Vec<InstanceGroup> = (0..palette_len)
        .map(|texture| InstanceGroup {
            texture,
            instances: Vec::new(),
        })
        .collect();

    for odyssey in odysseys {
        let texture = odyssey.texture.min(palette_len - 1);
        groups[texture].instances.push(SphereInstance {
            offset: odyssey.position,
            radius,
        });
    }

    groups.retain(|g| !g.instances.is_empty());
    groups
}

// =============================================================================
// Tests
// =============================================================================
