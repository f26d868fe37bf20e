use super::{GeometryAttribute, GeometrySource};

const X: usize = 0;
const Y: usize = 1;
const Z: usize = 2;

/// Axis-aligned box centered at the origin, one quad per face.
///
/// Attributes: `position` (3), `normal` (3), `uv` (2). Faces are emitted in
/// +x, -x, +y, -y, +z, -z order with four vertices and two triangles each,
/// for 24 vertices and 36 indices in total.
pub fn box_geometry(width: f32, height: f32, depth: f32) -> GeometrySource {
    let mut planes = PlaneBuilder::default();

    planes.build(Z, Y, X, -1.0, -1.0, depth, height, width);
    planes.build(Z, Y, X, 1.0, -1.0, depth, height, -width);
    planes.build(X, Z, Y, 1.0, 1.0, width, depth, height);
    planes.build(X, Z, Y, 1.0, -1.0, width, depth, -height);
    planes.build(X, Y, Z, 1.0, -1.0, width, height, depth);
    planes.build(X, Y, Z, -1.0, -1.0, width, height, -depth);

    GeometrySource::new()
        .with_attribute("position", GeometryAttribute::new(3, planes.positions))
        .with_attribute("normal", GeometryAttribute::new(3, planes.normals))
        .with_attribute("uv", GeometryAttribute::new(2, planes.uvs))
        .with_index(planes.indices)
}

#[derive(Default)]
struct PlaneBuilder {
    positions: Vec<f32>,
    normals: Vec<f32>,
    uvs: Vec<f32>,
    indices: Vec<u16>,
    vertex_counter: u16,
}

impl PlaneBuilder {
    /// Emits one face. `u`/`v` span the face, `w` is the face normal axis;
    /// the sign of `depth` selects which side of the box the face sits on.
    #[allow(clippy::too_many_arguments)]
    fn build(
        &mut self,
        u: usize,
        v: usize,
        w: usize,
        udir: f32,
        vdir: f32,
        width: f32,
        height: f32,
        depth: f32,
    ) {
        const GRID: u16 = 1;
        let grid1 = GRID + 1;

        let width_half = width / 2.0;
        let height_half = height / 2.0;
        let depth_half = depth / 2.0;
        let segment_width = width / f32::from(GRID);
        let segment_height = height / f32::from(GRID);
        let facing = if depth > 0.0 { 1.0 } else { -1.0 };

        for iy in 0..grid1 {
            let y = f32::from(iy) * segment_height - height_half;
            for ix in 0..grid1 {
                let x = f32::from(ix) * segment_width - width_half;

                let mut position = [0.0f32; 3];
                position[u] = x * udir;
                position[v] = y * vdir;
                position[w] = depth_half;
                self.positions.extend_from_slice(&position);

                let mut normal = [0.0f32; 3];
                normal[w] = facing;
                self.normals.extend_from_slice(&normal);

                self.uvs.push(f32::from(ix) / f32::from(GRID));
                self.uvs.push(1.0 - f32::from(iy) / f32::from(GRID));
            }
        }

        let base = self.vertex_counter;
        for iy in 0..GRID {
            for ix in 0..GRID {
                let a = base + ix + grid1 * iy;
                let b = base + ix + grid1 * (iy + 1);
                let c = base + (ix + 1) + grid1 * (iy + 1);
                let d = base + (ix + 1) + grid1 * iy;

                self.indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        self.vertex_counter += grid1 * grid1;
    }
}
