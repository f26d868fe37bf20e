use super::{GeometryAttribute, GeometrySource};

/// Interleaved `vec4 position, vec4 color` records for the demo triangle.
#[rustfmt::skip]
pub const TRIANGLE_VERTEX_DATA: [f32; 24] = [
     0.0,  0.6, 0.0, 1.0,
     1.0,  0.0, 0.0, 1.0,

    -0.5, -0.6, 0.0, 1.0,
     0.0,  1.0, 0.0, 1.0,

     0.5, -0.6, 0.0, 1.0,
     0.0,  0.0, 1.0, 1.0,
];

/// Byte stride of one record in [`TRIANGLE_VERTEX_DATA`].
pub const TRIANGLE_VERTEX_STRIDE: u64 = 32;

/// The demo triangle as a geometry source (`position` 4, `color` 4).
pub fn colored_triangle() -> GeometrySource {
    let mut position = Vec::with_capacity(12);
    let mut color = Vec::with_capacity(12);
    for record in TRIANGLE_VERTEX_DATA.chunks_exact(8) {
        position.extend_from_slice(&record[..4]);
        color.extend_from_slice(&record[4..]);
    }

    GeometrySource::new()
        .with_attribute("position", GeometryAttribute::new(4, position))
        .with_attribute("color", GeometryAttribute::new(4, color))
        .with_index(vec![0, 1, 2])
}
