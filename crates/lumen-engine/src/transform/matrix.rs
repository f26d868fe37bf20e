use glam::{DMat4, DVec3};

/// 16 column-major `f32`s, the byte layout of a WGSL `mat4x4<f32>`.
pub type MatrixData = [f32; 16];

/// Bytes occupied by one [`MatrixData`] in a uniform buffer.
pub const MATRIX_UNIFORM_SIZE: u64 = std::mem::size_of::<MatrixData>() as u64;

#[rustfmt::skip]
pub const IDENTITY: MatrixData = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

/// `translate(x, y, 0) * rotateY(yaw) * rotateX(-pitch)`, angles in degrees.
///
/// Rotation happens about the object origin; the translation is applied
/// last and places the rotated object at `offset`.
pub fn world_matrix(offset: [f32; 2], rotation_deg: [f32; 2]) -> MatrixData {
    let [x, y] = offset.map(f64::from);
    let [yaw, pitch] = rotation_deg.map(f64::from);

    let m = DMat4::from_translation(DVec3::new(x, y, 0.0))
        * DMat4::from_rotation_y(deg_to_rad(yaw))
        * DMat4::from_rotation_x(deg_to_rad(-pitch));

    serialize(&m)
}

/// Inverse of the camera's world transform, a pure translation to `eye`.
///
/// The camera never rotates; it looks down -Z.
pub fn view_matrix(eye: [f32; 3]) -> MatrixData {
    let eye = DVec3::from_array(eye.map(f64::from));
    serialize(&DMat4::from_translation(eye).inverse())
}

/// Perspective projection from a vertical field of view in degrees.
///
/// The frustum is built from explicit bounds `left, left + width, top,
/// top - height` rather than a centered shortcut so the rounding matches the
/// reference output. Clip-space depth spans -1..1.
pub fn projection_matrix(near: f32, far: f32, fov_deg: f32, aspect: f32) -> MatrixData {
    let (near, far, aspect) = (f64::from(near), f64::from(far), f64::from(aspect));

    let top = near * deg_to_rad(f64::from(fov_deg) * 0.5).tan();
    let height = 2.0 * top;
    let width = aspect * height;
    let left = -0.5 * width;

    serialize(&frustum(left, left + width, top, top - height, near, far))
}

fn frustum(left: f64, right: f64, top: f64, bottom: f64, near: f64, far: f64) -> DMat4 {
    let x = 2.0 * near / (right - left);
    let y = 2.0 * near / (top - bottom);

    let a = (right + left) / (right - left);
    let b = (top + bottom) / (top - bottom);
    let c = -(far + near) / (far - near);
    let d = -2.0 * far * near / (far - near);

    #[rustfmt::skip]
    let cols = [
        x,   0.0, 0.0, 0.0,
        0.0, y,   0.0, 0.0,
        a,   b,   c,   -1.0,
        0.0, 0.0, d,   0.0,
    ];
    DMat4::from_cols_array(&cols)
}

#[inline]
fn serialize(m: &DMat4) -> MatrixData {
    m.to_cols_array().map(|v| v as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() <= 1e-5 * b.abs().max(1.0), "{a} != {b}");
    }

    // ── world ─────────────────────────────────────────────────────────────

    #[test]
    fn world_at_rest_is_identity() {
        assert_eq!(world_matrix([0.0, 0.0], [0.0, 0.0]), IDENTITY);
    }

    #[test]
    fn world_translation_lands_in_last_column() {
        let m = world_matrix([1.5, -2.0], [0.0, 0.0]);
        assert_eq!(&m[12..16], &[1.5, -2.0, 0.0, 1.0]);
        assert_eq!(&m[..12], &IDENTITY[..12]);
    }

    #[test]
    fn translation_is_applied_after_rotation() {
        // Rotating must not move the origin: the last column stays the offset.
        let m = world_matrix([3.0, 4.0], [37.0, -81.0]);
        assert_close(m[12], 3.0);
        assert_close(m[13], 4.0);
        assert_close(m[14], 0.0);
    }

    #[test]
    fn yaw_rotates_about_y() {
        let m = world_matrix([0.0, 0.0], [90.0, 0.0]);
        // Column 0 is the image of +X: rotateY(90°) maps +X to -Z.
        assert_close(m[0], 0.0);
        assert_close(m[2], -1.0);
        // +Y is untouched.
        assert_close(m[5], 1.0);
    }

    #[test]
    fn pitch_is_negated() {
        let m = world_matrix([0.0, 0.0], [0.0, 90.0]);
        // rotateX(-90°) maps +Y to -Z.
        assert_close(m[5], 0.0);
        assert_close(m[6], -1.0);
        assert_close(m[0], 1.0);
    }

    #[test]
    fn yaw_is_applied_outside_pitch() {
        let m = world_matrix([0.0, 0.0], [90.0, 90.0]);
        // +Y -> rotateX(-90) -> -Z -> rotateY(90) -> -X
        assert_close(m[4], -1.0);
        assert_close(m[5], 0.0);
        assert_close(m[6], 0.0);
    }

    // ── view ──────────────────────────────────────────────────────────────

    #[test]
    fn view_negates_eye() {
        let m = view_matrix([0.0, 0.0, 5.0]);
        assert_eq!(&m[12..15], &[0.0, 0.0, -5.0]);
        assert_eq!(m[15], 1.0);
        assert_eq!(&m[..12], &IDENTITY[..12]);
    }

    #[test]
    fn view_of_offset_camera() {
        let m = view_matrix([7.0, 7.0, 15.0]);
        assert_eq!(&m[12..15], &[-7.0, -7.0, -15.0]);
    }

    // ── projection ────────────────────────────────────────────────────────

    #[test]
    fn projection_is_deterministic() {
        let a = projection_matrix(0.1, 1000.0, 45.0, 1.0);
        let b = projection_matrix(0.1, 1000.0, 45.0, 1.0);
        assert_eq!(a.map(f32::to_bits), b.map(f32::to_bits));
    }

    #[test]
    fn projection_matches_frustum_bounds() {
        let near = f64::from(0.1f32);
        let far = 1000.0f64;
        let top = near * (22.5f64.to_radians()).tan();
        assert_close(top as f32, 0.1 * 22.5f32.to_radians().tan());

        let m = projection_matrix(0.1, 1000.0, 45.0, 1.0);

        // 2n / (t - b) == n / top
        assert_close(m[5], (near / top) as f32);
        assert_close(m[0], m[5]);
        assert_eq!(m[8], 0.0);
        assert_eq!(m[9], 0.0);
        assert_close(m[10], (-(far + near) / (far - near)) as f32);
        assert_eq!(m[11], -1.0);
        assert_close(m[14], (-2.0 * far * near / (far - near)) as f32);
        assert_eq!(m[15], 0.0);
    }

    #[test]
    fn projection_scales_x_by_aspect() {
        let square = projection_matrix(0.1, 100.0, 60.0, 1.0);
        let wide = projection_matrix(0.1, 100.0, 60.0, 2.0);
        assert_close(wide[0], square[0] / 2.0);
        assert_close(wide[5], square[5]);
    }

    #[test]
    fn degenerate_projection_propagates_non_finite() {
        let m = projection_matrix(0.1, 1000.0, 45.0, 0.0);
        assert!(!m[0].is_finite());
    }

    #[test]
    fn uniform_size_is_64_bytes() {
        assert_eq!(MATRIX_UNIFORM_SIZE, 64);
    }
}
