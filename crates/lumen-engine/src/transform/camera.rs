use super::matrix::{MatrixData, projection_matrix, view_matrix, world_matrix};

/// Per-page object transform, mutated by input and read once per frame.
///
/// `rotate` is `[yaw, pitch]` in degrees.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TransformState {
    pub offset: [f32; 2],
    pub rotate: [f32; 2],
}

impl TransformState {
    pub const fn new(offset: [f32; 2], rotate: [f32; 2]) -> Self {
        Self { offset, rotate }
    }

    pub fn nudge_offset(&mut self, dx: f32, dy: f32) {
        self.offset[0] += dx;
        self.offset[1] += dy;
    }

    pub fn nudge_rotation(&mut self, dyaw: f32, dpitch: f32) {
        self.rotate[0] += dyaw;
        self.rotate[1] += dpitch;
    }

    pub fn world_matrix(&self) -> MatrixData {
        world_matrix(self.offset, self.rotate)
    }

    /// World matrix for an instance displaced by `delta` from this state's offset.
    pub fn world_matrix_at(&self, delta: [f32; 2]) -> MatrixData {
        let offset = [self.offset[0] + delta[0], self.offset[1] + delta[1]];
        world_matrix(offset, self.rotate)
    }
}

/// Fixed camera: eye position plus perspective parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraParams {
    pub eye: [f32; 3],
    pub near: f32,
    pub far: f32,
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
}

impl CameraParams {
    pub const fn new(eye: [f32; 3], near: f32, far: f32, fov_deg: f32) -> Self {
        Self {
            eye,
            near,
            far,
            fov_deg,
        }
    }

    pub fn view_matrix(&self) -> MatrixData {
        view_matrix(self.eye)
    }

    pub fn projection_matrix(&self, aspect: f32) -> MatrixData {
        projection_matrix(self.near, self.far, self.fov_deg, aspect)
    }
}
