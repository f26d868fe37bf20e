use lumen_engine::input::Key;
use lumen_engine::transform::TransformState;

/// Offset change per key press.
pub const OFFSET_STEP: f32 = 0.1;

/// Rotation change per key press, degrees.
pub const ROTATE_STEP: f32 = 2.0;

/// Arrow keys move the triangle of the uniform page.
pub fn arrow_offset(key: Key) -> Option<[f32; 2]> {
    match key {
        Key::ArrowLeft => Some([-OFFSET_STEP, 0.0]),
        Key::ArrowRight => Some([OFFSET_STEP, 0.0]),
        Key::ArrowDown => Some([0.0, -OFFSET_STEP]),
        Key::ArrowUp => Some([0.0, OFFSET_STEP]),
        _ => None,
    }
}

/// Applies one cube-page key to `state`.
///
/// `a`/`d`/`s`/`w` move the cube, arrows rotate it (left/right yaw,
/// down/up pitch). Returns whether the key was handled.
pub fn apply_cube_key(state: &mut TransformState, key: Key) -> bool {
    match key {
        Key::A => state.nudge_offset(-OFFSET_STEP, 0.0),
        Key::D => state.nudge_offset(OFFSET_STEP, 0.0),
        Key::S => state.nudge_offset(0.0, -OFFSET_STEP),
        Key::W => state.nudge_offset(0.0, OFFSET_STEP),
        Key::ArrowLeft => state.nudge_rotation(-ROTATE_STEP, 0.0),
        Key::ArrowRight => state.nudge_rotation(ROTATE_STEP, 0.0),
        Key::ArrowDown => state.nudge_rotation(0.0, -ROTATE_STEP),
        Key::ArrowUp => state.nudge_rotation(0.0, ROTATE_STEP),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: [f32; 2], b: [f32; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-6 && (a[1] - b[1]).abs() < 1e-6
    }

    // ── uniform page ─────────────────────────────────────────────────────

    #[test]
    fn arrows_map_to_offsets() {
        assert_eq!(arrow_offset(Key::ArrowLeft), Some([-0.1, 0.0]));
        assert_eq!(arrow_offset(Key::ArrowUp), Some([0.0, 0.1]));
        assert_eq!(arrow_offset(Key::W), None);
    }

    // ── cube pages ───────────────────────────────────────────────────────

    #[test]
    fn letter_keys_move_the_cube() {
        let mut state = TransformState::new([0.0, 0.0], [45.0, -45.0]);
        for key in [Key::D, Key::D, Key::W, Key::A] {
            assert!(apply_cube_key(&mut state, key));
        }
        assert!(approx(state.offset, [0.1, 0.1]));
        assert_eq!(state.rotate, [45.0, -45.0]);
    }

    #[test]
    fn arrows_rotate_the_cube() {
        let mut state = TransformState::new([0.0, 0.0], [45.0, -45.0]);
        apply_cube_key(&mut state, Key::ArrowLeft);
        apply_cube_key(&mut state, Key::ArrowUp);
        apply_cube_key(&mut state, Key::ArrowUp);
        assert_eq!(state.rotate, [43.0, -41.0]);
        assert_eq!(state.offset, [0.0, 0.0]);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut state = TransformState::default();
        assert!(!apply_cube_key(&mut state, Key::Space));
        assert!(!apply_cube_key(&mut state, Key::Unknown(3)));
        assert_eq!(state, TransformState::default());
    }
}
