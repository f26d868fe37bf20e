/// Cubes per grid row for `count` instances: `ceil(sqrt(count))`.
pub fn grid_row_length(count: u32) -> u32 {
    f64::from(count).sqrt().ceil() as u32
}

/// Grid displacement of instance `i`: column `i mod row`, row `i / row`,
/// each scaled by `step`. A zero `row_length` is treated as one.
pub fn grid_offset(i: u32, row_length: u32, step: f32) -> [f32; 2] {
    let row_length = row_length.max(1);
    let y_steps = i / row_length;
    let x_steps = i - y_steps * row_length;
    [x_steps as f32 * step, y_steps as f32 * step]
}
