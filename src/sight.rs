use crate::layout::TileLayout;
use crate::point::Point2;

/// Sampling density of the segment walk, in samples per tile of distance
const SAMPLES_PER_TILE: f32 = 10.0;

/// Check whether the straight segment between two world points stays on
/// usable tiles.
///
/// Both points are converted to grid space (offset removed, divided by the
/// tile size, y inverted so rows grow downward, plus a half-tile bias so
/// flooring a coordinate gives the cell containing it). The segment is then
/// walked in fixed sub-tile steps, testing the cell under each sample and
/// finally the cell under `p2` itself. Coincident points are trivially
/// visible.
pub fn has_line_of_sight(layout: &TileLayout, p1: Point2, p2: Point2) -> bool {
    let (x1, y1) = to_grid_space(layout, p1);
    let (x2, y2) = to_grid_space(layout, p2);

    let dx = x2 - x1;
    let dy = y2 - y1;
    let d = (dx * dx + dy * dy).sqrt();

    if d == 0.0 {
        return true;
    }

    let step_x = dx / (d * SAMPLES_PER_TILE);
    let step_y = dy / (d * SAMPLES_PER_TILE);
    let step_length = 1.0 / SAMPLES_PER_TILE;

    let mut x = x1;
    let mut y = y1;
    let mut travelled = 0.0;
    while travelled < d {
        if !layout.is_usable(y.floor() as i32, x.floor() as i32) {
            return false;
        }
        x += step_x;
        y += step_y;
        travelled += step_length;
    }

    layout.is_usable(y2.floor() as i32, x2.floor() as i32)
}

/// Map a world point to grid space where floor(y), floor(x) is the
/// (row, col) containing it
fn to_grid_space(layout: &TileLayout, p: Point2) -> (f32, f32) {
    let offset = layout.offset();
    let gx = (p.x - offset.x) / layout.tile_size + 0.5;
    let gy = -((p.y - offset.y) / layout.tile_size) + 0.5;
    (gx, gy)
}
