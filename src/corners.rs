use crate::layout::TileLayout;
use crate::point::Point2;

/// Check if the northeast corner of cell (row, col) is exposed.
/// Exposed means: both adjacent edges face empty space (outer corner), or
/// both are walkable but the diagonal between them is not (inner corner).
fn ne_corner_exposed(layout: &TileLayout, row: i32, col: i32) -> bool {
    let right = layout.is_usable(row, col + 1);
    let up = layout.is_usable(row - 1, col);
    (!right && !up) || (right && up && !layout.is_usable(row - 1, col + 1))
}

/// Check if the northwest corner of cell (row, col) is exposed
fn nw_corner_exposed(layout: &TileLayout, row: i32, col: i32) -> bool {
    let left = layout.is_usable(row, col - 1);
    let up = layout.is_usable(row - 1, col);
    (!left && !up) || (left && up && !layout.is_usable(row - 1, col - 1))
}

/// Check if the southwest corner of cell (row, col) is exposed
fn sw_corner_exposed(layout: &TileLayout, row: i32, col: i32) -> bool {
    let left = layout.is_usable(row, col - 1);
    let down = layout.is_usable(row + 1, col);
    (!left && !down) || (left && down && !layout.is_usable(row + 1, col - 1))
}

/// Check if the southeast corner of cell (row, col) is exposed
fn se_corner_exposed(layout: &TileLayout, row: i32, col: i32) -> bool {
    let right = layout.is_usable(row, col + 1);
    let down = layout.is_usable(row + 1, col);
    (!right && !down) || (right && down && !layout.is_usable(row + 1, col + 1))
}

/// Scan the layout and emit one node position per exposed tile corner.
///
/// Nodes sit one third of a tile inward from the cell centre toward the
/// exposed corner, which keeps them on the tile and off its edges. Every
/// convex and concave turning point of the walkable area gets a node;
/// straight walls get none. Positions may repeat across cells and are
/// deduplicated by the graph builder.
pub fn detect_corner_nodes(layout: &TileLayout) -> Vec<Point2> {
    let inset = layout.tile_size / 3.0;
    let mut nodes = Vec::new();

    for row in 0..layout.rows {
        for col in 0..layout.cols {
            if !layout.is_usable(row, col) {
                continue;
            }

            let centre = layout.cell_center(row, col);

            if ne_corner_exposed(layout, row, col) {
                nodes.push(Point2::new(centre.x + inset, centre.y + inset));
            }
            if nw_corner_exposed(layout, row, col) {
                nodes.push(Point2::new(centre.x - inset, centre.y + inset));
            }
            if sw_corner_exposed(layout, row, col) {
                nodes.push(Point2::new(centre.x - inset, centre.y - inset));
            }
            if se_corner_exposed(layout, row, col) {
                nodes.push(Point2::new(centre.x + inset, centre.y - inset));
            }
        }
    }

    nodes
}
