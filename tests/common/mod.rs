use landnav::{NavGraph, Point2, TileLayout};
use std::collections::HashSet;

/// A parsed path scenario: a layout plus a start and target point
pub struct PathFixture {
    pub layout: TileLayout,
    pub start: Point2,
    pub target: Point2,
}

/// Parse a path scenario from text.
/// Format:
/// - ■: tile
/// - □ or space: empty cell
/// - s: tile carrying the start point at its centre
/// - t: tile carrying the target point at its centre
pub fn parse_path_fixture(text: &str, tile_size: f32) -> Result<PathFixture, Box<dyn std::error::Error>> {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.is_empty() {
        return Err("no grid lines found in fixture".into());
    }

    let cols = lines[0].chars().count() as i32;
    let rows = lines.len() as i32;

    let mut cells = Vec::with_capacity((rows * cols) as usize);
    let mut start_cell = None;
    let mut target_cell = None;

    for (row, line) in lines.iter().enumerate() {
        if line.chars().count() as i32 != cols {
            return Err("inconsistent row width in fixture".into());
        }
        for (col, ch) in line.chars().enumerate() {
            match ch {
                '■' => cells.push(0),
                '□' | ' ' => cells.push(-1),
                's' => {
                    cells.push(0);
                    start_cell = Some((row as i32, col as i32));
                }
                't' => {
                    cells.push(0);
                    target_cell = Some((row as i32, col as i32));
                }
                _ => return Err(format!("unexpected character '{}' in fixture", ch).into()),
            }
        }
    }

    let layout = TileLayout::with_cells(rows, cols, tile_size, cells);
    let (start_row, start_col) = start_cell.ok_or("no start marker 's' in fixture")?;
    let (target_row, target_col) = target_cell.ok_or("no target marker 't' in fixture")?;
    let start = layout.cell_center(start_row, start_col);
    let target = layout.cell_center(target_row, target_col);

    Ok(PathFixture {
        layout,
        start,
        target,
    })
}

/// Bit-exact key for a node position, usable in hashed sets
pub fn position_key(p: &Point2) -> (u32, u32) {
    (p.x.to_bits(), p.y.to_bits())
}

/// Node positions of a graph as an order-independent set
pub fn position_set(graph: &NavGraph) -> HashSet<(u32, u32)> {
    graph.nodes.iter().map(|n| position_key(&n.pos)).collect()
}

/// Undirected edges of a graph as an order-independent set of
/// canonically ordered position pairs
pub fn edge_set(graph: &NavGraph) -> HashSet<((u32, u32), (u32, u32))> {
    let mut edges = HashSet::new();
    for node in &graph.nodes {
        for &(j, _) in &node.neighbours {
            let a = position_key(&node.pos);
            let b = position_key(&graph.nodes[j].pos);
            edges.insert(if a <= b { (a, b) } else { (b, a) });
        }
    }
    edges
}

/// Index of the graph node at exactly this position, if any
pub fn node_at(graph: &NavGraph, pos: Point2) -> Option<usize> {
    graph.nodes.iter().position(|n| n.pos == pos)
}
