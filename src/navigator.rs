use crate::graph::NavGraph;
use crate::layout::TileLayout;
use crate::pathfinding;
use crate::point::Point2;

/// Axis-aligned bounds of one instantiated tile
#[derive(Debug, Clone, Copy)]
pub struct TileBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl TileBounds {
    /// Edge-inclusive containment test
    pub fn contains(&self, p: Point2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

/// Owns the active tile layout, the instantiated tile bounds and the
/// navigation graph built from them.
///
/// Installing a layout rebuilds everything wholesale and needs `&mut self`;
/// queries borrow shared, so no query can observe a half-built graph.
pub struct Navigator {
    layout: Option<TileLayout>,
    tiles: Vec<TileBounds>,
    graph: Option<NavGraph>,
}

impl Navigator {
    pub fn new() -> Self {
        Navigator {
            layout: None,
            tiles: Vec::new(),
            graph: None,
        }
    }

    /// Install a layout and rebuild the tile bounds and the graph.
    ///
    /// Skipped entirely - prior state stays queryable - when the layout is
    /// absent, defines zero tile types, or its dimensions don't match the
    /// cell array.
    pub fn set_layout(&mut self, layout: Option<TileLayout>) {
        let layout = match layout {
            Some(layout) => layout,
            None => return,
        };
        if layout.tile_defs.is_empty() || !layout.is_well_formed() {
            return;
        }

        self.tiles.clear();
        let half = layout.tile_size / 2.0;
        for row in 0..layout.rows {
            for col in 0..layout.cols {
                if layout.is_usable(row, col) {
                    let centre = layout.cell_center(row, col);
                    self.tiles.push(TileBounds {
                        min_x: centre.x - half,
                        min_y: centre.y - half,
                        max_x: centre.x + half,
                        max_y: centre.y + half,
                    });
                }
            }
        }

        self.graph = Some(NavGraph::build(&layout));
        self.layout = Some(layout);
    }

    /// Drop the layout, tile bounds and graph
    pub fn clear(&mut self) {
        self.layout = None;
        self.tiles.clear();
        self.graph = None;
    }

    /// True if any instantiated tile's bounds contain the position.
    /// Backed by the tile bounds list, independent of the graph.
    pub fn is_grounded(&self, position: Point2) -> bool {
        self.tiles.iter().any(|tile| tile.contains(position))
    }

    /// Route from `start` to `target`; see [`pathfinding::find_path`]
    pub fn find_path(&self, start: Point2, target: Point2) -> Option<Vec<Point2>> {
        let layout = self.layout.as_ref()?;
        let graph = self.graph.as_ref()?;
        pathfinding::find_path(layout, graph, start, target)
    }

    pub fn layout(&self) -> Option<&TileLayout> {
        self.layout.as_ref()
    }

    pub fn graph(&self) -> Option<&NavGraph> {
        self.graph.as_ref()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator::new()
    }
}
