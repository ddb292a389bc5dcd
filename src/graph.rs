use crate::corners::detect_corner_nodes;
use crate::layout::TileLayout;
use crate::point::Point2;
use crate::sight::has_line_of_sight;
use std::collections::HashMap;

// Trace logging flag - set to false to silence build statistics
const TRACE_GRAPH_BUILD: bool = true;

/// Area id of a node that has not been labelled yet (build-time only)
const UNASSIGNED_AREA: u32 = u32::MAX;

/// A waypoint of the navigation graph.
/// Identity is the position; neighbours index into the owning graph's arena.
#[derive(Debug, Clone)]
pub struct NavNode {
    pub pos: Point2,
    /// (neighbour index, edge length) pairs; edges are bidirectional
    pub neighbours: Vec<(usize, f32)>,
}

/// Navigation graph for one tile layout.
///
/// Nodes live in an arena addressed by index; `area_ids` runs parallel to
/// it and groups nodes believed to be mutually reachable. The graph is
/// rebuilt wholesale whenever the layout changes, never patched.
#[derive(Debug, Clone)]
pub struct NavGraph {
    pub nodes: Vec<NavNode>,
    pub area_ids: Vec<u32>,
}

impl NavGraph {
    /// Build the full graph for a layout: detect corner nodes, connect
    /// every mutually visible pair, and label connected areas.
    pub fn build(layout: &TileLayout) -> NavGraph {
        // collapse duplicate corner positions onto one node
        let mut nodes: Vec<NavNode> = Vec::new();
        let mut index_by_pos: HashMap<(u32, u32), usize> = HashMap::new();
        for pos in detect_corner_nodes(layout) {
            let key = (pos.x.to_bits(), pos.y.to_bits());
            if !index_by_pos.contains_key(&key) {
                index_by_pos.insert(key, nodes.len());
                nodes.push(NavNode {
                    pos,
                    neighbours: Vec::new(),
                });
            }
        }

        let mut area_ids = vec![UNASSIGNED_AREA; nodes.len()];
        let mut next_area_id: u32 = 0;
        let mut edge_count: usize = 0;

        for i in 0..nodes.len() {
            if area_ids[i] == UNASSIGNED_AREA {
                area_ids[i] = next_area_id;
                next_area_id += 1;
            }
            for j in (i + 1)..nodes.len() {
                if has_line_of_sight(layout, nodes[i].pos, nodes[j].pos) {
                    // single-pass propagation: an edge to an unlabelled node
                    // copies the current label (best effort, not union-find)
                    if area_ids[j] == UNASSIGNED_AREA {
                        area_ids[j] = area_ids[i];
                    }
                    let d = nodes[i].pos.distance(&nodes[j].pos);
                    nodes[i].neighbours.push((j, d));
                    nodes[j].neighbours.push((i, d));
                    edge_count += 1;
                }
            }
        }

        if TRACE_GRAPH_BUILD {
            println!(
                "[graph] built {} nodes, {} connections, {} areas",
                nodes.len(),
                edge_count,
                next_area_id
            );
        }

        NavGraph { nodes, area_ids }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct area labels in use
    pub fn area_count(&self) -> usize {
        let mut seen: Vec<u32> = self.area_ids.clone();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_symmetric_with_euclidean_weights() {
        let mut cells = vec![0; 9];
        cells[4] = -1;
        let layout = TileLayout::with_cells(3, 3, 1.0, cells);
        let graph = NavGraph::build(&layout);

        for (i, node) in graph.nodes.iter().enumerate() {
            for &(j, d) in &node.neighbours {
                let expected = node.pos.distance(&graph.nodes[j].pos);
                assert_eq!(d, expected);
                assert!(
                    graph.nodes[j]
                        .neighbours
                        .iter()
                        .any(|&(back, back_d)| back == i && back_d == d),
                    "edge {} -> {} has no mirror",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn test_node_positions_are_unique() {
        let mut cells = vec![0; 9];
        cells[4] = -1;
        let layout = TileLayout::with_cells(3, 3, 1.0, cells);
        let graph = NavGraph::build(&layout);

        for i in 0..graph.nodes.len() {
            for j in (i + 1)..graph.nodes.len() {
                assert!(graph.nodes[i].pos != graph.nodes[j].pos);
            }
        }
    }

    #[test]
    fn test_single_platform_is_one_area() {
        let layout = TileLayout::with_cells(2, 2, 1.0, vec![0; 4]);
        let graph = NavGraph::build(&layout);
        assert_eq!(graph.nodes.len(), 4);
        assert_eq!(graph.area_count(), 1);
    }
}
