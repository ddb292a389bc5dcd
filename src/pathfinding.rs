use crate::graph::NavGraph;
use crate::layout::TileLayout;
use crate::point::Point2;
use crate::sight::has_line_of_sight;
use std::collections::HashSet;

// Trace logging flag - set to true to enable debug output
const TRACE_PATHFINDING: bool = false;

/// One frontier entry of the search. Entries live in an arena; `parent`
/// indexes into it, forming a tree rooted at the synthetic start entry.
struct PathEntry {
    node: usize,
    parent: Option<usize>,
    total_distance: f32,
}

/// Find a waypoint route from `start` to `target` over the navigation graph.
///
/// Returns `None` for an empty graph, coincident endpoints, or an exhausted
/// search. When `start` can see `target` directly the graph is bypassed and
/// the route is just `[target]`. The returned points run from the target end
/// to the start-adjacent waypoint: index 0 is the target side, the last
/// element is the first point to move to from `start`.
pub fn find_path(
    layout: &TileLayout,
    graph: &NavGraph,
    start: Point2,
    target: Point2,
) -> Option<Vec<Point2>> {
    if graph.nodes.is_empty() {
        return None;
    }

    if start == target {
        return None;
    }

    if has_line_of_sight(layout, start, target) {
        return Some(vec![target]);
    }

    let start_node = nearest_node(layout, graph, start)?;
    let end_node = nearest_node(layout, graph, target)?;

    if TRACE_PATHFINDING {
        println!(
            "[find_path] ({}, {}) -> ({}, {}): start node {}, end node {}",
            start.x, start.y, target.x, target.y, start_node, end_node
        );
    }

    let mut entries: Vec<PathEntry> = vec![PathEntry {
        node: start_node,
        parent: None,
        total_distance: 0.0,
    }];
    let mut open: Vec<usize> = vec![0];
    let mut closed: HashSet<usize> = HashSet::new();

    while !open.is_empty() {
        // cheapest open entry by linear scan; first one wins on ties
        let mut best = 0;
        for k in 1..open.len() {
            if entries[open[k]].total_distance < entries[open[best]].total_distance {
                best = k;
            }
        }
        let current = open.remove(best);
        let current_node = entries[current].node;

        if current_node == end_node {
            if TRACE_PATHFINDING {
                println!(
                    "[find_path] reached end node {} at distance {:.2}",
                    end_node, entries[current].total_distance
                );
            }
            return Some(assemble_path(
                layout, graph, &entries, current, end_node, start, target,
            ));
        }

        // enqueue every neighbour not yet expanded; the open list is not
        // deduplicated, which stays correct because edge weights are
        // non-negative and the cheapest appearance pops first
        let base_distance = entries[current].total_distance;
        for &(neighbour, edge) in &graph.nodes[current_node].neighbours {
            if !closed.contains(&neighbour) {
                entries.push(PathEntry {
                    node: neighbour,
                    parent: Some(current),
                    total_distance: base_distance + edge,
                });
                open.push(entries.len() - 1);
            }
        }

        closed.insert(current_node);
    }

    if TRACE_PATHFINDING {
        println!("[find_path] open set exhausted, no path");
    }

    None
}

/// Node nearest to `pos` that has line of sight to it; squared distance
/// decides, the first node seen wins exact ties. When no node can see the
/// point, fall back to the nearest node regardless of sight, so a query
/// from a fully occluded position still anchors to the graph.
fn nearest_node(layout: &TileLayout, graph: &NavGraph, pos: Point2) -> Option<usize> {
    let mut nearest_visible: Option<usize> = None;
    let mut nearest_any: Option<usize> = None;
    let mut min_visible = f32::MAX;
    let mut min_any = f32::MAX;

    for (i, node) in graph.nodes.iter().enumerate() {
        let d = pos.distance_squared(&node.pos);
        if d < min_any {
            min_any = d;
            nearest_any = Some(i);
        }
        if d < min_visible && has_line_of_sight(layout, node.pos, pos) {
            min_visible = d;
            nearest_visible = Some(i);
        }
    }

    nearest_visible.or(nearest_any)
}

/// Reconstruct the waypoint list for a finished search.
///
/// Walks parent links from the goal entry, pushing node positions
/// target-end first and stopping short of the root entry. The root's
/// position is appended only when the last pushed point cannot see `start`,
/// giving the agent a first hop that is known to be visible. Finally the
/// target itself is spliced in at index 0 when the end node can see it,
/// replacing the end node outright when the next waypoint can see the
/// target too.
fn assemble_path(
    layout: &TileLayout,
    graph: &NavGraph,
    entries: &[PathEntry],
    goal: usize,
    end_node: usize,
    start: Point2,
    target: Point2,
) -> Vec<Point2> {
    let mut path: Vec<Point2> = Vec::new();
    let mut root: Option<usize> = None;

    let mut e = goal;
    loop {
        path.push(graph.nodes[entries[e].node].pos);
        match entries[e].parent {
            None => break,
            Some(p) => {
                if entries[p].parent.is_none() {
                    root = Some(p);
                    break;
                }
                e = p;
            }
        }
    }

    let last = path[path.len() - 1];
    if !has_line_of_sight(layout, last, start) {
        if let Some(r) = root {
            path.push(graph.nodes[entries[r].node].pos);
        }
    }

    let end_pos = graph.nodes[end_node].pos;
    if has_line_of_sight(layout, end_pos, target) {
        if path.len() > 1 && has_line_of_sight(layout, path[1], target) {
            // the next waypoint already sees the target, skip the end node
            path[0] = target;
        } else {
            path.insert(0, target);
        }
    }

    if TRACE_PATHFINDING {
        println!("[find_path] {} waypoints", path.len());
    }

    path
}
