mod config;

use config::Config;
use landnav::layout::EMPTY_CELL;
use landnav::{Navigator, Point2, TileLayout};
use macroquad::prelude::*;

/// Built-in demo layout used when no layout file is found: two platforms,
/// one with a hole, separated by a gap
const DEFAULT_LAYOUT: &str = "\
■■■■■■□□■■■■
■□□■■■□□■■■■
■□□■■■□□■■□■
■■■■■■□□■□□■
■■■■■■□□■■■■
";

/// Area id colours for node drawing
const AREA_COLORS: [Color; 6] = [SKYBLUE, ORANGE, GREEN, PINK, YELLOW, PURPLE];

/// Visualization state
struct ViewState {
    navigator: Navigator,
    start: Option<Point2>,
    target: Option<Point2>,
    path: Option<Vec<Point2>>,
    show_nodes: bool,
    show_edges: bool,
    background: Color,
}

impl ViewState {
    fn new(config: &Config) -> Self {
        let layout = match TileLayout::load_text_file(&config.layout.path, config.layout.tile_size)
        {
            Ok(layout) => layout,
            Err(_) => match TileLayout::from_text(DEFAULT_LAYOUT, config.layout.tile_size) {
                Ok(layout) => layout,
                Err(e) => {
                    eprintln!("Failed to parse built-in layout: {}", e);
                    TileLayout::with_cells(1, 1, config.layout.tile_size, vec![0])
                }
            },
        };

        let mut navigator = Navigator::new();
        navigator.set_layout(Some(layout));

        ViewState {
            navigator,
            start: None,
            target: None,
            path: None,
            show_nodes: config.visual.show_nodes,
            show_edges: config.visual.show_edges,
            background: Color::from_rgba(
                config.visual.background_r,
                config.visual.background_g,
                config.visual.background_b,
                255,
            ),
        }
    }

    /// Pixels per world unit, fitting the layout into the window
    fn scale(&self) -> f32 {
        let layout = match self.navigator.layout() {
            Some(layout) => layout,
            None => return 1.0,
        };
        let world_w = layout.cols as f32 * layout.tile_size;
        let world_h = layout.rows as f32 * layout.tile_size;
        (screen_width() / world_w).min(screen_height() / world_h) * 0.85
    }

    fn world_to_screen(&self, p: Point2) -> (f32, f32) {
        let scale = self.scale();
        (
            screen_width() / 2.0 + p.x * scale,
            screen_height() / 2.0 - p.y * scale,
        )
    }

    fn screen_to_world(&self, sx: f32, sy: f32) -> Point2 {
        let scale = self.scale();
        Point2::new(
            (sx - screen_width() / 2.0) / scale,
            -(sy - screen_height() / 2.0) / scale,
        )
    }

    /// Cell under a world position
    fn pick_cell(&self, p: Point2) -> Option<(i32, i32)> {
        let layout = self.navigator.layout()?;
        let offset = layout.offset();
        let row = -(((p.y - offset.y) / layout.tile_size + 0.5).floor() as i32);
        let col = ((p.x - offset.x) / layout.tile_size + 0.5).floor() as i32;
        if row >= 0 && row < layout.rows && col >= 0 && col < layout.cols {
            Some((row, col))
        } else {
            None
        }
    }

    fn recompute_path(&mut self) {
        self.path = match (self.start, self.target) {
            (Some(start), Some(target)) => self.navigator.find_path(start, target),
            _ => None,
        };
    }

    /// Flip the cell under the cursor between tile and empty, then rebuild
    /// the whole graph through the navigator
    fn toggle_cell(&mut self, row: i32, col: i32) {
        let layout = match self.navigator.layout() {
            Some(layout) => layout.clone(),
            None => return,
        };
        let mut cells = layout.cells.clone();
        let idx = (row * layout.cols + col) as usize;
        cells[idx] = if cells[idx] == EMPTY_CELL { 0 } else { EMPTY_CELL };

        let next = TileLayout {
            cells,
            ..layout
        };
        self.navigator.set_layout(Some(next));
        self.recompute_path();
    }

    fn draw(&self, hovered: Option<(i32, i32)>, mouse_world: Point2) {
        clear_background(self.background);

        let layout = match self.navigator.layout() {
            Some(layout) => layout,
            None => return,
        };
        let scale = self.scale();
        let tile_px = layout.tile_size * scale;

        // tiles
        for row in 0..layout.rows {
            for col in 0..layout.cols {
                if !layout.is_usable(row, col) {
                    continue;
                }
                let centre = layout.cell_center(row, col);
                let (sx, sy) = self.world_to_screen(Point2::new(
                    centre.x - layout.tile_size / 2.0,
                    centre.y + layout.tile_size / 2.0,
                ));
                let color = if hovered == Some((row, col)) {
                    Color::from_rgba(120, 140, 170, 255)
                } else {
                    Color::from_rgba(90, 90, 100, 255)
                };
                draw_rectangle(sx, sy, tile_px - 1.0, tile_px - 1.0, color);
            }
        }

        if let Some(graph) = self.navigator.graph() {
            if self.show_edges {
                for (i, node) in graph.nodes.iter().enumerate() {
                    for &(j, _) in &node.neighbours {
                        if j > i {
                            let (x1, y1) = self.world_to_screen(node.pos);
                            let (x2, y2) = self.world_to_screen(graph.nodes[j].pos);
                            draw_line(x1, y1, x2, y2, 1.0, Color::from_rgba(180, 60, 60, 120));
                        }
                    }
                }
            }
            if self.show_nodes {
                for (i, node) in graph.nodes.iter().enumerate() {
                    let (sx, sy) = self.world_to_screen(node.pos);
                    let area = graph.area_ids[i] as usize;
                    draw_circle(sx, sy, 4.0, AREA_COLORS[area % AREA_COLORS.len()]);
                }
            }
        }

        // the path runs target-first; draw it from the start outward
        if let (Some(start), Some(path)) = (self.start, &self.path) {
            let mut prev = start;
            for p in path.iter().rev() {
                let (x1, y1) = self.world_to_screen(prev);
                let (x2, y2) = self.world_to_screen(*p);
                draw_line(x1, y1, x2, y2, 2.0, WHITE);
                prev = *p;
            }
        }

        if let Some(start) = self.start {
            let (sx, sy) = self.world_to_screen(start);
            draw_circle(sx, sy, 6.0, BLUE);
        }
        if let Some(target) = self.target {
            let (sx, sy) = self.world_to_screen(target);
            draw_circle(sx, sy, 6.0, RED);
        }

        let (node_count, edge_count) = match self.navigator.graph() {
            Some(graph) => (
                graph.nodes.len(),
                graph.nodes.iter().map(|n| n.neighbours.len()).sum::<usize>() / 2,
            ),
            None => (0, 0),
        };
        let path_info = match &self.path {
            Some(path) => format!("{} waypoints", path.len()),
            None if self.start.is_some() && self.target.is_some() => "no path".to_string(),
            None => "-".to_string(),
        };
        let info = format!(
            "Nodes: {}  Edges: {}  Path: {}\nGrounded under cursor: {}\nLeft click: set start  Right click: set target\nT: toggle tile  N: nodes  E: edges  Esc: quit",
            node_count,
            edge_count,
            path_info,
            self.navigator.is_grounded(mouse_world)
        );
        draw_text(&info, 10.0, 20.0, 20.0, WHITE);
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: Config::load().visual.window_title,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = Config::load();
    let mut state = ViewState::new(&config);

    loop {
        let (mx, my) = mouse_position();
        let mouse_world = state.screen_to_world(mx, my);
        let hovered = state.pick_cell(mouse_world);

        if is_mouse_button_pressed(MouseButton::Left) {
            state.start = Some(mouse_world);
            state.recompute_path();
        }
        if is_mouse_button_pressed(MouseButton::Right) {
            state.target = Some(mouse_world);
            state.recompute_path();
        }
        if is_key_pressed(KeyCode::T) {
            if let Some((row, col)) = hovered {
                state.toggle_cell(row, col);
            }
        }
        if is_key_pressed(KeyCode::N) {
            state.show_nodes = !state.show_nodes;
        }
        if is_key_pressed(KeyCode::E) {
            state.show_edges = !state.show_edges;
        }
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        state.draw(hovered, mouse_world);

        next_frame().await
    }
}
