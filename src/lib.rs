pub mod corners;
pub mod graph;
pub mod layout;
pub mod navigator;
pub mod pathfinding;
pub mod point;
pub mod sight;

pub use graph::{NavGraph, NavNode};
pub use layout::{TileDef, TileLayout};
pub use navigator::Navigator;
pub use pathfinding::find_path;
pub use point::Point2;
pub use sight::has_line_of_sight;
