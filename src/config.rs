use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub visual: VisualConfig,
}

#[derive(Debug, Deserialize)]
pub struct LayoutConfig {
    /// Text layout file to load on startup; a built-in demo layout is used
    /// when the file is missing
    #[serde(default = "default_layout_path")]
    pub path: String,
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
    #[serde(default = "default_show_nodes")]
    pub show_nodes: bool,
    #[serde(default = "default_show_edges")]
    pub show_edges: bool,
}

// Default values
fn default_layout_path() -> String { "layout.txt".to_string() }
fn default_tile_size() -> f32 { 1.0 }
fn default_window_title() -> String { "landnav - platform navigation demo".to_string() }
fn default_bg_r() -> u8 { 30 }
fn default_bg_g() -> u8 { 30 }
fn default_bg_b() -> u8 { 30 }
fn default_show_nodes() -> bool { true }
fn default_show_edges() -> bool { false }

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            path: default_layout_path(),
            tile_size: default_tile_size(),
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
            show_nodes: default_show_nodes(),
            show_edges: default_show_edges(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            visual: VisualConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    println!("Loaded configuration from config.toml");
                    config
                }
                Err(e) => {
                    eprintln!("Warning: Failed to parse config.toml: {}", e);
                    eprintln!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        }
    }
}
