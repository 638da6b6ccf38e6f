use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure parsed from `dash.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    /// Live cost feed: cadence, history size and sampling.
    pub feed:    FeedConfig,
    /// Reference dataset and its initial filter.
    pub filter:  FilterConfig,
    /// Initial values of the sidebar inputs.
    pub sidebar: SidebarConfig,
    /// Main window settings.
    pub window:  WindowConfig,
    /// Theme / visual settings.
    pub theme:   ThemeConfig,
}

/// Live feed settings. Fixed for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Seconds between two readings.
    pub interval_secs:    u64,
    /// Number of readings kept in the history buffer.
    pub capacity:         usize,
    /// Lower bound of the uniform cost draw.
    pub cost_min:         f64,
    /// Upper bound of the uniform cost draw.
    pub cost_max:         f64,
    /// Decimal places costs are rounded to.
    pub decimals:         u32,
    /// `strftime` pattern for reading timestamps.
    pub timestamp_format: String,
    /// Fixed RNG seed for reproducible runs; random when unset.
    pub seed:             Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            interval_secs:    2,
            capacity:         5,
            cost_min:         100.0,
            cost_max:         120.0,
            decimals:         2,
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
            seed:             None,
        }
    }
}

/// Reference dataset settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Cut labels selected at startup, e.g. `["Very Good"]`.
    pub default_cuts: Vec<String>,
    /// Diamonds CSV to load instead of the bundled sample.
    pub dataset:      Option<PathBuf>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            default_cuts: vec!["Very Good".to_string()],
            dataset:      None,
        }
    }
}

/// Starting values for the sidebar controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Histogram bin count (1 – 53940).
    pub bin_count: u32,
    /// Carat slider position (0.0 – 2.5).
    pub carat:     f32,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            bin_count: 1,
            carat:     1.0,
        }
    }
}

/// Main window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title:  String,
    /// Initial width in logical pixels.
    pub width:  f32,
    /// Initial height in logical pixels.
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title:  "Diamond Dashboard".to_string(),
            width:  1280.0,
            height: 860.0,
        }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background color (hex, e.g. `"#1a0933"`).
    pub background:    String,
    /// Primary text/foreground color.
    pub foreground:    String,
    /// Accent / highlight color (headings, regression line).
    pub accent:        String,
    /// Card and value-box background.
    pub card:          String,
    /// Scatter marker color.
    pub series:        String,
    /// Base font size in points.
    pub font_size:     f32,
    /// Corner radius for cards (pixels).
    pub border_radius: f32,
    /// Inner padding of each card (pixels).
    pub padding:       u16,
    /// Gap between cards (pixels).
    pub gap:           u16,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background:    "#1a0933".to_string(), // Vapor body
            foreground:    "#32fbe2".to_string(), // Vapor text
            accent:        "#ea39b8".to_string(), // Vapor pink
            card:          "#2a1454".to_string(),
            series:        "#008080".to_string(), // teal
            font_size:     14.0,
            border_radius: 8.0,
            padding:       12,
            gap:           12,
        }
    }
}
