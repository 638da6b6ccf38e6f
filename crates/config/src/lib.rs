pub mod schema;

pub use schema::{DashConfig, FeedConfig, FilterConfig, SidebarConfig, ThemeConfig, WindowConfig};

use chrono::format::{Item, StrftimeItems};
use dash_core::state::{BIN_COUNT_RANGE, CARAT_RANGE};
use dash_core::{DashError, Result};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Largest accepted rounding precision.
const MAX_DECIMALS: u32 = 10;

/// Load configuration from a TOML file.  Returns `DashConfig::default()` if
/// the file doesn't exist so the dashboard always has sensible defaults.
///
/// The result is validated either way.
pub fn load(path: impl AsRef<Path>) -> Result<DashConfig> {
    let path = path.as_ref();
    let config = if path.exists() {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| DashError::Config(format!("cannot read '{}': {e}", path.display())))?;
        let config: DashConfig =
            toml::from_str(&raw).map_err(|e| DashError::Config(format!("TOML parse error: {e}")))?;
        tracing::info!("Loaded config from '{}'", path.display());
        config
    } else {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        DashConfig::default()
    };

    config.validate()?;
    Ok(config)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("diamond-dash").join("dash.toml")
}

impl DashConfig {
    /// Reject settings the feed or sidebar cannot run with.
    pub fn validate(&self) -> Result<()> {
        self.feed.validate()?;

        let (lo, hi) = BIN_COUNT_RANGE;
        if !(lo..=hi).contains(&self.sidebar.bin_count) {
            return Err(invalid(format!("sidebar.bin_count must be in {lo}..={hi}")));
        }
        let (lo, hi) = CARAT_RANGE;
        if !(lo..=hi).contains(&self.sidebar.carat) {
            return Err(invalid(format!("sidebar.carat must be in {lo}..={hi}")));
        }
        Ok(())
    }
}

impl FeedConfig {
    pub fn validate(&self) -> Result<()> {
        if self.interval_secs == 0 {
            return Err(invalid("feed.interval_secs must be positive"));
        }
        if self.capacity == 0 {
            return Err(invalid("feed.capacity must be positive"));
        }
        if !self.cost_min.is_finite() || !self.cost_max.is_finite() {
            return Err(invalid("feed cost bounds must be finite"));
        }
        if !(self.cost_max - self.cost_min).is_finite() {
            return Err(invalid("feed cost range is too wide to sample"));
        }
        if self.cost_min > self.cost_max {
            return Err(invalid(format!(
                "feed.cost_min ({}) exceeds feed.cost_max ({})",
                self.cost_min, self.cost_max
            )));
        }
        if self.decimals > MAX_DECIMALS {
            return Err(invalid(format!("feed.decimals must be at most {MAX_DECIMALS}")));
        }
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(invalid(format!(
                "feed.timestamp_format '{}' is not a valid strftime pattern",
                self.timestamp_format
            )));
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// History capacity; falls back to one if validation was skipped.
    pub fn capacity(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.capacity).unwrap_or(NonZeroUsize::MIN)
    }
}

fn invalid(msg: impl Into<String>) -> DashError {
    DashError::Config(msg.into())
}
