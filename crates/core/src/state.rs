use crate::snapshot::LiveSnapshot;
use std::sync::Arc;

/// Smallest and largest accepted histogram bin counts.
pub const BIN_COUNT_RANGE: (u32, u32) = (1, 53_940);
/// Carat slider bounds.
pub const CARAT_RANGE: (f32, f32) = (0.0, 2.5);

/// Central dashboard state; every widget reads from it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Latest snapshot published by the feed; `None` until the first tick.
    pub live:          Option<Arc<LiveSnapshot>>,
    /// Histogram bin count (already clamped).
    pub bin_count:     u32,
    /// Bin-count field contents as typed.
    pub bin_count_raw: String,
    /// Upper carat bound for the histogram.
    pub carat:         f32,
    /// Which reference tab is showing.
    pub tab:           ReferenceTab,
}

impl AppState {
    pub fn new(bin_count: u32, carat: f32) -> Self {
        let bin_count = clamp_bin_count(bin_count);
        Self {
            live:          None,
            bin_count,
            bin_count_raw: bin_count.to_string(),
            carat:         carat.clamp(CARAT_RANGE.0, CARAT_RANGE.1),
            tab:           ReferenceTab::default(),
        }
    }

    /// Record the bin-count text; the numeric value only changes when it parses.
    pub fn set_bin_count_input(&mut self, raw: String) {
        if let Ok(n) = raw.trim().parse::<u32>() {
            self.bin_count = clamp_bin_count(n);
        }
        self.bin_count_raw = raw;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(1, 1.0)
    }
}

fn clamp_bin_count(n: u32) -> u32 {
    n.clamp(BIN_COUNT_RANGE.0, BIN_COUNT_RANGE.1)
}

/// The two presentations of the filtered reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceTab {
    /// A few key columns.
    #[default]
    Table,
    /// Every column.
    Grid,
}

impl ReferenceTab {
    pub fn label(self) -> &'static str {
        match self {
            ReferenceTab::Table => "Diamond Data Table",
            ReferenceTab::Grid  => "Diamond Data Grid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bin_count_input_parses_and_clamps() {
        let mut state = AppState::default();
        state.set_bin_count_input("25".to_string());
        assert_eq!(state.bin_count, 25);

        state.set_bin_count_input("0".to_string());
        assert_eq!(state.bin_count, 1);

        state.set_bin_count_input("99999".to_string());
        assert_eq!(state.bin_count, 53_940);
    }

    #[test]
    fn unparsable_input_keeps_previous_value() {
        let mut state = AppState::default();
        state.set_bin_count_input("12".to_string());
        state.set_bin_count_input("12a".to_string());
        assert_eq!(state.bin_count, 12);
        assert_eq!(state.bin_count_raw, "12a");
    }

    #[test]
    fn new_clamps_carat() {
        assert_eq!(AppState::new(1, 9.0).carat, 2.5);
    }
}
