//! Desktop window for the diamond dashboard.
//!
//! Owns the Iced application loop and the two pieces of live state:
//! - the cost feed (ticked by a timer subscription)
//! - the cut filter over the reference dataset (driven by sidebar input)

use dash_config::{DashConfig, FilterConfig};
use dash_core::{
    event::Message, state::AppState, FilterCriteria, ReferenceDataset, Result, StaticFilter,
};
use dash_feed::{LiveFeed, SnapshotReceiver};
use dash_theme::Theme;
use dash_widgets::{
    CostWidget, PriceHistogramWidget, RecentCostsWidget, ReferenceWidget, SidebarWidget,
    TimestampWidget, TrendWidget,
};
use iced::{
    widget::{column, container, row, scrollable, text},
    Element, Length, Size, Subscription, Task,
};
use tokio::sync::watch;
use tracing::{debug, info};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the dashboard window. Returns when the window is closed.
pub fn run(config: DashConfig, dataset: ReferenceDataset) -> iced::Result {
    let size = Size::new(config.window.width, config.window.height);

    iced::application(
        move || Dashboard::new(config.clone(), dataset.clone()),
        Dashboard::update,
        Dashboard::view,
    )
    .title(Dashboard::title)
    .theme(Dashboard::theme)
    .subscription(Dashboard::subscription)
    .window_size(size)
    .run()
}

/// Load the configured reference dataset, or the bundled sample.
pub fn load_dataset(cfg: &FilterConfig) -> Result<ReferenceDataset> {
    match &cfg.dataset {
        Some(path) => ReferenceDataset::from_path(path),
        None => {
            let dataset = ReferenceDataset::bundled()?;
            info!("Using bundled diamonds sample ({} rows)", dataset.len());
            Ok(dataset)
        }
    }
}

// ── State ─────────────────────────────────────────────────────────────────────

struct Dashboard {
    state:     AppState,
    config:    DashConfig,
    theme:     Theme,
    feed:      LiveFeed,
    filter:    StaticFilter,
    /// "Buffer updated" subscription; the only way `state.live` changes.
    snapshots: SnapshotReceiver,
    /// "Filter changed" subscription.
    criteria:  watch::Receiver<FilterCriteria>,
    // Header
    cost:      CostWidget,
    timestamp: TimestampWidget,
    // Body
    reference: ReferenceWidget,
    recent:    RecentCostsWidget,
    trend:     TrendWidget,
    histogram: PriceHistogramWidget,
    sidebar:   SidebarWidget,
}

impl Dashboard {
    fn new(config: DashConfig, dataset: ReferenceDataset) -> (Self, Task<Message>) {
        let theme  = Theme::from_config(&config.theme);
        let feed   = LiveFeed::from_config(&config.feed);
        let filter = StaticFilter::new(
            dataset,
            FilterCriteria::from_labels(&config.filter.default_cuts),
        );
        let state  = AppState::new(config.sidebar.bin_count, config.sidebar.carat);

        let mut dashboard = Self {
            state,
            theme,
            snapshots: feed.subscribe(),
            criteria:  filter.subscribe(),
            feed,
            filter,
            config,
            cost:      CostWidget::new(),
            timestamp: TimestampWidget::new(),
            reference: ReferenceWidget::new(),
            recent:    RecentCostsWidget::new(),
            trend:     TrendWidget::new(),
            histogram: PriceHistogramWidget::new(),
            sidebar:   SidebarWidget::new(),
        };

        // Populate the first frame instead of waiting a full interval.
        dashboard.tick();

        (dashboard, Task::none())
    }

    fn title(&self) -> String {
        self.config.window.title.clone()
    }

    fn theme(&self) -> iced::Theme {
        self.theme.to_iced(&self.config.window.title)
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => self.tick(),
            Message::CutToggled(cut, selected) => {
                self.filter.toggle(cut, selected);
                self.on_filter_changed();
            }
            Message::BinCountInput(raw) => self.state.set_bin_count_input(raw),
            Message::CaratChanged(carat) => self.state.carat = carat,
            Message::TabSelected(tab) => self.state.tab = tab,
        }
        Task::none()
    }

    fn tick(&mut self) {
        self.feed.produce_and_append();
        if self.snapshots.has_changed().unwrap_or(false) {
            self.state.live = self.snapshots.borrow_and_update().clone();
        }
    }

    /// Drains the "filter changed" notification. The view itself calls
    /// `filtered_view()` on every render, so this only reports the new size.
    fn on_filter_changed(&mut self) {
        if !self.criteria.has_changed().unwrap_or(false) {
            return;
        }
        let criteria = self.criteria.borrow_and_update().clone();
        debug!(
            ?criteria,
            rows = self.filter.filtered_view().len(),
            "Reference view recomputed"
        );
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let gap = self.theme.gap as f32;
        let criteria = self.filter.criteria();
        let filtered = self.filter.filtered_view();

        let sidebar = self.sidebar.view(&self.state, &criteria, &self.theme);

        let header = row![
            self.cost.view(&self.state, &self.theme),
            self.timestamp.view(&self.state, &self.theme),
        ]
        .spacing(gap);

        let tables = row![
            self.reference.view(&self.state, &filtered, &self.theme),
            self.recent.view(&self.state, &self.theme),
        ]
        .spacing(gap);

        let charts = row![
            self.trend.view(&self.state, &self.theme),
            self.histogram.view(&self.state, &filtered, &self.theme),
        ]
        .spacing(gap);

        let main = column![
            text("Current Cost")
                .size(self.theme.font_size + 10.0)
                .color(self.theme.accent.to_iced()),
            header,
            tables,
            charts,
        ]
        .spacing(gap)
        .padding(self.theme.padding);

        container(row![sidebar, scrollable(main).width(Length::Fill)].spacing(gap))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(gap)
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        iced::time::every(self.config.feed.interval()).map(|_| Message::Tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_core::{state::ReferenceTab, Cut};

    fn dashboard(capacity: usize, cuts: &[&str]) -> Dashboard {
        let mut config = DashConfig::default();
        config.feed.capacity = capacity;
        config.feed.seed = Some(9);
        config.filter.default_cuts = cuts.iter().map(|c| c.to_string()).collect();
        let dataset = ReferenceDataset::bundled().unwrap();
        Dashboard::new(config, dataset).0
    }

    #[test]
    fn first_frame_has_one_reading() {
        let dash = dashboard(5, &["Very Good"]);
        let live = dash.state.live.as_ref().unwrap();
        assert_eq!(live.readings.len(), 1);
    }

    #[test]
    fn ticks_fill_then_roll_the_buffer() {
        let mut dash = dashboard(5, &["Very Good"]);
        for _ in 0..6 {
            let _ = dash.update(Message::Tick);
        }
        let live = dash.state.live.as_ref().unwrap();
        assert_eq!(live.readings.len(), 5);
        assert_eq!(dash.feed.ticks(), 7);
        assert_eq!(live.readings.last(), Some(&live.latest));
    }

    #[test]
    fn toggling_cuts_changes_the_view() {
        let mut dash = dashboard(5, &[]);
        assert!(dash.filter.filtered_view().is_empty());

        let _ = dash.update(Message::CutToggled(Cut::Ideal, true));
        let view = dash.filter.filtered_view();
        assert!(!view.is_empty());
        assert!(view.iter().all(|d| d.cut == Cut::Ideal));
    }

    #[test]
    fn sidebar_inputs_update_state() {
        let mut dash = dashboard(5, &["Very Good"]);
        let _ = dash.update(Message::BinCountInput("20".to_string()));
        let _ = dash.update(Message::CaratChanged(0.5));
        let _ = dash.update(Message::TabSelected(ReferenceTab::Grid));
        assert_eq!(dash.state.bin_count, 20);
        assert_eq!(dash.state.carat, 0.5);
        assert_eq!(dash.state.tab, ReferenceTab::Grid);
    }
}
