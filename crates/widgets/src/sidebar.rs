use dash_core::{
    state::{AppState, BIN_COUNT_RANGE, CARAT_RANGE},
    Cut, FilterCriteria, Message,
};
use dash_theme::{style, Theme};
use iced::{
    widget::{checkbox, column, container, row, rule, slider, text, text_input, Column},
    Element, Length,
};

/// Reference links shown at the bottom of the sidebar.
const LINKS: &[(&str, &str)] = &[
    ("Seaborn's Diamond Dataset", "https://github.com/mwaskom/seaborn-data/blob/master/diamonds.csv"),
    ("Iced", "https://iced.rs"),
];

/// Sidebar with the filter inputs.
#[derive(Debug, Default)]
pub struct SidebarWidget;

impl SidebarWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(
        &'a self,
        state: &'a AppState,
        criteria: &FilterCriteria,
        theme: &'a Theme,
    ) -> Element<'a, Message> {
        let small = theme.font_size - 2.0;

        let cuts = Column::with_children(Cut::ALL.into_iter().map(|cut| {
            checkbox(criteria.contains(cut))
                .label(cut.label())
                .on_toggle(move |selected| Message::CutToggled(cut, selected))
                .into()
        }))
        .spacing(4);

        let bins = text_input("1", &state.bin_count_raw)
            .on_input(Message::BinCountInput)
            .width(Length::Fixed(120.0));

        let carat = row![
            slider(CARAT_RANGE.0..=CARAT_RANGE.1, state.carat, Message::CaratChanged).step(0.05f32),
            text(format!("{:.2}", state.carat)).width(Length::Fixed(40.0)),
        ]
        .spacing(8);

        let links = Column::with_children(LINKS.iter().map(|&(name, url)| {
            column![text(name).size(small), text(url).size(small - 1.0).color(theme.accent.to_iced())]
                .into()
        }))
        .spacing(6);

        let body = column![
            text("Facts About Diamonds").size(theme.font_size + 6.0).color(theme.accent.to_iced()),
            text("A demonstration of real-time costs for sourced diamonds.").size(small),
            rule::horizontal(1.0f32),
            text(format!("Bin count ({}–{})", BIN_COUNT_RANGE.0, BIN_COUNT_RANGE.1)).size(small),
            bins,
            text("Cut").size(small),
            cuts,
            text("Carat").size(small),
            carat,
            rule::horizontal(1.0f32),
            text("Helpful Links:").size(small),
            links,
        ]
        .spacing(theme.gap as f32 / 1.5);

        container(body)
            .padding(theme.padding)
            .width(Length::Fixed(280.0))
            .height(Length::Fill)
            .style(move |_: &iced::Theme| style::sidebar(theme))
            .into()
    }
}
