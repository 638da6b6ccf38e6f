use crate::card::{card, cell};
use dash_core::{state::AppState, Message, ReadingTable};
use dash_theme::Theme;
use iced::{
    widget::{column, row, rule, text, Column},
    Element,
};

const COST_WIDTH: f32 = 90.0;
const TIMESTAMP_WIDTH: f32 = 180.0;

/// "Most Recent Diamond Costs": the live buffer as a grid, oldest first.
#[derive(Debug, Default)]
pub struct RecentCostsWidget;

impl RecentCostsWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let body: Element<'a, Message> = match &state.live {
            Some(snap) => grid(&snap.table, theme),
            None => text("No readings yet").into(),
        };
        card("Most Recent Diamond Costs", body, theme)
    }
}

fn grid<'a>(table: &ReadingTable, theme: &'a Theme) -> Element<'a, Message> {
    let [cost_header, ts_header] = ReadingTable::COLUMNS;
    let header = row![
        cell(cost_header, COST_WIDTH, theme),
        cell(ts_header, TIMESTAMP_WIDTH, theme),
    ];

    let rows = table.rows().map(|[cost, timestamp]| {
        row![
            cell(cost, COST_WIDTH, theme),
            cell(timestamp, TIMESTAMP_WIDTH, theme),
        ]
        .into()
    });

    column![header, rule::horizontal(1.0f32), Column::with_children(rows).spacing(2)]
        .spacing(4)
        .into()
}
