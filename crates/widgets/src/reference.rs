use crate::card::{card, cell};
use dash_core::{
    state::{AppState, ReferenceTab},
    Diamond, FilteredView, Message, ReferenceDataset,
};
use dash_theme::Theme;
use iced::{
    widget::{button, column, row, rule, scrollable, text, Column, Row},
    Element, Length,
};

/// Rows rendered per tab; the rest are counted but not drawn.
const MAX_VISIBLE_ROWS: usize = 200;
const CELL_WIDTH: f32 = 72.0;

/// The two reference tabs over the cut-filtered diamonds table.
#[derive(Debug, Default)]
pub struct ReferenceWidget;

impl ReferenceWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(
        &'a self,
        state: &'a AppState,
        view: &FilteredView<'_>,
        theme: &'a Theme,
    ) -> Element<'a, Message> {
        let tabs = row![
            tab_btn(ReferenceTab::Table, state.tab),
            tab_btn(ReferenceTab::Grid, state.tab),
        ]
        .spacing(4);

        let columns = visible_columns(state.tab);
        let header = Row::with_children(columns.iter().map(|&c| cell(c, CELL_WIDTH, theme)));

        let rows = view.iter().take(MAX_VISIBLE_ROWS).map(|d| {
            Row::with_children(columns.iter().map(|&c| cell(field(d, c), CELL_WIDTH, theme))).into()
        });

        let status = text(summary(view.len()))
            .size(theme.font_size - 2.0)
            .color(theme.foreground.with_alpha(0.7).to_iced());

        let body = column![
            tabs,
            header,
            rule::horizontal(1.0f32),
            scrollable(Column::with_children(rows).spacing(2)).height(Length::Fixed(280.0)),
            status,
        ]
        .spacing(6);

        card(state.tab.label(), body, theme)
    }
}

fn tab_btn(target: ReferenceTab, current: ReferenceTab) -> Element<'static, Message> {
    let btn = button(text(target.label()).size(13.0)).on_press(Message::TabSelected(target));
    if target == current {
        btn.style(button::primary).into()
    } else {
        btn.style(button::secondary).into()
    }
}

/// The compact table shows the columns most people filter by; the grid shows all.
fn visible_columns(tab: ReferenceTab) -> &'static [&'static str] {
    match tab {
        ReferenceTab::Table => &["carat", "cut", "color", "clarity", "price"],
        ReferenceTab::Grid  => &ReferenceDataset::COLUMNS,
    }
}

fn field(d: &Diamond, column: &str) -> String {
    match column {
        "carat"   => format!("{:.2}", d.carat),
        "cut"     => d.cut.to_string(),
        "color"   => d.color.clone(),
        "clarity" => d.clarity.clone(),
        "depth"   => format!("{:.1}", d.depth),
        "table"   => format!("{:.0}", d.table),
        "price"   => d.price.to_string(),
        "x"       => format!("{:.2}", d.x),
        "y"       => format!("{:.2}", d.y),
        "z"       => format!("{:.2}", d.z),
        _         => String::new(),
    }
}

fn summary(total: usize) -> String {
    if total > MAX_VISIBLE_ROWS {
        format!("showing {MAX_VISIBLE_ROWS} of {total} rows")
    } else {
        format!("{total} rows")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_core::Cut;

    #[test]
    fn every_column_has_a_value() {
        let d = Diamond {
            carat:   0.23,
            cut:     Cut::VeryGood,
            color:   "E".to_string(),
            clarity: "SI2".to_string(),
            depth:   61.5,
            table:   55.0,
            price:   326,
            x:       3.95,
            y:       3.98,
            z:       2.43,
        };
        for column in ReferenceDataset::COLUMNS {
            assert!(!field(&d, column).is_empty(), "{column}");
        }
        assert_eq!(field(&d, "cut"), "Very Good");
        assert_eq!(field(&d, "carat"), "0.23");
    }

    #[test]
    fn summary_mentions_truncation() {
        assert_eq!(summary(3), "3 rows");
        assert_eq!(summary(53_940), "showing 200 of 53940 rows");
    }
}
