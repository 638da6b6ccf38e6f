use crate::card::card;
use dash_core::{state::AppState, Message};
use dash_theme::Theme;
use iced::{
    widget::{column, text},
    Element,
};

/// "Current Diamond Cost" value box.
///
/// Shows the cost of the reading produced by the last tick and where it
/// sits relative to the mean of the buffered window.
#[derive(Debug, Default)]
pub struct CostWidget;

impl CostWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let body: Element<'a, Message> = match &state.live {
            Some(snap) => {
                let note = snap
                    .mean_cost()
                    .map(|mean| relative_to_mean(snap.latest.cost(), mean))
                    .unwrap_or("");
                column![
                    text(format!("{} $", snap.latest.cost())).size(theme.font_size * 2.0),
                    text(note).size(theme.font_size - 1.0),
                ]
                .into()
            }
            None => text("Waiting for the first reading…").into(),
        };
        card("Current Diamond Cost", body, theme)
    }
}

/// "Current Date and Time" value box: timestamp of the latest reading.
#[derive(Debug, Default)]
pub struct TimestampWidget;

impl TimestampWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let label = state
            .live
            .as_ref()
            .map(|snap| snap.latest.timestamp().to_string())
            .unwrap_or_else(|| "—".to_string());
        card(
            "Current Date and Time",
            text(label).size(theme.font_size * 1.6),
            theme,
        )
    }
}

fn relative_to_mean(cost: f64, mean: f64) -> &'static str {
    if cost > mean {
        "Higher than average costs"
    } else if cost < mean {
        "Lower than average costs"
    } else {
        "At average cost"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_against_window_mean() {
        assert_eq!(relative_to_mean(110.0, 105.0), "Higher than average costs");
        assert_eq!(relative_to_mean(101.0, 105.0), "Lower than average costs");
        assert_eq!(relative_to_mean(105.0, 105.0), "At average cost");
    }
}
