use crate::Theme;
use iced::widget::container;
use iced::{Background, Border};

/// Card surface used for value boxes, tables and charts.
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.card.to_iced())),
        text_color: Some(theme.foreground.to_iced()),
        border: Border {
            radius: theme.border_radius.into(),
            width:  1.0,
            color:  theme.accent.with_alpha(0.35).to_iced(),
        },
        ..Default::default()
    }
}

/// Sidebar panel, slightly darker than the cards.
pub fn sidebar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.card.with_alpha(0.6).to_iced())),
        text_color: Some(theme.foreground.to_iced()),
        border: Border {
            radius: theme.border_radius.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
