use dash_core::Message;
use dash_theme::{style, Theme};
use iced::{
    widget::{column, container, text},
    Element, Length,
};

/// Titled card shared by every dashboard panel.
pub fn card<'a>(
    title: &'a str,
    body: impl Into<Element<'a, Message>>,
    theme: &'a Theme,
) -> Element<'a, Message> {
    let header = text(title)
        .size(theme.font_size + 2.0)
        .color(theme.accent.to_iced());

    container(column![header, body.into()].spacing(theme.gap as f32 / 2.0))
        .padding(theme.padding)
        .width(Length::Fill)
        .style(move |_: &iced::Theme| style::card(theme))
        .into()
}

/// One fixed-width table cell.
pub fn cell<'a>(value: impl Into<String>, width: f32, theme: &Theme) -> Element<'a, Message> {
    text(value.into())
        .size(theme.font_size - 1.0)
        .width(Length::Fixed(width))
        .into()
}
