use crate::card::card;
use dash_core::{state::AppState, FilteredView, Histogram, Message};
use dash_theme::Theme;
use iced::{
    mouse,
    widget::{
        canvas::{self, Frame, Path},
        column, text,
    },
    Color, Element, Length, Pixels, Point, Rectangle, Renderer, Size,
};

/// Price distribution of the filtered diamonds up to the selected carat.
///
/// Consumes the sidebar's bin count and carat inputs.
#[derive(Debug, Default)]
pub struct PriceHistogramWidget;

impl PriceHistogramWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(
        &'a self,
        state: &'a AppState,
        view: &FilteredView<'_>,
        theme: &'a Theme,
    ) -> Element<'a, Message> {
        let histogram = price_histogram(view, state.bin_count as usize, state.carat);
        let caption = format!(
            "{} diamonds ≤ {:.2} ct in {} bins",
            histogram.total(),
            state.carat,
            histogram.bins().len()
        );

        let body: Element<'a, Message> = if histogram.is_empty() {
            text("No diamonds match the current selection").into()
        } else {
            column![
                canvas::Canvas::new(Bars {
                    histogram,
                    fill: theme.accent.with_alpha(0.8).to_iced(),
                    label: theme.foreground.with_alpha(0.7).to_iced(),
                })
                .width(Length::Fill)
                .height(Length::Fixed(200.0)),
                text(caption).size(theme.font_size - 2.0),
            ]
            .spacing(4)
            .into()
        };
        card("Price Distribution", body, theme)
    }
}

/// Histogram of prices for rows at or below `max_carat`.
pub fn price_histogram(view: &FilteredView<'_>, bin_count: usize, max_carat: f32) -> Histogram {
    Histogram::from_values(
        view.iter()
            .filter(|d| d.carat <= f64::from(max_carat))
            .map(|d| f64::from(d.price)),
        bin_count,
    )
}

#[derive(Debug, Clone)]
struct Bars {
    histogram: Histogram,
    fill:      Color,
    label:     Color,
}

impl canvas::Program<Message> for Bars {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let bins = self.histogram.bins();
        let peak = self.histogram.peak().max(1) as f32;
        let label_h = 16.0;
        let plot_h = (bounds.height - label_h).max(1.0);
        let bar_w = bounds.width / bins.len() as f32;

        for (i, bin) in bins.iter().enumerate() {
            let h = bin.count as f32 / peak * plot_h;
            let top_left = Point::new(i as f32 * bar_w, plot_h - h);
            // A pixel of spacing keeps adjacent bars apart when there are few.
            let width = if bar_w > 3.0 { bar_w - 1.0 } else { bar_w };
            frame.fill(&Path::rectangle(top_left, Size::new(width, h)), self.fill);
        }

        if let (Some(first), Some(last)) = (bins.first(), bins.last()) {
            for (value, x) in [(first.lower, 0.0), (last.upper, bounds.width - 48.0)] {
                frame.fill_text(canvas::Text {
                    content: format!("${value:.0}"),
                    position: Point::new(x, plot_h + 2.0),
                    color: self.label,
                    size: Pixels(11.0),
                    ..canvas::Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }
}
