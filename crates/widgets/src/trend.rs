//! "Chart with Current Trend": scatter of the buffered costs by arrival
//! index with the least-squares line drawn through them.

use crate::card::card;
use dash_core::{state::AppState, LinearFit, LiveSnapshot, Message};
use dash_theme::Theme;
use iced::{
    mouse,
    widget::{
        canvas::{self, Frame, Path, Stroke},
        text,
    },
    Color, Element, Length, Pixels, Point, Rectangle, Renderer,
};

const MARGIN_LEFT: f32 = 56.0;
const MARGIN_BOTTOM: f32 = 36.0;
const MARGIN_TOP: f32 = 12.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARKER_RADIUS: f32 = 5.0;

#[derive(Debug, Default)]
pub struct TrendWidget;

impl TrendWidget {
    pub fn new() -> Self {
        Self
    }

    /// Empty buffer → placeholder, no chart and no regression.
    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let body: Element<'a, Message> = match state.live.as_deref().and_then(|s| TrendPlot::new(s, theme)) {
            Some(plot) => canvas::Canvas::new(plot)
                .width(Length::Fill)
                .height(Length::Fixed(260.0))
                .into(),
            None => text("Chart appears after the first reading").into(),
        };
        card("Chart with Current Trend", body, theme)
    }
}

/// Owned plot data; rebuilt from each snapshot.
#[derive(Debug, Clone)]
struct TrendPlot {
    costs:      Vec<f64>,
    timestamps: Vec<String>,
    fit:        LinearFit,
    marker:     Color,
    line:       Color,
    axis:       Color,
}

impl TrendPlot {
    fn new(snapshot: &LiveSnapshot, theme: &Theme) -> Option<Self> {
        let fit = snapshot.trend()?;
        Some(Self {
            costs:      snapshot.table.cost_column().to_vec(),
            timestamps: snapshot.table.timestamp_column().to_vec(),
            fit,
            marker:     theme.series.to_iced(),
            line:       theme.accent.to_iced(),
            axis:       theme.foreground.with_alpha(0.6).to_iced(),
        })
    }

    /// Y range covering both the points and the fitted line, padded.
    fn y_range(&self) -> (f64, f64) {
        let last = self.costs.len().saturating_sub(1) as f64;
        let ends = [self.fit.predict(0.0), self.fit.predict(last)];
        let (lo, hi) = self
            .costs
            .iter()
            .chain(ends.iter())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let pad = ((hi - lo) * 0.1).max(0.5);
        (lo - pad, hi + pad)
    }
}

impl canvas::Program<Message> for TrendPlot {
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

        let plot_w = (bounds.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let plot_h = (bounds.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        let (y_lo, y_hi) = self.y_range();
        let n = self.costs.len();

        let to_screen = |x: f64, y: f64| -> Point {
            let fx = if n > 1 { x / (n - 1) as f64 } else { 0.5 };
            let fy = (y - y_lo) / (y_hi - y_lo);
            Point::new(
                MARGIN_LEFT + fx as f32 * plot_w,
                MARGIN_TOP + (1.0 - fy as f32) * plot_h,
            )
        };

        // Axes.
        let origin = Point::new(MARGIN_LEFT, MARGIN_TOP + plot_h);
        let axis = Stroke::default().with_color(self.axis).with_width(1.0);
        frame.stroke(&Path::line(origin, Point::new(MARGIN_LEFT + plot_w, origin.y)), axis);
        frame.stroke(&Path::line(origin, Point::new(MARGIN_LEFT, MARGIN_TOP)), axis);

        for (value, y) in [(y_hi, MARGIN_TOP), (y_lo, origin.y)] {
            frame.fill_text(canvas::Text {
                content: format!("{value:.2}"),
                position: Point::new(4.0, y - 6.0),
                color: self.axis,
                size: Pixels(11.0),
                ..canvas::Text::default()
            });
        }

        // Regression line across the whole index range.
        let last = n.saturating_sub(1) as f64;
        let line = Path::line(
            to_screen(0.0, self.fit.predict(0.0)),
            to_screen(last, self.fit.predict(last)),
        );
        frame.stroke(&line, Stroke::default().with_color(self.line).with_width(2.0));

        // Points, labelled with their capture time.
        for (i, (cost, ts)) in self.costs.iter().zip(&self.timestamps).enumerate() {
            let p = to_screen(i as f64, *cost);
            frame.fill(&Path::circle(p, MARKER_RADIUS), self.marker);
            frame.fill_text(canvas::Text {
                content: short_time(ts).to_string(),
                position: Point::new(p.x - 22.0, origin.y + 8.0),
                color: self.axis,
                size: Pixels(10.0),
                ..canvas::Text::default()
            });
        }

        frame.fill_text(canvas::Text {
            content: format!("slope {:+.3} $/tick", self.fit.slope),
            position: Point::new(MARGIN_LEFT + 8.0, MARGIN_TOP),
            color: self.line,
            size: Pixels(12.0),
            ..canvas::Text::default()
        });

        vec![frame.into_geometry()]
    }
}

/// Time-of-day part of a `date time` timestamp, or the whole string.
fn short_time(timestamp: &str) -> &str {
    timestamp
        .rsplit_once(' ')
        .map(|(_, time)| time)
        .unwrap_or(timestamp)
}
