//! Shared SVG frame: title, axes, ticks, and the value-to-pixel projection.

use itertools::{Itertools, MinMaxResult};
use maud::{html, Markup};

pub const WIDTH: f64 = 960.0;
pub const HEIGHT: f64 = 720.0;
const MARGIN: f64 = 72.0;
const N_TICKS: usize = 5;

/// Value range of one axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
}

impl Axis {
    /// Spans the finite values, widened when they are all equal.
    pub fn spanning<'a, I: IntoIterator<Item = &'a f64>>(values: I) -> Self {
        match values.into_iter().filter(|value| value.is_finite()).minmax() {
            MinMaxResult::MinMax(min, max) if min < max => Self {
                min: *min,
                max: *max,
            },
            MinMaxResult::MinMax(value, _) | MinMaxResult::OneElement(value) => Self {
                min: value - 1.0,
                max: value + 1.0,
            },
            MinMaxResult::NoElements => Self { min: 0.0, max: 1.0 },
        }
    }

    #[must_use]
    fn ratio(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    #[must_use]
    pub fn to_x(&self, value: f64) -> f64 {
        MARGIN + self.ratio(value) * (WIDTH - 2.0 * MARGIN)
    }

    #[must_use]
    pub fn to_y(&self, value: f64) -> f64 {
        HEIGHT - MARGIN - self.ratio(value) * (HEIGHT - 2.0 * MARGIN)
    }

    fn ticks(&self) -> impl Iterator<Item = f64> + '_ {
        (0..N_TICKS).map(|i| self.min + (self.max - self.min) * i as f64 / (N_TICKS - 1) as f64)
    }
}

pub struct Chart<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub x: Axis,
    pub y: Axis,
}

impl<'a> Chart<'a> {
    /// Wraps the plot content into a standalone SVG document.
    /// The content is clipped by `url(#plot)` when it references it.
    pub fn render_with(&self, content: Markup) -> Markup {
        let (left, right) = (MARGIN, WIDTH - MARGIN);
        let (top, bottom) = (MARGIN, HEIGHT - MARGIN);
        let (plot_width, plot_height) = (right - left, bottom - top);
        let (center_x, center_y) = (WIDTH / 2.0, HEIGHT / 2.0);
        let (title_y, x_label_y) = (MARGIN / 2.0, HEIGHT - 16.0);
        let (x_tick_y, y_tick_x) = (bottom + 20.0, left - 8.0);
        html! {
            svg xmlns="http://www.w3.org/2000/svg" width=(WIDTH) height=(HEIGHT) viewBox=(format!("0 0 {} {}", WIDTH, HEIGHT)) font-family="sans-serif" font-size="14" {
                defs {
                    clipPath id="plot" {
                        rect x=(left) y=(top) width=(plot_width) height=(plot_height) {}
                    }
                }
                rect width="100%" height="100%" fill="white" {}
                text x=(center_x) y=(title_y) text-anchor="middle" font-size="18" { (self.title) }
                text x=(center_x) y=(x_label_y) text-anchor="middle" { (self.x_label) }
                text x="20" y=(center_y) text-anchor="middle" transform=(format!("rotate(-90 20 {})", center_y)) { (self.y_label) }
                g stroke="black" {
                    line x1=(left) y1=(bottom) x2=(right) y2=(bottom) {}
                    line x1=(left) y1=(top) x2=(left) y2=(bottom) {}
                }
                @for tick in self.x.ticks() {
                    text x=(px(self.x.to_x(tick))) y=(x_tick_y) text-anchor="middle" { (format_tick(tick)) }
                }
                @for tick in self.y.ticks() {
                    text x=(y_tick_x) y=(px(self.y.to_y(tick))) text-anchor="end" dominant-baseline="middle" { (format_tick(tick)) }
                }
                (content)
            }
        }
    }
}

/// Pixel coordinate with a fixed precision.
pub fn px(value: f64) -> String {
    format!("{:.2}", value)
}

fn format_tick(value: f64) -> String {
    if value.abs() >= 100.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.3}", value)
    }
}
