//! A coefficient plotted against the iteration number, drawn progressively.

use itertools::Itertools;
use maud::{html, Markup, Render};

use crate::render::chart::{px, Axis, Chart};
use crate::render::subsample;

const ANIMATION_DURATION: &str = "5s";
const MAX_POINTS: usize = 2000;

pub struct Evolution<'a> {
    /// Subscripted coefficient name, such as `₀`.
    pub index: &'a str,

    /// Value after each iteration, starting with the initial one.
    pub values: &'a [f64],
}

impl<'a> Render for Evolution<'a> {
    fn render(&self) -> Markup {
        let n_iterations = self.values.len().saturating_sub(1) as f64;
        let x = Axis {
            min: 0.0,
            max: n_iterations.max(1.0),
        };
        let y = Axis::spanning(self.values);
        let title = format!("θ{} evolution", self.index);
        let chart = Chart {
            title: &title,
            x_label: "Number of iterations",
            y_label: "Value",
            x,
            y,
        };

        let points = subsample(self.values, MAX_POINTS)
            .filter(|(_, value)| value.is_finite())
            .map(|(iteration, value)| {
                format!("{},{}", px(x.to_x(iteration as f64)), px(y.to_y(*value)))
            })
            .join(" ");

        chart.render_with(html! {
            polyline points=(points) fill="none" stroke="green" stroke-width="2" pathLength="1" stroke-dasharray="1" stroke-dashoffset="0" clip-path="url(#plot)" {
                animate attributeName="stroke-dashoffset" from="1" to="0" dur=(ANIMATION_DURATION) fill="freeze" {}
            }
        })
    }
}
