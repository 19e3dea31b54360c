//! Scatter of the dataset with the fitted line, static or animated along the trajectory.

use itertools::Itertools;
use maud::{html, Markup, Render};

use crate::dataset::Dataset;
use crate::render::chart::{px, Axis, Chart};
use crate::render::subsample;
use crate::trainer::theta::Theta;
use crate::trainer::trajectory::Trajectory;

const ANIMATION_DURATION: &str = "5s";
const MAX_FRAMES: usize = 200;

pub struct Graph<'a> {
    pub dataset: &'a Dataset,
    pub trajectory: &'a Trajectory,
    pub animated: bool,
}

impl<'a> Graph<'a> {
    fn line_ends(&self, x: &Axis, y: &Axis, theta: &Theta) -> Option<(f64, f64)> {
        let (y1, y2) = (theta.estimate(x.min), theta.estimate(x.max));
        (y1.is_finite() && y2.is_finite()).then(|| (y.to_y(y1), y.to_y(y2)))
    }
}

impl<'a> Render for Graph<'a> {
    fn render(&self) -> Markup {
        let x = Axis::spanning(&self.dataset.mileage);
        let y = Axis::spanning(&self.dataset.price);
        let chart = Chart {
            title: "The dependence of the price of the car on the mileage.",
            x_label: "Mileage, km",
            y_label: "Price",
            x,
            y,
        };

        let last = self.trajectory.last();
        let frames: Vec<(f64, f64)> = subsample(self.trajectory.thetas(), MAX_FRAMES)
            .filter_map(|(_, theta)| self.line_ends(&x, &y, theta))
            .collect();

        chart.render_with(html! {
            g fill="steelblue" {
                @for (mileage, price) in self.dataset.mileage.iter().zip(&self.dataset.price) {
                    circle cx=(px(x.to_x(*mileage))) cy=(px(y.to_y(*price))) r="4" {}
                }
            }
            @if let Some((y1, y2)) = self.line_ends(&x, &y, &last) {
                line x1=(px(x.to_x(x.min))) y1=(px(y1)) x2=(px(x.to_x(x.max))) y2=(px(y2)) stroke="red" stroke-width="2" clip-path="url(#plot)" {
                    @if self.animated {
                        animate attributeName="y1" dur=(ANIMATION_DURATION) fill="freeze" values=(frames.iter().map(|(y1, _)| px(*y1)).join(";")) {}
                        animate attributeName="y2" dur=(ANIMATION_DURATION) fill="freeze" values=(frames.iter().map(|(_, y2)| px(*y2)).join(";")) {}
                    }
                }
            }
            text x=(px(x.to_x(x.min))) y=(px(y.to_y(y.min) - 12.0)) fill="red" {
                (format!("y = {:.2} x + {:.2}", last.theta1, last.theta0))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset {
            mileage: vec![0.0, 100000.0],
            price: vec![10000.0, 5000.0],
        }
    }

    #[test]
    fn static_graph_ok() {
        let dataset = dataset();
        let trajectory = Trajectory::new(Theta::default(), [Theta::new(10000.0, -0.05)]);
        let markup = Graph {
            dataset: &dataset,
            trajectory: &trajectory,
            animated: false,
        }
        .render()
        .into_string();
        assert_eq!(markup.matches("<circle").count(), 2);
        assert!(markup.contains("y = -0.05 x + 10000.00"));
        assert!(markup.contains("<line x1=\"72.00\" y1=\"72.00\" x2=\"888.00\" y2=\"648.00\""));
        assert!(!markup.contains("<animate"));
    }

    #[test]
    fn animated_graph_ok() {
        let dataset = dataset();
        let trajectory = Trajectory::new(
            Theta::default(),
            (1..=1000).map(|i| Theta::new(10.0 * f64::from(i), -0.00005 * f64::from(i))),
        );
        let markup = Graph {
            dataset: &dataset,
            trajectory: &trajectory,
            animated: true,
        }
        .render()
        .into_string();
        assert_eq!(markup.matches("<animate ").count(), 2);
        let values = markup.split("values=\"").nth(1).unwrap().split('"').next().unwrap();
        assert!(values.split(';').count() <= MAX_FRAMES + 1);
        assert!(values.ends_with("72.00"));
    }

    #[test]
    fn diverged_line_is_skipped() {
        let dataset = dataset();
        let trajectory = Trajectory::new(Theta::default(), [Theta::new(f64::NAN, f64::INFINITY)]);
        let markup = Graph {
            dataset: &dataset,
            trajectory: &trajectory,
            animated: true,
        }
        .render()
        .into_string();
        assert!(!markup.contains("stroke=\"red\""));
    }
}
