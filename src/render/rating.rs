use anyhow::Result;
use palette::Srgb;
use plotters::prelude::*;

use super::canvas::Area;
use super::fonts::{label_font, title_font};
use super::Artifact;
use crate::color::{rating_color, to_rgb, AXIS_GRAY, LIGHT_GRAY};
use crate::data::model::Dataset;
use crate::data::summary::group_stats;
use crate::data::{CUSTOMER_RATING, MODE_OF_SHIPMENT};

pub const BACKGROUND_HEIGHT: f64 = 0.9;
pub const BACKGROUND_OPACITY: f64 = 0.8;
pub const HIGHLIGHT_HEIGHT: f64 = 0.5;
pub const HIGHLIGHT_OPACITY: f64 = 1.0;

/// Rating range of one shipment mode: a light bar over `[min, max]` with a
/// narrower bar over `[min, mean]` on top.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingBar {
    pub label: String,
    pub min: f64,
    pub mean: f64,
    pub max: f64,
    pub highlight_color: Srgb<u8>,
}

impl RatingBar {
    pub fn background_span(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn highlight_span(&self) -> (f64, f64) {
        (self.min, self.mean)
    }
}

#[derive(Debug, Clone)]
pub struct RatingChart {
    /// One bar per shipment mode, ordered by mode name, bottom to top.
    pub bars: Vec<RatingBar>,
}

impl RatingChart {
    pub fn from_dataset(dataset: &Dataset) -> Result<Self> {
        let modes = dataset.text_column(MODE_OF_SHIPMENT)?;
        let ratings = dataset.numeric_column(CUSTOMER_RATING)?;

        let bars = group_stats(&modes, &ratings)
            .into_iter()
            .map(|g| RatingBar {
                highlight_color: rating_color(g.mean),
                label: g.label,
                min: g.min,
                mean: g.mean,
                max: g.max,
            })
            .collect();
        Ok(Self { bars })
    }

    fn x_range(&self) -> (f64, f64) {
        let lo = self.bars.iter().map(|b| b.min).fold(f64::INFINITY, f64::min);
        let hi = self.bars.iter().map(|b| b.max).fold(f64::NEG_INFINITY, f64::max);
        if lo.is_finite() && hi.is_finite() {
            (lo.floor() - 0.5, hi.ceil() + 0.5)
        } else {
            (0.5, 5.5)
        }
    }

    pub fn draw(&self, area: &Area<'_>, text: bool) -> Result<()> {
        let n = self.bars.len().max(1);
        let (x_lo, x_hi) = self.x_range();

        let mut builder = ChartBuilder::on(area);
        builder.margin(15);
        if text {
            builder
                .caption(Artifact::AverageCustomerRating.title(), title_font())
                .x_label_area_size(30)
                .y_label_area_size(70);
        }
        let mut chart = builder.build_cartesian_2d(x_lo..x_hi, -0.5..n as f64 - 0.5)?;

        if text {
            let row_label = |y: &f64| {
                let i = y.round();
                if (y - i).abs() < 1e-9 && i >= 0.0 {
                    self.bars
                        .get(i as usize)
                        .map(|b| b.label.clone())
                        .unwrap_or_default()
                } else {
                    String::new()
                }
            };
            chart
                .configure_mesh()
                .disable_mesh()
                .y_labels(n)
                .y_label_formatter(&row_label)
                .axis_style(to_rgb(AXIS_GRAY).stroke_width(1))
                .label_style(label_font())
                .draw()?;
        }

        let background = to_rgb(LIGHT_GRAY).mix(BACKGROUND_OPACITY).filled();
        chart.draw_series(self.bars.iter().enumerate().map(|(i, bar)| {
            let (from, to) = bar.background_span();
            let y = i as f64;
            Rectangle::new(
                [(from, y - BACKGROUND_HEIGHT / 2.0), (to, y + BACKGROUND_HEIGHT / 2.0)],
                background,
            )
        }))?;

        chart.draw_series(self.bars.iter().enumerate().map(|(i, bar)| {
            let (from, to) = bar.highlight_span();
            let y = i as f64;
            Rectangle::new(
                [(from, y - HIGHLIGHT_HEIGHT / 2.0), (to, y + HIGHLIGHT_HEIGHT / 2.0)],
                to_rgb(bar.highlight_color).mix(HIGHLIGHT_OPACITY).filled(),
            )
        }))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{TAB_BLUE, TAB_ORANGE};
    use crate::data::model::{CellValue, Record};

    fn shipments(rows: &[(&str, i64)]) -> Dataset {
        Dataset::from_records(
            rows.iter()
                .map(|(mode, rating)| {
                    Record::from_iter([
                        (MODE_OF_SHIPMENT, CellValue::String(mode.to_string())),
                        (CUSTOMER_RATING, CellValue::Integer(*rating)),
                    ])
                })
                .collect(),
        )
    }

    #[test]
    fn mean_on_threshold_is_high() {
        let chart =
            RatingChart::from_dataset(&shipments(&[("Ship", 1), ("Ship", 3), ("Ship", 5)])).unwrap();
        let bar = &chart.bars[0];
        assert_eq!(bar.background_span(), (1.0, 5.0));
        assert_eq!(bar.highlight_span(), (1.0, 3.0));
        assert_eq!(bar.highlight_color, TAB_BLUE);
    }

    #[test]
    fn spans_and_colours_per_group() {
        let chart = RatingChart::from_dataset(&shipments(&[
            ("Road", 1),
            ("Flight", 4),
            ("Road", 2),
            ("Flight", 5),
            ("Road", 4),
        ]))
        .unwrap();

        let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Flight", "Road"]);

        let flight = &chart.bars[0];
        assert_eq!(flight.background_span(), (4.0, 5.0));
        assert_eq!(flight.highlight_span(), (4.0, 4.5));
        assert_eq!(flight.highlight_color, TAB_BLUE);

        let road = &chart.bars[1];
        assert_eq!(road.background_span(), (1.0, 4.0));
        assert!((road.mean - 7.0 / 3.0).abs() < 1e-12);
        assert_eq!(road.highlight_color, TAB_ORANGE);
    }

    #[test]
    fn non_numeric_rating_fails() {
        let ds = Dataset::from_records(vec![Record::from_iter([
            (MODE_OF_SHIPMENT, CellValue::String("Ship".into())),
            (CUSTOMER_RATING, CellValue::String("great".into())),
        ])]);
        assert!(RatingChart::from_dataset(&ds).is_err());
    }

    #[test]
    fn x_range_pads_whole_ratings() {
        let chart =
            RatingChart::from_dataset(&shipments(&[("Ship", 1), ("Road", 5)])).unwrap();
        assert_eq!(chart.x_range(), (0.5, 5.5));
    }
}
