use anyhow::Result;
use plotters::prelude::*;

use super::canvas::Area;
use super::fonts::{label_font, title_font};
use super::Artifact;
use crate::color::{to_rgb, TAB_ORANGE};
use crate::data::model::Dataset;
use crate::data::summary::{histogram, HistogramBin};
use crate::data::WEIGHT_IN_GMS;

/// Histogram of shipped weights.
#[derive(Debug, Clone)]
pub struct WeightChart {
    pub bins: Vec<HistogramBin>,
}

impl WeightChart {
    pub fn from_dataset(dataset: &Dataset, bins: usize) -> Result<Self> {
        let weights: Vec<f64> = dataset
            .numeric_column(WEIGHT_IN_GMS)?
            .into_iter()
            .flatten()
            .collect();
        Ok(Self {
            bins: histogram(&weights, bins),
        })
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    pub fn draw(&self, area: &Area<'_>, text: bool) -> Result<()> {
        let x_lo = self.bins.first().map_or(0.0, |b| b.start);
        let x_hi = self.bins.last().map_or(1.0, |b| b.end);
        let highest = self.bins.iter().map(|b| b.count).max().unwrap_or(0) as u64;
        let y_top = highest + highest / 20 + 1;

        let mut builder = ChartBuilder::on(area);
        builder.margin(15);
        if text {
            builder
                .caption(Artifact::WeightDistribution.title(), title_font())
                .x_label_area_size(35)
                .y_label_area_size(55);
        }
        let mut chart = builder.build_cartesian_2d(x_lo..x_hi, 0u64..y_top)?;

        if text {
            chart
                .configure_mesh()
                .disable_mesh()
                .x_label_formatter(&|x: &f64| format!("{x:.0}"))
                .y_desc("Frequency")
                .label_style(label_font())
                .axis_desc_style(label_font())
                .draw()?;
        }

        let fill = to_rgb(TAB_ORANGE).filled();
        chart.draw_series(
            self.bins
                .iter()
                .map(|b| Rectangle::new([(b.start, 0), (b.end, b.count as u64)], fill)),
        )?;
        chart.draw_series(
            self.bins
                .iter()
                .map(|b| Rectangle::new([(b.start, 0), (b.end, b.count as u64)], WHITE.stroke_width(1))),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, Record};

    #[test]
    fn bucket_counts_sum_to_non_null_weights() {
        let mut records: Vec<Record> = (0..53)
            .map(|i| Record::from_iter([(WEIGHT_IN_GMS, CellValue::Integer(1000 + i * 97))]))
            .collect();
        records.push(Record::from_iter([(WEIGHT_IN_GMS, CellValue::Null)]));
        let chart = WeightChart::from_dataset(&Dataset::from_records(records), 10).unwrap();

        assert_eq!(chart.bins.len(), 10);
        assert_eq!(chart.total(), 53);
    }

    #[test]
    fn bucket_count_is_configurable() {
        let records = (0..5)
            .map(|i| Record::from_iter([(WEIGHT_IN_GMS, CellValue::Float(i as f64))]))
            .collect();
        let chart = WeightChart::from_dataset(&Dataset::from_records(records), 4).unwrap();
        assert_eq!(chart.bins.len(), 4);
        assert_eq!(chart.total(), 5);
    }
}
