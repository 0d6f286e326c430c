use anyhow::Result;
use plotters::prelude::*;

use super::canvas::Area;
use super::fonts::{label_font, title_font};
use super::Artifact;
use crate::color::{to_rgb, TAB_BLUE};
use crate::data::model::Dataset;
use crate::data::summary::{value_counts, CategoryCount};
use crate::data::WAREHOUSE_BLOCK;

/// Record count per warehouse block, one vertical bar each.
#[derive(Debug, Clone)]
pub struct WarehouseChart {
    /// Bars in drawing order (highest count first).
    pub bars: Vec<CategoryCount>,
}

impl WarehouseChart {
    pub fn from_dataset(dataset: &Dataset) -> Result<Self> {
        let blocks = dataset.text_column(WAREHOUSE_BLOCK)?;
        Ok(Self {
            bars: value_counts(blocks),
        })
    }

    pub fn total(&self) -> usize {
        self.bars.iter().map(|b| b.count).sum()
    }

    pub fn draw(&self, area: &Area<'_>, text: bool) -> Result<()> {
        let n = self.bars.len().max(1);
        let highest = self.bars.first().map_or(0, |b| b.count) as u64;
        let y_top = highest + highest / 20 + 1;

        let mut builder = ChartBuilder::on(area);
        builder.margin(15);
        if text {
            builder
                .caption(Artifact::ShippingPerWarehouse.title(), title_font())
                .x_label_area_size(40)
                .y_label_area_size(55);
        }
        let mut chart = builder.build_cartesian_2d((0..n).into_segmented(), 0u64..y_top)?;

        if text {
            let bar_label = |v: &SegmentValue<usize>| match v {
                SegmentValue::CenterOf(i) => self
                    .bars
                    .get(*i)
                    .map(|b| b.label.clone())
                    .unwrap_or_default(),
                _ => String::new(),
            };
            chart
                .configure_mesh()
                .disable_mesh()
                .x_labels(n)
                .x_label_formatter(&bar_label)
                .x_desc("Warehouse block")
                .y_desc("Record count")
                .label_style(label_font())
                .axis_desc_style(label_font())
                .draw()?;
        }

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(to_rgb(TAB_BLUE).filled())
                .margin(12)
                .data(
                    self.bars
                        .iter()
                        .enumerate()
                        .map(|(i, bar)| (i, bar.count as u64)),
                ),
        )?;
        Ok(())
    }
}
