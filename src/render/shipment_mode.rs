use std::f64::consts::TAU;

use anyhow::Result;
use palette::Srgb;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::canvas::Area;
use super::fonts::{label_font, title_font};
use super::Artifact;
use crate::color::{categorical_colors, to_rgb};
use crate::data::model::Dataset;
use crate::data::summary::value_counts;
use crate::data::MODE_OF_SHIPMENT;

/// Ring thickness as a fraction of the outer radius.
pub const WEDGE_WIDTH: f64 = 0.35;

#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub label: String,
    pub count: usize,
    /// Share of the whole ring, `count / total`.
    pub fraction: f64,
    pub color: Srgb<u8>,
}

/// Donut chart of shipment modes.
#[derive(Debug, Clone)]
pub struct ModeChart {
    pub wedges: Vec<Wedge>,
}

impl ModeChart {
    pub fn from_dataset(dataset: &Dataset) -> Result<Self> {
        let counts = value_counts(dataset.text_column(MODE_OF_SHIPMENT)?);
        let total: usize = counts.iter().map(|c| c.count).sum();
        let colors = categorical_colors(counts.len());

        let wedges = counts
            .into_iter()
            .zip(colors)
            .map(|(c, color)| Wedge {
                fraction: c.count as f64 / total as f64,
                label: c.label,
                count: c.count,
                color,
            })
            .collect();
        Ok(Self { wedges })
    }

    pub fn total(&self) -> usize {
        self.wedges.iter().map(|w| w.count).sum()
    }

    /// Wedges run counter-clockwise from angle zero (3 o'clock).
    pub fn draw(&self, area: &Area<'_>, text: bool) -> Result<()> {
        let area = if text {
            area.titled(Artifact::ModeOfShipment.title(), title_font())?
        } else {
            area.clone()
        };

        let (w, h) = area.dim_in_pixel();
        let center = (w as f64 / 2.0, h as f64 / 2.0);
        let outer = w.min(h) as f64 * 0.38;
        let inner = outer * (1.0 - WEDGE_WIDTH);

        let mut start = 0.0;
        for wedge in &self.wedges {
            let sweep = wedge.fraction * TAU;
            let shape = ring_segment(center, inner, outer, start, start + sweep);
            area.draw(&Polygon::new(shape, to_rgb(wedge.color).filled()))?;

            if text {
                let mid = start + sweep / 2.0;
                let anchor = if mid.cos() >= 0.0 { HPos::Left } else { HPos::Right };
                let style = label_font()
                    .color(&BLACK)
                    .pos(Pos::new(anchor, VPos::Center));
                area.draw(&Text::new(
                    wedge.label.clone(),
                    polar(center, outer * 1.1, mid),
                    style,
                ))?;
            }
            start += sweep;
        }
        Ok(())
    }
}

fn polar(center: (f64, f64), radius: f64, angle: f64) -> (i32, i32) {
    (
        (center.0 + radius * angle.cos()).round() as i32,
        (center.1 - radius * angle.sin()).round() as i32,
    )
}

/// Outline of the ring between `inner` and `outer` radius over `[start, end]`.
fn ring_segment(
    center: (f64, f64),
    inner: f64,
    outer: f64,
    start: f64,
    end: f64,
) -> Vec<(i32, i32)> {
    let steps = (((end - start) / TAU) * 180.0).ceil().max(2.0) as usize;
    let angle = |i: usize| start + (end - start) * i as f64 / steps as f64;

    let outer_arc = (0..=steps).map(|i| polar(center, outer, angle(i)));
    let inner_arc = (0..=steps).rev().map(|i| polar(center, inner, angle(i)));
    outer_arc.chain(inner_arc).collect()
}
