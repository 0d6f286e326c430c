/// Chart rendering: one renderer per dashboard artifact.
///
/// Each renderer first derives its chart data from the [`Dataset`] (plain
/// structs, checked by the unit tests) and then draws it with plotters onto
/// a [`canvas::Canvas`], which is encoded to PNG.
pub mod canvas;
pub mod fonts;
pub mod rating;
pub mod shipment_mode;
pub mod warehouse;
pub mod weight;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::data::model::Dataset;
use canvas::Canvas;
use rating::RatingChart;
use shipment_mode::ModeChart;
use warehouse::WarehouseChart;
use weight::WeightChart;

// ---------------------------------------------------------------------------
// Artifacts
// ---------------------------------------------------------------------------

/// The chart images making up the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    ShippingPerWarehouse,
    ModeOfShipment,
    AverageCustomerRating,
    WeightDistribution,
}

impl Artifact {
    /// Render order, which is also the order of the figures on the page.
    pub const ALL: [Artifact; 4] = [
        Artifact::ShippingPerWarehouse,
        Artifact::ModeOfShipment,
        Artifact::AverageCustomerRating,
        Artifact::WeightDistribution,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::ShippingPerWarehouse => "shipping_per_warehouse.png",
            Artifact::ModeOfShipment => "mode_of_shipment.png",
            Artifact::AverageCustomerRating => "average_customer_rating.png",
            Artifact::WeightDistribution => "weight_distribution.png",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Artifact::ShippingPerWarehouse => "Shipping per Warehouse",
            Artifact::ModeOfShipment => "Mode of Shipment",
            Artifact::AverageCustomerRating => "Average Customer Rating",
            Artifact::WeightDistribution => "Shipped Weight Distribution",
        }
    }

    /// Alt text of the figure's `<img>` tag.
    pub fn alt_text(self) -> &'static str {
        match self {
            Artifact::ShippingPerWarehouse => "Fig 1",
            Artifact::ModeOfShipment => "Fig 2",
            Artifact::AverageCustomerRating => "Fig 3",
            Artifact::WeightDistribution => "Fig 4",
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub histogram_bins: usize,
    /// Captions and axis labels are only drawn when a font is available.
    pub text: bool,
}

/// Render one artifact into `output_dir`, overwriting any previous file.
pub fn render_artifact(
    artifact: Artifact,
    dataset: &Dataset,
    settings: &RenderSettings,
    output_dir: &Path,
) -> Result<PathBuf> {
    let mut canvas = Canvas::new(settings.width, settings.height);
    let text = settings.text;

    match artifact {
        Artifact::ShippingPerWarehouse => {
            let chart = WarehouseChart::from_dataset(dataset)
                .with_context(|| format!("summarising {}", artifact.title()))?;
            debug!("{} bars over {} rows", chart.bars.len(), chart.total());
            canvas.paint(|area| chart.draw(area, text))?;
        }
        Artifact::ModeOfShipment => {
            let chart = ModeChart::from_dataset(dataset)
                .with_context(|| format!("summarising {}", artifact.title()))?;
            debug!("{} wedges over {} rows", chart.wedges.len(), chart.total());
            canvas.paint(|area| chart.draw(area, text))?;
        }
        Artifact::AverageCustomerRating => {
            let chart = RatingChart::from_dataset(dataset)
                .with_context(|| format!("summarising {}", artifact.title()))?;
            debug!("{} rating groups", chart.bars.len());
            canvas.paint(|area| chart.draw(area, text))?;
        }
        Artifact::WeightDistribution => {
            let chart = WeightChart::from_dataset(dataset, settings.histogram_bins)
                .with_context(|| format!("summarising {}", artifact.title()))?;
            debug!("{} buckets over {} weights", chart.bins.len(), chart.total());
            canvas.paint(|area| chart.draw(area, text))?;
        }
    }

    let path = output_dir.join(artifact.file_name());
    canvas.save_png(&path)?;
    info!("wrote {}", path.display());
    Ok(path)
}
