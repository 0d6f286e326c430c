use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

const MIN_CHART_SIZE: u32 = 200;
const MAX_CHART_SIZE: u32 = 4096;

/// Run configuration. Every field has a default, so an empty JSON object
/// (or no config file at all) reproduces the stock dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Shipment table to read.
    pub input_path: PathBuf,
    /// Directory that receives the chart images and `index.html`.
    /// Reset at the start of every run.
    pub output_dir: PathBuf,
    /// Chart image size in pixels.
    pub chart_width: u32,
    pub chart_height: u32,
    /// Bucket count for the weight histogram.
    pub histogram_bins: usize,
    /// TrueType font for chart text. When unset, common system locations
    /// are searched.
    pub font_path: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("files/input/shipping-data.csv"),
            output_dir: PathBuf::from("docs"),
            chart_width: 640,
            chart_height: 480,
            histogram_bins: 10,
            font_path: None,
        }
    }
}

impl DashboardConfig {
    /// Read a JSON config file; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("chart_width", self.chart_width), ("chart_height", self.chart_height)] {
            ensure!(
                (MIN_CHART_SIZE..=MAX_CHART_SIZE).contains(&value),
                "{name} must be between {MIN_CHART_SIZE} and {MAX_CHART_SIZE} pixels, got {value}"
            );
        }
        ensure!(self.histogram_bins > 0, "histogram_bins must be at least 1");
        Ok(())
    }
}
