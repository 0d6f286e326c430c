use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::config::DashboardConfig;
use crate::data::loader;
use crate::output;
use crate::page;
use crate::render::{self, fonts, Artifact, RenderSettings};

// ---------------------------------------------------------------------------
// Dashboard run
// ---------------------------------------------------------------------------

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub rows: usize,
    /// Chart images in `Artifact::ALL` order.
    pub artifacts: Vec<PathBuf>,
    pub page: PathBuf,
}

/// Load → reset output → render charts → write page.
///
/// Stages run strictly in sequence and the first error aborts the run. The
/// input is loaded before the output directory is touched, so a bad input
/// leaves a previous dashboard in place.
pub fn run(config: &DashboardConfig) -> Result<RunSummary> {
    config.validate()?;

    let dataset = loader::load_file(&config.input_path)
        .with_context(|| format!("loading {}", config.input_path.display()))?;
    if dataset.is_empty() {
        warn!("{} has no rows; charts will be empty", config.input_path.display());
    } else {
        info!(
            "loaded {} rows from {}",
            dataset.len(),
            config.input_path.display()
        );
    }

    output::reset_output_dir(&config.output_dir)?;

    let settings = RenderSettings {
        width: config.chart_width,
        height: config.chart_height,
        histogram_bins: config.histogram_bins,
        text: fonts::init_text(config.font_path.as_deref())?,
    };

    let artifacts = Artifact::ALL
        .into_iter()
        .map(|artifact| {
            render::render_artifact(artifact, &dataset, &settings, &config.output_dir)
                .with_context(|| format!("rendering {}", artifact.file_name()))
        })
        .collect::<Result<Vec<_>>>()?;

    let page = page::write_page(&config.output_dir)?;

    Ok(RunSummary {
        rows: dataset.len(),
        artifacts,
        page,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::Path;

    use super::*;
    use tempfile::TempDir;

    const INPUT: &str = "\
ID,Warehouse_block,Mode_of_Shipment,Customer_care_calls,Customer_rating,Weight_in_gms
1,A,Ship,4,1,1233
2,A,Flight,4,5,3088
3,A,Ship,2,3,3374
4,B,Road,3,2,1177
5,B,Ship,2,5,2484
6,C,Flight,3,1,1417
7,C,Road,3,4,2371
8,C,Ship,4,3,2804
9,C,Road,5,2,1861
10,D,Flight,3,4,1187
";

    fn config_in(dir: &Path) -> DashboardConfig {
        let input = dir.join("shipping-data.csv");
        fs::write(&input, INPUT).unwrap();
        DashboardConfig {
            input_path: input,
            output_dir: dir.join("docs"),
            ..Default::default()
        }
    }

    fn entries(dir: &Path) -> BTreeSet<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    fn expected_entries() -> BTreeSet<String> {
        Artifact::ALL
            .iter()
            .map(|a| a.file_name().to_string())
            .chain([page::PAGE_FILE_NAME.to_string()])
            .collect()
    }

    #[test]
    fn writes_four_charts_and_page() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(tmp.path());

        let summary = run(&config).unwrap();

        assert_eq!(summary.rows, 10);
        assert_eq!(summary.artifacts.len(), 4);
        assert_eq!(summary.page, config.output_dir.join("index.html"));
        assert_eq!(entries(&config.output_dir), expected_entries());

        let image = image::open(&summary.artifacts[0]).unwrap();
        assert_eq!((image.width(), image.height()), (640, 480));
    }

    #[test]
    fn second_run_leaves_exactly_five_files() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(tmp.path());

        run(&config).unwrap();
        run(&config).unwrap();

        assert_eq!(entries(&config.output_dir), expected_entries());
    }

    #[test]
    fn stale_output_is_cleared() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(tmp.path());
        fs::create_dir(&config.output_dir).unwrap();
        for i in 0..6 {
            fs::write(config.output_dir.join(format!("old-{i}.bin")), "x").unwrap();
        }

        run(&config).unwrap();

        assert_eq!(entries(&config.output_dir), expected_entries());
    }

    #[test]
    fn missing_input_leaves_output_untouched() {
        let tmp = TempDir::new().unwrap();
        let config = DashboardConfig {
            input_path: tmp.path().join("absent.csv"),
            output_dir: tmp.path().join("docs"),
            ..Default::default()
        };
        fs::create_dir(&config.output_dir).unwrap();
        fs::write(config.output_dir.join("index.html"), "previous").unwrap();

        assert!(run(&config).is_err());
        assert_eq!(
            fs::read_to_string(config.output_dir.join("index.html")).unwrap(),
            "previous"
        );
    }

    #[test]
    fn missing_column_aborts_before_page() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("shipping-data.csv");
        fs::write(&input, "Warehouse_block,Mode_of_Shipment\nA,Ship\nB,Road\n").unwrap();
        let config = DashboardConfig {
            input_path: input,
            output_dir: tmp.path().join("docs"),
            ..Default::default()
        };

        let err = run(&config).unwrap_err();

        assert!(format!("{err:#}").contains("Customer_rating"));
        assert!(!config.output_dir.join("index.html").exists());
    }

    #[test]
    fn header_only_input_still_builds_dashboard() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("shipping-data.csv");
        fs::write(&input, INPUT.lines().next().unwrap()).unwrap();
        let config = DashboardConfig {
            input_path: input,
            output_dir: tmp.path().join("docs"),
            ..Default::default()
        };

        let summary = run(&config).unwrap();

        assert_eq!(summary.rows, 0);
        assert_eq!(entries(&config.output_dir), expected_entries());
    }

    #[test]
    fn invalid_config_is_rejected_before_loading() {
        let tmp = TempDir::new().unwrap();
        let config = DashboardConfig {
            histogram_bins: 0,
            ..config_in(tmp.path())
        };
        assert!(run(&config).is_err());
        assert!(!config.output_dir.exists());
    }
}
