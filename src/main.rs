mod color;
mod config;
mod data;
mod output;
mod page;
mod pipeline;
mod render;

use std::path::Path;

use config::DashboardConfig;
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Optional JSON config path; defaults reproduce the stock dashboard.
    let config = match std::env::args_os().nth(1) {
        Some(path) => DashboardConfig::from_json_file(Path::new(&path))?,
        None => DashboardConfig::default(),
    };

    let summary = pipeline::run(&config)?;
    info!(
        "{} rows, {} charts, page at {}",
        summary.rows,
        summary.artifacts.len(),
        summary.page.display()
    );
    println!("Dashboard generated successfully.");
    Ok(())
}
