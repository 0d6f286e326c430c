use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::render::Artifact;

pub const PAGE_FILE_NAME: &str = "index.html";

const HEAD: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <meta charset="utf-8">
        <title>Shipping Dashboard</title>
        <style>
            .card {
                box-shadow: 0 4px 8px 0 rgba(0, 0, 0, 0.2);
                transition: 0.3s;
                border-radius: 5px;
                margin: 10px;
                padding: 10px;
                background-color: #fff;
            }
            .card img {
                border-radius: 5px;
                width: 100%;
            }
        </style>
    </head>
    <body>
        <h1>Shipping Dashboard</h1>
"#;

const TAIL: &str = "    </body>\n</html>\n";

/// The dashboard markup: two floated columns of two cards each, figures in
/// `Artifact::ALL` order. Images are referenced relative to the page.
pub fn render_page() -> String {
    let mut html = String::from(HEAD);
    for column in Artifact::ALL.chunks(2) {
        html.push_str("        <div style=\"width:45%;float:left\">\n");
        for artifact in column {
            html.push_str(&format!(
                "            <div class=\"card\">\n                <img src=\"{}\" alt=\"{}\">\n            </div>\n",
                artifact.file_name(),
                artifact.alt_text()
            ));
        }
        html.push_str("        </div>\n");
    }
    html.push_str(TAIL);
    html
}

/// Write `index.html` into `output_dir`, replacing any existing page.
pub fn write_page(output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(PAGE_FILE_NAME);
    std::fs::write(&path, render_page())
        .with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(path)
}
