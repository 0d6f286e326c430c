use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use plotters::style::{register_font, FontDesc, FontStyle, IntoFont};

/// Family name every chart asks for.
pub const FONT_FAMILY: &str = "sans-serif";

/// Looked up in order when no font is configured.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Outcome of the system font search; decided once per process.
static SYSTEM_TEXT: OnceLock<bool> = OnceLock::new();

/// Make chart text drawable, returning `false` when charts must be drawn
/// without any text.
///
/// An explicitly configured font is loaded on every call and must parse.
/// Without one, the system locations are searched once per process and a
/// missing font only downgrades the charts.
pub fn init_text(font_path: Option<&Path>) -> Result<bool> {
    if let Some(path) = font_path {
        register(path)?;
        info!("using font {}", path.display());
        return Ok(true);
    }

    if let Some(&ready) = SYSTEM_TEXT.get() {
        debug!("system font search already done (text available: {ready})");
        return Ok(ready);
    }
    let ready = match find_font(SYSTEM_FONTS) {
        Some(path) => {
            info!("using font {}", path.display());
            true
        }
        None => {
            warn!("no TrueType font found; charts will be drawn without text");
            false
        }
    };
    Ok(*SYSTEM_TEXT.get_or_init(|| ready))
}

/// Register the first candidate that exists and parses as a font.
fn find_font<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(AsRef::<Path>::as_ref)
        .filter(|p| p.is_file())
        .find(|p| match register(p) {
            Ok(()) => true,
            Err(err) => {
                debug!("skipping font {}: {err:#}", p.display());
                false
            }
        })
        .map(Path::to_path_buf)
}

fn register(path: &Path) -> Result<()> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("reading font {}", path.display()))?;
    // plotters keeps registered fonts for the life of the process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_font(FONT_FAMILY, FontStyle::Normal, bytes)
        .map_err(|_| anyhow!("{} is not a usable TrueType font", path.display()))
}

pub fn title_font() -> FontDesc<'static> {
    (FONT_FAMILY, 18).into_font()
}

pub fn label_font() -> FontDesc<'static> {
    (FONT_FAMILY, 12).into_font()
}
