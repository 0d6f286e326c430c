use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;

/// Drawing surface handed to the chart renderers.
pub type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// An in-memory RGB image that plotters draws into and `image` encodes.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// White canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![255; width as usize * height as usize * 3],
        }
    }

    /// Run `draw` against a white-filled drawing area covering the canvas.
    pub fn paint<F>(&mut self, draw: F) -> Result<()>
    where
        F: FnOnce(&Area<'_>) -> Result<()>,
    {
        let root = BitMapBackend::with_buffer(&mut self.pixels, (self.width, self.height))
            .into_drawing_area();
        root.fill(&WHITE)?;
        draw(&root)?;
        root.present()?;
        Ok(())
    }

    /// Encode the canvas as PNG, overwriting `path`.
    pub fn save_png(self, path: &Path) -> Result<()> {
        let image = RgbImage::from_raw(self.width, self.height, self.pixels)
            .context("pixel buffer does not match canvas size")?;
        image
            .save_with_format(path, ImageFormat::Png)
            .with_context(|| format!("writing {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn paints_and_saves_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("square.png");

        let mut canvas = Canvas::new(300, 200);
        canvas
            .paint(|area| {
                area.draw(&Rectangle::new([(10, 10), (50, 50)], RED.filled()))?;
                Ok(())
            })
            .unwrap();
        canvas.save_png(&path).unwrap();

        let image = image::open(&path).unwrap().to_rgb8();
        assert_eq!(image.dimensions(), (300, 200));
        assert_eq!(image.get_pixel(30, 30).0, [255, 0, 0]);
        assert_eq!(image.get_pixel(100, 100).0, [255, 255, 255]);
    }
}
