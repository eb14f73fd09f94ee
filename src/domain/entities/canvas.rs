//! Canvas entity
//!
//! Raw pixel raster of an identicon before compression. Each mosaic cell
//! becomes a `PIXEL_SIZE` x `PIXEL_SIZE` block on a white background.

use super::{BitPattern, PATTERN_SIZE, Rgb};
use image::RgbImage;

/// Side of one mosaic cell in pixels
pub const PIXEL_SIZE: u32 = 4;

/// Side of the canvas in pixels (5 cells x 4 pixels)
pub const CANVAS_SIZE: u32 = PATTERN_SIZE as u32 * PIXEL_SIZE;

/// Fixed-size RGB raster
///
/// Dimensions are constants so a given user id always rasterizes to the
/// same pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Creates an all-white canvas
    pub fn blank() -> Self {
        Self {
            image: RgbImage::from_pixel(
                CANVAS_SIZE,
                CANVAS_SIZE,
                image::Rgb(Rgb::WHITE.channels()),
            ),
        }
    }

    /// Rasterizes a mosaic in the given foreground color
    pub fn render(pattern: &BitPattern, color: Rgb) -> Self {
        let mut canvas = Self::blank();

        for (row, cells) in pattern.rows().iter().enumerate() {
            for (col, &painted) in cells.iter().enumerate() {
                if painted {
                    canvas.fill_cell(row as u32, col as u32, color);
                }
            }
        }

        canvas
    }

    fn fill_cell(&mut self, row: u32, col: u32, color: Rgb) {
        let pixel = image::Rgb(color.channels());
        let (x0, y0) = (col * PIXEL_SIZE, row * PIXEL_SIZE);

        for y in y0..y0 + PIXEL_SIZE {
            for x in x0..x0 + PIXEL_SIZE {
                self.image.put_pixel(x, y, pixel);
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Returns the color at `(x, y)`, or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.image
            .get_pixel_checked(x, y)
            .map(|image::Rgb([r, g, b])| Rgb::new(*r, *g, *b))
    }

    /// Row-major RGB8 samples, 3 bytes per pixel
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }
}
