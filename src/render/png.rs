//! PNG rendering of a character table: one square per entry, green for
//! positive values, red for negative ones, brighter for larger magnitudes.

use std::convert::Infallible;

use bitmap_font::{tamzen, TextStyle};
use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::Dimensions,
    pixelcolor::BinaryColor,
    prelude::{Point, Size},
    primitives::Rectangle,
    text::{renderer::TextRenderer, Baseline, Text},
    Drawable, Pixel,
};
use image::{Rgb, RgbImage};
use imageproc::{drawing, rect::Rect};

use crate::character::Matrix;

const MIN_CELL: u32 = 22;
const GLYPH_WIDTH: u32 = 6;

const LINE_COLOR: Rgb<u8> = Rgb([64, 64, 64]);
const TEXT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Paints the lit pixels of monochrome text onto an RGB image with one ink.
struct Stencil<'a> {
    image: &'a mut RgbImage,
    ink: Rgb<u8>,
}

impl Dimensions for Stencil<'_> {
    fn bounding_box(&self) -> Rectangle {
        Rectangle::new(
            Point::zero(),
            Size::new(self.image.width(), self.image.height()),
        )
    }
}

impl DrawTarget for Stencil<'_> {
    type Color = BinaryColor;

    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if color.is_on() && bounds.contains(point) {
                self.image.put_pixel(point.x as u32, point.y as u32, self.ink);
            }
        }
        Ok(())
    }
}

/// Side of one cell in pixels, wide enough for the longest entry.
pub fn cell_size(values: &Matrix) -> u32 {
    let widest = values
        .iter()
        .flatten()
        .map(|v| v.to_string().len() as u32)
        .max()
        .unwrap_or(1);
    MIN_CELL.max(GLYPH_WIDTH * widest + 8)
}

fn cell_color(value: i64, peak: u64) -> Rgb<u8> {
    let shade = 60 + (120 * value.unsigned_abs() / peak) as u8;
    if value > 0 {
        Rgb([0, shade, 0])
    } else {
        Rgb([shade, 0, 0])
    }
}

pub fn render_table(values: &Matrix) -> RgbImage {
    let cell = cell_size(values);
    let len = values.len() as u32;
    let dim = cell * len + 1;
    let mut img = RgbImage::new(dim, dim);

    let text_style = TextStyle::new(&tamzen::FONT_5x9, BinaryColor::On);
    let peak = values
        .iter()
        .flatten()
        .map(|v| v.unsigned_abs())
        .max()
        .unwrap_or(1)
        .max(1);

    // Cells and their values.
    for (row, entries) in values.iter().enumerate() {
        for (col, &value) in entries.iter().enumerate() {
            let x = cell * col as u32;
            let y = cell * row as u32;
            if value != 0 {
                drawing::draw_filled_rect_mut(
                    &mut img,
                    Rect::at(x as i32, y as i32).of_size(cell, cell),
                    cell_color(value, peak),
                );
            }

            let s = value.to_string();
            let pos = Point::new((x + cell / 2) as i32 + 1, (y + cell / 2) as i32 + 1);
            let metrics = text_style.measure_string(&s, pos, Baseline::Middle);
            let mut stencil = Stencil {
                image: &mut img,
                ink: TEXT_COLOR,
            };
            Text::new(&s, pos - metrics.bounding_box.size / 2, text_style)
                .draw(&mut stencil)
                .unwrap_or_else(|never| match never {});
        }
    }

    // Grid.
    let end = (cell * len) as f32;
    for i in 0..=len {
        let at = (cell * i) as f32;
        drawing::draw_line_segment_mut(&mut img, (at, 0.0), (at, end), LINE_COLOR);
        drawing::draw_line_segment_mut(&mut img, (0.0, at), (end, at), LINE_COLOR);
    }

    img
}
