use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::render::{self, DrawCommand, Rgb};
use crate::wheel::CanvasBounds;

// Each terminal cell is one client unit wide and two tall; the upper half
// block lets a cell show two vertically stacked pixels.
const UPPER_HALF: &str = "\u{2580}";

/// Client coordinates of the middle of a terminal cell.
pub fn client_point(column: u16, row: u16) -> (f64, f64) {
    (column as f64 + 0.5, row as f64 * 2.0 + 1.0)
}

/// The largest square canvas that fits `area`, centered, in client units.
pub fn canvas_bounds(area: Rect) -> Option<CanvasBounds> {
    let width = area.width as f64;
    let height = area.height as f64 * 2.0;
    let side = width.min(height);
    if side < 4.0 {
        return None;
    }
    Some(CanvasBounds {
        left: area.x as f64 + (width - side) / 2.0,
        top: area.y as f64 * 2.0 + (height - side) / 2.0,
        width: side,
        height: side,
    })
}

/// The wheel sampled at terminal resolution.
#[derive(Debug, Clone)]
pub struct WheelRaster {
    area: Rect,
    /// Two pixels per cell, row-major, upper pixel first.
    pixels: Vec<Option<Rgb>>,
}

impl WheelRaster {
    pub fn rasterize(commands: &[DrawCommand], area: Rect, size: f64) -> Self {
        let mut pixels = Vec::with_capacity(area.width as usize * area.height as usize * 2);
        let bounds = canvas_bounds(area);

        for row in area.y..area.y + area.height {
            for half in 0..2u16 {
                for col in area.x..area.x + area.width {
                    let pixel = bounds.and_then(|b| {
                        let client_x = col as f64 + 0.5;
                        let client_y = (row * 2 + half) as f64 + 0.5;
                        let (x, y) = b.to_local(client_x, client_y, size);
                        render::sample(commands, x, y)
                    });
                    pixels.push(pixel);
                }
            }
        }

        Self { area, pixels }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Pixel at a cell, `lower` selecting the bottom half.
    pub fn pixel(&self, col: u16, row: u16, lower: bool) -> Option<Rgb> {
        if col < self.area.x
            || row < self.area.y
            || col >= self.area.x + self.area.width
            || row >= self.area.y + self.area.height
        {
            return None;
        }
        let width = self.area.width as usize;
        let line = (row - self.area.y) as usize * 2 + usize::from(lower);
        self.pixels[line * width + (col - self.area.x) as usize]
    }
}

fn to_color(rgb: Option<Rgb>, fallback: Color) -> Color {
    rgb.map(|Rgb(r, g, b)| Color::Rgb(r, g, b)).unwrap_or(fallback)
}

/// Paints a [`WheelRaster`] into the buffer at the raster's own area.
pub struct WheelCanvas<'a> {
    pub raster: &'a WheelRaster,
}

impl<'a> Widget for WheelCanvas<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let target = self.raster.area().intersection(area);
        for row in target.y..target.y + target.height {
            for col in target.x..target.x + target.width {
                let upper = self.raster.pixel(col, row, false);
                let lower = self.raster.pixel(col, row, true);
                if upper.is_none() && lower.is_none() {
                    continue;
                }
                buf[(col, row)].set_symbol(UPPER_HALF).set_style(
                    Style::default()
                        .fg(to_color(upper, Color::Reset))
                        .bg(to_color(lower, Color::Reset)),
                );
            }
        }
    }
}
