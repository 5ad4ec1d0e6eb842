//! Backend-independent drawing of the color wheel.
//!
//! [`render_picker`] turns picker state into a list of [`DrawCommand`]s. A
//! backend either issues them as real draw calls or, like the terminal widget
//! in `ui::wheel`, rasterizes them by sampling points with [`sample`].

use crate::color::{self, HslColor};
use crate::luminance::{self, Shade};
use crate::wheel::{self, ColorWheelPicker, LIGHTNESS_RING_OFFSET};

/// Number of slices each ring is cut into. There is no conic gradient
/// primitive, so rings are tessellated.
pub const RING_SLICES: usize = 720;

const MARKER_RADIUS: f64 = 6.0;
const MARKER_WIDTH: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn from_hsl(hsl: HslColor) -> Self {
        let (r, g, b) = hsl.to_rgb();
        Rgb(r, g, b)
    }

    /// Parse a color string, using `fallback` if it does not parse.
    pub fn parse_or(input: &str, fallback: Rgb) -> Self {
        color::parse_color(input)
            .map(|(r, g, b)| Rgb(r, g, b))
            .unwrap_or(fallback)
    }

    pub fn to_hex(self) -> String {
        color::rgb_to_hex(self.0, self.1, self.2)
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Solid(Rgb),
    /// Horizontal gradient from `from` at `x0` to `to` at `x1`.
    LinearGradient { x0: f64, x1: f64, from: Rgb, to: Rgb },
}

impl Fill {
    pub fn color_at(&self, x: f64) -> Rgb {
        match *self {
            Fill::Solid(c) => c,
            Fill::LinearGradient { x0, x1, from, to } => {
                let span = x1 - x0;
                let t = if span.abs() < f64::EPSILON {
                    0.0
                } else {
                    (x - x0) / span
                };
                from.lerp(to, t)
            }
        }
    }
}

/// Angles are in degrees, clockwise from the +x axis (canvas y grows down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// The part of a ring between two angles.
    Sector {
        cx: f64,
        cy: f64,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        sweep: f64,
        fill: Fill,
    },
    Disk {
        cx: f64,
        cy: f64,
        radius: f64,
        fill: Fill,
    },
    /// A stroked circle outline.
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        width: f64,
        stroke: Rgb,
    },
}

impl DrawCommand {
    /// Color this command paints at `(x, y)`, if it covers that point.
    pub fn sample(&self, x: f64, y: f64) -> Option<Rgb> {
        match *self {
            DrawCommand::Sector {
                cx,
                cy,
                inner_radius,
                outer_radius,
                start_angle,
                sweep,
                fill,
            } => {
                let (dx, dy) = (x - cx, y - cy);
                let distance = (dx * dx + dy * dy).sqrt();
                if distance <= inner_radius || distance > outer_radius {
                    return None;
                }
                let angle = dy.atan2(dx).to_degrees();
                let offset = (angle - start_angle).rem_euclid(360.0);
                (offset < sweep).then(|| fill.color_at(x))
            }
            DrawCommand::Disk { cx, cy, radius, fill } => {
                let (dx, dy) = (x - cx, y - cy);
                (dx * dx + dy * dy <= radius * radius).then(|| fill.color_at(x))
            }
            DrawCommand::Circle {
                cx,
                cy,
                radius,
                width,
                stroke,
            } => {
                let (dx, dy) = (x - cx, y - cy);
                let distance = (dx * dx + dy * dy).sqrt();
                ((distance - radius).abs() <= width / 2.0).then_some(stroke)
            }
        }
    }
}

/// Topmost color painted at `(x, y)`; later commands draw over earlier ones.
pub fn sample(commands: &[DrawCommand], x: f64, y: f64) -> Option<Rgb> {
    commands.iter().rev().find_map(|cmd| cmd.sample(x, y))
}

/// Build the draw commands for the picker's current state.
pub fn render_picker(picker: &ColorWheelPicker) -> Vec<DrawCommand> {
    let g = picker.geometry();
    let (cx, cy) = g.center();
    let hue = picker.hue();
    let step = 360.0 / RING_SLICES as f64;

    let mut commands = Vec::with_capacity(RING_SLICES * 2 + 3);

    // Lightness ring, ramp measured from the top.
    for i in 0..RING_SLICES {
        let ramp = i as f64 * step;
        let lightness = wheel::lightness_from_angle(ramp + step / 2.0);
        commands.push(DrawCommand::Sector {
            cx,
            cy,
            inner_radius: g.middle_outer_radius,
            outer_radius: g.outer_radius,
            start_angle: ramp - LIGHTNESS_RING_OFFSET,
            sweep: step,
            fill: Fill::Solid(Rgb::from_hsl(HslColor::new(hue, 100.0, lightness))),
        });
    }

    // Hue ring, hue equals angle.
    for i in 0..RING_SLICES {
        let start = i as f64 * step;
        commands.push(DrawCommand::Sector {
            cx,
            cy,
            inner_radius: g.middle_inner_radius,
            outer_radius: g.middle_outer_radius,
            start_angle: start,
            sweep: step,
            fill: Fill::Solid(Rgb::from_hsl(HslColor::new(start + step / 2.0, 100.0, 50.0))),
        });
    }

    let colors = picker.colors();
    commands.push(DrawCommand::Disk {
        cx,
        cy,
        radius: g.inner_radius,
        fill: Fill::LinearGradient {
            x0: cx - g.inner_radius,
            x1: cx + g.inner_radius,
            from: Rgb::parse_or(&colors.primary, Rgb(255, 255, 255)),
            to: Rgb::parse_or(&colors.secondary, Rgb(255, 255, 255)),
        },
    });

    let hue_mid = (g.middle_inner_radius + g.middle_outer_radius) / 2.0;
    commands.push(marker(cx, cy, hue, hue_mid, HslColor::new(hue, 100.0, 50.0)));

    let lightness = picker.lightness();
    let light_mid = (g.middle_outer_radius + g.outer_radius) / 2.0;
    commands.push(marker(
        cx,
        cy,
        wheel::angle_from_lightness(lightness) - LIGHTNESS_RING_OFFSET,
        light_mid,
        HslColor::new(hue, 100.0, lightness),
    ));

    commands
}

/// A circle on the ring at `angle`, stroked to contrast with `under`.
fn marker(cx: f64, cy: f64, angle: f64, distance: f64, under: HslColor) -> DrawCommand {
    let rad = angle.to_radians();
    let stroke = match luminance::classify(Some(under.to_hex().as_str())) {
        Shade::Dark => Rgb(255, 255, 255),
        Shade::Light => Rgb(0, 0, 0),
    };
    DrawCommand::Circle {
        cx: cx + distance * rad.cos(),
        cy: cy + distance * rad.sin(),
        radius: MARKER_RADIUS,
        width: MARKER_WIDTH,
        stroke,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuColors;

    fn picker(primary: &str, secondary: &str) -> ColorWheelPicker {
        let colors = MenuColors::new(primary, secondary);
        ColorWheelPicker::open(Some(&colors), &colors, 280.0)
    }

    #[test]
    fn command_counts() {
        let commands = render_picker(&picker("#ff0000", "#0000ff"));
        assert_eq!(commands.len(), RING_SLICES * 2 + 3);
        let sectors = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sector { .. }))
            .count();
        assert_eq!(sectors, RING_SLICES * 2);
    }

    #[test]
    fn hue_ring_color_matches_angle() {
        let commands = render_picker(&picker("#ff0000", "#0000ff"));
        // Hue ring midpoint, pointing right (hue ~0) and down (hue ~90).
        let right = sample(&commands, 140.0 + 78.0, 140.0).unwrap();
        assert_eq!(right.0, 255);
        assert!(right.2 < 10);
        let down = sample(&commands, 140.0, 140.0 + 78.0).unwrap();
        assert!(down.1 == 255 && down.2 < 10 && down.0 < 140);
    }

    #[test]
    fn lightness_ring_is_dark_at_top_and_bright_at_bottom() {
        let commands = render_picker(&picker("#ff0000", "#0000ff"));
        // Sample just clockwise of the top so the ramp starts near zero.
        let top = sample(&commands, 142.0, 140.0 - 120.0).unwrap();
        assert!(top.0 < 20 && top.1 < 20 && top.2 < 20);
        let bottom = sample(&commands, 140.0, 140.0 + 125.0).unwrap();
        // Ramp angle 180 is 50% lightness: the pure hue.
        assert_eq!(bottom.0, 255);
    }

    #[test]
    fn saturation_disk_is_a_primary_to_secondary_gradient() {
        let commands = render_picker(&picker("#ff0000", "#0000ff"));
        let left = sample(&commands, 140.0 - 40.0, 140.0).unwrap();
        let right = sample(&commands, 140.0 + 40.0, 140.0).unwrap();
        assert!(left.0 > 240 && left.2 < 15);
        assert!(right.2 > 240 && right.0 < 15);
    }

    #[test]
    fn outside_the_wheel_is_empty() {
        let commands = render_picker(&picker("#ff0000", "#0000ff"));
        assert_eq!(sample(&commands, 1.0, 1.0), None);
        // Gap between the saturation disk and the hue ring.
        assert_eq!(sample(&commands, 140.0, 140.0 - 50.0), None);
    }

    #[test]
    fn gradient_interpolates() {
        let fill = Fill::LinearGradient {
            x0: 0.0,
            x1: 10.0,
            from: Rgb(0, 0, 0),
            to: Rgb(200, 100, 50),
        };
        assert_eq!(fill.color_at(-5.0), Rgb(0, 0, 0));
        assert_eq!(fill.color_at(5.0), Rgb(100, 50, 25));
        assert_eq!(fill.color_at(15.0), Rgb(200, 100, 50));
    }

    #[test]
    fn sector_wraps_past_360() {
        let cmd = DrawCommand::Sector {
            cx: 0.0,
            cy: 0.0,
            inner_radius: 5.0,
            outer_radius: 10.0,
            start_angle: -10.0,
            sweep: 20.0,
            fill: Fill::Solid(Rgb(1, 2, 3)),
        };
        assert_eq!(cmd.sample(8.0, 0.0), Some(Rgb(1, 2, 3)));
        assert_eq!(cmd.sample(0.0, 8.0), None);
        assert_eq!(cmd.sample(2.0, 0.0), None);
    }

    #[test]
    fn markers_contrast_with_the_ring() {
        let commands = render_picker(&picker("#ffff00", "#000000"));
        let markers: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { stroke, .. } => Some(*stroke),
                _ => None,
            })
            .collect();
        assert_eq!(markers.len(), 2);
        // Yellow at 50% lightness is light, so both markers are black.
        assert!(markers.iter().all(|&s| s == Rgb(0, 0, 0)));
    }

    #[test]
    fn rgb_hex() {
        assert_eq!(Rgb(255, 144, 0).to_hex(), "#ff9000");
        assert_eq!(Rgb::parse_or("bad", Rgb(1, 1, 1)), Rgb(1, 1, 1));
    }
}
