use tracing::debug;

use crate::color::{self, HslColor};
use crate::menu::MenuColors;

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Ring radii of a square picker canvas of side `size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    pub size: f64,
    pub outer_radius: f64,
    pub middle_outer_radius: f64,
    pub middle_inner_radius: f64,
    pub inner_radius: f64,
}

impl WheelGeometry {
    pub fn new(size: f64) -> Self {
        let outer_radius = size / 2.0 - 10.0;
        let middle_inner_radius = 0.45 * outer_radius;
        Self {
            size,
            outer_radius,
            middle_outer_radius: 0.75 * outer_radius,
            middle_inner_radius,
            inner_radius: 0.7 * middle_inner_radius,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.size / 2.0, self.size / 2.0)
    }

    /// Polar coordinates of a canvas-local point relative to the center.
    /// The angle is in degrees, 0..360, clockwise from the +x axis.
    pub fn polar(&self, x: f64, y: f64) -> Polar {
        let (cx, cy) = self.center();
        let dx = x - cx;
        let dy = y - cy;
        let mut angle = dy.atan2(dx).to_degrees();
        if angle < 0.0 {
            angle += 360.0;
        }
        Polar {
            distance: (dx * dx + dy * dy).sqrt(),
            angle,
        }
    }

    /// Which ring a distance from the center falls in, if any.
    pub fn ring_at(&self, distance: f64) -> Option<Ring> {
        if distance > self.middle_outer_radius && distance <= self.outer_radius {
            Some(Ring::Lightness)
        } else if distance > self.middle_inner_radius && distance <= self.middle_outer_radius {
            Some(Ring::Hue)
        } else if distance <= self.middle_inner_radius {
            Some(Ring::Saturation)
        } else {
            None
        }
    }

    /// Saturation for a distance inside the disk: 100 at the center, 0 at
    /// `inner_radius` and beyond.
    pub fn saturation_at(&self, distance: f64) -> f64 {
        (100.0 - (distance / self.inner_radius) * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    pub distance: f64,
    pub angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ring {
    Lightness,
    Hue,
    Saturation,
}

/// Offset between the pointer angle and the lightness ramp's zero point.
pub const LIGHTNESS_RING_OFFSET: f64 = 90.0;

/// Lightness ramp along the outer ring. `angle` is measured from the top,
/// clockwise, in degrees.
pub fn lightness_from_angle(angle: f64) -> f64 {
    let angle = angle.rem_euclid(360.0);
    if angle < 180.0 {
        angle / 180.0 * 50.0
    } else {
        50.0 + (angle - 180.0) / 180.0 * 50.0
    }
}

/// Inverse of [`lightness_from_angle`], used to place the lightness marker.
pub fn angle_from_lightness(lightness: f64) -> f64 {
    let l = lightness.clamp(0.0, 100.0);
    if l < 50.0 {
        l / 50.0 * 180.0
    } else {
        180.0 + (l - 50.0) / 50.0 * 180.0
    }
}

// ---------------------------------------------------------------------------
// Canvas placement
// ---------------------------------------------------------------------------

/// Where the canvas is displayed, in client coordinates. The display size may
/// differ from the canvas size; pointer positions are scaled accordingly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    /// Translate client coordinates into canvas-local coordinates.
    pub fn to_local(&self, client_x: f64, client_y: f64, size: f64) -> (f64, f64) {
        let sx = if self.width > 0.0 { size / self.width } else { 1.0 };
        let sy = if self.height > 0.0 { size / self.height } else { 1.0 };
        ((client_x - self.left) * sx, (client_y - self.top) * sy)
    }

    pub fn contains(&self, client_x: f64, client_y: f64) -> bool {
        client_x >= self.left
            && client_x < self.left + self.width
            && client_y >= self.top
            && client_y < self.top + self.height
    }
}

/// A single touch contact in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub client_x: f64,
    pub client_y: f64,
}

// ---------------------------------------------------------------------------
// Picker
// ---------------------------------------------------------------------------

/// Which of the two brand colors the picker is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Primary,
    Secondary,
}

impl Channel {
    pub fn toggle(self) -> Self {
        match self {
            Channel::Primary => Channel::Secondary,
            Channel::Secondary => Channel::Primary,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Channel::Primary => "Primary",
            Channel::Secondary => "Secondary",
        }
    }
}

/// Outcome of a single pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Update {
    Lightness(f64),
    Hue(f64),
    Saturation(f64),
}

/// The open color wheel dialog.
///
/// Owns a working copy of the caller's colors. Nothing reaches the caller
/// until [`ColorWheelPicker::apply`].
#[derive(Debug, Clone)]
pub struct ColorWheelPicker {
    geometry: WheelGeometry,
    canvas: Option<CanvasBounds>,
    colors: MenuColors,
    active: Channel,
    hue: f64,
    lightness: f64,
    dragging: bool,
    /// Bumped on every color change so renderers can tell when to redraw.
    revision: u64,
}

impl ColorWheelPicker {
    /// Open the picker on `seed`, falling back to `defaults` for missing colors.
    pub fn open(seed: Option<&MenuColors>, defaults: &MenuColors, size: f64) -> Self {
        let colors = seed.unwrap_or(defaults).with_fallback(defaults);
        let mut picker = Self {
            geometry: WheelGeometry::new(size),
            canvas: None,
            colors,
            active: Channel::Primary,
            hue: 0.0,
            lightness: 50.0,
            dragging: false,
            revision: 0,
        };
        picker.seed_from_active();
        picker
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    pub fn colors(&self) -> &MenuColors {
        &self.colors
    }

    pub fn active(&self) -> Channel {
        self.active
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn active_color(&self) -> &str {
        self.colors.get(self.active)
    }

    /// Attach or detach the displayed canvas. While detached, pointer and
    /// touch handlers do nothing.
    pub fn set_canvas(&mut self, canvas: Option<CanvasBounds>) {
        self.canvas = canvas;
        if canvas.is_none() {
            self.dragging = false;
        }
    }

    pub fn canvas(&self) -> Option<CanvasBounds> {
        self.canvas
    }

    pub fn select_channel(&mut self, channel: Channel) {
        if self.active != channel {
            self.active = channel;
            self.seed_from_active();
            self.revision += 1;
        }
    }

    /// Take hue and lightness from the active channel's color.
    fn seed_from_active(&mut self) {
        if let Some(hsl) = HslColor::from_hex(self.active_color()) {
            self.hue = hsl.h;
            self.lightness = hsl.l;
        }
    }

    fn assign(&mut self, hsl: HslColor) {
        let hex = hsl.to_hex();
        debug!(channel = self.active.label(), %hex, "picker color changed");
        self.colors.set(self.active, hex);
        self.revision += 1;
    }

    // -----------------------------------------------------------------------
    // Pointer / touch
    // -----------------------------------------------------------------------

    pub fn pointer_down(&mut self, client_x: f64, client_y: f64) -> Option<Update> {
        if self.canvas.is_none() {
            return None;
        }
        self.dragging = true;
        self.interact(client_x, client_y)
    }

    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) -> Option<Update> {
        if !self.dragging {
            return None;
        }
        self.interact(client_x, client_y)
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    pub fn pointer_leave(&mut self) {
        self.dragging = false;
    }

    pub fn touch_start(&mut self, touches: &[TouchPoint]) -> Option<Update> {
        let t = touches.first()?;
        self.pointer_down(t.client_x, t.client_y)
    }

    pub fn touch_move(&mut self, touches: &[TouchPoint]) -> Option<Update> {
        let t = touches.first()?;
        self.pointer_move(t.client_x, t.client_y)
    }

    pub fn touch_end(&mut self) {
        self.pointer_up();
    }

    /// Apply one interaction at a client position.
    fn interact(&mut self, client_x: f64, client_y: f64) -> Option<Update> {
        let canvas = self.canvas?;
        let (x, y) = canvas.to_local(client_x, client_y, self.geometry.size);
        self.interact_local(x, y)
    }

    /// Apply one interaction at a canvas-local position.
    pub fn interact_local(&mut self, x: f64, y: f64) -> Option<Update> {
        let polar = self.geometry.polar(x, y);
        match self.geometry.ring_at(polar.distance)? {
            Ring::Lightness => {
                let ramp = (polar.angle + LIGHTNESS_RING_OFFSET).rem_euclid(360.0);
                self.lightness = lightness_from_angle(ramp);
                self.assign(HslColor::new(self.hue, 100.0, self.lightness));
                Some(Update::Lightness(self.lightness))
            }
            Ring::Hue => {
                self.hue = polar.angle;
                self.assign(HslColor::new(self.hue, 100.0, self.lightness));
                Some(Update::Hue(self.hue))
            }
            Ring::Saturation => {
                let saturation = self.geometry.saturation_at(polar.distance);
                self.assign(HslColor::new(self.hue, saturation, self.lightness));
                Some(Update::Saturation(saturation))
            }
        }
    }

    // -----------------------------------------------------------------------
    // Keyboard editing
    // -----------------------------------------------------------------------

    pub fn nudge_hue(&mut self, delta: f64) {
        self.hue = (self.hue + delta).rem_euclid(360.0);
        self.assign(HslColor::new(self.hue, 100.0, self.lightness));
    }

    pub fn nudge_lightness(&mut self, delta: f64) {
        self.lightness = (self.lightness + delta).clamp(0.0, 100.0);
        self.assign(HslColor::new(self.hue, 100.0, self.lightness));
    }

    /// Format `input` as a hex color and store it on the active channel.
    pub fn commit_hex_input(&mut self, input: &str) {
        let hex = color::format_hex(input);
        self.colors.set(self.active, hex);
        self.seed_from_active();
        self.revision += 1;
    }

    // -----------------------------------------------------------------------
    // Close
    // -----------------------------------------------------------------------

    /// Close the picker and hand the working colors to the caller.
    pub fn apply(self) -> MenuColors {
        self.colors
    }

    /// Close the picker, discarding every change.
    pub fn cancel(self) {}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
