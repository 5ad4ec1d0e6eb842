use std::time::Instant;

use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::config::{self, AppConfig};
use crate::debounce::Debouncer;
use crate::menu::{self, MenuColors, MenuDraft};
use crate::render;
use crate::ui::wheel::{self, WheelRaster};
use crate::wheel::{Channel, ColorWheelPicker};

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Editor,
    Picker,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    EditTitle,
    HexInput,
}

/// Mouse actions the event loop forwards to the app, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { column: u16, row: u16 },
    Drag { column: u16, row: u16 },
    Up,
}

pub struct App {
    pub screen: Screen,
    pub input_mode: InputMode,
    pub config: AppConfig,
    pub draft: MenuDraft,
    pub picker: Option<ColorWheelPicker>,
    pub title_input: String,
    pub hex_input: String,
    pub status_message: Option<String>,
    pub unsaved: bool,
    pub show_help: bool,
    pub should_quit: bool,
    /// Wheel pixels as last drawn; rebuilt after the redraw debounce.
    pub wheel: Option<WheelRaster>,
    wheel_area: Option<Rect>,
    redraw: Debouncer,
    seen_revision: u64,
}

impl App {
    pub fn new(config: AppConfig, draft: MenuDraft) -> Self {
        let redraw = Debouncer::new(config.redraw_debounce());
        Self {
            screen: Screen::Editor,
            input_mode: InputMode::Normal,
            config,
            draft,
            picker: None,
            title_input: String::new(),
            hex_input: String::new(),
            status_message: None,
            unsaved: false,
            show_help: false,
            should_quit: false,
            wheel: None,
            wheel_area: None,
            redraw,
            seen_revision: 0,
        }
    }

    /// Colors the editor and preview display right now.
    pub fn menu_colors(&self) -> MenuColors {
        self.draft.display_colors(&self.config.default_colors())
    }

    // -----------------------------------------------------------------------
    // Title editing
    // -----------------------------------------------------------------------

    pub fn start_title_edit(&mut self) {
        self.title_input = self.draft.title.clone();
        self.input_mode = InputMode::EditTitle;
    }

    pub fn commit_title(&mut self) {
        let title = self.title_input.trim();
        if title.is_empty() {
            self.status_message = Some("Title cannot be empty".into());
        } else if title != self.draft.title {
            self.draft.title = title.to_string();
            self.unsaved = true;
        }
        self.input_mode = InputMode::Normal;
    }

    // -----------------------------------------------------------------------
    // Picker lifecycle
    // -----------------------------------------------------------------------

    pub fn open_picker(&mut self) {
        let defaults = self.config.default_colors();
        let seed = self.draft.color.as_ref();
        let picker = ColorWheelPicker::open(seed, &defaults, config::CANVAS_SIZE);
        let colors = picker.colors();
        info!(primary = %colors.primary, secondary = %colors.secondary, "opened picker");
        self.seen_revision = picker.revision();
        self.picker = Some(picker);
        self.wheel = None;
        self.wheel_area = None;
        self.input_mode = InputMode::Normal;
        self.screen = Screen::Picker;
    }

    /// Close the picker and store its colors on the draft.
    pub fn apply_picker(&mut self) {
        if let Some(picker) = self.picker.take() {
            let colors = picker.apply();
            info!(
                primary = %colors.primary,
                secondary = %colors.secondary,
                "applied picker colors"
            );
            if self.draft.color.as_ref() != Some(&colors) {
                self.draft.color = Some(colors);
                self.unsaved = true;
            }
            self.status_message = Some("Colors applied".into());
        }
        self.close_picker();
    }

    /// Close the picker, leaving the draft untouched.
    pub fn cancel_picker(&mut self) {
        if let Some(picker) = self.picker.take() {
            picker.cancel();
            debug!("picker cancelled");
        }
        self.close_picker();
    }

    fn close_picker(&mut self) {
        self.redraw.cancel();
        self.wheel = None;
        self.wheel_area = None;
        self.input_mode = InputMode::Normal;
        self.screen = Screen::Editor;
    }

    pub fn switch_channel(&mut self) {
        if let Some(picker) = self.picker.as_mut() {
            picker.select_channel(picker.active().toggle());
        }
    }

    pub fn select_channel(&mut self, channel: Channel) {
        if let Some(picker) = self.picker.as_mut() {
            picker.select_channel(channel);
        }
    }

    pub fn start_hex_input(&mut self) {
        if let Some(picker) = self.picker.as_ref() {
            self.hex_input = picker.active_color().trim_start_matches('#').to_string();
            self.input_mode = InputMode::HexInput;
        }
    }

    pub fn commit_hex_input(&mut self) {
        if let Some(picker) = self.picker.as_mut() {
            picker.commit_hex_input(&self.hex_input);
        }
        self.input_mode = InputMode::Normal;
    }

    /// Reset the draft's colors so the configured defaults apply again.
    pub fn reset_colors(&mut self) {
        if self.draft.color.take().is_some() {
            self.unsaved = true;
            self.status_message = Some("Colors reset to defaults".into());
        }
    }

    pub fn save(&mut self) {
        match menu::save_draft(&self.draft) {
            Ok(()) => {
                self.unsaved = false;
                self.status_message = Some(format!(
                    "Saved to {}",
                    config::draft_path().display()
                ));
            }
            Err(e) => self.status_message = Some(format!("Error: {:#}", e)),
        }
    }

    // -----------------------------------------------------------------------
    // Wheel canvas
    // -----------------------------------------------------------------------

    /// Tell the app where the wheel is on screen. `None` detaches the canvas.
    pub fn set_wheel_area(&mut self, area: Option<Rect>) {
        if self.wheel_area == area {
            return;
        }
        self.wheel_area = area;
        self.wheel = None;
        if let Some(picker) = self.picker.as_mut() {
            picker.set_canvas(area.and_then(wheel::canvas_bounds));
        }
    }

    /// Forward a mouse event to the picker.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        match event {
            PointerEvent::Down { column, row } => {
                let (x, y) = wheel::client_point(column, row);
                if picker.canvas().is_some_and(|c| c.contains(x, y)) {
                    picker.pointer_down(x, y);
                }
            }
            PointerEvent::Drag { column, row } => {
                let (x, y) = wheel::client_point(column, row);
                let inside = picker.canvas().is_some_and(|c| c.contains(x, y));
                if inside {
                    picker.pointer_move(x, y);
                } else {
                    picker.pointer_leave();
                }
            }
            PointerEvent::Up => picker.pointer_up(),
        }
    }

    /// Advance timers: schedule a wheel redraw after picker changes and
    /// rebuild the raster once the debounce fires.
    pub fn tick(&mut self, now: Instant) {
        let (Some(picker), Some(area)) = (self.picker.as_ref(), self.wheel_area) else {
            return;
        };

        if picker.revision() != self.seen_revision {
            self.seen_revision = picker.revision();
            self.redraw.schedule(now);
        }

        if self.wheel.is_none() || self.redraw.fire(now) {
            let commands = render::render_picker(picker);
            self.wheel = Some(WheelRaster::rasterize(&commands, area, config::CANVAS_SIZE));
            self.redraw.cancel();
        }
    }

    /// Time until the next pending redraw, if one is scheduled.
    pub fn next_deadline(&self, now: Instant) -> Option<std::time::Duration> {
        self.redraw.remaining(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app() -> App {
        App::new(AppConfig::default(), MenuDraft::default())
    }

    #[test]
    fn picker_seeds_from_defaults_when_unset() {
        let mut app = app();
        app.open_picker();
        assert_eq!(app.screen, Screen::Picker);
        let picker = app.picker.as_ref().unwrap();
        assert_eq!(picker.colors(), &MenuColors::new("#FF9000", "#FFFFFF"));
    }

    #[test]
    fn draft_untouched_until_apply() {
        let mut app = app();
        app.draft.color = Some(MenuColors::new("#FF6B35", "#FFFFFF"));
        app.open_picker();
        app.picker.as_mut().unwrap().nudge_hue(90.0);
        assert_eq!(app.draft.color.as_ref().unwrap().primary, "#FF6B35");

        app.apply_picker();
        assert_eq!(app.screen, Screen::Editor);
        assert_ne!(app.draft.color.as_ref().unwrap().primary, "#FF6B35");
        assert!(app.unsaved);
    }

    #[test]
    fn cancel_keeps_prior_colors() {
        let mut app = app();
        app.draft.color = Some(MenuColors::new("#FF6B35", "#FFFFFF"));
        app.open_picker();
        app.picker.as_mut().unwrap().nudge_lightness(-20.0);
        app.cancel_picker();
        assert!(app.picker.is_none());
        assert_eq!(
            app.draft.color,
            Some(MenuColors::new("#FF6B35", "#FFFFFF"))
        );
        assert!(!app.unsaved);
    }

    #[test]
    fn mouse_drag_on_wheel_changes_hue() {
        let mut app = app();
        app.open_picker();
        // 40x20 cells gives a 40x40 canvas at origin, 7 canvas units per cell.
        app.set_wheel_area(Some(Rect::new(0, 0, 40, 20)));

        // Column 31 on the middle row sits on the hue ring, pointing right.
        app.handle_pointer(PointerEvent::Down { column: 31, row: 9 });
        let picker = app.picker.as_ref().unwrap();
        assert!(picker.is_dragging());
        assert!(picker.hue() < 10.0 || picker.hue() > 350.0);

        app.handle_pointer(PointerEvent::Up);
        assert!(!app.picker.as_ref().unwrap().is_dragging());
    }

    #[test]
    fn drag_outside_canvas_ends_drag() {
        let mut app = app();
        app.open_picker();
        app.set_wheel_area(Some(Rect::new(0, 0, 40, 20)));
        app.handle_pointer(PointerEvent::Down { column: 20, row: 10 });
        app.handle_pointer(PointerEvent::Drag { column: 45, row: 10 });
        assert!(!app.picker.as_ref().unwrap().is_dragging());
    }

    #[test]
    fn press_outside_canvas_does_not_start_drag() {
        let mut app = app();
        app.open_picker();
        app.set_wheel_area(Some(Rect::new(0, 0, 40, 20)));
        app.handle_pointer(PointerEvent::Down { column: 60, row: 10 });
        assert!(!app.picker.as_ref().unwrap().is_dragging());

        app.handle_pointer(PointerEvent::Drag { column: 20, row: 10 });
        let picker = app.picker.as_ref().unwrap();
        assert!(!picker.is_dragging());
        assert_eq!(picker.colors().primary, "#FF9000");
    }

    #[test]
    fn hex_input_starts_from_normalized_seed() {
        let mut app = app();
        app.draft.color = Some(MenuColors::new("rgb(1, 2, 3)", "#FFFFFF"));
        app.open_picker();
        app.start_hex_input();
        assert_eq!(app.hex_input, "010203");
    }

    #[test]
    fn redraw_is_debounced() {
        let mut app = app();
        app.open_picker();
        app.set_wheel_area(Some(Rect::new(0, 0, 20, 10)));
        let start = Instant::now();
        app.tick(start);
        assert!(app.wheel.is_some());

        app.picker.as_mut().unwrap().nudge_hue(10.0);
        app.tick(start);
        assert!(app.next_deadline(start).is_some());

        app.tick(start + Duration::from_millis(100));
        assert!(app.next_deadline(start + Duration::from_millis(100)).is_none());
    }

    #[test]
    fn hex_input_round_trip() {
        let mut app = app();
        app.open_picker();
        app.start_hex_input();
        assert_eq!(app.hex_input, "FF9000");
        app.hex_input = "12ab".into();
        app.commit_hex_input();
        assert_eq!(app.picker.as_ref().unwrap().colors().primary, "#12ab00");
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn title_edit() {
        let mut app = app();
        app.start_title_edit();
        app.title_input = "  Dinner  ".into();
        app.commit_title();
        assert_eq!(app.draft.title, "Dinner");
        assert!(app.unsaved);

        app.start_title_edit();
        app.title_input = "   ".into();
        app.commit_title();
        assert_eq!(app.draft.title, "Dinner");
        assert!(app.status_message.is_some());
    }

    #[test]
    fn reset_colors_clears_draft_colors() {
        let mut app = app();
        app.draft.color = Some(MenuColors::new("#000000", "#000000"));
        app.reset_colors();
        assert!(app.draft.color.is_none());
        assert_eq!(app.menu_colors(), MenuColors::new("#FF9000", "#FFFFFF"));
    }
}
