use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::color;
use crate::luminance;
use crate::menu::MenuColors;

const CATEGORIES: &[&str] = &["Starters", "Mains", "Desserts", "Drinks"];

const ITEMS: &[(&str, &str)] = &[
    ("Tomato bruschetta", "6.50"),
    ("Grilled halloumi", "8.00"),
    ("Soup of the day", "5.50"),
    ("Garlic flatbread", "4.00"),
];

/// How a diner would see the menu: a header in the primary color and a
/// category bar in the secondary color, each with text picked for contrast.
pub struct MenuPreview<'a> {
    pub title: &'a str,
    pub colors: &'a MenuColors,
}

impl<'a> Widget for MenuPreview<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let primary = color::to_ratatui(&self.colors.primary, Color::White);
        let secondary = color::to_ratatui(&self.colors.secondary, Color::White);
        let on_primary = luminance::foreground_for(Some(self.colors.primary.as_str()));
        let on_secondary = luminance::foreground_for(Some(self.colors.secondary.as_str()));

        let mut y = area.y;
        let bottom = area.y + area.height;

        // Header band, three rows tall
        for _ in 0..3 {
            if y >= bottom {
                return;
            }
            for x in area.x..area.x + area.width {
                buf[(x, y)].set_style(Style::default().bg(primary));
            }
            y += 1;
        }
        let title_row = area.y + 1;
        let line = Line::from(Span::styled(
            format!(" {} ", self.title),
            Style::default()
                .fg(on_primary)
                .bg(primary)
                .add_modifier(Modifier::BOLD),
        ));
        buf.set_line(area.x + 1, title_row, &line, area.width.saturating_sub(2));

        // Category navigation
        if y < bottom {
            for x in area.x..area.x + area.width {
                buf[(x, y)].set_style(Style::default().bg(secondary));
            }
            let mut spans = Vec::new();
            for (i, name) in CATEGORIES.iter().enumerate() {
                let style = if i == 0 {
                    Style::default()
                        .fg(on_secondary)
                        .bg(secondary)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(on_secondary).bg(secondary)
                };
                spans.push(Span::styled(format!(" {} ", name), style));
            }
            buf.set_line(area.x, y, &Line::from(spans), area.width);
            y += 1;
        }

        // Spacer
        if y < bottom {
            y += 1;
        }

        for (name, price) in ITEMS {
            if y >= bottom {
                break;
            }
            let width = area.width as usize;
            let dots = width.saturating_sub(name.len() + price.len() + 4);
            let line = Line::from(vec![
                Span::raw(format!(" {} ", name)),
                Span::styled(".".repeat(dots), Style::default().fg(Color::DarkGray)),
                Span::styled(format!(" {}", price), Style::default().fg(primary)),
            ]);
            buf.set_line(area.x, y, &line, area.width);
            y += 1;
        }
    }
}
