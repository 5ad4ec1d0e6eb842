use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, Screen};

const ACCENT: Color = Color::Rgb(255, 144, 0);
const DIM: Color = Color::Rgb(120, 120, 140);

pub fn render_help(f: &mut Frame, app: &App) {
    let area = f.area();
    let width = area.width.saturating_sub(6).clamp(40, 80);
    let height = area.height.saturating_sub(4).clamp(12, 24);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let popup = Rect::new(x, y, width, height).intersection(area);

    f.render_widget(Clear, popup);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(
                "Commands",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  (current: {})", screen_label(&app.screen)),
                Style::default().fg(DIM),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("Global", Style::default().fg(ACCENT))),
        Line::from("  ?: toggle help  |  Ctrl+C: quit"),
        Line::from(""),
        Line::from(Span::styled("Menu", Style::default().fg(ACCENT))),
        Line::from("  c/Enter: pick colors  |  e: edit title  |  r: reset colors"),
        Line::from("  s: save draft  |  q/Esc: quit"),
        Line::from(""),
        Line::from(Span::styled("Color Wheel", Style::default().fg(ACCENT))),
        Line::from("  mouse: drag on the outer ring (lightness), middle ring (hue)"),
        Line::from("         or center disk (saturation)"),
        Line::from("  Tab: primary/secondary  |  1/2: select channel"),
        Line::from("  Left/Right: hue, Shift x10  |  Up/Down: lightness"),
        Line::from("  #: type hex  |  Enter/a: apply  |  Esc: cancel"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(DIM),
        )),
    ];

    let max_body_lines = height.saturating_sub(2) as usize;
    if lines.len() > max_body_lines {
        lines.truncate(max_body_lines);
    }

    let block = Block::default()
        .title(Span::styled(" Help ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    f.render_widget(paragraph, popup);
}

fn screen_label(screen: &Screen) -> &'static str {
    match screen {
        Screen::Editor => "menu",
        Screen::Picker => "color wheel",
    }
}
