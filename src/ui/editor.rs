use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::{App, InputMode};
use crate::color;
use crate::luminance;
use crate::ui::preview::MenuPreview;

const ACCENT: Color = Color::Rgb(255, 144, 0);
const DIM: Color = Color::Rgb(100, 100, 120);
const BORDER: Color = Color::Rgb(60, 60, 80);

pub fn render_editor(f: &mut Frame, app: &App) {
    let area = f.area();
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(10),   // form + preview
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(f, app, outer[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(outer[1]);

    render_form(f, app, main[0]);

    let preview_block = Block::default()
        .title(Span::styled(" Diner View ", Style::default().fg(ACCENT)))
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(BORDER));
    let preview_inner = preview_block.inner(main[1]);
    f.render_widget(preview_block, main[1]);
    let colors = app.menu_colors();
    f.render_widget(
        MenuPreview {
            title: &app.draft.title,
            colors: &colors,
        },
        preview_inner,
    );

    render_footer(f, app, outer[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(" Menu: ", Style::default().fg(DIM)),
        Span::styled(
            &app.draft.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if app.unsaved {
        spans.push(Span::styled("  [modified]", Style::default().fg(ACCENT)));
    }
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Menu ", Style::default().fg(ACCENT)))
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(BORDER));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let colors = app.menu_colors();
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Title", Style::default().fg(DIM))));
    let title_line = if app.input_mode == InputMode::EditTitle {
        Line::from(vec![
            Span::styled(" > ", Style::default().fg(ACCENT)),
            Span::styled(
                &app.title_input,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(Span::styled(
            format!("   {}", app.draft.title),
            Style::default().fg(Color::White),
        ))
    };
    lines.push(title_line);
    lines.push(Line::from(""));

    let source = if app.draft.color.is_some() {
        "custom"
    } else {
        "defaults"
    };
    lines.push(Line::from(vec![
        Span::styled(" Colors ", Style::default().fg(DIM)),
        Span::styled(format!("({})", source), Style::default().fg(DIM)),
    ]));

    for (label, hex) in [("Primary", &colors.primary), ("Secondary", &colors.secondary)] {
        let swatch = color::to_ratatui(hex, Color::Reset);
        let lum = luminance::luminance(Some(hex.as_str()));
        let shade = luminance::classify(Some(hex.as_str()));
        lines.push(Line::from(vec![
            Span::styled(format!("   {:<10}", label), Style::default().fg(Color::Gray)),
            Span::styled("    ", Style::default().bg(swatch)),
            Span::styled(format!(" {}", hex), Style::default().fg(Color::White)),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "   luminance {:.0}, {} background, {} text",
                lum,
                shade.as_str(),
                match shade {
                    luminance::Shade::Light => "black",
                    luminance::Shade::Dark => "white",
                }
            ),
            Style::default().fg(DIM),
        )));
    }

    f.render_widget(Paragraph::new(lines), inner);

    if app.input_mode == InputMode::EditTitle {
        let cursor_x = inner.x + 3 + app.title_input.width() as u16;
        let cursor_x = cursor_x.min(inner.right().saturating_sub(1));
        f.set_cursor_position(Position::new(cursor_x, inner.y + 1));
    }
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.status_message.as_ref() {
        let line = Line::from(Span::styled(format!(" {}", msg), Style::default().fg(ACCENT)));
        f.render_widget(Paragraph::new(line), area);
        return;
    }

    let spans = if app.input_mode == InputMode::EditTitle {
        vec![
            Span::styled(" Enter", Style::default().fg(ACCENT)),
            Span::styled(":save title ", Style::default().fg(DIM)),
            Span::styled("Esc", Style::default().fg(ACCENT)),
            Span::styled(":cancel", Style::default().fg(DIM)),
        ]
    } else {
        vec![
            Span::styled(" c", Style::default().fg(ACCENT)),
            Span::styled(":colors ", Style::default().fg(DIM)),
            Span::styled("e", Style::default().fg(ACCENT)),
            Span::styled(":title ", Style::default().fg(DIM)),
            Span::styled("r", Style::default().fg(ACCENT)),
            Span::styled(":reset colors ", Style::default().fg(DIM)),
            Span::styled("s", Style::default().fg(ACCENT)),
            Span::styled(":save ", Style::default().fg(DIM)),
            Span::styled("?", Style::default().fg(ACCENT)),
            Span::styled(":help ", Style::default().fg(DIM)),
            Span::styled("q", Style::default().fg(ACCENT)),
            Span::styled(":quit", Style::default().fg(DIM)),
        ]
    };
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
