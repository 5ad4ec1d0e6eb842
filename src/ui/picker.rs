use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, InputMode};
use crate::color;
use crate::luminance;
use crate::ui::wheel::WheelCanvas;
use crate::wheel::{Channel, ColorWheelPicker};

const ACCENT: Color = Color::Rgb(255, 144, 0);
const DIM: Color = Color::Rgb(100, 100, 120);
const BORDER: Color = Color::Rgb(60, 60, 80);

/// Layout rectangles for mouse hit testing.
pub struct PickerLayout {
    pub wheel_inner: Rect,
    pub info_inner: Rect,
}

/// Compute the layout rectangles for the picker screen.
pub fn get_layout_rects(area: Rect) -> PickerLayout {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(outer[1]);

    let wheel_block = Block::default().borders(Borders::RIGHT);
    PickerLayout {
        wheel_inner: wheel_block.inner(columns[0]),
        info_inner: columns[1].inner(ratatui::layout::Margin::new(1, 0)),
    }
}

pub fn render_picker(f: &mut Frame, app: &App) {
    let picker = match app.picker.as_ref() {
        Some(p) => p,
        None => return,
    };

    let area = f.area();
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area);

    render_top_bar(f, picker, outer[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(outer[1]);
    let wheel_block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(BORDER))
        .title(Span::styled(" Color Wheel ", Style::default().fg(ACCENT)));
    f.render_widget(wheel_block, columns[0]);

    let layout = get_layout_rects(area);
    if let Some(raster) = app.wheel.as_ref() {
        f.render_widget(WheelCanvas { raster }, layout.wheel_inner);
    }
    render_info(f, app, picker, layout.info_inner);
    render_bottom_bar(f, app, outer[2]);
}

fn render_top_bar(f: &mut Frame, picker: &ColorWheelPicker, area: Rect) {
    let mut spans = vec![Span::styled(" Brand Colors: ", Style::default().fg(DIM))];
    for channel in [Channel::Primary, Channel::Secondary] {
        let active = picker.active() == channel;
        let style = if active {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIM)
        };
        let marker = if active { ">" } else { " " };
        spans.push(Span::styled(format!("{}{} ", marker, channel.label()), style));
    }
    if picker.is_dragging() {
        spans.push(Span::styled(
            "  [DRAG]",
            Style::default()
                .fg(Color::Rgb(255, 150, 50))
                .add_modifier(Modifier::BOLD),
        ));
    }
    let bar = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(bar, area);
}

fn render_info(f: &mut Frame, app: &App, picker: &ColorWheelPicker, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for channel in [Channel::Primary, Channel::Secondary] {
        let hex = picker.colors().get(channel);
        let swatch = color::to_ratatui(hex, Color::Reset);
        let shade = luminance::classify(Some(hex));
        let label_style = if picker.active() == channel {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(channel.label(), label_style)));
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<9}", hex),
                Style::default().fg(shade.foreground()).bg(swatch),
            ),
            Span::styled(format!(" {}", shade.as_str()), Style::default().fg(DIM)),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("Hue:       ", Style::default().fg(DIM)),
        Span::styled(
            format!("{:.0}\u{00b0}", picker.hue()),
            Style::default().fg(Color::White),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Lightness: ", Style::default().fg(DIM)),
        Span::styled(
            format!("{:.0}%", picker.lightness()),
            Style::default().fg(Color::White),
        ),
    ]));
    lines.push(Line::from(""));

    if app.input_mode == InputMode::HexInput {
        lines.push(Line::from(vec![
            Span::styled("Hex: #", Style::default().fg(Color::White)),
            Span::styled(
                &app.hex_input,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("_", Style::default().fg(ACCENT)),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn render_bottom_bar(f: &mut Frame, app: &App, area: Rect) {
    let spans = if app.input_mode == InputMode::HexInput {
        vec![
            Span::styled(" Enter", Style::default().fg(ACCENT)),
            Span::styled(":set ", Style::default().fg(DIM)),
            Span::styled("Esc", Style::default().fg(ACCENT)),
            Span::styled(":back", Style::default().fg(DIM)),
        ]
    } else {
        vec![
            Span::styled(" drag", Style::default().fg(ACCENT)),
            Span::styled(":pick ", Style::default().fg(DIM)),
            Span::styled("Tab", Style::default().fg(ACCENT)),
            Span::styled(":primary/secondary ", Style::default().fg(DIM)),
            Span::styled("\u{2190}/\u{2192}", Style::default().fg(ACCENT)),
            Span::styled(":hue ", Style::default().fg(DIM)),
            Span::styled("\u{2191}/\u{2193}", Style::default().fg(ACCENT)),
            Span::styled(":lightness ", Style::default().fg(DIM)),
            Span::styled("#", Style::default().fg(ACCENT)),
            Span::styled(":hex ", Style::default().fg(DIM)),
            Span::styled("Enter", Style::default().fg(ACCENT)),
            Span::styled(":apply ", Style::default().fg(DIM)),
            Span::styled("Esc", Style::default().fg(ACCENT)),
            Span::styled(":cancel", Style::default().fg(DIM)),
        ]
    };
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
