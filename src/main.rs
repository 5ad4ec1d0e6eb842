mod app;
mod cli;
mod color;
mod config;
mod debounce;
mod logging;
mod luminance;
mod menu;
mod render;
mod ui;
mod wheel;

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{error, info};

use app::{App, InputMode, PointerEvent, Screen};
use cli::{Cli, Commands, ConfigAction};
use color::HslColor;
use wheel::Channel;

/// Upper bound on how long the loop blocks waiting for input.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let result = match cli.command {
        None => run_tui(),
        Some(cmd) => dispatch_command(cmd),
    };

    if let Err(e) = result {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn dispatch_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Classify { color } => {
            let lum = luminance::luminance(Some(color.as_str()));
            let shade = luminance::classify(Some(color.as_str()));
            println!("{} (luminance {:.1})", shade.as_str(), lum);
        }
        Commands::Hex {
            hue,
            saturation,
            lightness,
        } => {
            println!("{}", HslColor::new(hue, saturation, lightness).to_hex());
        }
        Commands::Config { action } => handle_config(action)?,
    }
    Ok(())
}

fn handle_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = config::load_config();
            println!("Config file:        {}", config::config_path().display());
            println!("default-primary:    {}", config.default_primary);
            println!("default-secondary:  {}", config.default_secondary);
            println!("redraw-debounce-ms: {}", config.redraw_debounce_ms);
        }
        ConfigAction::Set { key, value } => {
            let mut config = config::load_config();
            config.set(&key, &value)?;
            config::save_config(&config)?;
            println!("Set {}", key);
        }
    }
    Ok(())
}

fn run_tui() -> Result<()> {
    let config = config::load_config();
    let draft = menu::load_draft();
    info!(title = %draft.title, "starting editor");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config, draft);
    let result = run_app(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to restore cursor")?;

    result.context("Terminal error")
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), io::Error> {
    loop {
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        if app.screen == Screen::Picker {
            app.set_wheel_area(Some(ui::picker::get_layout_rects(area).wheel_inner));
        } else {
            app.set_wheel_area(None);
        }
        app.tick(Instant::now());

        terminal.draw(|f| {
            match app.screen {
                Screen::Editor => ui::render_editor(f, app),
                Screen::Picker => ui::render_picker(f, app),
            }
            if app.show_help {
                ui::render_help(f, app);
            }
        })?;

        // Wake early for a pending wheel redraw.
        let timeout = app
            .next_deadline(Instant::now())
            .map_or(POLL_INTERVAL, |d| d.min(POLL_INTERVAL));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
                Event::Mouse(mouse) => handle_mouse(app, mouse),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.show_help {
        app.show_help = false;
        return;
    }

    app.status_message = None;

    match app.screen {
        Screen::Editor => handle_editor_input(app, key.code),
        Screen::Picker => handle_picker_input(app, key),
    }
}

fn handle_editor_input(app: &mut App, key: KeyCode) {
    match app.input_mode {
        InputMode::EditTitle => match key {
            KeyCode::Enter => app.commit_title(),
            KeyCode::Esc => app.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                app.title_input.pop();
            }
            KeyCode::Char(c) => app.title_input.push(c),
            _ => {}
        },
        _ => match key {
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            KeyCode::Char('c') | KeyCode::Enter => app.open_picker(),
            KeyCode::Char('e') => app.start_title_edit(),
            KeyCode::Char('r') => app.reset_colors(),
            KeyCode::Char('s') => app.save(),
            KeyCode::Char('?') => app.show_help = true,
            _ => {}
        },
    }
}

fn handle_picker_input(app: &mut App, key: KeyEvent) {
    if app.input_mode == InputMode::HexInput {
        match key.code {
            KeyCode::Enter => app.commit_hex_input(),
            KeyCode::Esc => app.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                app.hex_input.pop();
            }
            KeyCode::Char(c) if c.is_ascii_hexdigit() && app.hex_input.len() < 6 => {
                app.hex_input.push(c)
            }
            _ => {}
        }
        return;
    }

    let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
        10.0
    } else {
        1.0
    };

    match key.code {
        KeyCode::Enter | KeyCode::Char('a') => app.apply_picker(),
        KeyCode::Esc | KeyCode::Char('q') => app.cancel_picker(),
        KeyCode::Tab | KeyCode::BackTab => app.switch_channel(),
        KeyCode::Char('1') => app.select_channel(Channel::Primary),
        KeyCode::Char('2') => app.select_channel(Channel::Secondary),
        KeyCode::Char('#') | KeyCode::Char('x') => app.start_hex_input(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            if let Some(picker) = app.picker.as_mut() {
                match key.code {
                    KeyCode::Left => picker.nudge_hue(-step),
                    KeyCode::Right => picker.nudge_hue(step),
                    KeyCode::Up => picker.nudge_lightness(step),
                    _ => picker.nudge_lightness(-step),
                }
            }
        }
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.screen != Screen::Picker || app.show_help {
        return;
    }
    let event = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerEvent::Down {
            column: mouse.column,
            row: mouse.row,
        },
        MouseEventKind::Drag(MouseButton::Left) => PointerEvent::Drag {
            column: mouse.column,
            row: mouse.row,
        },
        MouseEventKind::Up(MouseButton::Left) => PointerEvent::Up,
        _ => return,
    };
    app.handle_pointer(event);
}
