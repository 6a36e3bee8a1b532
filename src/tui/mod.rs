pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use event::{Event, EventHandler};

pub async fn run_tui(mut app: App) -> anyhow::Result<App> {
    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture)?;

    let mut events = EventHandler::new(250); // 250ms tick for flash expiry

    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Mouse(mouse) => handle_mouse_event(&mut app, mouse),
            Event::Tick => app.update_flash(),
        }

        if app.should_quit {
            break;
        }
    }

    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
    ratatui::restore();

    Ok(app)
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Normal => match key.code {
            // Quit
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true
            }

            // Navigation; moves the grabbed row when one is held
            KeyCode::Char('j') | KeyCode::Down => app.move_down(),
            KeyCode::Char('k') | KeyCode::Up => app.move_up(),

            // Grab / release the row under the cursor
            KeyCode::Char(' ') => app.toggle_grab(),

            KeyCode::Char('s') => app.submit(),
            KeyCode::Char('n') => app.new_round(),
            KeyCode::Char('c') => app.share(),

            // Scoring rules overlay
            KeyCode::Char('i') => app.toggle_scoring_info(),

            // Help
            KeyCode::Char('?') => app.show_help(),

            _ => {}
        },
        app::InputMode::ScoringInfo => match key.code {
            KeyCode::Esc | KeyCode::Char('i') => app.dismiss_overlay(),
            _ => {}
        },
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_overlay();
        }
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if app.input_mode != app::InputMode::Normal {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.mouse_down(mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => app.mouse_drag(mouse.row),
        MouseEventKind::Up(MouseButton::Left) => app.mouse_up(),
        MouseEventKind::ScrollDown => app.move_down(),
        MouseEventKind::ScrollUp => app.move_up(),
        _ => {}
    }
}
