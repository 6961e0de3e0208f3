// SpellPixel
// TUI showcase with an animated shifting drop-down navigation

// IMPORTS ------------------>>

use anyhow::Result;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use spellpixel::config_validation::load_and_validate_config;
use spellpixel::constants::TICK_MS;
use spellpixel::{render_scene, App, EventHandler};

//--------------------------------------------------------<<

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    // Load configuration (falls back to built-in defaults with a warning)
    let config = load_and_validate_config(None);
    let mut app = App::new(config)?;
    let mouse_enabled = app.settings.ui.mouse_enabled;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                           MAIN LOOP                                            │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick(terminal.size()?);

        terminal.draw(|f| render_scene(f, app))?;

        // Take the pending indicator measurement against the rects this
        // draw just published, and expire finished animations
        app.after_render(Instant::now());

        // The poll timeout doubles as the animation tick
        if event::poll(Duration::from_millis(TICK_MS))? {
            let app_event = EventHandler::handle(event::read()?);
            app.handle_event(app_event);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
