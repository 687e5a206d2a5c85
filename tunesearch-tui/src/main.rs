mod app;
mod config;
mod keys;
mod log_buffer;
mod style;
mod ui;

use std::time::{Duration, Instant};

use app::{App, Destination, Tab};
use config::Config;
use keys::Action;
use log_buffer::{LogBuffer, LogBufferLayer};
use tunesearch_core as tc;
use ui::search::{SearchAction, SearchFocus};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

fn main() -> anyhow::Result<()> {
    // Create log buffer for TUI display instead of stdout.
    let log_buffer = LogBuffer::new();

    // Also log to a file, since stdout belongs to the terminal UI.
    let log_file = std::fs::File::create("tunesearch-tui.log")?;
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(LogBufferLayer::new(log_buffer.clone()))
        .with(file_layer)
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tunesearch=info")),
        )
        .init();

    let config = Config::load();

    let logic = tc::Logic::new(tc::LogicArgs {
        endpoint: config.endpoint.clone(),
    })?;

    let mut app = App::new(config, logic, log_buffer);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(app.config.general.tick_rate_ms);
    let result = run_app(&mut terminal, &mut app, tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("exiting");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> anyhow::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| ui::draw(frame, app))?;
            app.needs_redraw = false;
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            // Process the first event, then drain all remaining queued events.
            let process_event = |evt: Event, app: &mut App| match evt {
                Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                    handle_key_event(app, &key);
                    app.needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    app.needs_redraw = true;
                }
                _ => {}
            };

            process_event(event::read()?, app);
            while event::poll(Duration::ZERO)? {
                process_event(event::read()?, app);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key_event(app: &mut App, key: &event::KeyEvent) {
    if let Some(action) = keys::global_action(key) {
        match action {
            Action::Quit => app.should_quit = true,
            Action::Logs => app.toggle_logs(),
            _ => {}
        }
        return;
    }

    // Handle quit confirmation dialog
    if app.quit_confirming {
        match keys::quit_confirm_action(key) {
            Action::Select => app.should_quit = true,
            _ => app.quit_confirming = false,
        }
        return;
    }

    if app.drawer.is_some() {
        if let Some(action) = keys::drawer_action(key) {
            app.handle_drawer_action(action);
        }
        return;
    }

    if app.logs_open {
        if let Some(action) = keys::logs_action(key) {
            match action {
                Action::Back => app.toggle_logs(),
                action => ui::logs::handle_key(&mut app.logs, action),
            }
        }
        return;
    }

    let action = match (app.destination, app.tab) {
        (Destination::About, _) | (Destination::Search, Tab::Home) => keys::page_action(key),
        (Destination::Search, Tab::Search) => {
            if app.search.detail.is_some() {
                keys::detail_action(key)
            } else if app.search.focus == SearchFocus::Results {
                keys::results_action(key)
            } else {
                keys::search_input_action(key)
            }
        }
    };
    let Some(action) = action else {
        return;
    };

    match action {
        Action::Quit => app.quit_confirming = true,
        Action::Menu => app.open_drawer(),
        Action::NextTab => app.switch_tab(1),
        Action::PreviousTab => app.switch_tab(-1),
        action if app.destination == Destination::Search && app.tab == Tab::Search => {
            let search_action = {
                let state = app.logic.get_state();
                let state = state.read().unwrap();
                ui::search::handle_key(&mut app.search, &state, action)
            };
            if let Some(SearchAction::Submit(term)) = search_action {
                app.logic.submit(term);
            }
        }
        _ => {}
    }
}
