//! Terminal lifecycle, event loop, and cleanup for the help-desk panel.

mod actions;
mod app;
mod config;
mod events;
mod exchange;
mod fetcher;
mod state;
mod transcript;
mod ui;

use std::io;
use std::sync::mpsc;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use app::App;
use config::Config;
use events::{key_to_action, TICK_RATE};
use exchange::ExchangeWorker;
use fetcher::ReplyClient;

fn main() -> Result<()> {
    // Initialise structured logging (RUST_LOG controls the filter).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("helpdesk_tui=info".parse()?),
        )
        .with_target(false)
        .init();

    let config = Config::from_env()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let (tx, rx) = mpsc::channel();
    let worker = ExchangeWorker::new(
        runtime.handle().clone(),
        ReplyClient::new(config.endpoint.clone()),
        tx,
    );

    // Set up the terminal in raw / alternate-screen mode.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, DisableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(config.variant);
    let result = run_loop(&mut terminal, &mut app, &worker, &rx);

    // Always restore the terminal, even on error.
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    worker: &ExchangeWorker,
    rx: &mpsc::Receiver<exchange::ExchangeEvent>,
) -> Result<()> {
    loop {
        app.tick = app.tick.wrapping_add(1);

        for effect in app.drain_effects() {
            worker.run(effect);
        }
        while let Ok(ev) = rx.try_recv() {
            app.apply(ev);
        }

        if app.should_quit {
            return Ok(());
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                let action = key_to_action(
                    &key,
                    app.state.panel_open,
                    app.state.input_visible,
                    app.input_empty(),
                );
                if let Some(a) = action {
                    app.dispatch(a);
                    if app.should_quit {
                        return Ok(());
                    }
                }
            }
        }
    }
}
