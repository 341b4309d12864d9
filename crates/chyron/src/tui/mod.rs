use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::subscriber::NoSubscriber;

use chyron_app::{ChyronConfig, TickerSession};

mod clipboard;
pub mod constants;
mod editor;
mod handlers;
mod marquee;
mod terminal;
mod view;
mod widgets;

use self::handlers::handle_ui_action;
use self::view::Ui;

/// Launch the interactive banner + control panel.
pub fn run(session: &TickerSession, config: &ChyronConfig) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = tracing::subscriber::with_default(NoSubscriber::default(), || {
        run_event_loop(&mut terminal, session, config)
    });

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &TickerSession,
    config: &ChyronConfig,
) -> Result<()> {
    let mut ui = Ui::new(session);
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui.draw(f))?;
        if ui.should_quit {
            break;
        }

        let timeout = tick_rate.checked_sub(last_tick.elapsed()).unwrap_or_default();

        if event::poll(timeout)? {
            let evt = event::read()?;
            if let CrosstermEvent::Key(key) = evt
                && let Some(action) = ui.handle_key(key)
                && let Err(err) = handle_ui_action(terminal, &mut ui, action)
            {
                ui.error(format!("editor flow failed: {err}"));
            }
        }

        if last_tick.elapsed() >= tick_rate {
            ui.tick(Instant::now());
            last_tick = Instant::now();
        }
    }

    Ok(())
}
