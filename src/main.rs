use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use zpad::app::theme::detect_terminal_color_support;
use zpad::app::{EventResult, Shell, UiTheme};
use zpad::settings::{self, Settings};
use zpad::tui::{TerminalGuard, TerminationSignal};

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    let mut logging = logging::init();

    let settings = settings::load_settings().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "falling back to default settings");
        Settings::default()
    });
    let theme = UiTheme::named(&settings.editor.theme, detect_terminal_color_support());
    let mut shell = Shell::new(&settings, theme);
    if let Some(rx) = logging.as_mut().and_then(|guard| guard.take_log_rx()) {
        shell.set_log_receiver(rx);
    }

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    #[cfg(unix)]
    let _signals =
        zpad::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let result = run(&mut terminal, &mut shell, &signal_rx);
    drop(guard);

    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    shell: &mut Shell,
    signals: &Receiver<TerminationSignal>,
) -> io::Result<()> {
    let mut dirty = true;
    loop {
        if let Ok(signal) = signals.try_recv() {
            tracing::info!(?signal, "exiting");
            return Ok(());
        }

        dirty |= shell.tick();
        if dirty {
            terminal.draw(|frame| shell.render(frame))?;
            dirty = false;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match shell.handle_event(&event::read()?) {
            EventResult::Quit => return Ok(()),
            EventResult::Consumed => dirty = true,
            EventResult::Ignored => {}
        }
    }
}
