use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use finder_core::{update, AppState, Msg, ViewState};
use finder_logging::{finder_debug, finder_info, finder_warn};

use super::config::FinderConfig;
use super::effects::EffectRunner;
use super::ui::commands::{parse_command, Command};
use super::ui::constants::{HELP_LINES, PROMPT};
use super::ui::render;

const POLL_INTERVAL: Duration = Duration::from_millis(25);

enum Input {
    Line(String),
    Closed,
}

/// Runs the interactive loop until the user quits, or until stdin closes and
/// every outstanding request has been answered.
pub fn run_app(config: &FinderConfig) -> anyhow::Result<()> {
    let runner = EffectRunner::new(config.client_settings());
    let mut app = App {
        state: AppState::with_defaults(config.sort_key(), config.index_variant()),
        runner,
        out: io::stdout(),
    };

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if input_tx.send(Input::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    finder_warn!("Failed to read input: {}", err);
                    break;
                }
            }
        }
        let _ = input_tx.send(Input::Closed);
    });

    app.print_lines(render::render(&app.state.view()))?;
    app.prompt()?;

    let mut input_open = true;
    loop {
        if !input_open {
            if !awaiting_response(&app.state) {
                break;
            }
            let completions = app.runner.wait_messages(POLL_INTERVAL);
            for msg in completions {
                app.dispatch(msg)?;
            }
            continue;
        }

        match input_rx.recv_timeout(POLL_INTERVAL) {
            Ok(Input::Line(line)) => match parse_command(&line) {
                Ok(Some(Command::Dispatch(msgs))) => {
                    for msg in msgs {
                        app.dispatch(msg)?;
                    }
                    app.prompt()?;
                }
                Ok(Some(Command::Help)) => {
                    app.print_lines(HELP_LINES.iter().map(|line| line.to_string()))?;
                    app.prompt()?;
                }
                Ok(Some(Command::ListTags)) => {
                    app.print_lines(render::render_tags(&app.state.view()))?;
                    app.prompt()?;
                }
                Ok(Some(Command::Quit)) => break,
                Ok(None) => app.prompt()?,
                Err(err) => {
                    app.print_lines([err.to_string()])?;
                    app.prompt()?;
                }
            },
            Ok(Input::Closed) | Err(mpsc::RecvTimeoutError::Disconnected) => {
                // Piped input ends before the service answers; let it finish.
                input_open = false;
                if awaiting_response(&app.state) {
                    writeln!(app.out)?;
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
        }

        let completions = app.runner.drain_messages();
        if !completions.is_empty() {
            // Keep what the user was typing on its own line.
            writeln!(app.out)?;
            for msg in completions {
                app.dispatch(msg)?;
            }
            app.prompt()?;
        }
    }

    finder_info!("Recipe finder exiting");
    Ok(())
}

struct App {
    state: AppState,
    runner: EffectRunner,
    out: io::Stdout,
}

impl App {
    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        finder_debug!("Dispatch {:?}", msg);
        log_if_dropped(&self.state, &msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.runner.enqueue(effects);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;
        if was_dirty {
            self.print_lines(render::render(&view))?;
        }
        Ok(())
    }

    fn print_lines(&mut self, lines: impl IntoIterator<Item = String>) -> io::Result<()> {
        let mut out = self.out.lock();
        for line in lines {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }

    fn prompt(&mut self) -> io::Result<()> {
        let mut out = self.out.lock();
        write!(out, "{PROMPT}")?;
        out.flush()
    }
}

/// True while a search or detail request has not been answered yet.
fn awaiting_response(state: &AppState) -> bool {
    state.search_in_flight().is_some() || state.detail_in_flight().is_some()
}

fn log_if_dropped(state: &AppState, msg: &Msg) {
    match msg {
        Msg::SearchSubmitted if matches!(state.view_state(), ViewState::Searching) => {
            finder_info!("Search submitted while another is in flight; ignored");
        }
        Msg::SearchSucceeded { request_id, .. } | Msg::SearchFailed { request_id, .. }
            if state.search_in_flight() != Some(*request_id) =>
        {
            finder_info!("Dropping stale search completion {}", request_id);
        }
        Msg::DetailLoaded { request_id, .. }
        | Msg::DetailRejected { request_id, .. }
        | Msg::DetailFailed { request_id, .. }
            if state.detail_in_flight() != Some(*request_id) =>
        {
            finder_info!("Dropping stale detail completion {}", request_id);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finder_core::SearchResult;

    #[test]
    fn closed_input_waits_for_outstanding_search() {
        let (state, _) = update(AppState::new(), Msg::IngredientsChanged("egg".into()));
        assert!(!awaiting_response(&state));

        let (state, _) = update(state, Msg::SearchSubmitted);
        assert!(awaiting_response(&state));

        let request_id = state.search_in_flight().unwrap();
        let (state, _) = update(
            state,
            Msg::SearchSucceeded {
                request_id,
                result: SearchResult::empty(),
            },
        );
        assert!(!awaiting_response(&state));
    }
}
