//! TUI runner - main loop and orchestrator integration.

use crate::{App, Event, EventHandler, Focus};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use reelscript_error::{ReelscriptResult, TerminalStep, TuiError, TuiErrorKind};
use reelscript_generator::{Orchestrator, RequestId};
use reelscript_interface::{ClipboardSink, TextGenerator};
use std::io::{self, Stdout};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, info};

type Outcome = (RequestId, ReelscriptResult<String>);

/// Run the terminal form until the user quits.
///
/// Generation runs on a spawned task, so this must be called from within a
/// tokio runtime. Dropping the orchestrator on exit cancels any request still
/// in flight.
pub fn run_tui<D>(
    mut orchestrator: Orchestrator<D>,
    clipboard: &mut dyn ClipboardSink,
) -> ReelscriptResult<()>
where
    D: TextGenerator + 'static,
{
    let mut terminal = setup_terminal()?;
    info!("TUI started");

    let result = event_loop(&mut terminal, &mut orchestrator, clipboard);
    let restored = restore_terminal(&mut terminal);

    info!("TUI stopped");
    result?;
    restored?;
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode().map_err(|e| TuiError::terminal(TerminalStep::EnableRawMode, e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TuiError::terminal(TerminalStep::EnterAlternateScreen, e))?;

    Terminal::new(CrosstermBackend::new(stdout))
        .map_err(|e| TuiError::terminal(TerminalStep::CreateTerminal, e))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<(), TuiError> {
    disable_raw_mode().map_err(|e| TuiError::terminal(TerminalStep::DisableRawMode, e))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| TuiError::terminal(TerminalStep::LeaveAlternateScreen, e))?;
    terminal
        .show_cursor()
        .map_err(|e| TuiError::terminal(TerminalStep::ShowCursor, e))
}

fn event_loop<D>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    orchestrator: &mut Orchestrator<D>,
    clipboard: &mut dyn ClipboardSink,
) -> ReelscriptResult<()>
where
    D: TextGenerator + 'static,
{
    let mut app = App::new();
    let events = EventHandler::new(100);
    let (tx, mut rx) = unbounded_channel::<Outcome>();

    while !app.should_quit {
        terminal
            .draw(|f| crate::ui::draw(f, &app, orchestrator.state()))
            .map_err(|e| TuiError::new(TuiErrorKind::Draw(e.to_string())))?;

        let event = events.next()?;
        step(&mut app, orchestrator, clipboard, &tx, &mut rx, event);
    }

    Ok(())
}

/// One loop pass: apply the event, then any finished requests.
///
/// Results are drained on every pass, so a stream of key presses cannot
/// hold back a finished request.
fn step<D>(
    app: &mut App,
    orchestrator: &mut Orchestrator<D>,
    clipboard: &mut dyn ClipboardSink,
    tx: &UnboundedSender<Outcome>,
    rx: &mut UnboundedReceiver<Outcome>,
    event: Option<Event>,
) where
    D: TextGenerator + 'static,
{
    if let Some(Event::Key(key)) = event {
        handle_key(app, orchestrator, clipboard, tx, key);
    }
    drain_results(app, orchestrator, rx);
}

/// Apply finished requests to the orchestrator.
fn drain_results<D: TextGenerator>(
    app: &mut App,
    orchestrator: &mut Orchestrator<D>,
    rx: &mut UnboundedReceiver<Outcome>,
) {
    while let Ok((id, result)) = rx.try_recv() {
        if orchestrator.complete(id, result) {
            app.on_settled(orchestrator.state());
        }
    }
}

fn submit<D>(app: &mut App, orchestrator: &mut Orchestrator<D>, tx: &UnboundedSender<Outcome>)
where
    D: TextGenerator + 'static,
{
    match orchestrator.begin(app.inputs()) {
        Ok(submission) => {
            debug!(id = %submission.id(), "Spawning generation task");
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = submission.run().await;
                // The receiver is gone once the TUI has exited.
                let _ = tx.send(outcome);
            });
            app.on_submitted();
        }
        Err(e) => app.on_rejected(&e),
    }
}

fn handle_key<D>(
    app: &mut App,
    orchestrator: &mut Orchestrator<D>,
    clipboard: &mut dyn ClipboardSink,
    tx: &UnboundedSender<Outcome>,
    key: KeyEvent,
) where
    D: TextGenerator + 'static,
{
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Esc => {
            if orchestrator.cancel() {
                app.on_settled(orchestrator.state());
            } else {
                app.quit();
            }
        }
        KeyCode::Tab | KeyCode::Down if app.focus != Focus::Results => app.focus_next(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),
        KeyCode::Up if app.focus != Focus::Results => app.focus_previous(),
        KeyCode::Up => app.previous_option(),
        KeyCode::Down => app.next_option(orchestrator.state()),
        KeyCode::Left => app.previous_option(),
        KeyCode::Right => app.next_option(orchestrator.state()),
        KeyCode::Enter => submit(app, orchestrator, tx),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) if app.is_editing_text() => app.push_char(c),
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') | KeyCode::Char('y') if app.focus == Focus::Results => {
            app.copy_selected(orchestrator.state(), clipboard)
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use reelscript_core::{GenerateRequest, GenerateResponse};
    use reelscript_error::ClipboardError;
    use reelscript_generator::ScriptGenerator;

    struct IdleGenerator;

    #[async_trait]
    impl TextGenerator for IdleGenerator {
        async fn generate(&self, _req: &GenerateRequest) -> ReelscriptResult<GenerateResponse> {
            Ok(GenerateResponse { text: None })
        }

        fn provider_name(&self) -> &'static str {
            "idle"
        }

        fn model_name(&self) -> &str {
            "idle"
        }
    }

    struct NoClipboard;

    impl ClipboardSink for NoClipboard {
        fn copy(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    fn form_with_area() -> App {
        let mut app = App::new();
        app.area = "New Cairo".to_string();
        app
    }

    #[test]
    fn finished_request_is_applied_on_a_key_press() {
        let mut app = form_with_area();
        let mut orchestrator = Orchestrator::new(ScriptGenerator::new(IdleGenerator, "m", 0.7));
        let (tx, mut rx) = unbounded_channel::<Outcome>();

        let submission = orchestrator.begin(app.inputs()).unwrap();
        tx.send((submission.id(), Ok("1) HOOK\nfoo".to_string())))
            .unwrap();

        let key = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        step(
            &mut app,
            &mut orchestrator,
            &mut NoClipboard,
            &tx,
            &mut rx,
            Some(Event::Key(key)),
        );

        assert_eq!(orchestrator.state().sections().len(), 1);
        assert_eq!(app.focus, Focus::Results);
    }

    #[test]
    fn finished_request_is_applied_on_an_ignored_event() {
        let mut app = form_with_area();
        let mut orchestrator = Orchestrator::new(ScriptGenerator::new(IdleGenerator, "m", 0.7));
        let (tx, mut rx) = unbounded_channel::<Outcome>();

        let submission = orchestrator.begin(app.inputs()).unwrap();
        tx.send((submission.id(), Ok("no headers".to_string())))
            .unwrap();

        step(&mut app, &mut orchestrator, &mut NoClipboard, &tx, &mut rx, None);

        assert!(!orchestrator.is_busy());
        assert_eq!(orchestrator.state().sections().len(), 1);
    }

    #[test]
    fn stale_result_leaves_form_untouched() {
        let mut app = form_with_area();
        let mut orchestrator = Orchestrator::new(ScriptGenerator::new(IdleGenerator, "m", 0.7));
        let (tx, mut rx) = unbounded_channel::<Outcome>();

        let submission = orchestrator.begin(app.inputs()).unwrap();
        orchestrator.cancel();
        tx.send((submission.id(), Ok("1) HOOK\nlate".to_string())))
            .unwrap();

        step(&mut app, &mut orchestrator, &mut NoClipboard, &tx, &mut rx, Some(Event::Tick));

        assert!(orchestrator.state().is_idle());
        assert_eq!(app.focus, Focus::ClientType);
    }
}
