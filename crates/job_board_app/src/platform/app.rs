use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use board_logging::{board_debug, board_info, LogDestination};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use job_board_core::{update, AppState, AppViewModel, Msg};
use job_board_engine::LoaderSettings;
use ratatui::backend::CrosstermBackend;
use ratatui::widgets::ListState;
use ratatui::Terminal;

use super::effects::EffectRunner;
use super::ui::keys::{map_key, KeyAction};
use super::ui::render;

/// The alternate screen owns the terminal, so logs go to a file.
const LOG_FILE: &str = "./job_board.log";
const POLL_INTERVAL: Duration = Duration::from_millis(75);

pub fn run_app() -> Result<()> {
    board_logging::initialize(
        LogDestination::File(PathBuf::from(LOG_FILE)),
        board_logging::default_level(),
    )
    .with_context(|| format!("failed to create log file {LOG_FILE}"))?;
    board_info!("Starting job board");

    let mut controller = Controller::new(EffectRunner::new(LoaderSettings::default()));
    controller.dispatch(Msg::Mounted);

    let mut stdout = io::stdout();
    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal backend")?;

    let result = event_loop(&mut terminal, &mut controller);

    cleanup_terminal(&mut terminal)?;
    board_info!("Job board closed");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    controller: &mut Controller,
) -> Result<()> {
    loop {
        controller.process_pending_messages();

        if controller.needs_redraw {
            terminal
                .draw(|frame| render::render(frame, &controller.view, &mut controller.list_state))
                .context("failed to draw frame")?;
            controller.needs_redraw = false;
        }

        if !event::poll(POLL_INTERVAL).context("event polling failed")? {
            continue;
        }
        match event::read().context("failed to read event")? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                if controller.handle_key(key_event) {
                    return Ok(());
                }
            }
            Event::Resize(..) => controller.needs_redraw = true,
            _ => {}
        }
    }
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal
        .show_cursor()
        .context("failed to restore cursor visibility")
}

/// Single owner of the application state. Every change goes through
/// `dispatch`, one message at a time.
struct Controller {
    state: AppState,
    view: AppViewModel,
    list_state: ListState,
    effects: EffectRunner,
    needs_redraw: bool,
}

impl Controller {
    fn new(effects: EffectRunner) -> Self {
        let state = AppState::new();
        let view = state.view();
        Self {
            state,
            view,
            list_state: ListState::default(),
            effects,
            needs_redraw: true,
        }
    }

    fn process_pending_messages(&mut self) {
        for msg in self.effects.poll() {
            self.dispatch(msg);
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        board_debug!("dispatch {:?}", MsgLabel(&msg));
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.view = state.view();
            self.clamp_selection();
            self.needs_redraw = true;
        }
        self.state = state;
        self.effects.run(effects);
    }

    /// Returns true when the user asked to quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match map_key(key, &self.view, self.list_state.selected()) {
            KeyAction::Dispatch(msg) => self.dispatch(msg),
            KeyAction::SelectPrevious => self.move_selection(-1),
            KeyAction::SelectNext => self.move_selection(1),
            KeyAction::Quit => return true,
            KeyAction::Ignore => {}
        }
        false
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.view.rows.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(len - 1);
        self.list_state.select(Some(next));
        self.needs_redraw = true;
    }

    fn clamp_selection(&mut self) {
        let len = self.view.rows.len();
        let selected = match (len, self.list_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (_, Some(index)) => Some(index.min(len - 1)),
        };
        self.list_state.select(selected);
    }
}

/// Debug formatting that skips the posting payload of `PostingsLoaded`.
struct MsgLabel<'a>(&'a Msg);

impl std::fmt::Debug for MsgLabel<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Msg::PostingsLoaded { postings, source } => f
                .debug_struct("PostingsLoaded")
                .field("count", &postings.len())
                .field("source", source)
                .finish(),
            other => std::fmt::Debug::fmt(other, f),
        }
    }
}
