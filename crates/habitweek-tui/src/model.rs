//! TUI application model (Elm architecture).

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event::DisableMouseCapture, event::EnableMouseCapture, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{debug, warn};

use habitweek_core::WeekBoard;

use crate::days::render_days;
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, map_mouse, KeyAction};
use crate::layout::{min_size, ScreenLayout, Target};
use crate::messages::TuiMessage;
use crate::notice::render_too_small;
use crate::progress::render_progress;
use crate::steps::render_steps;
use crate::styles::ColorTheme;
use crate::tiles::render_tiles;
use crate::tips::{render_tips, render_tips_button};

/// TUI application state (Elm Model).
pub struct HabitApp {
    /// Completion table and selection, the only domain state.
    pub board: WeekBoard,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    /// Whether mouse capture is enabled while running.
    pub mouse: bool,
    theme: ColorTheme,
}

impl HabitApp {
    /// Create a new TUI app around a board.
    #[must_use]
    pub fn new(board: WeekBoard) -> Self {
        Self {
            board,
            should_quit: false,
            terminal_width: 80,
            terminal_height: 24,
            mouse: true,
            theme: ColorTheme::default(),
        }
    }

    /// Enable or disable terminal mouse capture.
    #[must_use]
    pub fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    /// Apply a message to the model (Elm Update).
    pub fn update(&mut self, msg: TuiMessage) {
        debug!(?msg, "Dispatching message");
        match msg {
            TuiMessage::Key(action) => self.handle_key_action(action),
            TuiMessage::Click { column, row } => self.handle_click(column, row),
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit | KeyAction::Cancel => {
                self.should_quit = true;
            }
            KeyAction::ToggleStep(step) => {
                self.board.toggle_active(step);
            }
            KeyAction::NextDay => {
                self.board.next_day();
            }
            KeyAction::PrevDay => {
                self.board.prev_day();
            }
            KeyAction::ToggleTips => {
                self.board.toggle_tips();
            }
            KeyAction::None => {}
        }
    }

    /// Handle a left click at a terminal cell.
    ///
    /// Clicks do nothing while the terminal is too small to draw the
    /// checklist.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let Some(layout) = self.layout() else {
            return;
        };
        match layout.target_at(column, row) {
            Some(Target::Day(day)) => self.board.select_day(day),
            Some(Target::Step(step)) => self.board.toggle_active(step),
            Some(Target::TipsButton) => self.board.toggle_tips(),
            None => {}
        }
    }

    /// Layout for the current terminal size and tips state, if it fits.
    #[must_use]
    pub fn layout(&self) -> Option<ScreenLayout> {
        let area = Rect::new(0, 0, self.terminal_width, self.terminal_height);
        ScreenLayout::compute(area, self.board.tips_visible())
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let tips_visible = self.board.tips_visible();
        let Some(layout) = ScreenLayout::compute(area, tips_visible) else {
            render_too_small(frame, area, min_size(area.width, tips_visible), &self.theme);
            return;
        };
        // Derived once per frame, never stored.
        let stats = self.board.stats();

        render_header(frame, layout.header, &self.theme);
        render_tiles(frame, layout.tiles, &stats, &self.theme);
        render_days(frame, &layout.days, &stats, &self.theme);
        render_progress(
            frame,
            layout.progress,
            stats.active_day,
            stats.active_progress,
            &self.theme,
        );
        render_steps(frame, &layout.steps, &self.board, &self.theme);
        render_tips_button(frame, layout.tips_button, tips_visible, &self.theme);
        if let Some(tips_area) = layout.tips {
            render_tips(frame, tips_area, &self.theme);
        }
        render_footer(frame, layout.footer, &self.theme);
    }

    /// Translate a terminal event into a message, if it carries one.
    #[must_use]
    pub fn message_for(event: Event) -> Option<TuiMessage> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Some(TuiMessage::Key(map_key(key)))
            }
            Event::Mouse(mouse) => map_mouse(mouse),
            Event::Resize(width, height) => Some(TuiMessage::Resize { width, height }),
            _ => None,
        }
    }

    /// Set up the terminal for TUI mode.
    ///
    /// Returns a configured Terminal or an error. If a step after raw mode
    /// fails, the terminal is restored before the error is returned.
    pub fn setup_terminal(mouse: bool) -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        setup_or_restore(
            || {
                let mut stdout = io::stdout();
                execute!(stdout, EnterAlternateScreen)?;
                if mouse {
                    execute!(stdout, EnableMouseCapture)?;
                }
                Terminal::new(CrosstermBackend::new(stdout))
            },
            restore_terminal,
        )
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        mouse: bool,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        if mouse {
            execute!(terminal.backend_mut(), DisableMouseCapture)?;
        }
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (render, wait for input,
    /// update), and tears down on exit. Nothing changes without input, so the
    /// loop blocks on the next terminal event.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal(self.mouse)?;
        let result = self.event_loop(&mut terminal);
        first_error(result, Self::teardown_terminal(&mut terminal, self.mouse))
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let size = terminal.size()?;
        self.terminal_width = size.width;
        self.terminal_height = size.height;

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            if let Some(msg) = Self::message_for(event::read()?) {
                self.update(msg);
            }
        }
    }
}

/// Run `setup`; if it fails, run `restore` and return the setup error.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    setup().map_err(|err| {
        if let Err(restore_err) = restore() {
            warn!(error = %restore_err, "Failed to restore terminal");
        }
        err
    })
}

/// Leave the alternate screen and raw mode after a failed setup.
fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    let screen = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
    first_error(screen, terminal::disable_raw_mode())
}

/// Keep the first of two errors; the second is only logged.
fn first_error(first: io::Result<()>, second: io::Result<()>) -> io::Result<()> {
    match (first, second) {
        (Err(err), Err(later)) => {
            warn!(error = %later, "Terminal teardown failed");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), second) => second,
    }
}
