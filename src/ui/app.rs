//! Main TUI application state and logic

use crate::catalog::Operation;
use crate::config::{Scale, PLAY_DEBOUNCE_MS, POLL_INTERVAL_MS};
use crate::session::Session;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// The main application state
pub struct App {
    /// Selected operation, its steps and the playback cursor
    pub session: Session,

    /// Display scale of the structure pane
    pub scale: Scale,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around a session that may already hold a selection
    pub fn new(session: Session, scale: Scale) -> Self {
        let status_message = if session.is_available() {
            String::from("Ready!")
        } else {
            String::from("Visualization not available")
        };
        App {
            session,
            scale,
            should_quit: false,
            status_message,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.on_tick(Instant::now());

            // Poll with a timeout so auto-play keeps running without input
            if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance auto-play if a tick period has elapsed
    pub fn on_tick(&mut self, now: Instant) {
        let controller = self.session.controller_mut();
        if !controller.is_playing() {
            return;
        }
        if controller.poll(now) {
            self.status_message = if controller.is_playing() {
                "Playing...".to_string()
            } else {
                "Playback complete".to_string()
            };
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Structure (left) | narration over catalog (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[0]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);

        let operation = self.session.operation();
        let title = operation.map_or("Not available", Operation::title);

        super::panes::render_structure_pane(
            frame,
            columns[0],
            self.session.current(),
            title,
            self.scale,
        );

        super::panes::render_narration_pane(
            frame,
            right_rows[0],
            operation,
            self.session.current_meta(),
            self.session.current(),
        );

        super::panes::render_catalog_pane(frame, right_rows[1], operation);

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &super::panes::StatusRenderData {
                message: &self.status_message,
                playback: self.session.controller().state(),
                scale: self.scale,
                available: self.session.is_available(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c as usize - '0' as usize;
                let stepped = self.session.controller_mut().step_forward_by(n);
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            // Stepping leaves the play/pause status alone
            KeyCode::Left => {
                self.status_message = if self.session.controller_mut().step_backward() {
                    "Stepped backward".to_string()
                } else {
                    "Cannot step backward: at the first step".to_string()
                };
            }
            KeyCode::Right => {
                self.status_message = if self.session.controller_mut().step_forward() {
                    "Stepped forward".to_string()
                } else {
                    "Cannot step forward: at the last step".to_string()
                };
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play (debounced to ignore key repeat)
                if self.last_space_press.elapsed() >= Duration::from_millis(PLAY_DEBOUNCE_MS) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Enter => {
                self.session.controller_mut().jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.session.controller_mut().reset();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('n') | KeyCode::Down => {
                let next = self
                    .session
                    .operation()
                    .map_or(Operation::ALL[0], Operation::next);
                self.select(next);
            }
            KeyCode::Char('p') | KeyCode::Up => {
                let prev = self
                    .session
                    .operation()
                    .map_or(Operation::ALL[Operation::ALL.len() - 1], Operation::prev);
                self.select(prev);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let speed = self.session.controller().speed().faster();
                self.session.controller_mut().set_speed(speed);
                self.status_message = format!("Speed {}", speed.label());
            }
            KeyCode::Char('-') => {
                let speed = self.session.controller().speed().slower();
                self.session.controller_mut().set_speed(speed);
                self.status_message = format!("Speed {}", speed.label());
            }
            KeyCode::Char(']') => {
                self.scale = self.scale.grow();
                self.status_message = format!("Scale {:.2}x", self.scale.value());
            }
            KeyCode::Char('[') => {
                self.scale = self.scale.shrink();
                self.status_message = format!("Scale {:.2}x", self.scale.value());
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        let controller = self.session.controller_mut();
        if controller.is_playing() {
            controller.pause();
            self.status_message = "Paused".to_string();
        } else if controller.play() {
            self.status_message = "Playing...".to_string();
        } else {
            self.status_message = "Nothing to play".to_string();
        }
    }

    fn select(&mut self, operation: Operation) {
        match self.session.select_operation(operation) {
            Ok(_) => {
                debug!(operation = operation.id(), "operation changed from the keyboard");
                self.status_message = format!("Selected {}", operation.title());
            }
            Err(e) => {
                warn!(operation = operation.id(), error = %e, "selection failed");
                self.status_message = format!("Error: {}", e);
            }
        }
    }
}
