//! Main TUI application state and logic

use crate::calculator::Calculator;
use crate::parser::AngleMode;
use crate::ui::keypad::{key_bindings, Action};
use crate::ui::theme::Theme;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashMap;
use std::io;
use std::time::Duration;

/// Shown on the result line when a calculation fails
const ERROR_DISPLAY: &str = "ERROR";

/// The main application state
pub struct App {
    /// The calculator being driven
    pub calculator: Calculator,

    /// Text on the result line
    pub result_display: String,

    /// Whether the result line currently shows an error
    pub error_shown: bool,

    /// Most recent action, highlighted on the keypad
    pub last_pressed: Option<Action>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    theme: &'static Theme,
    bindings: FxHashMap<KeyCode, Action>,
}

impl App {
    /// Create a new app around `calculator`
    pub fn new(calculator: Calculator, theme: &'static Theme) -> Self {
        let powered = calculator.is_powered();
        App {
            calculator,
            result_display: if powered { "0".to_string() } else { String::new() },
            error_shown: false,
            last_pressed: None,
            should_quit: false,
            status_message: if powered {
                String::from("Ready!")
            } else {
                String::from("Press F1 to power on")
            },
            theme,
            bindings: key_bindings(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Display on top, keypad and history below, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[1]);

        super::panes::render_display_pane(
            frame,
            main_chunks[0],
            &self.calculator,
            &self.result_display,
            self.error_shown,
            self.theme,
        );

        super::panes::render_keypad_pane(
            frame,
            columns[0],
            self.last_pressed,
            self.calculator.is_powered(),
            self.theme,
        );

        super::panes::render_history_pane(
            frame,
            columns[1],
            self.calculator.history(),
            self.theme,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.calculator.is_powered(),
            self.error_shown,
            self.theme,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(action) = self.bindings.get(&key.code).copied() {
            self.apply(action);
        }
    }

    /// Perform one keypad action
    pub fn apply(&mut self, action: Action) {
        self.last_pressed = Some(action);

        match action {
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::TogglePower => {
                self.toggle_power();
                return;
            }
            _ => {}
        }

        if !self.calculator.is_powered() {
            return;
        }

        // Any edit clears a shown error
        if action != Action::Calculate && self.error_shown {
            self.error_shown = false;
            self.result_display = self.calculator.result().to_string();
        }

        match action {
            Action::Insert(text) => {
                self.calculator.insert_text(text);
            }
            Action::Function(function) => {
                self.calculator.insert_function(function);
            }
            Action::Clear => {
                self.calculator.clear();
                self.status_message = "Cleared".to_string();
            }
            Action::AllClear => {
                let (_, shown) = self.calculator.reset_all();
                self.result_display = shown.to_string();
                self.status_message = "All cleared".to_string();
            }
            Action::Backspace => {
                self.calculator.backspace();
            }
            Action::Calculate => self.calculate(),
            Action::MemoryClear => {
                self.calculator.memory_clear();
                self.status_message = "Memory cleared".to_string();
            }
            Action::MemoryRecall => {
                self.calculator.memory_recall();
            }
            Action::MemoryAdd => {
                let memory = self.calculator.memory_add();
                self.status_message = format!("M = {}", memory);
            }
            Action::MemorySubtract => {
                let memory = self.calculator.memory_subtract();
                self.status_message = format!("M = {}", memory);
            }
            Action::SetAngle(mode) => {
                let mode = self.calculator.set_angle_mode(mode);
                self.status_message = match mode {
                    AngleMode::Degrees => "Angles in degrees".to_string(),
                    AngleMode::Radians => "Angles in radians".to_string(),
                };
            }
            Action::TogglePower | Action::Quit => {}
        }
    }

    fn calculate(&mut self) {
        let outcome = self.calculator.calculate();

        if outcome.success {
            self.result_display = outcome.value;
            self.error_shown = false;
            self.status_message = "Ready!".to_string();
        } else if outcome.value.is_empty() {
            // Nothing to evaluate: keep the display, just say so
            self.status_message = outcome.message;
        } else {
            self.result_display = ERROR_DISPLAY.to_string();
            self.error_shown = true;
            self.status_message = outcome.message;
        }
    }

    fn toggle_power(&mut self) {
        self.error_shown = false;
        if self.calculator.toggle_power() {
            self.result_display = "0".to_string();
            self.status_message = "Ready!".to_string();
        } else {
            self.result_display.clear();
            self.last_pressed = None;
            self.status_message = "Powered off".to_string();
        }
    }
}
