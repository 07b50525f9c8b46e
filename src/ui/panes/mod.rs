//! TUI pane rendering modules
//!
//! Each pane is a stateless `render_*` function taking the frame, its area,
//! the state it shows and the active [`Theme`](crate::ui::theme::Theme).
//!
//! - [`display`]: mode indicators, expression and result
//! - [`keypad`]: the button grid
//! - [`history`]: past calculations
//! - [`status`]: status bar with keybindings

pub mod display;
pub mod history;
pub mod keypad;
pub mod status;

pub use display::render_display_pane;
pub use history::render_history_pane;
pub use keypad::render_keypad_pane;
pub use status::render_status_bar;
