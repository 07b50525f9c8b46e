//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state and the keyboard event loop
//! - **[`keypad`]**: button layout and key bindings, both producing [`keypad::Action`]s
//! - **[`panes`]**: stateless render functions for the display, keypad, history and
//!   status bar
//! - **[`theme`]**: the color palettes selectable from the config file
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Calculator`](crate::calculator::Calculator) and call [`App::run`] to start the
//! event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod keypad;
pub mod panes;
pub mod theme;

pub use app::App;
