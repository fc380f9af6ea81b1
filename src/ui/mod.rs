//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state and the keyboard event loop
//! - **[`panes`]**: stateless render functions for the structure, narration,
//!   catalog and status bar
//! - **[`theme`]**: color palette and the mapping from marks to cell styles
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Session`](crate::session::Session) and call [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
