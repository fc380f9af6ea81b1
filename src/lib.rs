//! # Introduction
//!
//! stepviz narrates data structure operations one step at a time. Each
//! operation (array insert, heap extract, tree traversal, bubble sort...) is
//! turned into an immutable sequence of snapshots, and a playback controller
//! moves a cursor through that sequence manually or on a timer. The terminal
//! UI draws the snapshot under the cursor with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! id → Router → Generator → OperationSequence → PlaybackController → TUI
//! ```
//!
//! 1. [`catalog`]: the closed set of operations and their families.
//! 2. [`router`]: resolves an identifier and dispatches to a generator.
//! 3. [`generators`]: one narrated algorithm per operation, recording
//!    [`snapshot::Snapshot`]s through a [`snapshot::SequenceBuilder`].
//! 4. [`playback`]: play/pause state machine over the step index.
//! 5. [`session`]: ties selection and playback together for a host.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod generators;
pub mod logging;
pub mod playback;
pub mod router;
pub mod session;
pub mod snapshot;
pub mod ui;
