//! Session: the host-facing boundary of the engine
//!
//! Owns the router, the selected sequence and the playback controller. A host
//! selects an operation by identifier, drives the controller, and reads the
//! snapshot under the cursor.

use crate::catalog::Operation;
use crate::errors::EngineError;
use crate::playback::{Generation, PlaybackController, Speed};
use crate::router::{Router, Selection};
use crate::snapshot::{OperationSequence, Snapshot, StepMeta};
use std::fmt;
use tracing::info;

type StepsListener = Box<dyn FnMut(usize)>;

pub struct Session {
    router: Router,
    selection: Selection,
    controller: PlaybackController,
    listeners: Vec<StepsListener>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("selection", &self.selection)
            .field("controller", &self.controller)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(Speed::default())
    }
}

impl Session {
    /// An empty session; nothing is selected until [`Session::select`]
    pub fn new(speed: Speed) -> Self {
        Session {
            router: Router::new(),
            selection: Selection::NotAvailable { id: String::new() },
            controller: PlaybackController::new(0, speed),
            listeners: Vec::new(),
        }
    }

    /// Register a callback invoked with the new step count after each selection
    pub fn on_steps_changed(&mut self, listener: impl FnMut(usize) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Select an operation by identifier.
    ///
    /// Unknown identifiers install an empty selection and succeed. On a
    /// generation error the previous selection stays in place.
    pub fn select(&mut self, id: &str) -> Result<Generation, EngineError> {
        let selection = self.router.select(id)?;
        Ok(self.install(selection))
    }

    pub fn select_operation(&mut self, operation: Operation) -> Result<Generation, EngineError> {
        let selection = self.router.select_operation(operation)?;
        Ok(self.install(selection))
    }

    fn install(&mut self, selection: Selection) -> Generation {
        let total = selection.total_steps();
        self.selection = selection;
        let generation = self.controller.load(total);
        info!(
            operation = self.operation().map(Operation::id),
            total,
            "selection installed"
        );
        for listener in &mut self.listeners {
            listener(total);
        }
        generation
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn operation(&self) -> Option<Operation> {
        self.sequence().map(OperationSequence::operation)
    }

    pub fn sequence(&self) -> Option<&OperationSequence> {
        self.selection.sequence()
    }

    pub fn is_available(&self) -> bool {
        self.selection.is_available()
    }

    /// Snapshot under the cursor
    pub fn current(&self) -> Option<&Snapshot> {
        self.sequence()?.get(self.controller.current_index())
    }

    /// Narration of the step under the cursor
    pub fn current_meta(&self) -> Option<&StepMeta> {
        self.sequence()?.meta(self.controller.current_index())
    }

    pub fn total_steps(&self) -> usize {
        self.selection.total_steps()
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PlaybackController {
        &mut self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_select_installs_sequence_at_start() {
        let mut session = Session::default();
        session.select("queue-dequeue").unwrap();
        assert_eq!(session.operation(), Some(Operation::QueueDequeue));
        assert_eq!(session.total_steps(), 4);
        assert_eq!(session.controller().current_index(), 0);
        assert_eq!(session.current(), session.sequence().and_then(|s| s.first()));
    }

    #[test]
    fn test_reselect_resets_cursor_and_generation() {
        let mut session = Session::default();
        let first = session.select("array-insert").unwrap();
        session.controller_mut().step_forward_by(3);
        session.controller_mut().play();

        let second = session.select("heap-peek").unwrap();
        assert_ne!(first, second);
        assert_eq!(session.controller().current_index(), 0);
        assert!(!session.controller().is_playing());
        assert!(!session.controller_mut().tick(first));
    }

    #[test]
    fn test_unknown_selection_is_empty() {
        let mut session = Session::default();
        session.select("array-insert").unwrap();
        session.select("not-a-thing").unwrap();
        assert!(!session.is_available());
        assert_eq!(session.total_steps(), 0);
        assert!(session.current().is_none());
        assert!(session.current_meta().is_none());
    }

    #[test]
    fn test_steps_changed_listener() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut session = Session::default();
        let sink = Rc::clone(&seen);
        session.on_steps_changed(move |total| sink.borrow_mut().push(total));

        session.select("ordered-list-search").unwrap();
        session.select("missing").unwrap();
        assert_eq!(*seen.borrow(), vec![2, 0]);
    }
}
