// Snapshot model and step recording

mod layout;
mod structures;

pub use layout::{heap_position, Point};
pub use structures::{
    Branch, Cursor, HeapState, MatrixState, QueueState, SequenceState, SlotState, StackState,
    Traversal, TreeNode, TreeState,
};

use crate::catalog::Operation;
use crate::config::MAX_STEPS;
use crate::errors::EngineError;
use bitflags::bitflags;
use tracing::trace;

bitflags! {
    /// Visual annotations carried by one element of a snapshot.
    ///
    /// The single-bit flags are grouped into three kinds:
    /// - [`Marks::TRANSIENT`] narrate one step and are cleared by the settle step
    /// - [`Marks::STRUCTURAL`] mirror pointer fields (`top`, `front`, root...) and
    ///   are restamped every time a frame is recorded
    /// - [`Marks::OUTCOME`] record a result (found, sorted, visited) and may
    ///   survive into the final frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Marks: u32 {
        const ACTIVE      = 1 << 0;
        const HIGHLIGHTED = 1 << 1;
        const NEW         = 1 << 2;
        const DELETING    = 1 << 3;
        const COMPARING   = 1 << 4;
        const SWAPPING    = 1 << 5;
        const FRONT       = 1 << 6;
        const REAR        = 1 << 7;
        const TOP         = 1 << 8;
        const ROOT        = 1 << 9;
        const LEAF        = 1 << 10;
        const PEEKING     = 1 << 11;
        const SEARCHING   = 1 << 12;
        const FOUND       = 1 << 13;
        const HEAD        = 1 << 14;
        const TAIL        = 1 << 15;
        const POINTER     = 1 << 16;
        const SORTED      = 1 << 17;
        const VISITED     = 1 << 18;

        const TRANSIENT = Self::NEW.bits()
            | Self::HIGHLIGHTED.bits()
            | Self::COMPARING.bits()
            | Self::SWAPPING.bits()
            | Self::DELETING.bits()
            | Self::SEARCHING.bits()
            | Self::PEEKING.bits()
            | Self::POINTER.bits();

        const STRUCTURAL = Self::FRONT.bits()
            | Self::REAR.bits()
            | Self::TOP.bits()
            | Self::ROOT.bits()
            | Self::LEAF.bits()
            | Self::HEAD.bits()
            | Self::TAIL.bits();

        const OUTCOME = Self::ACTIVE.bits()
            | Self::FOUND.bits()
            | Self::SORTED.bits()
            | Self::VISITED.bits();
    }
}

impl Marks {
    /// Single-bit marks with their display labels, in display priority order
    pub const LABELS: [(Marks, &'static str); 19] = [
        (Marks::DELETING, "deleting"),
        (Marks::SWAPPING, "swapping"),
        (Marks::COMPARING, "comparing"),
        (Marks::NEW, "new"),
        (Marks::FOUND, "found"),
        (Marks::SEARCHING, "searching"),
        (Marks::PEEKING, "peeking"),
        (Marks::HIGHLIGHTED, "highlighted"),
        (Marks::POINTER, "pointer"),
        (Marks::ACTIVE, "active"),
        (Marks::SORTED, "sorted"),
        (Marks::VISITED, "visited"),
        (Marks::TOP, "top"),
        (Marks::FRONT, "front"),
        (Marks::REAR, "rear"),
        (Marks::HEAD, "head"),
        (Marks::TAIL, "tail"),
        (Marks::ROOT, "root"),
        (Marks::LEAF, "leaf"),
    ];

    /// Labels of every single-bit mark set
    pub fn labels(self) -> Vec<&'static str> {
        Marks::LABELS
            .iter()
            .filter(|(mark, _)| self.contains(*mark))
            .map(|(_, label)| *label)
            .collect()
    }

    /// True when no transient mark is set
    pub fn is_settled(self) -> bool {
        !self.intersects(Marks::TRANSIENT)
    }
}

/// One element of a data structure at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element<T> {
    pub value: T,
    pub marks: Marks,
    /// Layout hint for tree-shaped families, computed when the frame is recorded
    pub pos: Option<Point>,
}

impl<T> Element<T> {
    pub fn new(value: T) -> Self {
        Element {
            value,
            marks: Marks::empty(),
            pos: None,
        }
    }

    pub fn marked(value: T, marks: Marks) -> Self {
        Element {
            value,
            marks,
            pos: None,
        }
    }

    pub fn is(&self, marks: Marks) -> bool {
        self.marks.contains(marks)
    }

    pub fn mark(&mut self, marks: Marks) {
        self.marks.insert(marks);
    }

    pub fn unmark(&mut self, marks: Marks) {
        self.marks.remove(marks);
    }
}

/// Annotation bookkeeping shared by every structure state and by [`Snapshot`]
pub trait Annotated {
    /// Visit the marks of every element
    fn each_marks(&self, f: &mut dyn FnMut(Marks));

    /// Visit the marks of every element mutably
    fn each_marks_mut(&mut self, f: &mut dyn FnMut(&mut Marks));

    /// Recompute structural marks and layout hints from the pointer fields
    fn restamp(&mut self);

    /// Clear every transient mark
    fn settle(&mut self) {
        self.each_marks_mut(&mut |marks| marks.remove(Marks::TRANSIENT));
    }

    /// Clear every mark, then restamp the structural ones
    fn clear_marks(&mut self) {
        self.each_marks_mut(&mut |marks| *marks = Marks::empty());
        self.restamp();
    }

    /// Union of the marks of every element
    fn all_marks(&self) -> Marks {
        let mut union = Marks::empty();
        self.each_marks(&mut |marks| union |= marks);
        union
    }
}

/// One frame of an operation: the full state of one structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
    /// Array, list, linked list and sorting bars
    Sequence(SequenceState),
    Stack(StackState),
    Queue(QueueState),
    Heap(HeapState),
    Tree(TreeState),
    /// Fixed-capacity array backing a stack or queue
    Slots(SlotState<i32>),
    /// Fixed-capacity array backing a hash table
    Table(SlotState<String>),
    /// Adjacency matrix backing a graph
    Matrix(MatrixState),
}

impl Snapshot {
    /// Number of elements (or occupied cells) in the frame
    pub fn len(&self) -> usize {
        let mut count = 0;
        self.each_marks(&mut |_| count += 1);
        count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_sequence(&self) -> Option<&SequenceState> {
        match self {
            Snapshot::Sequence(state) => Some(state),
            _ => None,
        }
    }

    pub fn as_stack(&self) -> Option<&StackState> {
        match self {
            Snapshot::Stack(state) => Some(state),
            _ => None,
        }
    }

    pub fn as_queue(&self) -> Option<&QueueState> {
        match self {
            Snapshot::Queue(state) => Some(state),
            _ => None,
        }
    }

    pub fn as_heap(&self) -> Option<&HeapState> {
        match self {
            Snapshot::Heap(state) => Some(state),
            _ => None,
        }
    }

    pub fn as_tree(&self) -> Option<&TreeState> {
        match self {
            Snapshot::Tree(state) => Some(state),
            _ => None,
        }
    }

    pub fn as_slots(&self) -> Option<&SlotState<i32>> {
        match self {
            Snapshot::Slots(state) => Some(state),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&SlotState<String>> {
        match self {
            Snapshot::Table(state) => Some(state),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&MatrixState> {
        match self {
            Snapshot::Matrix(state) => Some(state),
            _ => None,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Annotated {
        match self {
            Snapshot::Sequence(state) => state,
            Snapshot::Stack(state) => state,
            Snapshot::Queue(state) => state,
            Snapshot::Heap(state) => state,
            Snapshot::Tree(state) => state,
            Snapshot::Slots(state) => state,
            Snapshot::Table(state) => state,
            Snapshot::Matrix(state) => state,
        }
    }

    fn inner(&self) -> &dyn Annotated {
        match self {
            Snapshot::Sequence(state) => state,
            Snapshot::Stack(state) => state,
            Snapshot::Queue(state) => state,
            Snapshot::Heap(state) => state,
            Snapshot::Tree(state) => state,
            Snapshot::Slots(state) => state,
            Snapshot::Table(state) => state,
            Snapshot::Matrix(state) => state,
        }
    }
}

impl Annotated for Snapshot {
    fn each_marks(&self, f: &mut dyn FnMut(Marks)) {
        self.inner().each_marks(f);
    }

    fn each_marks_mut(&mut self, f: &mut dyn FnMut(&mut Marks)) {
        self.inner_mut().each_marks_mut(f);
    }

    fn restamp(&mut self) {
        self.inner_mut().restamp();
    }
}

impl From<SequenceState> for Snapshot {
    fn from(state: SequenceState) -> Self {
        Snapshot::Sequence(state)
    }
}

impl From<StackState> for Snapshot {
    fn from(state: StackState) -> Self {
        Snapshot::Stack(state)
    }
}

impl From<QueueState> for Snapshot {
    fn from(state: QueueState) -> Self {
        Snapshot::Queue(state)
    }
}

impl From<HeapState> for Snapshot {
    fn from(state: HeapState) -> Self {
        Snapshot::Heap(state)
    }
}

impl From<TreeState> for Snapshot {
    fn from(state: TreeState) -> Self {
        Snapshot::Tree(state)
    }
}

impl From<SlotState<i32>> for Snapshot {
    fn from(state: SlotState<i32>) -> Self {
        Snapshot::Slots(state)
    }
}

impl From<SlotState<String>> for Snapshot {
    fn from(state: SlotState<String>) -> Self {
        Snapshot::Table(state)
    }
}

impl From<MatrixState> for Snapshot {
    fn from(state: MatrixState) -> Self {
        Snapshot::Matrix(state)
    }
}

/// Narration attached to one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepMeta {
    pub title: String,
    pub description: String,
    pub explanation: String,
}

impl StepMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        StepMeta {
            title: title.into(),
            description: description.into(),
            explanation: String::new(),
        }
    }

    pub fn explain(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }
}

/// The complete, immutable narration of one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSequence {
    operation: Operation,
    steps: Vec<Snapshot>,
    meta: Vec<StepMeta>,
}

impl OperationSequence {
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.steps.get(index)
    }

    /// Narration of a step by index
    pub fn meta(&self, index: usize) -> Option<&StepMeta> {
        self.meta.get(index)
    }

    pub fn steps(&self) -> &[Snapshot] {
        &self.steps
    }

    pub fn first(&self) -> Option<&Snapshot> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.steps.last()
    }

    /// Get the number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Hand out the frames by value, dropping the narration
    pub fn into_steps(self) -> Vec<Snapshot> {
        self.steps
    }
}

/// Records frames while a generator runs
///
/// Every call to [`SequenceBuilder::record`] deep-copies the working state, so
/// later mutation by the generator can never leak into an earlier frame.
#[derive(Debug)]
pub struct SequenceBuilder {
    operation: Operation,
    steps: Vec<Snapshot>,
    meta: Vec<StepMeta>,
    limit: usize,
}

impl SequenceBuilder {
    pub fn new(operation: Operation) -> Self {
        SequenceBuilder::with_limit(operation, MAX_STEPS)
    }

    pub fn with_limit(operation: Operation, limit: usize) -> Self {
        SequenceBuilder {
            operation,
            steps: Vec::new(),
            meta: Vec::new(),
            limit,
        }
    }

    /// Add a copy of `state` as the next frame
    pub fn record<S>(&mut self, state: &S, meta: StepMeta) -> Result<(), EngineError>
    where
        S: Clone + Into<Snapshot>,
    {
        if self.steps.len() >= self.limit {
            return Err(EngineError::StepLimitExceeded {
                operation: self.operation,
                limit: self.limit,
            });
        }

        let mut snapshot: Snapshot = state.clone().into();
        snapshot.restamp();
        trace!(
            operation = self.operation.id(),
            step = self.steps.len(),
            title = %meta.title,
            "recorded step"
        );
        self.steps.push(snapshot);
        self.meta.push(meta);
        Ok(())
    }

    /// Get the number of recorded frames
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn finish(self) -> OperationSequence {
        OperationSequence {
            operation: self.operation,
            steps: self.steps,
            meta: self.meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_groups_are_disjoint() {
        assert!(!Marks::TRANSIENT.intersects(Marks::STRUCTURAL));
        assert!(!Marks::TRANSIENT.intersects(Marks::OUTCOME));
        assert!(!Marks::STRUCTURAL.intersects(Marks::OUTCOME));
    }

    #[test]
    fn test_labels_cover_every_single_flag() {
        let union = Marks::LABELS
            .iter()
            .fold(Marks::empty(), |acc, (mark, _)| acc | *mark);
        assert_eq!(
            union,
            Marks::TRANSIENT | Marks::STRUCTURAL | Marks::OUTCOME
        );
        assert_eq!(
            (Marks::NEW | Marks::TOP).labels(),
            vec!["new", "top"]
        );
    }

    #[test]
    fn test_record_deep_copies_state() {
        let mut builder = SequenceBuilder::new(Operation::ArrayUpdate);
        let mut state = SequenceState::from_values(&[1, 2, 3]);
        builder.record(&state, StepMeta::new("a", "")).unwrap();
        state.elements[0].value = 99;
        state.elements[0].mark(Marks::NEW);
        builder.record(&state, StepMeta::new("b", "")).unwrap();

        let sequence = builder.finish();
        let first = sequence.get(0).and_then(Snapshot::as_sequence).unwrap();
        assert_eq!(first.values(), vec![1, 2, 3]);
        assert!(first.elements[0].marks.is_empty());
        assert_eq!(sequence.meta(1).map(|m| m.title.as_str()), Some("b"));
    }

    #[test]
    fn test_record_enforces_limit() {
        let mut builder = SequenceBuilder::with_limit(Operation::ArraySearch, 1);
        let state = SequenceState::from_values(&[1]);
        builder.record(&state, StepMeta::new("a", "")).unwrap();
        let err = builder.record(&state, StepMeta::new("b", "")).unwrap_err();
        assert_eq!(
            err,
            EngineError::StepLimitExceeded {
                operation: Operation::ArraySearch,
                limit: 1
            }
        );
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_clear_marks_keeps_structure() {
        let mut snapshot = Snapshot::from(StackState::from_values(&[1, 2], 4));
        snapshot.each_marks_mut(&mut |marks| marks.insert(Marks::HIGHLIGHTED));
        snapshot.clear_marks();
        assert_eq!(snapshot.all_marks(), Marks::TOP);
        assert_eq!(snapshot.len(), 2);
    }
}
