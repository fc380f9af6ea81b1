//! Step generators
//!
//! One module per structure [`Family`]. Each module exposes a
//! `generate(Operation)` function that runs the operation on a fixed seed and
//! records every intermediate state into an [`OperationSequence`].
//!
//! All generators follow the same narration shape:
//! 1. the clean seed
//! 2. a highlight of the point of interest
//! 3. marks on the elements about to change
//! 4. the mutated state
//! 5. a settle frame with transient marks cleared
//!
//! Multi-iteration algorithms record one frame per iteration in between.

pub mod array;
pub mod composite;
pub mod heap;
pub mod linked_list;
pub mod list;
pub mod sorting;
pub mod stack_queue;
pub mod tree;

use crate::catalog::{Family, Operation};
use crate::errors::EngineError;
use crate::snapshot::{
    Annotated, Element, Marks, OperationSequence, QueueState, SequenceBuilder, SequenceState,
    Snapshot, StackState, StepMeta,
};
use tracing::debug;

/// Signature shared by every family generator
pub type GeneratorFn = fn(Operation) -> Result<OperationSequence, EngineError>;

/// Generator responsible for a family
pub fn for_family(family: Family) -> GeneratorFn {
    match family {
        Family::Array => array::generate,
        Family::List => list::generate,
        Family::LinkedList => linked_list::generate,
        Family::Stack => stack_queue::generate_stack,
        Family::Queue => stack_queue::generate_queue,
        Family::Heap => heap::generate,
        Family::Tree => tree::generate,
        Family::Sorting => sorting::generate,
        Family::Composite => composite::generate,
    }
}

/// Build the full sequence for one operation
pub fn generate(operation: Operation) -> Result<OperationSequence, EngineError> {
    let sequence = for_family(operation.family())(operation)?;
    debug!(
        operation = operation.id(),
        steps = sequence.len(),
        "generated sequence"
    );
    Ok(sequence)
}

fn mismatch(operation: Operation, expected: Family) -> EngineError {
    EngineError::FamilyMismatch {
        operation,
        expected,
    }
}

/// Record a settle frame if any transient mark is still set, then seal the sequence
fn finish<S>(
    mut builder: SequenceBuilder,
    state: &mut S,
    meta: StepMeta,
) -> Result<OperationSequence, EngineError>
where
    S: Annotated + Clone + Into<Snapshot>,
{
    if !state.all_marks().is_settled() {
        state.settle();
        builder.record(state, meta)?;
    }
    Ok(builder.finish())
}

/// Element storage of the linear structures, for the shared scan
trait Row {
    fn row(&mut self) -> &mut [Element<i32>];
}

impl Row for SequenceState {
    fn row(&mut self) -> &mut [Element<i32>] {
        &mut self.elements
    }
}

impl Row for StackState {
    fn row(&mut self) -> &mut [Element<i32>] {
        &mut self.elements
    }
}

impl Row for QueueState {
    fn row(&mut self) -> &mut [Element<i32>] {
        &mut self.elements
    }
}

/// Linear search visiting `order`, one frame per examined index.
///
/// The examined element carries `HIGHLIGHTED | probe`; rejected elements turn
/// `ACTIVE`. On a match the element becomes `ACTIVE | FOUND` and scanning stops.
/// Returns the matching index.
fn linear_search<S>(
    builder: &mut SequenceBuilder,
    state: &mut S,
    order: &[usize],
    target: i32,
    probe: Marks,
    noun: &str,
) -> Result<Option<usize>, EngineError>
where
    S: Row + Clone + Into<Snapshot>,
{
    let looking = Marks::HIGHLIGHTED | probe;
    let mut previous: Option<usize> = None;

    for &index in order {
        let Some(value) = state.row().get(index).map(|e| e.value) else {
            continue;
        };
        if let Some(prev) = previous {
            let row = state.row();
            row[prev].unmark(looking);
            row[prev].mark(Marks::ACTIVE);
        }
        state.row()[index].mark(looking);
        builder.record(
            state,
            StepMeta::new(
                format!("Check {} {}", noun, index),
                format!("Compare {} with target {}", value, target),
            ),
        )?;

        if value == target {
            let element = &mut state.row()[index];
            element.unmark(looking);
            element.mark(Marks::ACTIVE | Marks::FOUND);
            builder.record(
                state,
                StepMeta::new(
                    format!("Found {}", target),
                    format!("{} {} holds the target value", capitalize(noun), index),
                ),
            )?;
            return Ok(Some(index));
        }
        previous = Some(index);
    }

    for element in state.row().iter_mut() {
        element.unmark(looking);
        element.mark(Marks::ACTIVE);
    }
    builder.record(
        state,
        StepMeta::new(
            format!("{} not found", target),
            "Every element was checked",
        ),
    )?;
    Ok(None)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Comma separated values, for narration
fn join(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
