// Max-heap operations: insert, extract, peek, heapify

use super::{finish, join, mismatch};
use crate::catalog::{Family, Operation};
use crate::errors::EngineError;
use crate::snapshot::{
    Annotated, Element, HeapState, Marks, OperationSequence, SequenceBuilder, StepMeta,
};

/// Valid max-heap in level order
pub const SEED: [i32; 5] = [90, 80, 70, 60, 50];

/// Unordered input for heapify
pub const HEAPIFY_SEED: [i32; 5] = [30, 90, 70, 60, 50];

const INSERT_VALUE: i32 = 85;

pub fn generate(operation: Operation) -> Result<OperationSequence, EngineError> {
    let mut builder = SequenceBuilder::new(operation);
    let seed: &[i32] = match operation {
        Operation::HeapHeapify => &HEAPIFY_SEED,
        _ => &SEED,
    };
    let mut state = HeapState::from_values(seed);
    builder.record(
        &state,
        StepMeta::new("Initial Heap", format!("[{}]", join(&state.values()))),
    )?;

    match operation {
        Operation::HeapInsert => insert(&mut builder, &mut state)?,
        Operation::HeapExtract => extract(&mut builder, &mut state)?,
        Operation::HeapPeek => peek(&mut builder, &mut state)?,
        Operation::HeapHeapify => heapify(&mut builder, &mut state)?,
        _ => return Err(mismatch(operation, Family::Heap)),
    }

    let summary = format!("Heap is now [{}]", join(&state.values()));
    finish(builder, &mut state, StepMeta::new("Complete", summary))
}

fn insert(builder: &mut SequenceBuilder, state: &mut HeapState) -> Result<(), EngineError> {
    state
        .elements
        .push(Element::marked(INSERT_VALUE, Marks::NEW));
    builder.record(
        state,
        StepMeta::new(
            format!("Add {}", INSERT_VALUE),
            "The new value becomes the last leaf",
        ),
    )?;
    let leaf = state.len() - 1;
    sift_up(builder, state, leaf)
}

/// Bubble the value at `index` up while it is larger than its parent
fn sift_up(
    builder: &mut SequenceBuilder,
    state: &mut HeapState,
    mut index: usize,
) -> Result<(), EngineError> {
    while let Some(parent) = HeapState::parent(index) {
        let (child_value, parent_value) = match (state.value(index), state.value(parent)) {
            (Some(c), Some(p)) => (c, p),
            _ => break,
        };

        state.settle();
        state.mark(index, Marks::COMPARING);
        state.mark(parent, Marks::COMPARING);
        let larger = child_value > parent_value;
        builder.record(
            state,
            StepMeta::new(
                format!("Compare {} with parent {}", child_value, parent_value),
                if larger {
                    format!("{} > {}: swap needed", child_value, parent_value)
                } else {
                    format!("{} <= {}: heap property holds", child_value, parent_value)
                },
            ),
        )?;
        if !larger {
            break;
        }

        state.settle();
        state.swap_values(index, parent);
        state.mark(index, Marks::SWAPPING);
        state.mark(parent, Marks::SWAPPING);
        builder.record(
            state,
            StepMeta::new(
                format!("Swap {} and {}", child_value, parent_value),
                format!("{} moves up to index {}", child_value, parent),
            ),
        )?;
        index = parent;
    }
    Ok(())
}

/// Push the value at `index` down while a child is larger
fn sift_down(
    builder: &mut SequenceBuilder,
    state: &mut HeapState,
    mut index: usize,
) -> Result<(), EngineError> {
    while let Some(child) = state.larger_child(index) {
        let (value, child_value) = match (state.value(index), state.value(child)) {
            (Some(v), Some(c)) => (v, c),
            _ => break,
        };

        state.settle();
        state.mark(index, Marks::COMPARING);
        state.mark(child, Marks::COMPARING);
        let smaller = value < child_value;
        builder.record(
            state,
            StepMeta::new(
                format!("Compare {} with child {}", value, child_value),
                if smaller {
                    format!("{} < {}: swap with the larger child", value, child_value)
                } else {
                    format!("{} >= {}: heap property holds", value, child_value)
                },
            ),
        )?;
        if !smaller {
            break;
        }

        state.settle();
        state.swap_values(index, child);
        state.mark(index, Marks::SWAPPING);
        state.mark(child, Marks::SWAPPING);
        builder.record(
            state,
            StepMeta::new(
                format!("Swap {} and {}", value, child_value),
                format!("{} moves down to index {}", value, child),
            ),
        )?;
        index = child;
    }
    Ok(())
}

fn extract(builder: &mut SequenceBuilder, state: &mut HeapState) -> Result<(), EngineError> {
    let Some(max) = state.value(0) else {
        return Ok(());
    };
    state.mark(0, Marks::HIGHLIGHTED);
    builder.record(
        state,
        StepMeta::new(format!("Maximum is {}", max), "The root holds the largest value"),
    )?;

    state.settle();
    state.mark(0, Marks::DELETING);
    builder.record(
        state,
        StepMeta::new(format!("Remove {}", max), "The root is taken out"),
    )?;

    let Some(last) = state.elements.pop() else {
        return Ok(());
    };
    if state.is_empty() {
        return builder.record(state, StepMeta::new("Heap is empty", "Nothing left to fix"));
    }
    state.elements[0] = Element::marked(last.value, Marks::NEW);
    builder.record(
        state,
        StepMeta::new(
            format!("Move {} to root", last.value),
            "The last leaf fills the hole at the root",
        ),
    )?;
    sift_down(builder, state, 0)
}

fn peek(builder: &mut SequenceBuilder, state: &mut HeapState) -> Result<(), EngineError> {
    let Some(max) = state.value(0) else {
        return Ok(());
    };
    state.mark(0, Marks::HIGHLIGHTED);
    builder.record(
        state,
        StepMeta::new("Peek", "The maximum is always at the root"),
    )?;

    state.settle();
    state.mark(0, Marks::ACTIVE);
    builder.record(
        state,
        StepMeta::new(format!("Maximum is {}", max), "Peek returns the root value"),
    )?;

    state.unmark(0, Marks::ACTIVE);
    builder.record(
        state,
        StepMeta::new("Heap unchanged", "Peeking never modifies the heap"),
    )
}

/// Bottom-up heap construction from the last internal node to the root
fn heapify(builder: &mut SequenceBuilder, state: &mut HeapState) -> Result<(), EngineError> {
    if state.len() < 2 {
        return Ok(());
    }
    for index in (0..=(state.len() - 2) / 2).rev() {
        state.settle();
        state.mark(index, Marks::HIGHLIGHTED);
        builder.record(
            state,
            StepMeta::new(
                format!("Heapify index {}", index),
                format!("Fix the subtree rooted at {}", state.elements[index].value),
            )
            .explain("Leaves are already heaps, so work starts at the last internal node"),
        )?;
        sift_down(builder, state, index)?;
    }
    Ok(())
}
