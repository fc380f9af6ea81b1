// Singly linked list operations
//
// Nodes are kept in list order in a `SequenceState` with `linked` set, so the
// head and tail marks are restamped from the ends on every frame.

use super::{finish, join, linear_search, mismatch};
use crate::catalog::{Family, Operation};
use crate::errors::EngineError;
use crate::snapshot::{
    Annotated, Element, Marks, OperationSequence, SequenceBuilder, SequenceState, StepMeta,
};

pub const SEED: [i32; 5] = [10, 20, 30, 40, 50];

const INSERT_AFTER: usize = 2;
const INSERT_VALUE: i32 = 35;
const DELETE_POSITION: usize = 2;
const SEARCH_VALUE: i32 = 30;
const UPDATE_POSITION: usize = 3;
const UPDATE_VALUE: i32 = 45;

pub fn generate(operation: Operation) -> Result<OperationSequence, EngineError> {
    let mut builder = SequenceBuilder::new(operation);
    let mut state = SequenceState::linked(&SEED);
    builder.record(
        &state,
        StepMeta::new(
            "Initial Linked List",
            format!("{} -> null", join(&state.values()).replace(", ", " -> ")),
        ),
    )?;

    match operation {
        Operation::LinkedListInsert => insert(&mut builder, &mut state)?,
        Operation::LinkedListDelete => delete(&mut builder, &mut state)?,
        Operation::LinkedListSearch => {
            let order: Vec<usize> = (0..state.len()).collect();
            linear_search(
                &mut builder,
                &mut state,
                &order,
                SEARCH_VALUE,
                Marks::empty(),
                "node",
            )?;
        }
        Operation::LinkedListUpdate => update(&mut builder, &mut state)?,
        _ => return Err(mismatch(operation, Family::LinkedList)),
    }

    let summary = format!("List is now {} -> null", join(&state.values()).replace(", ", " -> "));
    finish(builder, &mut state, StepMeta::new("Complete", summary))
}

/// Follow `next` pointers from the head up to `position`, one frame per node.
///
/// The current node is highlighted and the pointer just followed is marked on
/// the previous node.
fn walk_to(
    builder: &mut SequenceBuilder,
    state: &mut SequenceState,
    position: usize,
) -> Result<(), EngineError> {
    if state.is_empty() {
        return Ok(());
    }
    for index in 0..=position.min(state.len() - 1) {
        state.settle();
        state.mark(index, Marks::HIGHLIGHTED);
        if index > 0 {
            state.mark(index - 1, Marks::POINTER);
        }
        let value = state.elements[index].value;
        let title = if index == 0 {
            "Start at head".to_string()
        } else {
            format!("Follow next to node {}", index)
        };
        builder.record(state, StepMeta::new(title, format!("Current node holds {}", value)))?;
    }
    Ok(())
}

fn insert(builder: &mut SequenceBuilder, state: &mut SequenceState) -> Result<(), EngineError> {
    walk_to(builder, state, INSERT_AFTER)?;

    state.settle();
    state.mark(INSERT_AFTER, Marks::POINTER);
    state.elements.insert(
        INSERT_AFTER + 1,
        Element::marked(INSERT_VALUE, Marks::NEW | Marks::POINTER),
    );
    builder.record(
        state,
        StepMeta::new(
            format!("Link {}", INSERT_VALUE),
            format!(
                "New node points to the old successor, node {} points to the new node",
                INSERT_AFTER
            ),
        )
        .explain("Only two pointers change, no elements move"),
    )
}

fn delete(builder: &mut SequenceBuilder, state: &mut SequenceState) -> Result<(), EngineError> {
    walk_to(builder, state, DELETE_POSITION)?;

    let value = state.elements[DELETE_POSITION].value;
    state.settle();
    state.mark(DELETE_POSITION, Marks::DELETING);
    if DELETE_POSITION > 0 {
        state.mark(DELETE_POSITION - 1, Marks::POINTER);
    }
    builder.record(
        state,
        StepMeta::new(format!("Unlink {}", value), "Marked node will be bypassed"),
    )?;

    state.elements.remove(DELETE_POSITION);
    builder.record(
        state,
        StepMeta::new(
            format!("Removed {}", value),
            "The predecessor now points past the removed node",
        ),
    )
}

fn update(builder: &mut SequenceBuilder, state: &mut SequenceState) -> Result<(), EngineError> {
    walk_to(builder, state, UPDATE_POSITION)?;

    state.settle();
    if let Some(node) = state.elements.get_mut(UPDATE_POSITION) {
        *node = Element::marked(UPDATE_VALUE, Marks::NEW);
    }
    builder.record(
        state,
        StepMeta::new(
            format!("Write {}", UPDATE_VALUE),
            format!("Node {} now holds {}", UPDATE_POSITION, UPDATE_VALUE),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Snapshot;

    fn last(operation: Operation) -> SequenceState {
        generate(operation)
            .unwrap()
            .last()
            .and_then(Snapshot::as_sequence)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_insert_after_position() {
        let state = last(Operation::LinkedListInsert);
        assert_eq!(state.values(), vec![10, 20, 30, 35, 40, 50]);
        assert!(state.elements[0].is(Marks::HEAD));
        assert!(state.elements[5].is(Marks::TAIL));
    }

    #[test]
    fn test_walk_marks_followed_pointer() {
        let sequence = generate(Operation::LinkedListUpdate).unwrap();
        let third = sequence.get(3).and_then(Snapshot::as_sequence).unwrap();
        assert!(third.elements[2].is(Marks::HIGHLIGHTED));
        assert!(third.elements[1].is(Marks::POINTER));
        assert!(!third.elements[0].is(Marks::POINTER));
    }

    #[test]
    fn test_delete_relinks() {
        let sequence = generate(Operation::LinkedListDelete).unwrap();
        let marked = sequence
            .steps()
            .iter()
            .filter_map(Snapshot::as_sequence)
            .find(|s| s.elements.iter().any(|e| e.is(Marks::DELETING)))
            .unwrap();
        assert_eq!(marked.elements[2].value, 30);
        assert_eq!(last(Operation::LinkedListDelete).values(), vec![10, 20, 40, 50]);
    }

    #[test]
    fn test_search_and_update() {
        let found = last(Operation::LinkedListSearch);
        assert!(found.elements[2].is(Marks::FOUND));
        assert_eq!(last(Operation::LinkedListUpdate).values(), vec![10, 20, 30, 45, 50]);
    }
}
