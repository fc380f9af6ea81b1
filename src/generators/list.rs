// Ordered and unordered list operations

use super::{finish, join, linear_search, mismatch};
use crate::catalog::{Family, Operation};
use crate::errors::EngineError;
use crate::snapshot::{
    Annotated, Element, Marks, OperationSequence, SequenceBuilder, SequenceState, StepMeta,
};

pub const SEED: [i32; 5] = [10, 20, 30, 40, 50];

const INSERT_VALUE: i32 = 35;
const SEARCH_VALUE: i32 = 30;

pub fn generate(operation: Operation) -> Result<OperationSequence, EngineError> {
    let mut builder = SequenceBuilder::new(operation);
    let mut state = SequenceState::from_values(&SEED);
    builder.record(
        &state,
        StepMeta::new("Initial List", format!("[{}]", join(&state.values()))),
    )?;

    match operation {
        Operation::OrderedListInsert => ordered_insert(&mut builder, &mut state)?,
        Operation::UnorderedListInsert => append(&mut builder, &mut state)?,
        Operation::OrderedListSearch => {
            binary_search(&mut builder, &mut state, SEARCH_VALUE)?;
        }
        Operation::UnorderedListSearch => {
            let order: Vec<usize> = (0..state.len()).collect();
            linear_search(
                &mut builder,
                &mut state,
                &order,
                SEARCH_VALUE,
                Marks::empty(),
                "index",
            )?;
        }
        _ => return Err(mismatch(operation, Family::List)),
    }

    let summary = format!("List is now [{}]", join(&state.values()));
    finish(builder, &mut state, StepMeta::new("Complete", summary))
}

/// Walk from the front comparing until the first larger element
fn ordered_insert(
    builder: &mut SequenceBuilder,
    state: &mut SequenceState,
) -> Result<(), EngineError> {
    let mut position = state.len();
    for index in 0..state.len() {
        let value = state.elements[index].value;
        state.elements.iter_mut().for_each(|e| e.unmark(Marks::COMPARING));
        state.mark(index, Marks::COMPARING);

        if value > INSERT_VALUE {
            builder.record(
                state,
                StepMeta::new(
                    format!("Compare {} with {}", INSERT_VALUE, value),
                    format!("{} > {}: insert before index {}", value, INSERT_VALUE, index),
                ),
            )?;
            position = index;
            break;
        }
        builder.record(
            state,
            StepMeta::new(
                format!("Compare {} with {}", INSERT_VALUE, value),
                format!("{} <= {}: keep walking", value, INSERT_VALUE),
            ),
        )?;
    }

    state.elements.iter_mut().for_each(|e| e.unmark(Marks::COMPARING));
    state
        .elements
        .insert(position, Element::marked(INSERT_VALUE, Marks::NEW));
    builder.record(
        state,
        StepMeta::new(
            format!("Insert {}", INSERT_VALUE),
            format!("{} placed at index {}, order is preserved", INSERT_VALUE, position),
        )
        .explain("Finding the position is linear, and later elements shift right"),
    )
}

fn append(builder: &mut SequenceBuilder, state: &mut SequenceState) -> Result<(), EngineError> {
    if let Some(last) = state.elements.last_mut() {
        last.mark(Marks::HIGHLIGHTED);
        builder.record(
            state,
            StepMeta::new("Go to end", "An unordered list accepts new items at the end"),
        )?;
        state.settle();
    }

    state
        .elements
        .push(Element::marked(INSERT_VALUE, Marks::NEW));
    builder.record(
        state,
        StepMeta::new(
            format!("Append {}", INSERT_VALUE),
            "No shifting needed",
        ),
    )
}

/// Binary search over `state`, which must be sorted.
///
/// Each miss highlights `[left, right]` with `mid` comparing. A hit is recorded
/// directly as the found frame with the range cleared.
fn binary_search(
    builder: &mut SequenceBuilder,
    state: &mut SequenceState,
    target: i32,
) -> Result<Option<usize>, EngineError> {
    let mut left = 0usize;
    let mut right = state.len();

    while left < right {
        let mid = (left + (right - 1)) / 2;
        let value = state.elements[mid].value;
        state.settle();

        if value == target {
            state.mark(mid, Marks::ACTIVE | Marks::FOUND);
            builder.record(
                state,
                StepMeta::new(
                    format!("Found {}", target),
                    format!("Middle index {} holds {}", mid, value),
                ),
            )?;
            return Ok(Some(mid));
        }

        state.mark_range(left..right, Marks::HIGHLIGHTED);
        state.unmark(mid, Marks::HIGHLIGHTED);
        state.mark(mid, Marks::COMPARING);
        let (direction, next) = if value < target {
            ("right", (mid + 1, right))
        } else {
            ("left", (left, mid))
        };
        builder.record(
            state,
            StepMeta::new(
                format!("Compare with index {}", mid),
                format!(
                    "{} vs {}: search the {} half [{}, {}]",
                    value, target, direction, left, right - 1
                ),
            )
            .explain("Each comparison halves the remaining range"),
        )?;
        (left, right) = next;
    }

    state.settle();
    builder.record(
        state,
        StepMeta::new(format!("{} not found", target), "The search range is empty"),
    )?;
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Snapshot;

    #[test]
    fn test_ordered_insert_keeps_order() {
        let sequence = generate(Operation::OrderedListInsert).unwrap();
        let last = sequence.last().and_then(Snapshot::as_sequence).unwrap();
        assert_eq!(last.values(), vec![10, 20, 30, 35, 40, 50]);
        // initial, four comparisons, insert, settle
        assert_eq!(sequence.len(), 7);
    }

    #[test]
    fn test_unordered_insert_appends() {
        let sequence = generate(Operation::UnorderedListInsert).unwrap();
        let last = sequence.last().and_then(Snapshot::as_sequence).unwrap();
        assert_eq!(last.values(), vec![10, 20, 30, 40, 50, 35]);
    }

    #[test]
    fn test_binary_search_hits_on_first_probe() {
        let sequence = generate(Operation::OrderedListSearch).unwrap();
        assert_eq!(sequence.len(), 2);
        let found = sequence.get(1).and_then(Snapshot::as_sequence).unwrap();
        assert!(found.elements[2].is(Marks::ACTIVE | Marks::FOUND));
        assert!(found
            .elements
            .iter()
            .all(|e| !e.is(Marks::HIGHLIGHTED) && !e.is(Marks::COMPARING)));
    }

    #[test]
    fn test_binary_search_narrows_range() {
        let mut builder = SequenceBuilder::new(Operation::OrderedListSearch);
        let mut state = SequenceState::from_values(&SEED);
        let found = binary_search(&mut builder, &mut state, 50).unwrap();
        assert_eq!(found, Some(4));
        let sequence = builder.finish();
        let first_probe = sequence.get(0).and_then(Snapshot::as_sequence).unwrap();
        assert!(first_probe.elements[2].is(Marks::COMPARING));
        assert!(first_probe.elements[0].is(Marks::HIGHLIGHTED));
        assert!(first_probe.elements[4].is(Marks::HIGHLIGHTED));
    }

    #[test]
    fn test_binary_search_miss() {
        let mut builder = SequenceBuilder::new(Operation::OrderedListSearch);
        let mut state = SequenceState::from_values(&SEED);
        assert_eq!(binary_search(&mut builder, &mut state, 5).unwrap(), None);
        assert!(builder.len() >= 2);
    }

    #[test]
    fn test_unordered_search_finds_target() {
        let sequence = generate(Operation::UnorderedListSearch).unwrap();
        assert_eq!(sequence.len(), 5);
        let last = sequence.last().and_then(Snapshot::as_sequence).unwrap();
        assert!(last.elements[2].is(Marks::FOUND));
    }
}
