// Bubble sort over a row of bars

use super::{finish, join, mismatch};
use crate::catalog::{Family, Operation};
use crate::errors::EngineError;
use crate::snapshot::{
    Annotated, Marks, OperationSequence, SequenceBuilder, SequenceState, StepMeta,
};

pub const SEED: [i32; 7] = [64, 34, 25, 12, 22, 11, 90];

pub fn generate(operation: Operation) -> Result<OperationSequence, EngineError> {
    if operation != Operation::BubbleSort {
        return Err(mismatch(operation, Family::Sorting));
    }

    let mut builder = SequenceBuilder::new(operation);
    let mut state = SequenceState::from_values(&SEED);
    builder.record(
        &state,
        StepMeta::new("Initial Array", format!("[{}]", join(&state.values()))),
    )?;

    bubble_sort(&mut builder, &mut state)?;

    let summary = format!("Sorted: [{}]", join(&state.values()));
    finish(builder, &mut state, StepMeta::new("Complete", summary))
}

/// Ascending bubble sort with an early exit when a pass makes no swap
fn bubble_sort(builder: &mut SequenceBuilder, state: &mut SequenceState) -> Result<(), EngineError> {
    let n = state.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;

        for j in 0..n - pass - 1 {
            let (a, b) = (state.elements[j].value, state.elements[j + 1].value);
            state.settle();
            state.mark(j, Marks::COMPARING);
            state.mark(j + 1, Marks::COMPARING);
            builder.record(
                state,
                StepMeta::new(
                    format!("Compare {} and {}", a, b),
                    if a > b {
                        format!("{} > {}: out of order", a, b)
                    } else {
                        format!("{} <= {}: in order", a, b)
                    },
                ),
            )?;

            if a > b {
                state.elements.swap(j, j + 1);
                state.settle();
                state.mark(j, Marks::SWAPPING);
                state.mark(j + 1, Marks::SWAPPING);
                builder.record(
                    state,
                    StepMeta::new(format!("Swap {} and {}", a, b), "Larger value moves right"),
                )?;
                swapped = true;
            }
        }

        state.settle();
        let last = n - pass - 1;
        if !swapped {
            state.mark_range(0..last + 1, Marks::SORTED);
            return builder.record(
                state,
                StepMeta::new(
                    format!("Pass {} made no swaps", pass + 1),
                    "The remaining elements are already in order",
                ),
            );
        }
        state.mark(last, Marks::SORTED);
        builder.record(
            state,
            StepMeta::new(
                format!("Pass {} complete", pass + 1),
                format!("{} is in its final position", state.elements[last].value),
            )
            .explain("Each pass bubbles the largest remaining value to the end"),
        )?;
    }

    if state.elements.first().is_some_and(|e| !e.is(Marks::SORTED)) {
        state.mark(0, Marks::SORTED);
        builder.record(
            state,
            StepMeta::new("All passes done", "The first element is in place as well"),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Snapshot;

    #[test]
    fn test_sorts_ascending() {
        let sequence = generate(Operation::BubbleSort).unwrap();
        let last = sequence.last().and_then(Snapshot::as_sequence).unwrap();
        assert_eq!(last.values(), vec![11, 12, 22, 25, 34, 64, 90]);
        assert!(last.elements.iter().all(|e| e.marks == Marks::SORTED));
    }

    #[test]
    fn test_swap_frame_follows_out_of_order_comparison() {
        let sequence = generate(Operation::BubbleSort).unwrap();
        let compare = sequence.get(1).and_then(Snapshot::as_sequence).unwrap();
        assert!(compare.elements[0].is(Marks::COMPARING));
        assert_eq!(compare.values()[..2], [64, 34]);

        let swap = sequence.get(2).and_then(Snapshot::as_sequence).unwrap();
        assert!(swap.elements[0].is(Marks::SWAPPING));
        assert!(swap.elements.iter().all(|e| !e.is(Marks::COMPARING)));
        assert_eq!(swap.values()[..2], [34, 64]);
    }

    #[test]
    fn test_sorted_suffix_grows_each_pass() {
        let sequence = generate(Operation::BubbleSort).unwrap();
        let mut sorted_counts: Vec<usize> = sequence
            .steps()
            .iter()
            .filter_map(Snapshot::as_sequence)
            .map(|s| s.elements.iter().filter(|e| e.is(Marks::SORTED)).count())
            .collect();
        let unsorted = sorted_counts.clone();
        sorted_counts.sort_unstable();
        assert_eq!(sorted_counts, unsorted);
    }

    #[test]
    fn test_already_sorted_input_exits_early() {
        let mut builder = SequenceBuilder::new(Operation::BubbleSort);
        let mut state = SequenceState::from_values(&[1, 2, 3, 4]);
        bubble_sort(&mut builder, &mut state).unwrap();
        // three comparisons and the early exit frame
        assert_eq!(builder.len(), 4);
        assert!(state.elements.iter().all(|e| e.is(Marks::SORTED)));
    }
}
