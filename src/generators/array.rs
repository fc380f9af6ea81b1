// Array operations: insert, delete, search, update

use super::{finish, linear_search, mismatch};
use crate::catalog::{Family, Operation};
use crate::errors::EngineError;
use crate::snapshot::{Element, Marks, OperationSequence, SequenceBuilder, SequenceState, StepMeta};

pub const SEED: [i32; 6] = [10, 20, 30, 40, 50, 60];

const INSERT_INDEX: usize = 2;
const INSERT_VALUE: i32 = 35;
const DELETE_INDEX: usize = 2;
const SEARCH_VALUE: i32 = 40;
const UPDATE_INDEX: usize = 4;
const UPDATE_VALUE: i32 = 75;

pub fn generate(operation: Operation) -> Result<OperationSequence, EngineError> {
    let mut builder = SequenceBuilder::new(operation);
    let mut state = SequenceState::from_values(&SEED);
    builder.record(
        &state,
        StepMeta::new("Initial Array", format!("{} elements", state.len())),
    )?;

    match operation {
        Operation::ArrayInsert => insert(&mut builder, &mut state)?,
        Operation::ArrayDelete => delete(&mut builder, &mut state)?,
        Operation::ArraySearch => {
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
        Operation::ArrayUpdate => update(&mut builder, &mut state)?,
        _ => return Err(mismatch(operation, Family::Array)),
    }

    let summary = format!("Array is now [{}]", super::join(&state.values()));
    finish(builder, &mut state, StepMeta::new("Complete", summary))
}

fn insert(builder: &mut SequenceBuilder, state: &mut SequenceState) -> Result<(), EngineError> {
    state.mark(INSERT_INDEX, Marks::HIGHLIGHTED);
    builder.record(
        state,
        StepMeta::new(
            format!("Insert position {}", INSERT_INDEX),
            format!("{} will be placed at index {}", INSERT_VALUE, INSERT_INDEX),
        ),
    )?;

    state.mark_range(INSERT_INDEX..state.len(), Marks::HIGHLIGHTED);
    builder.record(
        state,
        StepMeta::new(
            "Make room",
            format!(
                "Elements from index {} onward shift one place right",
                INSERT_INDEX
            ),
        )
        .explain("Shifting costs one move per element after the insert position"),
    )?;

    state.elements.iter_mut().for_each(|e| e.unmark(Marks::HIGHLIGHTED));
    state
        .elements
        .insert(INSERT_INDEX, Element::marked(INSERT_VALUE, Marks::NEW));
    builder.record(
        state,
        StepMeta::new(
            format!("Insert {}", INSERT_VALUE),
            format!("{} written to index {}", INSERT_VALUE, INSERT_INDEX),
        ),
    )
}

fn delete(builder: &mut SequenceBuilder, state: &mut SequenceState) -> Result<(), EngineError> {
    let value = state.elements[DELETE_INDEX].value;
    state.mark(DELETE_INDEX, Marks::HIGHLIGHTED);
    builder.record(
        state,
        StepMeta::new(
            format!("Locate index {}", DELETE_INDEX),
            format!("{} is at index {}", value, DELETE_INDEX),
        ),
    )?;

    state.unmark(DELETE_INDEX, Marks::HIGHLIGHTED);
    state.mark(DELETE_INDEX, Marks::DELETING);
    builder.record(
        state,
        StepMeta::new(format!("Delete {}", value), "Element marked for removal"),
    )?;

    state.elements.remove(DELETE_INDEX);
    state.mark_range(DELETE_INDEX..state.len(), Marks::HIGHLIGHTED);
    builder.record(
        state,
        StepMeta::new(
            "Shift left",
            "Elements after the gap move one place left",
        )
        .explain("Deletion costs one move per element after the removed index"),
    )
}

fn update(builder: &mut SequenceBuilder, state: &mut SequenceState) -> Result<(), EngineError> {
    let old = state.elements[UPDATE_INDEX].value;
    state.mark(UPDATE_INDEX, Marks::HIGHLIGHTED);
    builder.record(
        state,
        StepMeta::new(
            format!("Access index {}", UPDATE_INDEX),
            "Direct access by index takes constant time",
        ),
    )?;

    state.unmark(UPDATE_INDEX, Marks::HIGHLIGHTED);
    state.mark(UPDATE_INDEX, Marks::DELETING);
    builder.record(
        state,
        StepMeta::new(format!("Replace {}", old), "The old value is discarded"),
    )?;

    state.elements[UPDATE_INDEX] = Element::marked(UPDATE_VALUE, Marks::NEW);
    builder.record(
        state,
        StepMeta::new(
            format!("Write {}", UPDATE_VALUE),
            format!("Index {} now holds {}", UPDATE_INDEX, UPDATE_VALUE),
        ),
    )
}
