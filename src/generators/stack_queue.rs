// Stack and queue operations
//
// The two families share their shape: a pointer-carrying sequence with
// insert, remove, peek, search and clear.

use super::{finish, join, linear_search, mismatch};
use crate::catalog::{Family, Operation};
use crate::errors::EngineError;
use crate::snapshot::{
    Annotated, Element, Marks, OperationSequence, QueueState, SequenceBuilder, StackState,
    StepMeta,
};

pub const STACK_SEED: [i32; 3] = [10, 20, 30];
pub const STACK_CAPACITY: usize = 5;
const PUSH_VALUE: i32 = 40;
const STACK_SEARCH_VALUE: i32 = 20;

pub const QUEUE_SEED: [i32; 4] = [10, 20, 30, 40];
const ENQUEUE_VALUE: i32 = 50;
const QUEUE_SEARCH_VALUE: i32 = 30;

pub fn generate_stack(operation: Operation) -> Result<OperationSequence, EngineError> {
    let mut builder = SequenceBuilder::new(operation);
    let mut state = StackState::from_values(&STACK_SEED, STACK_CAPACITY);
    builder.record(
        &state,
        StepMeta::new(
            "Initial Stack",
            format!("[{}] with capacity {}", join(&state.values()), state.capacity),
        ),
    )?;

    match operation {
        Operation::StackPush => push(&mut builder, &mut state)?,
        Operation::StackPop => pop(&mut builder, &mut state)?,
        Operation::StackPeek => stack_peek(&mut builder, &mut state)?,
        Operation::StackSearch => {
            let order: Vec<usize> = (0..state.len()).rev().collect();
            linear_search(
                &mut builder,
                &mut state,
                &order,
                STACK_SEARCH_VALUE,
                Marks::SEARCHING,
                "position",
            )?;
        }
        Operation::StackClear => {
            state.elements.iter_mut().for_each(|e| e.mark(Marks::DELETING));
            builder.record(
                &state,
                StepMeta::new("Clear", "Every element is discarded"),
            )?;
            state.clear();
            builder.record(
                &state,
                StepMeta::new("Empty stack", "top is reset to -1"),
            )?;
        }
        _ => return Err(mismatch(operation, Family::Stack)),
    }

    let summary = format!("Stack is now [{}]", join(&state.values()));
    finish(builder, &mut state, StepMeta::new("Complete", summary))
}

fn push(builder: &mut SequenceBuilder, state: &mut StackState) -> Result<(), EngineError> {
    if let Some(top) = state.top_mut() {
        let value = top.value;
        top.mark(Marks::HIGHLIGHTED);
        builder.record(
            state,
            StepMeta::new("Current top", format!("{} is on top", value)),
        )?;
        state.settle();
    }

    if !state.push(Element::marked(PUSH_VALUE, Marks::NEW)) {
        return builder.record(
            state,
            StepMeta::new("Stack overflow", "No free slot left"),
        );
    }
    builder.record(
        state,
        StepMeta::new(
            format!("Push {}", PUSH_VALUE),
            format!("top moves to {}", state.len() - 1),
        ),
    )
}

fn pop(builder: &mut SequenceBuilder, state: &mut StackState) -> Result<(), EngineError> {
    let Some(value) = state.top_mut().map(|top| {
        top.mark(Marks::HIGHLIGHTED);
        top.value
    }) else {
        return builder.record(
            state,
            StepMeta::new("Stack underflow", "Nothing to pop"),
        );
    };
    builder.record(
        state,
        StepMeta::new("Current top", format!("{} is on top", value)),
    )?;

    if let Some(top) = state.top_mut() {
        top.unmark(Marks::HIGHLIGHTED);
        top.mark(Marks::DELETING);
    }
    builder.record(
        state,
        StepMeta::new(format!("Pop {}", value), "The top element is removed"),
    )?;

    state.pop();
    builder.record(
        state,
        StepMeta::new(
            format!("Popped {}", value),
            match state.top {
                Some(top) => format!("top moves down to {}", top),
                None => "The stack is empty".to_string(),
            },
        ),
    )
}

fn stack_peek(builder: &mut SequenceBuilder, state: &mut StackState) -> Result<(), EngineError> {
    let Some(value) = state.top_mut().map(|top| {
        top.mark(Marks::PEEKING);
        top.value
    }) else {
        return Ok(());
    };
    builder.record(
        state,
        StepMeta::new("Peek", "Look at the top without removing it"),
    )?;

    if let Some(top) = state.top_mut() {
        top.unmark(Marks::PEEKING);
        top.mark(Marks::ACTIVE);
    }
    builder.record(
        state,
        StepMeta::new(format!("Top is {}", value), "Peek returns the value"),
    )?;

    if let Some(top) = state.top_mut() {
        top.unmark(Marks::ACTIVE);
    }
    builder.record(
        state,
        StepMeta::new("Stack unchanged", "Peeking never modifies the stack"),
    )
}

pub fn generate_queue(operation: Operation) -> Result<OperationSequence, EngineError> {
    let mut builder = SequenceBuilder::new(operation);
    let mut state = QueueState::from_values(&QUEUE_SEED);
    builder.record(
        &state,
        StepMeta::new("Initial Queue", format!("[{}]", join(&state.values()))),
    )?;

    match operation {
        Operation::QueueEnqueue => enqueue(&mut builder, &mut state)?,
        Operation::QueueDequeue => dequeue(&mut builder, &mut state)?,
        Operation::QueuePeek => queue_peek(&mut builder, &mut state)?,
        Operation::QueueSearch => {
            let order: Vec<usize> = (0..state.len()).collect();
            linear_search(
                &mut builder,
                &mut state,
                &order,
                QUEUE_SEARCH_VALUE,
                Marks::SEARCHING,
                "position",
            )?;
        }
        Operation::QueueClear => {
            state.elements.iter_mut().for_each(|e| e.mark(Marks::DELETING));
            builder.record(
                &state,
                StepMeta::new("Clear", "Every element is discarded"),
            )?;
            state.clear();
            builder.record(
                &state,
                StepMeta::new("Empty queue", "front is 0 and rear is reset to -1"),
            )?;
        }
        _ => return Err(mismatch(operation, Family::Queue)),
    }

    let summary = format!("Queue is now [{}]", join(&state.values()));
    finish(builder, &mut state, StepMeta::new("Complete", summary))
}

fn enqueue(builder: &mut SequenceBuilder, state: &mut QueueState) -> Result<(), EngineError> {
    if let Some(rear) = state.rear {
        state.elements[rear].mark(Marks::HIGHLIGHTED);
        builder.record(
            state,
            StepMeta::new("Current rear", format!("rear is at {}", rear)),
        )?;
        state.settle();
    }

    state.enqueue(Element::marked(ENQUEUE_VALUE, Marks::NEW));
    builder.record(
        state,
        StepMeta::new(
            format!("Enqueue {}", ENQUEUE_VALUE),
            format!("New element joins at the rear, index {}", state.len() - 1),
        ),
    )
}

fn dequeue(builder: &mut SequenceBuilder, state: &mut QueueState) -> Result<(), EngineError> {
    let front = state.front;
    let Some(value) = state.elements.get(front).map(|e| e.value) else {
        return builder.record(
            state,
            StepMeta::new("Queue underflow", "Nothing to dequeue"),
        );
    };

    state.elements[front].mark(Marks::HIGHLIGHTED);
    builder.record(
        state,
        StepMeta::new("Current front", format!("{} is at the front", value)),
    )?;

    state.elements[front].unmark(Marks::HIGHLIGHTED);
    state.elements[front].mark(Marks::DELETING);
    builder.record(
        state,
        StepMeta::new(format!("Dequeue {}", value), "The front element leaves first"),
    )?;

    state.dequeue();
    builder.record(
        state,
        StepMeta::new(
            format!("Dequeued {}", value),
            "Remaining elements move forward, front stays at 0",
        )
        .explain("First in, first out"),
    )
}

fn queue_peek(builder: &mut SequenceBuilder, state: &mut QueueState) -> Result<(), EngineError> {
    let front = state.front;
    let Some(value) = state.elements.get(front).map(|e| e.value) else {
        return Ok(());
    };

    state.elements[front].mark(Marks::HIGHLIGHTED);
    builder.record(
        state,
        StepMeta::new("Peek", "Look at the front without removing it"),
    )?;

    state.elements[front].unmark(Marks::HIGHLIGHTED);
    state.elements[front].mark(Marks::ACTIVE);
    builder.record(
        state,
        StepMeta::new(format!("Front is {}", value), "Peek returns the value"),
    )?;

    state.elements[front].unmark(Marks::ACTIVE);
    builder.record(
        state,
        StepMeta::new("Queue unchanged", "Peeking never modifies the queue"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Snapshot;

    #[test]
    fn test_push_moves_top() {
        let sequence = generate_stack(Operation::StackPush).unwrap();
        let last = sequence.last().and_then(Snapshot::as_stack).unwrap();
        assert_eq!(last.values(), vec![10, 20, 30, 40]);
        assert_eq!(last.top, Some(3));
        assert!(last.elements[3].is(Marks::TOP));
        assert!(!last.elements[2].is(Marks::TOP));
    }

    #[test]
    fn test_pop_frames() {
        let sequence = generate_stack(Operation::StackPop).unwrap();
        assert_eq!(sequence.len(), 4);
        let deleting = sequence.get(2).and_then(Snapshot::as_stack).unwrap();
        assert!(deleting.elements[2].is(Marks::DELETING | Marks::TOP));
        let last = sequence.last().and_then(Snapshot::as_stack).unwrap();
        assert_eq!(last.values(), vec![10, 20]);
        assert_eq!(last.top, Some(1));
    }

    #[test]
    fn test_peek_leaves_stack_unchanged() {
        let sequence = generate_stack(Operation::StackPeek).unwrap();
        assert!(sequence
            .get(1)
            .and_then(Snapshot::as_stack)
            .unwrap()
            .elements[2]
            .is(Marks::PEEKING));
        assert_eq!(sequence.first(), sequence.last());
    }

    #[test]
    fn test_stack_search_runs_top_down() {
        let sequence = generate_stack(Operation::StackSearch).unwrap();
        let first_check = sequence.get(1).and_then(Snapshot::as_stack).unwrap();
        assert!(first_check.elements[2].is(Marks::HIGHLIGHTED | Marks::SEARCHING));
        let last = sequence.last().and_then(Snapshot::as_stack).unwrap();
        assert!(last.elements[1].is(Marks::FOUND));
        assert!(last.elements[2].is(Marks::ACTIVE));
        assert!(last.elements[0].marks.is_empty());
    }

    #[test]
    fn test_stack_clear_empties() {
        let sequence = generate_stack(Operation::StackClear).unwrap();
        let last = sequence.last().and_then(Snapshot::as_stack).unwrap();
        assert!(last.is_empty());
        assert_eq!(last.top, None);
    }

    #[test]
    fn test_dequeue_frames() {
        let sequence = generate_queue(Operation::QueueDequeue).unwrap();
        assert_eq!(sequence.len(), 4);
        let highlighted = sequence.get(1).and_then(Snapshot::as_queue).unwrap();
        assert!(highlighted.elements[0].is(Marks::HIGHLIGHTED | Marks::FRONT));
        let deleting = sequence.get(2).and_then(Snapshot::as_queue).unwrap();
        assert!(deleting.elements[0].is(Marks::DELETING));
        let last = sequence.last().and_then(Snapshot::as_queue).unwrap();
        assert_eq!(last.values(), vec![20, 30, 40]);
        assert_eq!(last.front, 0);
        assert_eq!(last.rear, Some(2));
    }

    #[test]
    fn test_enqueue_moves_rear() {
        let sequence = generate_queue(Operation::QueueEnqueue).unwrap();
        let last = sequence.last().and_then(Snapshot::as_queue).unwrap();
        assert_eq!(last.values(), vec![10, 20, 30, 40, 50]);
        assert!(last.elements[4].is(Marks::REAR));
        assert!(last.elements[0].is(Marks::FRONT));
    }

    #[test]
    fn test_queue_search_and_clear() {
        let sequence = generate_queue(Operation::QueueSearch).unwrap();
        // initial, three checks, found
        assert_eq!(sequence.len(), 5);

        let sequence = generate_queue(Operation::QueueClear).unwrap();
        let last = sequence.last().and_then(Snapshot::as_queue).unwrap();
        assert!(last.is_empty());
        assert!(last.is_consistent());
    }

    #[test]
    fn test_queue_peek() {
        let sequence = generate_queue(Operation::QueuePeek).unwrap();
        assert_eq!(sequence.len(), 4);
        assert_eq!(sequence.first(), sequence.last());
    }
}
