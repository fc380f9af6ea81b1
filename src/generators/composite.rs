// Structures built on a plain array: stack, queue, graph and hash table

use super::{finish, mismatch};
use crate::catalog::{Family, Operation};
use crate::errors::EngineError;
use crate::snapshot::{
    Annotated, Cursor, Element, Marks, MatrixState, OperationSequence, SequenceBuilder, SlotState,
    StepMeta,
};

pub const CAPACITY: usize = 5;

const STACK_PUSHES: [i32; 3] = [10, 20, 30];
const QUEUE_ENQUEUES: [i32; 2] = [10, 20];

const GRAPH_NODES: [char; 4] = ['A', 'B', 'C', 'D'];
const GRAPH_EDGES: [(char, char); 2] = [('A', 'B'), ('B', 'C')];

const HASH_FUNCTION: &str = "key % 5";
/// Keys with the bucket `key % 5` assigns them
const HASH_ENTRIES: [(&str, usize); 2] = [("apple", 2), ("banana", 4)];
const HASH_LOOKUP: &str = "apple";

pub fn generate(operation: Operation) -> Result<OperationSequence, EngineError> {
    match operation {
        Operation::StackUsingArray => stack_on_array(operation),
        Operation::QueueUsingArray => queue_on_array(operation),
        Operation::GraphUsingArray => graph_on_matrix(operation),
        Operation::HashTableUsingArray => hash_table(operation),
        _ => Err(mismatch(operation, Family::Composite)),
    }
}

fn stack_on_array(operation: Operation) -> Result<OperationSequence, EngineError> {
    let mut builder = SequenceBuilder::new(operation);
    let mut state: SlotState<i32> = SlotState::empty(CAPACITY, Cursor::Top(None));
    builder.record(
        &state,
        StepMeta::new(
            "Stack Using Array",
            format!("{} empty slots, top = -1", CAPACITY),
        ),
    )?;

    let mut top: Option<usize> = None;
    for value in STACK_PUSHES {
        let index = top.map_or(0, |t| t + 1);
        state.settle();
        if !state.put(index, Element::marked(value, Marks::NEW)) {
            break;
        }
        top = Some(index);
        state.cursor = Cursor::Top(top);
        builder.record(
            &state,
            StepMeta::new(format!("Push {}", value), format!("top = {}", index)),
        )?;
    }

    if let Some(index) = top {
        let value = state.get(index).map(|e| e.value).unwrap_or_default();
        state.settle();
        state.mark(index, Marks::DELETING);
        builder.record(
            &state,
            StepMeta::new("Pop", format!("Remove top element ({})", value)),
        )?;

        state.take(index);
        top = index.checked_sub(1);
        state.cursor = Cursor::Top(top);
        builder.record(
            &state,
            StepMeta::new(
                format!("Popped {}", value),
                match top {
                    Some(t) => format!("top = {}", t),
                    None => "top = -1".to_string(),
                },
            )
            .explain("The slot is simply left free for the next push"),
        )?;
    }

    finish(builder, &mut state, StepMeta::new("Complete", "Stack on array"))
}

fn queue_on_array(operation: Operation) -> Result<OperationSequence, EngineError> {
    let mut builder = SequenceBuilder::new(operation);
    let mut front = 0usize;
    let mut rear: Option<usize> = None;
    let mut state: SlotState<i32> = SlotState::empty(CAPACITY, Cursor::Queue { front, rear });
    builder.record(
        &state,
        StepMeta::new(
            "Queue Using Array",
            format!("{} empty slots, front = 0, rear = -1", CAPACITY),
        ),
    )?;

    for value in QUEUE_ENQUEUES {
        let index = rear.map_or(0, |r| r + 1);
        state.settle();
        if !state.put(index, Element::marked(value, Marks::NEW)) {
            break;
        }
        rear = Some(index);
        state.cursor = Cursor::Queue { front, rear };
        builder.record(
            &state,
            StepMeta::new(
                format!("Enqueue {}", value),
                format!("rear = {}", index),
            ),
        )?;
    }

    if let Some(value) = state.get(front).map(|e| e.value) {
        state.settle();
        state.mark(front, Marks::DELETING);
        builder.record(
            &state,
            StepMeta::new("Dequeue", format!("Remove from front ({})", value)),
        )?;

        state.take(front);
        front += 1;
        state.cursor = Cursor::Queue { front, rear };
        builder.record(
            &state,
            StepMeta::new(
                format!("Dequeued {}", value),
                format!("front = {}", front),
            )
            .explain("front advances instead of shifting the remaining elements"),
        )?;
    }

    finish(builder, &mut state, StepMeta::new("Complete", "Queue on array"))
}

fn graph_on_matrix(operation: Operation) -> Result<OperationSequence, EngineError> {
    let mut builder = SequenceBuilder::new(operation);
    let mut state = MatrixState::new(&GRAPH_NODES);
    builder.record(
        &state,
        StepMeta::new(
            "Graph Using Adjacency Matrix",
            format!("{0}x{0} matrix, no edges", GRAPH_NODES.len()),
        ),
    )?;

    for (a, b) in GRAPH_EDGES {
        let (Some(i), Some(j)) = (state.index_of(a), state.index_of(b)) else {
            continue;
        };
        state.settle();
        state.connect(i, j);
        state.mark_edge(i, j, Marks::NEW);
        builder.record(
            &state,
            StepMeta::new(
                format!("Add Edge {}-{}", a, b),
                format!("Set [{}][{}] and [{}][{}] to 1", a, b, b, a),
            )
            .explain("Undirected edges are stored in both directions"),
        )?;
    }

    finish(builder, &mut state, StepMeta::new("Complete", "Matrix is symmetric"))
}

fn hash_table(operation: Operation) -> Result<OperationSequence, EngineError> {
    let mut builder = SequenceBuilder::new(operation);
    let mut state: SlotState<String> =
        SlotState::empty(CAPACITY, Cursor::Plain).with_caption(HASH_FUNCTION);
    builder.record(
        &state,
        StepMeta::new(
            "Hash Table Using Array",
            format!("{} buckets, hash function {}", CAPACITY, HASH_FUNCTION),
        ),
    )?;

    for (key, bucket) in HASH_ENTRIES {
        state.settle();
        state.put(bucket, Element::marked(key.to_string(), Marks::NEW));
        builder.record(
            &state,
            StepMeta::new(
                format!("Insert \"{}\" (hash: {})", key, bucket),
                format!("Hash function maps \"{}\" to index {}", key, bucket),
            ),
        )?;
    }

    if let Some((key, bucket)) = HASH_ENTRIES.iter().find(|(key, _)| *key == HASH_LOOKUP) {
        state.settle();
        state.mark(*bucket, Marks::SEARCHING);
        builder.record(
            &state,
            StepMeta::new(
                format!("Search \"{}\"", key),
                format!("Hash to index {}", bucket),
            ),
        )?;

        state.settle();
        state.mark(*bucket, Marks::ACTIVE | Marks::FOUND);
        builder.record(
            &state,
            StepMeta::new(
                format!("Found \"{}\"", key),
                "One probe, no scanning",
            )
            .explain("Lookup cost does not depend on the number of entries"),
        )?;
    }

    finish(builder, &mut state, StepMeta::new("Complete", "Hash table"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Snapshot;

    #[test]
    fn test_stack_on_array() {
        let sequence = generate(Operation::StackUsingArray).unwrap();
        // init, three pushes, pop marked, popped
        assert_eq!(sequence.len(), 6);
        let last = sequence.last().and_then(Snapshot::as_slots).unwrap();
        assert_eq!(last.cursor, Cursor::Top(Some(1)));
        assert_eq!(last.occupied(), 2);
        assert!(last.get(1).unwrap().is(Marks::TOP));
        assert!(last.get(2).is_none());
    }

    #[test]
    fn test_queue_on_array_advances_front() {
        let sequence = generate(Operation::QueueUsingArray).unwrap();
        let last = sequence.last().and_then(Snapshot::as_slots).unwrap();
        assert_eq!(
            last.cursor,
            Cursor::Queue {
                front: 1,
                rear: Some(1)
            }
        );
        assert!(last.get(0).is_none());
        assert!(last.get(1).unwrap().is(Marks::FRONT | Marks::REAR));
    }

    #[test]
    fn test_graph_edges() {
        let sequence = generate(Operation::GraphUsingArray).unwrap();
        let last = sequence.last().and_then(Snapshot::as_matrix).unwrap();
        assert!(last.has_edge(0, 1));
        assert!(last.has_edge(2, 1));
        assert!(!last.has_edge(0, 3));
        assert!(last.is_symmetric());
        let first_edge = sequence.get(1).and_then(Snapshot::as_matrix).unwrap();
        assert!(first_edge.cells[1][0].is(Marks::NEW));
    }

    #[test]
    fn test_hash_table_lookup() {
        let sequence = generate(Operation::HashTableUsingArray).unwrap();
        let last = sequence.last().and_then(Snapshot::as_table).unwrap();
        assert_eq!(last.caption, HASH_FUNCTION);
        assert_eq!(last.get(2).map(|e| e.value.as_str()), Some("apple"));
        assert_eq!(last.get(4).map(|e| e.value.as_str()), Some("banana"));
        assert!(last.get(2).unwrap().is(Marks::FOUND));
    }
}
