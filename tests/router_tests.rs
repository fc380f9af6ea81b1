// Selection routing and structure invariants

use proptest::prelude::*;
use stepviz::catalog::{Family, Operation};
use stepviz::router::{Router, Selection};
use stepviz::snapshot::{Element, HeapState, QueueState, StackState};

#[test]
fn test_every_operation_routes_to_its_family_shape() {
    let router = Router::new();
    for operation in Operation::ALL {
        let selection = router.select(operation.id()).unwrap();
        let first = selection.sequence().and_then(|s| s.first()).unwrap();
        let shape_matches = match operation.family() {
            Family::Array | Family::List | Family::LinkedList | Family::Sorting => {
                first.as_sequence().is_some()
            }
            Family::Stack => first.as_stack().is_some(),
            Family::Queue => first.as_queue().is_some(),
            Family::Heap => first.as_heap().is_some(),
            Family::Tree => first.as_tree().is_some(),
            Family::Composite => {
                first.as_slots().is_some() || first.as_table().is_some() || first.as_matrix().is_some()
            }
        };
        assert!(shape_matches, "{} has the wrong snapshot kind", operation.id());
    }
}

#[test]
fn test_ids_are_unique_and_navigation_cycles() {
    let mut ids: Vec<&str> = Operation::ALL.iter().map(|op| op.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), Operation::ALL.len());

    let mut operation = Operation::ALL[0];
    for _ in 0..Operation::ALL.len() {
        operation = operation.next();
    }
    assert_eq!(operation, Operation::ALL[0]);
    assert_eq!(Operation::ALL[0].prev().next(), Operation::ALL[0]);
}

#[test]
fn test_whitespace_around_id_is_ignored() {
    let router = Router::new();
    assert_eq!(router.resolve("  stack-pop\n"), Some(Operation::StackPop));
    assert!(router.select(" stack-pop ").unwrap().is_available());
}

proptest! {
    #[test]
    fn unknown_ids_never_fail(id in "[a-z-]{0,24}") {
        let router = Router::new();
        let selection = router.select(&id).unwrap();
        match router.resolve(&id) {
            Some(_) => prop_assert!(selection.is_available()),
            None => prop_assert_eq!(selection, Selection::NotAvailable { id: id.clone() }),
        }
    }

    #[test]
    fn stack_pointer_tracks_pushes_and_pops(ops in prop::collection::vec(any::<Option<i32>>(), 0..30)) {
        let mut stack = StackState::from_values(&[], 8);
        for op in ops {
            match op {
                Some(value) => { stack.push(Element::new(value)); }
                None => { stack.pop(); }
            }
            prop_assert!(stack.is_consistent());
            prop_assert!(stack.len() <= stack.capacity);
        }
    }

    #[test]
    fn queue_pointers_track_operations(ops in prop::collection::vec(any::<Option<i32>>(), 0..30)) {
        let mut queue = QueueState::from_values(&[]);
        let mut model = std::collections::VecDeque::new();
        for op in ops {
            match op {
                Some(value) => {
                    queue.enqueue(Element::new(value));
                    model.push_back(value);
                }
                None => {
                    prop_assert_eq!(queue.dequeue().map(|e| e.value), model.pop_front());
                }
            }
            prop_assert!(queue.is_consistent());
            prop_assert_eq!(queue.values(), model.iter().copied().collect::<Vec<_>>());
        }
    }

    #[test]
    fn heap_from_sorted_values_is_a_heap(mut values in prop::collection::vec(-100i32..100, 0..20)) {
        values.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert!(HeapState::from_values(&values).is_max_heap());
    }
}
