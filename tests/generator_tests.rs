// Integration tests for the step generators

use stepviz::catalog::{Family, Operation};
use stepviz::generators::generate;
use stepviz::snapshot::{Annotated, Marks, Snapshot, Traversal};

fn last(operation: Operation) -> Snapshot {
    let sequence = generate(operation).expect("generation failed");
    sequence.last().cloned().expect("empty sequence")
}

#[test]
fn test_first_frame_is_unannotated() {
    for operation in Operation::ALL {
        let sequence = generate(operation).unwrap();
        let first = sequence.first().unwrap();
        assert!(
            Marks::STRUCTURAL.contains(first.all_marks()),
            "{} starts with {:?}",
            operation.id(),
            first.all_marks()
        );
    }
}

#[test]
fn test_last_frame_is_settled() {
    for operation in Operation::ALL {
        let marks = last(operation).all_marks();
        assert!(marks.is_settled(), "{} ends with {:?}", operation.id(), marks);
    }
}

#[test]
fn test_marks_stay_within_family() {
    for operation in Operation::ALL {
        let allowed = operation.family().marks();
        let sequence = generate(operation).unwrap();
        for (index, snapshot) in sequence.steps().iter().enumerate() {
            let extra = snapshot.all_marks() - allowed;
            assert!(
                extra.is_empty(),
                "{} step {} carries {:?}",
                operation.id(),
                index,
                extra
            );
        }
    }
}

/// Overwrite one frame's marks and contents in place
fn scribble(snapshot: &mut Snapshot) {
    snapshot.each_marks_mut(&mut |marks| *marks = Marks::all());
    match snapshot {
        Snapshot::Sequence(state) => state.elements.iter_mut().for_each(|e| e.value = -1),
        Snapshot::Stack(state) => {
            state.elements.clear();
            state.capacity = 0;
            state.top = Some(99);
        }
        Snapshot::Queue(state) => {
            state.elements.clear();
            state.front = 99;
        }
        Snapshot::Heap(state) => state.elements.iter_mut().for_each(|e| e.value = -1),
        Snapshot::Tree(state) => state.root = None,
        Snapshot::Slots(state) => {
            state.cells.clear();
            state.caption.push('!');
        }
        Snapshot::Table(state) => {
            state.cells.clear();
            state.caption.push('!');
        }
        Snapshot::Matrix(state) => state.cells.iter_mut().flatten().for_each(|c| c.value = 9),
    }
}

#[test]
fn test_frames_are_independent_copies() {
    for operation in Operation::ALL {
        let fresh = generate(operation).unwrap();
        for changed in 0..fresh.len() {
            let mut steps = generate(operation).unwrap().into_steps();
            scribble(&mut steps[changed]);
            assert_ne!(steps[changed], fresh.steps()[changed]);
            for (index, step) in steps.iter().enumerate().filter(|(i, _)| *i != changed) {
                assert_eq!(
                    step,
                    &fresh.steps()[index],
                    "{}: editing step {} changed step {}",
                    operation.id(),
                    changed,
                    index
                );
            }
        }
    }
}

#[test]
fn test_stack_and_queue_pointers_match_every_frame() {
    for operation in Operation::ALL {
        let sequence = generate(operation).unwrap();
        for (index, snapshot) in sequence.steps().iter().enumerate() {
            match operation.family() {
                Family::Stack => assert!(
                    snapshot.as_stack().is_some_and(|s| s.is_consistent()),
                    "{} step {}",
                    operation.id(),
                    index
                ),
                Family::Queue => assert!(
                    snapshot.as_queue().is_some_and(|q| q.is_consistent()),
                    "{} step {}",
                    operation.id(),
                    index
                ),
                _ => {}
            }
        }
    }
}

#[test]
fn test_generation_is_deterministic() {
    for operation in Operation::ALL {
        assert_eq!(generate(operation).unwrap(), generate(operation).unwrap());
    }
}

#[test]
fn test_every_step_has_narration() {
    for operation in Operation::ALL {
        let sequence = generate(operation).unwrap();
        for index in 0..sequence.len() {
            let meta = sequence.meta(index).unwrap();
            assert!(!meta.title.is_empty(), "{} step {}", operation.id(), index);
        }
    }
}

#[test]
fn test_array_insert_shifts_right() {
    let sequence = generate(Operation::ArrayInsert).unwrap();
    assert_eq!(sequence.len(), 5);
    let first = sequence.first().and_then(Snapshot::as_sequence).unwrap();
    assert_eq!(first.values(), vec![10, 20, 30, 40, 50, 60]);

    let end = last(Operation::ArrayInsert);
    assert_eq!(
        end.as_sequence().unwrap().values(),
        vec![10, 20, 35, 30, 40, 50, 60]
    );
}

#[test]
fn test_array_delete_shifts_left() {
    let end = last(Operation::ArrayDelete);
    assert_eq!(end.as_sequence().unwrap().values(), vec![10, 20, 40, 50, 60]);
}

#[test]
fn test_linked_list_insert_keeps_head_and_tail() {
    let end = last(Operation::LinkedListInsert);
    let list = end.as_sequence().unwrap();
    assert_eq!(list.values(), vec![10, 20, 30, 35, 40, 50]);
    assert!(list.elements[0].is(Marks::HEAD));
    assert!(list.elements[list.len() - 1].is(Marks::TAIL));
}

#[test]
fn test_stack_push_moves_top() {
    let end = last(Operation::StackPush);
    let stack = end.as_stack().unwrap();
    assert_eq!(stack.values(), vec![10, 20, 30, 40]);
    assert_eq!(stack.top, Some(3));
    assert!(stack.is_consistent());
}

#[test]
fn test_stack_peek_leaves_stack_unchanged() {
    let sequence = generate(Operation::StackPeek).unwrap();
    assert_eq!(sequence.first(), sequence.last());
}

#[test]
fn test_queue_dequeue_shifts_front() {
    let sequence = generate(Operation::QueueDequeue).unwrap();
    assert_eq!(sequence.len(), 4);
    let queue = sequence.last().and_then(Snapshot::as_queue).unwrap();
    assert_eq!(queue.values(), vec![20, 30, 40]);
    assert_eq!(queue.front, 0);
    assert_eq!(queue.rear, Some(2));
}

#[test]
fn test_clear_empties_structures() {
    assert!(last(Operation::StackClear).as_stack().unwrap().is_empty());
    assert!(last(Operation::QueueClear).as_queue().unwrap().is_empty());
}

#[test]
fn test_heap_operations_keep_heap_order() {
    let cases = [
        (Operation::HeapInsert, vec![90, 80, 85, 60, 50, 70]),
        (Operation::HeapExtract, vec![80, 60, 70, 50]),
        (Operation::HeapHeapify, vec![90, 60, 70, 30, 50]),
    ];
    for (operation, expected) in cases {
        let heap = last(operation);
        let heap = heap.as_heap().unwrap();
        assert_eq!(heap.values(), expected, "{}", operation.id());
        assert!(heap.is_max_heap());
    }
}

#[test]
fn test_tree_delete_uses_inorder_successor() {
    let end = last(Operation::TreeDelete);
    let tree = end.as_tree().unwrap();
    assert_eq!(tree.values(Traversal::Inorder), vec![20, 40, 50, 60, 70, 80]);
    assert!(tree.is_search_tree());
}

#[test]
fn test_traversal_visits_every_node() {
    let sequence = generate(Operation::TreeTraversePreorder).unwrap();
    assert_eq!(sequence.len(), 9);
    let tree = sequence.last().and_then(Snapshot::as_tree).unwrap();
    assert_eq!(
        tree.values(Traversal::Preorder),
        vec![50, 30, 20, 40, 70, 60, 80]
    );
    assert!(tree.all_marks().contains(Marks::VISITED));
}

#[test]
fn test_bubble_sort_sorts_and_marks() {
    let end = last(Operation::BubbleSort);
    let row = end.as_sequence().unwrap();
    assert_eq!(row.values(), vec![11, 12, 22, 25, 34, 64, 90]);
    assert!(row.elements.iter().all(|e| e.is(Marks::SORTED)));
}

#[test]
fn test_hash_table_finds_apple() {
    let end = last(Operation::HashTableUsingArray);
    let table = end.as_table().unwrap();
    let apple = table.get(2).unwrap();
    assert_eq!(apple.value, "apple");
    assert!(apple.is(Marks::FOUND));
    assert_eq!(table.get(4).map(|e| e.value.as_str()), Some("banana"));
}

#[test]
fn test_graph_matrix_is_symmetric() {
    let end = last(Operation::GraphUsingArray);
    let matrix = end.as_matrix().unwrap();
    assert!(matrix.is_symmetric());
    assert!(matrix.has_edge(0, 1));
    assert!(matrix.has_edge(1, 2));
    assert!(!matrix.has_edge(0, 2));
}
