// Binary search tree operations and depth-first traversals

use super::{finish, join, mismatch};
use crate::catalog::{Family, Operation};
use crate::errors::EngineError;
use crate::snapshot::{
    Annotated, Branch, Element, Marks, OperationSequence, SequenceBuilder, StepMeta, Traversal,
    TreeNode, TreeState,
};

/// Insertion order of the seed tree
pub const SEED: [i32; 7] = [50, 30, 70, 20, 40, 60, 80];

const INSERT_VALUE: i32 = 65;
const DELETE_VALUE: i32 = 30;
const SEARCH_VALUE: i32 = 60;

pub fn generate(operation: Operation) -> Result<OperationSequence, EngineError> {
    let mut builder = SequenceBuilder::new(operation);
    let mut state = TreeState::from_values(&SEED);
    builder.record(
        &state,
        StepMeta::new(
            "Initial Tree",
            format!("Built by inserting {}", join(&SEED)),
        ),
    )?;

    match operation {
        Operation::TreeInsert => insert(&mut builder, &mut state, INSERT_VALUE)?,
        Operation::TreeDelete => delete(&mut builder, &mut state, DELETE_VALUE)?,
        Operation::TreeSearch => search(&mut builder, &mut state, SEARCH_VALUE)?,
        Operation::TreeTraverseInorder => traverse(&mut builder, &mut state, Traversal::Inorder)?,
        Operation::TreeTraversePreorder => {
            traverse(&mut builder, &mut state, Traversal::Preorder)?
        }
        Operation::TreeTraversePostorder => {
            traverse(&mut builder, &mut state, Traversal::Postorder)?
        }
        _ => return Err(mismatch(operation, Family::Tree)),
    }

    let summary = format!(
        "Inorder: {}",
        join(&state.values(Traversal::Inorder))
    );
    finish(builder, &mut state, StepMeta::new("Complete", summary))
}

/// Walk from the root toward `target`, one frame per visited node.
///
/// Returns the path to the node holding `target`, or to the empty slot where
/// it would be inserted.
fn descend(
    builder: &mut SequenceBuilder,
    state: &mut TreeState,
    target: i32,
    probe: Marks,
) -> Result<Vec<Branch>, EngineError> {
    let mut path = Vec::new();
    while let Some(value) = state.node(&path).map(TreeNode::value) {
        let (branch, outcome) = if target < value {
            (Some(Branch::Left), format!("{} < {}: go left", target, value))
        } else if target > value {
            (Some(Branch::Right), format!("{} > {}: go right", target, value))
        } else {
            (None, format!("{} matches", target))
        };

        state.settle();
        state.mark(&path, probe);
        builder.record(
            state,
            StepMeta::new(format!("Compare {} with {}", target, value), outcome),
        )?;

        match branch {
            Some(branch) => path.push(branch),
            None => break,
        }
    }
    Ok(path)
}

fn insert(
    builder: &mut SequenceBuilder,
    state: &mut TreeState,
    value: i32,
) -> Result<(), EngineError> {
    let path = descend(builder, state, value, Marks::COMPARING)?;
    state.settle();

    let parent = path
        .split_last()
        .and_then(|(_, parent)| state.node(parent))
        .map(TreeNode::value);
    let Some(slot) = state.slot_mut(&path) else {
        return Ok(());
    };
    if slot.is_some() {
        return builder.record(
            state,
            StepMeta::new(
                format!("{} already present", value),
                "A search tree keeps each key once",
            ),
        );
    }
    *slot = Some(Box::new(TreeNode {
        element: Element::marked(value, Marks::NEW),
        left: None,
        right: None,
    }));

    let description = match (parent, path.last()) {
        (Some(parent), Some(Branch::Left)) => format!("New leaf is the left child of {}", parent),
        (Some(parent), _) => format!("New leaf is the right child of {}", parent),
        (None, _) => "New node becomes the root".to_string(),
    };
    builder.record(
        state,
        StepMeta::new(format!("Insert {}", value), description)
            .explain("The cost is the height of the tree"),
    )
}

fn search(
    builder: &mut SequenceBuilder,
    state: &mut TreeState,
    value: i32,
) -> Result<(), EngineError> {
    let path = descend(builder, state, value, Marks::SEARCHING)?;
    state.settle();

    if state.node(&path).is_none() {
        return builder.record(
            state,
            StepMeta::new(format!("{} not found", value), "Reached an empty subtree"),
        );
    }
    state.mark(&path, Marks::ACTIVE | Marks::FOUND);
    builder.record(
        state,
        StepMeta::new(
            format!("Found {}", value),
            format!("{} comparisons", path.len() + 1),
        ),
    )
}

fn delete(
    builder: &mut SequenceBuilder,
    state: &mut TreeState,
    value: i32,
) -> Result<(), EngineError> {
    let path = descend(builder, state, value, Marks::COMPARING)?;
    state.settle();

    let Some(node) = state.node(&path) else {
        return builder.record(
            state,
            StepMeta::new(format!("{} not found", value), "Nothing to delete"),
        );
    };
    let two_children = node.left.is_some() && node.right.is_some();

    state.mark(&path, Marks::DELETING);
    builder.record(
        state,
        StepMeta::new(format!("Delete {}", value), "Node marked for removal"),
    )?;

    if !two_children {
        if let Some(slot) = state.slot_mut(&path) {
            if let Some(node) = slot.take() {
                let TreeNode { left, right, .. } = *node;
                *slot = left.or(right);
            }
        }
        return builder.record(
            state,
            StepMeta::new(
                format!("Removed {}", value),
                "At most one child, which takes the node's place",
            ),
        );
    }

    // Inorder successor: one step right, then left as far as possible
    let mut successor = path.clone();
    successor.push(Branch::Right);
    loop {
        successor.push(Branch::Left);
        if state.node(&successor).is_none() {
            successor.pop();
            break;
        }
    }
    let Some(successor_value) = state.node(&successor).map(TreeNode::value) else {
        return Ok(());
    };

    state.mark(&successor, Marks::HIGHLIGHTED);
    builder.record(
        state,
        StepMeta::new(
            format!("Inorder successor is {}", successor_value),
            "Smallest value of the right subtree",
        )
        .explain("Two children: replace the value, then remove the successor instead"),
    )?;

    state.settle();
    if let Some(node) = state.node_mut(&path) {
        node.element = Element::marked(successor_value, Marks::NEW);
    }
    state.mark(&successor, Marks::DELETING);
    builder.record(
        state,
        StepMeta::new(
            format!("Copy {} up", successor_value),
            format!("{} replaces {}", successor_value, value),
        ),
    )?;

    if let Some(slot) = state.slot_mut(&successor) {
        if let Some(node) = slot.take() {
            *slot = node.right;
        }
    }
    builder.record(
        state,
        StepMeta::new(
            format!("Remove old {}", successor_value),
            "The successor has no left child, its right subtree moves up",
        ),
    )
}

fn traverse(
    builder: &mut SequenceBuilder,
    state: &mut TreeState,
    traversal: Traversal,
) -> Result<(), EngineError> {
    let name = match traversal {
        Traversal::Inorder => "left, node, right",
        Traversal::Preorder => "node, left, right",
        Traversal::Postorder => "left, right, node",
    };
    let mut visited = Vec::new();

    for path in state.order(traversal) {
        let Some(value) = state.node(&path).map(TreeNode::value) else {
            continue;
        };
        visited.push(value);
        state.settle();
        state.mark(&path, Marks::VISITED | Marks::HIGHLIGHTED);
        builder.record(
            state,
            StepMeta::new(
                format!("Visit {}", value),
                format!("Visited: {}", join(&visited)),
            )
            .explain(format!("Order is {}", name)),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Snapshot;

    fn last(operation: Operation) -> TreeState {
        generate(operation)
            .unwrap()
            .last()
            .and_then(Snapshot::as_tree)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_insert_attaches_leaf() {
        let sequence = generate(Operation::TreeInsert).unwrap();
        // initial, three comparisons, insert, settle
        assert_eq!(sequence.len(), 6);
        let state = last(Operation::TreeInsert);
        let node = state
            .node(&[Branch::Right, Branch::Left, Branch::Right])
            .unwrap();
        assert_eq!(node.value(), 65);
        assert!(node.element.is(Marks::LEAF));
        assert!(state.is_search_tree());
    }

    #[test]
    fn test_search_marks_found() {
        let sequence = generate(Operation::TreeSearch).unwrap();
        assert_eq!(sequence.len(), 5);
        let state = last(Operation::TreeSearch);
        let node = state.node(&[Branch::Right, Branch::Left]).unwrap();
        assert!(node.element.is(Marks::ACTIVE | Marks::FOUND));
    }

    #[test]
    fn test_delete_uses_successor() {
        let state = last(Operation::TreeDelete);
        assert_eq!(
            state.values(Traversal::Inorder),
            vec![20, 40, 50, 60, 70, 80]
        );
        assert_eq!(
            state.node(&[Branch::Left]).map(TreeNode::value),
            Some(40)
        );
        assert!(state.node(&[Branch::Left, Branch::Right]).is_none());
        assert!(state.is_search_tree());
    }

    #[test]
    fn test_delete_leaf_and_single_child() {
        let mut builder = SequenceBuilder::new(Operation::TreeDelete);
        let mut state = TreeState::from_values(&[50, 30, 20]);
        delete(&mut builder, &mut state, 30).unwrap();
        assert_eq!(state.values(Traversal::Inorder), vec![20, 50]);
        delete(&mut builder, &mut state, 20).unwrap();
        assert_eq!(state.values(Traversal::Inorder), vec![50]);
        delete(&mut builder, &mut state, 99).unwrap();
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_traversals_visit_everything() {
        let sequence = generate(Operation::TreeTraversePreorder).unwrap();
        assert_eq!(sequence.len(), 1 + SEED.len() + 1);
        let first_visit = sequence.get(1).and_then(Snapshot::as_tree).unwrap();
        assert!(first_visit.node(&[]).unwrap().element.is(Marks::VISITED));

        let state = last(Operation::TreeTraversePostorder);
        let mut all = Marks::all();
        state.each_marks(&mut |marks| all &= marks);
        assert!(all.contains(Marks::VISITED));
        assert!(!all.contains(Marks::HIGHLIGHTED));
    }
}
