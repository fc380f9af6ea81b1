// Owned state types, one per snapshot shape

use super::layout::{heap_position, Point};
use super::{Annotated, Element, Marks};

/// Ordered elements: array, list, linked list and sorting bars
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SequenceState {
    pub elements: Vec<Element<i32>>,
    /// Linked lists stamp `HEAD` and `TAIL` on their ends
    pub linked: bool,
}

impl SequenceState {
    pub fn from_values(values: &[i32]) -> Self {
        SequenceState {
            elements: values.iter().copied().map(Element::new).collect(),
            linked: false,
        }
    }

    pub fn linked(values: &[i32]) -> Self {
        SequenceState {
            linked: true,
            ..SequenceState::from_values(values)
        }
    }

    pub fn values(&self) -> Vec<i32> {
        self.elements.iter().map(|e| e.value).collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Mark every index in `range`, ignoring indices past the end
    pub fn mark_range(&mut self, range: std::ops::Range<usize>, marks: Marks) {
        for element in self.elements.iter_mut().skip(range.start).take(range.len()) {
            element.mark(marks);
        }
    }

    pub fn mark(&mut self, index: usize, marks: Marks) {
        if let Some(element) = self.elements.get_mut(index) {
            element.mark(marks);
        }
    }

    pub fn unmark(&mut self, index: usize, marks: Marks) {
        if let Some(element) = self.elements.get_mut(index) {
            element.unmark(marks);
        }
    }
}

impl Annotated for SequenceState {
    fn each_marks(&self, f: &mut dyn FnMut(Marks)) {
        self.elements.iter().for_each(|e| f(e.marks));
    }

    fn each_marks_mut(&mut self, f: &mut dyn FnMut(&mut Marks)) {
        self.elements.iter_mut().for_each(|e| f(&mut e.marks));
    }

    fn restamp(&mut self) {
        for element in &mut self.elements {
            element.unmark(Marks::STRUCTURAL);
        }
        if self.linked {
            if let Some(head) = self.elements.first_mut() {
                head.mark(Marks::HEAD);
            }
            if let Some(tail) = self.elements.last_mut() {
                tail.mark(Marks::TAIL);
            }
        }
    }
}

/// Stack stored bottom to top
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackState {
    pub elements: Vec<Element<i32>>,
    pub top: Option<usize>,
    pub capacity: usize,
}

impl StackState {
    pub fn from_values(values: &[i32], capacity: usize) -> Self {
        StackState {
            elements: values.iter().copied().map(Element::new).collect(),
            top: values.len().checked_sub(1),
            capacity,
        }
    }

    pub fn values(&self) -> Vec<i32> {
        self.elements.iter().map(|e| e.value).collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.elements.len() >= self.capacity
    }

    /// Push onto the top; returns false when the stack is full
    pub fn push(&mut self, element: Element<i32>) -> bool {
        if self.is_full() {
            return false;
        }
        self.elements.push(element);
        self.top = Some(self.elements.len() - 1);
        true
    }

    pub fn pop(&mut self) -> Option<Element<i32>> {
        let element = self.elements.pop()?;
        self.top = self.elements.len().checked_sub(1);
        Some(element)
    }

    pub fn top_mut(&mut self) -> Option<&mut Element<i32>> {
        self.top.and_then(|top| self.elements.get_mut(top))
    }

    pub fn clear(&mut self) {
        self.elements.clear();
        self.top = None;
    }

    /// `top` points at the last element, or is `None` when empty
    pub fn is_consistent(&self) -> bool {
        self.top == self.elements.len().checked_sub(1)
    }
}

impl Annotated for StackState {
    fn each_marks(&self, f: &mut dyn FnMut(Marks)) {
        self.elements.iter().for_each(|e| f(e.marks));
    }

    fn each_marks_mut(&mut self, f: &mut dyn FnMut(&mut Marks)) {
        self.elements.iter_mut().for_each(|e| f(&mut e.marks));
    }

    fn restamp(&mut self) {
        for element in &mut self.elements {
            element.unmark(Marks::STRUCTURAL);
        }
        if let Some(top) = self.top_mut() {
            top.mark(Marks::TOP);
        }
    }
}

/// Queue stored front to rear
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueState {
    pub elements: Vec<Element<i32>>,
    pub front: usize,
    pub rear: Option<usize>,
}

impl QueueState {
    pub fn from_values(values: &[i32]) -> Self {
        QueueState {
            elements: values.iter().copied().map(Element::new).collect(),
            front: 0,
            rear: values.len().checked_sub(1),
        }
    }

    pub fn values(&self) -> Vec<i32> {
        self.elements.iter().map(|e| e.value).collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn enqueue(&mut self, element: Element<i32>) {
        self.elements.push(element);
        self.rear = Some(self.elements.len() - 1);
    }

    /// Remove the front element; the remaining elements shift forward
    pub fn dequeue(&mut self) -> Option<Element<i32>> {
        if self.elements.is_empty() {
            return None;
        }
        let element = self.elements.remove(0);
        self.front = 0;
        self.rear = self.elements.len().checked_sub(1);
        Some(element)
    }

    pub fn clear(&mut self) {
        self.elements.clear();
        self.front = 0;
        self.rear = None;
    }

    /// `front` is 0 and `rear` points at the last element, or is `None` when empty
    pub fn is_consistent(&self) -> bool {
        self.front == 0 && self.rear == self.elements.len().checked_sub(1)
    }
}

impl Annotated for QueueState {
    fn each_marks(&self, f: &mut dyn FnMut(Marks)) {
        self.elements.iter().for_each(|e| f(e.marks));
    }

    fn each_marks_mut(&mut self, f: &mut dyn FnMut(&mut Marks)) {
        self.elements.iter_mut().for_each(|e| f(&mut e.marks));
    }

    fn restamp(&mut self) {
        for element in &mut self.elements {
            element.unmark(Marks::STRUCTURAL);
        }
        if let Some(front) = self.elements.get_mut(self.front) {
            front.mark(Marks::FRONT);
        }
        if let Some(rear) = self.rear.and_then(|rear| self.elements.get_mut(rear)) {
            rear.mark(Marks::REAR);
        }
    }
}

/// Binary heap in level order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeapState {
    pub elements: Vec<Element<i32>>,
}

impl HeapState {
    pub fn from_values(values: &[i32]) -> Self {
        HeapState {
            elements: values.iter().copied().map(Element::new).collect(),
        }
    }

    pub fn values(&self) -> Vec<i32> {
        self.elements.iter().map(|e| e.value).collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn value(&self, index: usize) -> Option<i32> {
        self.elements.get(index).map(|e| e.value)
    }

    pub fn parent(index: usize) -> Option<usize> {
        (index > 0).then(|| (index - 1) / 2)
    }

    /// Index of the larger existing child of `index`
    pub fn larger_child(&self, index: usize) -> Option<usize> {
        let left = 2 * index + 1;
        let right = left + 1;
        match (self.value(left), self.value(right)) {
            (Some(l), Some(r)) if r > l => Some(right),
            (Some(_), _) => Some(left),
            _ => None,
        }
    }

    /// Exchange two values; marks stay with their positions
    pub fn swap_values(&mut self, a: usize, b: usize) {
        if a < self.elements.len() && b < self.elements.len() {
            let value = self.elements[a].value;
            self.elements[a].value = self.elements[b].value;
            self.elements[b].value = value;
        }
    }

    pub fn mark(&mut self, index: usize, marks: Marks) {
        if let Some(element) = self.elements.get_mut(index) {
            element.mark(marks);
        }
    }

    pub fn unmark(&mut self, index: usize, marks: Marks) {
        if let Some(element) = self.elements.get_mut(index) {
            element.unmark(marks);
        }
    }

    pub fn is_max_heap(&self) -> bool {
        (1..self.elements.len()).all(|i| {
            let parent = (i - 1) / 2;
            self.elements[parent].value >= self.elements[i].value
        })
    }
}

impl Annotated for HeapState {
    fn each_marks(&self, f: &mut dyn FnMut(Marks)) {
        self.elements.iter().for_each(|e| f(e.marks));
    }

    fn each_marks_mut(&mut self, f: &mut dyn FnMut(&mut Marks)) {
        self.elements.iter_mut().for_each(|e| f(&mut e.marks));
    }

    fn restamp(&mut self) {
        let len = self.elements.len();
        for (index, element) in self.elements.iter_mut().enumerate() {
            element.unmark(Marks::STRUCTURAL);
            if index == 0 {
                element.mark(Marks::ROOT);
            }
            if 2 * index + 1 >= len {
                element.mark(Marks::LEAF);
            }
            element.pos = Some(heap_position(index, len));
        }
    }
}

/// Direction taken from a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Left,
    Right,
}

/// Depth-first visiting orders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Inorder,
    Preorder,
    Postorder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub element: Element<i32>,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn new(value: i32) -> Self {
        TreeNode {
            element: Element::new(value),
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> i32 {
        self.element.value
    }

    pub fn child(&self, branch: Branch) -> Option<&TreeNode> {
        match branch {
            Branch::Left => self.left.as_deref(),
            Branch::Right => self.right.as_deref(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Binary search tree addressed by paths of [`Branch`] from the root
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TreeState {
    pub root: Option<Box<TreeNode>>,
}

impl TreeState {
    /// Build a tree by inserting `values` in order; duplicates are dropped
    pub fn from_values(values: &[i32]) -> Self {
        let mut tree = TreeState::default();
        for &value in values {
            let path = tree.search_path(value);
            if let Some(slot) = tree.slot_mut(&path) {
                if slot.is_none() {
                    *slot = Some(Box::new(TreeNode::new(value)));
                }
            }
        }
        tree
    }

    /// Path the search for `value` follows: ends at the node holding `value`
    /// or at the empty slot where it would be inserted
    pub fn search_path(&self, value: i32) -> Vec<Branch> {
        let mut path = Vec::new();
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            let branch = if value < node.value() {
                Branch::Left
            } else if value > node.value() {
                Branch::Right
            } else {
                break;
            };
            path.push(branch);
            current = node.child(branch);
        }
        path
    }

    pub fn node(&self, path: &[Branch]) -> Option<&TreeNode> {
        let mut current = self.root.as_deref()?;
        for &branch in path {
            current = current.child(branch)?;
        }
        Some(current)
    }

    pub fn node_mut(&mut self, path: &[Branch]) -> Option<&mut TreeNode> {
        self.slot_mut(path)?.as_deref_mut()
    }

    /// The owning slot at the end of `path`, which may be empty
    pub fn slot_mut(&mut self, path: &[Branch]) -> Option<&mut Option<Box<TreeNode>>> {
        let mut slot = &mut self.root;
        for &branch in path {
            slot = match slot {
                Some(node) => match branch {
                    Branch::Left => &mut node.left,
                    Branch::Right => &mut node.right,
                },
                None => return None,
            };
        }
        Some(slot)
    }

    pub fn mark(&mut self, path: &[Branch], marks: Marks) {
        if let Some(node) = self.node_mut(path) {
            node.element.mark(marks);
        }
    }

    pub fn unmark(&mut self, path: &[Branch], marks: Marks) {
        if let Some(node) = self.node_mut(path) {
            node.element.unmark(marks);
        }
    }

    /// Paths of every node in the given visiting order
    pub fn order(&self, traversal: Traversal) -> Vec<Vec<Branch>> {
        fn walk(
            node: Option<&TreeNode>,
            path: &mut Vec<Branch>,
            traversal: Traversal,
            out: &mut Vec<Vec<Branch>>,
        ) {
            let Some(node) = node else {
                return;
            };
            if traversal == Traversal::Preorder {
                out.push(path.clone());
            }
            path.push(Branch::Left);
            walk(node.left.as_deref(), path, traversal, out);
            path.pop();
            if traversal == Traversal::Inorder {
                out.push(path.clone());
            }
            path.push(Branch::Right);
            walk(node.right.as_deref(), path, traversal, out);
            path.pop();
            if traversal == Traversal::Postorder {
                out.push(path.clone());
            }
        }

        let mut out = Vec::new();
        walk(self.root.as_deref(), &mut Vec::new(), traversal, &mut out);
        out
    }

    pub fn values(&self, traversal: Traversal) -> Vec<i32> {
        self.order(traversal)
            .iter()
            .filter_map(|path| self.node(path).map(TreeNode::value))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order(Traversal::Preorder).len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Every left subtree holds smaller values, every right subtree larger ones
    pub fn is_search_tree(&self) -> bool {
        self.values(Traversal::Inorder)
            .windows(2)
            .all(|pair| pair[0] < pair[1])
    }

    fn walk(node: Option<&TreeNode>, f: &mut dyn FnMut(&TreeNode)) {
        if let Some(node) = node {
            f(node);
            TreeState::walk(node.left.as_deref(), f);
            TreeState::walk(node.right.as_deref(), f);
        }
    }

    fn walk_mut(node: Option<&mut TreeNode>, f: &mut dyn FnMut(&mut TreeNode)) {
        if let Some(node) = node {
            f(node);
            TreeState::walk_mut(node.left.as_deref_mut(), f);
            TreeState::walk_mut(node.right.as_deref_mut(), f);
        }
    }

    /// Stamp structural marks and grid positions (inorder rank, depth)
    fn stamp(node: &mut TreeNode, depth: u16, rank: &mut u16) {
        node.element.unmark(Marks::STRUCTURAL);
        if let Some(left) = node.left.as_deref_mut() {
            TreeState::stamp(left, depth + 1, rank);
        }
        node.element.pos = Some(Point::new(*rank, depth));
        *rank += 1;
        if node.is_leaf() {
            node.element.mark(Marks::LEAF);
        }
        if let Some(right) = node.right.as_deref_mut() {
            TreeState::stamp(right, depth + 1, rank);
        }
    }
}

impl Annotated for TreeState {
    fn each_marks(&self, f: &mut dyn FnMut(Marks)) {
        TreeState::walk(self.root.as_deref(), &mut |node| f(node.element.marks));
    }

    fn each_marks_mut(&mut self, f: &mut dyn FnMut(&mut Marks)) {
        TreeState::walk_mut(self.root.as_deref_mut(), &mut |node| {
            f(&mut node.element.marks)
        });
    }

    fn restamp(&mut self) {
        if let Some(root) = self.root.as_deref_mut() {
            TreeState::stamp(root, 0, &mut 0);
            root.element.mark(Marks::ROOT);
        }
    }
}

/// Pointer fields of an array-backed structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// No pointers (hash table)
    Plain,
    /// Stack on array: index of the top cell
    Top(Option<usize>),
    /// Queue on array: `front` advances on dequeue, cells are not shifted
    Queue { front: usize, rear: Option<usize> },
}

/// Fixed-capacity array whose cells may be empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotState<T> {
    pub cells: Vec<Option<Element<T>>>,
    pub cursor: Cursor,
    /// Caption shown above the cells (the hash function of a hash table)
    pub caption: String,
}

impl<T> SlotState<T> {
    pub fn empty(capacity: usize, cursor: Cursor) -> Self {
        SlotState {
            cells: (0..capacity).map(|_| None).collect(),
            cursor,
            caption: String::new(),
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn get(&self, index: usize) -> Option<&Element<T>> {
        self.cells.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Element<T>> {
        self.cells.get_mut(index).and_then(Option::as_mut)
    }

    /// Store a value; returns false when `index` is out of range
    pub fn put(&mut self, index: usize, element: Element<T>) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = Some(element);
                true
            }
            None => false,
        }
    }

    pub fn take(&mut self, index: usize) -> Option<Element<T>> {
        self.cells.get_mut(index).and_then(Option::take)
    }

    pub fn mark(&mut self, index: usize, marks: Marks) {
        if let Some(element) = self.get_mut(index) {
            element.mark(marks);
        }
    }
}

impl<T> Annotated for SlotState<T> {
    fn each_marks(&self, f: &mut dyn FnMut(Marks)) {
        self.cells.iter().flatten().for_each(|e| f(e.marks));
    }

    fn each_marks_mut(&mut self, f: &mut dyn FnMut(&mut Marks)) {
        self.cells.iter_mut().flatten().for_each(|e| f(&mut e.marks));
    }

    fn restamp(&mut self) {
        for element in self.cells.iter_mut().flatten() {
            element.unmark(Marks::STRUCTURAL);
        }
        match self.cursor {
            Cursor::Plain => {}
            Cursor::Top(top) => {
                if let Some(top) = top {
                    self.mark(top, Marks::TOP);
                }
            }
            Cursor::Queue { front, rear } => {
                if let Some(rear) = rear.filter(|rear| front <= *rear) {
                    self.mark(front, Marks::FRONT);
                    self.mark(rear, Marks::REAR);
                }
            }
        }
    }
}

/// Labelled adjacency matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixState {
    pub labels: Vec<char>,
    pub cells: Vec<Vec<Element<u8>>>,
}

impl MatrixState {
    /// A matrix with no edges between the labelled nodes
    pub fn new(labels: &[char]) -> Self {
        let n = labels.len();
        MatrixState {
            labels: labels.to_vec(),
            cells: (0..n)
                .map(|_| (0..n).map(|_| Element::new(0)).collect())
                .collect(),
        }
    }

    pub fn index_of(&self, label: char) -> Option<usize> {
        self.labels.iter().position(|l| *l == label)
    }

    /// Mark both directions of the undirected edge `a`-`b`
    pub fn mark_edge(&mut self, a: usize, b: usize, marks: Marks) {
        for (row, col) in [(a, b), (b, a)] {
            if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
                cell.mark(marks);
            }
        }
    }

    /// Set both directions of the undirected edge `a`-`b`
    pub fn connect(&mut self, a: usize, b: usize) {
        for (row, col) in [(a, b), (b, a)] {
            if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
                cell.value = 1;
            }
        }
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.cells
            .get(a)
            .and_then(|row| row.get(b))
            .is_some_and(|cell| cell.value == 1)
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.cells.len();
        (0..n).all(|a| (0..n).all(|b| self.has_edge(a, b) == self.has_edge(b, a)))
    }
}

impl Annotated for MatrixState {
    fn each_marks(&self, f: &mut dyn FnMut(Marks)) {
        self.cells.iter().flatten().for_each(|e| f(e.marks));
    }

    fn each_marks_mut(&mut self, f: &mut dyn FnMut(&mut Marks)) {
        self.cells.iter_mut().flatten().for_each(|e| f(&mut e.marks));
    }

    fn restamp(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.unmark(Marks::STRUCTURAL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_pointer_follows_pushes() {
        let mut stack = StackState::from_values(&[10, 20], 3);
        assert_eq!(stack.top, Some(1));
        assert!(stack.push(Element::new(30)));
        assert!(!stack.push(Element::new(40)));
        assert_eq!(stack.top, Some(2));
        stack.pop();
        stack.pop();
        stack.pop();
        assert_eq!(stack.top, None);
        assert!(stack.pop().is_none());
        assert!(stack.is_consistent());
    }

    #[test]
    fn test_queue_dequeue_shifts() {
        let mut queue = QueueState::from_values(&[10, 20, 30]);
        assert_eq!(queue.dequeue().map(|e| e.value), Some(10));
        assert_eq!(queue.values(), vec![20, 30]);
        assert_eq!(queue.rear, Some(1));
        assert!(queue.is_consistent());
        queue.clear();
        assert!(queue.dequeue().is_none());
    }

    #[test]
    fn test_heap_restamp_roots_and_leaves() {
        let mut heap = HeapState::from_values(&[90, 80, 70, 60]);
        heap.restamp();
        assert!(heap.elements[0].is(Marks::ROOT));
        assert!(!heap.elements[1].is(Marks::LEAF));
        assert!(heap.elements[2].is(Marks::LEAF));
        assert!(heap.elements[3].is(Marks::LEAF));
        assert_eq!(heap.elements[0].pos, Some(Point::new(3, 0)));
        assert_eq!(heap.larger_child(0), Some(1));
        assert_eq!(heap.larger_child(2), None);
    }

    #[test]
    fn test_tree_from_values_and_orders() {
        let tree = TreeState::from_values(&[50, 30, 70, 20, 40, 60, 80]);
        assert_eq!(tree.len(), 7);
        assert!(tree.is_search_tree());
        assert_eq!(
            tree.values(Traversal::Preorder),
            vec![50, 30, 20, 40, 70, 60, 80]
        );
        assert_eq!(
            tree.values(Traversal::Postorder),
            vec![20, 40, 30, 60, 80, 70, 50]
        );
        assert_eq!(tree.search_path(65), vec![Branch::Right, Branch::Left, Branch::Right]);
        assert_eq!(
            tree.node(&[Branch::Left, Branch::Right]).map(TreeNode::value),
            Some(40)
        );
    }

    #[test]
    fn test_tree_restamp_positions() {
        let mut tree = TreeState::from_values(&[50, 30, 70]);
        tree.restamp();
        let root = tree.node(&[]).unwrap();
        assert!(root.element.is(Marks::ROOT));
        assert_eq!(root.element.pos, Some(Point::new(1, 0)));
        let left = tree.node(&[Branch::Left]).unwrap();
        assert!(left.element.is(Marks::LEAF));
        assert_eq!(left.element.pos, Some(Point::new(0, 1)));
    }

    #[test]
    fn test_slot_queue_pointers() {
        let mut slots: SlotState<i32> = SlotState::empty(5, Cursor::Queue { front: 0, rear: None });
        slots.put(0, Element::new(10));
        slots.restamp();
        assert!(!slots.get(0).unwrap().is(Marks::FRONT));

        slots.cursor = Cursor::Queue {
            front: 0,
            rear: Some(0),
        };
        slots.restamp();
        assert!(slots.get(0).unwrap().is(Marks::FRONT | Marks::REAR));
        assert_eq!(slots.occupied(), 1);
        assert!(!slots.put(7, Element::new(1)));
    }

    #[test]
    fn test_matrix_edges_are_symmetric() {
        let mut matrix = MatrixState::new(&['A', 'B', 'C']);
        matrix.connect(0, 2);
        assert!(matrix.has_edge(2, 0));
        assert!(matrix.is_symmetric());
        assert_eq!(matrix.index_of('C'), Some(2));
    }
}
