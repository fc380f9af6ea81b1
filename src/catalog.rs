//! Operation catalog
//!
//! Every operation the engine can narrate is a variant of [`Operation`], and
//! each belongs to exactly one structure [`Family`]. The string identifiers
//! (`"heap-insert"`, `"tree-traverse-inorder"`, ...) are the contract with the
//! host; they are resolved to an `Operation` once by the
//! [`router`](crate::router) and never matched as strings afterwards.

use crate::snapshot::Marks;

/// Structure family an operation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Array,
    List,
    LinkedList,
    Stack,
    Queue,
    Heap,
    Tree,
    Sorting,
    Composite,
}

impl Family {
    pub const ALL: [Family; 9] = [
        Family::Array,
        Family::List,
        Family::LinkedList,
        Family::Stack,
        Family::Queue,
        Family::Heap,
        Family::Tree,
        Family::Sorting,
        Family::Composite,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Family::Array => "array",
            Family::List => "list",
            Family::LinkedList => "linked list",
            Family::Stack => "stack",
            Family::Queue => "queue",
            Family::Heap => "heap",
            Family::Tree => "tree",
            Family::Sorting => "sorting",
            Family::Composite => "composite",
        }
    }

    /// Annotation kinds this family's snapshots may carry
    pub fn marks(self) -> Marks {
        let common = Marks::ACTIVE | Marks::HIGHLIGHTED | Marks::NEW | Marks::DELETING;
        match self {
            Family::Array => common | Marks::FOUND,
            Family::List => common | Marks::COMPARING | Marks::FOUND,
            Family::LinkedList => common | Marks::FOUND | Marks::HEAD | Marks::TAIL | Marks::POINTER,
            Family::Stack => {
                common | Marks::TOP | Marks::PEEKING | Marks::SEARCHING | Marks::FOUND
            }
            Family::Queue => {
                common
                    | Marks::FRONT
                    | Marks::REAR
                    | Marks::SEARCHING
                    | Marks::FOUND
            }
            Family::Heap => {
                common | Marks::COMPARING | Marks::SWAPPING | Marks::ROOT | Marks::LEAF
            }
            Family::Tree => {
                common
                    | Marks::COMPARING
                    | Marks::ROOT
                    | Marks::LEAF
                    | Marks::SEARCHING
                    | Marks::FOUND
                    | Marks::VISITED
            }
            Family::Sorting => Marks::COMPARING | Marks::SWAPPING | Marks::SORTED,
            Family::Composite => {
                common | Marks::TOP | Marks::FRONT | Marks::REAR | Marks::SEARCHING | Marks::FOUND
            }
        }
    }
}

/// Every operation the engine knows how to narrate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ArrayInsert,
    ArrayDelete,
    ArraySearch,
    ArrayUpdate,
    OrderedListInsert,
    UnorderedListInsert,
    OrderedListSearch,
    UnorderedListSearch,
    LinkedListInsert,
    LinkedListDelete,
    LinkedListSearch,
    LinkedListUpdate,
    StackPush,
    StackPop,
    StackPeek,
    StackSearch,
    StackClear,
    QueueEnqueue,
    QueueDequeue,
    QueuePeek,
    QueueSearch,
    QueueClear,
    HeapInsert,
    HeapExtract,
    HeapPeek,
    HeapHeapify,
    TreeInsert,
    TreeDelete,
    TreeSearch,
    TreeTraverseInorder,
    TreeTraversePreorder,
    TreeTraversePostorder,
    BubbleSort,
    StackUsingArray,
    QueueUsingArray,
    GraphUsingArray,
    HashTableUsingArray,
}

impl Operation {
    /// Catalog order, grouped by family
    pub const ALL: [Operation; 37] = [
        Operation::ArrayInsert,
        Operation::ArrayDelete,
        Operation::ArraySearch,
        Operation::ArrayUpdate,
        Operation::OrderedListInsert,
        Operation::UnorderedListInsert,
        Operation::OrderedListSearch,
        Operation::UnorderedListSearch,
        Operation::LinkedListInsert,
        Operation::LinkedListDelete,
        Operation::LinkedListSearch,
        Operation::LinkedListUpdate,
        Operation::StackPush,
        Operation::StackPop,
        Operation::StackPeek,
        Operation::StackSearch,
        Operation::StackClear,
        Operation::QueueEnqueue,
        Operation::QueueDequeue,
        Operation::QueuePeek,
        Operation::QueueSearch,
        Operation::QueueClear,
        Operation::HeapInsert,
        Operation::HeapExtract,
        Operation::HeapPeek,
        Operation::HeapHeapify,
        Operation::TreeInsert,
        Operation::TreeDelete,
        Operation::TreeSearch,
        Operation::TreeTraverseInorder,
        Operation::TreeTraversePreorder,
        Operation::TreeTraversePostorder,
        Operation::BubbleSort,
        Operation::StackUsingArray,
        Operation::QueueUsingArray,
        Operation::GraphUsingArray,
        Operation::HashTableUsingArray,
    ];

    /// Routing identifier
    pub fn id(self) -> &'static str {
        match self {
            Operation::ArrayInsert => "array-insert",
            Operation::ArrayDelete => "array-delete",
            Operation::ArraySearch => "array-search",
            Operation::ArrayUpdate => "array-update",
            Operation::OrderedListInsert => "ordered-list-insert",
            Operation::UnorderedListInsert => "unordered-list-insert",
            Operation::OrderedListSearch => "ordered-list-search",
            Operation::UnorderedListSearch => "unordered-list-search",
            Operation::LinkedListInsert => "linkedlist-insert",
            Operation::LinkedListDelete => "linkedlist-delete",
            Operation::LinkedListSearch => "linkedlist-search",
            Operation::LinkedListUpdate => "linkedlist-update",
            Operation::StackPush => "stack-push",
            Operation::StackPop => "stack-pop",
            Operation::StackPeek => "stack-peek",
            Operation::StackSearch => "stack-search",
            Operation::StackClear => "stack-clear",
            Operation::QueueEnqueue => "queue-enqueue",
            Operation::QueueDequeue => "queue-dequeue",
            Operation::QueuePeek => "queue-peek",
            Operation::QueueSearch => "queue-search",
            Operation::QueueClear => "queue-clear",
            Operation::HeapInsert => "heap-insert",
            Operation::HeapExtract => "heap-extract",
            Operation::HeapPeek => "heap-peek",
            Operation::HeapHeapify => "heap-heapify",
            Operation::TreeInsert => "tree-insert",
            Operation::TreeDelete => "tree-delete",
            Operation::TreeSearch => "tree-search",
            Operation::TreeTraverseInorder => "tree-traverse-inorder",
            Operation::TreeTraversePreorder => "tree-traverse-preorder",
            Operation::TreeTraversePostorder => "tree-traverse-postorder",
            Operation::BubbleSort => "bubble-sort",
            Operation::StackUsingArray => "stack-using-array",
            Operation::QueueUsingArray => "queue-using-array",
            Operation::GraphUsingArray => "graph-using-array",
            Operation::HashTableUsingArray => "hash-table-using-array",
        }
    }

    pub fn family(self) -> Family {
        use Operation::*;
        match self {
            ArrayInsert | ArrayDelete | ArraySearch | ArrayUpdate => Family::Array,
            OrderedListInsert | UnorderedListInsert | OrderedListSearch | UnorderedListSearch => {
                Family::List
            }
            LinkedListInsert | LinkedListDelete | LinkedListSearch | LinkedListUpdate => {
                Family::LinkedList
            }
            StackPush | StackPop | StackPeek | StackSearch | StackClear => Family::Stack,
            QueueEnqueue | QueueDequeue | QueuePeek | QueueSearch | QueueClear => Family::Queue,
            HeapInsert | HeapExtract | HeapPeek | HeapHeapify => Family::Heap,
            TreeInsert | TreeDelete | TreeSearch | TreeTraverseInorder | TreeTraversePreorder
            | TreeTraversePostorder => Family::Tree,
            BubbleSort => Family::Sorting,
            StackUsingArray | QueueUsingArray | GraphUsingArray | HashTableUsingArray => {
                Family::Composite
            }
        }
    }

    /// Human readable title
    pub fn title(self) -> &'static str {
        match self {
            Operation::ArrayInsert => "Array Insertion",
            Operation::ArrayDelete => "Array Deletion",
            Operation::ArraySearch => "Array Search",
            Operation::ArrayUpdate => "Array Update",
            Operation::OrderedListInsert => "Ordered List Insertion",
            Operation::UnorderedListInsert => "Unordered List Insertion",
            Operation::OrderedListSearch => "Ordered List Binary Search",
            Operation::UnorderedListSearch => "Unordered List Search",
            Operation::LinkedListInsert => "Linked List Insertion",
            Operation::LinkedListDelete => "Linked List Deletion",
            Operation::LinkedListSearch => "Linked List Search",
            Operation::LinkedListUpdate => "Linked List Update",
            Operation::StackPush => "Stack Push",
            Operation::StackPop => "Stack Pop",
            Operation::StackPeek => "Stack Peek",
            Operation::StackSearch => "Stack Search",
            Operation::StackClear => "Stack Clear",
            Operation::QueueEnqueue => "Queue Enqueue",
            Operation::QueueDequeue => "Queue Dequeue",
            Operation::QueuePeek => "Queue Peek",
            Operation::QueueSearch => "Queue Search",
            Operation::QueueClear => "Queue Clear",
            Operation::HeapInsert => "Heap Insertion",
            Operation::HeapExtract => "Heap Extract Max",
            Operation::HeapPeek => "Heap Peek",
            Operation::HeapHeapify => "Heapify",
            Operation::TreeInsert => "BST Insertion",
            Operation::TreeDelete => "BST Deletion",
            Operation::TreeSearch => "BST Search",
            Operation::TreeTraverseInorder => "Inorder Traversal",
            Operation::TreeTraversePreorder => "Preorder Traversal",
            Operation::TreeTraversePostorder => "Postorder Traversal",
            Operation::BubbleSort => "Bubble Sort",
            Operation::StackUsingArray => "Stack Using Array",
            Operation::QueueUsingArray => "Queue Using Array",
            Operation::GraphUsingArray => "Graph Using Adjacency Matrix",
            Operation::HashTableUsingArray => "Hash Table Using Array",
        }
    }

    /// Time and space complexity shown next to the title
    pub fn complexity(self) -> (&'static str, &'static str) {
        use Operation::*;
        match self {
            ArrayInsert | ArrayDelete | ArraySearch => ("O(n)", "O(1)"),
            ArrayUpdate => ("O(1)", "O(1)"),
            OrderedListInsert | UnorderedListSearch => ("O(n)", "O(1)"),
            UnorderedListInsert => ("O(1)", "O(1)"),
            OrderedListSearch => ("O(log n)", "O(1)"),
            LinkedListInsert | LinkedListDelete | LinkedListSearch | LinkedListUpdate => {
                ("O(n)", "O(1)")
            }
            StackPush | StackPop | StackPeek => ("O(1)", "O(1)"),
            StackSearch | StackClear => ("O(n)", "O(1)"),
            QueueEnqueue | QueueDequeue | QueuePeek => ("O(1)", "O(1)"),
            QueueSearch | QueueClear => ("O(n)", "O(1)"),
            HeapInsert | HeapExtract => ("O(log n)", "O(1)"),
            HeapPeek => ("O(1)", "O(1)"),
            HeapHeapify => ("O(n)", "O(1)"),
            TreeInsert | TreeDelete | TreeSearch => ("O(h)", "O(h)"),
            TreeTraverseInorder | TreeTraversePreorder | TreeTraversePostorder => ("O(n)", "O(h)"),
            BubbleSort => ("O(n^2)", "O(1)"),
            StackUsingArray | QueueUsingArray => ("O(1)", "O(n)"),
            GraphUsingArray => ("O(1)", "O(V^2)"),
            HashTableUsingArray => ("O(1)", "O(n)"),
        }
    }

    /// Position in [`Operation::ALL`]
    pub fn ordinal(self) -> usize {
        Operation::ALL
            .iter()
            .position(|op| *op == self)
            .unwrap_or_default()
    }

    /// Next operation in catalog order, wrapping around
    pub fn next(self) -> Operation {
        Operation::ALL[(self.ordinal() + 1) % Operation::ALL.len()]
    }

    /// Previous operation in catalog order, wrapping around
    pub fn prev(self) -> Operation {
        let len = Operation::ALL.len();
        Operation::ALL[(self.ordinal() + len - 1) % len]
    }
}
