// Layout hints for tree-shaped snapshots

/// Grid position of a node: `x` is the column, `y` the depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub fn new(x: u16, y: u16) -> Self {
        Point { x, y }
    }
}

/// Depth of the node stored at `index` of a level-order array
fn level(index: usize) -> u32 {
    (index + 1).ilog2()
}

/// Position of the heap node at `index` in a heap of `len` nodes.
///
/// The last level is laid out on even columns `0, 2, 4, ...` and every parent
/// sits halfway between its children, so a heap of depth `d` spans
/// `2^d - 1` columns.
pub fn heap_position(index: usize, len: usize) -> Point {
    if len == 0 || index >= len {
        return Point::default();
    }
    let depth = level(len - 1) + 1;
    let row = level(index);
    let offset = (index + 1 - (1usize << row)) as u32;
    let spread = 1u32 << (depth - row - 1);
    let x = (2 * offset + 1) * spread - 1;
    Point::new(x as u16, row as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_levels() {
        assert_eq!(level(0), 0);
        assert_eq!(level(1), 1);
        assert_eq!(level(2), 1);
        assert_eq!(level(3), 2);
        assert_eq!(level(6), 2);
        assert_eq!(level(7), 3);
    }

    #[test]
    fn test_heap_positions_center_parents() {
        let len = 6;
        assert_eq!(heap_position(0, len), Point::new(3, 0));
        assert_eq!(heap_position(1, len), Point::new(1, 1));
        assert_eq!(heap_position(2, len), Point::new(5, 1));
        assert_eq!(heap_position(3, len), Point::new(0, 2));
        assert_eq!(heap_position(5, len), Point::new(4, 2));
    }

    #[test]
    fn test_out_of_range_index() {
        assert_eq!(heap_position(0, 0), Point::default());
        assert_eq!(heap_position(9, 3), Point::default());
    }
}
