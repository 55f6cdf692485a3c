//! Index arithmetic over the level-order layout
//!
//! Relations (0-indexed):
//!   left_child(i)  = 2i + 1
//!   right_child(i) = 2i + 2
//!   parent(i)      = (i - 1) / 2
//!
//! A position is a leaf exactly when neither child position exists
//! within the sequence bounds.

/// Left child position of `index`
#[inline]
pub fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Right child position of `index`
#[inline]
pub fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Parent position of `index`
///
/// The root has no parent; callers stop their upward walk at index 0.
#[inline]
pub fn parent(index: usize) -> usize {
    debug_assert!(index > 0, "root has no parent");
    (index - 1) / 2
}

/// Leaf test: neither child position exists within a sequence of `len`
#[inline]
pub fn is_leaf(index: usize, len: usize) -> bool {
    left_child(index) >= len && right_child(index) >= len
}

/// Edges from the root down to `index`
///
/// Equals ⌊log2(index + 1)⌋ in the level-order layout; the root has depth 0.
pub fn depth(index: usize) -> usize {
    let mut index = index;
    let mut depth = 0;

    while index > 0 {
        index = parent(index);
        depth += 1;
    }

    depth
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_of_root() {
        assert_eq!(left_child(0), 1);
        assert_eq!(right_child(0), 2);
    }

    #[test]
    fn test_parent_inverts_children() {
        for index in 0..1000 {
            assert_eq!(parent(left_child(index)), index);
            assert_eq!(parent(right_child(index)), index);
        }
    }

    #[test]
    fn test_leaf_classification() {
        // 5 positions: 1 has both children (3, 4); 2, 3, 4 have none
        assert!(!is_leaf(0, 5));
        assert!(!is_leaf(1, 5));
        assert!(is_leaf(2, 5));
        assert!(is_leaf(3, 5));
        assert!(is_leaf(4, 5));
    }

    #[test]
    fn test_singleton_root_is_leaf() {
        assert!(is_leaf(0, 1));
    }

    #[test]
    fn test_depth_is_floor_log2() {
        assert_eq!(depth(0), 0);
        assert_eq!(depth(1), 1);
        assert_eq!(depth(2), 1);
        assert_eq!(depth(6), 2);
        assert_eq!(depth(7), 3);
        assert_eq!(depth(14), 3);

        for index in 0usize..4096 {
            assert_eq!(depth(index), (index + 1).ilog2() as usize);
        }
    }
}
