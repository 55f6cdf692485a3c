use leafpath::{lowest_value_leaf_path, min_leaf, path_to_leaf, TreeError};
use test_case::test_case;

#[test_case(&[], "" ; "empty sequence")]
#[test_case(&[10], "" ; "single element is its own leaf")]
#[test_case(&[0, 4, 2, 5, 0, 9, 7, 9, -4, 2, -5, 3, 9, 1, -11], "RRR" ; "minimum on right spine")]
#[test_case(&[0, 4, 2, 5, 0, 9, 7, -9, -4, 2, -5, 3, 9, 1, 8], "LLL" ; "minimum on left spine")]
#[test_case(&[0, 4, 2, 5, 0, 9, 7, 9, -8, 2, -5, 3, 9, 1, 11], "LLR" ; "minimum right child of left subtree")]
#[test_case(&[0, 4, 2, 5, 0, 9, 7, 9, -4, 2, -5, -10, 9, 1, 11], "RLL" ; "minimum in middle subtree")]
#[test_case(&[0, 4, 2, 5, 0, 9, 7, 9, 2, 5, -8, 3, 9, 1, 6, 4, 5, 2, -10], "LLRR" ; "minimum on partial last level")]
#[test_case(&[5, 7, 8, 10, 11, 12, 13], "LL" ; "all positive leftmost leaf")]
#[test_case(&[1, 2], "L" ; "two elements")]
#[test_case(&[1, 2, 3], "L" ; "three elements smaller left child")]
fn lowest_value_leaf_path_scenarios(values: &[i64], expected: &str) {
    assert_eq!(lowest_value_leaf_path(values).to_string(), expected);
}

#[test]
fn equal_minimum_leaves_resolve_to_lowest_index() {
    // Leaves 3..=6 all hold 1; index 3 must win
    let values = [0, 5, 5, 1, 1, 1, 1];
    assert_eq!(lowest_value_leaf_path(&values).to_string(), "LL");

    // Same minimum at a shallow leaf (2) and a deep leaf (3); 2 wins
    let values = [9, 8, -3, -3];
    assert_eq!(lowest_value_leaf_path(&values).to_string(), "R");
}

#[test]
fn internal_values_never_qualify() {
    // Every internal position is smaller than every leaf
    let values = [-100, -50, -50, 1, 2, 3, 4];
    assert_eq!(lowest_value_leaf_path(&values).to_string(), "LL");

    let found = min_leaf(&values).expect("non-empty sequence has a leaf");
    assert_eq!((found.index, found.value), (3, 1));
}

#[test]
fn extreme_values_are_ordinary_inputs() {
    let values = [0, i64::MAX, i64::MIN];
    assert_eq!(lowest_value_leaf_path(&values).to_string(), "R");
}

#[test]
fn explicit_leaf_paths_agree_with_the_scan() {
    let values = [0, 4, 2, 5, 0, 9, 7, 9, -4, 2, -5, 3, 9, 1, -11];
    let found = min_leaf(&values).expect("non-empty sequence has a leaf");

    let explicit = path_to_leaf(&values, found.index).expect("scan result is a leaf");
    assert_eq!(explicit, lowest_value_leaf_path(&values));
}

#[test]
fn explicit_leaf_paths_validate_their_target() {
    let values = [1, 2, 3];
    assert_eq!(
        path_to_leaf(&values, 7),
        Err(TreeError::IndexOutOfBounds { index: 7, len: 3 })
    );
    assert_eq!(
        path_to_leaf(&values, 0),
        Err(TreeError::NotALeaf { index: 0, len: 3 })
    );
}
