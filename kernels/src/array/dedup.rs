//! Duplicate removal for sorted sequences.

use std::collections::BTreeSet;

/// Count distinct values using an ordered set.
///
/// Does not rearrange the input. Works on unsorted input too.
pub fn count_distinct<T: Ord>(arr: &[T]) -> usize {
    arr.iter().collect::<BTreeSet<_>>().len()
}

/// Remove adjacent duplicates from a sorted slice in place.
///
/// Distinct values are compacted to the front in their original order and the
/// new logical length is returned. Elements past that length are left in an
/// unspecified state.
///
/// # Test Cases
/// - dedup_sorted([0, 0, 1, 1, 1, 2, 2, 3, 3, 4]) = 5, prefix [0, 1, 2, 3, 4]
/// - dedup_sorted([]) = 0
pub fn dedup_sorted<T: PartialEq + Clone>(arr: &mut [T]) -> usize {
    if arr.is_empty() {
        return 0;
    }

    let mut write_idx = 0;

    for read_idx in 1..arr.len() {
        if arr[read_idx] != arr[write_idx] {
            write_idx += 1;
            arr[write_idx] = arr[read_idx].clone();
        }
    }

    write_idx + 1
}
