//! Merge sort.
//!
//! Allocates: the input slice is read-only and a new sorted `Vec` comes back.
//! Ties are taken from the left half first, which keeps the sort stable.

use crate::trace::Tracer;
use std::fmt::Debug;

/// Sort by recursive halving and linear merging. O(n log n), O(n) extra space.
pub fn merge_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    sort_halves(arr, &mut |_| {})
}

/// [`merge_sort`] reporting every merged run.
pub fn merge_sort_traced<T: Ord + Clone + Debug, R: Tracer + ?Sized>(
    arr: &[T],
    tracer: &mut R,
) -> Vec<T> {
    sort_halves(arr, &mut |state| tracer.step("merge", &state))
}

fn sort_halves<T: Ord + Clone>(arr: &[T], observe: &mut dyn FnMut(&[T])) -> Vec<T> {
    if arr.len() <= 1 {
        return arr.to_vec();
    }

    let mid = arr.len() / 2;
    let left = sort_halves(&arr[..mid], observe);
    let right = sort_halves(&arr[mid..], observe);

    let merged = merge(left, right);
    observe(&merged);
    merged
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => r < l,
            _ => break,
        };
        if take_right {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }

    merged.extend(left);
    merged.extend(right);
    merged
}
