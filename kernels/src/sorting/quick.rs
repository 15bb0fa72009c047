//! Quick sort with the last element as pivot.
//!
//! The fixed pivot choice makes already sorted and reverse sorted input the
//! O(n²) worst case, with recursion as deep as the input is long.

use crate::trace::Tracer;
use std::fmt::Debug;

/// Sort into a new `Vec` by partitioning around the last element.
///
/// Elements `<=` the pivot go left, the rest go right, and the result is
/// `quick_sort(left) ++ [pivot] ++ quick_sort(right)`.
pub fn quick_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    split_around_pivot(arr, &mut |_, _, _| {})
}

/// [`quick_sort`] reporting each partition as `(left, pivot, right)`.
pub fn quick_sort_traced<T: Ord + Clone + Debug, R: Tracer + ?Sized>(
    arr: &[T],
    tracer: &mut R,
) -> Vec<T> {
    split_around_pivot(arr, &mut |left, pivot, right| {
        tracer.step("partition", &(left, pivot, right))
    })
}

fn split_around_pivot<T: Ord + Clone>(
    arr: &[T],
    observe: &mut dyn FnMut(&[T], &T, &[T]),
) -> Vec<T> {
    let Some((pivot, rest)) = arr.split_last() else {
        return Vec::new();
    };
    if rest.is_empty() {
        return vec![pivot.clone()];
    }

    let (left, right): (Vec<T>, Vec<T>) = rest.iter().cloned().partition(|x| x <= pivot);
    observe(&left, pivot, &right);

    let mut sorted = split_around_pivot(&left, observe);
    sorted.push(pivot.clone());
    sorted.extend(split_around_pivot(&right, observe));
    sorted
}

/// Sort in place using Lomuto partitioning with the same pivot rule.
pub fn quick_sort_in_place<T: Ord>(arr: &mut [T]) {
    lomuto_sort(arr, 0, &mut |_, _| {});
}

/// [`quick_sort_in_place`] reporting each partition as the pivot's final
/// index in the whole input and the partitioned subrange.
pub fn quick_sort_in_place_traced<T: Ord + Debug, R: Tracer + ?Sized>(
    arr: &mut [T],
    tracer: &mut R,
) {
    lomuto_sort(arr, 0, &mut |pivot, range| tracer.step("partition", &(pivot, range)));
}

fn lomuto_sort<T: Ord>(arr: &mut [T], base: usize, observe: &mut dyn FnMut(usize, &[T])) {
    if arr.len() <= 1 {
        return;
    }
    let pivot = partition(arr);
    observe(base + pivot, arr);

    let (left, right) = arr.split_at_mut(pivot);
    lomuto_sort(left, base, observe);
    lomuto_sort(&mut right[1..], base + pivot + 1, observe);
}

/// Partition around the last element (Lomuto scheme).
///
/// Afterwards every element left of the returned index is `<=` the pivot,
/// every element right of it is `>` the pivot, and the pivot sits at the
/// returned index. An empty slice returns 0.
pub fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let Some(pivot_index) = arr.len().checked_sub(1) else {
        return 0;
    };

    let mut i = 0;
    for j in 0..pivot_index {
        if arr[j] <= arr[pivot_index] {
            arr.swap(i, j);
            i += 1;
        }
    }

    // Swap pivot into place
    arr.swap(i, pivot_index);
    i
}
