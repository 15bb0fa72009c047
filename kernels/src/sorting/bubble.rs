//! Bubble sort, fixed-pass and adaptive.

use crate::trace::Tracer;
use std::fmt::Debug;

/// Bubble sort with a fixed `n - 1` passes.
///
/// Each pass pushes the largest remaining element to the end, so pass `i`
/// stops `i` elements short. Always O(n²).
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    fixed_passes(arr, |_| {});
}

/// [`bubble_sort`] reporting the state after every pass.
pub fn bubble_sort_traced<T: Ord + Debug, R: Tracer + ?Sized>(arr: &mut [T], tracer: &mut R) {
    fixed_passes(arr, |state| tracer.step("pass", &state));
}

fn fixed_passes<T: Ord>(arr: &mut [T], mut observe: impl FnMut(&[T])) {
    let len = arr.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        for j in 0..len - 1 - i {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
            }
        }
        observe(arr);
    }
}

/// Bubble sort that stops after the first pass without a swap.
///
/// The scan boundary shrinks by one after every pass since the tail is
/// already in place. Returns the number of passes made, which is 1 for
/// sorted input.
///
/// # Test Cases
/// - bubble_sort_adaptive([29, 10, 14, 37, 14]) = [10, 14, 14, 29, 37], 3 passes
pub fn bubble_sort_adaptive<T: Ord>(arr: &mut [T]) -> usize {
    adaptive_passes(arr, |_| {})
}

/// [`bubble_sort_adaptive`] reporting the state after every pass.
pub fn bubble_sort_adaptive_traced<T: Ord + Debug, R: Tracer + ?Sized>(
    arr: &mut [T],
    tracer: &mut R,
) -> usize {
    adaptive_passes(arr, |state| tracer.step("pass", &state))
}

fn adaptive_passes<T: Ord>(arr: &mut [T], mut observe: impl FnMut(&[T])) -> usize {
    let mut bound = arr.len();
    let mut passes = 0;

    loop {
        let mut swapped = false;
        for i in 1..bound {
            if arr[i - 1] > arr[i] {
                arr.swap(i - 1, i);
                swapped = true;
            }
        }
        passes += 1;
        observe(arr);

        bound = bound.saturating_sub(1);
        if !swapped {
            return passes;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Recorder;

    #[test]
    fn test_bubble_sort() {
        let mut arr = [5, 2, 8, 1, 9];
        bubble_sort(&mut arr);
        assert_eq!(arr, [1, 2, 5, 8, 9]);

        let mut arr = [29, 10, 14, 37, 14];
        bubble_sort(&mut arr);
        assert_eq!(arr, [10, 14, 14, 29, 37]);
    }

    #[test]
    fn test_bubble_sort_adaptive_passes() {
        let mut arr = [29, 10, 14, 37, 14];
        let passes = bubble_sort_adaptive(&mut arr);
        assert_eq!(arr, [10, 14, 14, 29, 37]);
        assert_eq!(passes, 3);

        let mut sorted = [1, 2, 3, 4, 5, 6];
        assert_eq!(bubble_sort_adaptive(&mut sorted), 1);

        let mut reversed = [5, 4, 3, 2, 1];
        bubble_sort_adaptive(&mut reversed);
        assert_eq!(reversed, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_bubble_sort_short_inputs() {
        let mut empty: [i32; 0] = [];
        bubble_sort(&mut empty);
        assert_eq!(bubble_sort_adaptive(&mut empty), 1);

        let mut one = [3];
        bubble_sort(&mut one);
        bubble_sort_adaptive(&mut one);
        assert_eq!(one, [3]);
    }

    #[test]
    fn test_bubble_sort_traced() {
        let mut rec = Recorder::new();
        bubble_sort_traced(&mut [3, 2, 1, 0], &mut rec);
        assert_eq!(rec.count("pass"), 3);
        assert_eq!(rec.steps()[0].1, "[2, 1, 0, 3]");

        let mut rec = Recorder::new();
        let passes = bubble_sort_adaptive_traced(&mut [29, 10, 14, 37, 14], &mut rec);
        assert_eq!(rec.count("pass"), passes);
        assert_eq!(rec.steps()[0].1, "[10, 14, 29, 14, 37]");
    }
}
