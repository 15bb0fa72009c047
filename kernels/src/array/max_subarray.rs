//! Maximum-sum contiguous subrange.
//!
//! Both variants return `None` on empty input. For all-negative input the
//! answer is the single least negative element.
//!
//! Sums are accumulated in `i128`. A slice holds at most `isize::MAX`
//! elements, so no run of `i64` values can overflow it.

use crate::trace::{NoTrace, Tracer};

/// Best contiguous subrange found by a max-subarray search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxSubarray<'a> {
    /// Sum of `elements`, widened so extreme inputs cannot overflow
    pub sum: i128,
    /// Index of the first element of the subrange in the input
    pub start: usize,
    /// The subrange itself, borrowed from the input
    pub elements: &'a [i64],
}

impl<'a> MaxSubarray<'a> {
    fn new(arr: &'a [i64], sum: i128, start: usize, end: usize) -> Self {
        Self {
            sum,
            start,
            elements: &arr[start..=end],
        }
    }

    /// Index one past the last element of the subrange.
    pub fn end(&self) -> usize {
        self.start + self.elements.len()
    }
}

/// O(n²) search: every start index, running sum over every end index.
///
/// On equal sums the earliest start, then the earliest end, wins.
pub fn max_subarray_naive(arr: &[i64]) -> Option<MaxSubarray<'_>> {
    max_subarray_naive_traced(arr, &mut NoTrace)
}

/// [`max_subarray_naive`] reporting each new best.
pub fn max_subarray_naive_traced<'a, R: Tracer + ?Sized>(
    arr: &'a [i64],
    tracer: &mut R,
) -> Option<MaxSubarray<'a>> {
    let first = i128::from(*arr.first()?);

    let mut best = first;
    let mut best_start = 0;
    let mut best_end = 0;

    for i in 0..arr.len() {
        let mut cur_sum: i128 = 0;
        for (j, &value) in arr.iter().enumerate().skip(i) {
            cur_sum += i128::from(value);
            if cur_sum > best {
                best = cur_sum;
                best_start = i;
                best_end = j;
                tracer.step("best", &(best, best_start..=best_end));
            }
        }
    }

    Some(MaxSubarray::new(arr, best, best_start, best_end))
}

/// Kadane's algorithm, O(n).
///
/// # Test Cases
/// - max_subarray([-2, 1, -3, 4, -1, 2, 1, -5, 4]) = 6, [4, -1, 2, 1]
/// - max_subarray([5, 4, -1, 7, 8]) = 23, [5, 4, -1, 7, 8]
pub fn max_subarray(arr: &[i64]) -> Option<MaxSubarray<'_>> {
    max_subarray_traced(arr, &mut NoTrace)
}

/// [`max_subarray`] reporting each reset and each new best.
pub fn max_subarray_traced<'a, R: Tracer + ?Sized>(
    arr: &'a [i64],
    tracer: &mut R,
) -> Option<MaxSubarray<'a>> {
    let first = i128::from(*arr.first()?);

    let mut best = first;
    let mut best_start = 0;
    let mut best_end = 0;

    let mut cur_sum: i128 = 0;
    let mut cur_start = 0;

    for (i, &value) in arr.iter().enumerate() {
        // Carrying a negative sum is worse than starting over here
        if cur_sum < 0 {
            cur_sum = i128::from(value);
            cur_start = i;
            tracer.step("reset", &(i, value));
        } else {
            cur_sum += i128::from(value);
        }

        if cur_sum > best || i == 0 {
            best = cur_sum;
            best_start = cur_start;
            best_end = i;
            tracer.step("best", &(best, best_start..=best_end));
        }
    }

    Some(MaxSubarray::new(arr, best, best_start, best_end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Recorder;

    #[test]
    fn test_max_subarray_samples() {
        let arr = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
        for found in [max_subarray(&arr), max_subarray_naive(&arr)] {
            let found = found.unwrap();
            assert_eq!(found.sum, 6);
            assert_eq!(found.elements, &[4, -1, 2, 1]);
            assert_eq!(found.start, 3);
            assert_eq!(found.end(), 7);
        }

        let arr = [5, 4, -1, 7, 8];
        for found in [max_subarray(&arr), max_subarray_naive(&arr)] {
            let found = found.unwrap();
            assert_eq!(found.sum, 23);
            assert_eq!(found.elements, &arr[..]);
        }
    }

    #[test]
    fn test_max_subarray_all_negative() {
        let arr = [-8, -3, -6, -2, -5, -4];
        let kadane = max_subarray(&arr).unwrap();
        assert_eq!(kadane.sum, -2);
        assert_eq!(kadane.elements, &[-2]);

        let naive = max_subarray_naive(&arr).unwrap();
        assert_eq!(naive, kadane);
    }

    #[test]
    fn test_max_subarray_empty_and_single() {
        assert_eq!(max_subarray(&[]), None);
        assert_eq!(max_subarray_naive(&[]), None);

        let single = max_subarray(&[42]).unwrap();
        assert_eq!(single.sum, 42);
        assert_eq!(single.elements, &[42]);
    }

    #[test]
    fn test_max_subarray_after_reset() {
        // Best run starts after a reset that follows an earlier best
        let arr = [3, -10, 2, 2, 2];
        let found = max_subarray(&arr).unwrap();
        assert_eq!(found.sum, 6);
        assert_eq!(found.elements, &[2, 2, 2]);
        assert_eq!(max_subarray_naive(&arr).unwrap().sum, 6);
    }

    #[test]
    fn test_max_subarray_extreme_values() {
        let arr = [i64::MAX, 1];
        for found in [max_subarray(&arr), max_subarray_naive(&arr)] {
            let found = found.unwrap();
            assert_eq!(found.sum, i128::from(i64::MAX) + 1);
            assert_eq!(found.elements, &arr[..]);
        }

        let arr = [i64::MIN, -1];
        for found in [max_subarray(&arr), max_subarray_naive(&arr)] {
            let found = found.unwrap();
            assert_eq!(found.sum, -1);
            assert_eq!(found.elements, &[-1]);
        }

        // A negative run below i64::MIN must still reset, not wrap
        let arr = [i64::MIN, i64::MIN, 5];
        assert_eq!(max_subarray(&arr).unwrap().sum, 5);
        assert_eq!(max_subarray_naive(&arr).unwrap().sum, 5);

        let arr = [i64::MAX, i64::MAX, i64::MAX];
        let expected = 3 * i128::from(i64::MAX);
        assert_eq!(max_subarray(&arr).unwrap().sum, expected);
        assert_eq!(max_subarray_naive(&arr).unwrap().sum, expected);
    }

    #[test]
    fn test_max_subarray_naive_traced() {
        let mut rec = Recorder::new();
        let found = max_subarray_naive_traced(&[-1, 2, 3], &mut rec).unwrap();
        assert_eq!(found.sum, 5);
        assert_eq!(rec.count("best"), 3);
        assert_eq!(rec.steps()[2].1, "(5, 1..=2)");
    }

    #[test]
    fn test_max_subarray_traced() {
        let mut rec = Recorder::new();
        let found = max_subarray_traced(&[-1, 2, 3], &mut rec).unwrap();
        assert_eq!(found.sum, 5);
        assert_eq!(rec.count("reset"), 1);
        assert_eq!(rec.count("best"), 3);
    }
}
