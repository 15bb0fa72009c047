//! Insertion sort.

use crate::trace::Tracer;
use std::fmt::Debug;

/// Insertion sort (stable, efficient for small or nearly sorted input).
///
/// Grows a sorted prefix one element at a time, shifting larger prefix
/// elements right until the new element reaches its slot. O(n) when the
/// input is already sorted, O(n²) when it is reversed.
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    insert_each(arr, |_| {});
}

/// [`insertion_sort`] reporting the state after every shift.
pub fn insertion_sort_traced<T: Ord + Debug, R: Tracer + ?Sized>(arr: &mut [T], tracer: &mut R) {
    insert_each(arr, |state| tracer.step("shift", &state));
}

fn insert_each<T: Ord>(arr: &mut [T], mut observe: impl FnMut(&[T])) {
    for i in 1..arr.len() {
        let mut j = i;
        // Strict comparison keeps equal elements in input order
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            observe(arr);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Recorder;

    #[test]
    fn test_insertion_sort() {
        let mut arr = [5, 2, 8, 1, 9, 3];
        insertion_sort(&mut arr);
        assert_eq!(arr, [1, 2, 3, 5, 8, 9]);

        let mut arr = [0, 20, -2, 4, -6];
        insertion_sort(&mut arr);
        assert_eq!(arr, [-6, -2, 0, 4, 20]);
    }

    #[test]
    fn test_insertion_sort_shift_count() {
        let mut rec = Recorder::new();
        insertion_sort_traced(&mut [1, 2, 3, 4], &mut rec);
        assert!(rec.is_empty());

        // One shift per inversion
        let mut rec = Recorder::new();
        insertion_sort_traced(&mut [29, 10, 14, 37, 14], &mut rec);
        assert_eq!(rec.count("shift"), 4);
        assert_eq!(rec.steps().last().unwrap().1, "[10, 14, 14, 29, 37]");
    }

    #[test]
    fn test_insertion_sort_is_stable() {
        let mut pairs = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        // Sort by key only through a wrapper ordering
        let mut keyed: Vec<Keyed> = pairs.iter().map(|&(k, t)| Keyed(k, t)).collect();
        insertion_sort(&mut keyed);
        let tags: String = keyed.iter().map(|k| k.1).collect();
        assert_eq!(tags, "bdac");
        pairs.sort_by_key(|p| p.0);
        assert_eq!(pairs.iter().map(|p| p.1).collect::<String>(), tags);
    }

    #[derive(Debug, Clone, Copy)]
    struct Keyed(i32, char);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for Keyed {}
    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }
}
