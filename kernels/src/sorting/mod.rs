//! Sorting kernels. All of them order ascending.
//!
//! | Kernel | Input | Time | Stable |
//! |---|---|---|---|
//! | `bubble_sort` | `&mut [T]` | O(n²) | yes |
//! | `bubble_sort_adaptive` | `&mut [T]` | O(n²), O(n) when sorted | yes |
//! | `insertion_sort` | `&mut [T]` | O(n²), O(n) when sorted | yes |
//! | `merge_sort` | `&[T]` | O(n log n) | yes |
//! | `quick_sort` | `&[T]` | O(n log n) avg, O(n²) sorted input | no |
//! | `quick_sort_in_place` | `&mut [T]` | O(n log n) avg, O(n²) sorted input | no |

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;

pub use bubble::{bubble_sort, bubble_sort_adaptive, bubble_sort_adaptive_traced, bubble_sort_traced};
pub use insertion::{insertion_sort, insertion_sort_traced};
pub use merge::{merge_sort, merge_sort_traced};
pub use quick::{
    partition, quick_sort, quick_sort_in_place, quick_sort_in_place_traced, quick_sort_traced,
};

/// Check if a slice is sorted in ascending order.
pub fn is_sorted<T: PartialOrd>(arr: &[T]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}
