//! Array kernels: selection, rotation, deduplication and maximum subarray.

pub mod dedup;
pub mod max_subarray;
pub mod rotate;
pub mod second_largest;

pub use dedup::{count_distinct, dedup_sorted};
pub use max_subarray::{
    max_subarray, max_subarray_naive, max_subarray_naive_traced, max_subarray_traced, MaxSubarray,
};
pub use rotate::{
    reverse, reverse_traced, rotate_left, rotate_left_traced, rotate_right, rotate_right_naive,
    rotate_right_traced,
};
pub use second_largest::{second_largest, second_largest_naive};
