//! DSA Kernels - array and sorting algorithms
//!
//! Each function here is a self-contained transformation over an in-memory
//! sequence. Nothing is shared between calls and nothing is printed; callers
//! that want to watch an algorithm work pass a [`Tracer`] to the `*_traced`
//! variant instead.
//!
//! # Ownership Convention
//!
//! - `&[T]` in, new value out: the input is left untouched (`merge_sort`,
//!   `quick_sort`, `second_largest`, `max_subarray`, `count_distinct`)
//! - `&mut [T]`: the slice is rearranged in place (`bubble_sort`,
//!   `insertion_sort`, `rotate_right`, `dedup_sorted`)
//! - `Vec<T>` in, `Vec<T>` out: ownership moves through the call
//!   (`rotate_right_naive`)
//!
//! # Empty Input
//!
//! No function panics on an empty sequence. Sorts and rotations are no-ops,
//! `dedup_sorted` returns 0 and searches return `None`.

pub mod array;
pub mod sorting;
pub mod trace;

// Re-export commonly used functions
pub use array::*;
pub use sorting::*;
pub use trace::{NoTrace, Recorder, Tracer};
