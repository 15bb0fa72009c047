//! Drill registry.
//!
//! Every kernel variant is exposed as a [`Drill`] with a kebab-case name, a
//! category, and the sample inputs the exercises were written against.

use crate::error::{DrillError, DrillResult};
use crate::input::normalize_offset;
use crate::report::Outcome;
use dsa_kernels::{self as k, Tracer};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Drill grouping, used by `dsa list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Selection,
    Rotation,
    Dedup,
    Subarray,
    Sorting,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Selection => "selection",
            Category::Rotation => "rotation",
            Category::Dedup => "dedup",
            Category::Subarray => "subarray",
            Category::Sorting => "sorting",
        };
        f.pad(name)
    }
}

/// A built-in sample input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub input: &'static [i64],
    pub offset: Option<i64>,
}

const fn sample(input: &'static [i64]) -> Sample {
    Sample {
        input,
        offset: None,
    }
}

const fn rotated(input: &'static [i64], offset: i64) -> Sample {
    Sample {
        input,
        offset: Some(offset),
    }
}

const HEIGHTS: &[i64] = &[234, 223, 23, 24, 230];
const SEVEN: &[i64] = &[1, 2, 3, 4, 5, 6, 7];
const SORTED_DUPES: &[i64] = &[0, 0, 1, 1, 1, 2, 2, 3, 3, 4];
const MIXED_DUPES: &[i64] = &[0, 0, 1, 1, 1, 2, 2, 3, 3, 4, 55, 33];
const MIXED_SIGNS: &[i64] = &[-2, 1, -3, 4, -1, 2, 1, -5, 4];
const MOSTLY_POSITIVE: &[i64] = &[5, 4, -1, 7, 8];
const UNSORTED: &[i64] = &[29, 10, 14, 37, 14];
const SIGNED_UNSORTED: &[i64] = &[0, 20, -2, 4, -6];

const SELECTION_SAMPLES: &[Sample] = &[sample(HEIGHTS)];
const ROTATION_SAMPLES: &[Sample] = &[rotated(SEVEN, 3)];
const REVERSE_SAMPLES: &[Sample] = &[sample(SEVEN)];
const COUNT_SAMPLES: &[Sample] = &[sample(MIXED_DUPES)];
const DEDUP_SAMPLES: &[Sample] = &[sample(SORTED_DUPES)];
const SUBARRAY_SAMPLES: &[Sample] = &[sample(MIXED_SIGNS), sample(MOSTLY_POSITIVE)];
const INSERTION_SAMPLES: &[Sample] = &[sample(UNSORTED), sample(SIGNED_UNSORTED)];
const SORT_SAMPLES: &[Sample] = &[sample(UNSORTED)];

/// One runnable exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Drill {
    SecondLargestNaive,
    SecondLargest,
    RotateNaive,
    Rotate,
    RotateLeft,
    Reverse,
    CountDistinct,
    Dedup,
    MaxSubarrayNaive,
    MaxSubarray,
    BubbleSort,
    BubbleSortAdaptive,
    InsertionSort,
    MergeSort,
    QuickSort,
    QuickSortInPlace,
    IsSorted,
}

impl Drill {
    pub const ALL: [Drill; 17] = [
        Drill::SecondLargestNaive,
        Drill::SecondLargest,
        Drill::RotateNaive,
        Drill::Rotate,
        Drill::RotateLeft,
        Drill::Reverse,
        Drill::CountDistinct,
        Drill::Dedup,
        Drill::MaxSubarrayNaive,
        Drill::MaxSubarray,
        Drill::BubbleSort,
        Drill::BubbleSortAdaptive,
        Drill::InsertionSort,
        Drill::MergeSort,
        Drill::QuickSort,
        Drill::QuickSortInPlace,
        Drill::IsSorted,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Drill::SecondLargestNaive => "second-largest-naive",
            Drill::SecondLargest => "second-largest",
            Drill::RotateNaive => "rotate-naive",
            Drill::Rotate => "rotate",
            Drill::RotateLeft => "rotate-left",
            Drill::Reverse => "reverse",
            Drill::CountDistinct => "count-distinct",
            Drill::Dedup => "dedup",
            Drill::MaxSubarrayNaive => "max-subarray-naive",
            Drill::MaxSubarray => "max-subarray",
            Drill::BubbleSort => "bubble-sort",
            Drill::BubbleSortAdaptive => "bubble-sort-adaptive",
            Drill::InsertionSort => "insertion-sort",
            Drill::MergeSort => "merge-sort",
            Drill::QuickSort => "quick-sort",
            Drill::QuickSortInPlace => "quick-sort-in-place",
            Drill::IsSorted => "is-sorted",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Drill::SecondLargestNaive | Drill::SecondLargest => Category::Selection,
            Drill::RotateNaive | Drill::Rotate | Drill::RotateLeft | Drill::Reverse => {
                Category::Rotation
            }
            Drill::CountDistinct | Drill::Dedup => Category::Dedup,
            Drill::MaxSubarrayNaive | Drill::MaxSubarray => Category::Subarray,
            Drill::BubbleSort
            | Drill::BubbleSortAdaptive
            | Drill::InsertionSort
            | Drill::MergeSort
            | Drill::QuickSort
            | Drill::QuickSortInPlace
            | Drill::IsSorted => Category::Sorting,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Drill::SecondLargestNaive => "Second-largest distinct value via ordered set",
            Drill::SecondLargest => "Second-largest distinct value in one pass",
            Drill::RotateNaive => "Rotate right by moving the trailing block to the front",
            Drill::Rotate => "Rotate right in place with three reversals",
            Drill::RotateLeft => "Rotate left in place with three reversals",
            Drill::Reverse => "Reverse in place with two pointers",
            Drill::CountDistinct => "Count distinct values with a set",
            Drill::Dedup => "Compact a sorted sequence in place with two pointers",
            Drill::MaxSubarrayNaive => "Maximum-sum subrange, O(n^2) scan",
            Drill::MaxSubarray => "Maximum-sum subrange, Kadane's algorithm",
            Drill::BubbleSort => "Bubble sort with n-1 fixed passes",
            Drill::BubbleSortAdaptive => "Bubble sort stopping after a pass without swaps",
            Drill::InsertionSort => "Insertion sort shifting into a sorted prefix",
            Drill::MergeSort => "Stable merge sort",
            Drill::QuickSort => "Quick sort with last-element pivot",
            Drill::QuickSortInPlace => "Quick sort with Lomuto partitioning in place",
            Drill::IsSorted => "Check ascending order",
        }
    }

    /// Whether the drill takes a rotation offset.
    pub fn takes_offset(&self) -> bool {
        matches!(self, Drill::RotateNaive | Drill::Rotate | Drill::RotateLeft)
    }

    /// Sample inputs the exercise was written against.
    pub fn samples(&self) -> &'static [Sample] {
        match self {
            Drill::SecondLargestNaive | Drill::SecondLargest => SELECTION_SAMPLES,
            Drill::RotateNaive | Drill::Rotate | Drill::RotateLeft => ROTATION_SAMPLES,
            Drill::Reverse => REVERSE_SAMPLES,
            Drill::CountDistinct => COUNT_SAMPLES,
            Drill::Dedup => DEDUP_SAMPLES,
            Drill::MaxSubarrayNaive | Drill::MaxSubarray => SUBARRAY_SAMPLES,
            Drill::InsertionSort => INSERTION_SAMPLES,
            Drill::BubbleSort
            | Drill::BubbleSortAdaptive
            | Drill::MergeSort
            | Drill::QuickSort
            | Drill::QuickSortInPlace
            | Drill::IsSorted => SORT_SAMPLES,
        }
    }

    /// Run the drill against `input`.
    ///
    /// `offset` is required by the rotation drills and ignored by the rest.
    pub fn run(
        &self,
        mut input: Vec<i64>,
        offset: Option<i64>,
        tracer: &mut dyn Tracer,
    ) -> DrillResult<Outcome> {
        tracing::debug!(drill = self.name(), len = input.len(), ?offset, "running drill");

        let outcome = match self {
            Drill::SecondLargestNaive => Outcome::value(k::second_largest_naive(&input)),
            Drill::SecondLargest => Outcome::value(k::second_largest(&input)),
            Drill::RotateNaive => {
                let by = self.offset(offset)?;
                Outcome::sequence(k::rotate_right_naive(input, by))
            }
            Drill::Rotate => {
                let by = self.offset(offset)?;
                k::rotate_right_traced(&mut input, by, tracer);
                Outcome::sequence(input)
            }
            Drill::RotateLeft => {
                let by = self.offset(offset)?;
                k::rotate_left_traced(&mut input, by, tracer);
                Outcome::sequence(input)
            }
            Drill::Reverse => {
                k::reverse_traced(&mut input, tracer);
                Outcome::sequence(input)
            }
            Drill::CountDistinct => Outcome::Count {
                count: k::count_distinct(&input),
            },
            Drill::Dedup => {
                let len = k::dedup_sorted(&mut input);
                input.truncate(len);
                Outcome::Compacted { len, values: input }
            }
            Drill::MaxSubarrayNaive => {
                Outcome::subarray(k::max_subarray_naive_traced(&input, tracer))
            }
            Drill::MaxSubarray => Outcome::subarray(k::max_subarray_traced(&input, tracer)),
            Drill::BubbleSort => {
                k::bubble_sort_traced(&mut input, tracer);
                Outcome::sequence(input)
            }
            Drill::BubbleSortAdaptive => {
                let passes = k::bubble_sort_adaptive_traced(&mut input, tracer);
                Outcome::Sequence {
                    values: input,
                    passes: Some(passes),
                }
            }
            Drill::InsertionSort => {
                k::insertion_sort_traced(&mut input, tracer);
                Outcome::sequence(input)
            }
            Drill::MergeSort => Outcome::sequence(k::merge_sort_traced(&input, tracer)),
            Drill::QuickSort => Outcome::sequence(k::quick_sort_traced(&input, tracer)),
            Drill::QuickSortInPlace => {
                k::quick_sort_in_place_traced(&mut input, tracer);
                Outcome::sequence(input)
            }
            Drill::IsSorted => Outcome::Flag {
                value: k::is_sorted(&input),
            },
        };

        Ok(outcome)
    }

    fn offset(&self, offset: Option<i64>) -> DrillResult<usize> {
        let offset = offset.ok_or(DrillError::MissingOffset(self.name()))?;
        normalize_offset(offset)
    }
}

impl fmt::Display for Drill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Drill {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Drill::ALL
            .into_iter()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| DrillError::UnknownDrill(s.to_string()))
    }
}
