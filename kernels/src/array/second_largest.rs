//! Second-largest distinct value.

use std::collections::BTreeSet;

/// Second-largest distinct value by deduplicating and ordering.
///
/// Collects the values into an ordered set and walks it from the top.
/// Returns `None` when the input holds fewer than two distinct values.
///
/// # Test Cases
/// - second_largest_naive([234, 223, 23, 24, 230]) = Some(230)
/// - second_largest_naive([7, 7]) = None
pub fn second_largest_naive<T: Ord + Clone>(arr: &[T]) -> Option<T> {
    let distinct: BTreeSet<&T> = arr.iter().collect();
    distinct.into_iter().rev().nth(1).cloned()
}

/// Second-largest distinct value in a single pass.
///
/// Tracks the largest and runner-up seen so far. Values equal to the current
/// largest never displace the runner-up, so ties and negative inputs behave.
pub fn second_largest<T: Ord + Clone>(arr: &[T]) -> Option<T> {
    let mut largest: Option<&T> = None;
    let mut second: Option<&T> = None;

    for value in arr {
        match largest {
            Some(top) if value < top => {
                if second.map_or(true, |s| value > s) {
                    second = Some(value);
                }
            }
            Some(top) if value == top => {}
            _ => {
                second = largest;
                largest = Some(value);
            }
        }
    }

    second.cloned()
}
