//! Array rotation.
//!
//! Offsets are normalized modulo the length, so any `k` is accepted and an
//! empty sequence is left alone.

use crate::trace::Tracer;
use std::fmt::Debug;

/// Reverse a slice in place.
///
/// Two indices walk toward each other, swapping as they go.
pub fn reverse<T>(arr: &mut [T]) {
    swap_inward(arr, |_, _, _| {});
}

/// [`reverse`] reporting the swapped indices and the state after each swap.
pub fn reverse_traced<T: Debug, R: Tracer + ?Sized>(arr: &mut [T], tracer: &mut R) {
    swap_inward(arr, |left, right, state| tracer.step("swap", &(left, right, state)));
}

fn swap_inward<T>(arr: &mut [T], mut observe: impl FnMut(usize, usize, &[T])) {
    if arr.len() < 2 {
        return;
    }

    let mut left = 0;
    let mut right = arr.len() - 1;

    while left < right {
        arr.swap(left, right);
        observe(left, right, arr);
        left += 1;
        right -= 1;
    }
}

/// Rotate right by `k` positions by moving the trailing block to the front.
///
/// Takes ownership of the vector and hands it back rotated.
///
/// # Test Cases
/// - rotate_right_naive([1, 2, 3, 4, 5, 6, 7], 3) = [5, 6, 7, 1, 2, 3, 4]
pub fn rotate_right_naive<T>(mut arr: Vec<T>, k: usize) -> Vec<T> {
    let len = arr.len();
    if len == 0 || k % len == 0 {
        return arr;
    }

    let mut rotated = arr.split_off(len - k % len);
    rotated.append(&mut arr);
    rotated
}

/// Rotate right by `k` positions in place using three reversals.
///
/// O(n) time, O(1) extra space.
pub fn rotate_right<T>(arr: &mut [T], k: usize) {
    three_reversal(arr, k, |_, _| {});
}

/// [`rotate_right`] reporting the state after each reversal.
pub fn rotate_right_traced<T: Debug, R: Tracer + ?Sized>(arr: &mut [T], k: usize, tracer: &mut R) {
    three_reversal(arr, k, |label, state| tracer.step(label, &state));
}

fn three_reversal<T>(arr: &mut [T], k: usize, mut observe: impl FnMut(&'static str, &[T])) {
    let len = arr.len();
    if len == 0 {
        return;
    }

    let k = k % len;
    if k == 0 {
        return;
    }

    reverse(arr);
    observe("reverse_all", arr);
    reverse(&mut arr[..k]);
    observe("reverse_head", arr);
    reverse(&mut arr[k..]);
    observe("reverse_tail", arr);
}

/// Rotate left by `k` positions in place. Inverse of [`rotate_right`].
pub fn rotate_left<T>(arr: &mut [T], k: usize) {
    left_reversals(arr, k, |_, _| {});
}

/// [`rotate_left`] reporting the state after each reversal.
pub fn rotate_left_traced<T: Debug, R: Tracer + ?Sized>(arr: &mut [T], k: usize, tracer: &mut R) {
    left_reversals(arr, k, |label, state| tracer.step(label, &state));
}

fn left_reversals<T>(arr: &mut [T], k: usize, mut observe: impl FnMut(&'static str, &[T])) {
    let len = arr.len();
    if len == 0 {
        return;
    }

    let k = k % len;
    if k == 0 {
        return;
    }

    // Reverse first k elements
    reverse(&mut arr[..k]);
    observe("reverse_head", arr);
    // Reverse remaining elements
    reverse(&mut arr[k..]);
    observe("reverse_tail", arr);
    // Reverse entire array
    reverse(arr);
    observe("reverse_all", arr);
}
