//! Array Kernel Property Tests
//!
//! Rotation round trips, deduplication against `Vec::dedup`, and the two
//! maximum-subarray searches against each other.

use dsa_kernels::{
    count_distinct, dedup_sorted, max_subarray, max_subarray_naive, rotate_left, rotate_right,
    rotate_right_naive, second_largest, second_largest_naive,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_vec(rng: &mut StdRng, max_len: usize, spread: i64) -> Vec<i64> {
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| rng.gen_range(-spread..=spread)).collect()
}

// ============================================================================
// Rotation
// ============================================================================

#[test]
fn test_rotation_round_trip() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..50 {
        let original = random_vec(&mut rng, 20, 100);
        let n = original.len();

        for k in 0..=2 * n {
            let mut v = original.clone();
            rotate_right(&mut v, k);
            assert_eq!(v, rotate_right_naive(original.clone(), k), "k={}", k);

            // rotate by n - k completes the cycle
            if k <= n {
                let mut back = v.clone();
                rotate_right(&mut back, n - k);
                assert_eq!(back, original);
            }

            rotate_left(&mut v, k);
            assert_eq!(v, original);
        }
    }
}

#[test]
fn test_rotation_preserves_cyclic_adjacency() {
    let original: Vec<i64> = (0..9).collect();
    let mut v = original.clone();
    rotate_right(&mut v, 4);
    assert_eq!(v, vec![5, 6, 7, 8, 0, 1, 2, 3, 4]);

    // Each element is still followed by its original successor, modulo n
    for i in 0..v.len() {
        let next = v[(i + 1) % v.len()];
        assert_eq!(next, (v[i] + 1) % 9);
    }
}

// ============================================================================
// Deduplication
// ============================================================================

#[test]
fn test_dedup_matches_vec_dedup() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..100 {
        let mut sorted = random_vec(&mut rng, 40, 6);
        sorted.sort();

        let mut expected = sorted.clone();
        expected.dedup();

        let distinct = count_distinct(&sorted);
        let mut v = sorted.clone();
        let len = dedup_sorted(&mut v);

        assert_eq!(len, expected.len());
        assert_eq!(len, distinct);
        assert!(len <= sorted.len());
        assert_eq!(&v[..len], &expected[..]);
    }
}

// ============================================================================
// Maximum Subarray
// ============================================================================

#[test]
fn test_max_subarray_variants_agree() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let v = random_vec(&mut rng, 30, 20);

        let kadane = max_subarray(&v);
        let naive = max_subarray_naive(&v);

        match (kadane, naive) {
            (None, None) => assert!(v.is_empty()),
            (Some(k), Some(n)) => {
                assert_eq!(k.sum, n.sum, "input {:?}", v);
                assert_eq!(k.elements.iter().map(|&x| i128::from(x)).sum::<i128>(), k.sum);
                assert_eq!(n.elements.iter().map(|&x| i128::from(x)).sum::<i128>(), n.sum);
                assert_eq!(&v[k.start..k.end()], k.elements);
            }
            other => panic!("variants disagree on emptiness: {:?}", other),
        }
    }
}

#[test]
fn test_max_subarray_is_maximal() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..50 {
        let v = random_vec(&mut rng, 15, 10);
        let Some(best) = max_subarray(&v) else {
            continue;
        };

        for i in 0..v.len() {
            for j in i..v.len() {
                let sum: i128 = v[i..=j].iter().map(|&x| i128::from(x)).sum();
                assert!(sum <= best.sum, "{:?} beats {}", &v[i..=j], best.sum);
            }
        }
    }
}

#[test]
fn test_max_subarray_exercise_samples() {
    let found = max_subarray(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]).unwrap();
    assert_eq!(found.sum, 6);
    assert_eq!(found.elements, &[4, -1, 2, 1]);

    let found = max_subarray(&[5, 4, -1, 7, 8]).unwrap();
    assert_eq!(found.sum, 23);
    assert_eq!(found.elements, &[5, 4, -1, 7, 8]);
}

// ============================================================================
// Second Largest
// ============================================================================

#[test]
fn test_second_largest_variants_agree() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..200 {
        let v = random_vec(&mut rng, 12, 8);

        let mut distinct = v.clone();
        distinct.sort_unstable_by(|a, b| b.cmp(a));
        distinct.dedup();
        let expected = distinct.get(1).copied();

        assert_eq!(second_largest(&v), expected, "input {:?}", v);
        assert_eq!(second_largest_naive(&v), expected, "input {:?}", v);
    }
}

#[test]
fn test_second_largest_exercise_sample() {
    assert_eq!(second_largest(&[234, 223, 23, 24, 230]), Some(230));
}
