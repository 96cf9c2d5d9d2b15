// src/tasks/combinatorics.rs - Exhaustive enumeration of permutations, combinations and subsets
//
// Generation works on input positions, so repeated values yield repeated rows.
// Every generator checks the row count against a caller-supplied limit before
// allocating anything.

use crate::infra::errors::{DrillError, Result};

/// `n!`, or `None` past `u128`.
pub fn permutation_count(n: usize) -> Option<u128> {
    (1..=n as u128).try_fold(1u128, |acc, i| acc.checked_mul(i))
}

/// `C(n, k)`, or `None` past `u128`.
pub fn combination_count(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k) as u128;
    let n = n as u128;
    // each partial product is itself a binomial coefficient, so the division is exact
    (0..k).try_fold(1u128, |acc, i| Some(acc.checked_mul(n - i)? / (i + 1)))
}

/// `2^n`, or `None` past `u128`.
pub fn subset_count(n: usize) -> Option<u128> {
    u32::try_from(n).ok().and_then(|n| 1u128.checked_shl(n))
}

fn ensure_within(rows: Option<u128>, limit: u128) -> Result<()> {
    match rows {
        Some(rows) if rows <= limit => Ok(()),
        Some(rows) => Err(DrillError::TooLarge { rows, limit }),
        None => Err(DrillError::TooLarge {
            rows: u128::MAX,
            limit,
        }),
    }
}

/// All `n!` orderings. Unsorted output follows position order; `sorted`
/// orders rows lexicographically by value.
pub fn permutations<T: Clone + Ord>(xs: &[T], sorted: bool, limit: u128) -> Result<Vec<Vec<T>>> {
    ensure_within(permutation_count(xs.len()), limit)?;
    let mut out = Vec::new();
    let mut used = vec![false; xs.len()];
    let mut current = Vec::with_capacity(xs.len());
    permute(xs, &mut used, &mut current, &mut out);
    if sorted {
        out.sort();
    }
    tracing::debug!(rows = out.len(), "generated permutations");
    Ok(out)
}

fn permute<T: Clone>(xs: &[T], used: &mut [bool], current: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
    if current.len() == xs.len() {
        out.push(current.clone());
        return;
    }
    for i in 0..xs.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        current.push(xs[i].clone());
        permute(xs, used, current, out);
        current.pop();
        used[i] = false;
    }
}

/// All `C(n, k)` selections in position order.
pub fn combinations<T: Clone>(xs: &[T], k: usize, limit: u128) -> Result<Vec<Vec<T>>> {
    ensure_within(combination_count(xs.len(), k), limit)?;
    Ok(combinations_unchecked(xs, k))
}

fn combinations_unchecked<T: Clone>(xs: &[T], k: usize) -> Vec<Vec<T>> {
    let n = xs.len();
    if k > n {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        out.push(idx.iter().map(|&i| xs[i].clone()).collect());

        // rightmost index that can still move right
        let Some(i) = (0..k).rev().find(|&i| idx[i] != i + n - k) else {
            return out;
        };
        idx[i] += 1;
        for j in i + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

/// All `2^n` subsets, by size, then in combination order.
pub fn subsets<T: Clone>(xs: &[T], limit: u128) -> Result<Vec<Vec<T>>> {
    ensure_within(subset_count(xs.len()), limit)?;
    Ok((0..=xs.len())
        .flat_map(|k| combinations_unchecked(xs, k))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LIMIT: u128 = 1_000_000;

    #[test]
    fn test_counts() {
        assert_eq!(permutation_count(0), Some(1));
        assert_eq!(permutation_count(5), Some(120));
        assert_eq!(permutation_count(34), Some(295_232_799_039_604_140_847_618_609_643_520_000_000));
        assert_eq!(permutation_count(35), None);
        assert_eq!(combination_count(5, 2), Some(10));
        assert_eq!(combination_count(5, 0), Some(1));
        assert_eq!(combination_count(3, 4), Some(0));
        assert_eq!(combination_count(60, 30), Some(118_264_581_564_861_424));
        assert_eq!(subset_count(3), Some(8));
        assert_eq!(subset_count(127), Some(1u128 << 127));
        assert_eq!(subset_count(128), None);
    }

    #[test]
    fn test_permutations_sorted() {
        let rows = permutations(&[3, 1, 2], true, LIMIT).unwrap();
        assert_eq!(
            rows,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn test_permutations_position_order() {
        let rows = permutations(&[3, 1], false, LIMIT).unwrap();
        assert_eq!(rows, vec![vec![3, 1], vec![1, 3]]);
    }

    #[test]
    fn test_permutations_keep_duplicates() {
        let rows = permutations(&[1, 1], true, LIMIT).unwrap();
        assert_eq!(rows, vec![vec![1, 1], vec![1, 1]]);
    }

    #[test]
    fn test_permutations_empty() {
        assert_eq!(permutations::<i64>(&[], true, LIMIT).unwrap(), vec![Vec::<i64>::new()]);
    }

    #[test]
    fn test_combinations() {
        let rows = combinations(&[1, 2, 3, 4], 2, LIMIT).unwrap();
        assert_eq!(
            rows,
            vec![
                vec![1, 2],
                vec![1, 3],
                vec![1, 4],
                vec![2, 3],
                vec![2, 4],
                vec![3, 4],
            ]
        );
        assert_eq!(combinations(&[1, 2], 0, LIMIT).unwrap(), vec![Vec::<i32>::new()]);
        assert!(combinations(&[1, 2], 3, LIMIT).unwrap().is_empty());
    }

    #[test]
    fn test_subsets() {
        let rows = subsets(&['a', 'b', 'c'], LIMIT).unwrap();
        let rendered: Vec<String> = rows.iter().map(|r| r.iter().collect()).collect();
        assert_eq!(rendered, vec!["", "a", "b", "c", "ab", "ac", "bc", "abc"]);
    }

    #[test]
    fn test_limit_guard() {
        let xs: Vec<i64> = (0..10).collect();
        let err = permutations(&xs, true, LIMIT).unwrap_err();
        assert!(matches!(
            err,
            DrillError::TooLarge {
                rows: 3_628_800,
                limit: 1_000_000
            }
        ));
        let xs: Vec<i64> = (0..200).collect();
        assert!(matches!(
            subsets(&xs, LIMIT),
            Err(DrillError::TooLarge { .. })
        ));
    }
}
