// src/tasks/sequences.rs - List drills
//
// Seen-set passes (dedup, first duplicate), running sums, Kadane, LIS,
// insertion sort and flattening of arbitrarily nested lists.

use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::infra::errors::{DrillError, Result};

/// A value or a list of nested values, e.g. the JSON `[1, [2, [3]]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

/// Drop repeats, keeping each value's first occurrence in place.
pub fn dedup_preserving_order<T: Eq + Hash + Clone>(xs: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(xs.len());
    xs.iter().filter(|x| seen.insert(*x)).cloned().collect()
}

pub fn prefix_sums(xs: &[i64]) -> Result<Vec<i64>> {
    let mut total = 0i64;
    xs.iter()
        .map(|&x| {
            total = total
                .checked_add(x)
                .ok_or(DrillError::Overflow("prefix sum"))?;
            Ok(total)
        })
        .collect()
}

/// Largest value strictly below the maximum.
pub fn second_largest(xs: &[i64]) -> Option<i64> {
    let mut first: Option<i64> = None;
    let mut second: Option<i64> = None;
    for &x in xs {
        match first {
            Some(f) if x == f => {}
            Some(f) if x < f => {
                if second.map_or(true, |s| x > s) {
                    second = Some(x);
                }
            }
            _ => {
                second = first;
                first = Some(x);
            }
        }
    }
    second
}

/// First value seen twice while scanning left to right.
pub fn first_duplicate<T: Eq + Hash + Clone>(xs: &[T]) -> Option<T> {
    let mut seen = HashSet::with_capacity(xs.len());
    xs.iter().find(|x| !seen.insert(*x)).cloned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaxSubarray {
    pub sum: i128,
    /// Inclusive bounds of the first window reaching `sum`.
    pub start: usize,
    pub end: usize,
}

/// Kadane's algorithm over non-empty subarrays.
pub fn max_subarray(xs: &[i64]) -> Result<MaxSubarray> {
    let (&head, tail) = xs
        .split_first()
        .ok_or(DrillError::EmptyInput { task: "max-subarray" })?;

    let mut best = MaxSubarray {
        sum: head.into(),
        start: 0,
        end: 0,
    };
    let mut running = i128::from(head);
    let mut start = 0;
    for (offset, &x) in tail.iter().enumerate() {
        let i = offset + 1;
        if running < 0 {
            running = x.into();
            start = i;
        } else {
            running += i128::from(x);
        }
        if running > best.sum {
            best = MaxSubarray {
                sum: running,
                start,
                end: i,
            };
        }
    }
    Ok(best)
}

/// Longest strictly increasing subsequence, O(n²) DP.
///
/// Among maximal subsequences the one ending earliest is returned.
pub fn longest_increasing_subsequence(xs: &[i64]) -> Vec<i64> {
    if xs.is_empty() {
        return Vec::new();
    }
    let mut length = vec![1usize; xs.len()];
    let mut parent: Vec<Option<usize>> = vec![None; xs.len()];

    for i in 1..xs.len() {
        for j in 0..i {
            if xs[j] < xs[i] && length[j] + 1 > length[i] {
                length[i] = length[j] + 1;
                parent[i] = Some(j);
            }
        }
    }

    let mut end = 0;
    for i in 1..xs.len() {
        if length[i] > length[end] {
            end = i;
        }
    }

    let mut witness = Vec::with_capacity(length[end]);
    let mut cursor = Some(end);
    while let Some(i) = cursor {
        witness.push(xs[i]);
        cursor = parent[i];
    }
    witness.reverse();
    witness
}

/// Stable in-place insertion sort.
pub fn insertion_sort<T: Ord>(xs: &mut [T]) {
    for i in 1..xs.len() {
        let mut j = i;
        while j > 0 && xs[j - 1] > xs[j] {
            xs.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Depth-first, left-to-right flattening.
pub fn flatten<T: Clone>(nested: &Nested<T>) -> Vec<T> {
    let mut out = Vec::new();
    flatten_into(nested, &mut out);
    out
}

fn flatten_into<T: Clone>(nested: &Nested<T>, out: &mut Vec<T>) {
    match nested {
        Nested::Item(value) => out.push(value.clone()),
        Nested::List(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
    }
}
