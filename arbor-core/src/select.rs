//! Bounded top-K selection.
//!
//! Keeps at most `k + 1` candidates in a binary heap while streaming the
//! input, so selecting from `n` items costs O(n log k) time and O(k) space.
//! Kruskal uses it with `k` equal to the edge count as its sorting step.

use std::{cmp::Reverse, collections::BinaryHeap};

/// Returns the `k` smallest items in ascending order.
///
/// When the input holds fewer than `k` items, all of them are returned in
/// sorted order. Pass an iterator of references to select from a slice
/// without moving or mutating it.
///
/// # Examples
/// ```
/// use arbor_core::select_smallest;
///
/// let values = [5, 1, 4, 2, 3];
/// assert_eq!(select_smallest(2, values), vec![1, 2]);
/// assert_eq!(select_smallest(10, &values), vec![&1, &2, &3, &4, &5]);
/// assert!(select_smallest(0, values).is_empty());
/// ```
#[must_use]
pub fn select_smallest<T, I>(k: usize, items: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    if k == 0 {
        return Vec::new();
    }

    // Max-heap: the root is the worst of the current best `k`.
    let mut kept = BinaryHeap::with_capacity(k.saturating_add(1));
    for item in items {
        kept.push(item);
        if kept.len() > k {
            kept.pop();
        }
    }
    kept.into_sorted_vec()
}

/// Returns the `k` largest items in descending order.
///
/// # Examples
/// ```
/// use arbor_core::select_largest;
///
/// assert_eq!(select_largest(2, [5, 1, 4, 2, 3]), vec![5, 4]);
/// ```
#[must_use]
pub fn select_largest<T, I>(k: usize, items: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    select_smallest(k, items.into_iter().map(Reverse))
        .into_iter()
        .map(|Reverse(item)| item)
        .collect()
}
