use std::cmp::Ordering;

use tracing::debug;

sort_impl!("rust_bubble_stable");

/// Sorts the slice, preserving the initial order of equal elements.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place (i.e., does not
/// allocate), and *O*(*n*^2) worst-case. Already sorted input is detected after a single pass.
///
/// # Examples
///
/// ```
/// let mut v = [10, 11, -5, 0];
///
/// sort_collection_rs::stable::rust_bubble::sort(&mut v);
/// assert!(v == [-5, 0, 10, 11]);
/// ```
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    bubble_sort(arr, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, preserving the initial order of equal elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified, but all original elements
/// remain in the slice.
#[inline]
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(arr, &mut |a, b| compare(a, b) == Ordering::Less);
}

// --- IMPL ---

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let (passes, swaps) = bubble_by_index(
        v,
        len,
        |v, left, right| is_less(&v[right], &v[left]),
        |v, left, right| v.swap(left, right),
    );

    debug!(len, passes, swaps, "bubble sort finished");
}

/// Bubble sort over `len` positions of `data`, driven only by index access.
///
/// `out_of_order(data, i - 1, i)` must return `true` only if the pair has to be swapped, equal
/// elements are never swapped. Returns the number of passes and swaps performed.
pub(crate) fn bubble_by_index<C, O, S>(
    data: &mut C,
    len: usize,
    mut out_of_order: O,
    mut swap: S,
) -> (usize, usize)
where
    C: ?Sized,
    O: FnMut(&mut C, usize, usize) -> bool,
    S: FnMut(&mut C, usize, usize),
{
    let mut passes = 0usize;
    let mut swaps = 0usize;

    // Everything at or past `end` is in its final position.
    let mut end = len;
    while end > 1 {
        passes += 1;

        let mut last_swap = 0;
        for i in 1..end {
            if out_of_order(data, i - 1, i) {
                swap(data, i - 1, i);
                swaps += 1;
                last_swap = i;
            }
        }

        // No swap past `last_swap`, so the tail from there on is sorted.
        end = last_swap;
    }

    (passes, swaps)
}
