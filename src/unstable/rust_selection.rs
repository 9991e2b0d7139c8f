use std::cmp::Ordering;

use tracing::debug;

sort_impl!("rust_selection_unstable");

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
/// allocate), and *O*(*n*^2) for every input. It performs at most `len - 1` swaps.
///
/// # Examples
///
/// ```
/// let mut v = ['c', 'A', 'b'];
///
/// sort_collection_rs::unstable::rust_selection::sort(&mut v);
/// assert!(v == ['A', 'b', 'c']);
/// ```
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    selection_sort(arr, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified.
#[inline]
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(arr, &mut |a, b| compare(a, b) == Ordering::Less);
}

// --- IMPL ---

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut swaps = 0usize;

    for i in 0..len - 1 {
        let mut min = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }

        if min != i {
            v.swap(i, min);
            swaps += 1;
        }
    }

    debug!(len, swaps, "selection sort finished");
}
