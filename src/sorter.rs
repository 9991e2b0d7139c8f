use tracing::trace;

use crate::stable::rust_bubble::bubble_by_index;

/// Something that can put its own elements in ascending order.
///
/// Implementors only have to provide element access. The provided `sort` is a bubble sort
/// written purely in terms of [`Sortable::compare`] and [`Sortable::swap`], which is how
/// non-contiguous containers get sorted. Containers backed by a slice should override it.
pub trait Sortable {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the element at `left` orders after the element at `right`.
    fn compare(&self, left: usize, right: usize) -> bool;

    fn swap(&mut self, left: usize, right: usize);

    fn sort(&mut self) {
        let len = self.len();
        let (passes, swaps) = bubble_by_index(
            self,
            len,
            |sortable, left, right| sortable.compare(left, right),
            |sortable, left, right| sortable.swap(left, right),
        );
        trace!(len, passes, swaps, "sorted through element access");
    }
}

/// Sorts a borrowed collection.
///
/// Adds no behavior of its own; [`Sorter::sort`] forwards to the collection.
pub struct Sorter<'a, C: Sortable + ?Sized> {
    collection: &'a mut C,
}

impl<'a, C: Sortable + ?Sized> Sorter<'a, C> {
    pub fn new(collection: &'a mut C) -> Self {
        Self { collection }
    }

    pub fn collection(&self) -> &C {
        &*self.collection
    }

    pub fn sort(&mut self) {
        trace!(len = self.collection.len(), "delegating sort to collection");
        self.collection.sort();
    }
}
