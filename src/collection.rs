use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::sorter::Sortable;
use crate::{stable, unstable};

/// An owned sequence of totally ordered elements that can sort itself in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection<T> {
    data: Vec<T>,
}

pub type NumbersCollection = Collection<i64>;

pub type CharactersCollection = Collection<char>;

impl<T> Collection<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Current state of the sequence.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<T> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Swaps the elements at `left` and `right`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, left: usize, right: usize) {
        self.data.swap(left, right);
    }

    /// Sorts with a caller supplied ordering, preserving the order of equal elements.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        stable::rust_bubble::sort_by(&mut self.data, compare);
    }
}

impl<T: Ord> Collection<T> {
    /// Returns `true` if the element at `left` orders after the element at `right`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn compare(&self, left: usize, right: usize) -> bool {
        self.data[left] > self.data[right]
    }

    /// Sorts the sequence ascending in place with bubble sort.
    pub fn sort(&mut self) {
        debug!(len = self.data.len(), "sorting collection");
        stable::rust_bubble::sort(&mut self.data);
    }

    /// Sorts the sequence ascending in place with selection sort. Equal elements may be reordered.
    pub fn sort_unstable(&mut self) {
        debug!(len = self.data.len(), "sorting collection, unstable");
        unstable::rust_selection::sort(&mut self.data);
    }
}

impl<T: Ord> Sortable for Collection<T> {
    fn len(&self) -> usize {
        Collection::len(self)
    }

    fn compare(&self, left: usize, right: usize) -> bool {
        Collection::compare(self, left, right)
    }

    fn swap(&mut self, left: usize, right: usize) {
        Collection::swap(self, left, right);
    }

    fn sort(&mut self) {
        Collection::sort(self);
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T: Clone> From<&[T]> for Collection<T> {
    fn from(data: &[T]) -> Self {
        Self::new(data.to_vec())
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<&str> for CharactersCollection {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

/// Parses a comma separated list of integers, optionally wrapped in brackets.
///
/// `"[10, 11, -5, 0]"` and `"10,11,-5,0"` yield the same collection. Blank input and `"[]"`
/// yield an empty collection.
impl FromStr for NumbersCollection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed)
            .trim();

        if inner.is_empty() {
            return Ok(Self::default());
        }

        inner
            .split(',')
            .enumerate()
            .map(|(position, item)| {
                let item = item.trim();
                if item.is_empty() {
                    return Err(Error::EmptyElement { position });
                }

                item.parse::<i64>().map_err(|source| Error::InvalidNumber {
                    position,
                    text: item.to_owned(),
                    source,
                })
            })
            .collect()
    }
}

/// Prints the elements the way a slice debug-formats, e.g. `[-5, 0, 10, 11]`.
impl<T: fmt::Debug> fmt::Display for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.data)
    }
}
