//! Small ordered collections of numbers or characters that sort themselves in place.
//!
//! A [`Collection`] owns its elements and sorts them with a quadratic comparison sort. A
//! [`Sorter`] borrows anything [`Sortable`] and forwards the sort call to it.

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

// Every algorithm module exposes free `sort` and `sort_by` functions. This stamps out the
// matching `SortImpl` so the shared test battery can be instantiated for it.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod collection;
pub mod error;
pub mod sorter;
pub mod stable;
pub mod unstable;

pub mod patterns;

#[doc(hidden)]
pub use paste;

pub use collection::{CharactersCollection, Collection, NumbersCollection};
pub use error::{Error, Result};
pub use sorter::{Sortable, Sorter};
