//! Immutable, cheaply clonable lists used throughout the name model.
//!
//! Parameter lists, generic parameter collections and generic argument lists are all shared
//! between a name and the copies produced by its `with_*` operations. [`NameList`] stores its
//! items behind an [`Arc`] so that cloning a name never copies the list, and every
//! modification produces a new list while leaving the original untouched.

use std::{fmt, ops::Deref, sync::Arc};

/// An immutable list of name components with copy-on-write modification.
///
/// # Examples
///
/// ```rust
/// use dotnames::NameList;
///
/// let list: NameList<u32> = vec![1, 2, 3].into();
/// let changed = list.with_item(1, 20);
///
/// assert_eq!(&list[..], &[1, 2, 3]);
/// assert_eq!(&changed[..], &[1, 20, 3]);
/// ```
pub struct NameList<T> {
    items: Arc<[T]>,
}

impl<T> NameList<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        NameList {
            items: Arc::from(Vec::new()),
        }
    }

    /// Returns a copy of this list with the item at `index` replaced.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn with_item(&self, index: usize, item: T) -> Self
    where
        T: Clone,
    {
        let mut items = self.items.to_vec();
        items[index] = item;
        items.into()
    }

    /// Returns a copy of this list with `item` appended.
    #[must_use]
    pub fn appended(&self, item: T) -> Self
    where
        T: Clone,
    {
        let mut items = self.items.to_vec();
        items.push(item);
        items.into()
    }

    /// Returns `true` if both lists share the same storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<T> Clone for NameList<T> {
    fn clone(&self) -> Self {
        NameList {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for NameList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for NameList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for NameList<T> {
    fn from(items: Vec<T>) -> Self {
        NameList {
            items: Arc::from(items),
        }
    }
}

impl<T> FromIterator<T> for NameList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<'a, T> IntoIterator for &'a NameList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq> PartialEq for NameList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items[..] == other.items[..]
    }
}

impl<T: Eq> Eq for NameList<T> {}

impl<T: fmt::Debug> fmt::Debug for NameList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
