//! Fixed-size pagination of result slices.
//!
//! # Examples
//!
//! ```
//! use pike::paginate::paginate;
//!
//! let items = [1, 2, 3, 4, 5];
//! let pages = paginate(&items, 2).unwrap();
//! assert_eq!(pages.len(), 3);
//! assert_eq!(pages.iter().last().unwrap().as_slice(), &[5]);
//! ```

use std::fmt;

use crate::error::{PikeError, Result};

/// One page: a contiguous run of items.
#[derive(Debug)]
pub struct Page<'a, T> {
    items: &'a [T],
}

impl<T> Clone for Page<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Page<'_, T> {}

impl<'a, T> Page<'a, T> {
    /// Items on this page.
    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }

    /// Iterate over the items on this page.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.items.iter()
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the page has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: fmt::Display> fmt::Display for Page<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.items {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Pages over a slice. Every page holds `page_size` items except possibly
/// the last one.
#[derive(Debug)]
pub struct Paginator<'a, T> {
    pages: Vec<Page<'a, T>>,
}

impl<'a, T> Paginator<'a, T> {
    /// Split `items` into pages of `page_size`.
    pub fn new(items: &'a [T], page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(PikeError::invalid_argument("page size must be at least 1"));
        }
        let pages = items.chunks(page_size).map(|items| Page { items }).collect();
        Ok(Paginator { pages })
    }

    /// Iterate over the pages.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Page<'a, T>> + '_ {
        self.pages.iter().copied()
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True if there are no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl<'a, T> IntoIterator for Paginator<'a, T> {
    type Item = Page<'a, T>;
    type IntoIter = std::vec::IntoIter<Page<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.into_iter()
    }
}

/// Paginate a slice of items.
pub fn paginate<T>(items: &[T], page_size: usize) -> Result<Paginator<'_, T>> {
    Paginator::new(items, page_size)
}
