// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Lookout contributors
//! Client-side pagination over an in-memory list
//!
//! A [`Pager`] owns an ordered list of records and a 1-based current page,
//! and answers window queries (`page_start`, `page_end`, `page_items`) for
//! whatever view is rendering the list. Navigation always routes through
//! [`Pager::set_page`], which is the single clamp point, so the current page
//! can never drift outside `[1, max(num_pages, 1)]`.

use std::fmt;

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Extracts a change-detection key from a record
pub type KeyFn<T> = Box<dyn Fn(&T) -> String>;

/// Pagination state over an ordered list of records
///
/// The pager never inspects its records except through the optional key
/// extractor, which is used solely to decide whether a replacement list is
/// "the same list" (keep the page) or a different one (reset to page 1).
pub struct Pager<T> {
    items: Vec<T>,
    page: usize,
    page_size: usize,
    key_fn: Option<KeyFn<T>>,
}

impl<T> Default for Pager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Pager<T> {
    /// Create an empty pager with the default page size
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            key_fn: None,
        }
    }

    /// Configure a key extractor used for change detection
    ///
    /// With a key extractor, replacing the items only resets the page when
    /// the ordered key sequences differ. Without one, replacement falls back
    /// to whole-list equality (see [`Pager::replace_items`]).
    #[must_use]
    pub fn with_key_fn(mut self, key_fn: impl Fn(&T) -> String + 'static) -> Self {
        self.key_fn = Some(Box::new(key_fn));
        self
    }

    /// Set the number of items per page (minimum 1)
    ///
    /// Does not re-clamp the current page; bounds are re-enforced by the
    /// next navigation or item replacement.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    /// The full item list, in display order
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items across all pages
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current page number (1-based)
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Items per page
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total number of pages; 0 when the list is empty
    #[must_use]
    pub fn num_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Zero-based index of the first item conceptually on the current page
    ///
    /// May lie beyond the end of the list when the page is transiently out
    /// of range; window queries clamp, this one does not.
    #[must_use]
    pub fn page_offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    /// One-based display index of the first visible item, clamped to the
    /// list length
    #[must_use]
    pub fn page_start(&self) -> usize {
        (self.page_offset() + 1).min(self.items.len())
    }

    /// One-based display index of the last visible item, clamped to the
    /// list length
    #[must_use]
    pub fn page_end(&self) -> usize {
        (self.page_offset() + self.page_size).min(self.items.len())
    }

    /// Jump to a page, clamped into `[1, max(num_pages, 1)]`
    ///
    /// Single source of truth for page-bounds enforcement; all navigation
    /// goes through here.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.num_pages().max(1));
    }

    /// Advance one page (clamped)
    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    /// Go back one page (clamped)
    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Whether the current page is the first one
    #[must_use]
    pub fn is_first_page(&self) -> bool {
        self.page <= 1
    }

    /// Whether the current page is the last one
    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.page >= self.num_pages()
    }

    /// The items from the current page offset to the end of the list
    ///
    /// Empty when the offset is at or past the end. Renderers typically take
    /// at most `page_size` of these; [`Pager::page_items`] does that
    /// truncation.
    #[must_use]
    pub fn visible_slice(&self) -> &[T] {
        let start = self.page_offset().min(self.items.len());
        &self.items[start..]
    }

    /// The items on the current page
    #[must_use]
    pub fn page_items(&self) -> &[T] {
        let slice = self.visible_slice();
        &slice[..slice.len().min(self.page_size)]
    }
}

impl<T: PartialEq> Pager<T> {
    /// Replace the item list, resetting to page 1 when it is a different list
    ///
    /// "Different" means: the ordered sequences of extracted keys differ
    /// when a key extractor is configured, or the lists compare unequal
    /// otherwise. Replacing with an identical list leaves the page alone, so
    /// a refresh that returns the same data does not yank the user back to
    /// page 1.
    pub fn replace_items(&mut self, items: Vec<T>) {
        let changed = match &self.key_fn {
            Some(key_fn) => {
                let old: Vec<String> = self.items.iter().map(|i| key_fn(i)).collect();
                let new: Vec<String> = items.iter().map(|i| key_fn(i)).collect();
                old != new
            }
            None => self.items != items,
        };

        self.items = items;
        if changed {
            self.set_page(1);
        }
    }
}

impl<T> fmt::Debug for Pager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pager")
            .field("len", &self.items.len())
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .field("keyed", &self.key_fn.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager_with(n: usize, page_size: usize) -> Pager<usize> {
        let mut pager = Pager::new();
        pager.set_page_size(page_size);
        pager.replace_items((0..n).collect());
        pager
    }

    #[test]
    fn test_walk_through_25_items() {
        let mut pager = pager_with(25, 10);

        assert_eq!(pager.num_pages(), 3);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.page_start(), 1);
        assert_eq!(pager.page_end(), 10);
        assert!(pager.is_first_page());
        assert!(!pager.is_last_page());

        pager.next_page();
        pager.next_page();
        assert_eq!(pager.page(), 3);
        assert_eq!(pager.page_start(), 21);
        assert_eq!(pager.page_end(), 25);
        assert_eq!(pager.page_items(), &[20, 21, 22, 23, 24]);
        assert!(pager.is_last_page());

        // Clamped at the end
        pager.next_page();
        assert_eq!(pager.page(), 3);
    }

    #[test]
    fn test_prev_page_clamps_at_first() {
        let mut pager = pager_with(25, 10);
        pager.prev_page();
        assert_eq!(pager.page(), 1);
        assert!(pager.is_first_page());
    }

    #[test]
    fn test_empty_list() {
        let pager: Pager<usize> = pager_with(0, 10);

        assert_eq!(pager.num_pages(), 0);
        assert_eq!(pager.page_start(), 0);
        assert_eq!(pager.page_end(), 0);
        assert!(pager.is_first_page());
        assert!(pager.is_last_page());
        assert!(pager.page_items().is_empty());
        assert!(pager.visible_slice().is_empty());
    }

    #[test]
    fn test_set_page_clamps_on_empty_list() {
        let mut pager: Pager<usize> = pager_with(0, 10);
        pager.set_page(7);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_page_size_larger_than_list() {
        let pager = pager_with(4, 10);
        assert_eq!(pager.num_pages(), 1);
        assert_eq!(pager.page_end(), 4);
        assert_eq!(pager.page_items().len(), 4);
    }

    #[test]
    fn test_set_page_clamps_huge_and_zero() {
        let mut pager = pager_with(25, 10);

        pager.set_page(usize::MAX);
        assert_eq!(pager.page(), 3);

        pager.set_page(0);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_set_page_size_minimum_is_one() {
        let mut pager = pager_with(5, 10);
        pager.set_page_size(0);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.num_pages(), 5);
    }

    #[test]
    fn test_visible_slice_runs_to_end_of_list() {
        let mut pager = pager_with(25, 10);
        pager.set_page(2);
        assert_eq!(pager.visible_slice().len(), 15);
        assert_eq!(pager.page_items().len(), 10);
    }

    #[test]
    fn test_replace_with_different_list_resets_page() {
        let mut pager = pager_with(25, 10);
        pager.set_page(3);

        pager.replace_items((0..12).collect());
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_replace_with_identical_list_keeps_page() {
        let mut pager = pager_with(25, 10);
        pager.set_page(2);

        pager.replace_items((0..25).collect());
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn test_keyed_replace_resets_only_on_key_change() {
        #[derive(PartialEq)]
        struct Row {
            name: &'static str,
            hits: u32,
        }

        let mut pager = Pager::new().with_key_fn(|row: &Row| row.name.to_string());
        pager.set_page_size(1);
        pager.replace_items(vec![
            Row { name: "a", hits: 0 },
            Row { name: "b", hits: 0 },
        ]);
        pager.set_page(2);

        // Same keys, different payload: page survives
        pager.replace_items(vec![
            Row { name: "a", hits: 9 },
            Row { name: "b", hits: 9 },
        ]);
        assert_eq!(pager.page(), 2);

        // Key order changed: back to page 1
        pager.replace_items(vec![
            Row { name: "b", hits: 9 },
            Row { name: "a", hits: 9 },
        ]);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_replace_shrinking_list_reclamps_page() {
        let mut pager = pager_with(25, 10);
        pager.set_page(3);

        // New list has only one page; reset also re-clamps
        pager.replace_items((0..5).collect());
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.num_pages(), 1);
    }

    #[test]
    fn test_page_offset_is_not_clamped() {
        let mut pager = pager_with(25, 10);
        pager.set_page(3);
        pager.replace_items((0..25).collect()); // identical, page stays 3

        // Grow page size without navigating: offset can exceed the list
        assert_eq!(pager.page(), 3);
        pager.set_page_size(100);
        assert_eq!(pager.page_offset(), 200);
        assert_eq!(pager.page_start(), 25);
        assert_eq!(pager.page_end(), 25);
        assert!(pager.visible_slice().is_empty());
    }
}
