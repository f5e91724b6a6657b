/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global filter options
//!
//! Options are shared by all filters, a filter ignores
//! options it has no use for.

/// Filter options
///
/// Options follow the builder pattern, each `set_` method
/// consumes the options and returns a modified copy.
///
/// # Example
/// ```
/// use pixgrid_core::options::FilterOptions;
///
/// let options = FilterOptions::default()
///     .set_max_snapshot_bytes(1 << 20)
///     .set_use_multithreading(false);
///
/// assert_eq!(options.max_snapshot_bytes(), 1 << 20);
/// assert!(!options.use_multithreading());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    /// Maximum number of bytes a filter may allocate for
    /// its copy of the grid
    max_snapshot_bytes: usize,
    /// Whether neighborhood filters may split rows across threads
    ///
    /// Has no effect when the `threads` feature of `pixgrid-procs` is off
    use_multithreading: bool
}

impl Default for FilterOptions {
    fn default() -> Self {
        FilterOptions {
            max_snapshot_bytes: usize::MAX,
            use_multithreading: true
        }
    }
}

impl FilterOptions {
    /// Options with no snapshot limit, running on a single thread
    #[must_use]
    pub fn new_single_threaded() -> FilterOptions {
        FilterOptions::default().set_use_multithreading(false)
    }

    /// Get the maximum number of bytes a snapshot may use
    #[must_use]
    pub const fn max_snapshot_bytes(&self) -> usize {
        self.max_snapshot_bytes
    }

    /// Set the maximum number of bytes a snapshot may use
    ///
    /// Filters that need a copy of a grid larger than this
    /// fail with `GridErrors::AllocationFailure` and leave the grid untouched
    #[must_use]
    pub const fn set_max_snapshot_bytes(mut self, bytes: usize) -> Self {
        self.max_snapshot_bytes = bytes;
        self
    }

    /// Whether filters may use more than one thread
    #[must_use]
    pub const fn use_multithreading(&self) -> bool {
        self.use_multithreading
    }

    /// Allow or forbid filters from using more than one thread
    #[must_use]
    pub const fn set_use_multithreading(mut self, yes: bool) -> Self {
        self.use_multithreading = yes;
        self
    }
}
