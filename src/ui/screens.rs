use crate::models::{CourseFilter, MenuItem};
use crate::store::MenuStore;

/// Cursor over a list whose length can change underneath it.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Selection {
    pub(crate) index: usize,
}

impl Selection {
    pub(crate) fn move_by(&mut self, offset: isize, len: usize) {
        if len == 0 {
            self.index = 0;
            return;
        }
        let max = len as isize - 1;
        self.index = (self.index as isize + offset).clamp(0, max) as usize;
    }

    pub(crate) fn first(&mut self) {
        self.index = 0;
    }

    pub(crate) fn last(&mut self, len: usize) {
        self.index = len.saturating_sub(1);
    }

    /// Pull the cursor back inside `0..len` after a removal.
    pub(crate) fn clamp(&mut self, len: usize) {
        if self.index >= len {
            self.index = len.saturating_sub(1);
        }
    }
}

/// Read-only view of the menu restricted to one course.
pub(crate) struct FilterScreen {
    pub(crate) filter: CourseFilter,
    pub(crate) selection: Selection,
}

impl FilterScreen {
    pub(crate) fn new() -> Self {
        Self {
            filter: CourseFilter::All,
            selection: Selection::default(),
        }
    }

    /// Change the active filter and reset the cursor to the top.
    pub(crate) fn set_filter(&mut self, filter: CourseFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.selection.first();
        }
    }

    pub(crate) fn items<'a>(&self, store: &'a MenuStore) -> Vec<&'a MenuItem> {
        store.filter(self.filter)
    }

    /// `Showing 3 dishes` or `Showing 1 mains`.
    pub(crate) fn summary(&self, count: usize) -> String {
        match self.filter {
            CourseFilter::All => format!("Showing {count} dishes"),
            CourseFilter::Only(course) => {
                format!("Showing {count} {}", course.label().to_lowercase())
            }
        }
    }

    pub(crate) fn empty_hint(&self) -> String {
        match self.filter {
            CourseFilter::All => "No menu items available".to_string(),
            CourseFilter::Only(course) => {
                format!("No {} available", course.label().to_lowercase())
            }
        }
    }
}
