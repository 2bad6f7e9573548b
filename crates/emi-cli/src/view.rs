//! View state for the schedule display.
//!
//! The computed schedule is read-only derived data; which year panels are
//! open and how many are visible live here, updated only by explicit user
//! actions.

use std::collections::BTreeSet;

/// Years revealed per "show more" press.
pub const YEAR_PAGE: usize = 4;

#[derive(Debug, Clone)]
pub struct ScheduleView {
    open_years: BTreeSet<i32>,
    visible_years: usize,
}

impl Default for ScheduleView {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleView {
    pub fn new() -> Self {
        ScheduleView {
            open_years: BTreeSet::new(),
            visible_years: YEAR_PAGE,
        }
    }

    /// Expand a collapsed year panel, or collapse an expanded one.
    pub fn toggle_year(&mut self, year: i32) {
        if !self.open_years.remove(&year) {
            self.open_years.insert(year);
        }
    }

    pub fn is_open(&self, year: i32) -> bool {
        self.open_years.contains(&year)
    }

    pub fn visible_count(&self) -> usize {
        self.visible_years
    }

    /// Reveal four more year panels. Once everything is visible, the next
    /// press folds back to the first page and collapses all open panels.
    pub fn show_more(&mut self, total_years: usize) {
        if self.visible_years < total_years {
            self.visible_years = (self.visible_years + YEAR_PAGE).min(total_years);
        } else {
            self.visible_years = YEAR_PAGE;
            self.open_years.clear();
        }
    }

    /// Show and expand every year panel.
    pub fn reveal_all(&mut self, years: &[i32]) {
        self.visible_years = years.len().max(YEAR_PAGE);
        self.open_years.extend(years.iter().copied());
    }
}
