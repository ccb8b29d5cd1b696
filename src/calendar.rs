//! Fortnight window and Sunday-first month grid calculation.

use chrono::{Datelike, Days, NaiveDate};
use log::debug;

use crate::error::{FortnightError, Result};
use crate::types::{Cell, DAYS_PER_WEEK, DateWindow, MAX_WEEKS, MonthGrid, WINDOW_DAYS};

impl DateWindow {
    /// Fourteen days either side of `date`, clamped to the representable range.
    pub fn around(date: NaiveDate) -> Self {
        let span = Days::new(WINDOW_DAYS);
        DateWindow {
            start: date.checked_sub_days(span).unwrap_or(NaiveDate::MIN),
            end: date.checked_add_days(span).unwrap_or(NaiveDate::MAX),
        }
    }

    /// Whether start and end fall in the same calendar month.
    pub fn is_single_month(&self) -> bool {
        year_month(self.start) == year_month(self.end)
    }

    /// The one or two `(year, month)` pairs the window touches, oldest first.
    pub fn target_months(&self) -> Vec<(i32, u32)> {
        if self.is_single_month() {
            vec![year_month(self.start)]
        } else {
            vec![year_month(self.start), year_month(self.end)]
        }
    }
}

fn year_month(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

/// Blank cells ahead of `first` in a Sunday-first week.
pub fn leading_blanks(first: NaiveDate) -> usize {
    first.weekday().num_days_from_sunday() as usize
}

impl MonthGrid {
    /// Lay out `(year, month)`, flagging `today` when it lies in that month.
    ///
    /// Rows are filled from the Sunday on or before the 1st and stop at the
    /// last day of the month, so the final row may be short.
    pub fn build(year: i32, month: u32, today: NaiveDate) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| FortnightError::InvalidDate(format!("{}-{:02}", year, month)))?;
        let target = (year, month);
        let highlight = (year_month(today) == target).then(|| today.day());

        let mut cells = vec![Cell::Blank; leading_blanks(first)];
        cells.extend(
            std::iter::successors(Some(first), |d| d.succ_opt())
                .take_while(|d| year_month(*d) == target)
                .map(|d| Cell::Day {
                    day: d.day(),
                    today: highlight == Some(d.day()),
                }),
        );
        debug_assert!(cells.len() <= MAX_WEEKS * DAYS_PER_WEEK);

        let weeks = cells
            .chunks(DAYS_PER_WEEK)
            .map(<[Cell]>::to_vec)
            .collect();

        Ok(MonthGrid { year, month, weeks })
    }

    /// Number of cells flagged as today.
    pub fn today_count(&self) -> usize {
        self.weeks
            .iter()
            .flatten()
            .filter(|cell| matches!(cell, Cell::Day { today: true, .. }))
            .count()
    }
}

/// Grids for every month the fortnight window around `today` touches.
pub fn month_grids(today: NaiveDate) -> Result<Vec<MonthGrid>> {
    let window = DateWindow::around(today);
    let targets = window.target_months();
    debug!(
        "window {} .. {} touches {} month(s)",
        window.start,
        window.end,
        targets.len()
    );
    targets
        .into_iter()
        .map(|(year, month)| MonthGrid::build(year, month, today))
        .collect()
}
