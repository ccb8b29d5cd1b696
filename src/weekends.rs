//! Per-year tally of weekdays against weekend days.

use chrono::{Datelike, NaiveDate, Weekday};
use log::debug;

use crate::error::{FortnightError, Result};
use crate::formatter::emphasize;
use crate::types::{LONG_WEEKEND_YEAR, Markup};

const DAY_CODES: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// How many of each weekday one calendar year holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearTally {
    pub year: i32,
    /// Weekday of January 1.
    pub first_weekday: Weekday,
    /// Indexed Sunday first.
    pub counts: [u32; 7],
}

impl YearTally {
    pub fn count(year: i32) -> Result<Self> {
        let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| FortnightError::InvalidDate(format!("year {}", year)))?;

        let mut counts = [0u32; 7];
        let days = std::iter::successors(Some(jan1), |d| d.succ_opt());
        for date in days.take_while(|d| d.year() == year) {
            counts[date.weekday().num_days_from_sunday() as usize] += 1;
        }

        Ok(YearTally {
            year,
            first_weekday: jan1.weekday(),
            counts,
        })
    }

    /// Monday through Friday.
    pub fn weekday_total(&self) -> u32 {
        self.counts[1..6].iter().sum()
    }

    /// Saturday plus Sunday.
    pub fn weekend_total(&self) -> u32 {
        self.counts[0] + self.counts[6]
    }

    /// Table row `| year | Jan-1 weekday | weekdays | weekends |`.
    pub fn format_row(&self, markup: Markup) -> String {
        let code = DAY_CODES[self.first_weekday.num_days_from_sunday() as usize];
        let code = if self.first_weekday == Weekday::Sat {
            emphasize(code, markup)
        } else {
            code.to_string()
        };

        let (costs, profits) = (self.weekday_total(), self.weekend_total());
        if profits >= LONG_WEEKEND_YEAR {
            format!(
                "| {} | {} | {} | {} |",
                self.year,
                code,
                emphasize(&costs.to_string(), markup),
                emphasize(&profits.to_string(), markup)
            )
        } else {
            format!("| {} | {} | {} | {} |", self.year, code, costs, profits)
        }
    }
}

/// Tallies for `first..=last`, newest year first.
pub fn tally_range(first: i32, last: i32) -> Result<Vec<YearTally>> {
    if first > last {
        return Err(FortnightError::EmptyYearRange { first, last });
    }
    debug!("tallying years {} down to {}", last, first);
    (first..=last).rev().map(YearTally::count).collect()
}
