//! Type definitions and constants for fortnight rendering.

use chrono::{Locale, NaiveDate};

/// A wall-clock reading the calendar is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceInstant {
    pub year: i32,
    /// Month of year, 1-12.
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Signed minutes east of UTC.
    pub utc_offset_minutes: i32,
}

/// The span of days either side of the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// One slot of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Filler for a day of the previous month.
    Blank,
    Day { day: u32, today: bool },
}

/// Sunday-first day layout of one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Up to six rows; the last row may hold fewer than seven cells.
    pub weeks: Vec<Vec<Cell>>,
}

/// How the today cell (and other strong text) is emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    /// No emphasis.
    Plain,
    /// ANSI reverse video.
    Ansi,
    /// `<strong>` tags.
    Html,
}

/// Formatting options for calendar output.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub markup: Markup,
    /// Locale for month names.
    pub locale: Locale,
}

/// HTML emphasis and English month names.
impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            markup: Markup::Html,
            locale: Locale::en_US,
        }
    }
}

// Calendar layout
pub const WINDOW_DAYS: u64 = 14;
pub const MAX_WEEKS: usize = 6;
pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKDAY_HEADER: &str = "Su Mo Tu We Th Fr Sa";
pub const NBSP: char = '\u{00A0}';

// Largest plausible UTC offset, in minutes.
pub const MAX_OFFSET_MINUTES: i32 = 99 * 60;

// Weekend tally defaults
pub const FIRST_TALLY_YEAR: i32 = 1939;
pub const LAST_TALLY_YEAR: i32 = 2058;
pub const LONG_WEEKEND_YEAR: u32 = 106;

// ANSI codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";

// Transcript framing
pub const PROMPT: &str = "+";
