//! Fortnight calendar and small date sums.
//!
//! Features:
//! - Calendar months touched by the fourteen days either side of a date
//! - `date -Iseconds` style stamps with UTC offset
//! - Per-year weekday/weekend tallies
//! - Timesheet summing over `hour.minute` clock stamps

pub mod args;
pub mod calendar;
pub mod clock;
pub mod error;
pub mod formatter;
pub mod shifts;
pub mod types;
pub mod weekends;
