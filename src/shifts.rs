//! Timesheet summing over `hour.minute..hour.minute` clock stamps.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error::{FortnightError, Result};

static STAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+[.][0-9]+").expect("stamp pattern is valid"));

/// A morning of five clock-in/clock-out pairs.
pub const SAMPLE_A: &str = "
    7.21..8.36
    9.03..9.34
    9.50..10.28
    11.04..16.24
    16.49..17.19
";

/// Three longer pairs.
pub const SAMPLE_B: &str = "
    8.00..9.00
    10.15..11.24
    15.18..21.54
";

/// One `hour.minute` stamp, keeping the digits as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub hour_text: String,
    pub minute_text: String,
    pub hour: i64,
    pub minute: i64,
}

impl Stamp {
    pub fn parse(token: &str) -> Result<Self> {
        let (h, m) = token
            .split_once('.')
            .ok_or_else(|| FortnightError::InvalidStamp(token.to_string()))?;
        let number = |s: &str| {
            s.parse::<i64>()
                .map_err(|_| FortnightError::InvalidStamp(token.to_string()))
        };
        Ok(Stamp {
            hour_text: h.to_string(),
            minute_text: m.to_string(),
            hour: number(h)?,
            minute: number(m)?,
        })
    }
}

/// Elapsed time between a clock-in and the following clock-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    pub clock_in: Stamp,
    pub clock_out: Stamp,
}

impl Shift {
    /// Signed minutes from clock-in to clock-out.
    pub fn minutes(&self) -> Result<i64> {
        let dh = self.clock_out.hour.checked_sub(self.clock_in.hour);
        let dm = self.clock_out.minute.checked_sub(self.clock_in.minute);
        dh.and_then(|h| h.checked_mul(60))
            .zip(dm)
            .and_then(|(h, m)| h.checked_add(m))
            .ok_or_else(|| FortnightError::InvalidStamp(self.span_text()))
    }

    fn span_text(&self) -> String {
        format!(
            "{}.{}..{}.{}",
            self.clock_in.hour_text,
            self.clock_in.minute_text,
            self.clock_out.hour_text,
            self.clock_out.minute_text
        )
    }

    pub fn format_line(&self) -> Result<String> {
        Ok(format!(
            "{}:{} {}:{} -> {}",
            self.clock_in.hour_text,
            self.clock_in.minute_text,
            self.clock_out.hour_text,
            self.clock_out.minute_text,
            format_duration(self.minutes()?)
        ))
    }
}

/// `{hours}h{minutes}m`, remainder taking the sign of the total.
pub fn format_duration(total: i64) -> String {
    let minutes = total % 60;
    let hours = (total - minutes) / 60;
    format!("{}h{}m", hours, minutes)
}

/// Every stamp pair found in `text`, in order.
pub fn parse_shifts(text: &str) -> Result<Vec<Shift>> {
    let stamps = STAMP
        .find_iter(text)
        .map(|m| Stamp::parse(m.as_str()))
        .collect::<Result<Vec<_>>>()?;
    debug!("found {} stamps", stamps.len());

    if stamps.len() % 2 != 0 {
        return Err(FortnightError::OddStampCount(stamps.len()));
    }

    let mut shifts = Vec::with_capacity(stamps.len() / 2);
    let mut iter = stamps.into_iter();
    while let (Some(clock_in), Some(clock_out)) = (iter.next(), iter.next()) {
        shifts.push(Shift {
            clock_in,
            clock_out,
        });
    }
    Ok(shifts)
}

/// One line per shift, a blank line, then the summed total.
pub fn summarize(text: &str) -> Result<Vec<String>> {
    let shifts = parse_shifts(text)?;
    let mut lines = shifts
        .iter()
        .map(Shift::format_line)
        .collect::<Result<Vec<_>>>()?;
    let total = shifts.iter().try_fold(0i64, |sum, shift| {
        sum.checked_add(shift.minutes()?)
            .ok_or_else(|| FortnightError::InvalidStamp(format!("total past {}", sum)))
    })?;
    lines.push(String::new());
    lines.push(format!("{} total", format_duration(total)));
    Ok(lines)
}
