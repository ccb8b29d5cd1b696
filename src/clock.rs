//! Reference instant capture and `date -Iseconds` style formatting.

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, Timelike};
use log::debug;

use crate::error::{FortnightError, Result};
use crate::types::{MAX_OFFSET_MINUTES, PROMPT, ReferenceInstant};

impl ReferenceInstant {
    pub fn from_datetime(dt: DateTime<FixedOffset>) -> Self {
        ReferenceInstant {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            utc_offset_minutes: dt.offset().local_minus_utc() / 60,
        }
    }

    /// Read the host wall clock.
    pub fn now() -> Self {
        Self::from_datetime(Local::now().fixed_offset())
    }

    /// Midnight of `date` at UTC, for callers that only care about the day.
    pub fn from_date(date: NaiveDate) -> Self {
        ReferenceInstant {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            hour: 0,
            minute: 0,
            second: 0,
            utc_offset_minutes: 0,
        }
    }

    /// Calendar date of the instant.
    pub fn date(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(|| {
            FortnightError::InvalidDate(format!("{}-{:02}-{:02}", self.year, self.month, self.day))
        })
    }
}

/// Format as `YYYY-MM-DDThh:mm:ss±hh:mm`.
pub fn format_iso8601(instant: &ReferenceInstant) -> Result<String> {
    let offset = instant.utc_offset_minutes;
    let magnitude = offset.abs();
    if magnitude > MAX_OFFSET_MINUTES {
        return Err(FortnightError::InvariantViolation {
            what: "utc offset minutes",
            value: offset as i64,
        });
    }
    let sign = if offset < 0 { '-' } else { '+' };

    Ok(format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}{:02}:{:02}",
        instant.year,
        instant.month,
        instant.day,
        instant.hour,
        instant.minute,
        instant.second,
        sign,
        magnitude / 60,
        magnitude % 60
    ))
}

/// The stamp framed as a shell transcript of `date -Iseconds`.
pub fn date_transcript(instant: &ReferenceInstant) -> Result<Vec<String>> {
    let stamp = format_iso8601(instant)?;
    debug!("date stamp {}", stamp);
    Ok(vec![
        format!("{} date -Iseconds", PROMPT),
        stamp,
        PROMPT.to_string(),
    ])
}
