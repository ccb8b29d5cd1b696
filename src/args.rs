//! Command-line argument parsing using clap.

use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use chrono::{DateTime, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use log::debug;

use crate::error::{FortnightError, Result};
use crate::formatter::get_system_locale;
use crate::shifts::{SAMPLE_A, SAMPLE_B};
use crate::types::{FIRST_TALLY_YEAR, LAST_TALLY_YEAR, Markup, ReferenceInstant, RenderOptions};

/// Environment variable pinning "now" to an RFC 3339 instant.
pub const TEST_TIME_VAR: &str = "FORTNIGHT_TEST_TIME";

#[derive(Parser, Debug)]
#[command(name = "fortnight")]
#[command(about = "Shows the calendar fortnight around a date, and other date sums", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Emit HTML: `<strong>` emphasis and `<br>` line ends.
    #[arg(long, global = true, help_heading = "Output options")]
    pub html: bool,

    /// Disable colorized output.
    #[arg(long, global = true, help_heading = "Output options")]
    pub color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Months touched by the fourteen days either side of a date.
    Cal {
        /// Reference date (YYYY-MM-DD), today by default.
        #[arg(short = 'd', long, value_name = "date")]
        date: Option<String>,

        /// Echo the equivalent cal/ncal command before each month.
        #[arg(short = 't', long)]
        transcript: bool,
    },
    /// Current time as `date -Iseconds` prints it.
    Date,
    /// Weekdays against weekend days, per year.
    Weekends {
        /// Oldest year in the table.
        #[arg(long, default_value_t = FIRST_TALLY_YEAR, value_name = "year")]
        from: i32,

        /// Newest year in the table.
        #[arg(long, default_value_t = LAST_TALLY_YEAR, value_name = "year")]
        to: i32,
    },
    /// Sum `hour.minute..hour.minute` clock stamps.
    Shifts {
        /// File of stamps; stdin when absent.
        #[arg(value_name = "file")]
        file: Option<PathBuf>,

        /// Use a built-in timesheet instead of reading input.
        #[arg(long, value_enum, conflicts_with = "file")]
        sample: Option<Sample>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum Sample {
    A,
    B,
}

impl Sample {
    pub fn text(self) -> &'static str {
        match self {
            Sample::A => SAMPLE_A,
            Sample::B => SAMPLE_B,
        }
    }
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Without a command, print the date and the calendar transcript.

Examples:
  fortnight                       Date stamp, then the fortnight calendar
  fortnight cal -d 2024-03-01     Months around March 1st 2024
  fortnight cal --html            Calendar as HTML lines
  fortnight weekends --from 2020  Weekday/weekend table from 2020 on
  fortnight shifts sheet.txt      Sum the stamps in sheet.txt
  fortnight shifts --sample a     Sum the built-in sheet";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl RenderOptions {
    pub fn new(args: &Args) -> Self {
        let markup = if args.html {
            Markup::Html
        } else if !args.color && std::io::stdout().is_terminal() {
            Markup::Ansi
        } else {
            Markup::Plain
        };
        RenderOptions {
            markup,
            locale: get_system_locale(),
        }
    }
}

/// Current instant, respecting FORTNIGHT_TEST_TIME for testing.
pub fn get_now() -> ReferenceInstant {
    if let Ok(test_time) = std::env::var(TEST_TIME_VAR)
        && let Ok(dt) = DateTime::parse_from_rfc3339(&test_time)
    {
        debug!("clock pinned to {}", dt);
        return ReferenceInstant::from_datetime(dt);
    }
    ReferenceInstant::now()
}

/// Reference instant for `cal`: the `--date` argument or now.
pub fn get_reference(date_arg: Option<&str>) -> Result<ReferenceInstant> {
    match date_arg {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(ReferenceInstant::from_date)
            .map_err(|_| FortnightError::InvalidDate(s.to_string())),
        None => Ok(get_now()),
    }
}

/// Stamp text from a sample, a file, or stdin.
pub fn read_shift_input(file: Option<&PathBuf>, sample: Option<Sample>) -> Result<String> {
    if let Some(sample) = sample {
        return Ok(sample.text().to_string());
    }
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
