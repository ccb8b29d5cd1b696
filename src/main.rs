//! Fortnight CLI application.
//!
//! # Usage
//! ```ignore
//! fortnight                     // Date stamp and calendar transcript
//! fortnight cal -d 2024-03-01   // Months around a date
//! fortnight weekends            // Weekday/weekend table, 2058 down to 1939
//! fortnight shifts sheet.txt    // Sum clock stamps
//! ```

use fortnight::args::{Args, Command, get_now, get_reference, read_shift_input};
use fortnight::clock::date_transcript;
use fortnight::error::Result;
use fortnight::formatter::{render, render_transcript, to_html_lines};
use fortnight::shifts::summarize;
use fortnight::types::RenderOptions;
use fortnight::weekends::tally_range;

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::debug!("{:?}", args);

    if let Err(e) = run(&args) {
        eprintln!("fortnight: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let opts = RenderOptions::new(args);

    let lines = match &args.command {
        Some(Command::Cal { date, transcript }) => {
            let reference = get_reference(date.as_deref())?;
            if *transcript {
                render_transcript(&reference, &opts)?
            } else {
                render(&reference, &opts)?
            }
        }
        Some(Command::Date) => date_transcript(&get_now())?,
        Some(Command::Weekends { from, to }) => tally_range(*from, *to)?
            .iter()
            .map(|tally| tally.format_row(opts.markup))
            .collect(),
        Some(Command::Shifts { file, sample }) => {
            summarize(&read_shift_input(file.as_ref(), *sample)?)?
        }
        None => {
            let now = get_now();
            let mut lines = date_transcript(&now)?;
            lines.push(String::new());
            lines.extend(render_transcript(&now, &opts)?);
            lines
        }
    };

    let lines = if args.html {
        to_html_lines(&lines)
    } else {
        lines
    };
    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
