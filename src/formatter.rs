//! Calendar text formatting with localized month names and markup support.

use chrono::{Locale, NaiveDate};
use unicode_width::UnicodeWidthStr;

use crate::calendar::month_grids;
use crate::error::{FortnightError, Result};
use crate::types::{
    COLOR_RESET, COLOR_REVERSE, Cell, Markup, MonthGrid, NBSP, PROMPT, ReferenceInstant,
    RenderOptions, WEEKDAY_HEADER,
};

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
pub fn get_system_locale() -> Locale {
    std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_TIME"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_else(|_| "en_US.UTF-8".to_string())
        .split('.')
        .next()
        .unwrap_or("en_US")
        .split('@')
        .next()
        .unwrap_or("en_US")
        .parse()
        .unwrap_or(Locale::en_US)
}

/// Month name in nominative case.
///
/// chrono's `%B` gives the genitive form for Slavic locales, so those are
/// listed here directly.
pub fn month_name(month: u32, locale: Locale) -> Result<String> {
    const RU: [&str; 12] = [
        "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август", "Сентябрь",
        "Октябрь", "Ноябрь", "Декабрь",
    ];
    const UK: [&str; 12] = [
        "Січень", "Лютий", "Березень", "Квітень", "Травень", "Червень", "Липень", "Серпень",
        "Вересень", "Жовтень", "Листопад", "Грудень",
    ];

    let date = NaiveDate::from_ymd_opt(2000, month, 1)
        .ok_or_else(|| FortnightError::InvalidDate(format!("month {}", month)))?;
    let idx = (month - 1) as usize;
    Ok(match locale {
        Locale::ru_RU => RU[idx].to_string(),
        Locale::uk_UA => UK[idx].to_string(),
        _ => date.format_localized("%B", locale).to_string(),
    })
}

/// Left-pad `text` with no-break spaces so it sits near the middle of `width`.
///
/// Only the left side is padded and odd remainders round down.
pub fn dent_to_center(text: &str, width: usize) -> String {
    let text_width = text.width();
    if width < text_width {
        return text.to_string();
    }
    let dent = (width - text_width) / 2;
    let mut dented: String = std::iter::repeat_n(NBSP, dent).collect();
    dented.push_str(text);
    dented
}

/// Wrap `text` in the emphasis of `markup`.
pub fn emphasize(text: &str, markup: Markup) -> String {
    match markup {
        Markup::Plain => text.to_string(),
        Markup::Ansi => format!("{}{}{}", COLOR_REVERSE, text, COLOR_RESET),
        Markup::Html => format!("<strong>{}</strong>", text),
    }
}

fn format_cell(cell: Cell, markup: Markup) -> String {
    match cell {
        Cell::Blank => format!("{NBSP}{NBSP}"),
        Cell::Day { day, today } => {
            let dd = if day < 10 {
                format!("{NBSP}{day}")
            } else {
                day.to_string()
            };
            if today { emphasize(&dd, markup) } else { dd }
        }
    }
}

/// `"{Month} {year}"` dented over the weekday header.
///
/// The dent is measured with a trailing space after the year, which is then
/// dropped, so even-width titles sit one column left of true centre.
pub fn month_title(grid: &MonthGrid, locale: Locale) -> Result<String> {
    let title = format!("{} {} ", month_name(grid.month, locale)?, grid.year);
    let dented = dent_to_center(&title, WEEKDAY_HEADER.len());
    Ok(dented.trim_end_matches(' ').to_string())
}

/// Month title, weekday header and one line per week.
pub fn format_month_grid(grid: &MonthGrid, opts: &RenderOptions) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(grid.weeks.len() + 2);

    lines.push(month_title(grid, opts.locale)?);
    lines.push(WEEKDAY_HEADER.to_string());

    for week in &grid.weeks {
        let cells: Vec<String> = week.iter().map(|&c| format_cell(c, opts.markup)).collect();
        lines.push(cells.join(" "));
    }

    Ok(lines)
}

/// Render the one or two months around `reference`, a blank line between them.
///
/// The today cell is marked only when `opts.markup` is not `Plain`; the
/// grids always carry the flag.
pub fn render(reference: &ReferenceInstant, opts: &RenderOptions) -> Result<Vec<String>> {
    let grids = month_grids(reference.date()?)?;
    let mut lines = Vec::new();
    for (i, grid) in grids.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(format_month_grid(grid, opts)?);
    }
    Ok(lines)
}

/// Echoed `cal`/`ncal` command lines that would print `grid`.
fn shell_lines(grid: &MonthGrid, reference: &ReferenceInstant) -> Vec<String> {
    let (m, y) = (grid.month, grid.year);
    if (y, m) == (reference.year, reference.month) {
        let date = format!("{:04}-{:02}-{:02}", reference.year, reference.month, reference.day);
        vec![
            format!("{} cal -H {} -m {} {}", PROMPT, date, m, y),
            format!("{} ncal -b -H {} -m {} {}", PROMPT, date, m, y),
        ]
    } else {
        vec![
            format!("{} cal -h -m {} {}", PROMPT, m, y),
            format!("{} ncal -b -h -m {} {}", PROMPT, m, y),
        ]
    }
}

/// [`render`] framed as a shell transcript, with the closing footer.
pub fn render_transcript(
    reference: &ReferenceInstant,
    opts: &RenderOptions,
) -> Result<Vec<String>> {
    let grids = month_grids(reference.date()?)?;
    let mut lines = Vec::new();
    for (i, grid) in grids.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(shell_lines(grid, reference));
        lines.push(String::new());
        lines.extend(format_month_grid(grid, opts)?);
    }
    lines.push(String::new());
    lines.push(PROMPT.to_string());
    Ok(lines)
}

/// Terminate each line with `<br>` for an HTML page.
pub fn to_html_lines(lines: &[String]) -> Vec<String> {
    lines.iter().map(|line| format!("{}<br>", line)).collect()
}
