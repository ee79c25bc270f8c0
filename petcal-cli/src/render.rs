//! Terminal rendering for month grids.
//!
//! Each week is drawn as two lines: day numbers, then marker dots. Padding
//! happens on plain text before colors are applied so ANSI codes never
//! throw off column widths.

use chrono::Datelike;
use owo_colors::OwoColorize;
use petcal_core::{CalendarCell, WeekdayHeader};
use unicode_width::UnicodeWidthStr;

const MARKER_DOT: &str = "•";

/// Narrowest column; wide enough for "••+9".
const MIN_COLUMN_WIDTH: usize = 5;

/// Column width that fits every header label with one space of separation.
fn column_width(header: &WeekdayHeader) -> usize {
    header
        .iter()
        .map(|label| label.width() + 1)
        .max()
        .unwrap_or(0)
        .max(MIN_COLUMN_WIDTH)
}

fn pad_left(visible_width: usize, width: usize) -> String {
    " ".repeat(width.saturating_sub(visible_width))
}

pub fn render_header(header: &WeekdayHeader) -> String {
    let width = column_width(header);
    header
        .iter()
        .map(|label| {
            let padding = pad_left(label.width(), width);
            format!("{}{}", padding, label.bold())
        })
        .collect()
}

pub fn render_month(
    title: &str,
    header: &WeekdayHeader,
    weeks: &[Vec<CalendarCell>],
    max_markers: usize,
) -> String {
    let width = column_width(header);
    let total_width = width * 7;

    let mut lines = Vec::new();
    lines.push(format!("{}{}", pad_left(title.width(), total_width), title.bold()));
    lines.push(render_header(header));

    for week in weeks {
        lines.push(week.iter().map(|cell| render_day(cell, width)).collect());
        lines.push(
            week.iter()
                .map(|cell| render_markers(&cell.markers, max_markers, width))
                .collect(),
        );
    }

    lines.join("\n")
}

fn render_day(cell: &CalendarCell, width: usize) -> String {
    let day = cell.date.day().to_string();
    let padding = pad_left(day.len(), width);

    let styled = if !cell.in_current_month {
        day.dimmed().to_string()
    } else if cell.is_selected {
        day.reversed().to_string()
    } else if cell.is_today {
        day.bold().underline().to_string()
    } else {
        day
    };

    format!("{}{}", padding, styled)
}

/// Which markers fit, and how many are left over.
fn marker_summary(markers: &[String], max_markers: usize) -> (&[String], usize) {
    let shown = markers.len().min(max_markers);
    (&markers[..shown], markers.len() - shown)
}

fn render_markers(markers: &[String], max_markers: usize, width: usize) -> String {
    let (shown, overflow) = marker_summary(markers, max_markers);
    let overflow_label = if overflow > 0 {
        format!("+{}", overflow)
    } else {
        String::new()
    };

    let visible = shown.len() * MARKER_DOT.width() + overflow_label.len();
    let mut out = pad_left(visible, width);

    for color in shown {
        match parse_hex_color(color) {
            Some((r, g, b)) => out.push_str(&MARKER_DOT.truecolor(r, g, b).to_string()),
            None => out.push_str(MARKER_DOT),
        }
    }
    if overflow > 0 {
        out.push_str(&overflow_label.dimmed().to_string());
    }

    out
}

/// Parse `#RRGGBB` or `#RGB`.
fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        6 => Some((
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        )),
        3 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some((channel(0)?, channel(1)?, channel(2)?))
        }
        _ => None,
    }
}
