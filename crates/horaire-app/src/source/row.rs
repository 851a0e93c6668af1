//! Normalization of timetable rows into event records.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use horaire_core::constants::FALLBACK_SUMMARY;
use horaire_core::types::DateRange;
use horaire_rfc::rfc::ical::core::EventRecord;

use super::TimetableRow;

const NBSP: char = '\u{a0}';
const NBSP_ENTITY: &str = "&nbsp;";

/// Parses a `HH:MM - HH:MM` time cell. Whitespace around each part is ignored.
#[must_use]
pub fn parse_time_range(text: &str) -> Option<(NaiveTime, NaiveTime)> {
    let (start, end) = text.split_once('-')?;
    Some((parse_clock(start.trim())?, parse_clock(end.trim())?))
}

fn parse_clock(text: &str) -> Option<NaiveTime> {
    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
    if !well_formed {
        return None;
    }
    NaiveTime::parse_from_str(text, "%H:%M").ok()
}

/// Decodes HTML character references in cell text: the named entities
/// timetable pages use (`&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;`, `&nbsp;`)
/// and numeric ones (`&#233;`, `&#xE9;`). Anything else is kept verbatim.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        result.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some((c, len)) = decode_entity(tail) {
            result.push(c);
            rest = &tail[len..];
        } else {
            result.push('&');
            rest = &tail[1..];
        }
    }
    result.push_str(rest);
    result
}

/// Decodes the reference at the start of `tail`, returning the character and
/// the number of octets consumed.
fn decode_entity(tail: &str) -> Option<(char, usize)> {
    let end = tail.find(';')?;
    let c = match &tail[1..end] {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => NBSP,
        name => {
            let number = name.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) if !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
                    u32::from_str_radix(hex, 16).ok()?
                }
                None if !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()) => {
                    number.parse().ok()?
                }
                _ => return None,
            };
            char::from_u32(code)?
        }
    };
    Some((c, end + 1))
}

/// Decodes entities, then strips the non-breaking-space padding timetable
/// pages put in front of titles.
#[must_use]
pub fn clean_title(raw: &str) -> String {
    let decoded = decode_entities(raw);
    let title = decoded.trim_start_matches(NBSP).trim();
    if title.starts_with(NBSP_ENTITY) {
        title.replace(NBSP_ENTITY, "").trim().to_string()
    } else {
        title.to_string()
    }
}

/// Converts a row into an event record, or `None` if its time cell is not a range.
///
/// The summary falls back to the department code, then to a generic label.
#[must_use]
pub fn to_record(row: &TimetableRow) -> Option<EventRecord> {
    let Some((start, end)) = parse_time_range(&row.time) else {
        tracing::debug!(date = %row.date, time = %row.time, "Skipping row without a time range");
        return None;
    };

    let department = row.department.trim();
    let title = clean_title(&row.title);
    let summary = if !title.is_empty() {
        title
    } else if !department.is_empty() {
        department.to_string()
    } else {
        FALLBACK_SUMMARY.to_string()
    };

    Some(EventRecord::new(
        row.date.and_time(start),
        row.date.and_time(end),
        row.location.trim(),
        summary,
        department,
    ))
}

/// Turns rows into event records.
///
/// With a range, only rows dated inside it are kept and they are ordered day by
/// day; rows of the same day keep their relative order. Without a range, input
/// order is kept.
#[must_use]
pub fn normalize(rows: &[TimetableRow], range: Option<&DateRange>) -> Vec<EventRecord> {
    let Some(range) = range else {
        return rows.iter().filter_map(to_record).collect();
    };

    let mut by_day: BTreeMap<NaiveDate, Vec<&TimetableRow>> = BTreeMap::new();
    for row in rows.iter().filter(|row| range.contains(row.date)) {
        by_day.entry(row.date).or_default().push(row);
    }

    let records: Vec<EventRecord> = range
        .days()
        .filter_map(|day| by_day.get(&day))
        .flatten()
        .filter_map(|row| to_record(row))
        .collect();

    tracing::debug!(
        rows = rows.len(),
        records = records.len(),
        days = range.len_days(),
        "Rows normalized"
    );
    records
}
