//! Timetable export pipeline: source → records → document → file.

use std::fs;
use std::path::{Path, PathBuf};

use horaire_core::config::Settings;
use horaire_rfc::rfc::ical::build::{CalendarOptions, Clock, DocumentBuilder, SystemClock};

use crate::error::{AppError, AppResult};
use crate::source::{EventSource, normalize};

/// A rendered calendar and the number of events it holds.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub ics: String,
    pub events: usize,
}

/// Outcome of [`export`]. `path` is `None` when nothing was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub events: usize,
    pub path: Option<PathBuf>,
}

/// ## Summary
/// Reads rows from `source` and renders the calendar described by `settings`,
/// stamping events with `clock`.
///
/// ## Errors
/// Returns an error if the settings are invalid, the source fails, or the
/// configured timezone has no definition.
pub fn render_with<S, C>(settings: &Settings, source: &S, clock: C) -> AppResult<Rendered>
where
    S: EventSource + ?Sized,
    C: Clock,
{
    settings.validate()?;

    let options = CalendarOptions::from_config(&settings.calendar)?;
    let builder = DocumentBuilder::new(options)?.with_clock(clock);

    let rows = source.rows()?;
    let records = normalize(&rows, settings.range.as_ref());

    Ok(Rendered {
        ics: builder.render(&records),
        events: records.len(),
    })
}

/// ## Summary
/// Renders the calendar with the system clock.
///
/// ## Errors
/// See [`render_with`].
pub fn render<S: EventSource + ?Sized>(settings: &Settings, source: &S) -> AppResult<Rendered> {
    render_with(settings, source, SystemClock)
}

/// ## Summary
/// Renders the calendar and writes it to the configured output path. When no
/// event survives normalization nothing is written.
///
/// ## Errors
/// Returns an error if rendering fails or the file cannot be written.
pub fn export<S: EventSource + ?Sized>(settings: &Settings, source: &S) -> AppResult<ExportSummary> {
    let rendered = render(settings, source)?;

    if rendered.events == 0 {
        tracing::warn!(range = ?settings.range, "No events found for the period; nothing written");
        return Ok(ExportSummary {
            events: 0,
            path: None,
        });
    }

    let path = settings.output_path();
    write_calendar(&path, &rendered.ics)?;

    tracing::info!(events = rendered.events, path = %path.display(), "Calendar exported");
    Ok(ExportSummary {
        events: rendered.events,
        path: Some(path),
    })
}

/// ## Summary
/// Writes calendar text as UTF-8 bytes, creating missing parent directories.
///
/// ## Errors
/// Returns [`AppError::Io`] if a directory or the file cannot be written.
pub fn write_calendar(path: &Path, ics: &str) -> AppResult<()> {
    let io_error = |source| AppError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, ics.as_bytes()).map_err(io_error)
}
