//! Horaire timetable export - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use a
//! single `horaire_test::` path for every layer.

pub mod component {
    pub use horaire_core::*;

    pub mod ical {
        pub use horaire_rfc::rfc::ical::*;
    }

    pub mod app {
        pub use horaire_app::error::{AppError, AppResult};
        pub use horaire_app::export::{ExportSummary, Rendered, export, render, render_with};
        pub use horaire_app::source::*;
    }
}
