//! Shared configuration, errors and constants for the horaire workspace.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
