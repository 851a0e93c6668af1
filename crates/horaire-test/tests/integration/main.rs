//! Integration tests across the source, builder and export layers.

mod end_to_end;
mod helpers;
mod timezones;
