/// Application identity shared across crates
pub const APP_NAME: &str = "Horaire";
pub const DEFAULT_PRODID: &str = const_str::concat!("-//", APP_NAME, "//Timetable Export//FR");

/// Calendar defaults
pub const DEFAULT_CALENDAR_NAME: &str = "Timetable";
pub const DEFAULT_TZID: &str = "Europe/Paris";

/// Summary used when a timetable row carries neither a title nor a department.
pub const FALLBACK_SUMMARY: &str = "Cours";

/// Configuration sources
pub const ENV_PREFIX: &str = "HORAIRE";
pub const CONFIG_FILE: &str = "horaire.toml";
pub const DEFAULT_INPUT_PATH: &str = "timetable.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";
