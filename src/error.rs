use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidNumber { field: &'static str, value: f64 },
    #[error("time of day window {start}..{end} is invalid (hours must be 0..=24 with start <= end)")]
    InvalidTimeWindow { start: u8, end: u8 },
    #[error("latitude {0} is outside -90..=90")]
    InvalidLatitude(f64),
    #[error("longitude {0} is outside -180..=180")]
    InvalidLongitude(f64),
    #[error("record does not match the {expected} subsystem shape: {detail}")]
    ShapeMismatch { expected: &'static str, detail: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid settings: {0}")]
    Validation(#[from] SettingsError),
    #[error("backend rejected settings: HTTP {0}")]
    Rejected(StatusCode),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("a submission is already in flight")]
    InFlight,
    #[error("unknown subsystem: {0}")]
    UnknownSubsystem(String),
    #[error("unknown chart range: {0}")]
    UnknownChartRange(String),
    #[error("web server error: {0}")]
    Server(#[from] std::io::Error),
}
