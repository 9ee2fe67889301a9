//! Log line format module
//!
//! Every line carries a local timestamp in the classic
//! `YYYY/MM/DD HH:MM:SS` layout followed by the message.

use chrono::{DateTime, Local};

const TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Prefix `message` with the current local time
pub fn stamp(message: &str) -> String {
    stamp_at(&Local::now(), message)
}

/// Prefix `message` with the given time
pub fn stamp_at(time: &DateTime<Local>, message: &str) -> String {
    format!("{} {message}", time.format(TIME_FORMAT))
}
