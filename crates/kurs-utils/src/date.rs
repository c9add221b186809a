use chrono::NaiveDateTime;

const CLOCK_FORMAT: &str = "%H:%M";

/// Zero-padded 24 hour `HH:MM` of a stored timestamp. Seconds and the date are dropped.
#[must_use]
pub fn clock_time(time: NaiveDateTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}
