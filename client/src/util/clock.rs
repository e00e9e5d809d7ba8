//! Wall-clock helpers for rendered text.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current calendar year (UTC), used in the footer copyright line.
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}
