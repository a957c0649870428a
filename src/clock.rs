use chrono::{Datelike, Local};

/// Injected current-date capability. Expiry comparisons read the
/// calendar through this seam so tests can pin the date.
pub trait Clock {
    /// Current `(year, month)` pair, month in `1..=12`.
    fn year_month(&self) -> (i32, u32);
}

/// Production clock backed by local system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn year_month(&self) -> (i32, u32) {
        let now = Local::now();
        (now.year(), now.month())
    }
}
