//! Operational-hours gate
//!
//! Login and active sessions are only permitted inside a configured window
//! of the day, evaluated against a fixed reference offset so that the
//! viewer's local clock is irrelevant.

use chrono::{DateTime, FixedOffset, Timelike, Utc};

/// Seconds between gate re-evaluations on the login and session surfaces.
pub const CHECK_INTERVAL_SECS: u64 = 60;

const REFERENCE_OFFSET_HOURS: i32 = 7; // western Indonesia time

/// The daily window during which login and active use are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationalWindow {
    /// First permitted hour, inclusive.
    pub open_hour: u32,
    /// Closing hour, exclusive.
    pub close_hour: u32,
    /// Fixed reference offset from UTC.
    pub utc_offset: FixedOffset,
}

impl Default for OperationalWindow {
    fn default() -> Self {
        Self {
            open_hour: 6,
            close_hour: 18,
            utc_offset: FixedOffset::east_opt(REFERENCE_OFFSET_HOURS * 3600)
                .expect("offset in range"),
        }
    }
}

impl OperationalWindow {
    /// True iff `open_hour:00 <= reference local time < close_hour:00`.
    #[must_use]
    pub fn is_within(&self, now_utc: DateTime<Utc>) -> bool {
        let hour = now_utc.with_timezone(&self.utc_offset).hour();
        hour >= self.open_hour && hour < self.close_hour
    }

    /// True once the window has been exited for the day.
    #[must_use]
    pub fn has_closed(&self, now_utc: DateTime<Utc>) -> bool {
        now_utc.with_timezone(&self.utc_offset).hour() >= self.close_hour
    }

    /// The current reference time, formatted for lockout messaging.
    #[must_use]
    pub fn reference_time(&self, now_utc: DateTime<Utc>) -> String {
        now_utc.with_timezone(&self.utc_offset).format("%H:%M").to_string()
    }

    /// Explanatory message shown while login is locked out.
    #[must_use]
    pub fn lockout_message(&self, now_utc: DateTime<Utc>) -> String {
        format!(
            "The application is available from {:02}:00 to {:02}:00 (reference time). It is now {}.",
            self.open_hour,
            self.close_hour,
            self.reference_time(now_utc)
        )
    }
}
