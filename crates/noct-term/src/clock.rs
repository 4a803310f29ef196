//! Platform time service.
//!
//! `date` and `uptime` consume the clock through the command context instead
//! of reading it ambiently, so tests can pin time.

/// A UTC wall-clock timestamp broken into calendar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl std::fmt::Display for WallTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )
    }
}

/// Abstraction over platform time services.
pub trait TimeService {
    /// Current wall-clock time.
    fn now(&self) -> WallTime;

    /// Seconds since the session started.
    fn uptime_secs(&self) -> u64;
}

/// Default clock for desktop using `std` facilities.
pub struct DesktopClock {
    start_time: std::time::Instant,
}

impl DesktopClock {
    pub fn new() -> Self {
        Self {
            start_time: std::time::Instant::now(),
        }
    }
}

impl Default for DesktopClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeService for DesktopClock {
    fn now(&self) -> WallTime {
        use std::time::SystemTime;
        let dur = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default();
        wall_time_from_unix(dur.as_secs())
    }

    fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// Break a unix timestamp into UTC calendar fields (no TZ handling).
pub fn wall_time_from_unix(secs: u64) -> WallTime {
    let days = secs / 86400;
    let time_of_day = secs % 86400;
    let hour = (time_of_day / 3600) as u8;
    let minute = ((time_of_day % 3600) / 60) as u8;
    let second = (time_of_day % 60) as u8;
    let (year, month, day) = days_to_ymd(days);
    WallTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
    }
}

/// Days since 1970-01-01 to Y-M-D (civil calendar).
fn days_to_ymd(days: u64) -> (u16, u8, u8) {
    // Shift epoch from 1970-01-01 to 0000-03-01 so leap days land at the
    // end of the cycle.
    let z = days as i64 + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u8;
    let year = if m <= 2 { y + 1 } else { y } as u16;
    (year, m, d)
}

/// Fixed clock for tests.
#[derive(Debug, Clone, Copy)]
pub struct MockClock {
    pub unix_secs: u64,
    pub uptime: u64,
}

impl TimeService for MockClock {
    fn now(&self) -> WallTime {
        wall_time_from_unix(self.unix_secs)
    }

    fn uptime_secs(&self) -> u64 {
        self.uptime
    }
}
