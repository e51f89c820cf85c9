use std::{
    fmt::Display,
    ops::{Add, Sub},
};

use chrono::{NaiveTime, Timelike};

/// Wall clock time of day, stored as seconds since midnight.
/// There is no date and no timezone. Adding a duration may go past
/// 24:00, which is kept as is since a day never rolls over. Arithmetic
/// saturates instead of overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(u32);

impl From<u32> for Time {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<NaiveTime> for Time {
    fn from(value: NaiveTime) -> Self {
        Self(value.num_seconds_from_midnight())
    }
}

impl Sub<Time> for Time {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Self::Output {
        Duration(self.0.saturating_sub(rhs.0))
    }
}

impl Add<Duration> for Time {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hm_string())
    }
}

impl Time {
    pub const fn from_seconds(secs: u32) -> Self {
        Self(secs)
    }

    pub const fn from_hm(hours: u32, minutes: u32) -> Self {
        Self(hours * 3600 + minutes * 60)
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    pub fn to_hm_string(&self) -> String {
        let h = self.0 / 3600;
        let m = (self.0 % 3600) / 60;
        format!("{:02}:{:02}", h, m)
    }

    pub fn to_hms_string(&self) -> String {
        let h = self.0 / 3600;
        let m = (self.0 % 3600) / 60;
        let s = self.0 % 60;
        format!("{:02}:{:02}:{:02}", h, m, s)
    }

    /// Parses `HH:MM` or `HH:MM:SS`.
    pub fn parse(time: &str) -> Option<Self> {
        let time = time.trim();
        NaiveTime::parse_from_str(time, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
            .ok()
            .map(Self::from)
    }

    /// Signed distance from `self` to `later`, negative when `later` comes first.
    pub fn seconds_until(&self, later: Time) -> i64 {
        i64::from(later.0) - i64::from(self.0)
    }
}

#[test]
fn parse_unparse_1() {
    let time = "00:00";
    let stime = Time::parse(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn parse_unparse_2() {
    let time = "09:30";
    let stime = Time::parse(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn parse_unparse_3() {
    let time = "23:59";
    let stime = Time::parse(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn parse_keeps_seconds() {
    let stime = Time::parse("12:30:45").unwrap();
    assert_eq!("12:30:45", stime.to_hms_string())
}

#[test]
fn end_of_day_does_not_wrap() {
    let end = Time::from_hm(23, 30) + Duration::from_hours(1);
    assert_eq!("24:30", end.to_hm_string())
}

#[test]
fn add_saturates() {
    let end = Time::from_hm(9, 0) + Duration::from_seconds(u32::MAX - 10);
    assert_eq!(end.as_seconds(), u32::MAX);
    assert_eq!(Time::from_hm(9, 0) - end, Duration::ZERO);
}

/// Non-negative span of time in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(u32);

impl From<u32> for Duration {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Duration {
    pub const ZERO: Duration = Duration(0);

    pub const fn from_seconds(secs: u32) -> Self {
        Self(secs)
    }

    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes * 60)
    }

    pub const fn from_hours(hours: u32) -> Self {
        Self(hours * 60 * 60)
    }

    /// Rounds up to a whole second so a drive is never shorter than reported.
    /// Negative and NaN inputs clamp to zero.
    pub fn from_seconds_f64(secs: f64) -> Self {
        if secs.is_nan() || secs <= 0.0 {
            return Self::ZERO;
        }
        Self(secs.ceil().min(u32::MAX as f64) as u32)
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    /// Whole minutes, rounded to the nearest.
    pub const fn as_minutes(&self) -> u32 {
        self.0.saturating_add(30) / 60
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        if hours > 0 {
            write!(f, "{hours} hr {minutes} min")
        } else {
            write!(f, "{minutes} min")
        }
    }
}
