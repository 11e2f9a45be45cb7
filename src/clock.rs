//! Wall-clock readings in 12-hour form.

use chrono::{Local, Timelike};

/// A 12-hour time of day, as shown on the clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    /// 1..=12
    pub hour12: u8,
    pub minute: u8,
    pub second: u8,
}

impl ClockReading {
    /// Convert any time of day to its 12-hour reading (00:xx → 12:xx).
    pub fn from_time(time: &impl Timelike) -> Self {
        let (_, hour12) = time.hour12();
        ClockReading {
            hour12: hour12 as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
        }
    }

    /// Digits in display order: `[H, H, M, M, S, S]`, each field zero-padded.
    pub fn digits(&self) -> [u8; 6] {
        [
            self.hour12 / 10,
            self.hour12 % 10,
            self.minute / 10,
            self.minute % 10,
            self.second / 10,
            self.second % 10,
        ]
    }
}

pub trait WallClock {
    fn now(&self) -> ClockReading;
}

/// Local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> ClockReading {
        ClockReading::from_time(&Local::now())
    }
}

/// A clock frozen at one reading.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub ClockReading);

impl FixedClock {
    /// Freeze at a 24-hour time. Returns `None` for an invalid time.
    pub fn at(hour: u32, minute: u32, second: u32) -> Option<Self> {
        let time = chrono::NaiveTime::from_hms_opt(hour, minute, second)?;
        Some(FixedClock(ClockReading::from_time(&time)))
    }
}

impl WallClock for FixedClock {
    fn now(&self) -> ClockReading {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn afternoon_is_shown_in_twelve_hour_form() {
        let clock = FixedClock::at(14, 5, 9).unwrap();
        assert_eq!(clock.now().digits(), [0, 2, 0, 5, 0, 9]);
    }

    #[test]
    fn midnight_and_noon_read_twelve() {
        assert_eq!(FixedClock::at(0, 30, 0).unwrap().now().digits(), [1, 2, 3, 0, 0, 0]);
        assert_eq!(FixedClock::at(12, 0, 1).unwrap().now().digits(), [1, 2, 0, 0, 0, 1]);
    }

    #[test]
    fn morning_fields_are_zero_padded() {
        let clock = FixedClock::at(9, 3, 7).unwrap();
        assert_eq!(
            clock.now(),
            ClockReading { hour12: 9, minute: 3, second: 7 }
        );
        assert_eq!(clock.now().digits(), [0, 9, 0, 3, 0, 7]);
    }

    #[test]
    fn invalid_time_is_rejected() {
        assert!(FixedClock::at(24, 0, 0).is_none());
        assert!(FixedClock::at(10, 60, 0).is_none());
    }

    #[test]
    fn system_clock_is_in_range() {
        let r = SystemClock.now();
        assert!((1..=12).contains(&r.hour12));
        assert!(r.minute < 60);
        // Leap seconds surface as second 59 in chrono.
        assert!(r.second < 60);
    }
}
