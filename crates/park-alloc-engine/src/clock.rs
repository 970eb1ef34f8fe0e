// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use chrono::{DateTime, Utc};

/// Source of ticket entry timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    at: DateTime<Utc>,
}

impl FixedClock {
    #[inline]
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }

    #[inline]
    pub fn set(&mut self, at: DateTime<Utc>) {
        self.at = at;
    }
}

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn stamp<C: Clock>(clock: C) -> DateTime<Utc> {
        clock.now()
    }

    #[test]
    fn test_fixed_clock_reports_the_set_instant() {
        let start = Utc.with_ymd_and_hms(2025, 6, 1, 7, 0, 0).unwrap();
        let mut c = FixedClock::new(start);
        assert_eq!(c.now(), start);
        c.set(start + Duration::hours(2));
        assert_eq!(c.now(), start + Duration::hours(2));
    }

    #[test]
    fn test_clock_reference_delegates() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 7, 0, 0).unwrap();
        let c = FixedClock::new(at);
        assert_eq!(stamp(&c), at);
        let before = Utc::now();
        assert!(stamp(&SystemClock) >= before);
    }
}
