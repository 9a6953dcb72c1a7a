// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          time::Duration};

use crate::ok;

/// Wrapper around [Duration] that the benchmark uses to report elapsed time. The
/// acknowledgement prompt shows [`TimeDuration::as_whole_millis`], while the
/// [Display] implementation gives a human readable breakdown for the log.
///
/// To create one, you can use the [From] trait to convert from a [Duration].
///
/// ```
/// use std::time::Duration;
/// use securities_list_view::TimeDuration;
/// let time_duration = TimeDuration::from(Duration::from_millis(1_250));
/// assert_eq!(time_duration.as_whole_millis(), 1_250);
/// assert_eq!(time_duration.to_string(), "1s:250ms");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeDuration {
    pub inner: Duration,
}

mod accessor {
    use super::TimeDuration;

    impl TimeDuration {
        #[must_use]
        pub fn get_only_micros(&self) -> u32 { self.inner.subsec_micros() % 1_000 }

        #[must_use]
        pub fn get_only_millis(&self) -> u32 { self.inner.subsec_millis() }

        #[must_use]
        pub fn get_only_secs(&self) -> u64 { self.inner.as_secs() }

        /// Total elapsed milliseconds, truncated. Saturates at [`u64::MAX`].
        #[must_use]
        pub fn as_whole_millis(&self) -> u64 {
            u64::try_from(self.inner.as_millis()).unwrap_or(u64::MAX)
        }
    }
}

mod converters {
    use super::{Duration, TimeDuration};

    impl From<Duration> for TimeDuration {
        fn from(duration: Duration) -> Self { Self { inner: duration } }
    }

    impl From<TimeDuration> for Duration {
        fn from(time_duration: TimeDuration) -> Self { time_duration.inner }
    }
}

mod display_formatter {
    use super::{Display, Formatter, Result, TimeDuration, ok};

    impl Display for TimeDuration {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let secs = self.get_only_secs();
            let millis = self.get_only_millis();
            let micros = self.get_only_micros();

            if secs > 60 {
                let mins = secs / 60;
                let secs = secs % 60;
                write!(f, "{mins}m:{secs}s:{millis}ms")?;
            } else if secs > 0 {
                write!(f, "{secs}s:{millis}ms")?;
            } else if millis > 0 {
                write!(f, "{millis}ms:{micros}μs")?;
            } else {
                write!(f, "{micros}μs")?;
            }

            ok!()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(Duration::from_secs(61) + Duration::from_millis(100), "1m:1s:100ms" ; "minutes seconds and millis")]
    #[test_case(Duration::from_secs(1) + Duration::from_millis(100), "1s:100ms" ; "seconds and millis")]
    #[test_case(Duration::from_millis(42) + Duration::from_micros(7), "42ms:7μs" ; "millis and micros")]
    #[test_case(Duration::from_micros(350), "350μs" ; "micros only")]
    fn test_display(duration: Duration, expected: &str) {
        assert_eq!(TimeDuration::from(duration).to_string(), expected);
    }

    #[test]
    fn test_as_whole_millis_truncates() {
        let it = TimeDuration::from(Duration::from_micros(12_999));
        assert_eq!(it.as_whole_millis(), 12);
    }
}
