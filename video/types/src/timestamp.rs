/*!
    Presentation timestamps.
*/

use std::fmt;

/**
    Presentation timestamp in microseconds on the host's monotonic clock.

    A value of zero doubles as "no timestamp yet" for state that tracks the
    previous frame, see [`Timestamp::UNSET`].
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// The zero timestamp, used as the "never seen a frame" marker.
    pub const UNSET: Self = Self(0);

    /**
        Returns the timestamp as a microsecond count.
    */
    #[inline]
    pub const fn as_micros(self) -> i64 {
        self.0
    }

    /**
        Returns true if this is the zero timestamp.
    */
    #[inline]
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }

    /**
        Offset the timestamp by a signed number of microseconds.
    */
    #[inline]
    pub const fn add_micros(self, micros: i64) -> Self {
        Self(self.0.saturating_add(micros))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}us", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_unset() {
        assert!(Timestamp::UNSET.is_unset());
        assert!(Timestamp::default().is_unset());
        assert!(!Timestamp(1).is_unset());
    }

    #[test]
    fn timestamp_add_micros_saturates() {
        assert_eq!(Timestamp(100).add_micros(20_000), Timestamp(20_100));
        assert_eq!(Timestamp(i64::MAX).add_micros(1), Timestamp(i64::MAX));
    }

    #[test]
    fn timestamp_ordering() {
        assert!(Timestamp(100) < Timestamp(200));
        assert_eq!(Timestamp(100).as_micros(), 100);
    }
}
