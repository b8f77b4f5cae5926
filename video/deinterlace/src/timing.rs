/*!
    Output timestamps for double-rate modes.
*/

use video_types::Timestamp;

/// Offset of the second field when there is no previous frame to measure from.
pub const FIRST_FIELD_OFFSET_US: i64 = 20_000;

/**
    Tracks the previous input timestamp to place synthesized fields.

    The first output frame always carries the input timestamp. The second
    one, in double-rate modes, is placed halfway to where the next input
    frame is expected, assuming the gap to it equals the gap from the
    previous input.
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldTiming {
    last_input: Timestamp,
}

impl FieldTiming {
    /**
        Create timing state with no previous frame.
    */
    pub fn new() -> Self {
        Self::default()
    }

    /**
        Returns the timestamp of the last double-rate input, or
        [`Timestamp::UNSET`].
    */
    pub fn last_input(&self) -> Timestamp {
        self.last_input
    }

    /**
        Returns the timestamp for the second output frame of `input`.
    */
    pub fn second_field(&self, input: Timestamp) -> Timestamp {
        if self.last_input.is_unset() {
            return input.add_micros(FIRST_FIELD_OFFSET_US);
        }
        let current = i128::from(input.as_micros());
        let last = i128::from(self.last_input.as_micros());
        let extrapolated = (3 * current - last) / 2;
        Timestamp(extrapolated.clamp(i64::MIN.into(), i64::MAX.into()) as i64)
    }

    /**
        Returns the timestamps of the output frames for `input`.
    */
    pub fn stamps(
        &self,
        input: Timestamp,
        double_rate: bool,
    ) -> impl Iterator<Item = Timestamp> + use<> {
        let second = double_rate.then(|| self.second_field(input));
        std::iter::once(input).chain(second)
    }

    /**
        Remember `input` as the previous frame.
    */
    pub fn record(&mut self, input: Timestamp) {
        self.last_input = input;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_uses_fixed_offset() {
        let timing = FieldTiming::new();
        let stamps: Vec<_> = timing.stamps(Timestamp(1_000_000), true).collect();
        assert_eq!(stamps, vec![Timestamp(1_000_000), Timestamp(1_020_000)]);
    }

    #[test]
    fn later_frames_extrapolate_from_previous_gap() {
        let mut timing = FieldTiming::new();
        timing.record(Timestamp(1_000_000));
        let stamps: Vec<_> = timing.stamps(Timestamp(1_040_000), true).collect();
        assert_eq!(stamps, vec![Timestamp(1_040_000), Timestamp(1_060_000)]);
    }

    #[test]
    fn extrapolation_truncates_like_integer_division() {
        let mut timing = FieldTiming::new();
        timing.record(Timestamp(100));
        // (3 * 133 - 100) / 2 = 149.5
        assert_eq!(timing.second_field(Timestamp(133)), Timestamp(149));
    }

    #[test]
    fn single_rate_has_one_stamp() {
        let timing = FieldTiming::new();
        let stamps: Vec<_> = timing.stamps(Timestamp(500), false).collect();
        assert_eq!(stamps, vec![Timestamp(500)]);
    }

    #[test]
    fn zero_timestamp_counts_as_unset() {
        let mut timing = FieldTiming::new();
        timing.record(Timestamp(0));
        assert_eq!(timing.second_field(Timestamp(40_000)), Timestamp(60_000));
    }
}
