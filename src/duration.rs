//! Tick arithmetic for on-disc durations.
//!
//! Every duration the library reports is in 90kHz ticks. Millisecond and
//! `HH:MM:SS` forms are derived here and nowhere else.

/// Ticks per second of the 90kHz clock.
pub const TICKS_PER_SECOND: u64 = 90_000;

/// Ticks per millisecond of the 90kHz clock.
pub const TICKS_PER_MSEC: u64 = 90;

/// Whole milliseconds in a tick duration.
pub fn ticks_to_msecs(ticks: u64) -> u64 {
    ticks / TICKS_PER_MSEC
}

/// Formats a tick duration as zero-padded `HH:MM:SS`.
///
/// The hour field widens past two digits rather than wrapping, so titles of
/// pathological length still render faithfully.
pub fn format_duration(ticks: u64) -> String {
    let total = ticks / TICKS_PER_SECOND;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ticks() {
        assert_eq!(format_duration(0), "00:00:00");
    }

    #[test]
    fn one_second() {
        assert_eq!(format_duration(TICKS_PER_SECOND), "00:00:01");
    }

    #[test]
    fn hour_minute_second_carry() {
        assert_eq!(format_duration(TICKS_PER_SECOND * 3661), "01:01:01");
    }

    #[test]
    fn sub_second_ticks_floor_to_zero() {
        assert_eq!(format_duration(TICKS_PER_SECOND - 1), "00:00:00");
    }

    #[test]
    fn hours_do_not_wrap_past_99() {
        assert_eq!(format_duration(TICKS_PER_SECOND * 3600 * 100), "100:00:00");
    }

    #[test]
    fn msecs_are_ticks_over_90() {
        assert_eq!(ticks_to_msecs(0), 0);
        assert_eq!(ticks_to_msecs(90), 1);
        assert_eq!(ticks_to_msecs(8_100_000), 90_000);
        assert_eq!(ticks_to_msecs(89), 0);
    }
}
