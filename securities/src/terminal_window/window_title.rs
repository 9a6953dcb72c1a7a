// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use chrono::Timelike;
use crossterm::{queue, terminal::SetTitle};
use miette::IntoDiagnostic;

use crate::{CommonResult, OutputDevice};

/// Formats `time` as `hh:mm:ss.ffff AM/PM`, eg: `02:03:04.0500 PM`.
#[must_use]
pub fn format_title_timestamp<T: Timelike>(time: &T) -> String {
    let (is_pm, hour) = time.hour12();
    // Leap seconds are reported as nanosecond >= 1_000_000_000.
    let ten_thousandths = (time.nanosecond() % 1_000_000_000) / 100_000;
    let am_pm = if is_pm { "PM" } else { "AM" };
    format!(
        "{hour:02}:{:02}:{:02}.{ten_thousandths:04} {am_pm}",
        time.minute(),
        time.second()
    )
}

/// Sets the terminal window title to the current local time. The benchmark calls this
/// right before and right after the bulk update.
///
/// # Errors
///
/// Returns an error if the escape sequence can't be written.
pub fn set_window_title_to_now(output_device: &OutputDevice) -> CommonResult<()> {
    let title = format_title_timestamp(&chrono::Local::now());
    let mut buffer: Vec<u8> = vec![];
    queue!(buffer, SetTitle(&title)).into_diagnostic()?;
    output_device.write_and_flush(&buffer).into_diagnostic()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(14, 3, 4, 50_000_000, "02:03:04.0500 PM")]
    #[test_case(0, 0, 0, 0, "12:00:00.0000 AM")]
    #[test_case(11, 59, 59, 999_999_999, "11:59:59.9999 AM")]
    fn test_format_title_timestamp(h: u32, m: u32, s: u32, nano: u32, expected: &str) {
        let time = NaiveTime::from_hms_nano_opt(h, m, s, nano).unwrap();
        assert_eq!(format_title_timestamp(&time), expected);
    }

    #[test]
    fn test_set_window_title_writes_osc() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        set_window_title_to_now(&output_device).unwrap();
        let output = stdout_mock.get_copy_of_buffer_as_string();
        assert!(output.starts_with("\x1b]0;"));
        assert!(output.ends_with('\x07'));
    }
}
