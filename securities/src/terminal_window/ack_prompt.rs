// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::{cursor::MoveTo,
                queue,
                style::{Attribute, Print, SetAttribute}};
use miette::IntoDiagnostic;
use unicode_width::UnicodeWidthStr;

use crate::{CommonResult, KeyPress, OutputDevice, Size, fit_to_width, ok};

pub const DISMISS_HINT: &str = "Press Enter to dismiss";

/// Modal box painted over the list. While it is up, the event loop routes every key to
/// [`AcknowledgePrompt::is_dismiss_key`] and drops clicks and scrolls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcknowledgePrompt {
    pub message: String,
}

impl AcknowledgePrompt {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_dismiss_key(key_press: KeyPress) -> bool {
        matches!(key_press, KeyPress::Enter | KeyPress::Esc | KeyPress::Char(' '))
    }

    /// Inner width of the box, not counting the border.
    fn inner_width(&self) -> u16 {
        let widest = self.message.width().max(DISMISS_HINT.width()) + 2;
        u16::try_from(widest).unwrap_or(u16::MAX)
    }

    /// Paints the box centered in `window_size`. If the window is narrower than the box,
    /// the box is clipped on the right.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn paint(&self, output_device: &OutputDevice, window_size: Size) -> CommonResult<()> {
        let inner_width = self
            .inner_width()
            .min(window_size.col_width.saturating_sub(2));
        let box_width = inner_width.saturating_add(2);
        let box_height: u16 = 5;
        let left = window_size.col_width.saturating_sub(box_width) / 2;
        let top = window_size.row_height.saturating_sub(box_height) / 2;
        let border = "─".repeat(usize::from(inner_width));

        let lines = [
            format!("┌{border}┐"),
            format!("│{}│", fit_to_width("", inner_width)),
            format!("│{}│", center(&self.message, inner_width)),
            format!("│{}│", center(DISMISS_HINT, inner_width)),
            format!("└{border}┘"),
        ];

        let mut buffer: Vec<u8> = vec![];
        queue!(buffer, SetAttribute(Attribute::Bold)).into_diagnostic()?;
        for (offset, line) in (0..).zip(lines) {
            queue!(buffer, MoveTo(left, top.saturating_add(offset)), Print(line))
                .into_diagnostic()?;
        }
        queue!(buffer, SetAttribute(Attribute::Reset)).into_diagnostic()?;
        output_device.write_and_flush(&buffer).into_diagnostic()?;
        ok!()
    }
}

fn center(text: &str, width: u16) -> String {
    let pad = usize::from(width).saturating_sub(text.width()) / 2;
    let padded = format!("{}{text}", " ".repeat(pad));
    fit_to_width(&padded, width)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::size;

    #[test_case(KeyPress::Enter, true)]
    #[test_case(KeyPress::Esc, true)]
    #[test_case(KeyPress::Char(' '), true)]
    #[test_case(KeyPress::Char('q'), false)]
    #[test_case(KeyPress::Down, false)]
    fn test_is_dismiss_key(key_press: KeyPress, expected: bool) {
        assert_eq!(AcknowledgePrompt::is_dismiss_key(key_press), expected);
    }

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abcdef", 4), "abcd");
    }

    #[test]
    fn test_paint_draws_message_and_hint() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let prompt = AcknowledgePrompt::new("4 ms");

        prompt.paint(&output_device, size(80, 24)).unwrap();

        let output = stdout_mock.get_copy_of_buffer_as_string();
        assert!(output.contains("4 ms"));
        assert!(output.contains(DISMISS_HINT));
        assert!(output.contains('┌'));
        assert!(output.contains('┘'));
    }

    #[test]
    fn test_paint_in_tiny_window_does_not_panic() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        AcknowledgePrompt::new("1234 ms")
            .paint(&output_device, size(3, 2))
            .unwrap();
        assert!(!stdout_mock.get_copy_of_buffer_as_string().is_empty());
    }
}
