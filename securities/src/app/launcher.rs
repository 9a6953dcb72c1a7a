// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AppConfig, CommonError, CommonErrorType, CommonResult, InputDevice,
            OutputDevice, SessionSummary, Size, TerminalWindow, size};

/// The list needs at least one row for items and one for the status line.
pub const MIN_WINDOW_SIZE: Size = Size {
    col_width: 10,
    row_height: 2,
};

/// Runs one session against the real terminal.
///
/// # Errors
///
/// Returns an error if the terminal is too small, its size can't be read, or the main
/// event loop fails.
pub async fn run_app(config: AppConfig) -> CommonResult<SessionSummary> {
    let initial_size = get_size()?;
    if initial_size.col_width < MIN_WINDOW_SIZE.col_width
        || initial_size.row_height < MIN_WINDOW_SIZE.row_height
    {
        return CommonError::new_error_result(
            CommonErrorType::DisplaySizeTooSmall,
            &format!(
                "Window is {}x{}, it needs to be at least {}x{}",
                initial_size.col_width,
                initial_size.row_height,
                MIN_WINDOW_SIZE.col_width,
                MIN_WINDOW_SIZE.row_height
            ),
        );
    }

    TerminalWindow::main_event_loop(
        config,
        InputDevice::new_event_stream(),
        OutputDevice::new_stdout(),
        initial_size,
    )
    .await
}

/// # Errors
///
/// Returns a [`CommonErrorType::IOError`] if the terminal size can't be queried, eg:
/// when stdout is not a terminal.
pub fn get_size() -> CommonResult<Size> { size_from_query(crossterm::terminal::size()) }

fn size_from_query(query_result: std::io::Result<(u16, u16)>) -> CommonResult<Size> {
    match query_result {
        Ok((col_width, row_height)) => Ok(size(col_width, row_height)),
        Err(error) => CommonError::new_error_result(
            CommonErrorType::IOError,
            &format!("Could not read the terminal size: {error}"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_size_from_query() {
        assert_eq!(size_from_query(Ok((80, 24))).unwrap(), size(80, 24));
    }

    #[test]
    fn test_failed_size_query_is_an_io_error() {
        let report = size_from_query(Err(std::io::Error::other("not a tty"))).unwrap_err();
        let error = report.downcast_ref::<CommonError>().unwrap();
        assert_eq!(error.error_type, CommonErrorType::IOError);
        assert!(error.error_message.as_deref().unwrap().contains("not a tty"));
    }
}
