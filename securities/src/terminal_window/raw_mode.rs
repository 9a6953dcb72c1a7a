// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::{cursor::{Hide, Show},
                event::{DisableMouseCapture, EnableMouseCapture},
                queue,
                terminal::{self, Clear, ClearType, EnterAlternateScreen,
                           LeaveAlternateScreen}};
use miette::IntoDiagnostic;

use crate::{CommonResult, OutputDevice, ok};

/// Puts the terminal in the state the list view needs (raw mode, alternate screen,
/// mouse capture, hidden cursor) and restores it afterwards. Raw mode is not touched
/// for mock output devices.
#[derive(Debug)]
pub struct RawMode;

impl RawMode {
    /// # Errors
    ///
    /// Returns an error if the terminal can't be switched into raw mode, or the
    /// escape sequences can't be written.
    pub fn start(output_device: &OutputDevice) -> CommonResult<()> {
        if !output_device.is_mock {
            terminal::enable_raw_mode().into_diagnostic()?;
        }
        let mut buffer: Vec<u8> = vec![];
        queue!(
            buffer,
            EnterAlternateScreen,
            EnableMouseCapture,
            Hide,
            Clear(ClearType::All)
        )
        .into_diagnostic()?;
        output_device.write_and_flush(&buffer).into_diagnostic()?;
        ok!()
    }

    /// # Errors
    ///
    /// Returns an error if the terminal can't be restored.
    pub fn end(output_device: &OutputDevice) -> CommonResult<()> {
        let mut buffer: Vec<u8> = vec![];
        queue!(buffer, Show, DisableMouseCapture, LeaveAlternateScreen).into_diagnostic()?;
        output_device.write_and_flush(&buffer).into_diagnostic()?;
        if !output_device.is_mock {
            terminal::disable_raw_mode().into_diagnostic()?;
        }
        ok!()
    }
}
