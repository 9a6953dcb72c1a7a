// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use std::{error::Error,
          fmt::{Debug, Display, Formatter, Result}};

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`CommonError`] and any error that implements
///   [`miette::Diagnostic`], like [`crate::IndexOutOfRangeError`].
pub type CommonResult<T> = miette::Result<T>;

/// Common error struct for failures that don't deserve their own diagnostic type.
///
/// # Example
///
/// ```
/// use securities_list_view::{CommonError, CommonErrorType, CommonResult};
///
/// fn validate_count(count: usize) -> CommonResult<usize> {
///     if count == 0 {
///         return CommonError::new_error_result(
///             CommonErrorType::InvalidArguments,
///             "The list needs at least one item",
///         );
///     }
///     Ok(count)
/// }
///
/// assert!(validate_count(0).is_err());
/// assert!(validate_count(3_000).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CommonError {
    pub error_type: CommonErrorType,
    pub error_message: Option<String>,
}

/// Some common errors that can occur.
#[non_exhaustive]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonErrorType {
    #[default]
    General,
    DisplaySizeTooSmall,
    InvalidArguments,
    IOError,
}

/// Implement [`Error`] trait.
impl Error for CommonError {}

/// Implement [`Display`] trait (needed by [`Error`] trait). This is the same as the
/// [`Debug`] implementation (which is derived above).
impl Display for CommonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { Debug::fmt(self, f) }
}

impl CommonError {
    /// Both [`CommonError::error_type`] and [`CommonError::error_message`] available.
    ///
    /// # Errors
    ///
    /// Always returns an error, that's the point.
    pub fn new_error_result<T>(err_type: CommonErrorType, msg: &str) -> CommonResult<T> {
        Err(miette::miette!(CommonError {
            error_type: err_type,
            error_message: Some(msg.to_string()),
        }))
    }
}
