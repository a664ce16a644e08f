// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel Operation Error Handling*
//!
//! Error types returned by the checked bulk kernels.
//!
//! ## Error Categories
//! - **Argument Errors**: distribution parameters outside their validity domain
//!   (non-finite values, probabilities outside `[0, 1]`, non-positive scales, inconsistent counts)
//! - **Dimension Errors**: a null mask shorter than the data it describes
//!
//! Scalar entry points never return these; they assert the same conditions in debug builds
//! and leave behaviour unspecified in release builds.

use core::fmt;
use std::error::Error;

/// Error type for checked distribution kernels.
///
/// Each variant carries a contextual message naming the kernel and the offending value.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Array length mismatch between the data and its null mask.
    LengthMismatch(String),

    /// Invalid distribution parameters provided to a kernel function.
    InvalidArguments(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Creates a formatted error message for a null mask that does not cover its data.
///
/// # Arguments
/// * `fname` - Function name where the mismatch occurred
/// * `data` - Length of the data slice
/// * `mask` - Length of the supplied null mask
pub fn log_length_mismatch(fname: &str, data: usize, mask: usize) -> String {
    format!("{} => Length mismatch: data {} mask {}", fname, data, mask)
}
