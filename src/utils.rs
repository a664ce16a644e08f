// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Null-Mask Helpers for the Bulk Kernels*

use minarrow::Bitmask;

use crate::errors::{KernelError, log_length_mismatch};

/// Whether a kernel must take the masked path.
///
/// A caller-supplied `null_count` is trusted; without one, any mask counts as possibly null.
/// The mask is never scanned.
#[inline(always)]
pub fn has_nulls(null_count: Option<usize>, mask: Option<&Bitmask>) -> bool {
    match null_count {
        Some(n) => n > 0,
        None => mask.is_some(),
    }
}

/// Checks that a supplied null mask covers every lane of the data.
/// Lets the masked path read the mask without bounds checks.
#[inline(always)]
pub fn confirm_mask_len(
    fname: &str,
    data_len: usize,
    mask: Option<&Bitmask>,
) -> Result<(), KernelError> {
    if let Some(m) = mask {
        if m.len() < data_len {
            return Err(KernelError::LengthMismatch(log_length_mismatch(
                fname,
                data_len,
                m.len(),
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_count_overrides_mask_presence() {
        let m = Bitmask::new_set_all(4, true);
        assert!(!has_nulls(None, None));
        assert!(has_nulls(None, Some(&m)));
        assert!(!has_nulls(Some(0), Some(&m)));
        assert!(has_nulls(Some(2), Some(&m)));
    }

    #[test]
    fn short_mask_is_a_length_mismatch() {
        let m = Bitmask::new_set_all(2, true);
        assert!(confirm_mask_len("k", 2, Some(&m)).is_ok());
        assert!(confirm_mask_len("k", 9, None).is_ok());
        let e = confirm_mask_len("normal_pdf", 3, Some(&m)).unwrap_err();
        assert_eq!(
            e,
            KernelError::LengthMismatch("normal_pdf => Length mismatch: data 3 mask 2".into())
        );
    }
}
