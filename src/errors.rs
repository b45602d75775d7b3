//! Error types and VideoToolbox status codes.

#![allow(non_upper_case_globals)]

use thiserror::Error;

/// Status code returned by CoreFoundation and VideoToolbox calls.
///
/// Matches `core_foundation_sys::base::OSStatus`; aliased here so the
/// portable modules never need the Apple-only crates.
pub type OSStatus = i32;

pub const kVTPropertyNotSupportedErr: OSStatus = -12900;
pub const kVTPropertyReadOnlyErr: OSStatus = -12901;
pub const kVTParameterErr: OSStatus = -12902;
pub const kVTAllocationFailedErr: OSStatus = -12904;
pub const kVTCouldNotCreateInstanceErr: OSStatus = -12907;
pub const kVTCouldNotFindVideoEncoderErr: OSStatus = -12908;
pub const kVTVideoEncoderMalfunctionErr: OSStatus = -12912;
pub const kVTVideoEncoderNotAvailableNowErr: OSStatus = -12915;
pub const kVTVideoEncoderAuthorizationErr: OSStatus = -12211;

/// Convert a VideoToolbox error status to a human-readable message.
///
/// # Example
///
/// ```
/// use vt_encoder_info::errors::{vt_error_to_string, kVTCouldNotFindVideoEncoderErr};
///
/// let msg = vt_error_to_string(kVTCouldNotFindVideoEncoderErr);
/// assert_eq!(msg, "Could not find video encoder");
/// ```
pub fn vt_error_to_string(status: OSStatus) -> &'static str {
    match status {
        0 => "Success",
        kVTPropertyNotSupportedErr => "Property not supported",
        kVTPropertyReadOnlyErr => "Property is read-only",
        kVTParameterErr => "Invalid parameter",
        kVTAllocationFailedErr => "Memory allocation failed",
        kVTCouldNotCreateInstanceErr => "Could not create instance",
        kVTCouldNotFindVideoEncoderErr => "Could not find video encoder",
        kVTVideoEncoderMalfunctionErr => "Video encoder malfunction",
        kVTVideoEncoderNotAvailableNowErr => "Video encoder not available now",
        kVTVideoEncoderAuthorizationErr => "Video encoder authorization error",
        _ => "Unknown error",
    }
}

/// Errors surfaced while building the encoder report.
///
/// Only [`Error::EncoderList`] and [`Error::Io`] abort a run; the per-encoder
/// variants are contained by the driver, which logs them and moves on to the
/// next encoder.
#[derive(Error, Debug)]
pub enum Error {
    /// The initial encoder enumeration call failed. Fatal.
    #[error("could not get encoder list: {status} ({})", vt_error_to_string(*.status))]
    EncoderList { status: OSStatus },

    /// The supported-property query failed for one encoder.
    #[error("failed to get supported properties for encoder: {status} ({})", vt_error_to_string(*.status))]
    SupportedProperties { status: OSStatus },

    /// An encoder entry carries no encoder ID, so its properties cannot be
    /// queried.
    #[error("encoder entry has no encoder ID")]
    MissingEncoderId,

    /// Writing to the report output stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
