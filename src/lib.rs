//! Diagnostic enumerator for Apple VideoToolbox video encoders.
//!
//! Queries the system for every installed video encoder and renders, per
//! encoder, its identifying metadata and the table of properties it supports
//! (value ranges, enumerations, read/write status) as indented plain text.
//! Diagnostics — unrecognized codec FourCCs, failed property queries — go to
//! the `tracing` subscriber, never into the report itself.
//!
//! The formatting core is portable and fully testable off-macOS; only the
//! [`vt`] module talks to the OS.
//!
//! # Example
//!
//! ```
//! use vt_encoder_info::property::{PropertyDescriptor, PropertyValue};
//! use vt_encoder_info::report;
//!
//! let descriptor = PropertyDescriptor {
//!     minimum: Some(PropertyValue::Int(0)),
//!     maximum: Some(PropertyValue::Int(100)),
//!     ..Default::default()
//! };
//! let lines = report::property_lines("Quality", &descriptor, 0);
//! assert_eq!(lines, ["Quality", "\tMinimum value: 0", "\tMaximum value: 100"]);
//! ```

pub mod codecs;
pub mod encoder_list;
pub mod errors;
pub mod fourcc;
pub mod property;
pub mod report;

#[cfg(any(target_os = "macos", target_os = "ios"))]
pub mod vt;
