//! Report formatting: indentation, property rendering, and the encoder walk.
//!
//! All formatting is a pure transformation of descriptors into lines; the
//! driver at the bottom is the only place that talks to a catalog or an
//! output stream. Failures on a single encoder are logged and skipped, so
//! one broken encoder never hides the rest of the report.

use std::io::Write;

use tracing::warn;

use crate::encoder_list::{EncoderCatalog, EncoderDescriptor};
use crate::errors::Error;
use crate::fourcc::codec_type_name;
use crate::property::{PropertyDescriptor, ReadWriteStatus, SupportedProperties};

/// Probe dimensions for supported-property queries. Encoders report their
/// property tables independent of frame size, so any representative
/// resolution works.
pub const PROBE_WIDTH: i32 = 1920;
pub const PROBE_HEIGHT: i32 = 1080;

/// Renders an indent level as text: one tab per 4 columns, then one space
/// per remaining column. Level 0 renders as nothing.
pub fn indent(pad: usize) -> String {
    let mut prefix = String::with_capacity(pad / 4 + pad % 4);
    for _ in 0..pad / 4 {
        prefix.push('\t');
    }
    for _ in 0..pad % 4 {
        prefix.push(' ');
    }
    prefix
}

/// Renders one property: its name at `pad`, then each present attribute at
/// `pad + 4`. Absent attributes contribute no lines at all.
pub fn property_lines(name: &str, descriptor: &PropertyDescriptor, pad: usize) -> Vec<String> {
    let mut lines = vec![format!("{}{name}", indent(pad))];
    let attr = indent(pad + 4);

    if let Some(status) = descriptor.read_write {
        let text = match status {
            ReadWriteStatus::ReadOnly => "Value is read-only.",
            ReadWriteStatus::ReadWrite => "Value is read-write.",
        };
        lines.push(format!("{attr}{text}"));
    }
    if let Some(minimum) = &descriptor.minimum {
        lines.push(format!("{attr}Minimum value: {minimum}"));
    }
    if let Some(maximum) = &descriptor.maximum {
        lines.push(format!("{attr}Maximum value: {maximum}"));
    }
    if let Some(values) = &descriptor.allowed_values {
        for value in values {
            lines.push(format!("{attr}{value}"));
        }
    }

    lines
}

/// Renders a supported-property table under a `Supported Properties:`
/// heading. An empty table renders nothing, heading included.
pub fn table_lines(table: &SupportedProperties, pad: usize) -> Vec<String> {
    if table.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![format!("{}Supported Properties:", indent(pad))];
    for (name, descriptor) in table {
        lines.extend(property_lines(name, descriptor, pad + 4));
    }
    lines
}

fn or_nil(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("<nil>")
}

/// Writes the full encoder report to `out`.
///
/// The encoder list is fetched once; if that fails the whole run fails.
/// Per-encoder property queries that fail are logged and skipped, and the
/// run continues with the next encoder.
pub fn write_report<C, W>(catalog: &C, out: &mut W) -> Result<(), Error>
where
    C: EncoderCatalog + ?Sized,
    W: Write,
{
    let encoders = catalog.list_encoders()?;
    for encoder in &encoders {
        write_encoder(catalog, encoder, out)?;
    }
    Ok(())
}

fn write_encoder<C, W>(catalog: &C, encoder: &EncoderDescriptor, out: &mut W) -> Result<(), Error>
where
    C: EncoderCatalog + ?Sized,
    W: Write,
{
    let field = indent(4);
    writeln!(out, "Encoder: {}", or_nil(&encoder.display_name))?;
    writeln!(out, "{field}Codec Type: {}", codec_type_name(encoder.codec_type))?;
    writeln!(out, "{field}Encoder ID: {}", or_nil(&encoder.encoder_id))?;
    writeln!(out, "{field}Codec Name: {}", or_nil(&encoder.codec_name))?;
    writeln!(out, "{field}Encoder Name: {}", or_nil(&encoder.encoder_name))?;

    let table = match encoder.encoder_id.as_deref() {
        Some(id) => catalog.supported_properties(PROBE_WIDTH, PROBE_HEIGHT, encoder.codec_type, id),
        None => Err(Error::MissingEncoderId),
    };
    match table {
        Ok(table) => {
            for line in table_lines(&table, 4) {
                writeln!(out, "{line}")?;
            }
        }
        Err(error) => {
            warn!(
                display_name = or_nil(&encoder.display_name),
                %error,
                "skipping supported-property section"
            );
        }
    }

    writeln!(out)?;
    Ok(())
}
