//! Encoder descriptors and the catalog seam over the OS enumeration API.

use crate::errors::Error;
use crate::property::SupportedProperties;

/// Metadata identifying one installed video encoder.
///
/// Decoded from a `VTCopyVideoEncoderList` entry. Every string field is
/// optional in the underlying dictionary; the report renders `<nil>` for
/// anything missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncoderDescriptor {
    pub display_name: Option<String>,
    /// Codec type FourCC (see [`crate::codecs`]).
    pub codec_type: u32,
    pub encoder_id: Option<String>,
    pub codec_name: Option<String>,
    pub encoder_name: Option<String>,
}

/// The OS encoder-enumeration collaborator.
///
/// The real implementation is [`crate::vt::VideoToolboxCatalog`]; tests drive
/// the report through in-memory fakes.
pub trait EncoderCatalog {
    /// Returns every installed encoder, in the order the OS reports them.
    fn list_encoders(&self) -> Result<Vec<EncoderDescriptor>, Error>;

    /// Queries the supported-property table for one encoder/codec pair.
    ///
    /// `width` and `height` only select a representative configuration;
    /// encoders report properties independent of frame size.
    fn supported_properties(
        &self,
        width: i32,
        height: i32,
        codec_type: u32,
        encoder_id: &str,
    ) -> Result<SupportedProperties, Error>;
}
