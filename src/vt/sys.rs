//! Raw VideoToolbox FFI declarations for encoder enumeration.

#![allow(non_upper_case_globals)]

use core_foundation_sys::array::CFArrayRef;
use core_foundation_sys::dictionary::CFDictionaryRef;
use core_foundation_sys::string::CFStringRef;

use crate::errors::OSStatus;

/// Codec type FourCC, as CoreMedia's `CMVideoCodecType`.
pub type CMVideoCodecType = u32;

#[link(name = "VideoToolbox", kind = "framework")]
extern "C" {
    // Keys into the dictionaries returned by VTCopyVideoEncoderList.
    pub static kVTVideoEncoderList_CodecName: CFStringRef;
    pub static kVTVideoEncoderList_CodecType: CFStringRef;
    pub static kVTVideoEncoderList_DisplayName: CFStringRef;
    pub static kVTVideoEncoderList_EncoderID: CFStringRef;
    pub static kVTVideoEncoderList_EncoderName: CFStringRef;

    /// Encoder-specification key selecting a specific encoder by ID.
    pub static kVTVideoEncoderSpecification_EncoderID: CFStringRef;

    // Attribute keys of a single supported-property dictionary.
    pub static kVTPropertyReadWriteStatusKey: CFStringRef;
    pub static kVTPropertyReadWriteStatus_ReadOnly: CFStringRef;
    pub static kVTPropertyReadWriteStatus_ReadWrite: CFStringRef;
    pub static kVTPropertySupportedValueMinimumKey: CFStringRef;
    pub static kVTPropertySupportedValueMaximumKey: CFStringRef;
    pub static kVTPropertySupportedValueListKey: CFStringRef;

    /// Returns a CFArray of CFDictionaries, one per installed video encoder.
    ///
    /// The caller owns the returned array (Copy rule).
    pub fn VTCopyVideoEncoderList(
        options: CFDictionaryRef,
        list_of_video_encoders_out: *mut CFArrayRef,
    ) -> OSStatus;

    /// Copies the supported-property dictionary for the encoder selected by
    /// `encoder_specification` at the given dimensions.
    ///
    /// Both out-parameters follow the Copy rule; either may be NULL if the
    /// caller does not need it.
    pub fn VTCopySupportedPropertyDictionaryForEncoder(
        width: i32,
        height: i32,
        codec_type: CMVideoCodecType,
        encoder_specification: CFDictionaryRef,
        encoder_id_out: *mut CFStringRef,
        supported_properties_out: *mut CFDictionaryRef,
    ) -> OSStatus;
}
