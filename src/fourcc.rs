//! Four-character-code handling for codec and pixel-format identifiers.
//!
//! VideoToolbox reports codec types as 32-bit FourCCs. [`codec_type_name`]
//! turns one into a curated human-readable name, falling back to decoding the
//! raw tag when the identifier is not in the table. The fallback path also
//! emits a `warn` diagnostic so unrecognized identifiers surface on stderr
//! without ending up in the report itself.

use tracing::warn;

use crate::codecs::{pixel, video};

/// Decodes a FourCC into its textual tag.
///
/// The four big-endian bytes are decoded with Mac OS Roman semantics, the
/// classic encoding for OSType tags. Returns `None` if any byte is a control
/// character (below 0x20); a space byte still counts as printable.
pub fn fourcc_to_string(code: u32) -> Option<String> {
    let bytes = code.to_be_bytes();
    if bytes.iter().any(|&b| b < 0x20) {
        return None;
    }
    Some(bytes.iter().map(|&b| mac_roman_char(b)).collect())
}

fn mac_roman_char(byte: u8) -> char {
    if byte < 0x80 {
        byte as char
    } else {
        MAC_ROMAN_HIGH[(byte - 0x80) as usize]
    }
}

/// Mac OS Roman code points 0x80..=0xFF. The low half is ASCII.
const MAC_ROMAN_HIGH: [char; 128] = [
    'Ä', 'Å', 'Ç', 'É', 'Ñ', 'Ö', 'Ü', 'á', 'à', 'â', 'ä', 'ã', 'å', 'ç', 'é', 'è', //
    'ê', 'ë', 'í', 'ì', 'î', 'ï', 'ñ', 'ó', 'ò', 'ô', 'ö', 'õ', 'ú', 'ù', 'û', 'ü', //
    '†', '°', '¢', '£', '§', '•', '¶', 'ß', '®', '©', '™', '´', '¨', '≠', 'Æ', 'Ø', //
    '∞', '±', '≤', '≥', '¥', 'µ', '∂', '∑', '∏', 'π', '∫', 'ª', 'º', 'Ω', 'æ', 'ø', //
    '¿', '¡', '¬', '√', 'ƒ', '≈', '∆', '«', '»', '…', '\u{a0}', 'À', 'Ã', 'Õ', 'Œ', 'œ', //
    '–', '—', '“', '”', '‘', '’', '÷', '◊', 'ÿ', 'Ÿ', '⁄', '€', '‹', '›', 'ﬁ', 'ﬂ', //
    '‡', '·', '‚', '„', '‰', 'Â', 'Ê', 'Á', 'Ë', 'È', 'Í', 'Î', 'Ï', 'Ì', 'Ó', 'Ô', //
    '\u{f8ff}', 'Ò', 'Ú', 'Û', 'Ù', 'ı', 'ˆ', '˜', '¯', '˘', '˙', '˚', '¸', '˝', '˛', 'ˇ', //
];

/// Resolves a codec type to a display string. Never returns an empty string.
///
/// Known CoreMedia codec types and pixel formats map to curated names. An
/// unknown identifier is decoded as a FourCC tag and reported as
/// `Unknown codec '<tag>'`, or as `<UNKNOWN>` when the bytes are not
/// printable. Both fallback paths log a diagnostic, since an unknown
/// identifier usually means the table below needs a new entry.
pub fn codec_type_name(codec_type: u32) -> String {
    if let Some(name) = known_codec_name(codec_type) {
        return name.to_string();
    }
    match fourcc_to_string(codec_type) {
        Some(tag) => {
            warn!(
                code = codec_type,
                tag = %tag,
                "unknown codec type, the known-name table needs updating"
            );
            format!("Unknown codec '{tag}'")
        }
        None => {
            warn!(
                code = codec_type,
                "unknown codec type with unprintable tag, the known-name table needs updating"
            );
            "<UNKNOWN>".to_string()
        }
    }
}

fn known_codec_name(codec_type: u32) -> Option<&'static str> {
    let name = match codec_type {
        video::ANIMATION => "Apple Animation",
        video::CINEPAK => "Cinepak",
        video::JPEG => "JPEG",
        video::JPEG_OPEN_DML => "JPEG with OpenDML extensions",
        video::SORENSON_VIDEO => "Sorenson Video",
        video::SORENSON_VIDEO3 => "Sorenson 3 Video",
        video::H263 => "H.263",
        video::H264 => "AVC/H.264",
        video::HEVC => "HEVC/H.265",
        video::HEVC_WITH_ALPHA => "HEVC/H.265 Alpha",
        video::DOLBY_VISION_HEVC => "HEVC/H.265 with Dolby Vision",
        video::MPEG4 => "MPEG4 Video",
        video::MPEG2 => "MPEG2 Video",
        video::MPEG1 => "MPEG Video",
        video::VP9 => "VP9",
        video::DV_NTSC => "DV NTSC",
        video::DV_PAL => "DV PAL",
        video::DVCPRO_PAL => "DVCPro PAL",
        video::DVCPRO50_NTSC => "DVCPro-50 NTSC",
        video::DVCPRO50_PAL => "DVCPro-50 PAL",
        video::DVCPROHD_720P60 => "DVCPro-HD 720p60",
        video::DVCPROHD_720P50 => "DVCPro-HD 720p50",
        video::DVCPROHD_1080I60 => "DVCPro-HD 1080i60",
        video::DVCPROHD_1080I50 => "DVCPro-HD 1080i50",
        video::DVCPROHD_1080P30 => "DVCPro-HD 1080p30",
        video::DVCPROHD_1080P25 => "DVCPro-HD 1080p25",
        video::PRORES_4444_XQ => "ProRes 4444 XQ",
        video::PRORES_4444 => "ProRes 4444",
        video::PRORES_422_HQ => "ProRes 422 HQ",
        video::PRORES_422 => "ProRes 422",
        video::PRORES_422_LT => "ProRes 422 LT",
        video::PRORES_422_PROXY => "ProRes 422 Proxy",
        video::PRORES_RAW => "ProRes RAW",
        video::PRORES_RAW_HQ => "ProRes RAW HQ",
        pixel::ARGB32 => "8-bit ARGB",
        pixel::BGRA32 => "8-bit BGRA",
        pixel::RGB24 => "8-bit RGB",
        pixel::BE555_16 => "5-bit RGB Big Endian",
        pixel::BE565_16 => "5-6-5 RGB Big Endian",
        pixel::LE555_16 => "5-bit RGB Little Endian",
        pixel::LE565_16 => "5-6-5 RGB Little Endian",
        pixel::LE5551_16 => "5-bit chroma 1-bit alpha RGB Little Endian",
        pixel::YUV422_8 => "8-bit CbY'CrY' 4:2:2",
        pixel::YUV422_8_YUVS => "8-bit Y'CbY'Cr",
        pixel::YUV444_8 => "8-bit Y'CbCr 4:4:4",
        pixel::YUVA4444_8 => "8-bit Y'CbCrA 4:4:4:4",
        pixel::YUV422_16 => "10 to 16-bit Y'CbCr 4:2:2",
        pixel::YUV422_10 => "10-bit Y'CbCr 4:2:2",
        pixel::YUV444_10 => "10-bit Y'CbCr 4:4:4",
        pixel::INDEXED_GRAY_8 => "Indexed Gray-scale",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_names() {
        assert_eq!(codec_type_name(video::H264), "AVC/H.264");
        assert_eq!(codec_type_name(video::HEVC), "HEVC/H.265");
        assert_eq!(codec_type_name(video::PRORES_422), "ProRes 422");
        assert_eq!(codec_type_name(video::VP9), "VP9");
        assert_eq!(codec_type_name(pixel::ARGB32), "8-bit ARGB");
        assert_eq!(codec_type_name(pixel::YUV422_10), "10-bit Y'CbCr 4:2:2");
    }

    #[test]
    fn test_unknown_printable_tag() {
        let code = u32::from_be_bytes(*b"test");
        assert_eq!(codec_type_name(code), "Unknown codec 'test'");
    }

    #[test]
    fn test_unknown_unprintable_tag() {
        assert_eq!(codec_type_name(0x00000001), "<UNKNOWN>");
        // A single control byte anywhere poisons the tag
        assert_eq!(codec_type_name(u32::from_be_bytes([b't', 0x00, b's', b't'])), "<UNKNOWN>");
    }

    #[test]
    fn test_space_byte_is_printable() {
        assert_eq!(fourcc_to_string(0x20202020).as_deref(), Some("    "));
        assert_eq!(fourcc_to_string(u32::from_be_bytes([0x1f, b'a', b'b', b'c'])), None);
    }

    #[test]
    fn test_mac_roman_high_bytes() {
        // 0xA5 is the bullet in Mac OS Roman
        let code = u32::from_be_bytes([b'a', b'b', b'c', 0xa5]);
        assert_eq!(fourcc_to_string(code).as_deref(), Some("abc•"));
        assert_eq!(codec_type_name(code), "Unknown codec 'abc•'");
    }
}
