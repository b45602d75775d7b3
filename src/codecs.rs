//! FourCC constants for CoreMedia video codec types and pixel formats.
//!
//! These are the `kCMVideoCodecType_*` and `kCMPixelFormat_*` values that
//! VideoToolbox reports as encoder codec types. All FourCCs are big-endian:
//! `0x61766331` is `'avc1'`.

/// Video codec FourCC constants (CMVideoCodecType)
pub mod video {
    /// Apple Animation ('rle ')
    pub const ANIMATION: u32 = 0x726c6520;

    /// Cinepak ('cvid')
    pub const CINEPAK: u32 = 0x63766964;

    /// JPEG ('jpeg')
    pub const JPEG: u32 = 0x6a706567;

    /// JPEG with OpenDML extensions ('dmb1')
    pub const JPEG_OPEN_DML: u32 = 0x646d6231;

    /// Sorenson Video ('SVQ1')
    pub const SORENSON_VIDEO: u32 = 0x53565131;

    /// Sorenson 3 Video ('SVQ3')
    pub const SORENSON_VIDEO3: u32 = 0x53565133;

    /// H.263 ('h263')
    pub const H263: u32 = 0x68323633;

    /// H.264/AVC codec ('avc1')
    pub const H264: u32 = 0x61766331;

    /// HEVC/H.265 codec ('hvc1')
    pub const HEVC: u32 = 0x68766331;

    /// HEVC with an alpha channel ('muxa')
    pub const HEVC_WITH_ALPHA: u32 = 0x6d757861;

    /// HEVC carrying Dolby Vision metadata ('dvh1')
    pub const DOLBY_VISION_HEVC: u32 = 0x64766831;

    /// MPEG-4 Video codec ('mp4v')
    pub const MPEG4: u32 = 0x6d703476;

    /// MPEG-2 Video ('mp2v')
    pub const MPEG2: u32 = 0x6d703276;

    /// MPEG-1 Video ('mp1v')
    pub const MPEG1: u32 = 0x6d703176;

    /// VP9 ('vp09')
    pub const VP9: u32 = 0x76703039;

    /// DV NTSC ('dvc ')
    pub const DV_NTSC: u32 = 0x64766320;

    /// DV PAL ('dvcp')
    pub const DV_PAL: u32 = 0x64766370;

    /// DVCPro PAL ('dvpp')
    pub const DVCPRO_PAL: u32 = 0x64767070;

    /// DVCPro-50 NTSC ('dv5n')
    pub const DVCPRO50_NTSC: u32 = 0x6476356e;

    /// DVCPro-50 PAL ('dv5p')
    pub const DVCPRO50_PAL: u32 = 0x64763570;

    /// DVCPro-HD 720p60 ('dvhp')
    pub const DVCPROHD_720P60: u32 = 0x64766870;

    /// DVCPro-HD 720p50 ('dvhq')
    pub const DVCPROHD_720P50: u32 = 0x64766871;

    /// DVCPro-HD 1080i60 ('dvh6')
    pub const DVCPROHD_1080I60: u32 = 0x64766836;

    /// DVCPro-HD 1080i50 ('dvh5')
    pub const DVCPROHD_1080I50: u32 = 0x64766835;

    /// DVCPro-HD 1080p30 ('dvh3')
    pub const DVCPROHD_1080P30: u32 = 0x64766833;

    /// DVCPro-HD 1080p25 ('dvh2')
    pub const DVCPROHD_1080P25: u32 = 0x64766832;

    /// Apple ProRes 4444 XQ ('ap4x')
    pub const PRORES_4444_XQ: u32 = 0x61703478;

    /// Apple ProRes 4444 ('ap4h')
    pub const PRORES_4444: u32 = 0x61703468;

    /// Apple ProRes 422 HQ ('apch')
    pub const PRORES_422_HQ: u32 = 0x61706368;

    /// Apple ProRes 422 ('apcn')
    pub const PRORES_422: u32 = 0x6170636e;

    /// Apple ProRes 422 LT ('apcs')
    pub const PRORES_422_LT: u32 = 0x61706373;

    /// Apple ProRes 422 Proxy ('apco')
    pub const PRORES_422_PROXY: u32 = 0x6170636f;

    /// Apple ProRes RAW ('aprn')
    pub const PRORES_RAW: u32 = 0x6170726e;

    /// Apple ProRes RAW HQ ('aprh')
    pub const PRORES_RAW_HQ: u32 = 0x61707268;
}

/// Pixel format FourCC constants (CMPixelFormat)
pub mod pixel {
    /// 32-bit ARGB
    pub const ARGB32: u32 = 0x00000020;

    /// 32-bit BGRA ('BGRA')
    pub const BGRA32: u32 = 0x42475241;

    /// 24-bit RGB
    pub const RGB24: u32 = 0x00000018;

    /// 16-bit big-endian 5-5-5 RGB
    pub const BE555_16: u32 = 0x00000010;

    /// 16-bit big-endian 5-6-5 RGB ('B565')
    pub const BE565_16: u32 = 0x42353635;

    /// 16-bit little-endian 5-5-5 RGB ('L555')
    pub const LE555_16: u32 = 0x4c353535;

    /// 16-bit little-endian 5-6-5 RGB ('L565')
    pub const LE565_16: u32 = 0x4c353635;

    /// 16-bit little-endian 5-5-5-1 RGBA ('5551')
    pub const LE5551_16: u32 = 0x35353531;

    /// 8-bit CbY'CrY' 4:2:2 ('2vuy')
    pub const YUV422_8: u32 = 0x32767579;

    /// 8-bit Y'CbY'Cr 4:2:2 ('yuvs')
    pub const YUV422_8_YUVS: u32 = 0x79757673;

    /// 8-bit Y'CbCr 4:4:4 ('v308')
    pub const YUV444_8: u32 = 0x76333038;

    /// 8-bit Y'CbCrA 4:4:4:4 ('v408')
    pub const YUVA4444_8: u32 = 0x76343038;

    /// 10 to 16-bit Y'CbCr 4:2:2 ('v216')
    pub const YUV422_16: u32 = 0x76323136;

    /// 10-bit Y'CbCr 4:2:2 ('v210')
    pub const YUV422_10: u32 = 0x76323130;

    /// 10-bit Y'CbCr 4:4:4 ('v410')
    pub const YUV444_10: u32 = 0x76343130;

    /// 8-bit indexed gray-scale, white is zero
    pub const INDEXED_GRAY_8: u32 = 0x00000028;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_codecs() {
        // Verify FourCC byte order (big-endian)
        assert_eq!(video::H264, u32::from_be_bytes(*b"avc1"));
        assert_eq!(video::HEVC, u32::from_be_bytes(*b"hvc1"));
        assert_eq!(video::MPEG4, u32::from_be_bytes(*b"mp4v"));
        assert_eq!(video::ANIMATION, u32::from_be_bytes(*b"rle "));
        assert_eq!(video::DV_NTSC, u32::from_be_bytes(*b"dvc "));
        assert_eq!(video::PRORES_4444_XQ, u32::from_be_bytes(*b"ap4x"));
    }

    #[test]
    fn test_pixel_formats() {
        assert_eq!(pixel::BGRA32, u32::from_be_bytes(*b"BGRA"));
        assert_eq!(pixel::YUV422_8, u32::from_be_bytes(*b"2vuy"));
        // The RGB formats keyed by bit depth are plain integers, not tags
        assert_eq!(pixel::ARGB32, 32);
        assert_eq!(pixel::RGB24, 24);
        assert_eq!(pixel::BE555_16, 16);
        assert_eq!(pixel::INDEXED_GRAY_8, 40);
    }
}
