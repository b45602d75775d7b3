//! End-to-end report tests over fake encoder catalogs.

use std::collections::HashMap;

use vt_encoder_info::codecs::video;
use vt_encoder_info::encoder_list::{EncoderCatalog, EncoderDescriptor};
use vt_encoder_info::errors::{self, Error};
use vt_encoder_info::property::{PropertyDescriptor, PropertyValue, ReadWriteStatus, SupportedProperties};
use vt_encoder_info::report::{write_report, PROBE_HEIGHT, PROBE_WIDTH};

struct FakeCatalog {
    encoders: Vec<EncoderDescriptor>,
    tables: HashMap<String, SupportedProperties>,
}

impl EncoderCatalog for FakeCatalog {
    fn list_encoders(&self) -> Result<Vec<EncoderDescriptor>, Error> {
        Ok(self.encoders.clone())
    }

    fn supported_properties(
        &self,
        width: i32,
        height: i32,
        _codec_type: u32,
        encoder_id: &str,
    ) -> Result<SupportedProperties, Error> {
        assert_eq!((width, height), (PROBE_WIDTH, PROBE_HEIGHT));
        self.tables
            .get(encoder_id)
            .cloned()
            .ok_or(Error::SupportedProperties { status: errors::kVTCouldNotFindVideoEncoderErr })
    }
}

struct FailingCatalog;

impl EncoderCatalog for FailingCatalog {
    fn list_encoders(&self) -> Result<Vec<EncoderDescriptor>, Error> {
        Err(Error::EncoderList { status: errors::kVTVideoEncoderMalfunctionErr })
    }

    fn supported_properties(&self, _: i32, _: i32, _: u32, _: &str) -> Result<SupportedProperties, Error> {
        unreachable!("enumeration already failed")
    }
}

fn h264_catalog() -> FakeCatalog {
    let h264_id = "com.apple.videotoolbox.videoencoder.h264".to_string();
    let mut tables = HashMap::new();
    tables.insert(
        h264_id.clone(),
        vec![
            (
                "AverageBitRate".to_string(),
                PropertyDescriptor {
                    read_write: Some(ReadWriteStatus::ReadWrite),
                    minimum: Some(PropertyValue::Int(0)),
                    maximum: Some(PropertyValue::Int(100_000_000)),
                    ..Default::default()
                },
            ),
            (
                "ProfileLevel".to_string(),
                PropertyDescriptor {
                    read_write: Some(ReadWriteStatus::ReadWrite),
                    allowed_values: Some(vec![
                        PropertyValue::from("H264_Baseline_AutoLevel"),
                        PropertyValue::from("H264_High_AutoLevel"),
                    ]),
                    ..Default::default()
                },
            ),
        ],
    );

    FakeCatalog {
        encoders: vec![
            EncoderDescriptor {
                display_name: Some("Apple H.264".to_string()),
                codec_type: video::H264,
                encoder_id: Some(h264_id),
                codec_name: Some("H.264".to_string()),
                encoder_name: Some("Apple H.264 (HW)".to_string()),
            },
            EncoderDescriptor {
                display_name: None,
                codec_type: u32::from_be_bytes(*b"zzzz"),
                encoder_id: Some("com.example.zzzz".to_string()),
                codec_name: None,
                encoder_name: None,
            },
        ],
        tables,
    }
}

fn report_string(catalog: &impl EncoderCatalog) -> String {
    let mut out = Vec::new();
    write_report(catalog, &mut out).expect("report should succeed");
    String::from_utf8(out).expect("report is UTF-8")
}

#[test]
fn test_report_two_encoders() {
    let report = report_string(&h264_catalog());
    let expected = "\
Encoder: Apple H.264
\tCodec Type: AVC/H.264
\tEncoder ID: com.apple.videotoolbox.videoencoder.h264
\tCodec Name: H.264
\tEncoder Name: Apple H.264 (HW)
\tSupported Properties:
\t\tAverageBitRate
\t\t\tValue is read-write.
\t\t\tMinimum value: 0
\t\t\tMaximum value: 100000000
\t\tProfileLevel
\t\t\tValue is read-write.
\t\t\tH264_Baseline_AutoLevel
\t\t\tH264_High_AutoLevel

Encoder: <nil>
\tCodec Type: Unknown codec 'zzzz'
\tEncoder ID: com.example.zzzz
\tCodec Name: <nil>
\tEncoder Name: <nil>

";
    assert_eq!(report, expected);
}

#[test]
fn test_failed_property_query_is_not_fatal() {
    // The second encoder's query fails; its block still renders, minus the
    // property section, and write_report returns Ok.
    let report = report_string(&h264_catalog());
    assert!(report.contains("Encoder: <nil>"));
    assert!(!report.split("Encoder: <nil>").nth(1).unwrap().contains("Supported Properties:"));
}

#[test]
fn test_missing_encoder_id_skips_properties() {
    let catalog = FakeCatalog {
        encoders: vec![EncoderDescriptor {
            display_name: Some("No ID".to_string()),
            codec_type: video::HEVC,
            ..Default::default()
        }],
        tables: HashMap::new(),
    };
    let report = report_string(&catalog);
    let expected = "\
Encoder: No ID
\tCodec Type: HEVC/H.265
\tEncoder ID: <nil>
\tCodec Name: <nil>
\tEncoder Name: <nil>

";
    assert_eq!(report, expected);
}

#[test]
fn test_empty_property_table_renders_no_heading() {
    let mut catalog = h264_catalog();
    catalog.encoders.truncate(1);
    let id = catalog.encoders[0].encoder_id.clone().unwrap();
    catalog.tables.insert(id, Vec::new());

    let report = report_string(&catalog);
    assert!(!report.contains("Supported Properties:"));
}

#[test]
fn test_report_is_byte_identical_across_runs() {
    let catalog = h264_catalog();
    assert_eq!(report_string(&catalog), report_string(&catalog));
}

#[test]
fn test_enumeration_failure_is_fatal() {
    let mut out = Vec::new();
    let err = write_report(&FailingCatalog, &mut out).unwrap_err();
    assert!(matches!(err, Error::EncoderList { status } if status == errors::kVTVideoEncoderMalfunctionErr));
    // Nothing was written before the failure surfaced
    assert!(out.is_empty());
}
