//! VideoToolbox-backed encoder catalog.
//!
//! Everything CoreFoundation stays inside this module: the encoder array and
//! each per-property dictionary are decoded into the typed model right here
//! at the OS boundary, so the formatter never touches a CF type.

pub mod sys;

use std::ptr;

use core_foundation::base::TCFType;
use core_foundation::dictionary::CFDictionary;
use core_foundation::number::CFNumber;
use core_foundation::string::CFString;
use core_foundation_sys::array::{CFArrayGetCount, CFArrayGetTypeID, CFArrayGetValueAtIndex, CFArrayRef};
use core_foundation_sys::base::{CFEqual, CFGetTypeID, CFRelease, CFTypeRef};
use core_foundation_sys::dictionary::{
    CFDictionaryGetCount, CFDictionaryGetKeysAndValues, CFDictionaryGetTypeID,
    CFDictionaryGetValueIfPresent, CFDictionaryRef,
};
use core_foundation_sys::number::{CFNumberGetTypeID, CFNumberIsFloatType, CFNumberRef};
use core_foundation_sys::string::{CFStringGetTypeID, CFStringRef};
use libc::c_void;

use crate::encoder_list::{EncoderCatalog, EncoderDescriptor};
use crate::errors::Error;
use crate::property::{PropertyDescriptor, PropertyValue, ReadWriteStatus, SupportedProperties};

/// [`EncoderCatalog`] over the live VideoToolbox API.
pub struct VideoToolboxCatalog;

impl EncoderCatalog for VideoToolboxCatalog {
    fn list_encoders(&self) -> Result<Vec<EncoderDescriptor>, Error> {
        let mut list: CFArrayRef = ptr::null();
        let status = unsafe { sys::VTCopyVideoEncoderList(ptr::null(), &mut list) };
        if status != 0 || list.is_null() {
            return Err(Error::EncoderList { status });
        }

        let mut encoders = Vec::new();
        unsafe {
            for idx in 0..CFArrayGetCount(list) {
                let entry = CFArrayGetValueAtIndex(list, idx) as CFDictionaryRef;
                if !entry.is_null() {
                    encoders.push(decode_encoder(entry));
                }
            }
            CFRelease(list as CFTypeRef);
        }
        Ok(encoders)
    }

    fn supported_properties(
        &self,
        width: i32,
        height: i32,
        codec_type: u32,
        encoder_id: &str,
    ) -> Result<SupportedProperties, Error> {
        let spec_key = unsafe { CFString::wrap_under_get_rule(sys::kVTVideoEncoderSpecification_EncoderID) };
        let spec_value = CFString::new(encoder_id);
        let spec = CFDictionary::from_CFType_pairs(&[(spec_key.as_CFType(), spec_value.as_CFType())]);

        let mut supported: CFDictionaryRef = ptr::null();
        let status = unsafe {
            sys::VTCopySupportedPropertyDictionaryForEncoder(
                width,
                height,
                codec_type,
                spec.as_concrete_TypeRef() as CFDictionaryRef,
                ptr::null_mut(),
                &mut supported,
            )
        };
        if status != 0 || supported.is_null() {
            return Err(Error::SupportedProperties { status });
        }

        let mut table: SupportedProperties = unsafe {
            let count = CFDictionaryGetCount(supported) as usize;
            let mut keys: Vec<*const c_void> = vec![ptr::null(); count];
            let mut values: Vec<*const c_void> = vec![ptr::null(); count];
            CFDictionaryGetKeysAndValues(supported, keys.as_mut_ptr(), values.as_mut_ptr());

            let mut entries = Vec::with_capacity(count);
            for (key, value) in keys.into_iter().zip(values) {
                let Some(name) = decode_string(key as CFTypeRef) else { continue };
                if CFGetTypeID(value as CFTypeRef) != CFDictionaryGetTypeID() {
                    continue;
                }
                entries.push((name, decode_descriptor(value as CFDictionaryRef)));
            }
            CFRelease(supported as CFTypeRef);
            entries
        };

        // CFDictionary iteration order is unspecified; pin one
        table.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(table)
    }
}

unsafe fn decode_encoder(entry: CFDictionaryRef) -> EncoderDescriptor {
    EncoderDescriptor {
        display_name: string_value(entry, sys::kVTVideoEncoderList_DisplayName),
        // An entry without a codec type resolves to the unknown marker
        codec_type: u32_value(entry, sys::kVTVideoEncoderList_CodecType).unwrap_or(u32::MAX),
        encoder_id: string_value(entry, sys::kVTVideoEncoderList_EncoderID),
        codec_name: string_value(entry, sys::kVTVideoEncoderList_CodecName),
        encoder_name: string_value(entry, sys::kVTVideoEncoderList_EncoderName),
    }
}

unsafe fn decode_descriptor(info: CFDictionaryRef) -> PropertyDescriptor {
    let read_write = dict_value(info, sys::kVTPropertyReadWriteStatusKey).map(|value| {
        // Anything other than the ReadOnly marker counts as read-write
        if CFEqual(value, sys::kVTPropertyReadWriteStatus_ReadOnly as CFTypeRef) != 0 {
            ReadWriteStatus::ReadOnly
        } else {
            ReadWriteStatus::ReadWrite
        }
    });
    let minimum = dict_value(info, sys::kVTPropertySupportedValueMinimumKey).map(|v| decode_scalar(v));
    let maximum = dict_value(info, sys::kVTPropertySupportedValueMaximumKey).map(|v| decode_scalar(v));
    let allowed_values = dict_value(info, sys::kVTPropertySupportedValueListKey).and_then(|value| {
        if CFGetTypeID(value) != CFArrayGetTypeID() {
            return None;
        }
        let array = value as CFArrayRef;
        let count = CFArrayGetCount(array);
        let mut values = Vec::with_capacity(count as usize);
        for idx in 0..count {
            let item = CFArrayGetValueAtIndex(array, idx) as CFTypeRef;
            if !item.is_null() {
                values.push(decode_scalar(item));
            }
        }
        Some(values)
    });

    PropertyDescriptor { read_write, minimum, maximum, allowed_values }
}

unsafe fn decode_scalar(value: CFTypeRef) -> PropertyValue {
    let type_id = CFGetTypeID(value);
    if type_id == CFStringGetTypeID() {
        PropertyValue::Text(CFString::wrap_under_get_rule(value as CFStringRef).to_string())
    } else if type_id == CFNumberGetTypeID() {
        let number = CFNumber::wrap_under_get_rule(value as CFNumberRef);
        if CFNumberIsFloatType(value as CFNumberRef) != 0 {
            PropertyValue::Float(number.to_f64().unwrap_or_default())
        } else {
            PropertyValue::Int(number.to_i64().unwrap_or_default())
        }
    } else {
        PropertyValue::Text(format!("<Unknown type ID {type_id}>"))
    }
}

unsafe fn dict_value(dict: CFDictionaryRef, key: CFStringRef) -> Option<CFTypeRef> {
    let mut value: *const c_void = ptr::null();
    if CFDictionaryGetValueIfPresent(dict, key as *const c_void, &mut value) != 0 && !value.is_null() {
        Some(value as CFTypeRef)
    } else {
        None
    }
}

unsafe fn string_value(dict: CFDictionaryRef, key: CFStringRef) -> Option<String> {
    dict_value(dict, key).and_then(|value| decode_string(value))
}

unsafe fn decode_string(value: CFTypeRef) -> Option<String> {
    if CFGetTypeID(value) == CFStringGetTypeID() {
        Some(CFString::wrap_under_get_rule(value as CFStringRef).to_string())
    } else {
        None
    }
}

unsafe fn u32_value(dict: CFDictionaryRef, key: CFStringRef) -> Option<u32> {
    dict_value(dict, key).and_then(|value| {
        if CFGetTypeID(value) != CFNumberGetTypeID() {
            return None;
        }
        CFNumber::wrap_under_get_rule(value as CFNumberRef)
            .to_i64()
            .map(|n| n as u32)
    })
}
