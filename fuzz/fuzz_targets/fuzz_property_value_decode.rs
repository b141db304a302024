#![no_main]

use bactlv_core::encoding::reader::Reader;
use bactlv_core::schema::{decode_fields, encode_to_vec, StandardSchema};
use bactlv_core::services::read_property::READ_PROPERTY_ACK;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut r = Reader::new(data);
    if let Ok(record) = decode_fields(&mut r, READ_PROPERTY_ACK, &StandardSchema) {
        let _ = encode_to_vec(READ_PROPERTY_ACK, &record, &StandardSchema);
    }
});
