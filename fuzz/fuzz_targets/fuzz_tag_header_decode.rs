#![no_main]

use bactlv_core::encoding::{reader::Reader, tag::TagHeader, writer::Writer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut r = Reader::new(data);
    let Ok(header) = TagHeader::decode(&mut r) else {
        assert_eq!(r.bit_position(), 0);
        return;
    };

    // A decoded header must survive a round trip.
    let mut buf = [0u8; 8];
    let mut w = Writer::new(&mut buf);
    header.encode(&mut w).expect("decoded header re-encodes");
    let mut again = Reader::new(w.as_written());
    assert_eq!(TagHeader::decode(&mut again).ok(), Some(header));
});
