/// Generic enumerated dispatcher with the vendor-proprietary escape.
pub mod enumerated;
/// Optional fields, tag-terminated arrays and opening/closing tag pairs.
pub mod framer;
/// Integer, real and string payload codecs plus tagged helpers.
pub mod primitives;
/// Bit-addressed reader for decoding BACnet tagged data.
pub mod reader;
/// BACnet tag header (application, context, opening/closing).
pub mod tag;
/// Application and context encoding of [`DataValue`](crate::types::DataValue).
pub mod value_codec;
/// Fields derived from decoded data.
pub mod virtual_fields;
/// Bit-addressed writer into a caller-owned buffer.
pub mod writer;
