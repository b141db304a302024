//! Framing for constructed data: optional fields, tag-terminated arrays and
//! opening/closing tag pairs.

use crate::encoding::{
    reader::Reader,
    tag::{TagClass, TagHeader, LVT_CLOSING_TAG},
    writer::Writer,
};
use crate::{DecodeError, EncodeError};
use alloc::vec::Vec;

/// Decodes the next header without moving the cursor.
pub fn peek_header(r: &Reader<'_>) -> Result<TagHeader, DecodeError> {
    let mut probe = *r;
    TagHeader::decode(&mut probe)
}

/// True when the next header is the context closing tag `expected_tag`.
///
/// Running out of input also answers true so that array loops terminate.
pub fn is_closing_tag_lookahead(r: &Reader<'_>, expected_tag: u8) -> bool {
    let first = match r.peek_u8() {
        Ok(b) => b,
        Err(_) => return true,
    };
    let tag_number = first >> 4;
    let is_context = (first >> 3) & 0x01 == 1;
    let lvt = first & 0x07;
    if !is_context || lvt != LVT_CLOSING_TAG {
        return false;
    }
    if tag_number != 0x0F {
        return tag_number == expected_tag;
    }
    match peek_header(r) {
        Ok(header) => header.actual_tag_number() == expected_tag,
        Err(_) => true,
    }
}

/// Runs `decoder`; a recoverable failure rewinds to the start and yields
/// `None`.
pub fn parse_optional<'a, T, F>(r: &mut Reader<'a>, decoder: F) -> Result<Option<T>, DecodeError>
where
    F: FnOnce(&mut Reader<'a>) -> Result<T, DecodeError>,
{
    let start = r.bit_position();
    match decoder(r) {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_recoverable() => {
            log::trace!("optional field absent at bit {start}: {e}");
            r.reset_to(start);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Decodes elements until the closing tag `expected_tag` is next. The
/// closing tag itself is left unread.
pub fn parse_terminated_array<'a, T, F>(
    r: &mut Reader<'a>,
    expected_tag: u8,
    mut decoder: F,
) -> Result<Vec<T>, DecodeError>
where
    F: FnMut(&mut Reader<'a>) -> Result<T, DecodeError>,
{
    let mut out = Vec::new();
    while !is_closing_tag_lookahead(r, expected_tag) {
        out.push(decode_element(r, &mut decoder)?);
    }
    log::trace!(
        "array closed by tag {expected_tag} after {} elements",
        out.len()
    );
    Ok(out)
}

/// Decodes elements until the input is exhausted.
pub fn parse_to_end<'a, T, F>(r: &mut Reader<'a>, mut decoder: F) -> Result<Vec<T>, DecodeError>
where
    F: FnMut(&mut Reader<'a>) -> Result<T, DecodeError>,
{
    let mut out = Vec::new();
    while !r.is_empty() {
        out.push(decode_element(r, &mut decoder)?);
    }
    Ok(out)
}

fn decode_element<'a, T, F>(r: &mut Reader<'a>, decoder: &mut F) -> Result<T, DecodeError>
where
    F: FnMut(&mut Reader<'a>) -> Result<T, DecodeError>,
{
    let before = r.bit_position();
    let item = decoder(r)?;
    if r.bit_position() == before {
        return Err(DecodeError::Validation("array element consumed no input"));
    }
    Ok(item)
}

pub fn expect_opening_tag(r: &mut Reader<'_>, tag_number: u8) -> Result<(), DecodeError> {
    let header = TagHeader::decode(r)?;
    check_delimiter(&header, tag_number)?;
    if !header.is_opening_tag() {
        return Err(DecodeError::Validation("expected opening tag"));
    }
    Ok(())
}

pub fn expect_closing_tag(r: &mut Reader<'_>, tag_number: u8) -> Result<(), DecodeError> {
    let header = TagHeader::decode(r)?;
    if header.tag_class != TagClass::ContextSpecific || !header.is_closing_tag() {
        return Err(DecodeError::Validation("expected closing tag"));
    }
    if header.actual_tag_number() != tag_number {
        return Err(DecodeError::UnbalancedClosingTag {
            expected: tag_number,
            found: header.actual_tag_number(),
        });
    }
    Ok(())
}

fn check_delimiter(header: &TagHeader, tag_number: u8) -> Result<(), DecodeError> {
    if header.actual_tag_number() != tag_number {
        return Err(DecodeError::TagNumberMismatch {
            expected: tag_number,
            found: header.actual_tag_number(),
        });
    }
    if header.tag_class != TagClass::ContextSpecific {
        return Err(DecodeError::TagClassMismatch {
            expected: TagClass::ContextSpecific,
            found: header.tag_class,
        });
    }
    Ok(())
}

/// `[OpeningTag(n)] body [ClosingTag(n)]`.
pub fn parse_enclosed<'a, T, F>(
    r: &mut Reader<'a>,
    tag_number: u8,
    body: F,
) -> Result<T, DecodeError>
where
    F: FnOnce(&mut Reader<'a>) -> Result<T, DecodeError>,
{
    expect_opening_tag(r, tag_number)?;
    let value = body(r)?;
    expect_closing_tag(r, tag_number)?;
    Ok(value)
}

pub fn write_enclosed<F>(w: &mut Writer<'_>, tag_number: u8, body: F) -> Result<(), EncodeError>
where
    F: FnOnce(&mut Writer<'_>) -> Result<(), EncodeError>,
{
    TagHeader::opening(tag_number).encode(w)?;
    body(w)?;
    TagHeader::closing(tag_number).encode(w)
}

#[cfg(test)]
mod tests {
    use super::{
        expect_closing_tag, is_closing_tag_lookahead, parse_enclosed, parse_optional,
        parse_terminated_array, peek_header,
    };
    use crate::encoding::primitives::{decode_app_unsigned, decode_ctx_unsigned};
    use crate::encoding::reader::Reader;
    use crate::DecodeError;

    #[test]
    fn optional_absent_leaves_cursor_unchanged() {
        // Context tag 3 where tag 2 was probed.
        let bytes = [0x39, 0x05];
        let mut r = Reader::new(&bytes);
        let got = parse_optional(&mut r, |r| decode_ctx_unsigned(r, 2)).unwrap();
        assert_eq!(got, None);
        assert_eq!(r.bit_position(), 0);

        let v = decode_ctx_unsigned(&mut r, 3).unwrap();
        assert_eq!(v.actual_value(), 5);
    }

    #[test]
    fn optional_at_end_of_input_is_absent() {
        let mut r = Reader::new(&[]);
        let got = parse_optional(&mut r, |r| decode_ctx_unsigned(r, 2)).unwrap();
        assert_eq!(got, None);
    }

    #[test]
    fn optional_propagates_hard_errors() {
        // Enumerated 7 is not a polarity.
        let mut r = Reader::new(&[0x91, 0x07]);
        let err = parse_optional(&mut r, |r| {
            crate::encoding::enumerated::decode_app_enum::<crate::types::Polarity>(r)
        })
        .unwrap_err();
        assert_eq!(err, DecodeError::InvalidValue);
    }

    #[test]
    fn array_stops_at_matching_closing_tag() {
        // {[3] 1 2 [/3]}
        let bytes = [0x3E, 0x21, 0x01, 0x21, 0x02, 0x3F];
        let mut r = Reader::new(&bytes);
        let items = parse_enclosed(&mut r, 3, |r| {
            parse_terminated_array(r, 3, |r| decode_app_unsigned(r).map(|v| v.actual_value()))
        })
        .unwrap();
        assert_eq!(items, [1, 2]);
        assert!(r.is_empty());
    }

    #[test]
    fn empty_array_leaves_closing_tag() {
        let bytes = [0x3F];
        let mut r = Reader::new(&bytes);
        let items = parse_terminated_array(&mut r, 3, decode_app_unsigned).unwrap();
        assert!(items.is_empty());
        assert_eq!(r.bit_position(), 0);
        expect_closing_tag(&mut r, 3).unwrap();
    }

    #[test]
    fn other_closing_tag_does_not_terminate() {
        let r = Reader::new(&[0x4F]);
        assert!(!is_closing_tag_lookahead(&r, 3));
        let r = Reader::new(&[0x3E]);
        assert!(!is_closing_tag_lookahead(&r, 3));
        let r = Reader::new(&[]);
        assert!(is_closing_tag_lookahead(&r, 3));
    }

    #[test]
    fn extended_closing_tag_lookahead() {
        let r = Reader::new(&[0xFF, 20]);
        assert!(is_closing_tag_lookahead(&r, 20));
        assert!(!is_closing_tag_lookahead(&r, 15));
    }

    #[test]
    fn unbalanced_closing_tag() {
        let bytes = [0x3E, 0x21, 0x01, 0x4F];
        let mut r = Reader::new(&bytes);
        let err = parse_enclosed(&mut r, 3, decode_app_unsigned).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnbalancedClosingTag {
                expected: 3,
                found: 4
            }
        );
    }

    #[test]
    fn peek_does_not_consume() {
        let r = Reader::new(&[0x2A, 0x01, 0x2C]);
        let header = peek_header(&r).unwrap();
        assert_eq!(header.actual_tag_number(), 2);
        assert_eq!(header.actual_length(), 2);
        assert_eq!(r.bit_position(), 0);
    }
}
