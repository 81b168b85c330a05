use crate::ciff::{DocRecord, Header};
use crate::codec::{read_message, write_message};
use crate::error::{CiffError, FramingError};
use crate::varint::{read_varint, write_varint};

use std::io::Cursor;

#[test]
pub fn roundtrip_small() {
    let mut buf = Vec::<u8>::new();
    let mut sizes = Vec::new();
    for x in 0..1024u64 {
        sizes.push(write_varint(&mut buf, x));
    }
    let mut cursor = Cursor::new(&buf);
    for x in 0..1024u64 {
        let y = read_varint(&mut cursor).unwrap();
        assert!(x == y, "written value {} did not match read value {}", x, y);
    }
    assert!(sizes.iter().sum::<usize>() == buf.len());
}

#[test]
pub fn roundtrip_boundaries() {
    let cases: &[(u64, usize)] = &[
        (0, 1),
        (1, 1),
        (127, 1),
        (128, 2),
        (16383, 2),
        (16384, 3),
        (u32::MAX as u64, 5),
        (1 << 63, 10),
        (u64::MAX, 10),
    ];
    for &(x, expected_len) in cases {
        let mut buf = Vec::<u8>::new();
        let sz = write_varint(&mut buf, x);
        assert!(sz == expected_len, "value {} encoded to {} bytes", x, sz);
        let y = read_varint(&mut Cursor::new(&buf)).unwrap();
        assert!(x == y, "written value {} did not match read value {}", x, y);
    }
}

#[test]
pub fn eof_at_boundary() {
    let err = read_varint(&mut Cursor::new(&[] as &[u8])).unwrap_err();
    assert!(matches!(err, CiffError::Framing(FramingError::Eof)));
}

#[test]
pub fn truncated_prefix() {
    // Both bytes carry the continuation bit, then the stream ends
    let err = read_varint(&mut Cursor::new(&[0x80u8, 0x80])).unwrap_err();
    assert!(matches!(
        err,
        CiffError::Framing(FramingError::TruncatedPrefix)
    ));
}

#[test]
pub fn overlong_prefix() {
    let err = read_varint(&mut Cursor::new(&[0xffu8; 10])).unwrap_err();
    assert!(matches!(
        err,
        CiffError::Framing(FramingError::MalformedPrefix)
    ));
}

#[test]
pub fn message_roundtrip() {
    let header = Header {
        version: 1,
        num_postings_lists: 3,
        num_docs: 7,
        total_postings_lists: 3,
        total_docs: 7,
        total_terms_in_collection: 42,
        average_doclength: 6.5,
        description: "roundtrip".to_string(),
    };

    let mut buf = Vec::<u8>::new();
    write_message(&mut buf, &header).unwrap();
    let decoded: Header = read_message(&mut Cursor::new(&buf)).unwrap();
    assert!(decoded == header);
}

#[test]
pub fn empty_message_roundtrip() {
    // A default record serializes to a zero-length payload
    let record = DocRecord::default();
    let mut buf = Vec::<u8>::new();
    write_message(&mut buf, &record).unwrap();
    assert!(buf == vec![0u8], "expected a lone zero length prefix");

    let decoded: DocRecord = read_message(&mut Cursor::new(&buf)).unwrap();
    assert!(decoded == record);
}

#[test]
pub fn consecutive_messages_stay_intact() {
    let first = DocRecord {
        docid: 0,
        collection_docid: "doc-0".to_string(),
        doclength: 12,
    };
    let second = DocRecord {
        docid: 1,
        collection_docid: "doc-1".to_string(),
        doclength: 90000,
    };

    let mut buf = Vec::<u8>::new();
    write_message(&mut buf, &first).unwrap();
    write_message(&mut buf, &second).unwrap();

    let mut cursor = Cursor::new(&buf);
    let a: DocRecord = read_message(&mut cursor).unwrap();
    let b: DocRecord = read_message(&mut cursor).unwrap();
    assert!(a == first);
    assert!(b == second);
}

#[test]
pub fn truncated_payload() {
    let record = DocRecord {
        docid: 5,
        collection_docid: "doc-5".to_string(),
        doclength: 100,
    };
    let mut buf = Vec::<u8>::new();
    write_message(&mut buf, &record).unwrap();
    buf.truncate(buf.len() - 3);

    let err = read_message::<DocRecord, _>(&mut Cursor::new(&buf)).unwrap_err();
    assert!(matches!(
        err,
        CiffError::Framing(FramingError::TruncatedPayload { .. })
    ));
}

#[test]
pub fn invalid_tag_is_schema_error() {
    // Field number 0 is not a legal protobuf tag
    let buf = [0x01u8, 0x00];
    let err = read_message::<Header, _>(&mut Cursor::new(&buf)).unwrap_err();
    assert!(matches!(err, CiffError::Schema { kind: "header", .. }));
}

#[test]
pub fn invalid_utf8_is_schema_error() {
    // Header description (tag 8, wire type 2) holding a lone 0xff
    let buf = [0x03u8, 0x42, 0x01, 0xff];
    let err = read_message::<Header, _>(&mut Cursor::new(&buf)).unwrap_err();
    assert!(matches!(err, CiffError::Schema { kind: "header", .. }));
}
