use crate::error::{FramingError, Result};

use std::io::{ErrorKind, Read};

/// Longest unsigned LEB128 encoding of a 64-bit value.
pub const MAX_VARINT_LEN: usize = 10;

// Encode as unsigned LEB128 (low 7 bits first, high bit = continuation)
pub fn write_varint(buf: &mut Vec<u8>, mut x: u64) -> usize {
    let mut written = 0;
    loop {
        let mut byte = (x & 0x7f) as u8;
        x >>= 7;
        if x != 0 {
            byte |= 0x80;
        }
        buf.push(byte);
        written += 1;
        if x == 0 {
            return written;
        }
    }
}

pub fn read_varint(r: &mut impl Read) -> Result<u64> {
    let mut x = 0u64;
    let mut byte = [0u8; 1];
    for i in 0..MAX_VARINT_LEN {
        if let Err(err) = r.read_exact(&mut byte) {
            if err.kind() == ErrorKind::UnexpectedEof {
                // Nothing read at all is a bare end-of-stream; the caller
                // decides whether a message was still owed.
                let framing = if i == 0 {
                    FramingError::Eof
                } else {
                    FramingError::TruncatedPrefix
                };
                return Err(framing.into());
            }
            return Err(err.into());
        }
        let b = byte[0];
        // The tenth byte carries only the top bit of a u64
        if i == MAX_VARINT_LEN - 1 && b > 1 {
            return Err(FramingError::MalformedPrefix.into());
        }
        x |= ((b & 0x7f) as u64) << (7 * i);
        if b & 0x80 == 0 {
            return Ok(x);
        }
    }
    Err(FramingError::MalformedPrefix.into())
}
