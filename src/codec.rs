//! Varint length-prefixed message framing over a byte stream.

use crate::ciff::CiffRecord;
use crate::error::{CiffError, FramingError, Result};
use crate::varint::{read_varint, write_varint, MAX_VARINT_LEN};

use prost::Message;
use std::io::{Read, Write};

/// Reads one length-prefixed message and decodes it. Reads exactly the
/// declared payload length, so following messages stay intact.
pub fn read_message<M: CiffRecord, R: Read>(r: &mut R) -> Result<M> {
    let declared = read_varint(r)?;

    let mut payload = vec![0u8; declared as usize];
    let mut available = 0;
    while available < payload.len() {
        match r.read(&mut payload[available..])? {
            0 => {
                return Err(FramingError::TruncatedPayload {
                    declared,
                    available,
                }
                .into())
            }
            n => available += n,
        }
    }

    M::decode(payload.as_slice()).map_err(|source| CiffError::Schema {
        kind: M::KIND,
        source,
    })
}

/// Writes the varint-encoded payload length, then the payload.
pub fn write_message<M: CiffRecord, W: Write>(w: &mut W, msg: &M) -> Result<()> {
    let payload = msg.encode_to_vec();

    let mut prefix = Vec::with_capacity(MAX_VARINT_LEN);
    write_varint(&mut prefix, payload.len() as u64);

    w.write_all(&prefix)?;
    w.write_all(&payload)?;
    Ok(())
}
