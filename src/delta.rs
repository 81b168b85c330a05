//! Conversion between on-disk d-gap docids and absolute in-memory docids.
//!
//! Neither direction is idempotent: each must run exactly once per
//! decode/encode of a list, or docids are silently corrupted.

use crate::ciff::PostingsList;
use crate::error::{CiffError, Result};

/// Rewrites d-gaps into absolute docids, in place. The declared document
/// frequency must match the number of postings actually present.
pub fn decode_gaps(list: &mut PostingsList) -> Result<()> {
    if list.df != list.postings.len() as i64 {
        return Err(CiffError::CountMismatch {
            what: format!("postings for term {:?}", list.term),
            declared: list.df,
            observed: list.postings.len() as i64,
        });
    }

    let mut prev = 0;
    for posting in list.postings.iter_mut() {
        posting.docid += prev;
        prev = posting.docid;
    }
    Ok(())
}

/// Rewrites absolute docids into d-gaps, in place, immediately before
/// serialization. Docids must be strictly ascending; anything else would
/// serialize as negative gaps, which no compliant reader can recover.
pub fn encode_gaps(list: &mut PostingsList) -> Result<()> {
    for (index, pair) in list.postings.windows(2).enumerate() {
        if pair[1].docid <= pair[0].docid {
            return Err(CiffError::UnsortedPostings {
                term: list.term.clone(),
                index: index + 1,
            });
        }
    }

    let mut prev = 0;
    for posting in list.postings.iter_mut() {
        let absolute = posting.docid;
        posting.docid = absolute - prev;
        prev = absolute;
    }
    Ok(())
}
