//! Two-pass uniform quantization of BM25 impacts.
//!
//! Pass 1 walks every posting to find the global score range; pass 2
//! recomputes each score and overwrites the posting's term frequency with
//! its quantized impact. The range is global, so neither pass can run over
//! one list in isolation.

use crate::ciff::{DocRecord, PostingsList};
use crate::error::{CiffError, Result};
use crate::ranking::Scorer;

use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleEndpoints {
    /// Impact 0 stays unused: scale = 2^bits - 2, quantized values land in
    /// [1, 2^bits - 1].
    ReserveZero,
    /// Full range: scale = 2^bits - 1, quantized values land in
    /// [0, 2^bits - 1]. One below 2^bits so rounding cannot escape the
    /// bits-wide bound.
    Full,
}

#[derive(Debug, Clone, Copy)]
pub struct QuantizePolicy {
    /// Bits of impact precision
    pub bits: u32,
    pub endpoints: ScaleEndpoints,
    /// Keeps the range denominator positive on a single-score collection
    pub epsilon: f64,
}

impl Default for QuantizePolicy {
    fn default() -> QuantizePolicy {
        QuantizePolicy {
            bits: 8,
            endpoints: ScaleEndpoints::ReserveZero,
            epsilon: 1e-9,
        }
    }
}

impl QuantizePolicy {
    fn scale(&self) -> f64 {
        let full = (1u64 << self.bits) as f64;
        match self.endpoints {
            ScaleEndpoints::ReserveZero => full - 2.0,
            ScaleEndpoints::Full => full - 1.0,
        }
    }

    fn offset(&self) -> i32 {
        match self.endpoints {
            ScaleEndpoints::ReserveZero => 1,
            ScaleEndpoints::Full => 0,
        }
    }
}

/// Running score bounds. Scoped to one quantize_index call, never held as
/// process-wide state, so one process can quantize several collections.
#[derive(Debug, Clone, Copy)]
pub struct ScoreRange {
    pub smallest: f64,
    pub largest: f64,
}

impl ScoreRange {
    pub fn new() -> ScoreRange {
        ScoreRange {
            smallest: f64::MAX,
            largest: 0.0,
        }
    }

    pub fn observe(&mut self, score: f64) {
        if score < self.smallest {
            self.smallest = score;
        }
        if score > self.largest {
            self.largest = score;
        }
    }

    pub fn width(&self) -> f64 {
        self.largest - self.smallest
    }
}

pub fn quantize(score: f64, range: &ScoreRange, policy: &QuantizePolicy) -> i32 {
    let scaled = policy.scale() * (score - range.smallest) / (range.width() + policy.epsilon);
    scaled.round() as i32 + policy.offset()
}

fn doc_length(doc_records: &[DocRecord], docid: i64) -> Result<i32> {
    usize::try_from(docid)
        .ok()
        .and_then(|i| doc_records.get(i))
        .map(|record| record.doclength)
        .ok_or(CiffError::DocidOutOfRange {
            docid,
            num_docs: doc_records.len(),
        })
}

/// Replaces every posting's term frequency with its quantized BM25 impact.
/// Postings must already hold absolute docids, which index `doc_records`.
pub fn quantize_index(
    postings_lists: &mut [PostingsList],
    doc_records: &[DocRecord],
    scorer: &Scorer,
    policy: &QuantizePolicy,
) -> Result<()> {
    // Pass 1: find the smallest and largest impacts
    info!("quantization pass 1: score range discovery");
    let mut range = ScoreRange::new();
    for list in postings_lists.iter() {
        if list.postings.is_empty() {
            continue;
        }
        let idf = scorer.idf(list.df);
        for posting in &list.postings {
            let doclen = doc_length(doc_records, posting.docid)?;
            range.observe(scorer.atire_bm25(posting.tf, doclen, idf));
        }
    }

    if range.width() == 0.0 {
        warn!(
            "degenerate impact range at {}; every posting quantizes to one value",
            range.smallest
        );
    }

    // Pass 2: recompute each score (nothing is cached) and overwrite tf
    info!("quantization pass 2: rewriting term frequencies");
    for list in postings_lists.iter_mut() {
        if list.postings.is_empty() {
            continue;
        }
        let idf = scorer.idf(list.df);
        for posting in list.postings.iter_mut() {
            let doclen = doc_length(doc_records, posting.docid)?;
            let score = scorer.atire_bm25(posting.tf, doclen, idf);
            posting.tf = quantize(score, &range, policy);
        }
    }
    Ok(())
}
