/// ATIRE-variant BM25, evaluated directly with no caching. Deterministic
/// for identical f64 inputs.
#[derive(Debug, Clone, Copy)]
pub struct Scorer {
    /// Term-frequency saturation rate
    pub k1: f64,
    /// Length-normalization strength
    pub b: f64,
    pub num_docs: i64,
    pub average_doc_length: f64,
}

pub const DEFAULT_K1: f64 = 0.9;
pub const DEFAULT_B: f64 = 0.4;

impl Scorer {
    /// Caller guarantees doc_freq > 0; zero yields a non-finite idf.
    pub fn idf(&self, doc_freq: i64) -> f64 {
        (self.num_docs as f64 / doc_freq as f64).ln()
    }

    pub fn atire_bm25(&self, term_freq: i32, doc_length: i32, idf: f64) -> f64 {
        let top = (self.k1 + 1.0) * term_freq as f64;
        let term_weight = top
            / (self.k1 * (1.0 - self.b + self.b * (doc_length as f64 / self.average_doc_length))
                + term_freq as f64);
        idf * term_weight
    }
}
