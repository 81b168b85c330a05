use thiserror::Error;

pub type Result<T> = std::result::Result<T, CiffError>;

/// Failures of the varint length-prefix framing layer.
#[derive(Debug, Error)]
pub enum FramingError {
    #[error("stream ended at a message boundary")]
    Eof,

    #[error("stream ended inside a varint length prefix")]
    TruncatedPrefix,

    #[error("varint length prefix does not fit in 64 bits")]
    MalformedPrefix,

    #[error("message truncated: declared {declared} bytes, stream had {available}")]
    TruncatedPayload { declared: u64, available: usize },
}

#[derive(Debug, Error)]
pub enum CiffError {
    #[error("framing: {0}")]
    Framing(#[from] FramingError),

    #[error("{kind} payload does not match schema: {source}")]
    Schema {
        kind: &'static str,
        source: prost::DecodeError,
    },

    #[error("{what}: declared {declared}, observed {observed}")]
    CountMismatch {
        what: String,
        declared: i64,
        observed: i64,
    },

    #[error("postings for term {term:?} not sorted by ascending docid (position {index})")]
    UnsortedPostings { term: String, index: usize },

    #[error("posting docid {docid} has no doc record (collection has {num_docs})")]
    DocidOutOfRange { docid: i64, num_docs: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
