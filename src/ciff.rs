//! In-memory model of the Common Index File Format.
//!
//! Tag numbers follow the published CIFF protobuf schema, so files written
//! here remain readable by other CIFF consumers.

use prost::Message;

/// A record kind that travels as one framed message in a CIFF stream.
pub trait CiffRecord: Message + Default {
    const KIND: &'static str;
}

#[derive(::prost::Message, Clone, PartialEq)]
pub struct Header {
    #[prost(int32, tag = "1")]
    pub version: i32,

    /// Count of PostingsList messages that physically follow the header.
    #[prost(int64, tag = "2")]
    pub num_postings_lists: i64,

    /// Count of DocRecord messages that follow the postings lists.
    #[prost(int64, tag = "3")]
    pub num_docs: i64,

    #[prost(int64, tag = "4")]
    pub total_postings_lists: i64,

    #[prost(int64, tag = "5")]
    pub total_docs: i64,

    #[prost(int64, tag = "6")]
    pub total_terms_in_collection: i64,

    #[prost(double, tag = "7")]
    pub average_doclength: f64,

    #[prost(string, tag = "8")]
    pub description: String,
}

#[derive(::prost::Message, Clone, PartialEq)]
pub struct Posting {
    /// On disk this is a d-gap from the previous posting (the first is
    /// absolute); in memory it is always absolute.
    #[prost(int64, tag = "1")]
    pub docid: i64,

    #[prost(int32, tag = "2")]
    pub tf: i32,
}

#[derive(::prost::Message, Clone, PartialEq)]
pub struct PostingsList {
    #[prost(string, tag = "1")]
    pub term: String,

    /// Must equal postings.len()
    #[prost(int64, tag = "2")]
    pub df: i64,

    /// Total occurrences across the collection
    #[prost(int64, tag = "3")]
    pub cf: i64,

    #[prost(message, repeated, tag = "4")]
    pub postings: Vec<Posting>,
}

#[derive(::prost::Message, Clone, PartialEq)]
pub struct DocRecord {
    /// Dense, zero-based docid assigned by the index producer
    #[prost(int32, tag = "1")]
    pub docid: i32,

    /// External/original document identifier
    #[prost(string, tag = "2")]
    pub collection_docid: String,

    #[prost(int32, tag = "3")]
    pub doclength: i32,
}

impl CiffRecord for Header {
    const KIND: &'static str = "header";
}

impl CiffRecord for PostingsList {
    const KIND: &'static str = "postings list";
}

impl CiffRecord for DocRecord {
    const KIND: &'static str = "doc record";
}

/// A whole CIFF collection materialized in memory. Postings hold absolute
/// docids; `doc_records` is indexed by absolute docid.
#[derive(Debug, Clone, PartialEq)]
pub struct CiffIndex {
    pub header: Header,
    pub postings_lists: Vec<PostingsList>,
    pub doc_records: Vec<DocRecord>,
}
