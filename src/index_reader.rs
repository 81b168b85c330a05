use crate::ciff::{CiffIndex, DocRecord, Header, PostingsList};
use crate::codec::read_message;
use crate::delta::decode_gaps;
use crate::error::{CiffError, FramingError, Result};

use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Materializes a whole CIFF file: header, postings lists with docids
/// rewritten from d-gaps to absolute, then doc records.
pub fn read_ciff(path: &Path) -> Result<CiffIndex> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    info!("reading header");
    let header: Header = read_message(&mut reader)?;
    debug!("header: {:?}", header);

    info!("reading {} postings lists", header.num_postings_lists);
    let mut postings_lists = Vec::with_capacity(header.num_postings_lists.max(0) as usize);
    let progress_step = (header.num_postings_lists / 10).max(1);
    for index in 0..header.num_postings_lists {
        if index % progress_step == 0 {
            info!("postings list {}/{}", index, header.num_postings_lists);
        }
        let mut list: PostingsList = read_message(&mut reader)
            .map_err(|err| at_record(err, "postings lists", header.num_postings_lists, index))?;
        decode_gaps(&mut list)?;
        postings_lists.push(list);
    }

    info!("reading {} doc records", header.num_docs);
    let mut doc_records = Vec::with_capacity(header.num_docs.max(0) as usize);
    for index in 0..header.num_docs {
        let record: DocRecord = read_message(&mut reader)
            .map_err(|err| at_record(err, "doc records", header.num_docs, index))?;
        doc_records.push(record);
    }

    Ok(CiffIndex {
        header,
        postings_lists,
        doc_records,
    })
}

// A clean end-of-stream where the header still declares records is a count
// problem, not a framing problem.
fn at_record(err: CiffError, what: &str, declared: i64, observed: i64) -> CiffError {
    match err {
        CiffError::Framing(FramingError::Eof) => CiffError::CountMismatch {
            what: what.to_string(),
            declared,
            observed,
        },
        other => other,
    }
}
