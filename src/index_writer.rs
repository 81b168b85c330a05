use crate::ciff::CiffIndex;
use crate::codec::write_message;
use crate::delta::encode_gaps;
use crate::error::{CiffError, Result};

use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializes a whole collection back to a framed CIFF file. Takes the
/// index by value: docids are rewritten to d-gaps on the way out, after
/// which the in-memory form is no longer usable.
pub fn write_ciff(path: &Path, mut index: CiffIndex) -> Result<()> {
    check_counts(&index)?;

    // Encode every list before touching the filesystem, so an unsorted
    // list cannot leave a half-written file behind.
    for list in index.postings_lists.iter_mut() {
        encode_gaps(list)?;
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    info!("writing header");
    write_message(&mut writer, &index.header)?;

    info!("writing {} postings lists", index.postings_lists.len());
    for list in &index.postings_lists {
        write_message(&mut writer, list)?;
    }

    info!("writing {} doc records", index.doc_records.len());
    for record in &index.doc_records {
        write_message(&mut writer, record)?;
    }

    writer.flush()?;
    Ok(())
}

fn check_counts(index: &CiffIndex) -> Result<()> {
    if index.header.num_postings_lists != index.postings_lists.len() as i64 {
        return Err(CiffError::CountMismatch {
            what: "header postings list count".to_string(),
            declared: index.header.num_postings_lists,
            observed: index.postings_lists.len() as i64,
        });
    }
    if index.header.num_docs != index.doc_records.len() as i64 {
        return Err(CiffError::CountMismatch {
            what: "header doc record count".to_string(),
            declared: index.header.num_docs,
            observed: index.doc_records.len() as i64,
        });
    }
    Ok(())
}
