//! Human-readable renderings of a decoded collection. Each dump enumerates
//! the in-memory model into a text file in the output directory.

use crate::ciff::{DocRecord, Header, PostingsList};
use crate::error::Result;

use itertools::Itertools;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn dump_header(out_dir: &Path, header: &Header) -> Result<()> {
    info!("writing header dump");
    let mut w = BufWriter::new(File::create(out_dir.join("output.header"))?);
    writeln!(w, "Version: {}", header.version)?;
    writeln!(w, "NumPostingsLists: {}", header.num_postings_lists)?;
    writeln!(w, "NumDocs: {}", header.num_docs)?;
    writeln!(w, "TotalPostingsLists: {}", header.total_postings_lists)?;
    writeln!(w, "TotalDocs: {}", header.total_docs)?;
    writeln!(
        w,
        "TotalTermsInCollection: {}",
        header.total_terms_in_collection
    )?;
    writeln!(w, "AverageDocLength: {}", header.average_doclength)?;
    writeln!(w, "Description: {}", header.description)?;
    w.flush()?;
    Ok(())
}

pub fn dump_postings(out_dir: &Path, postings_lists: &[PostingsList]) -> Result<()> {
    info!("writing postings dump");
    let mut w = BufWriter::new(File::create(out_dir.join("output.postings"))?);
    writeln!(w, "term df cf (docid, tf) ... (docid, tf)")?;
    writeln!(w, "--------------------------------------")?;
    for list in postings_lists {
        let pairs = list
            .postings
            .iter()
            .map(|p| format!("({}, {})", p.docid, p.tf))
            .join(" ");
        writeln!(w, "{} {} {} {}", list.term, list.df, list.cf, pairs)?;
    }
    w.flush()?;
    Ok(())
}

pub fn dump_dictionary(out_dir: &Path, postings_lists: &[PostingsList]) -> Result<()> {
    info!("writing dictionary dump");
    let mut w = BufWriter::new(File::create(out_dir.join("output.dict"))?);
    for list in postings_lists {
        writeln!(w, "{}", list.term)?;
    }
    w.flush()?;
    Ok(())
}

pub fn dump_doc_records(out_dir: &Path, doc_records: &[DocRecord]) -> Result<()> {
    info!("writing doc records dump");
    let mut w = BufWriter::new(File::create(out_dir.join("output.docRecords"))?);
    writeln!(w, "docid collection_docid doclength")?;
    writeln!(w, "--------------------------------")?;
    for record in doc_records {
        writeln!(
            w,
            "{} {} {}",
            record.docid, record.collection_docid, record.doclength
        )?;
    }
    w.flush()?;
    Ok(())
}
