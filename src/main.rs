mod ciff;
mod codec;
mod delta;
mod dump;
mod error;
mod index_reader;
mod index_writer;
mod quantize;
mod ranking;
mod varint;

#[cfg(test)]
mod varint_tests;

use crate::dump::{dump_dictionary, dump_doc_records, dump_header, dump_postings};
use crate::error::Result;
use crate::index_reader::read_ciff;
use crate::index_writer::write_ciff;
use crate::quantize::{quantize_index, QuantizePolicy, ScaleEndpoints};
use crate::ranking::{Scorer, DEFAULT_B, DEFAULT_K1};

use clap::Parser;
use log::{error, info};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Reads a CIFF index and writes quantized and/or human-readable versions of it.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// CIFF file to read
    ciff_file: PathBuf,

    /// Target output directory, created if missing. Existing files are
    /// overwritten!
    #[arg(long, default_value = "output")]
    output_directory: PathBuf,

    /// Write a quantized CIFF file (q-<input name>) into the output directory
    #[arg(long)]
    qciff: bool,

    /// Write a human-readable dump of the header
    #[arg(long)]
    header: bool,

    /// Write the term dictionary, one term per line
    #[arg(long)]
    dictionary: bool,

    /// Write a human-readable dump of the postings lists
    #[arg(long)]
    postings: bool,

    /// Write a human-readable dump of the doc records
    #[arg(long)]
    doc_records: bool,

    /// BM25 term-frequency saturation rate
    #[arg(long, default_value_t = DEFAULT_K1)]
    k1: f64,

    /// BM25 length-normalization strength
    #[arg(long, default_value_t = DEFAULT_B)]
    b: f64,

    /// Bits of quantized impact precision
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..=30))]
    bits: u32,

    /// Quantize onto the full [0, 2^bits) range instead of reserving impact 0
    #[arg(long)]
    full_range: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => {
            info!("complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut index = read_ciff(&args.ciff_file)?;

    if args.qciff {
        info!("quantizing index");
        let scorer = Scorer {
            k1: args.k1,
            b: args.b,
            num_docs: index.header.num_docs,
            average_doc_length: index.header.average_doclength,
        };
        let policy = QuantizePolicy {
            bits: args.bits,
            endpoints: if args.full_range {
                ScaleEndpoints::Full
            } else {
                ScaleEndpoints::ReserveZero
            },
            ..QuantizePolicy::default()
        };
        quantize_index(
            &mut index.postings_lists,
            &index.doc_records,
            &scorer,
            &policy,
        )?;
    }

    fs::create_dir_all(&args.output_directory)?;

    if args.header {
        dump_header(&args.output_directory, &index.header)?;
    }
    if args.dictionary {
        dump_dictionary(&args.output_directory, &index.postings_lists)?;
    }
    if args.postings {
        dump_postings(&args.output_directory, &index.postings_lists)?;
    }
    if args.doc_records {
        dump_doc_records(&args.output_directory, &index.doc_records)?;
    }

    if args.qciff {
        let input_name = args
            .ciff_file
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("index.ciff");
        let out_path = args.output_directory.join(format!("q-{}", input_name));
        info!("writing quantized ciff to {}", out_path.display());
        write_ciff(&out_path, index)?;
    }

    Ok(())
}
