#[macro_use]
extern crate log;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{command, value_parser, Arg, ArgAction};
use flate2::read::MultiGzDecoder;

use cdxio::Index;

/// Transform "-" into None to use stdio instead of a file.
fn maybe_file(p: PathBuf) -> Option<PathBuf> {
    if p.as_os_str() == "-" {
        None
    } else {
        Some(p)
    }
}

fn file_is_gzip(p: &Path) -> bool {
    p.extension().map(|ext| ext == "gz").unwrap_or(false)
}

fn open_input_stream(p: PathBuf, compressed_stream: bool) -> io::Result<Box<dyn BufRead>> {
    Ok(match maybe_file(p) {
        Some(p) => {
            let file = BufReader::new(File::open(&p)?);
            if compressed_stream || file_is_gzip(&p) {
                Box::new(BufReader::new(MultiGzDecoder::new(file)))
            } else {
                Box::new(file)
            }
        }
        None => {
            let stdin = io::stdin();
            if compressed_stream {
                Box::new(BufReader::new(MultiGzDecoder::new(stdin)))
            } else {
                Box::new(BufReader::new(stdin))
            }
        }
    })
}

fn write_records<W: Write>(index: &Index, mut out: W) -> io::Result<()> {
    for record in index.records() {
        serde_json::to_writer(&mut out, record)?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

fn write_summary<W: Write>(index: &Index, mut out: W) -> io::Result<()> {
    let codes: String = index.fields().iter().map(|(code, _)| code as char).collect();
    writeln!(out, "fields:  {}", codes)?;
    for field in index.fields().fields().filter(|f| !f.is_decoded()) {
        writeln!(out, "ignored: {} ({})", field.code() as char, field)?;
    }
    writeln!(out, "records: {}", index.records().len())
}

fn main() {
    pretty_env_logger::init();

    let matches = command!()
        .about("Parse a CDX index file and print its records as JSON lines.")
        .arg(
            Arg::new("infile")
                .help("CDX file to read, or '-' for standard input")
                .value_parser(value_parser!(PathBuf))
                .default_value("-"),
        )
        .arg(
            Arg::new("gzip")
                .long("gzip")
                .short('z')
                .help("Decompress the input (implied for files ending in .gz)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("count")
                .long("count")
                .short('c')
                .help("Print a summary of the header and record count instead of records")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let infile = matches
        .get_one::<PathBuf>("infile")
        .cloned()
        .expect("infile has a default value");
    let compressed = *matches.get_one::<bool>("gzip").expect("gzip flag is defaulted");
    let summary = *matches.get_one::<bool>("count").expect("count flag is defaulted");

    let input = match open_input_stream(infile.clone(), compressed) {
        Ok(input) => input,
        Err(e) => {
            error!("Failed to open {}: {}", infile.display(), e);
            process::exit(1);
        }
    };
    let index = match Index::read_from(input) {
        Ok(index) => index,
        Err(e) => {
            error!("Failed to read {}: {}", infile.display(), e);
            process::exit(1);
        }
    };
    info!(
        "Read {} records from {}",
        index.records().len(),
        infile.display()
    );

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    let result = if summary {
        write_summary(&index, out)
    } else {
        write_records(&index, out)
    };
    if let Err(e) = result {
        error!("Failed to write output: {}", e);
        process::exit(1);
    }
}
