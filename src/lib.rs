//! Tools for reading CDX (capture index) files.
//!
//! ## Background
//!
//! CDX files index the contents of web archives. Each line after the first describes a single
//! captured resource, usually a record in some [WARC](https://iipc.github.io/warc-specifications/)
//! or ARC file, with enough information to locate it: the URL that was captured, when it was
//! captured, and the name of the archive file and byte offset where the record can be found.
//! The format originated at the [Internet Archive](https://archive.org) and remains in wide use by
//! wayback machines and other replay tools.
//!
//! ## CDX structure
//!
//! The first line of a CDX file is a header declaring which fields appear in each column. It
//! begins with the literal `CDX` and is followed by single-character field codes:
//!
//! ```text
//! CDX N b a m s k r M S V g
//! com,example)/ 20230731193152 https://example.com/ text/html 200 K5UZWMOAOHAFAVNO2QBMBBCMGAAC7K3J - - 1234 5678 example.warc.gz
//! ```
//!
//! Columns are separated by any amount of whitespace. A value of `-` conventionally means a
//! value is unavailable, but this library preserves it verbatim: it is up to the consumer to
//! decide whether a `-` redirect means "none" or something else.
//!
//! ## Library structure
//!
//! [`FieldIndex`] is the parsed form of a header line, mapping field codes to columns. A
//! [`Record`] is decoded from each data line with [`Record::parse_line`]. Most users will want
//! [`Index::read_from`] or the [`parse`] shortcut, which read an entire file:
//!
//! ```
//! let cdx = "CDX N b a m s k r M S V g
//! com,example)/ 20230731193152 https://example.com/ text/html 200 K5UZWMOAOHAFAVNO2QBMBBCMGAAC7K3J - - 1234 5678 example.warc.gz
//! ";
//! let records = cdxio::parse_str(cdx).unwrap();
//! assert_eq!(records[0].status_code, 200);
//! assert_eq!(records[0].filename, "example.warc.gz");
//! ```
//!
//! Parsing is all-or-nothing: the first malformed line causes the whole parse to fail with a
//! [`ParseError`], and no partial results are returned.

#[macro_use]
extern crate log;

use std::num::ParseIntError;

use thiserror::Error;

mod decode;
mod field;
mod header;
mod index;
mod record;
#[cfg(test)]
mod tests;
mod timestamp;

pub use field::Field;
pub use header::FieldIndex;
pub use index::{parse, parse_str, Index};
pub use record::Record;
pub use timestamp::{parse_timestamp, TimestampError};

/// The literal marker that begins every CDX header line.
pub const CDX_MARKER: &str = "CDX";

/// Reasons it may be impossible to parse a CDX file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input contained no lines at all.
    #[error("empty CDX file")]
    EmptyFile,
    /// The first line is not a valid CDX header.
    #[error("invalid CDX header: {0}")]
    InvalidHeader(#[from] HeaderError),
    /// A data line has fewer columns than the header declares fields.
    #[error("insufficient fields in CDX record: expected at least {expected}, found {found}")]
    InsufficientFields { expected: usize, found: usize },
    /// The `b` column could not be parsed as a compact timestamp.
    #[error("invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        source: TimestampError,
    },
    /// A numeric column could not be parsed as a base-10 integer.
    #[error("invalid {} {value:?}: {source}", .field.name())]
    InvalidInteger {
        field: Field,
        value: String,
        source: ParseIntError,
    },
    /// The header was valid but no records followed it.
    #[error("no records found in CDX file")]
    NoRecords,
    /// An I/O error occured while trying to read the input.
    #[error("error reading input: {0}")]
    Io(#[from] std::io::Error),
}

impl std::cmp::PartialEq for ParseError {
    fn eq(&self, other: &Self) -> bool {
        use ParseError::*;

        match (self, other) {
            (EmptyFile, EmptyFile) | (NoRecords, NoRecords) => true,
            (InvalidHeader(x), InvalidHeader(y)) => x == y,
            (
                InsufficientFields {
                    expected: e1,
                    found: f1,
                },
                InsufficientFields {
                    expected: e2,
                    found: f2,
                },
            ) => e1 == e2 && f1 == f2,
            (
                InvalidTimestamp {
                    value: v1,
                    source: s1,
                },
                InvalidTimestamp {
                    value: v2,
                    source: s2,
                },
            ) => v1 == v2 && s1 == s2,
            (
                InvalidInteger {
                    field: f1,
                    value: v1,
                    source: s1,
                },
                InvalidInteger {
                    field: f2,
                    value: v2,
                    source: s2,
                },
            ) => f1 == f2 && v1 == v2 && s1 == s2,
            (Io(e1), Io(e2)) => e1.kind() == e2.kind(),
            (_, _) => false,
        }
    }
}

/// Ways in which a CDX header line may be malformed.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum HeaderError {
    /// The header line is blank.
    #[error("header line is empty")]
    Empty,
    /// The first token is not the `CDX` marker.
    ///
    /// The contained value is the token that was found instead.
    #[error("expected \"CDX\" marker, found {0:?}")]
    MissingMarker(String),
    /// The marker is not followed by any field codes.
    #[error("no field codes follow the CDX marker")]
    NoFields,
    /// A field code is not exactly one character long.
    #[error("invalid field specifier in header: {0}")]
    InvalidFieldCode(String),
}

/// Shorthand for results of parsing CDX data.
pub type Result<T> = std::result::Result<T, ParseError>;
