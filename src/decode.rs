//! Decoding of CDX data lines into [`Record`]s.
//!
//! Which fields are decoded, and how, is controlled entirely by [`DECODERS`]. Fields that
//! have no entry there are accepted in headers but never populated.

use chrono::{DateTime, Utc};
use phf::phf_map;

use crate::{parse_timestamp, Field, FieldIndex, ParseError, Record, Result};

/// How to store one column of a data line in a [`Record`].
///
/// Each variant holds an accessor for the attribute that receives the parsed value.
#[derive(Clone, Copy)]
pub(crate) enum Decoder {
    /// Copy the column verbatim.
    Text(fn(&mut Record) -> &mut String),
    /// Parse the column as a compact `YYYYMMDDhhmmss` timestamp.
    Timestamp(fn(&mut Record) -> &mut DateTime<Utc>),
    /// Parse the column as a base-10 32-bit integer.
    Int(fn(&mut Record) -> &mut i32),
    /// Parse the column as a base-10 64-bit integer.
    Long(fn(&mut Record) -> &mut i64),
}

// Legend fields without an entry here (port, title and the canonized columns among others)
// are never populated.
static DECODERS: phf::Map<u8, Decoder> = phf_map! {
    b'N' => Decoder::Text(|r| &mut r.massaged_url),
    b'b' => Decoder::Timestamp(|r| &mut r.timestamp),
    b'a' => Decoder::Text(|r| &mut r.original_url),
    b'm' => Decoder::Text(|r| &mut r.mime_type),
    b's' => Decoder::Int(|r| &mut r.status_code),
    b'k' => Decoder::Text(|r| &mut r.new_style_checksum),
    b'r' => Decoder::Text(|r| &mut r.redirect),
    b'M' => Decoder::Text(|r| &mut r.meta_tags),
    b'S' => Decoder::Long(|r| &mut r.compressed_record_size),
    b'V' => Decoder::Long(|r| &mut r.compressed_arc_offset),
    b'g' => Decoder::Text(|r| &mut r.filename),
    b'e' => Decoder::Text(|r| &mut r.ip),
    b'h' => Decoder::Text(|r| &mut r.original_host),
};

/// Get the decoder for a field, if values of that field are stored in records.
pub(crate) fn decoder_for(field: Field) -> Option<&'static Decoder> {
    DECODERS.get(&field.code())
}

impl Decoder {
    fn apply(&self, field: Field, value: &str, record: &mut Record) -> Result<()> {
        match *self {
            Decoder::Text(attr) => *attr(record) = value.to_owned(),
            Decoder::Timestamp(attr) => {
                *attr(record) =
                    parse_timestamp(value).map_err(|source| ParseError::InvalidTimestamp {
                        value: value.to_owned(),
                        source,
                    })?
            }
            Decoder::Int(attr) => *attr(record) = parse_int(field, value)?,
            Decoder::Long(attr) => *attr(record) = parse_int(field, value)?,
        }
        Ok(())
    }
}

fn parse_int<T: std::str::FromStr<Err = std::num::ParseIntError>>(
    field: Field,
    value: &str,
) -> Result<T> {
    value.parse().map_err(|source| ParseError::InvalidInteger {
        field,
        value: value.to_owned(),
        source,
    })
}

pub(crate) fn decode_line(line: &str, fields: &FieldIndex) -> Result<Record> {
    let columns: Vec<&str> = line.split_whitespace().collect();
    // This only guards against short lines; a duplicated code may still point past the end.
    if columns.len() < fields.len() {
        return Err(ParseError::InsufficientFields {
            expected: fields.len(),
            found: columns.len(),
        });
    }

    let mut record = Record::default();
    for (code, column) in fields.iter() {
        let value = match columns.get(column) {
            Some(value) => value,
            None => continue,
        };
        match Field::from_code(code).and_then(|field| Some((field, decoder_for(field)?))) {
            Some((field, decoder)) => decoder.apply(field, value, &mut record)?,
            None => trace!("Skipping column {} with undecoded field {:?}", column, code as char),
        }
    }
    Ok(record)
}
