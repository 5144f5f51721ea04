//! Reading whole CDX files.

use std::io::BufRead;

use crate::{Field, FieldIndex, ParseError, Record, Result};

/// The complete contents of a CDX file: its declared fields and every record.
///
/// Records are kept in file order. Since a [`Record`] alone cannot tell whether an empty
/// attribute was absent from the file or present but empty, the [`FieldIndex`] is retained
/// alongside the records and can be queried with [`has_field`](Self::has_field).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    fields: FieldIndex,
    records: Vec<Record>,
}

impl Index {
    /// Read an entire CDX file from the provided `BufRead`.
    ///
    /// The first line must be a valid header and at least one record must follow it. Reading
    /// stops at the first error, whether it comes from the input or from a malformed line,
    /// and nothing that was parsed before that point is returned.
    ///
    /// ```
    /// # use cdxio::{Field, Index};
    /// let cdx = b"CDX a b e\nhttp://example.com/ 20230731193152 203.0.113.9\n";
    /// let index = Index::read_from(&cdx[..]).unwrap();
    /// assert!(index.has_field(Field::Ip));
    /// assert!(!index.has_field(Field::Redirect));
    /// assert_eq!(index.records()[0].ip, "203.0.113.9");
    /// ```
    pub fn read_from<R: BufRead>(reader: R) -> Result<Index> {
        let mut lines = reader.lines();

        let header = match lines.next() {
            None => return Err(ParseError::EmptyFile),
            Some(line) => line?,
        };
        let fields = FieldIndex::parse(&header)?;

        let mut records = Vec::new();
        for line in lines {
            records.push(Record::parse_line(&line?, &fields)?);
        }

        if records.is_empty() {
            return Err(ParseError::NoRecords);
        }
        debug!("Read {} CDX records", records.len());
        Ok(Index { fields, records })
    }

    /// Get the fields declared by the file's header.
    pub fn fields(&self) -> &FieldIndex {
        &self.fields
    }

    /// Return `true` if the file's header declared the given field.
    pub fn has_field(&self, field: Field) -> bool {
        self.fields.contains(field)
    }

    /// Get the records in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Discard the header and take ownership of the records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl IntoIterator for Index {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Read every record from a CDX file.
///
/// Equivalent to [`Index::read_from`] followed by [`Index::into_records`].
pub fn parse<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    Index::read_from(reader).map(Index::into_records)
}

/// Read every record from CDX data held in a string.
pub fn parse_str(s: &str) -> Result<Vec<Record>> {
    parse(s.as_bytes())
}
