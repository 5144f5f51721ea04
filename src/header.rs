//! CDX header line parsing.

use indexmap::map::IndexMap;

use crate::{Field, HeaderError, CDX_MARKER};

/// The column layout of a CDX file, as declared by its header line.
///
/// Maps each field code to the zero-based column holding its values. The index is built once
/// per file by [`parse`](Self::parse) and never changes afterward, so it can be shared freely
/// between any number of [record decodes](crate::Record::parse_line).
///
/// ```
/// # use cdxio::{Field, FieldIndex};
/// let index = FieldIndex::parse("CDX N b a m s k r M S V g").unwrap();
/// assert_eq!(index.len(), 11);
/// assert_eq!(index.column(b'N'), Some(0));
/// assert_eq!(index.position(Field::Filename), Some(10));
/// assert!(!index.contains(Field::Ip));
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FieldIndex {
    // Iteration follows the order in which codes first appear in the header.
    columns: IndexMap<u8, usize>,
}

impl FieldIndex {
    /// Parse a CDX header line.
    ///
    /// The line must begin with the `CDX` marker followed by at least one field code, each
    /// separated by any amount of whitespace. Every field code must be a single byte; codes that
    /// are not part of the CDX legend are accepted (they occupy a column that is ignored
    /// during decoding). If a code appears more than once, its last position wins.
    pub fn parse(line: &str) -> Result<FieldIndex, HeaderError> {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            None => return Err(HeaderError::Empty),
            Some(CDX_MARKER) => {}
            Some(other) => return Err(HeaderError::MissingMarker(other.to_owned())),
        }

        let mut columns = IndexMap::new();
        for (i, token) in tokens.enumerate() {
            let code = match token.as_bytes() {
                &[code] => code,
                _ => return Err(HeaderError::InvalidFieldCode(token.to_owned())),
            };
            if let Some(prev) = columns.insert(code, i) {
                debug!(
                    "Field code {:?} repeated in header; column {} replaces {}",
                    code as char, i, prev
                );
            }
        }

        if columns.is_empty() {
            return Err(HeaderError::NoFields);
        }
        trace!("Parsed CDX header with {} distinct fields", columns.len());
        Ok(FieldIndex { columns })
    }

    /// Get the column of the given field code, if the header declares it.
    pub fn column(&self, code: u8) -> Option<usize> {
        self.columns.get(&code).copied()
    }

    /// Get the column holding the given field, if the header declares it.
    pub fn position(&self, field: Field) -> Option<usize> {
        self.column(field.code())
    }

    /// Return `true` if the header declares the given field.
    ///
    /// Because unset [`Record`](crate::Record) attributes are indistinguishable from empty
    /// ones, this is the way to tell whether a field was present in the source file.
    pub fn contains(&self, field: Field) -> bool {
        self.columns.contains_key(&field.code())
    }

    /// The number of distinct field codes in the header.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Return `true` if no field codes are declared.
    ///
    /// A successfully parsed header is never empty.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over `(code, column)` pairs in the order codes first appear in the header.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.columns.iter().map(|(&code, &column)| (code, column))
    }

    /// Iterate over the declared fields that are part of the CDX legend.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.columns.keys().filter_map(|&code| Field::from_code(code))
    }
}
