//! The decoded form of a CDX line.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{FieldIndex, Result};

fn is_zero<T: Default + PartialEq>(x: &T) -> bool {
    *x == T::default()
}

/// A single line of a CDX file.
///
/// Every field of the CDX legend has a corresponding attribute, named after the
/// [`Field`](crate::Field) variant. Attributes for fields the header did not declare, and for
/// fields that are not [decoded](crate::Field::is_decoded), hold their type's default value:
/// an empty string, zero, or the Unix epoch for [`timestamp`](Self::timestamp). Because a
/// declared field may also legitimately be empty, the [`FieldIndex`] of the file is the only
/// way to tell which attributes were actually present.
///
/// The placeholder `-` used by many CDX writers for unavailable values is stored as-is, never
/// translated to an empty string.
///
/// When serialized, optional attributes are omitted if they are empty.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    // Default fields, in their conventional CDX order
    /// `N`: massaged URL.
    pub massaged_url: String,
    /// `b`: capture date and time, in UTC.
    pub timestamp: DateTime<Utc>,
    /// `a`: original URL.
    pub original_url: String,
    /// `m`: MIME type of the original document.
    pub mime_type: String,
    /// `s`: HTTP response code.
    pub status_code: i32,
    /// `k`: new-style checksum.
    pub new_style_checksum: String,
    /// `r`: redirect target.
    pub redirect: String,
    /// `M`: meta tags.
    pub meta_tags: String,
    /// `S`: compressed record size.
    pub compressed_record_size: i64,
    /// `V`: offset of the record in its compressed ARC or WARC file.
    pub compressed_arc_offset: i64,
    /// `g`: name of the archive file containing the record.
    pub filename: String,

    // Optional fields
    #[serde(skip_serializing_if = "String::is_empty")]
    pub canonized_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub news_group: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rulespace_category: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub compressed_dat_offset: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub canonized_frame: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub language_description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub canonized_host: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub canonized_image: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub canonized_jump_point: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fbis_changed_thing: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub canonized_link: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub canonized_path: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub language_string: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub canonized_redirect: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uniqueness: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub canonized_url_other_href: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub canonized_url_other_src: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub canonized_url_script: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub old_style_checksum: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub uncompressed_dat_offset: i64,
    /// `e`: IP address the resource was captured from.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ip: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub frame: String,
    /// `h`: original host.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub original_host: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub original_jump_point: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub link: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub arc_document_length: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub port: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub original_path: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub uncompressed_arc_offset: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url_other_href: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url_other_src: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url_script: String,
}

impl Record {
    /// Decode one data line according to the columns declared by `fields`.
    ///
    /// The line is split on runs of whitespace. It must have at least as many columns as
    /// `fields` has distinct field codes; beyond that, any declared column that the line does
    /// not reach is silently left unset.
    ///
    /// ```
    /// # use cdxio::{FieldIndex, Record};
    /// let fields = FieldIndex::parse("CDX a s r").unwrap();
    /// let record = Record::parse_line("https://example.com/ 301 -", &fields).unwrap();
    /// assert_eq!(record.original_url, "https://example.com/");
    /// assert_eq!(record.status_code, 301);
    /// assert_eq!(record.redirect, "-");
    /// ```
    pub fn parse_line(line: &str, fields: &FieldIndex) -> Result<Record> {
        crate::decode::decode_line(line, fields)
    }
}
