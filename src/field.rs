//! The CDX field legend.

use serde::{Deserialize, Serialize};

macro_rules! fields {
    ($($(#[$meta:meta])* $variant:ident = $code:literal, $name:literal;)+) => {
        /// A column type that may be declared in a CDX header.
        ///
        /// Each field is identified in a header by a single case-sensitive ASCII character, its
        /// [`code`](Self::code). These follow the legend published by the Internet Archive; not
        /// every field is decoded into a [`Record`](crate::Record) (see
        /// [`is_decoded`](Self::is_decoded)).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[derive(Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum Field {
            $($(#[$meta])* $variant,)+
        }

        impl Field {
            /// Every field in the legend, ordered by variant.
            pub const ALL: &'static [Field] = &[$(Field::$variant,)+];

            /// Get the header code that declares this field.
            ///
            /// ```
            /// # use cdxio::Field;
            /// assert_eq!(Field::MassagedUrl.code(), b'N');
            /// ```
            pub const fn code(self) -> u8 {
                match self {
                    $(Field::$variant => $code,)+
                }
            }

            /// Look up the field declared by a header code, if it is part of the legend.
            ///
            /// Codes are case-sensitive: `b'a'` is the original URL while `b'A'` is the
            /// canonized URL.
            pub fn from_code(code: u8) -> Option<Field> {
                match code {
                    $($code => Some(Field::$variant),)+
                    _ => None,
                }
            }

            /// A human-readable name for the field, as used in error messages.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Field::$variant => $name,)+
                }
            }
        }
    };
}

fields! {
    /// Canonized URL.
    CanonizedUrl = b'A', "canonized url";
    /// News group.
    NewsGroup = b'B', "news group";
    /// Rulespace category.
    RulespaceCategory = b'C', "rulespace category";
    /// Compressed DAT file offset.
    CompressedDatOffset = b'D', "compressed dat offset";
    /// Canonized frame.
    CanonizedFrame = b'F', "canonized frame";
    /// Multi-column language description.
    LanguageDescription = b'G', "language description";
    /// Canonized host.
    CanonizedHost = b'H', "canonized host";
    /// Canonized image.
    CanonizedImage = b'I', "canonized image";
    /// Canonized jump point.
    CanonizedJumpPoint = b'J', "canonized jump point";
    /// An FBIS "what's changed" marker.
    FbisChangedThing = b'K', "fbis changed thing";
    /// Canonized link.
    CanonizedLink = b'L', "canonized link";
    /// Meta tags (AIF).
    MetaTags = b'M', "meta tags";
    /// Massaged URL, a canonical SURT-like form of the URL used as the sort key.
    MassagedUrl = b'N', "massaged url";
    /// Canonized path.
    CanonizedPath = b'P', "canonized path";
    /// Language string.
    LanguageString = b'Q', "language string";
    /// Canonized redirect.
    CanonizedRedirect = b'R', "canonized redirect";
    /// Compressed record size in bytes.
    CompressedRecordSize = b'S', "compressed record size";
    /// Uniqueness.
    Uniqueness = b'U', "uniqueness";
    /// Offset of the record in its compressed ARC or WARC file.
    CompressedArcOffset = b'V', "compressed arc offset";
    /// Canonized URL in other href tags.
    CanonizedUrlOtherHref = b'X', "canonized url other href";
    /// Canonized URL in other src tags.
    CanonizedUrlOtherSrc = b'Y', "canonized url other src";
    /// Canonized URL found in script.
    CanonizedUrlScript = b'Z', "canonized url script";
    /// Original URL that was captured.
    OriginalUrl = b'a', "original url";
    /// Capture timestamp, as `YYYYMMDDhhmmss`.
    Timestamp = b'b', "timestamp";
    /// Old-style checksum.
    OldStyleChecksum = b'c', "old style checksum";
    /// Uncompressed DAT file offset.
    UncompressedDatOffset = b'd', "uncompressed dat offset";
    /// IP address the resource was captured from.
    Ip = b'e', "ip";
    /// Frame.
    Frame = b'f', "frame";
    /// Name of the archive file containing the record.
    Filename = b'g', "filename";
    /// Original host.
    OriginalHost = b'h', "original host";
    /// Image.
    Image = b'i', "image";
    /// Original jump point.
    OriginalJumpPoint = b'j', "original jump point";
    /// New-style checksum, usually a base32 SHA-1 payload digest.
    NewStyleChecksum = b'k', "new style checksum";
    /// Link.
    Link = b'l', "link";
    /// MIME type of the original document.
    MimeType = b'm', "mime type";
    /// ARC document length.
    ArcDocumentLength = b'n', "arc document length";
    /// Port.
    Port = b'o', "port";
    /// Original path.
    OriginalPath = b'p', "original path";
    /// Redirect target.
    Redirect = b'r', "redirect";
    /// HTTP response code.
    StatusCode = b's', "status code";
    /// Title.
    Title = b't', "title";
    /// Uncompressed ARC file offset.
    UncompressedArcOffset = b'v', "uncompressed arc offset";
    /// URL in other href tags.
    UrlOtherHref = b'x', "url other href";
    /// URL in other src tags.
    UrlOtherSrc = b'y', "url other src";
    /// URL found in script.
    UrlScript = b'z', "url script";
}

impl Field {
    /// The default CDX fields in their conventional order, `N b a m s k r M S V g`.
    pub const DEFAULTS: [Field; 11] = [
        Field::MassagedUrl,
        Field::Timestamp,
        Field::OriginalUrl,
        Field::MimeType,
        Field::StatusCode,
        Field::NewStyleChecksum,
        Field::Redirect,
        Field::MetaTags,
        Field::CompressedRecordSize,
        Field::CompressedArcOffset,
        Field::Filename,
    ];

    /// Return `true` if this is one of the [default fields](Self::DEFAULTS).
    pub fn is_default(self) -> bool {
        Self::DEFAULTS.contains(&self)
    }

    /// Return `true` if values of this field are decoded into [`Record`](crate::Record)s.
    ///
    /// Fields that are not decoded are still accepted in headers, but their columns are
    /// skipped and the corresponding record attribute is left empty.
    pub fn is_decoded(self) -> bool {
        crate::decode::decoder_for(self).is_some()
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
