use std::io::{self, BufRead, BufReader, Read};

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use crate::{parse, parse_str, Field, HeaderError, Index, ParseError, Record};

const HEADER: &str = "CDX N b a m s k r M S V g\n";

fn example_record(filename: &str) -> Record {
    Record {
        massaged_url: "com,example)/".into(),
        timestamp: Utc.with_ymd_and_hms(2023, 7, 31, 19, 31, 52).unwrap(),
        original_url: "https://example.com/".into(),
        mime_type: "text/html".into(),
        status_code: 200,
        new_style_checksum: "K5UZWMOAOHAFAVNO2QBMBBCMGAAC7K3J".into(),
        redirect: "-".into(),
        meta_tags: "-".into(),
        compressed_record_size: 1234,
        compressed_arc_offset: 5678,
        filename: filename.into(),
        ..Default::default()
    }
}

#[test]
fn parses_single_record() {
    let input = "CDX N b a m s k r M S V g\n\
                 com,example)/ 20230731193152 https://example.com/ text/html 200 \
                 K5UZWMOAOHAFAVNO2QBMBBCMGAAC7K3J - - 1234 5678 example.warc.gz\n";

    assert_eq!(parse_str(input), Ok(vec![example_record("example.warc.gz")]));
}

#[test]
fn parses_optional_fields() {
    let input = "CDX N b a m s k r M S V g e h\n\
                 com,example)/ 20230731193152 https://example.com/ text/html 200 \
                 K5UZWMOAOHAFAVNO2QBMBBCMGAAC7K3J - - 1234 5678 example.warc.gz \
                 192.168.1.1 example.com\n";

    let mut expected = example_record("example.warc.gz");
    expected.ip = "192.168.1.1".into();
    expected.original_host = "example.com".into();
    assert_eq!(parse_str(input), Ok(vec![expected]));
}

#[test]
fn preserves_record_order() {
    let input = "CDX N b a m s k r M S V g\n\
                 com,example)/ 20230731193152 https://example.com/ text/html 200 \
                 K5UZWMOAOHAFAVNO2QBMBBCMGAAC7K3J - - 1234 5678 example1.warc.gz\n\
                 org,example)/ 20230731193153 https://example.org/ text/plain 404 \
                 L6VZXNPAPIRGBWOP3RCNCDNDHABD8L4K - - 5678 9012 example2.warc.gz\n";

    let second = Record {
        massaged_url: "org,example)/".into(),
        timestamp: Utc.with_ymd_and_hms(2023, 7, 31, 19, 31, 53).unwrap(),
        original_url: "https://example.org/".into(),
        mime_type: "text/plain".into(),
        status_code: 404,
        new_style_checksum: "L6VZXNPAPIRGBWOP3RCNCDNDHABD8L4K".into(),
        redirect: "-".into(),
        meta_tags: "-".into(),
        compressed_record_size: 5678,
        compressed_arc_offset: 9012,
        filename: "example2.warc.gz".into(),
        ..Default::default()
    };
    assert_eq!(
        parse_str(input),
        Ok(vec![example_record("example1.warc.gz"), second])
    );
}

#[test]
fn accepts_crlf_and_missing_final_newline() {
    let input = "CDX N b a m s k r M S V g\r\n\
                 com,example)/ 20230731193152 https://example.com/ text/html 200 \
                 K5UZWMOAOHAFAVNO2QBMBBCMGAAC7K3J - - 1234 5678 example.warc.gz";

    assert_eq!(parse_str(input), Ok(vec![example_record("example.warc.gz")]));
}

#[test]
fn empty_input() {
    assert_eq!(parse_str(""), Err(ParseError::EmptyFile));
}

#[test]
fn header_only() {
    assert_eq!(parse_str(HEADER), Err(ParseError::NoRecords));
    assert_eq!(parse_str("CDX N b a"), Err(ParseError::NoRecords));
}

#[test]
fn invalid_header() {
    let err = parse_str("INVALID HEADER\n").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidHeader(HeaderError::MissingMarker("INVALID".into()))
    );
    assert!(err.to_string().starts_with("invalid CDX header"), "{}", err);

    assert_eq!(
        parse_str("\nCDX N b\n"),
        Err(ParseError::InvalidHeader(HeaderError::Empty))
    );
}

#[test]
fn insufficient_fields() {
    let input = format!("{}com,example)/ 20230731193152\n", HEADER);
    assert_eq!(
        parse_str(&input),
        Err(ParseError::InsufficientFields {
            expected: 11,
            found: 2
        })
    );
}

#[test]
fn blank_data_line_is_malformed() {
    let input = "CDX a\nhttp://example.com/\n\nhttp://example.org/\n";
    assert_eq!(
        parse_str(input),
        Err(ParseError::InsufficientFields {
            expected: 1,
            found: 0
        })
    );
}

#[test]
fn one_bad_record_fails_everything() {
    let input = "CDX a s\n\
                 http://example.com/ 200\n\
                 http://example.com/a 2OO\n\
                 http://example.com/b 404\n";
    match parse_str(input) {
        Err(ParseError::InvalidInteger { field, value, .. }) => {
            assert_eq!(field, Field::StatusCode);
            assert_eq!(value, "2OO");
        }
        other => panic!("expected InvalidInteger, got {:?}", other),
    }
}

#[test]
fn invalid_timestamp_names_token() {
    let input = format!(
        "{}com,example)/ INVALIDTIME https://example.com/ text/html 200 \
         K5UZWMOAOHAFAVNO2QBMBBCMGAAC7K3J - - 1234 5678 example.warc.gz\n",
        HEADER
    );
    let err = parse_str(&input).unwrap_err();
    assert!(matches!(err, ParseError::InvalidTimestamp { ref value, .. } if value == "INVALIDTIME"));
    assert!(err.to_string().starts_with("invalid timestamp"), "{}", err);
}

/// Yields its data, then fails.
struct FailingReader<'a>(&'a [u8]);

impl<'a> Read for FailingReader<'a> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.0.is_empty() {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "lost the input"));
        }
        let n = self.0.read(buf)?;
        Ok(n)
    }
}

#[test]
fn read_errors_are_reported() {
    let reader = BufReader::new(FailingReader(b"CDX a\nhttp://example.com/\n"));
    let err = parse(reader).unwrap_err();
    assert_eq!(
        err,
        ParseError::Io(io::Error::new(io::ErrorKind::ConnectionReset, ""))
    );
}

#[test]
fn invalid_utf8_is_an_io_error() {
    let input: &[u8] = b"CDX a\nhttp://example.com/\xff\n";
    match parse(input) {
        Err(ParseError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::InvalidData),
        other => panic!("expected an I/O error, got {:?}", other),
    }
}

#[test]
fn index_retains_header() {
    let input = "CDX a s o\nhttp://example.com/ 200 80\n";
    let index = Index::read_from(input.as_bytes()).unwrap();

    assert!(index.has_field(Field::StatusCode));
    // Declared but never decoded
    assert!(index.has_field(Field::Port));
    assert_eq!(index.records()[0].port, 0);
    assert!(!index.has_field(Field::Redirect));
    assert_eq!(index.fields().len(), 3);

    let records: Vec<Record> = index.into_iter().collect();
    assert_eq!(records.len(), 1);
}

#[test]
fn parses_from_any_bufread() {
    fn count<R: BufRead>(r: R) -> usize {
        parse(r).map(|records| records.len()).unwrap_or(0)
    }
    let input = "CDX a\nhttp://example.com/\nhttp://example.org/\n";
    assert_eq!(count(input.as_bytes()), 2);
    assert_eq!(count(BufReader::with_capacity(3, input.as_bytes())), 2);
}
