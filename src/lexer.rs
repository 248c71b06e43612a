//! Splitting a sentence into positional fields and lexing the numeric ones.

use arrayvec::ArrayVec;

use std::str::FromStr;

use err::ParseError;

/// Fields beyond this are never addressed by any parser.
pub const MAX_FIELDS: usize = 32;

const FIELD_SEPARATOR: char = ',';
const CHECKSUM_DELIMITER: char = '*';

/// The comma separated fields of one sentence, borrowed from the input.
///
/// Index 0 is the `$` header (talker id and sentence type). Empty fields
/// between consecutive commas are kept, so positions always line up with the
/// sentence layout.
#[derive(Debug)]
pub struct Fields<'a> {
    fields: ArrayVec<[&'a str; MAX_FIELDS]>,
}

impl<'a> Fields<'a> {
    pub fn split(sentence: &'a str) -> Self {
        Fields {
            fields: sentence.split(FIELD_SEPARATOR).take(MAX_FIELDS).collect(),
        }
    }

    /// Number of fields, including the header.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the field at `index` or `ParseError::MalformedSentence` if the
    /// sentence is too short.
    pub fn get(&self, index: usize) -> Result<&'a str, ParseError> {
        match self.fields.get(index) {
            Some(field) => Ok(*field),
            None => Err(ParseError::MalformedSentence(index, self.len())),
        }
    }
}

/// Cuts a trailing `*<checksum>` off a field. The checksum is not validated.
/// Fields without a `*` are returned unchanged.
#[inline]
pub fn strip_checksum(field: &str) -> &str {
    match field.find(CHECKSUM_DELIMITER) {
        Some(pos) => &field[..pos],
        None => field,
    }
}

/// Fails with `ParseError::MissingValue` if `field` is empty.
#[inline]
pub fn require(name: &'static str, field: &str) -> Result<(), ParseError> {
    if field.is_empty() {
        return Err(ParseError::MissingValue(name));
    }
    Ok(())
}

/// Parse `field` as an NMEA decimal number: an optional sign followed by
/// digits with at most one decimal dot, e.g. `-24.0`, `18.1` or `3`.
///
/// Exponents, whitespace, `inf` and `nan` are rejected even though
/// `f64::from_str` would accept them.
pub fn number(name: &'static str, field: &str) -> Result<f64, ParseError> {
    Some(field)
        .filter(|f| is_decimal(f.as_bytes()))
        .and_then(|f| f64::from_str(f).ok())
        .ok_or_else(|| ParseError::InvalidNumber(name, field.to_owned()))
}

fn is_decimal(bytes: &[u8]) -> bool {
    let digits = match bytes.first() {
        Some(b'+') | Some(b'-') => &bytes[1..],
        _ => bytes,
    };

    let mut seen_digit = false;
    let mut seen_dot = false;
    for &c in digits {
        match c {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}
