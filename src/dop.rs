//! This module extracts the dilution of precision from *GSA* sentences of
//! the *NMEA 0183* protocol.

use std::fmt;
use std::str::FromStr;

use err::ParseError;
use lexer::{self, Fields};

const PDOP_INDEX: usize = 15;
const HDOP_INDEX: usize = 16;
const VDOP_INDEX: usize = 17;

/// `$GPGSA` and `$GNGSA` share one layout, so the talker id is not kept.
fn is_supported(sentence: &str) -> bool {
    sentence.starts_with("$GPGSA") || sentence.starts_with("$GNGSA")
}

/// Dilution of precision of the satellites used for a fix. Unitless, lower
/// is better.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DilutionOfPrecision {
    pub position_dop: f64,
    pub horizontal_dop: f64,
    pub vertical_dop: f64,
}

impl fmt::Display for DilutionOfPrecision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "PDOP {}, HDOP {}, VDOP {}",
            self.position_dop, self.horizontal_dop, self.vertical_dop
        )
    }
}

impl FromStr for DilutionOfPrecision {
    type Err = ParseError;

    fn from_str(sentence: &str) -> Result<Self, ParseError> {
        parse_dop(sentence)
    }
}

/// Parse a `$GPGSA` or `$GNGSA` sentence.
///
/// VDOP is usually the last field, so a `*<checksum>` suffix is cut off it
/// before parsing. The checksum is not verified. Receivers that append a
/// system id after VDOP (`...,3.1,1*3B`) are handled the same way, the extra
/// field is ignored.
pub fn parse_dop(sentence: &str) -> Result<DilutionOfPrecision, ParseError> {
    if !is_supported(sentence) {
        return Err(ParseError::UnsupportedSentenceType);
    }

    let fields = Fields::split(sentence);
    let pdop = fields.get(PDOP_INDEX)?;
    let hdop = fields.get(HDOP_INDEX)?;
    let vdop = lexer::strip_checksum(fields.get(VDOP_INDEX)?);

    lexer::require("PDOP", pdop)?;
    lexer::require("HDOP", hdop)?;
    lexer::require("VDOP", vdop)?;

    Ok(DilutionOfPrecision {
        position_dop: lexer::number("PDOP", pdop)?,
        horizontal_dop: lexer::number("HDOP", hdop)?,
        vertical_dop: lexer::number("VDOP", vdop)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_prefixes() {
        assert!(is_supported("$GPGSA,A"));
        assert!(is_supported("$GNGSA,A"));
        assert!(!is_supported("$gpgsa,A"));
        assert!(!is_supported("$GLGSA,A"));
        assert!(!is_supported("$GNGSV,A"));
        assert!(!is_supported(" $GPGSA,A"));
    }

    #[test]
    fn gpgsa_with_checksum_on_vdop() {
        let dop = parse_dop("$GPGSA,A,3,03,14,16,22,23,26,,,,,,,3.6,1.8,3.1*38").unwrap();
        assert_eq!(dop.position_dop, 3.6);
        assert_eq!(dop.horizontal_dop, 1.8);
        assert_eq!(dop.vertical_dop, 3.1);
    }

    #[test]
    fn gngsa_with_system_id() {
        let dop = parse_dop("$GNGSA,A,3,03,14,16,22,23,26,,,,,,,3.6,1.8,3.1,1*3B").unwrap();
        assert_eq!(dop.position_dop, 3.6);
        assert_eq!(dop.horizontal_dop, 1.8);
        assert_eq!(dop.vertical_dop, 3.1);
    }

    #[test]
    fn vdop_without_checksum() {
        let dop = parse_dop("$GPGSA,A,3,03,14,16,22,23,26,,,,,,,3.6,1.8,3.1").unwrap();
        assert_eq!(dop.vertical_dop, 3.1);
    }

    #[test]
    fn from_str() {
        let dop: DilutionOfPrecision = "$GPGSA,A,3,03,14,16,22,23,26,,,,,,,3.6,1.8,3.1*38"
            .parse()
            .unwrap();
        assert_eq!(dop.horizontal_dop, 1.8);
    }

    #[test]
    fn unsupported() {
        assert_matches!(
            parse_dop("$GPZDA,172809,12,07,1996,00,00*45"),
            Err(ParseError::UnsupportedSentenceType)
        );
        assert_matches!(
            parse_dop("$GPGGA,032739.0,2804.732835,N,08224.639709,W,1,08,0.8,19.2,M,-24.0,M,,*5B"),
            Err(ParseError::UnsupportedSentenceType)
        );
    }

    #[test]
    fn truncated() {
        assert_matches!(
            parse_dop("$GPGSA,A,3,03,14,16,22,23,26*38"),
            Err(ParseError::MalformedSentence(15, 9))
        );
        assert_matches!(
            parse_dop("$GPGSA,A,3,03,14,16,22,23,26,,,,,,,3.6,1.8*38"),
            Err(ParseError::MalformedSentence(17, 17))
        );
    }

    #[test]
    fn no_fix_is_missing_not_zero() {
        assert_matches!(
            parse_dop("$GPGSA,A,1,,,,,,,,,,,,,,,*1E"),
            Err(ParseError::MissingValue("PDOP"))
        );
        assert_matches!(
            parse_dop("$GPGSA,A,3,03,14,16,22,23,26,,,,,,,3.6,1.8,*38"),
            Err(ParseError::MissingValue("VDOP"))
        );
    }

    #[test]
    fn invalid_numbers() {
        assert_matches!(
            parse_dop("$GPGSA,A,3,03,14,16,22,23,26,,,,,,,3.6,x.8,3.1*38"),
            Err(ParseError::InvalidNumber("HDOP", ref v)) if v == "x.8"
        );
        assert_matches!(
            parse_dop("$GPGSA,A,3,03,14,16,22,23,26,,,,,,,3.6,1.8,3.1x*38"),
            Err(ParseError::InvalidNumber("VDOP", ref v)) if v == "3.1x"
        );
    }

    #[test]
    fn checksum_only_stripped_from_vdop() {
        assert_matches!(
            parse_dop("$GPGSA,A,3,03,14,16,22,23,26,,,,,,,3.6,1.8*38,3.1"),
            Err(ParseError::InvalidNumber("HDOP", _))
        );
    }
}
