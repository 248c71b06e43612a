//! This module extracts the altitude above mean sea level and the height of
//! the geoid from *GGA* and *GNS* sentences of the *NMEA 0183* protocol.

use std::fmt;
use std::str::FromStr;

use err::ParseError;
use lexer::{self, Fields};

const ALTITUDE_INDEX: usize = 9;
const GNS_GEOID_HEIGHT_INDEX: usize = 10;
const GGA_GEOID_HEIGHT_INDEX: usize = 11;

/// Sentences that carry an altitude and a geoid height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AltitudeSentence {
    /// `$GPGGA`, GPS fix data.
    Gpgga,
    /// `$GNGNS`, multi-constellation fix data.
    Gngns,
    /// `$GNGGA`, multi-constellation GGA.
    Gngga,
}

impl AltitudeSentence {
    /// Recognizes the sentence by an exact, case-sensitive prefix.
    pub fn from_sentence(sentence: &str) -> Option<Self> {
        if sentence.starts_with("$GPGGA") {
            Some(AltitudeSentence::Gpgga)
        } else if sentence.starts_with("$GNGNS") {
            Some(AltitudeSentence::Gngns)
        } else if sentence.starts_with("$GNGGA") {
            Some(AltitudeSentence::Gngga)
        } else {
            None
        }
    }

    /// GGA has an altitude unit field (`M`) between altitude and geoid
    /// height, GNS does not.
    #[inline]
    pub fn geoid_height_index(self) -> usize {
        match self {
            AltitudeSentence::Gngns => GNS_GEOID_HEIGHT_INDEX,
            AltitudeSentence::Gpgga | AltitudeSentence::Gngga => GGA_GEOID_HEIGHT_INDEX,
        }
    }
}

/// Altitude of a fix, as reported by the receiver. Both values are in meters
/// and passed through without conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoidAltitude {
    /// Antenna altitude above/below mean-sea-level (geoid).
    pub altitude_msl: f64,
    /// Height of the geoid above the WGS-84 ellipsoid, negative if
    /// mean-sea-level is below the ellipsoid.
    pub height_of_geoid: f64,
}

impl fmt::Display for GeoidAltitude {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "altitude MSL {} m, height of geoid {} m",
            self.altitude_msl, self.height_of_geoid
        )
    }
}

impl FromStr for GeoidAltitude {
    type Err = ParseError;

    fn from_str(sentence: &str) -> Result<Self, ParseError> {
        parse_altitude(sentence)
    }
}

/// Parse a `$GPGGA`, `$GNGNS` or `$GNGGA` sentence, e.g.
///
/// ```
/// let alt = lifeboat::parse_altitude(
///     "$GPGGA,032739.0,2804.732835,N,08224.639709,W,1,08,0.8,19.2,M,-24.0,M,,*5B",
/// ).unwrap();
/// assert_eq!(alt.altitude_msl, 19.2);
/// assert_eq!(alt.height_of_geoid, -24.0);
/// ```
///
/// Any other sentence yields `ParseError::UnsupportedSentenceType`. No
/// partial result is returned: if either value can't be parsed the whole
/// call fails.
pub fn parse_altitude(sentence: &str) -> Result<GeoidAltitude, ParseError> {
    let kind = match AltitudeSentence::from_sentence(sentence) {
        Some(kind) => kind,
        None => return Err(ParseError::UnsupportedSentenceType),
    };

    let fields = Fields::split(sentence);
    let altitude = fields.get(ALTITUDE_INDEX)?;
    let geoid_height = fields.get(kind.geoid_height_index())?;

    lexer::require("altitude", altitude)?;
    lexer::require("geoid height", geoid_height)?;

    Ok(GeoidAltitude {
        altitude_msl: lexer::number("altitude", altitude)?,
        height_of_geoid: lexer::number("geoid height", geoid_height)?,
    })
}
