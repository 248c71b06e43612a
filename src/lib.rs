//! Extracts altitude, geoid height and dilution of precision from single
//! *NMEA 0183* sentences (`GGA`, `GNS` and `GSA`).
//!
//! Both parsers are pure functions. They never panic and report every
//! failure as a [`ParseError`](err/enum.ParseError.html); logging is left to
//! the caller.

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
extern crate arrayvec;
#[macro_use]
extern crate quick_error;

pub mod altitude;
pub mod dop;
pub mod err;
mod lexer;

pub use altitude::{parse_altitude, AltitudeSentence, GeoidAltitude};
pub use dop::{parse_dop, DilutionOfPrecision};
pub use err::ParseError;
