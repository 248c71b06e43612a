//! Reads NMEA sentences line by line from a file or stdin and prints the
//! altitude and DOP values found. Set `RUST_LOG=debug` to see every skipped
//! line.

extern crate env_logger;
extern crate lifeboat;
#[macro_use]
extern crate log;

use log::Level;

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::str;

use lifeboat::{parse_altitude, parse_dop, ParseError};

/// Unrelated sentences are expected in a mixed stream, empty fields mean the
/// receiver has no fix yet. Only broken sentences are errors.
fn level(err: &ParseError) -> Level {
    match *err {
        ParseError::UnsupportedSentenceType => Level::Debug,
        ParseError::MissingValue(_) => Level::Warn,
        ParseError::MalformedSentence(..) | ParseError::InvalidNumber(..) => Level::Error,
    }
}

fn report(what: &str, sentence: &str, err: &ParseError) {
    log!(level(err), "No {} from {}: {}", what, sentence, err);
}

/// Parses every line of `input` and writes the values found to `out`.
///
/// A line that is not UTF-8 is logged and skipped; only I/O errors end the
/// run.
fn run<R: BufRead, W: Write>(mut input: R, out: &mut W) -> Result<(), io::Error> {
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        line_no += 1;

        let line = match str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                error!("Skipping line {}: {}", line_no, e);
                continue;
            }
        };
        let sentence = line.trim_end_matches(|c| c == '\r' || c == '\n');
        if sentence.is_empty() {
            continue;
        }

        match parse_altitude(sentence) {
            Ok(alt) => writeln!(out, "{}", alt)?,
            Err(e) => report("geoid altitude", sentence, &e),
        }
        match parse_dop(sentence) {
            Ok(dop) => writeln!(out, "{}", dop)?,
            Err(e) => report("DOP", sentence, &e),
        }
    }
}

fn main() -> Result<(), io::Error> {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match env::args_os().nth(1) {
        Some(path) => {
            info!("Reading NMEA from {:?}", path);
            run(BufReader::new(File::open(path)?), &mut out)
        }
        None => {
            let stdin = io::stdin();
            let lock = stdin.lock();
            run(lock, &mut out)
        }
    }
}
