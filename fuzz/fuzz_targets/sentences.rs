#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate lifeboat;

use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(sentence) = str::from_utf8(data) {
        let _ = lifeboat::parse_altitude(sentence);
        let _ = lifeboat::parse_dop(sentence);
    }
});
