//! Fuzz target for sidecar label-file parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the label-file parser,
//! checking for panics, crashes, or hangs.

#![no_main]

use std::path::Path;

use jointlabel::label::from_json_str;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = from_json_str(Path::new("fuzz.png"), text);
    }
});
