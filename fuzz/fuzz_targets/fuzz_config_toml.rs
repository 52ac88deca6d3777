#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing, with and without unknown-key tracking, must never panic
        let _ = toml::from_str::<wireup::Config>(content);
        let _ = wireup::config::parse_with_warnings(content, std::path::Path::new("fuzz.toml"));
    }
});
