#![no_main]

use libfuzzer_sys::fuzz_target;
use wireup::domain::entities::{merge, parse_manifest, render_manifest};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    let lines = parse_manifest(content);
    let merged = merge(&lines, &lines);

    // Merging is idempotent and rendering round-trips
    assert_eq!(merge(&merged, &lines), merged);
    assert_eq!(parse_manifest(&render_manifest(&merged)), merged);
});
