#![no_main]

use libfuzzer_sys::fuzz_target;
use wireup::domain::ports::NoopSink;
use wireup::domain::services::ClosureResolver;
use wireup::{QualifiedName, TomlCatalog};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(catalog) = TomlCatalog::parse(content, std::path::Path::new("fuzz.toml")) else {
        return;
    };

    // Closure resolution must terminate on whatever attribute graph parses
    let Ok(trigger) = QualifiedName::parse("wireup.Wire") else {
        return;
    };
    let all = catalog.all();
    let closure = ClosureResolver::new(&all, &NoopSink).resolve(&trigger);
    assert!(closure.contains(&trigger));
});
