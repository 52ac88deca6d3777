//! Scenario: types appear over several passes, then a later build adds more

use crate::common::*;
use tempfile::tempdir;
use wireup::{LocalResourceStore, MemoryResourceStore, Severity};

fn found_notes(sink: &wireup::infrastructure::CollectingSink) -> Vec<String> {
    sink.diagnostics()
        .into_iter()
        .filter(|d| d.severity == Severity::Note && d.message.starts_with("Found "))
        .map(|d| d.message)
        .collect()
}

#[test]
fn scenario_three_passes_report_progress_and_write_once() {
    let (mut processor, sink) = processor(MemoryResourceStore::new());

    let report = run_passes(&mut processor, &catalog(THREE_PASSES));

    assert_eq!(
        found_notes(&sink),
        vec!["Found 1 services", "Found 2 services", "Found 2 services"]
    );
    assert_eq!(report.services, 2);
    assert!(report.is_success());

    let store = processor.store();
    assert_eq!(
        store.resource("META-INF/services/api.Codec").unwrap(),
        "app.json.JsonCodec\napp.yaml.YamlCodec\n"
    );
    assert_eq!(
        store.resource("META-INF/services/app.csv.CsvPlugin").unwrap(),
        "app.csv.CsvPlugin\n"
    );
    assert_eq!(
        store
            .resource("META-INF/services/wireup.Registration")
            .unwrap(),
        "app.csv.CsvPluginCsvPluginRegistration\n\
         app.json.CodecJsonCodecRegistration\n\
         app.yaml.CodecYamlCodecRegistration\n"
    );
    assert_eq!(store.source_writes(), 3);
}

#[test]
fn scenario_nothing_written_before_terminal_pass() {
    let catalog = catalog(THREE_PASSES);
    let (mut processor, _) = processor(MemoryResourceStore::new());

    for n in 0..catalog.last_pass() {
        assert!(processor.process(&catalog.pass(n), false).unwrap().is_none());
    }

    assert!(processor.store().resources().is_empty());
    assert!(processor.store().sources().is_empty());
    assert_eq!(processor.session().len(), 3);
}

#[test]
fn scenario_later_build_appends_to_earlier_output() {
    let dir = tempdir().unwrap();
    build_once(dir.path(), THREE_PASSES);

    let more = r#"
[[type]]
name = "api.Codec"
kind = "interface"

[[type]]
name = "app.toml.TomlCodec"
attributes = [{ name = "wireup.Wire", services = ["api.Codec"] }]
"#;
    let (report, sink) = build_once(dir.path(), more);

    let classes = dir.path().join("classes").join("META-INF/services");
    assert_eq!(
        std::fs::read_to_string(classes.join("api.Codec")).unwrap(),
        "app.json.JsonCodec\napp.yaml.YamlCodec\napp.toml.TomlCodec\n"
    );
    assert_eq!(
        std::fs::read_to_string(classes.join("wireup.Registration")).unwrap(),
        "app.csv.CsvPluginCsvPluginRegistration\n\
         app.json.CodecJsonCodecRegistration\n\
         app.yaml.CodecYamlCodecRegistration\n\
         app.toml.CodecTomlCodecRegistration\n"
    );
    assert_eq!(report.manifest("api.Codec").unwrap().preserved, 2);
    assert!(sink.contains("registering app.toml.TomlCodec as an implementation of api.Codec"));
    assert!(!sink.contains("does not yet exist"));
}

#[test]
fn scenario_sources_follow_package_layout() {
    let dir = tempdir().unwrap();
    build_once(dir.path(), THREE_PASSES);

    let store = LocalResourceStore::new(dir.path().join("classes"), dir.path().join("generated"));
    let path = store.source_path(&qn("app.json.CodecJsonCodecRegistration"));
    assert!(path.ends_with("app/json/CodecJsonCodecRegistration.rs"));
    assert!(path.is_file());

    assert_eq!(
        list_all_files(&dir.path().join("generated")),
        vec![
            "app/csv/CsvPluginCsvPluginRegistration.rs",
            "app/json/CodecJsonCodecRegistration.rs",
            "app/yaml/CodecYamlCodecRegistration.rs",
        ]
    );
}
