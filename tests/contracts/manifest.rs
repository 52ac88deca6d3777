//! Contract: Manifests are merged, never replaced
//!
//! Entries a previous build (or a person) wrote stay in place and in order;
//! new implementations are appended; nothing appears twice.

use crate::common::*;
use tempfile::tempdir;
use wireup::MemoryResourceStore;

const MANIFEST: &str = "META-INF/services/pkg.Svc";

/// CONTRACT: Existing entries survive and come first; comments are dropped
#[test]
fn contract_existing_entries_are_preserved_in_order() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("classes").join(MANIFEST);
    std::fs::create_dir_all(manifest.parent().unwrap()).unwrap();
    std::fs::write(&manifest, "other.Legacy # hand-written\n\n# note\nother.Older\n").unwrap();

    let (report, _) = build_once(dir.path(), EXPLICIT_SERVICE);

    assert!(report.is_success(), "{:?}", report.failures);
    assert_eq!(
        std::fs::read_to_string(&manifest).unwrap(),
        "other.Legacy\nother.Older\npkg.Impl\n"
    );
    let write = report.manifest("pkg.Svc").unwrap();
    assert_eq!(write.preserved, 2);
    assert_eq!(write.added, 1);
}

/// CONTRACT: Running the same build twice leaves manifests byte-identical
#[test]
fn contract_rebuild_is_idempotent() {
    let dir = tempdir().unwrap();
    let classes = dir.path().join("classes");

    build_once(dir.path(), TWO_SERVICES);
    let first: Vec<(String, String)> = list_all_files(&classes)
        .into_iter()
        .map(|f| {
            let content = std::fs::read_to_string(classes.join(&f)).unwrap();
            (f, content)
        })
        .collect();

    let (report, _) = build_once(dir.path(), TWO_SERVICES);
    let second: Vec<(String, String)> = list_all_files(&classes)
        .into_iter()
        .map(|f| {
            let content = std::fs::read_to_string(classes.join(&f)).unwrap();
            (f, content)
        })
        .collect();

    assert_eq!(first, second);
    assert!(report.manifests.iter().all(|m| m.added == 0));
}

/// CONTRACT: An implementation already listed is not added again
#[test]
fn contract_no_duplicate_entries() {
    let store = MemoryResourceStore::new().with_resource(MANIFEST, "pkg.Impl\npkg.Impl\n");
    let (mut processor, sink) = processor(store);

    let report = run_passes(&mut processor, &catalog(EXPLICIT_SERVICE));

    assert_eq!(processor.store().resource(MANIFEST).unwrap(), "pkg.Impl\n");
    assert_eq!(report.manifest("pkg.Svc").unwrap().added, 0);
    assert!(!sink.contains("registering pkg.Impl"));
}

/// CONTRACT: A missing manifest is a note, not an error
#[test]
fn contract_missing_manifest_is_reported_and_created() {
    let (mut processor, sink) = processor(MemoryResourceStore::new());

    let report = run_passes(&mut processor, &catalog(EXPLICIT_SERVICE));

    assert!(report.is_success());
    assert!(sink.contains("META-INF/services/pkg.Svc does not yet exist"));
    assert!(sink.contains("registering pkg.Impl as an implementation of pkg.Svc"));
    assert!(sink.warnings().is_empty());
    assert_eq!(
        processor.store().originating(MANIFEST),
        vec![qn("pkg.Impl")]
    );
}
