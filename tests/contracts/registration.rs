//! Contract: One adapter per (service, implementation) pair
//!
//! The adapter name depends only on the pair, it lives next to the
//! implementation, and every adapter is listed under the registration
//! meta-service.

use crate::common::*;
use tempfile::tempdir;
use wireup::MemoryResourceStore;

const META: &str = "META-INF/services/wireup.Registration";

/// CONTRACT: The adapter is `<Service><Impl>Registration` in the impl's package
#[test]
fn contract_adapter_named_after_pair() {
    let (mut processor, _) = processor(MemoryResourceStore::new());

    let report = run_passes(&mut processor, &catalog(EXPLICIT_SERVICE));

    assert_eq!(report.artifacts.len(), 1);
    assert_eq!(report.artifacts[0].artifact, qn("pkg.SvcImplRegistration"));
    let source = processor.store().source(&qn("pkg.SvcImplRegistration")).unwrap();
    assert!(source.contains("pub struct SvcImplRegistration;"));
    assert!(source.contains("\"pkg.Svc\""));
    assert!(source.contains("\"pkg.Impl\""));
}

/// CONTRACT: Every generated adapter is listed in the meta-service manifest
#[test]
fn contract_meta_manifest_lists_every_adapter() {
    let (mut processor, _) = processor(MemoryResourceStore::new());

    run_passes(&mut processor, &catalog(TWO_SERVICES));

    assert_eq!(
        processor.store().resource(META).unwrap(),
        "pkg.AImplARegistration\npkg.BImplBRegistration\n"
    );
}

/// CONTRACT: Regenerating overwrites the existing adapter in place
#[test]
fn contract_regeneration_overwrites() {
    let dir = tempdir().unwrap();

    let (first, _) = build_once(dir.path(), EXPLICIT_SERVICE);
    let (second, _) = build_once(dir.path(), EXPLICIT_SERVICE);

    assert!(!first.artifacts[0].overwritten);
    assert!(second.artifacts[0].overwritten);
    let files = list_all_files(&dir.path().join("generated"));
    assert_eq!(files, vec!["pkg/SvcImplRegistration.rs"]);
}

/// CONTRACT: The meta manifest is written after every ordinary service
#[test]
fn contract_meta_manifest_written_last() {
    let (mut processor, _) = processor(MemoryResourceStore::new());

    let report = run_passes(&mut processor, &catalog(TWO_SERVICES));

    let services: Vec<&str> = report.manifests.iter().map(|m| m.service.as_str()).collect();
    assert_eq!(services, vec!["pkg.A", "pkg.B", "wireup.Registration"]);
}
