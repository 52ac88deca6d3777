//! Contract: A failure is confined to its own service or pair
//!
//! A manifest that can not be written, or an adapter that can not be
//! generated, becomes a diagnostic and a report entry. Everything else is
//! still written.

use crate::common::*;
use wireup::application::FailureStage;
use wireup::MemoryResourceStore;

/// CONTRACT: A failing manifest does not stop other services
#[test]
fn contract_manifest_failure_isolated() {
    let store = MemoryResourceStore::new().failing_on("META-INF/services/pkg.A");
    let (mut processor, sink) = processor(store);

    let report = run_passes(&mut processor, &catalog(TWO_SERVICES));

    assert!(!report.is_success());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].stage, FailureStage::Manifest);
    assert_eq!(report.failures[0].service, "pkg.A");
    assert!(sink.contains("failed to write manifest for pkg.A"));

    let store = processor.store();
    assert!(store.resource("META-INF/services/pkg.A").is_none());
    assert_eq!(
        store.resource("META-INF/services/pkg.B").unwrap(),
        "pkg.ImplB\n"
    );
    assert_eq!(store.sources().len(), 2);
}

/// CONTRACT: A failing adapter is left out of the meta manifest
#[test]
fn contract_registration_failure_isolated() {
    let store = MemoryResourceStore::new().failing_on("pkg.AImplARegistration");
    let (mut processor, sink) = processor(store);

    let report = run_passes(&mut processor, &catalog(TWO_SERVICES));

    assert_eq!(report.failures.len(), 1);
    let failure = &report.failures[0];
    assert_eq!(failure.stage, FailureStage::Registration);
    assert_eq!(failure.implementation.as_deref(), Some("pkg.ImplA"));
    assert!(sink.contains("service pkg.A, implementation pkg.ImplA"));

    let store = processor.store();
    assert_eq!(
        store.resource("META-INF/services/wireup.Registration").unwrap(),
        "pkg.BImplBRegistration\n"
    );
    assert_eq!(
        store.resource("META-INF/services/pkg.A").unwrap(),
        "pkg.ImplA\n"
    );
}

/// CONTRACT: Failures are reported as notes, never as warnings
#[test]
fn contract_failures_are_notes() {
    let store = MemoryResourceStore::new()
        .failing_on("META-INF/services/pkg.A")
        .failing_on("pkg.BImplBRegistration");
    let (mut processor, sink) = processor(store);

    let report = run_passes(&mut processor, &catalog(TWO_SERVICES));

    assert_eq!(report.failures.len(), 2);
    assert!(sink.warnings().is_empty());
}

/// CONTRACT: A failed rewrite never loses entries from an earlier build
#[test]
fn contract_failed_rewrite_keeps_previous_entries() {
    let store = MemoryResourceStore::new()
        .with_resource("META-INF/services/pkg.A", "legacy.OldA\n")
        .failing_once_on("META-INF/services/pkg.A");
    let (mut processor, sink) = processor(store);

    let report = run_passes(&mut processor, &catalog(TWO_SERVICES));

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].service, "pkg.A");
    assert!(sink.contains("restored 1 previous entries of META-INF/services/pkg.A"));

    let store = processor.store();
    assert_eq!(
        store.resource("META-INF/services/pkg.A").unwrap(),
        "legacy.OldA\n"
    );
    assert_eq!(
        store.resource("META-INF/services/pkg.B").unwrap(),
        "pkg.ImplB\n"
    );
}

/// CONTRACT: A manifest that can not be touched at all stays as it was
#[test]
fn contract_unwritable_manifest_untouched() {
    let store = MemoryResourceStore::new()
        .with_resource("META-INF/services/pkg.A", "legacy.OldA\n")
        .failing_on("META-INF/services/pkg.A");
    let (mut processor, _) = processor(store);

    let report = run_passes(&mut processor, &catalog(TWO_SERVICES));

    assert_eq!(report.failures.len(), 1);
    assert_eq!(
        processor
            .store()
            .resource("META-INF/services/pkg.A")
            .unwrap(),
        "legacy.OldA\n"
    );
}
