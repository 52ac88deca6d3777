//! Scenario: the `wireup` binary end to end

use crate::common::*;

const SERVICES: &str = "target/wireup/classes/META-INF/services";

#[test]
fn scenario_generate_writes_manifests_and_sources() {
    let env = TestEnv::new();
    env.write("catalog.toml", THREE_PASSES);

    let result = env.run(&["generate", "-c", "catalog.toml"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        env.read(&format!("{}/api.Codec", SERVICES)).unwrap(),
        "app.json.JsonCodec\napp.yaml.YamlCodec\n"
    );
    assert!(env
        .project_path("target/wireup/generated/app/json/CodecJsonCodecRegistration.rs")
        .is_file());
    assert!(result.stdout.contains("2 services, 3 manifests, 3 registrations, 0 failures"));
}

#[test]
fn scenario_generate_json_report() {
    let env = TestEnv::new();
    env.write("catalog.toml", EXPLICIT_SERVICE);

    let result = env.run(&["generate", "-c", "catalog.toml", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let report: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(report["services"], 1);
    assert_eq!(report["manifests"][0]["service"], "pkg.Svc");
    assert_eq!(report["manifests"][0]["path"], "META-INF/services/pkg.Svc");
    assert_eq!(report["artifacts"][0]["artifact"], "pkg.SvcImplRegistration");
    assert_eq!(report["failures"].as_array().unwrap().len(), 0);
}

#[test]
fn scenario_dry_run_writes_nothing() {
    let env = TestEnv::new();
    env.write("catalog.toml", EXPLICIT_SERVICE);

    let result = env.run(&["generate", "-c", "catalog.toml", "--dry-run"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("would write META-INF/services/pkg.Svc"));
    assert!(result.stdout.contains("would generate pkg.SvcImplRegistration"));
    assert!(!env.project_path("target").exists());
}

#[test]
fn scenario_project_config_and_env_override() {
    let env = TestEnv::new();
    env.write("catalog.toml", EXPLICIT_SERVICE);
    env.write(
        "wireup.toml",
        r#"
[discovery]
root = "registry"

[output]
class_dir = "out/classes"
source_dir = "out/src"
"#,
    );

    let result = env.run(&["generate", "-c", "catalog.toml"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(env.read("out/classes/registry/pkg.Svc").is_some());

    let result = env.run_with_env(
        &["generate", "-c", "catalog.toml"],
        &[("WIREUP_DISCOVERY_ROOT", "services")],
    );
    assert!(result.success, "{}", result.combined_output());
    assert!(env.read("out/classes/services/pkg.Svc").is_some());
}

#[test]
fn scenario_custom_trigger_flag() {
    let env = TestEnv::new();
    env.write(
        "catalog.toml",
        r#"
[[type]]
name = "pkg.Impl"
attributes = [{ name = "app.Service", services = ["pkg.Svc"] }]
"#,
    );

    let default = env.run(&["generate", "-c", "catalog.toml", "--dry-run"]);
    assert!(default.stdout.contains("0 services"));

    let custom = env.run(&[
        "generate",
        "-c",
        "catalog.toml",
        "--dry-run",
        "--trigger",
        "app.Service",
    ]);
    assert!(custom.stdout.contains("would write META-INF/services/pkg.Svc"));
}

#[test]
fn scenario_closure_lists_members() {
    let env = TestEnv::new();
    env.write("catalog.toml", PLUGIN_ATTRIBUTE);

    let result = env.run(&["closure", "-c", "catalog.toml"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(result.stdout, "app.Plugin\nwireup.Wire\n");
}

#[test]
fn scenario_invalid_catalog_fails() {
    let env = TestEnv::new();
    env.write("catalog.toml", "[[type]]\nname = \"pkg.Impl\"\nunknown = 1\n");

    let result = env.run(&["generate", "-c", "catalog.toml"]);

    assert!(!result.success);
    assert_ne!(result.exit_code, 0);
    assert!(result.stderr.contains("invalid catalog"));
}

#[test]
fn scenario_missing_catalog_fails() {
    let env = TestEnv::new();

    let result = env.run(&["generate", "-c", "nowhere.toml"]);

    assert!(!result.success);
    assert!(result.stderr.contains("failed to read catalog"));
}
