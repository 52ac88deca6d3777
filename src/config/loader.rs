//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{WireupError, WireupResult};

use super::types::Config;

/// Project configuration file name
pub const CONFIG_FILE_NAME: &str = "wireup.toml";

/// Overrides the user configuration directory (used by tests)
pub const CONFIG_HOME_VAR: &str = "WIREUP_CONFIG_HOME";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> WireupResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse configuration content; `path` is only used in errors and warnings.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> WireupResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| WireupError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| {
            let leaf = key.rsplit('.').next().unwrap_or(key.as_str());
            let line = find_line_number(content, leaf);
            let suggestion = suggest_key(leaf);
            ConfigWarning {
                key,
                file: path.to_path_buf(),
                line,
                suggestion,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let candidates = project_root
        .map(|root| root.join(CONFIG_FILE_NAME))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match Config::load(&path) {
            Ok(config) => return with_env_overrides(config),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "ignoring config"),
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (WIREUP_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides looked up through `var`; empty values are ignored.
pub(crate) fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    let lookup = |key: &str| var(key).filter(|v| !v.trim().is_empty());

    if let Some(trigger) = lookup("WIREUP_TRIGGER") {
        config.trigger.attribute = trigger.trim().to_string();
    }

    if let Some(root) = lookup("WIREUP_DISCOVERY_ROOT") {
        config.discovery.root = root.trim().to_string();
    }

    if let Some(service) = lookup("WIREUP_REGISTRATION_SERVICE") {
        config.registration.service = service.trim().to_string();
    }

    config
}

/// `<config dir>/wireup/config.toml`
fn user_config_path() -> Option<PathBuf> {
    std::env::var(CONFIG_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("wireup").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "trigger",
        "attribute",
        "discovery",
        "root",
        "registration",
        "service",
        "suffix",
        "extension",
        "template",
        "output",
        "class_dir",
        "source_dir",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
