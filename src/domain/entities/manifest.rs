//! Manifest entity - the persisted discovery file for one service
//!
//! One implementation name per line. `#` starts a comment that runs to the
//! end of the line; blank and comment-only lines are dropped on read and
//! never written back. I/O lives in the registry writer.

/// Manifest resource path for `service` under the discovery `root`.
pub fn manifest_path(root: &str, service: &str) -> String {
    let root = root.trim_end_matches('/');
    if root.is_empty() {
        service.to_string()
    } else {
        format!("{}/{}", root, service)
    }
}

/// Extract the entries of a manifest, in file order.
pub fn parse_manifest(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| match line.find('#') {
            Some(comment) => &line[..comment],
            None => line,
        })
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Merge newly discovered names into existing manifest lines.
///
/// Old lines come first in their original order, then every new name not
/// already present. Each distinct name appears exactly once in the result.
pub fn merge<I, S>(old_lines: &[String], new_names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut merged: Vec<String> = Vec::with_capacity(old_lines.len());
    for line in old_lines {
        if !merged.contains(line) {
            merged.push(line.clone());
        }
    }
    for name in new_names {
        let name = name.as_ref().trim();
        if !name.is_empty() && !merged.iter().any(|l| l == name) {
            merged.push(name.to_string());
        }
    }
    merged
}

/// Render manifest lines, one per line with a trailing newline each.
pub fn render_manifest(lines: &[String]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// A manifest being updated during one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    lines: Vec<String>,
    /// Number of lines read from the pre-existing resource
    preserved: usize,
}

impl Manifest {
    /// Empty manifest (no pre-existing resource)
    pub fn new() -> Self {
        Self::default()
    }

    /// Manifest seeded from the content of an existing resource
    pub fn from_existing(content: &str) -> Self {
        let lines = merge(&parse_manifest(content), std::iter::empty::<&str>());
        let preserved = lines.len();
        Self { lines, preserved }
    }

    /// Merge `names` in, returning how many were added.
    pub fn add_all<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.lines.len();
        self.lines = merge(&self.lines, names);
        self.lines.len() - before
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn preserved(&self) -> usize {
        self.preserved
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lines.iter().any(|l| l == name)
    }

    pub fn render(&self) -> String {
        render_manifest(&self.lines)
    }
}
