//! QualifiedName value object - identity of a declared type
//!
//! A qualified name is split into the enclosing package and the name within
//! that package. Nested types keep their enclosing type in the name part
//! (`Outer.Inner`), so the simple name is always the last segment.
//!
//! Identity is the dotted name alone: `pkg.Outer.Inner` is the same type
//! whether it was split as `pkg` + `Outer.Inner` or `pkg.Outer` + `Inner`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{WireupError, WireupResult};

/// Fully qualified name of a declared type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QualifiedName {
    package: String,
    name: String,
    qualified: String,
}

impl QualifiedName {
    /// Build a name from an explicit package and in-package name.
    ///
    /// The package may be empty (default package); the name may not.
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> WireupResult<Self> {
        let package = package.into();
        let name = name.into();

        if name.is_empty() {
            return Err(invalid(&package, &name, "empty simple name"));
        }
        if has_empty_segment(&name) || (!package.is_empty() && has_empty_segment(&package)) {
            return Err(invalid(&package, &name, "empty path segment"));
        }
        if package.chars().chain(name.chars()).any(char::is_whitespace) {
            return Err(invalid(&package, &name, "contains whitespace"));
        }

        let qualified = if package.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", package, name)
        };
        Ok(Self {
            package,
            name,
            qualified,
        })
    }

    /// Parse a dotted name, treating everything before the last `.` as the package.
    pub fn parse(s: &str) -> WireupResult<Self> {
        match s.rsplit_once('.') {
            Some((package, name)) => Self::new(package, name),
            None => Self::new("", s),
        }
    }

    /// Package the type is declared in (empty for the default package)
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Name within the package, including enclosing types
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full dotted name
    pub fn as_str(&self) -> &str {
        &self.qualified
    }

    /// Last segment of the name
    pub fn simple_name(&self) -> &str {
        simple_name_of(&self.name)
    }

    /// A sibling type in the same package
    pub fn sibling(&self, name: impl Into<String>) -> WireupResult<Self> {
        Self::new(self.package.clone(), name)
    }
}

/// Last dotted segment of any name string.
///
/// Works on raw service names that never went through [`QualifiedName::parse`].
pub fn simple_name_of(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

fn has_empty_segment(s: &str) -> bool {
    s.split('.').any(str::is_empty)
}

fn invalid(package: &str, name: &str, reason: &str) -> WireupError {
    let full = if package.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", package, name)
    };
    WireupError::InvalidQualifiedName {
        name: full,
        reason: reason.to_string(),
    }
}

impl PartialEq for QualifiedName {
    fn eq(&self, other: &Self) -> bool {
        self.qualified == other.qualified
    }
}

impl Eq for QualifiedName {}

impl PartialOrd for QualifiedName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QualifiedName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.qualified.cmp(&other.qualified)
    }
}

impl Hash for QualifiedName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.qualified.hash(state);
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified)
    }
}

impl FromStr for QualifiedName {
    type Err = WireupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for QualifiedName {
    type Error = WireupError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<QualifiedName> for String {
    fn from(name: QualifiedName) -> Self {
        name.to_string()
    }
}
