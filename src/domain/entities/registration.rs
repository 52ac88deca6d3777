//! Registration entity - a generated adapter for one (service, implementation) pair
//!
//! The adapter name is a pure function of the pair, so regenerating always
//! targets the same artifact.

use crate::domain::value_objects::{simple_name_of, QualifiedName};
use crate::error::{WireupError, WireupResult};

/// Suffix appended to every generated adapter name
pub const DEFAULT_REGISTRATION_SUFFIX: &str = "Registration";

/// Value written into the `{{generator}}` placeholder
pub const GENERATOR: &str = concat!("wireup ", env!("CARGO_PKG_VERSION"));

/// Descriptor of a generated registration adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRegistration {
    service: String,
    implementation: QualifiedName,
    artifact: QualifiedName,
}

impl GeneratedRegistration {
    /// `<ServiceSimple><ImplSimple><suffix>` in the implementation's package.
    pub fn new(
        service: impl Into<String>,
        implementation: QualifiedName,
        suffix: &str,
    ) -> WireupResult<Self> {
        let service = service.into();
        let artifact_name = format!(
            "{}{}{}",
            simple_name_of(&service),
            implementation.simple_name(),
            suffix
        );
        let artifact = implementation.sibling(artifact_name)?;
        Ok(Self {
            service,
            implementation,
            artifact,
        })
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn implementation(&self) -> &QualifiedName {
        &self.implementation
    }

    /// Qualified name of the generated adapter
    pub fn artifact(&self) -> &QualifiedName {
        &self.artifact
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    Package,
    Name,
    Service,
    Implementation,
    Generator,
}

impl Placeholder {
    fn parse(key: &str) -> Option<Self> {
        match key {
            "package" => Some(Placeholder::Package),
            "name" => Some(Placeholder::Name),
            "service" => Some(Placeholder::Service),
            "implementation" => Some(Placeholder::Implementation),
            "generator" => Some(Placeholder::Generator),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// Built-in adapter template: a Rust unit struct exposing both type names.
pub const DEFAULT_TEMPLATE: &str = r#"// @generated by {{generator}}. Do not edit.

/// Registers `{{implementation}}` as an implementation of `{{service}}`.
pub struct {{name}};

impl {{name}} {
    /// Qualified name of the service type.
    pub const fn service_type() -> &'static str {
        "{{service}}"
    }

    /// Qualified name of the implementation type.
    pub const fn implementation_type() -> &'static str {
        "{{implementation}}"
    }
}
"#;

/// Adapter source template with `{{placeholder}}` slots.
///
/// Placeholders are checked when the template is built, so rendering can
/// not fail on an unknown key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationTemplate {
    segments: Vec<Segment>,
}

impl RegistrationTemplate {
    pub fn new(source: &str) -> WireupResult<Self> {
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(open) = rest.find("{{") {
            let after_open = &rest[open + 2..];
            let Some(close) = after_open.find("}}") else {
                break;
            };
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let key = after_open[..close].trim();
            let placeholder =
                Placeholder::parse(key).ok_or_else(|| WireupError::UnknownPlaceholder {
                    placeholder: key.to_string(),
                })?;
            segments.push(Segment::Placeholder(placeholder));
            rest = &after_open[close + 2..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// Render the adapter source for `registration`.
    pub fn render(&self, registration: &GeneratedRegistration) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(Placeholder::Package) => {
                    out.push_str(registration.implementation().package())
                }
                Segment::Placeholder(Placeholder::Name) => {
                    out.push_str(registration.artifact().name())
                }
                Segment::Placeholder(Placeholder::Service) => out.push_str(registration.service()),
                Segment::Placeholder(Placeholder::Implementation) => {
                    out.push_str(&registration.implementation().to_string())
                }
                Segment::Placeholder(Placeholder::Generator) => out.push_str(GENERATOR),
            }
        }
        out
    }
}
