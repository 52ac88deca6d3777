//! Test fixtures - reusable catalog content.

/// One implementation naming its service explicitly
pub const EXPLICIT_SERVICE: &str = r#"
[[type]]
name = "pkg.Svc"
kind = "interface"

[[type]]
name = "pkg.Impl"
attributes = [{ name = "wireup.Wire", services = ["pkg.Svc"] }]
"#;

/// One implementation with an empty payload
pub const SELF_REGISTERED: &str = r#"
[[type]]
name = "pkg.Impl"
attributes = [{ name = "wireup.Wire" }]
"#;

/// Two services, each with one implementation
pub const TWO_SERVICES: &str = r#"
[[type]]
name = "pkg.ImplA"
attributes = [{ name = "wireup.Wire", services = ["pkg.A"] }]

[[type]]
name = "pkg.ImplB"
attributes = [{ name = "wireup.Wire", services = ["pkg.B"] }]
"#;

/// A plugin attribute marked with the trigger, and a class using it
pub const PLUGIN_ATTRIBUTE: &str = r#"
[[type]]
name = "app.Plugin"
kind = "attribute"
retention = "runtime"
targets = ["type"]
attributes = [{ name = "wireup.Wire" }]

[[type]]
name = "app.json.JsonPlugin"
attributes = [{ name = "app.Plugin" }]
"#;

/// Types revealed over three passes; the codec service arrives last
pub const THREE_PASSES: &str = r#"
[[type]]
name = "app.Plugin"
kind = "attribute"
retention = "runtime"
targets = ["type"]
attributes = [{ name = "wireup.Wire" }]

[[type]]
name = "app.json.JsonCodec"
attributes = [{ name = "wireup.Wire", services = ["api.Codec"] }]

[[type]]
name = "app.yaml.YamlCodec"
pass = 1
attributes = [{ name = "wireup.Wire", services = ["api.Codec"] }]

[[type]]
name = "app.csv.CsvPlugin"
pass = 1
attributes = [{ name = "app.Plugin" }]

[[type]]
name = "api.Codec"
kind = "interface"
pass = 2
"#;
