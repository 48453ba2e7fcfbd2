//! Common constants used throughout sprout.

/// Supported configuration file names, in lookup order
pub const CONFIG_FILES: [&str; 3] = ["sprout.json", "sprout.yml", "sprout.yaml"];

/// Organisation prefix embedded in generated binding text
pub const DEFAULT_APP_PREFIX: &str = "ei";

/// Output root, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Template root, relative to the working directory
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Placeholder tokens recognised in templates.
///
/// No token is a substring of another, and none of them can appear inside a
/// value derived from a dash-case name.
pub mod tokens {
    pub const DASH_NAME: &str = "X-DASH-NAME-X";
    pub const CAMEL_NAME: &str = "X-CAMEL-NAME-X";
    pub const PASCAL_NAME: &str = "X-PASCAL-NAME-X";
    pub const INPUTS: &str = "X-INPUTS-X";
    pub const OUTPUTS: &str = "X-OUTPUTS-X";
}
