//! Sprout scaffolds source files for a tree of UI components.
//! Each component gets its own directory holding component, view, module,
//! style and test files, plus one file per data store it reads from. Files are
//! produced from plain-text templates by literal placeholder replacement.

/// Binding declaration fragments for component inputs and outputs
pub mod bindings;

/// Command-line interface module for the sprout application
pub mod cli;

/// Configuration handling, JSON or YAML (sprout.json, sprout.yml, sprout.yaml)
pub mod config;

/// Common constants and placeholder tokens
pub mod constants;

/// Writes a single generated file
pub mod emitter;

/// Error types and handling for the sprout application
pub mod error;

/// Output preparation and tree walk
pub mod generator;

/// Component and store descriptors
pub mod model;

/// camelCase and PascalCase variants of dash-case names
pub mod naming;

/// Generated-file kinds and their templates
pub mod registry;

/// Placeholder substitution
pub mod renderer;
