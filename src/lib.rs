//! Stencil is a component scaffolding generator.
//! It creates component, style, index, test and story files from built-in
//! templates, or materializes a user-supplied template directory, substituting
//! the component name into file contents and file names.

/// Command-line interface module for the Stencil application
pub mod cli;

/// Configuration handling
/// Supports JSON and YAML formats (stencil.json, stencil.yml, stencil.yaml)
pub mod config;

/// Placeholder tokens and configuration file names
pub mod constants;

/// Error types and handling for the Stencil application
pub mod error;

/// Built-in and custom-template generation entry points
pub mod generate;

/// Template set discovery
pub mod listing;

/// Logger setup for the binary
pub mod logger;

/// Custom template directory materialization
pub mod materialize;

/// Resolution of generated file names
pub mod names;

/// User input and interaction handling
pub mod prompt;

/// Template rendering engine
pub mod renderer;

/// Placeholder substitution engine
pub mod substitute;

/// Built-in component templates
pub mod templates;

/// Writing generated files to disk
pub mod writer;

pub use generate::{
    generate_custom_files, generate_files, generate_files_from_template, GenerationRequest,
    TemplateRequest,
};
pub use listing::list_subdirectories;
pub use substitute::substitute;
