//! Generation entry points.
//! Combines name resolution, templates and the writer into the built-in and
//! custom-template generation paths.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::debug;

use crate::config::{normalize_extension, Config};
use crate::error::Result;
use crate::materialize::{materialize, MaterializeReport};
use crate::names::resolve_file_names;
use crate::substitute::validate_name;
use crate::templates::{ComponentType, TemplateGenerator};
use crate::writer::{commit, OutputFile};

/// Options for one built-in component generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub component_type: ComponentType,
    /// Directory the component is created in
    pub path: PathBuf,
    pub name: String,
    /// File name overrides, keyed by `testFileName`, `componentFileName`, `styleFileName`
    pub file_names: IndexMap<String, String>,
    /// Style file extension; `None` generates no style file
    pub css_extension: Option<String>,
    pub js_extension: String,
    /// Method stubs for class-style components
    pub component_methods: Vec<String>,
    pub index_file: bool,
    /// Wrap the index export with `connect`; implies an index file
    pub connected: bool,
    pub include_stories: bool,
    pub include_tests: bool,
}

impl GenerationRequest {
    /// Creates a request whose options default to the values in `config`.
    pub fn from_config<S: Into<String>, P: Into<PathBuf>>(
        name: S,
        path: P,
        config: &Config,
    ) -> Self {
        Self {
            component_type: config.component_type,
            path: path.into(),
            name: name.into(),
            file_names: config.file_names.clone(),
            css_extension: config.css_extension.clone(),
            js_extension: config.js_extension.clone(),
            component_methods: Vec::new(),
            index_file: config.index_file,
            connected: config.connected,
            include_stories: config.include_stories,
            include_tests: config.include_tests,
        }
    }
}

/// Directory the files of `name` are written into.
pub fn output_base(path: &Path, name: &str, config: &Config) -> PathBuf {
    if config.no_mkdir {
        path.to_path_buf()
    } else {
        path.join(name)
    }
}

/// Computes every file a request produces, relative to its output base.
///
/// # Errors
/// * `Error::InvalidArgument` if the component name is empty or contains a path separator
/// * `Error::MinijinjaError` if a template fails to render
pub fn plan_files(
    request: &GenerationRequest,
    config: &Config,
    generator: &TemplateGenerator,
) -> Result<Vec<OutputFile>> {
    let name = request.name.as_str();
    validate_name(name)?;

    let names = resolve_file_names(&request.file_names, name, &config.test_file_name)?;
    let js = normalize_extension(&request.js_extension).unwrap_or_else(|| "js".to_string());
    let css = request.css_extension.as_deref().and_then(normalize_extension);
    let style_file = css.as_ref().map(|css| format!("{}.{css}", names.style_file_name));

    let mut files = vec![OutputFile::new(
        format!("{}.{js}", names.component_file_name),
        generator.component(
            request.component_type,
            name,
            style_file.as_deref(),
            &request.component_methods,
        )?,
    )];

    if let Some(style_file) = style_file {
        files.push(OutputFile::new(style_file, generator.style(name)?));
    }

    if request.index_file || request.connected {
        files.push(OutputFile::new(
            format!("index.{js}"),
            generator.index(name, &names.component_file_name, request.connected)?,
        ));
    }

    if request.include_tests {
        files.push(OutputFile::new(
            format!("{}.{js}", names.test_file_name),
            generator.test(name, &names.component_file_name)?,
        ));
    }

    if request.include_stories {
        files.push(OutputFile::new(
            format!("{}.stories.{js}", names.component_file_name),
            generator.story(name, &names.component_file_name)?,
        ));
    }

    Ok(files)
}

/// Generates a component from the built-in templates.
///
/// Every file is computed before the first write. A new component directory
/// appears all at once; see [`commit`].
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Paths of the written files
pub async fn generate_files(request: &GenerationRequest, config: &Config) -> Result<Vec<PathBuf>> {
    let generator = TemplateGenerator::new()?;
    let files = plan_files(request, config, &generator)?;
    let base = output_base(&request.path, &request.name, config);
    debug!("Generating {} file(s) for {} in {}", files.len(), request.name, base.display());
    commit(&base, &files).await
}

/// Options for generating a component from a custom template directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRequest {
    pub name: String,
    pub destination_path: PathBuf,
    pub templates_path: PathBuf,
}

/// Generates a component by materializing a custom template directory.
///
/// Per-file failures do not fail the call; they are logged and listed in the
/// returned report.
pub async fn generate_files_from_template(request: &TemplateRequest) -> Result<MaterializeReport> {
    materialize(&request.name, &request.destination_path, &request.templates_path).await
}

/// Alias of [`generate_files_from_template`].
pub async fn generate_custom_files(request: &TemplateRequest) -> Result<MaterializeReport> {
    generate_files_from_template(request).await
}
