//! Configuration handling for Stencil.
//! Settings cascade from built-in defaults, through a configuration file found
//! in a base directory, to an explicit override file.

use crate::constants::CONFIG_FILES;
use crate::error::{Error, Result};
use crate::substitute::SubstitutionMode;
use crate::templates::ComponentType;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Generation settings. Read-only once loaded and passed explicitly to every
/// entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Prefix of the default test file name (`<prefix>.<name>`)
    pub test_file_name: String,
    /// Write directly into the destination instead of a `<name>` subfolder
    pub no_mkdir: bool,
    pub component_type: ComponentType,
    pub js_extension: String,
    /// `None` disables the style file
    pub css_extension: Option<String>,
    pub index_file: bool,
    pub connected: bool,
    pub include_stories: bool,
    pub include_tests: bool,
    /// File name overrides, keyed by `testFileName`, `componentFileName`, `styleFileName`
    pub file_names: IndexMap<String, String>,
    /// Default custom templates root
    pub templates: Option<PathBuf>,
    pub placeholder_matching: SubstitutionMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            test_file_name: "test".to_string(),
            no_mkdir: false,
            component_type: ComponentType::Functional,
            js_extension: "js".to_string(),
            css_extension: Some("css".to_string()),
            index_file: false,
            connected: false,
            include_stories: false,
            include_tests: true,
            file_names: IndexMap::new(),
            templates: None,
            placeholder_matching: SubstitutionMode::Literal,
        }
    }
}

/// One configuration file. Absent keys leave the current value untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    pub test_file_name: Option<String>,
    pub no_mkdir: Option<bool>,
    #[serde(rename = "type")]
    pub component_type: Option<ComponentType>,
    pub js_extension: Option<String>,
    pub css_extension: Option<String>,
    pub index_file: Option<bool>,
    pub connected: Option<bool>,
    pub include_stories: Option<bool>,
    pub include_tests: Option<bool>,
    pub file_names: Option<IndexMap<String, String>>,
    pub templates: Option<PathBuf>,
    pub placeholder_matching: Option<SubstitutionMode>,
}

/// Strips a leading dot; an empty extension means none.
pub fn normalize_extension(ext: &str) -> Option<String> {
    let ext = ext.trim().trim_start_matches('.');
    if ext.is_empty() {
        None
    } else {
        Some(ext.to_string())
    }
}

impl Config {
    /// Loads the configuration for `base`.
    ///
    /// # Arguments
    /// * `base` - Directory searched for `stencil.json`, `stencil.yml` or `stencil.yaml`
    /// * `override_path` - Configuration file, or directory searched the same way,
    ///   applied on top; it must exist
    ///
    /// # Errors
    /// * `Error::ConfigError` if the override is missing or a file fails to parse
    pub fn load<P: AsRef<Path>>(base: P, override_path: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(path) = find_config_file(base.as_ref(), &CONFIG_FILES) {
            config.merge(read_config_file(&path)?);
        }

        if let Some(path) = override_path {
            let path = if path.is_dir() {
                find_config_file(path, &CONFIG_FILES).ok_or_else(|| {
                    Error::ConfigError(format!(
                        "No configuration file found in {} (tried: {})",
                        path.display(),
                        CONFIG_FILES.join(", ")
                    ))
                })?
            } else if path.is_file() {
                path.to_path_buf()
            } else {
                return Err(Error::ConfigError(format!(
                    "configuration file {} does not exist",
                    path.display()
                )));
            };
            config.merge(read_config_file(&path)?);
        }

        Ok(config)
    }

    /// Applies every key present in `file`.
    pub fn merge(&mut self, file: ConfigFile) {
        if let Some(v) = file.test_file_name {
            self.test_file_name = v;
        }
        if let Some(v) = file.no_mkdir {
            self.no_mkdir = v;
        }
        if let Some(v) = file.component_type {
            self.component_type = v;
        }
        if let Some(v) = file.js_extension.as_deref().and_then(normalize_extension) {
            self.js_extension = v;
        }
        if let Some(v) = file.css_extension {
            self.css_extension = normalize_extension(&v);
        }
        if let Some(v) = file.index_file {
            self.index_file = v;
        }
        if let Some(v) = file.connected {
            self.connected = v;
        }
        if let Some(v) = file.include_stories {
            self.include_stories = v;
        }
        if let Some(v) = file.include_tests {
            self.include_tests = v;
        }
        if let Some(v) = file.file_names {
            self.file_names.extend(v);
        }
        if let Some(v) = file.templates {
            self.templates = Some(v);
        }
        if let Some(v) = file.placeholder_matching {
            self.placeholder_matching = v;
        }
    }
}

/// Returns the first configuration file from `config_files` present in `dir`.
pub fn find_config_file(dir: &Path, config_files: &[&str]) -> Option<PathBuf> {
    config_files.iter().map(|file| dir.join(file)).find(|path| path.is_file())
}

/// Reads and parses one configuration file.
pub fn read_config_file(path: &Path) -> Result<ConfigFile> {
    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| Error::fs(path, e))?;
    match parse_config(&content) {
        Err(Error::ConfigError(msg)) => {
            Err(Error::ConfigError(format!("{}: {msg}", path.display())))
        }
        other => other,
    }
}

/// Parses configuration content as JSON, falling back to YAML.
///
/// # Errors
/// * `Error::ConfigError` if neither format accepts the content
pub fn parse_config(content: &str) -> Result<ConfigFile> {
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    match serde_json::from_str(content) {
        Ok(file) => Ok(file),
        Err(json_err) => serde_yaml::from_str(content).map_err(|yaml_err| {
            Error::ConfigError(format!(
                "Invalid configuration format (json: {json_err}; yaml: {yaml_err})"
            ))
        }),
    }
}
