//! Command-line interface implementation for Stencil.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::config::{normalize_extension, Config};
use crate::templates::ComponentType;

/// Command-line arguments structure for Stencil.
#[derive(Parser, Debug)]
#[command(author, version, about = "Stencil: component scaffolding generator", long_about = None)]
pub struct Args {
    /// Names of the components to generate
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,

    /// Directory the components are created in
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Kind of component to generate
    #[arg(short = 't', long = "type", value_enum)]
    pub component_type: Option<ComponentType>,

    /// Extension of the component, index, test and story files
    #[arg(long)]
    pub js_ext: Option<String>,

    /// Extension of the style file
    #[arg(long, conflicts_with = "no_css")]
    pub css_ext: Option<String>,

    /// Do not generate a style file
    #[arg(long)]
    pub no_css: bool,

    /// Method stub to add to class components (repeatable)
    #[arg(short, long = "method", value_name = "METHOD")]
    pub methods: Vec<String>,

    /// Generate an index file
    #[arg(short, long)]
    pub index: bool,

    /// Wrap the index export with a redux `connect`
    #[arg(short, long)]
    pub connected: bool,

    /// Generate a story file
    #[arg(short, long)]
    pub stories: bool,

    /// Do not generate a test file
    #[arg(long)]
    pub no_test: bool,

    /// Write into PATH directly instead of a folder named after the component
    #[arg(long)]
    pub no_mkdir: bool,

    /// Generate from a custom template directory instead of the built-in templates
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Template set to use, a subdirectory of the templates directory
    #[arg(long, value_name = "NAME", conflicts_with = "pick")]
    pub template_set: Option<String>,

    /// Choose the template set interactively
    #[arg(long)]
    pub pick: bool,

    /// Configuration file (or directory) applied on top of ./stencil.{json,yml,yaml}
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Applies the command-line flags on top of `config`.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(component_type) = self.component_type {
            config.component_type = component_type;
        }
        if let Some(ext) = self.js_ext.as_deref().and_then(normalize_extension) {
            config.js_extension = ext;
        }
        if let Some(ext) = &self.css_ext {
            config.css_extension = normalize_extension(ext);
        }
        if self.no_css {
            config.css_extension = None;
        }
        if self.index {
            config.index_file = true;
        }
        if self.connected {
            config.connected = true;
        }
        if self.stories {
            config.include_stories = true;
        }
        if self.no_test {
            config.include_tests = false;
        }
        if self.no_mkdir {
            config.no_mkdir = true;
        }
        if let Some(templates) = &self.templates {
            config.templates = Some(templates.clone());
        }
        config
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let help = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                if let Err(err) = help {
                    eprintln!("Failed to print help: {err}");
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
