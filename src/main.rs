//! Stencil's main application entry point.
//! Handles command-line argument parsing, configuration loading and
//! dispatches each component to the built-in or custom-template generator.

use std::path::PathBuf;

use stencil::{
    cli::{get_args, Args},
    config::Config,
    error::{default_error_handler, Result},
    generate::{generate_files, generate_files_from_template, GenerationRequest, TemplateRequest},
    listing::resolve_template_set,
    logger::init_logger,
    prompt::DialoguerPrompter,
};

/// Main application entry point.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args).await {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads ./stencil.{json,yml,yaml} and the `--config` override
/// 2. Applies command-line flags on top
/// 3. Resolves the template set when custom templates are used
/// 4. Generates every requested component in turn
async fn run(args: Args) -> Result<()> {
    let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = args.apply_to(Config::load(&base, args.config.as_deref())?);

    let templates = match &config.templates {
        Some(root) => {
            let prompt = DialoguerPrompter::new();
            Some(resolve_template_set(root, args.template_set.as_deref(), args.pick, &prompt)?)
        }
        None => None,
    };

    for name in &args.names {
        match &templates {
            Some(templates_path) => {
                let request = TemplateRequest {
                    name: name.clone(),
                    destination_path: args.path.clone(),
                    templates_path: templates_path.clone(),
                };
                let report = generate_files_from_template(&request).await?;
                for target in &report.written {
                    println!("Created: '{}'", target.display());
                }
                if !report.is_complete() {
                    eprintln!(
                        "{}: {} template file(s) could not be generated, see the log above.",
                        name,
                        report.failed.len()
                    );
                }
            }
            None => {
                let mut request = GenerationRequest::from_config(name, &args.path, &config);
                request.component_methods = args.methods.clone();
                for target in generate_files(&request, &config).await? {
                    println!("Created: '{}'", target.display());
                }
            }
        }
    }

    println!("Component generation completed in {}.", args.path.display());
    Ok(())
}
