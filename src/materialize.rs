//! Custom template materialization.
//! Copies a user-supplied template tree into the output directory, replacing
//! placeholders in file contents and in file paths.

use std::io;
use std::path::{Path, PathBuf};

use futures::future::join_all;
use log::{debug, error};
use walkdir::WalkDir;

use crate::config::Config;
use crate::constants::CONFIG_FILES;
use crate::error::{Error, Result};
use crate::substitute::{validate_name, Placeholders};
use crate::writer::write_file;

/// Outcome of materializing one template tree.
#[derive(Debug, Default)]
pub struct MaterializeReport {
    /// Files written, in template walk order
    pub written: Vec<PathBuf>,
    /// Template files that could not be materialized, with the reason
    pub failed: Vec<(PathBuf, Error)>,
}

impl MaterializeReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

async fn check_template_root(templates_root: &Path) -> Result<()> {
    let unavailable = |reason: String| Error::TemplateSourceUnavailable {
        path: templates_root.display().to_string(),
        reason,
    };
    let metadata =
        tokio::fs::metadata(templates_root).await.map_err(|e| unavailable(e.to_string()))?;
    if !metadata.is_dir() {
        return Err(unavailable("not a directory".to_string()));
    }
    tokio::fs::read_dir(templates_root).await.map_err(|e| unavailable(e.to_string()))?;
    Ok(())
}

fn is_config_file(relative: &Path) -> bool {
    relative.parent().is_some_and(|p| p.as_os_str().is_empty())
        && relative.to_str().is_some_and(|name| CONFIG_FILES.contains(&name))
}

async fn materialize_file(
    source: PathBuf,
    relative: PathBuf,
    output_base: &Path,
    placeholders: &Placeholders,
) -> Result<PathBuf> {
    let relative_name = relative.to_str().ok_or_else(|| {
        Error::fs(
            &source,
            io::Error::new(io::ErrorKind::InvalidData, "template path is not valid UTF-8"),
        )
    })?;
    let content =
        tokio::fs::read_to_string(&source).await.map_err(|e| Error::fs(&source, e))?;
    let content = placeholders.apply(&content);
    let target = output_base.join(placeholders.apply(relative_name));
    debug!("Processed {} -> {}", relative.display(), target.display());
    write_file(&target, &content).await?;
    Ok(target)
}

/// Materializes every file below `templates_root` into `destination_root`.
///
/// Placeholders are replaced in contents and in template-relative paths. The
/// configuration at `templates_root` decides whether a `<name>` subfolder is
/// created. All files are processed concurrently; a failing file is logged
/// and recorded in the report without stopping the others.
///
/// # Errors
/// * `Error::InvalidArgument` if `name` is not a single plain path component
/// * `Error::TemplateSourceUnavailable` if `templates_root` cannot be read
/// * `Error::ConfigError` if the template configuration is malformed
pub async fn materialize(
    name: &str,
    destination_root: &Path,
    templates_root: &Path,
) -> Result<MaterializeReport> {
    validate_name(name)?;
    check_template_root(templates_root).await?;

    let config = Config::load(templates_root, None)?;
    let placeholders = Placeholders::with_mode(name, config.placeholder_matching)?;
    let output_base = if config.no_mkdir {
        destination_root.to_path_buf()
    } else {
        destination_root.join(name)
    };

    let mut report = MaterializeReport::default();
    let mut pending = Vec::new();

    for entry in WalkDir::new(templates_root).min_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(templates_root).to_path_buf();
                error!("Failed to read template entry {}: {}", path.display(), e);
                let source = e.into_io_error().unwrap_or_else(|| {
                    io::Error::other("filesystem loop while walking templates")
                });
                report.failed.push((path.clone(), Error::fs(path, source)));
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }

        let source = entry.into_path();
        let relative = match source.strip_prefix(templates_root) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => continue,
        };
        if is_config_file(&relative) {
            debug!("Skipping template configuration {}", relative.display());
            continue;
        }
        pending.push((source, relative));
    }

    let results = join_all(pending.into_iter().map(|(source, relative)| {
        let placeholders = &placeholders;
        let output_base = output_base.as_path();
        async move {
            let outcome =
                materialize_file(source.clone(), relative, output_base, placeholders).await;
            (source, outcome)
        }
    }))
    .await;

    for (source, outcome) in results {
        match outcome {
            Ok(target) => report.written.push(target),
            Err(e) => {
                error!("Failed to materialize {}: {}", source.display(), e);
                report.failed.push((source, e));
            }
        }
    }

    Ok(report)
}
