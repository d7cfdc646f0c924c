//! Discovery of template sets.
//! A templates root may hold several template sets, one per subdirectory.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::prompt::Prompter;

fn unavailable(path: &Path) -> Error {
    Error::PathUnavailable { path: path.display().to_string() }
}

/// Lists the immediate subdirectories of `path` as absolute paths.
///
/// Entries come back in the filesystem's enumeration order, which is not
/// necessarily sorted. Regular files are skipped.
///
/// # Errors
/// * `Error::PathUnavailable` if `path` is missing or not a directory
/// * `Error::FileSystemError` if an entry cannot be read
pub fn list_subdirectories<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Err(unavailable(path));
    }
    let root = std::path::absolute(path).map_err(|e| Error::fs(path, e))?;
    let entries = fs::read_dir(&root).map_err(|_| unavailable(path))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::fs(&root, e))?;
        let entry_path = entry.path();
        if entry_path.is_dir() {
            dirs.push(entry_path);
        }
    }
    Ok(dirs)
}

/// Picks the template directory to materialize from `root`.
///
/// # Arguments
/// * `root` - Templates root
/// * `set` - Name of a template set (a subdirectory of `root`)
/// * `pick` - Ask the user to choose among the subdirectories of `root`
/// * `prompter` - Used when `pick` is set
///
/// # Returns
/// * `Result<PathBuf>` - `root/<set>`, the chosen subdirectory, or `root` itself
pub fn resolve_template_set(
    root: &Path,
    set: Option<&str>,
    pick: bool,
    prompter: &dyn Prompter,
) -> Result<PathBuf> {
    if set.is_none() && !pick {
        return Ok(root.to_path_buf());
    }

    let sets = list_subdirectories(root)?;

    if let Some(set) = set {
        return sets
            .into_iter()
            .find(|dir| dir.file_name().is_some_and(|n| n == set))
            .ok_or_else(|| unavailable(&root.join(set)));
    }

    let mut names: Vec<String> = sets
        .iter()
        .filter_map(|dir| dir.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();
    names.sort();

    match names.len() {
        0 => Err(Error::PathUnavailable {
            path: format!("{} (no template sets found)", root.display()),
        }),
        1 => {
            debug!("Only one template set available: {}", names[0]);
            Ok(root.join(&names[0]))
        }
        _ => {
            let selection = prompter.select("Choose a template set", &names)?;
            let name = names.get(selection).ok_or_else(|| {
                Error::PromptError(format!("selection {selection} is out of range"))
            })?;
            Ok(root.join(name))
        }
    }
}
