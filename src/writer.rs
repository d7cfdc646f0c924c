//! Writing generated files to disk.

use std::path::{Path, PathBuf};

use futures::future::join_all;
use log::{debug, warn};

use crate::error::{Error, Result};

/// A generated file, relative to the directory it will be written into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub content: String,
}

impl OutputFile {
    pub fn new<P: Into<PathBuf>>(path: P, content: String) -> Self {
        Self { path: path.into(), content }
    }
}

/// Writes `content` to `path`, creating missing parent directories.
/// An existing file is overwritten.
pub async fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| Error::fs(parent, e))?;
    }
    debug!("Writing file: {}", path.display());
    tokio::fs::write(path, content).await.map_err(|e| Error::fs(path, e))
}

/// Waits for every write to settle before reporting the first failure.
async fn write_all(root: &Path, files: &[OutputFile]) -> Result<()> {
    join_all(files.iter().map(|file| write_file_at(root, file)))
        .await
        .into_iter()
        .collect()
}

async fn write_file_at(root: &Path, file: &OutputFile) -> Result<()> {
    write_file(&root.join(&file.path), &file.content).await
}

fn staging_dir(base: &Path) -> Result<PathBuf> {
    let file_name = base.file_name().ok_or_else(|| {
        Error::InvalidArgument(format!("output path '{}' has no final component", base.display()))
    })?;
    let staged = format!(".{}.staging-{}", file_name.to_string_lossy(), std::process::id());
    Ok(base.with_file_name(staged))
}

/// Writes every file below `base` and returns the written paths.
///
/// When `base` does not exist yet, the files are first written into a sibling
/// staging directory which is then renamed onto `base`, so either the whole
/// directory appears or nothing does. When `base` exists, files are written in
/// place and a failure can leave some of them behind.
pub async fn commit(base: &Path, files: &[OutputFile]) -> Result<Vec<PathBuf>> {
    let written = files.iter().map(|file| base.join(&file.path)).collect();

    let exists = tokio::fs::try_exists(base).await.map_err(|e| Error::fs(base, e))?;
    if exists {
        debug!("Writing into existing directory {}", base.display());
        write_all(base, files).await?;
        return Ok(written);
    }

    let staging = staging_dir(base)?;
    debug!("Staging {} file(s) in {}", files.len(), staging.display());
    tokio::fs::create_dir_all(&staging).await.map_err(|e| Error::fs(&staging, e))?;

    let result = match write_all(&staging, files).await {
        Ok(()) => tokio::fs::rename(&staging, base).await.map_err(|e| Error::fs(base, e)),
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        if let Err(cleanup) = tokio::fs::remove_dir_all(&staging).await {
            warn!("Could not remove staging directory {}: {}", staging.display(), cleanup);
        }
        return Err(e);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_dir_is_a_hidden_sibling() {
        let staged = staging_dir(Path::new("out/Button")).unwrap();
        assert_eq!(staged.parent(), Some(Path::new("out")));
        let name = staged.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".Button.staging-"));
    }

    #[test]
    fn test_staging_dir_requires_a_file_name() {
        assert!(staging_dir(Path::new("..")).is_err());
    }
}
