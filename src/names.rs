//! Resolution of generated file names.

use indexmap::IndexMap;
use log::warn;

use crate::constants::{COMPONENT_FILE_NAME, STYLE_FILE_NAME, TEST_FILE_NAME};
use crate::error::Result;
use crate::substitute::Placeholders;

/// Final file names, without extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNames {
    pub test_file_name: String,
    pub component_file_name: String,
    pub style_file_name: String,
}

/// Computes the test, component and style file names for `name`.
///
/// Defaults are `<test_prefix>.<name>`, `<name>` and `<name>`. Each override
/// present in `overrides` replaces its default after placeholder substitution.
/// Unknown override keys are ignored.
///
/// # Errors
/// * `Error::InvalidArgument` if `name` is empty
pub fn resolve_file_names(
    overrides: &IndexMap<String, String>,
    name: &str,
    test_prefix: &str,
) -> Result<FileNames> {
    let placeholders = Placeholders::new(name)?;

    let mut names = FileNames {
        test_file_name: format!("{test_prefix}.{name}"),
        component_file_name: name.to_string(),
        style_file_name: name.to_string(),
    };

    for (key, value) in overrides {
        let resolved = placeholders.apply(value);
        match key.as_str() {
            TEST_FILE_NAME => names.test_file_name = resolved,
            COMPONENT_FILE_NAME => names.component_file_name = resolved,
            STYLE_FILE_NAME => names.style_file_name = resolved,
            other => warn!("Ignoring unknown file name override '{other}'"),
        }
    }

    Ok(names)
}
