//! Common constants used throughout Stencil.

/// Replaced by the component name as given
pub const COMPONENT_NAME: &str = "COMPONENT_NAME";

/// Replaced by the lowercased component name
pub const COMPONENT_NAME_LOWER: &str = "component_name";

/// Replaced by the uppercased component name
pub const COMPONENT_NAME_UPPER: &str = "COMPONENT_CAP_NAME";

/// Replaced by the component name with its first character lowercased
pub const COMPONENT_NAME_CAMEL: &str = "cOMPONENT_NAME";

/// Supported configuration file names, in lookup order
pub const CONFIG_FILES: [&str; 3] = ["stencil.json", "stencil.yml", "stencil.yaml"];

/// File name override keys understood by the file name resolver
pub const TEST_FILE_NAME: &str = "testFileName";
pub const COMPONENT_FILE_NAME: &str = "componentFileName";
pub const STYLE_FILE_NAME: &str = "styleFileName";
