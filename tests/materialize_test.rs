use std::fs;
use std::path::Path;

use stencil::error::Error;
use stencil::generate::{generate_custom_files, generate_files_from_template, TemplateRequest};
use stencil::materialize::materialize;
use tempfile::TempDir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn two_file_template(root: &Path) {
    write(&root.join("index.js"), "export { default } from './COMPONENT_NAME';\n");
    write(&root.join("COMPONENT_NAME.css"), ".component_name {}\n");
}

#[test_log::test(tokio::test)]
async fn test_materialize_into_name_folder() {
    let templates = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    two_file_template(templates.path());

    let report = materialize("Button", out.path(), templates.path()).await.unwrap();

    assert!(report.is_complete());
    assert_eq!(report.written.len(), 2);
    assert_eq!(
        fs::read_to_string(out.path().join("Button/index.js")).unwrap(),
        "export { default } from './Button';\n"
    );
    assert_eq!(
        fs::read_to_string(out.path().join("Button/Button.css")).unwrap(),
        ".button {}\n"
    );
}

#[test_log::test(tokio::test)]
async fn test_materialize_with_no_mkdir() {
    let templates = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    two_file_template(templates.path());
    write(&templates.path().join("stencil.json"), r#"{ "noMkdir": true }"#);

    let report = materialize("Button", out.path(), templates.path()).await.unwrap();

    assert!(report.is_complete());
    assert!(out.path().join("index.js").is_file());
    assert!(out.path().join("Button.css").is_file());
    assert!(!out.path().join("Button").exists());
    assert!(!out.path().join("stencil.json").exists());
}

#[test_log::test(tokio::test)]
async fn test_materialize_nested_tree() {
    let templates = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let expected = TempDir::new().unwrap();

    write(&templates.path().join("COMPONENT_NAME.js"), "class COMPONENT_NAME {}\n");
    write(
        &templates.path().join("__tests__/cOMPONENT_NAME.test.js"),
        "describe('COMPONENT_CAP_NAME', () => {});\n",
    );
    write(&templates.path().join("component_name/README.md"), "plain text\n");

    write(&expected.path().join("NavBar.js"), "class NavBar {}\n");
    write(
        &expected.path().join("__tests__/navBar.test.js"),
        "describe('NAVBAR', () => {});\n",
    );
    write(&expected.path().join("navbar/README.md"), "plain text\n");

    let report = materialize("NavBar", out.path(), templates.path()).await.unwrap();

    assert!(report.is_complete());
    assert!(!dir_diff::is_different(out.path().join("NavBar"), expected.path()).unwrap());
}

#[test_log::test(tokio::test)]
async fn test_word_boundary_matching_from_config() {
    let templates = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write(
        &templates.path().join("stencil.yml"),
        "noMkdir: true\nplaceholderMatching: word\n",
    );
    write(&templates.path().join("COMPONENT_NAME.js"), "MY_COMPONENT_NAME = COMPONENT_NAME;\n");

    materialize("Foo", out.path(), templates.path()).await.unwrap();

    assert_eq!(
        fs::read_to_string(out.path().join("Foo.js")).unwrap(),
        "MY_COMPONENT_NAME = Foo;\n"
    );
}

#[test_log::test(tokio::test)]
async fn test_missing_template_root() {
    let out = TempDir::new().unwrap();
    let missing = out.path().join("missing");

    let result = materialize("Button", out.path(), &missing).await;

    assert!(matches!(result, Err(Error::TemplateSourceUnavailable { .. })));
    assert!(fs::read_dir(out.path()).unwrap().next().is_none());
}

#[test_log::test(tokio::test)]
async fn test_template_root_is_a_file() {
    let out = TempDir::new().unwrap();
    let file = out.path().join("template.js");
    write(&file, "COMPONENT_NAME");

    let result = materialize("Button", out.path(), &file).await;
    assert!(matches!(result, Err(Error::TemplateSourceUnavailable { .. })));
}

#[test_log::test(tokio::test)]
async fn test_empty_name_is_rejected() {
    let templates = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    two_file_template(templates.path());

    let result = materialize("", out.path(), templates.path()).await;
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test_log::test(tokio::test)]
async fn test_parent_dir_name_is_rejected() {
    let templates = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    two_file_template(templates.path());
    let dest = out.path().join("dest");
    fs::create_dir(&dest).unwrap();

    for name in [".", ".."] {
        let result = materialize(name, &dest, templates.path()).await;
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
    assert!(!out.path().join("index.js").exists());
    assert_eq!(fs::read_dir(&dest).unwrap().count(), 0);
}

#[test_log::test(tokio::test)]
async fn test_failed_file_does_not_stop_the_others() {
    let templates = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    two_file_template(templates.path());
    // Invalid UTF-8 cannot be read as a text template.
    fs::write(templates.path().join("binary.dat"), [0xff, 0xfe, 0x00]).unwrap();

    let report = materialize("Button", out.path(), templates.path()).await.unwrap();

    assert_eq!(report.written.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, templates.path().join("binary.dat"));
    assert!(matches!(report.failed[0].1, Error::FileSystemError { .. }));
    assert!(out.path().join("Button/Button.css").is_file());
}

#[test_log::test(tokio::test)]
async fn test_write_failure_does_not_stop_the_others() {
    let templates = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    two_file_template(templates.path());
    write(&templates.path().join("sub/x.js"), "COMPONENT_NAME");
    // A regular file where the output directory `sub` has to go.
    write(&out.path().join("Button/sub"), "occupied");

    let report = materialize("Button", out.path(), templates.path()).await.unwrap();

    assert_eq!(report.written.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, templates.path().join("sub/x.js"));
    match &report.failed[0].1 {
        Error::FileSystemError { path, .. } => {
            assert_eq!(Path::new(path), out.path().join("Button/sub"));
        }
        other => panic!("Expected FileSystemError, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(out.path().join("Button/sub")).unwrap(), "occupied");
    assert!(out.path().join("Button/Button.css").is_file());
    assert!(out.path().join("Button/index.js").is_file());
}

#[cfg(target_os = "linux")]
#[test_log::test(tokio::test)]
async fn test_non_utf8_template_path_is_reported() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let templates = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    two_file_template(templates.path());
    let odd = templates.path().join(OsStr::from_bytes(b"COMPONENT_NAME-\xff.js"));
    fs::write(&odd, "COMPONENT_NAME").unwrap();

    let report = materialize("Button", out.path(), templates.path()).await.unwrap();

    assert_eq!(report.written.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, odd);
    match &report.failed[0].1 {
        Error::FileSystemError { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
        }
        other => panic!("Expected FileSystemError, got {other:?}"),
    }
    assert_eq!(fs::read_dir(out.path().join("Button")).unwrap().count(), 2);
}

#[test_log::test(tokio::test)]
async fn test_entry_points_and_alias() {
    let templates = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    two_file_template(templates.path());

    let request = TemplateRequest {
        name: "Modal".to_string(),
        destination_path: out.path().to_path_buf(),
        templates_path: templates.path().to_path_buf(),
    };
    let report = generate_files_from_template(&request).await.unwrap();
    assert_eq!(report.written.len(), 2);

    let request = TemplateRequest { name: "Dialog".to_string(), ..request };
    let report = generate_custom_files(&request).await.unwrap();
    assert_eq!(report.written.len(), 2);

    assert!(out.path().join("Modal/Modal.css").is_file());
    assert!(out.path().join("Dialog/Dialog.css").is_file());
}
