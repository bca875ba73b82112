//! Tests for the export loading service

use std::path::PathBuf;

use tempfile::TempDir;

use rstree::application::{ApplicationError, ExportService};
use rstree::config::Settings;
use rstree::domain::TreeNode;
use rstree::util::testing;

fn create_export(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    std::fs::write(&path, content).expect("write export file");
    path
}

fn default_service() -> ExportService {
    ExportService::from_settings(&Settings::default()).expect("valid default settings")
}

#[test]
fn given_export_file_when_parsing_then_tree_returned() {
    testing::init_test_setup();
    let temp = TempDir::new().unwrap();
    let path = create_export(
        &temp,
        "model.txt",
        "|--- Age <= 30.00\n|   |--- class: 0\n|   |--- class: 1\n",
    );

    let export = default_service().parse_file(&path).expect("parse export");

    assert_eq!(export.path, path);
    assert_eq!(export.tree.condition(), Some("Age <= 30.00"));
    assert_eq!(export.tree.leaf_classes(), vec![0, 1]);
}

#[test]
fn given_missing_file_when_parsing_then_file_not_found() {
    let result = default_service().parse_file(&PathBuf::from("/nonexistent/model.txt"));

    assert!(matches!(result, Err(ApplicationError::FileNotFound(_))));
}

#[test]
fn given_non_utf8_file_when_parsing_then_invalid_encoding() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("binary.txt");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).expect("write binary file");

    let result = default_service().parse_file(&path);

    assert!(matches!(result, Err(ApplicationError::InvalidEncoding(_))));
}

#[test]
fn given_mixed_directory_when_scanning_then_only_exports_in_sorted_order() {
    let temp = TempDir::new().unwrap();
    create_export(&temp, "b_model.txt", "|--- B <= 1.00\n|   |--- class: 0\n");
    create_export(&temp, "a_model.txt", "|--- A <= 1.00\n|   |--- class: 1\n");
    create_export(&temp, "notes.md", "# not an export\n");
    create_export(&temp, "nested/c_model.txt", "|--- C <= 1.00\n|   |--- class: 2\n");

    let exports = default_service()
        .scan_directory(temp.path())
        .expect("scan directory");

    let names: Vec<String> = exports
        .iter()
        .map(|e| e.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a_model.txt", "b_model.txt", "c_model.txt"]);
}

#[test]
fn given_undecodable_export_when_scanning_then_skipped() {
    let temp = TempDir::new().unwrap();
    create_export(&temp, "good.txt", "|--- A <= 1.00\n|   |--- class: 0\n");
    std::fs::write(temp.path().join("bad.txt"), [0xff, 0xfe]).expect("write binary file");

    let exports = default_service()
        .scan_directory(temp.path())
        .expect("scan tolerates undecodable files");

    assert_eq!(exports.len(), 1);
    assert!(exports[0].path.ends_with("good.txt"));
}

#[test]
fn given_file_path_when_scanning_then_not_a_directory() {
    let temp = TempDir::new().unwrap();
    let path = create_export(&temp, "model.txt", "|--- A <= 1.00\n");

    let result = default_service().scan_directory(&path);

    assert!(matches!(result, Err(ApplicationError::NotADirectory(_))));
}

#[test]
fn given_missing_directory_when_scanning_then_file_not_found() {
    let result = default_service().scan_directory(&PathBuf::from("/nonexistent/exports"));

    assert!(matches!(result, Err(ApplicationError::FileNotFound(_))));
}

#[test]
fn given_parsed_export_when_laying_out_then_layout_matches_tree() {
    let temp = TempDir::new().unwrap();
    let path = create_export(
        &temp,
        "model.txt",
        "|--- A <= 1.00\n|   |--- B <= 2.00\n|   |   |--- class: 0\n|   |--- B >  2.00\n|   |   |--- class: 1\n",
    );
    let service = default_service();

    let export = service.parse_file(&path).expect("parse export");
    let placed = service.layout(&export.tree).expect("decision root");

    assert_eq!(placed.condition, "A <= 1.00");
    assert_eq!(placed.visible_children.len(), 2);

    // leaf-only export yields no layout
    let leaf = TreeNode::Leaf { class_id: 1 };
    assert_eq!(service.layout(&leaf), None);
}

#[test]
fn given_custom_extension_when_scanning_then_respected() {
    let temp = TempDir::new().unwrap();
    create_export(&temp, "model.tree", "|--- A <= 1.00\n|   |--- class: 0\n");
    create_export(&temp, "model.txt", "|--- B <= 1.00\n|   |--- class: 1\n");

    let mut settings = Settings::default();
    settings.export_extension = "tree".into();
    let service = ExportService::from_settings(&settings).expect("valid settings");

    let exports = service.scan_directory(temp.path()).expect("scan directory");

    assert_eq!(exports.len(), 1);
    assert!(exports[0].path.ends_with("model.tree"));
}
