//! Tests for JSON settings files

use crate::settings::*;
use crate::{read_point_cloud_set, write_point_cloud_set};
use approx::assert_relative_eq;
use rigcrate_core::{BoneEndpoints, BoneEndpointsSet, Error, Label, Point3d, PointCloud3d, PointCloudSet};
use std::fs;
use tempfile::tempdir;

fn sample_set() -> PointCloudSet {
    let mut set = PointCloudSet::new();
    set.insert(
        Label::Body,
        PointCloud3d::from_arrays([[0.0, 0.9, 0.0], [0.0, 1.2, 0.01], [0.0, 1.5, -0.01]]),
    );
    set.insert(
        Label::LeftArm,
        PointCloud3d::from_arrays([[0.2, 1.45, 0.0], [0.5, 1.42, 0.0], [0.8, 1.4, 0.0]]),
    );
    set
}

#[test]
fn test_parse_settings_document() {
    let json = r#"{
        "BODY": [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        "LEFT ARM": [[1.0, 2.0, 3.0]],
        "RIGHT_LEG": []
    }"#;

    let set = point_cloud_set_from_str(json).unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(set[Label::Body].len(), 2);
    assert_eq!(set[Label::Body][1], Point3d::new(0.0, 1.0, 0.0));
    assert_eq!(set[Label::LeftArm][0], Point3d::new(1.0, 2.0, 3.0));
    assert!(set[Label::RightLeg].is_empty());
}

#[test]
fn test_point_order_is_preserved() {
    let json = r#"{"HEAD": [[3.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]]}"#;

    let set = point_cloud_set_from_str(json).unwrap();
    let xs: Vec<f64> = set[Label::Head].iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![3.0, 1.0, 2.0]);
}

#[test]
fn test_reject_points_outside_3d() {
    let two_d = r#"{"BODY": [[0.0, 1.0]]}"#;
    assert!(matches!(point_cloud_set_from_str(two_d), Err(Error::InvalidData(_))));

    let four_d = r#"{"BODY": [[0.0, 1.0, 2.0, 3.0]]}"#;
    assert!(matches!(point_cloud_set_from_str(four_d), Err(Error::InvalidData(_))));
}

#[test]
fn test_reject_unknown_label_and_malformed_json() {
    let unknown = r#"{"TAIL": [[0.0, 1.0, 2.0]]}"#;
    assert!(matches!(point_cloud_set_from_str(unknown), Err(Error::InvalidData(_))));

    assert!(matches!(point_cloud_set_from_str("{\"BODY\": "), Err(Error::InvalidData(_))));
    assert!(matches!(point_cloud_set_from_str("[1, 2, 3]"), Err(Error::InvalidData(_))));
}

#[test]
fn test_serialized_names_and_indentation() {
    let json = point_cloud_set_to_string(&sample_set()).unwrap();

    assert!(json.contains("\"BODY\""));
    assert!(json.contains("\"LEFT ARM\""));
    assert!(json.starts_with("{\n  \"BODY\""));
}

#[test]
fn test_string_round_trip() {
    let set = sample_set();
    let json = point_cloud_set_to_string(&set).unwrap();
    let loaded = point_cloud_set_from_str(&json).unwrap();

    assert_eq!(loaded, set);
}

#[test]
fn test_reject_non_finite_on_write() {
    let mut set = PointCloudSet::new();
    set.insert(Label::Head, PointCloud3d::from_arrays([[0.0, f64::NAN, 0.0]]));

    let err = point_cloud_set_to_string(&set).unwrap_err();
    assert!(matches!(err, Error::InvalidData(_)));
}

#[test]
fn test_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let set = sample_set();
    write_point_cloud_set(&set, &path).unwrap();
    let loaded = read_point_cloud_set(&path).unwrap();
    assert_eq!(loaded, set);

    // Writing again replaces the previous contents
    let mut smaller = PointCloudSet::new();
    smaller.insert(Label::Head, PointCloud3d::from_arrays([[0.0, 1.7, 0.0], [0.0, 1.9, 0.0]]));
    write_point_cloud_set(&smaller, &path).unwrap();
    assert_eq!(read_point_cloud_set(&path).unwrap(), smaller);
}

#[test]
fn test_extension_is_case_insensitive() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("SETTINGS.JSON");

    write_point_cloud_set(&sample_set(), &path).unwrap();
    assert_eq!(read_point_cloud_set(&path).unwrap(), sample_set());
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.txt");
    fs::write(&path, "{}").unwrap();

    assert!(matches!(read_point_cloud_set(&path), Err(Error::UnsupportedFormat(_))));
    assert!(matches!(
        write_point_cloud_set(&sample_set(), &path),
        Err(Error::UnsupportedFormat(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.json");

    assert!(matches!(read_point_cloud_set(&path), Err(Error::Io(_))));
}

#[test]
fn test_bones_round_trip() {
    let mut bones = BoneEndpointsSet::new();
    bones.insert(
        Label::Body,
        BoneEndpoints::new(Point3d::new(0.0, 0.9, 0.0), Point3d::new(0.0, 1.5, 0.0)),
    );
    bones.insert(
        Label::RightArm,
        BoneEndpoints::new(Point3d::new(-0.2, 1.45, 0.0), Point3d::new(-0.8, 1.4, 0.0)),
    );

    let json = bone_endpoints_set_to_string(&bones).unwrap();
    assert!(json.contains("\"RIGHT ARM\""));

    let loaded = bone_endpoints_set_from_str(&json).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_relative_eq!(loaded[Label::RightArm].second, Point3d::new(-0.8, 1.4, 0.0));
    assert_eq!(loaded, bones);
}

#[test]
fn test_duplicate_label_last_entry_wins() {
    let json = r#"{
        "LEFT ARM": [[1.0, 0.0, 0.0]],
        "LEFT_ARM": [[2.0, 0.0, 0.0], [3.0, 0.0, 0.0]]
    }"#;

    let set = point_cloud_set_from_str(json).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set[Label::LeftArm].len(), 2);
    assert_eq!(set[Label::LeftArm][0], Point3d::new(2.0, 0.0, 0.0));
}
