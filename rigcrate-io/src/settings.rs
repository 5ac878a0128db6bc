//! JSON settings files
//!
//! A settings file maps each label to the list of its points:
//!
//! ```json
//! {
//!   "BODY": [[0.0, 0.9, 0.0], [0.0, 1.2, 0.0]],
//!   "LEFT ARM": [[0.2, 1.45, 0.0], [0.8, 1.4, 0.0]]
//! }
//! ```
//!
//! Label names may use a space or an underscore. Every point must have
//! exactly three components. If a label appears twice the last entry wins.

use rigcrate_core::{
    point_from_array, point_to_array, BoneEndpoints, BoneEndpointsSet, Error, Label, PointCloud3d,
    PointCloudSet, Result,
};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::{PointCloudSetReader, PointCloudSetWriter};

type SettingsDocument = BTreeMap<Label, Vec<[f64; 3]>>;

type BonesDocument = BTreeMap<Label, [[f64; 3]; 2]>;

/// Reader and writer for JSON settings files
pub struct JsonSettings;

impl PointCloudSetReader for JsonSettings {
    fn read_point_cloud_set<P: AsRef<Path>>(path: P) -> Result<PointCloudSet> {
        let contents = fs::read_to_string(path)?;
        point_cloud_set_from_str(&contents)
    }
}

impl PointCloudSetWriter for JsonSettings {
    fn write_point_cloud_set<P: AsRef<Path>>(set: &PointCloudSet, path: P) -> Result<()> {
        let contents = point_cloud_set_to_string(set)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

/// Parse a settings document
pub fn point_cloud_set_from_str(json: &str) -> Result<PointCloudSet> {
    let document: SettingsDocument = serde_json::from_str(json)
        .map_err(|e| Error::InvalidData(format!("Invalid settings file: {}", e)))?;

    Ok(document
        .into_iter()
        .map(|(label, points)| (label, PointCloud3d::from_arrays(points)))
        .collect())
}

/// Serialize a point cloud set as a settings document
///
/// # Errors
/// * `Error::InvalidData` if any coordinate is NaN or infinite
pub fn point_cloud_set_to_string(set: &PointCloudSet) -> Result<String> {
    let mut document = SettingsDocument::new();
    for (label, cloud) in set.iter() {
        let points = cloud
            .iter()
            .map(|p| finite_array(label, point_to_array(p)))
            .collect::<Result<Vec<_>>>()?;
        document.insert(label, points);
    }

    serde_json::to_string_pretty(&document)
        .map_err(|e| Error::InvalidData(format!("Failed to serialize settings: {}", e)))
}

/// Serialize generated endpoints as label → `[first, second]`
pub fn bone_endpoints_set_to_string(bones: &BoneEndpointsSet) -> Result<String> {
    let mut document = BonesDocument::new();
    for (label, bone) in bones.iter() {
        let first = finite_array(label, point_to_array(&bone.first))?;
        let second = finite_array(label, point_to_array(&bone.second))?;
        document.insert(label, [first, second]);
    }

    serde_json::to_string_pretty(&document)
        .map_err(|e| Error::InvalidData(format!("Failed to serialize bones: {}", e)))
}

/// Parse the output of [`bone_endpoints_set_to_string`]
pub fn bone_endpoints_set_from_str(json: &str) -> Result<BoneEndpointsSet> {
    let document: BonesDocument = serde_json::from_str(json)
        .map_err(|e| Error::InvalidData(format!("Invalid bones file: {}", e)))?;

    Ok(document
        .into_iter()
        .map(|(label, [first, second])| {
            (label, BoneEndpoints::new(point_from_array(first), point_from_array(second)))
        })
        .collect())
}

fn finite_array(label: Label, coords: [f64; 3]) -> Result<[f64; 3]> {
    if coords.iter().all(|c| c.is_finite()) {
        Ok(coords)
    } else {
        Err(Error::InvalidData(format!(
            "Non-finite coordinate {:?} in {}",
            coords, label
        )))
    }
}
