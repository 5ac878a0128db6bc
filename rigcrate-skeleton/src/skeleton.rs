//! Bone hierarchy built from generated endpoints

use crate::rules::{attachment, BodyEnd};
use rigcrate_core::{BoneEndpointsSet, Error, Label, Point3d, Result};
use serde::{Deserialize, Serialize};

/// Role of a bone in the hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoneKind {
    Root,
    Limb,
    Connector,
}

/// A single bone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bone {
    pub name: String,
    pub label: Label,
    pub kind: BoneKind,
    pub head: Point3d,
    pub tail: Point3d,
    /// Index of the parent bone in [`Skeleton::bones`]
    pub parent: Option<usize>,
}

impl Bone {
    pub fn length(&self) -> f64 {
        (self.tail - self.head).norm()
    }
}

/// Name of the limb (or root) bone for `label`
pub fn bone_name(label: Label) -> String {
    format!("Bone{}", label.as_str())
}

/// Name of the connector bone for `label`
pub fn connector_name(label: Label) -> String {
    format!("Bone{}_Connector", label.as_str())
}

/// An ordered bone hierarchy
///
/// The root bone is always at index 0 and every parent precedes its
/// children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skeleton {
    bones: Vec<Bone>,
}

impl Skeleton {
    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    /// The root bone, `None` only for an empty skeleton
    pub fn root(&self) -> Option<&Bone> {
        self.bones.first()
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Look a bone up by name
    pub fn bone(&self, name: &str) -> Option<&Bone> {
        self.bones.iter().find(|b| b.name == name)
    }

    /// Index of the named bone
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.bones.iter().position(|b| b.name == name)
    }

    /// Indices of the direct children of the bone at `index`
    pub fn children(&self, index: usize) -> Vec<usize> {
        self.bones
            .iter()
            .enumerate()
            .filter(|(_, b)| b.parent == Some(index))
            .map(|(i, _)| i)
            .collect()
    }

    /// The parent of `bone`, if any
    pub fn parent(&self, bone: &Bone) -> Option<&Bone> {
        bone.parent.and_then(|i| self.bones.get(i))
    }
}

/// Assemble the skeleton for a set of generated endpoints
///
/// BODY becomes the root. Each other label contributes a connector bone
/// starting on the body and a limb bone parented to that connector.
///
/// # Errors
/// * `Error::MissingLabel(Label::Body)` if the set has no BODY entry
pub fn build_skeleton(endpoints: &BoneEndpointsSet) -> Result<Skeleton> {
    let body = endpoints
        .get(Label::Body)
        .ok_or(Error::MissingLabel(Label::Body))?;

    let mut bones = Vec::with_capacity(endpoints.len() * 2 - 1);
    bones.push(Bone {
        name: bone_name(Label::Body),
        label: Label::Body,
        kind: BoneKind::Root,
        head: body.first,
        tail: body.second,
        parent: None,
    });

    for (label, pair) in endpoints.iter() {
        let Some(rule) = attachment(label) else {
            continue;
        };

        let (head, tail) = rule.orientation.apply(pair);
        let anchor: Point3d = match rule.body_end {
            BodyEnd::Head => body.first,
            BodyEnd::Tail => body.second,
        };

        let connector = bones.len();
        bones.push(Bone {
            name: connector_name(label),
            label,
            kind: BoneKind::Connector,
            head: anchor,
            tail: head,
            parent: Some(0),
        });
        bones.push(Bone {
            name: bone_name(label),
            label,
            kind: BoneKind::Limb,
            head,
            tail,
            parent: Some(connector),
        });
    }

    Ok(Skeleton { bones })
}
