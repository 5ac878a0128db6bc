//! Fixed attachment rules per label

use rigcrate_core::{BoneEndpoints, Label, Point3d};
use serde::{Deserialize, Serialize};

/// Which end of the body bone a connector starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyEnd {
    Head,
    Tail,
}

/// How a label's endpoint pair maps onto its limb bone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// head = first, tail = second
    Forward,
    /// head = second, tail = first
    Reversed,
}

impl Orientation {
    /// `(head, tail)` for the given endpoints
    pub fn apply(&self, endpoints: &BoneEndpoints) -> (Point3d, Point3d) {
        match self {
            Orientation::Forward => (endpoints.first, endpoints.second),
            Orientation::Reversed => (endpoints.second, endpoints.first),
        }
    }
}

/// Attachment of a non-root label to the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attachment {
    pub body_end: BodyEnd,
    pub orientation: Orientation,
}

/// The attachment rule for `label`, or `None` for the root label BODY
///
/// | label | limb      | connector starts at |
/// |-------|-----------|---------------------|
/// | HEAD  | reversed  | body tail           |
/// | ARMS  | forward   | body tail           |
/// | LEGS  | reversed  | body head           |
pub fn attachment(label: Label) -> Option<Attachment> {
    match label {
        Label::Body => None,
        Label::Head => Some(Attachment {
            body_end: BodyEnd::Tail,
            orientation: Orientation::Reversed,
        }),
        Label::LeftArm | Label::RightArm => Some(Attachment {
            body_end: BodyEnd::Tail,
            orientation: Orientation::Forward,
        }),
        Label::LeftLeg | Label::RightLeg => Some(Attachment {
            body_end: BodyEnd::Head,
            orientation: Orientation::Reversed,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_body_is_root() {
        for label in Label::ALL {
            assert_eq!(attachment(label).is_none(), label == Label::Body);
        }
    }

    #[test]
    fn test_orientation() {
        let endpoints = BoneEndpoints::new(Point3d::new(1.0, 0.0, 0.0), Point3d::new(2.0, 0.0, 0.0));

        assert_eq!(Orientation::Forward.apply(&endpoints), (endpoints.first, endpoints.second));
        assert_eq!(Orientation::Reversed.apply(&endpoints), (endpoints.second, endpoints.first));
    }

    #[test]
    fn test_legs_and_head_are_reversed() {
        for label in [Label::Head, Label::LeftLeg, Label::RightLeg] {
            assert_eq!(attachment(label).unwrap().orientation, Orientation::Reversed);
        }
        for label in [Label::LeftArm, Label::RightArm] {
            assert_eq!(attachment(label).unwrap().orientation, Orientation::Forward);
        }
    }
}
