//! Bone endpoint types

use serde::{Deserialize, Serialize};

use crate::point::Point3d;

/// The two extremal points generated for one label, in world space
///
/// The pair carries no head/tail meaning; assigning one is up to the
/// skeleton builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoneEndpoints {
    pub first: Point3d,
    pub second: Point3d,
}

impl BoneEndpoints {
    pub fn new(first: Point3d, second: Point3d) -> Self {
        Self { first, second }
    }

    /// Distance between the two endpoints
    pub fn length(&self) -> f64 {
        (self.second - self.first).norm()
    }

    /// The same endpoints with `first` and `second` swapped
    pub fn reversed(&self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}
