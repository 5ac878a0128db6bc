//! Skeleton hierarchy assembly
//!
//! Turns the per-label endpoint pairs produced by the generation pipeline
//! into a bone hierarchy. The BODY bone is the root; every other label gets
//! a limb bone hanging from a connector bone that starts on the body.

pub mod rules;
pub mod skeleton;

pub use rules::*;
pub use skeleton::*;
