//! Synthetic figure example for rigcrate
//!
//! Builds a noisy six-limb figure, generates one bone per label, and
//! assembles the skeleton.

use rand::prelude::*;
use rigcrate_algorithms::{fit_bone, generate, GenerationOptions};
use rigcrate_core::{Label, Point3d, PointCloud3d, PointCloudSet, Vector3d};
use rigcrate_skeleton::build_skeleton;

fn noisy_segment(rng: &mut StdRng, start: Point3d, end: Point3d, count: usize) -> PointCloud3d {
    (0..count)
        .map(|i| {
            let t = i as f64 / (count - 1) as f64;
            let jitter = Vector3d::new(
                rng.gen_range(-0.01..=0.01),
                rng.gen_range(-0.01..=0.01),
                rng.gen_range(-0.01..=0.01),
            );
            start + (end - start) * t + jitter
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    println!("rigcrate Synthetic Figure Example");
    println!("=================================");

    let mut rng = StdRng::seed_from_u64(7);
    let limbs = [
        (Label::Head, [0.0, 1.6, 0.0], [0.0, 1.9, 0.0]),
        (Label::Body, [0.0, 0.9, 0.0], [0.0, 1.5, 0.0]),
        (Label::LeftArm, [0.2, 1.45, 0.0], [0.8, 1.4, 0.0]),
        (Label::RightArm, [-0.2, 1.45, 0.0], [-0.8, 1.4, 0.0]),
        (Label::LeftLeg, [0.1, 0.85, 0.0], [0.12, 0.0, 0.05]),
        (Label::RightLeg, [-0.1, 0.85, 0.0], [-0.12, 0.0, 0.05]),
    ];

    let mut clouds = PointCloudSet::new();
    for (label, start, end) in limbs {
        let cloud = noisy_segment(&mut rng, Point3d::from(start), Point3d::from(end), 300);
        clouds.insert(label, cloud);
    }
    println!("Created {} labeled point clouds", clouds.len());

    // A single fit exposes the intermediate results
    let body_fit = fit_bone(&clouds[Label::Body], &GenerationOptions::default())?;
    println!("\nBODY fit:");
    println!("- centroid:    {:?}", body_fit.centroid);
    println!("- eigenvalue:  {:.6}", body_fit.eigen.eigenvalue);
    println!("- eigenvector: {:?}", body_fit.eigen.eigenvector);

    let bones = generate(&clouds)?;
    println!("\nGenerated bones:");
    for (label, bone) in bones.iter() {
        println!(
            "- {:<10} {:?} -> {:?} (length {:.3})",
            label.display_name(),
            bone.first,
            bone.second,
            bone.length()
        );
    }

    let skeleton = build_skeleton(&bones)?;
    println!("\nSkeleton ({} bones):", skeleton.len());
    for bone in skeleton.bones() {
        let parent = skeleton
            .parent(bone)
            .map(|p| p.name.as_str())
            .unwrap_or("-");
        println!("- {:<24} parent {}", bone.name, parent);
    }

    Ok(())
}
