//! Spawn a lane and walk it through the three sampling modes.
//!
//! Run with: `cargo run -p lane-geometry --example lane_sampler`

use lane_math::dvec3;
use lane_geometry::{estimate_length, Lane, SamplingMode, DEFAULT_SUBDIVISIONS};
use lane_math::Frame;

fn main() {
    env_logger::init();

    let mut lane = Lane::spawn(Frame::from_translation(dvec3(0.0, 0.0, 0.0)), 3.0, 8.0)
        .expect("identity frame is always invertible");

    // Pull the right rail outward so the two rails differ in arc length
    lane.right_mut()
        .update_control_point(1, dvec3(4.0, 0.0, 3.0))
        .expect("index 1 is in range");

    let right_len = estimate_length(&lane.right().bezier().points, DEFAULT_SUBDIVISIONS);
    let left_len = estimate_length(&lane.left().bezier().points, DEFAULT_SUBDIVISIONS);
    println!("rail lengths: right {:.3}, left {:.3}", right_len, left_len);

    for mode in [
        SamplingMode::ByParameterStep(0.3),
        SamplingMode::ByDistance(1.0),
        SamplingMode::ByCount(6),
    ] {
        lane.sample_bezier_lines(mode, DEFAULT_SUBDIVISIONS)
            .expect("sampling values are positive");
        let (right, left) = lane.sample_points();
        println!(
            "{:?}: right rail {} samples, left rail {} samples",
            mode,
            right.len(),
            left.len()
        );
        for (i, p) in right.iter().enumerate() {
            println!("  right[{}] = ({:7.3}, {:7.3}, {:7.3})", i, p.x, p.y, p.z);
        }
    }
}
