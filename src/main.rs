use std::f32::consts::FRAC_PI_2;

use anyhow::Result;
use ggvec::core::prelude::*;
use ggvec::util::linalg::{vec2, vec3};
use tracing_subscriber::fmt::time::OffsetTime;

fn main() -> Result<()> {
    setup_log();

    let v = Vec3f::new(3.0, 4.0, 12.0);
    let (theta, phi) = v.heading();
    info!("v={v}, |v|={}, heading=({theta:.3}, {phi:.3})", v.mag());
    println!("unit(v) = {:.4}", vec3::unit(v));
    println!(
        "x cross y = {}",
        vec3::cross(Vec3f::x_axis(), Vec3f::y_axis())
    );

    let mut spun = Vec3f::x_axis();
    spun.rotate_along_axis(Vec3f::z_axis(), FRAC_PI_2)
        .reflect_through_plane(Vec3f::y_axis());
    println!("x rotated about z then reflected through y = {spun:.4}");

    let mut w = Vec2f::new(1.0, 4.0);
    w.mul_mut(1.2).rotate(FRAC_PI_2);
    println!("w = {w:.3}, heading {:.3}", w.heading());
    println!(
        "angle from y to x = {:.4}",
        vec2::angle_between(Vec2f::y_axis(), Vec2f::x_axis())
    );
    if let Err(e) = w.div_mut(0.0) {
        warn!("w.div_mut(0.0): {e}; w unchanged at {w:.3}");
    }
    println!("w / 2 = {:.3}", w.checked_div(2.0)?);

    let mut rng = rng::from_entropy();
    let samples: Vec<Vec3f> = (0..3).map(|_| Vec3f::random_from(&mut rng, 2.0)).collect();
    for s in &samples {
        println!("random (len 2): {s:.4}, |s|={:.4}", s.mag());
    }
    let centroid = samples.iter().copied().sum::<Vec3f>() * (1.0 / 3.0);
    info!("centroid of samples: {centroid:.4}");
    Ok(())
}

fn setup_log() {
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(std::io::stderr)
        .init();
}
