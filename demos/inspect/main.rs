//! Runs the geometry operations on a few sample shapes and prints the
//! results.
//!
//! ```text
//! cargo run --example inspect
//! RUST_LOG=sfgeom=trace cargo run --example inspect
//! ```

use sfgeom::geometry::{LineString, Polygon};
use sfgeom::{Envelope, Geometry, SfError};

fn main() -> Result<(), SfError> {
    // Default: WARN for everything, DEBUG for sfgeom.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("sfgeom=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let bowtie = Geometry::Polygon(Polygon::from_xy(&[
        (0.0, 0.0),
        (10.0, 10.0),
        (10.0, 0.0),
        (0.0, 10.0),
        (0.0, 0.0),
    ]));
    println!("bowtie simple: {:?}", bowtie.is_simple());

    let u_shape = Geometry::Polygon(Polygon::from_xy(&[
        (1.0, -5.0),
        (9.0, -5.0),
        (9.0, 20.0),
        (7.0, 20.0),
        (7.0, -2.0),
        (3.0, -2.0),
        (3.0, 20.0),
        (1.0, 20.0),
        (1.0, -5.0),
    ]));
    let window = Envelope::new(0.0, 0.0, 10.0, 10.0)?;
    println!("cropped U: {:?}", u_shape.crop(&window));
    println!("U centroid: {:?}", u_shape.centroid());

    let route = Geometry::LineString(LineString::from_xy(&[
        (170.0, -10.0),
        (175.0, -9.9),
        (-179.0, -10.1),
        (-170.0, -10.0),
    ]));
    let continuous = route.minimize_wgs84();
    println!("route minimized: {continuous:?}");
    println!("route simplified: {:?}", continuous.simplify(0.5));
    println!("route centroid: {:?}", route.degrees_centroid());
    println!("route in meters: {:?}", route.degrees_to_meters().crop_web_mercator());
    Ok(())
}
