//! Builds a room from an L-shaped footprint and prints its face meshes.
//!
//! ```text
//! cargo run --example room
//! RUST_LOG=roomgeo=debug cargo run --example room
//! ```

use roomgeo::math::Point2;
use roomgeo::{ExtrudeRoom, MeshParams, Result, TessellateRoom};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for roomgeo.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("roomgeo=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let footprint = vec![
        Point2::new(0.0, 0.0),
        Point2::new(6.0, 0.0),
        Point2::new(6.0, 3.0),
        Point2::new(3.0, 3.0),
        Point2::new(3.0, 5.0),
        Point2::new(0.0, 5.0),
    ];
    let room = ExtrudeRoom::new(footprint, 2.6).execute()?;
    let meshes = TessellateRoom::new(MeshParams::default()).execute(&room)?;

    for face in &meshes {
        let n = face.mesh.normals[0];
        println!(
            "{:<10} {:>2} vertices {:>2} triangles  normal ({:+.2}, {:+.2}, {:+.2})",
            face.name,
            face.mesh.vertices.len(),
            face.mesh.triangle_count(),
            n.x,
            n.y,
            n.z
        );
    }
    println!("{} edges", room.graph().line_segments()?.len());
    Ok(())
}
