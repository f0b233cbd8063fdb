//! Builds a small scene and exports it as a Raylar JSON document.
//!
//! Usage:
//!   cargo run --example export_obj -- scene.json [model.obj]
//!
//! Without an OBJ argument the scene holds a ground plane, two cubes, a sun
//! light and a camera. With one, every model in the file is added as well.

use anyhow::Result;
use cgmath::{Deg, Matrix4, One, Quaternion, Rad, Rotation3, Vector3};
use raylar_export::geometry::{generate_cube, generate_plane};
use raylar_export::{
    export_scene, CameraNode, LightKind, LightNode, MaterialGraph, MaterialSlot, MemoryScene,
};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| "scene.json".to_string());
    let obj_path = args.next();

    let mut scene = MemoryScene::new();

    let mut ground = generate_plane("ground", 20.0, 20.0);
    ground.add_material(MaterialSlot::new(
        "ground",
        MaterialGraph::new()
            .with_base_color([0.4, 0.4, 0.45, 1.0])
            .with_roughness(0.9),
    ));
    scene.add_mesh(ground);

    let mut cube = generate_cube("cube1");
    cube.transform = Matrix4::from_translation(Vector3::new(0.0, 0.0, 1.0));
    cube.add_material(MaterialSlot::new(
        "painted",
        MaterialGraph::new()
            .with_base_color([0.8, 0.2, 0.2, 1.0])
            .with_roughness(0.4),
    ));
    scene.add_mesh(cube);

    let mut glass = generate_cube("cube2");
    glass.transform = Matrix4::from_translation(Vector3::new(1.0, 1.2, 1.8));
    glass.add_material(MaterialSlot::new(
        "glass",
        MaterialGraph::new()
            .with_base_color([1.0, 1.0, 1.0, 1.0])
            .with_transmission(0.95)
            .with_ior(1.45)
            .with_roughness(0.05),
    ));
    scene.add_mesh(glass);

    if let Some(path) = obj_path {
        let added = scene.add_obj_file(&path)?;
        println!("added {added} mesh(es) from {path}");
    }

    scene.add_light(LightNode {
        name: "sun".to_string(),
        kind: LightKind::Sun,
        position: Vector3::new(4.0, -3.0, 12.0),
        rotation: Quaternion::from_angle_x(Deg(30.0)),
        color: [1.0, 0.98, 0.92],
        energy: 100.0,
    });

    scene.add_camera(CameraNode::new(
        "camera",
        Vector3::new(5.5, 3.7, 1.5),
        Quaternion::one(),
        Rad(0.8575),
    ));

    let summary = export_scene(&scene, &output)?;
    println!(
        "wrote {} ({} textures copied, {} skipped)",
        summary.document_path.display(),
        summary.assets_copied,
        summary.assets_skipped
    );

    Ok(())
}
