//! Headless scripted walkthrough.
//!
//! Builds a stand-in gallery (no model file needed), walks the hue
//! corridor, then turns to face the cube installation, printing what the
//! external engine would render each second.

use cgmath::{Point3, Vector3};
use std::f32::consts::PI;

use vernissage::scene::SceneObject;
use vernissage::spatial::Aabb;
use vernissage::GalleryApp;

const DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let mut app = GalleryApp::new(Some(7));

    // Stand-in trigger curtains where the gallery model would put them.
    let corridor = SceneObject::new(
        "S1Bounds",
        Aabb::new(Point3::new(-1.0, 0.0, -3.5), Point3::new(1.0, 0.0, 1.0)),
    );
    app.scene.add_object(corridor);

    let mut plinth = SceneObject::new(
        "S2Bounds",
        Aabb::new(Point3::new(-1.0, 0.0, -1.0), Point3::new(1.0, 0.0, 1.0)),
    );
    plinth.set_translation(Vector3::new(4.0, 0.0, 0.0));
    app.scene.add_object(plinth);

    app.wire_sketches();
    println!(
        "{} sketches active, {} lights",
        app.active_sketches(),
        app.scene.lights().len()
    );

    // Walk the corridor: entrance at z = 1.5 down to the far end.
    println!("-- hue corridor --");
    for frame in 0..600 {
        let t = frame as f32 * DT;
        app.camera.position = Point3::new(0.0, 1.0, 1.5 - t * 0.5);
        app.tick(DT);
        if frame % 60 == 0 {
            let grade = app.hue_grade();
            println!(
                "t={:5.2}s z={:6.2} hue={:6.1} intensity={:5.1}",
                t,
                app.camera.position.z,
                grade.hue(),
                grade.intensity()
            );
        }
    }

    // Step onto the plinth zone and turn toward the back wall; the cube
    // field regenerates once, then re-arms only after stepping out.
    println!("-- cube field --");
    app.camera.position = Point3::new(4.0, 1.0, 0.0);
    for visit in 0..3 {
        app.camera.yaw = PI;
        app.tick(DT);
        let first = app.reflection().render_list().first().cloned();
        println!(
            "visit {}: reflection list has {} instances (template {:?})",
            visit + 1,
            app.reflection().render_list().len(),
            first
        );
        // Step out to re-arm, then back in.
        app.camera.position.x = 10.0;
        app.tick(DT);
        app.camera.position.x = 4.0;
    }
}
