//! Loads the real gallery model and runs a few seconds of ticks.
//!
//! Expects `resources/gallery53.obj` next to the working directory; a
//! missing model is a failed scene start, matching how the installation
//! behaves in the host.

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();

    let app = vernissage::install("resources", "gallery53.obj", None)?;
    println!(
        "gallery loaded: {} objects, {} sketches active",
        app.scene.objects.len(),
        app.active_sketches()
    );

    let mut app = app;
    for _ in 0..300 {
        app.tick(1.0 / 60.0);
    }
    println!("ran 5s, elapsed={:.2}s", app.elapsed_seconds());
    Ok(())
}
