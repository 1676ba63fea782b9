//! Headless scene playback.
//!
//! Usage: `scene_playback [SCENE.json] [FRAMES]`
//!
//! Loads the scene (the bundled `assets/orbit.json` by default), runs it for
//! the given number of frames and prints the translation column of every
//! object's model matrix.

use anyhow::Context;
use viewer3d::Scene;

const DEFAULT_SCENE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/orbit.json");
const DEFAULT_FRAMES: usize = 30;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| DEFAULT_SCENE.to_owned());
    let frames = match args.next() {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("invalid frame count: {arg}"))?,
        None => DEFAULT_FRAMES,
    };

    let mut scene = Scene::load(&path).with_context(|| format!("failed to load scene {path}"))?;

    for name in scene.names() {
        log::info!("Object: {name}");
    }

    for frame in 0..frames {
        for (name, matrix) in scene.tick() {
            let t = matrix.w_axis.truncate();
            println!("{frame:>5} {name:<16} {:>8.3} {:>8.3} {:>8.3}", t.x, t.y, t.z);
        }
    }

    Ok(())
}
