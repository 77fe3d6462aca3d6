//! Headless replay of a recorded input script through the fly camera.
//!
//! Usage: `flycam <script.toml> [options.toml]`

use std::path::Path;

use flycam::{script, FlyEngine, FlycamError, InputScript, Options};

fn run(script_path: &str, options_path: Option<&str>) -> Result<(), FlycamError> {
    let options = match options_path {
        Some(path) => Options::load(Path::new(path))?,
        None => Options::default(),
    };
    let input = InputScript::load(Path::new(script_path))?;

    let mut engine = FlyEngine::new(options);
    let states = script::replay(&mut engine, &input);

    for (index, state) in states.iter().enumerate() {
        log::info!(
            "frame {index}: position=({:.3}, {:.3}, {:.3}) yaw={:.2} \
             pitch={:.2} zoom={:.2}",
            state.position.x,
            state.position.y,
            state.position.z,
            state.yaw,
            state.pitch,
            state.zoom,
        );
    }
    log::info!(
        "replayed {} of {} frames",
        states.len(),
        input.frames.len()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let mut args = std::env::args().skip(1);
    let Some(script_path) = args.next() else {
        log::error!("Usage: flycam <script.toml> [options.toml]");
        std::process::exit(1);
    };
    let options_path = args.next();

    if let Err(e) = run(&script_path, options_path.as_deref()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
