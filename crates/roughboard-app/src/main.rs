//! Native gesture replay entry point.
//!
//! `roughboard-replay <script.json> [--config <config.json>]` replays the
//! script against a fresh board and prints the resulting elements as JSON.

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting Roughboard replay");

    if let Err(err) = native::run(std::env::args().skip(1)) {
        log::error!("{}", err);
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(feature = "native")]
mod native {
    use roughboard_app::{ReplayError, parse_script, replay};
    use roughboard_core::render::RenderLoop;
    use roughboard_core::{BoardConfig, Canvas};
    use roughboard_render::{RoughGenerator, VelloSurface};

    const USAGE: &str = "roughboard-replay <script.json> [--config <config.json>]";

    pub fn run(mut args: impl Iterator<Item = String>) -> Result<(), ReplayError> {
        let mut script_path = None;
        let mut config_path = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    config_path = Some(args.next().ok_or_else(|| ReplayError::Usage(USAGE.to_string()))?);
                }
                _ if script_path.is_none() => script_path = Some(arg),
                _ => return Err(ReplayError::Usage(USAGE.to_string())),
            }
        }
        let script_path = script_path.ok_or_else(|| ReplayError::Usage(USAGE.to_string()))?;

        let config = match config_path {
            Some(path) => BoardConfig::from_json(&std::fs::read_to_string(path)?)?,
            None => BoardConfig::default(),
        };
        let steps = parse_script(&std::fs::read_to_string(&script_path)?)?;

        let generator = RoughGenerator::new(config.sketch.clone());
        let mut canvas = Canvas::with_config(&config, generator, RenderLoop::new(VelloSurface::new()));
        replay(&mut canvas, &steps);
        if canvas.observer().surface().scene().encoding().is_empty() {
            log::warn!("Replay produced an empty scene");
        }

        let json = serde_json::to_string_pretty(canvas.store().elements()).map_err(ReplayError::Serialization)?;
        println!("{json}");
        Ok(())
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
