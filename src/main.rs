use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use figure_lab::app::App;
use figure_lab::cli::Cli;
use figure_lab::scene::Scene;
use figure_lab::scenes::SceneBuilder;

/// Build the scene, advance it headlessly and print it as JSON
fn dump_scene(frames: u64) -> Result<()> {
    let mut scene = Scene::new();
    let mut figures = SceneBuilder::new().build(&mut scene);
    for _ in 0..frames {
        figures.step(&mut scene);
    }
    println!("{}", serde_json::to_string_pretty(&scene.snapshot(frames))?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.dump_scene {
        return dump_scene(cli.frames);
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    log::info!("Figure Lab - drag to orbit, right-drag to pan, wheel to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
