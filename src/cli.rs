// cli.rs - Command-line interface configuration
use clap::Parser;

use crate::renderer::RendererOptions;

pub const MIN_SHADOW_MAP_SIZE: u32 = 256;
pub const MAX_SHADOW_MAP_SIZE: u32 = 8192;

#[derive(Parser, Debug, Clone)]
#[command(name = "figure-lab")]
#[command(about = "Animated figures on a walled ground plane", long_about = None)]
pub struct Cli {
    /// Disable the FPS overlay and periodic FPS logging
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Shadow map resolution; clamped to 256..=8192
    #[arg(long = "shadow-map-size", default_value_t = 2048)]
    pub shadow_map_size: u32,

    /// Print the scene as JSON and exit without opening a window
    #[arg(long = "dump-scene", default_value = "false")]
    pub dump_scene: bool,

    /// Animation frames to advance before dumping
    #[arg(long, default_value_t = 0, requires = "dump_scene")]
    pub frames: u64,
}

impl Cli {
    pub fn shadow_map_size(&self) -> u32 {
        self.shadow_map_size
            .clamp(MIN_SHADOW_MAP_SIZE, MAX_SHADOW_MAP_SIZE)
    }

    pub fn renderer_options(&self) -> RendererOptions {
        RendererOptions {
            shadow_map_size: self.shadow_map_size(),
            show_overlay: !self.no_ui,
        }
    }
}
