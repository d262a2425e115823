use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

use crate::camera::OrbitCamera;
use crate::cli::Cli;
use crate::core::{FrameClock, WinitController};
use crate::figure::FigureSet;
use crate::renderer::Renderer;
use crate::scene::Scene;
use crate::scenes::SceneBuilder;
use crate::traits::{Button, Controller};

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const WINDOW_TITLE: &str = "Figure Lab";

/// Window, scene and per-frame loop
pub struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    scene: Scene,
    figures: FigureSet,
    camera: OrbitCamera,
    controller: WinitController,
    clock: FrameClock,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        let mut scene = Scene::new();
        let figures = SceneBuilder::new().build(&mut scene);
        let camera = OrbitCamera::new(scene.camera());

        Self {
            cli,
            window: None,
            renderer: None,
            scene,
            figures,
            camera,
            controller: WinitController::new(),
            clock: FrameClock::new(FPS_UPDATE_INTERVAL),
        }
    }

    fn redraw(&mut self) {
        if let Some(fps) = self.clock.tick() {
            if !self.cli.no_ui {
                log::debug!("FPS: {:.1} (frame {})", fps, self.clock.frame_count());
            }
        }

        self.figures.step(&mut self.scene);

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        let (_, height) = renderer.size();
        self.camera.handle_input(&self.controller, height as f32);
        self.camera.update();
        self.controller.reset_deltas();

        match renderer.render(&self.scene, &self.camera, window, self.clock.fps()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                renderer.reconfigure();
            }
            Err(e) => log::error!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title(WINDOW_TITLE)
                    .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(Renderer::new(
                window.clone(),
                &self.scene,
                self.cli.renderer_options(),
            )) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("Failed to initialize renderer: {:#}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        self.controller.process_event(&event);
        if self.controller.is_down(Button::Escape) {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                log::debug!("Resized to {}x{}", size.width, size.height);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
