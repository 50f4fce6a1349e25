//! The winit host: one window, one show, one clock.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::ShowConfig;
use crate::render::{GpuState, Vertex};
use crate::show::FireworkShow;
use crate::time::Time;

/// Frames between window-title refreshes.
const TITLE_REFRESH_FRAMES: u64 = 30;

/// Application state driven by the event loop.
///
/// Owns the show, the clock, and the GPU renderer. Each `RedrawRequested`
/// advances the clock, steps the show with the frame delta, rebuilds the
/// instance list, and draws.
pub(crate) struct App {
    title: String,
    width: u32,
    height: u32,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    show: FireworkShow,
    time: Time,
    vertices: Vec<Vertex>,
}

impl App {
    pub(crate) fn new(config: ShowConfig, width: u32, height: u32, title: String) -> Self {
        Self {
            title,
            width,
            height,
            window: None,
            gpu: None,
            show: FireworkShow::new(width, height, config),
            time: Time::new(),
            vertices: Vec::new(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (_, dt) = self.time.update();
        self.show.update(dt);

        self.vertices.clear();
        self.vertices.extend(self.show.visible_particles().map(|p| Vertex {
            position: p.position.as_vec2().to_array(),
            alpha: p.alpha() as f32,
        }));

        if let Some(gpu) = &mut self.gpu {
            match gpu.render(&self.vertices) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let size =
                        winit::dpi::PhysicalSize::new(gpu.config.width, gpu.config.height);
                    gpu.resize(size);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                Err(e) => eprintln!("Render error: {:?}", e),
            }
        }

        if self.time.frame() % TITLE_REFRESH_FRAMES == 0 {
            if let Some(window) = &self.window {
                let paused = if self.time.is_paused() { " | paused" } else { "" };
                window.set_title(&format!(
                    "{} | {:.0} fps | {} particles{}",
                    self.title,
                    self.time.fps(),
                    self.show.particle_count(),
                    paused,
                ));
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attrs = Window::default_attributes()
                .with_title(self.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(self.width, self.height));

            let window = match event_loop.create_window(window_attrs) {
                Ok(window) => Arc::new(window),
                Err(e) => {
                    eprintln!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };
            self.window = Some(window.clone());

            match pollster::block_on(GpuState::new(window)) {
                Ok(gpu) => self.gpu = Some(gpu),
                Err(e) => {
                    eprintln!("{}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
                self.show.resize(physical_size.width, physical_size.height);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    match event.physical_key {
                        PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
                        PhysicalKey::Code(KeyCode::Space) => self.time.toggle_pause(),
                        _ => {}
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.show.clear();
    }
}
