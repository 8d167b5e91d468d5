//! Windowed display (winit + pixels).
//!
//! The raster never changes, so it is uploaded once when the surface is
//! created and simply re-presented on every redraw.

use apple_vgc::{DecodedRaster, HEIGHT, PixelFormat, WIDTH};
use pixels::{Pixels, SurfaceTexture};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::error::ViewerError;

struct ViewerApp {
    rgba: Vec<u8>,
    title: String,
    scale: u32,
    window: Option<&'static Window>,
    pixels: Option<Pixels<'static>>,
    error: Option<ViewerError>,
}

impl ViewerApp {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: ViewerError) {
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let size = winit::dpi::LogicalSize::new(
            WIDTH as u32 * self.scale,
            HEIGHT as u32 * self.scale,
        );
        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(size)
            .with_resizable(false);

        let window: &'static Window = match event_loop.create_window(attrs) {
            Ok(window) => Box::leak(Box::new(window)),
            Err(e) => {
                self.fail(event_loop, e.into());
                return;
            }
        };

        let inner = window.inner_size();
        let surface = SurfaceTexture::new(inner.width, inner.height, window);
        match Pixels::new(WIDTH as u32, HEIGHT as u32, surface) {
            Ok(mut pixels) => {
                pixels.frame_mut().copy_from_slice(&self.rgba);
                self.pixels = Some(pixels);
            }
            Err(e) => {
                self.fail(event_loop, e.into());
                return;
            }
        }

        self.window = Some(window);
        window.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(KeyCode::Escape) = event.physical_key
                    && event.state == ElementState::Pressed
                {
                    event_loop.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                let rendered = self.pixels.as_ref().map_or(Ok(()), Pixels::render);
                if let Err(e) = rendered {
                    self.fail(event_loop, e.into());
                }
            }
            _ => {}
        }
    }
}

/// Show the raster until the window is closed or Escape is pressed.
pub fn run(raster: &DecodedRaster, title: String, scale: u32) -> Result<(), ViewerError> {
    let event_loop = EventLoop::new()?;
    let mut app = ViewerApp {
        rgba: raster.to_bytes(PixelFormat::Rgba8),
        title,
        scale,
        window: None,
        pixels: None,
        error: None,
    };

    tracing::debug!(scale, "opening viewer window");
    event_loop.run_app(&mut app)?;

    match app.error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
