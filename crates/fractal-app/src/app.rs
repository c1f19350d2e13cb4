use std::sync::Arc;
use std::time::Instant;

use fractal_core::color::PaletteMode;
use fractal_core::render::RenderContext;
use fractal_core::{FractalKind, RenderConfig};
use glam::DVec2;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::input::{clamp_iterations, DragState, InputAction, InputState, Key};

// ---------------------------------------------------------------------------
// App — render context + pixel surface + input tracking
// ---------------------------------------------------------------------------

pub struct App {
    pixels: Pixels<'static>,
    context: RenderContext,

    // Input
    input: InputState,
    drag: DragState,
    /// Last known cursor position in physical pixels.
    cursor_pos: DVec2,
}

impl App {
    /// Initialise the pixel surface and render context for a given window.
    /// The window is wrapped in `Arc` so that the surface can safely hold a
    /// `'static` reference to it.
    pub fn new(window: Arc<Window>) -> Self {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);

        let surface_texture = SurfaceTexture::new(width, height, Arc::clone(&window));
        let pixels =
            Pixels::new(width, height, surface_texture).expect("failed to create pixel surface");

        let context = RenderContext::new(
            FractalKind::Mandelbrot,
            width,
            height,
            RenderConfig::default(),
        )
        .expect("failed to build render context");

        log::info!(
            "Surface configured: {}×{}, variant {}",
            width,
            height,
            context.kind().name()
        );

        Self {
            pixels,
            context,
            input: InputState::new(),
            drag: DragState::new(),
            cursor_pos: DVec2::ZERO,
        }
    }

    // -------------------------------------------------------------------------
    // Resize
    // -------------------------------------------------------------------------

    /// Resize the surface, the pixel buffer and the render context together.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width == 0 || new_height == 0 {
            return;
        }
        if let Err(err) = self.pixels.resize_surface(new_width, new_height) {
            log::error!("surface resize failed: {err}");
            return;
        }
        if let Err(err) = self.pixels.resize_buffer(new_width, new_height) {
            log::error!("buffer resize failed: {err}");
            return;
        }
        if let Err(err) = self.context.resize(new_width, new_height) {
            log::error!("viewport resize failed: {err}");
            return;
        }
        log::debug!("Surface resized to {}×{}", new_width, new_height);
    }

    // -------------------------------------------------------------------------
    // Input — called by main.rs window_event handler
    // -------------------------------------------------------------------------

    /// Translate a key press and return the resulting action, if any.
    pub fn on_key_pressed(&self, key: Key) -> Option<InputAction> {
        self.input.on_key(key)
    }

    /// Track the cursor position in physical pixels; it anchors wheel zooms
    /// and bounds the pan gesture.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor_pos = DVec2::new(x, y);
    }

    /// Left button down: remember where the drag started.
    pub fn on_mouse_pressed(&mut self) {
        self.drag.press(self.cursor_pos);
    }

    /// Left button up: apply the whole drag as one pan.
    ///
    /// Returns `true` if the view changed.
    pub fn on_mouse_released(&mut self) -> bool {
        match self.drag.release(self.cursor_pos) {
            Some(delta) if delta != DVec2::ZERO => {
                log::debug!("Pan by ({:.1}, {:.1})", delta.x, delta.y);
                self.context.pan(delta);
                true
            }
            _ => false,
        }
    }

    /// Wheel scroll: zoom at the cursor. Positive `dy` (wheel up) zooms in.
    ///
    /// Returns `true` if the view changed.
    pub fn on_scroll(&mut self, dy: f64) -> bool {
        if dy > 0.0 {
            self.context.zoom_in(self.cursor_pos);
        } else if dy < 0.0 {
            self.context.zoom_out(self.cursor_pos);
        } else {
            return false;
        }
        log::debug!(
            "Zoom at ({:.0}, {:.0})  scale {:.3e}",
            self.cursor_pos.x,
            self.cursor_pos.y,
            self.context.viewport().scale_x()
        );
        true
    }

    /// Apply an action to the app state.
    ///
    /// Returns `true` if the app should exit (i.e. action was `Quit`).
    pub fn handle_action(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::SelectVariant(kind) => {
                log::info!("Variant: {}", kind.name());
                self.context.switch_variant(kind);
            }

            InputAction::CycleVariant => {
                let current = self.context.kind();
                let idx = FractalKind::ALL
                    .iter()
                    .position(|&k| k == current)
                    .unwrap_or(0);
                let next = FractalKind::ALL[(idx + 1) % FractalKind::ALL.len()];
                log::info!("Cycling to variant: {}", next.name());
                self.context.switch_variant(next);
            }

            InputAction::IterationsUp => {
                let config = &mut self.context.config;
                config.max_iterations =
                    clamp_iterations(config.max_iterations.saturating_add(10));
                log::debug!("max_iterations → {}", config.max_iterations);
            }

            InputAction::IterationsDown => {
                let config = &mut self.context.config;
                config.max_iterations =
                    clamp_iterations(config.max_iterations.saturating_sub(10));
                log::debug!("max_iterations → {}", config.max_iterations);
            }

            InputAction::TogglePaletteMode => {
                let config = &mut self.context.config;
                config.palette_mode = match config.palette_mode {
                    PaletteMode::Smooth => PaletteMode::Discrete,
                    PaletteMode::Discrete => PaletteMode::Smooth,
                };
                log::info!("Palette mode: {:?}", config.palette_mode);
            }

            InputAction::ResetView => {
                log::info!("View reset: {}", self.context.kind().name());
                self.context.reset_view();
            }

            InputAction::Quit => return true,
        }
        false
    }

    // -------------------------------------------------------------------------
    // Render
    // -------------------------------------------------------------------------

    /// Render one full frame into the pixel buffer and present it.
    pub fn render(&mut self) -> Result<(), pixels::Error> {
        let started = Instant::now();
        self.context.render_into(self.pixels.frame_mut());
        log::debug!(
            "Frame: {}×{} {} in {:.1} ms",
            self.context.width(),
            self.context.height(),
            self.context.kind().name(),
            started.elapsed().as_secs_f64() * 1e3
        );
        self.pixels.render()
    }
}
