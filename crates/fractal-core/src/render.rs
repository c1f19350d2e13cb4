use glam::DVec2;

use crate::escape::escape_time;
use crate::viewport::Viewport;
use crate::{ConfigError, Fractal, FractalKind, RenderConfig};

// ---------------------------------------------------------------------------
// PixelRect
// ---------------------------------------------------------------------------

/// Rectangular pixel region, top-left corner plus extent, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

// ---------------------------------------------------------------------------
// RenderContext — one viewport, one variant, one raster
// ---------------------------------------------------------------------------

/// Everything a render pass reads: the active variant, the viewport, the
/// raster size and the configuration. Owned by the caller; independent
/// contexts never share state, so several can coexist.
pub struct RenderContext {
    fractal: Box<dyn Fractal>,
    viewport: Viewport,
    width: u32,
    height: u32,
    /// Mutable between passes. The constructor validates it once; callers
    /// that mutate fields afterwards keep them within the documented
    /// ranges themselves.
    pub config: RenderConfig,
}

impl RenderContext {
    pub fn new(
        kind: FractalKind,
        width: u32,
        height: u32,
        config: RenderConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let viewport = Viewport::new(kind.default_bounds(), width, height)?;
        Ok(Self {
            fractal: kind.create(),
            viewport,
            width,
            height,
            config,
        })
    }

    pub fn kind(&self) -> FractalKind {
        self.fractal.kind()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Replace the active variant and drop the old view for the new
    /// variant's home window.
    pub fn switch_variant(&mut self, kind: FractalKind) {
        self.fractal = kind.create();
        self.viewport = Viewport::spanning(kind.default_bounds(), self.width, self.height);
    }

    /// Discard accumulated pan and zoom; back to the active variant's home
    /// window.
    pub fn reset_view(&mut self) {
        self.viewport = Viewport::spanning(self.kind().default_bounds(), self.width, self.height);
    }

    /// Adopt a new raster size. The view is re-derived from the active
    /// variant's home window, so pan and zoom are discarded.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ConfigError> {
        self.viewport.resize(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Shift the view by a drag distance in pixels.
    pub fn pan(&mut self, delta: DVec2) {
        self.viewport.pan(delta);
    }

    /// Narrow the view around `anchor` by the configured zoom speed.
    pub fn zoom_in(&mut self, anchor: DVec2) {
        self.viewport.zoom(1.0 / self.config.zoom_speed, anchor);
    }

    /// Widen the view around `anchor` by the configured zoom speed.
    pub fn zoom_out(&mut self, anchor: DVec2) {
        self.viewport.zoom(self.config.zoom_speed, anchor);
    }

    // --- render passes ---------------------------------------------------------

    /// Render the full frame into a fresh buffer of
    /// `width * height * 4` bytes, row-major, `(R, G, B, A)` per pixel with
    /// `A` always 255.
    pub fn render(&self) -> Vec<u8> {
        let mut frame = vec![0; self.frame_len()];
        self.render_into(&mut frame);
        frame
    }

    /// Render the full frame into a caller-owned buffer, typically the
    /// presentation surface. `frame` must hold exactly
    /// `width * height * 4` bytes.
    pub fn render_into(&self, frame: &mut [u8]) {
        self.render_region(PixelRect::new(0, 0, self.width, self.height), frame);
    }

    /// Render only the pixels inside `rect`, each written at its row-major
    /// offset within the full frame; bytes outside the rect are left
    /// untouched. The rect is clipped to the raster. `frame` must hold
    /// exactly `width * height * 4` bytes.
    pub fn render_region(&self, rect: PixelRect, frame: &mut [u8]) {
        assert_eq!(
            frame.len(),
            self.frame_len(),
            "frame buffer does not match the raster size"
        );
        let x_end = rect.x.saturating_add(rect.width).min(self.width);
        let y_end = rect.y.saturating_add(rect.height).min(self.height);
        for y in rect.y..y_end {
            for x in rect.x..x_end {
                let c = self
                    .viewport
                    .pixel_to_plane(DVec2::new(f64::from(x), f64::from(y)));
                let result = escape_time(self.fractal.as_ref(), c, self.config.max_iterations);
                let color = self.fractal.colorize(result, &self.config);
                let offset = (y as usize * self.width as usize + x as usize) * 4;
                frame[offset] = color.r;
                frame[offset + 1] = color.g;
                frame[offset + 2] = color.b;
                frame[offset + 3] = 255;
            }
        }
    }

    fn frame_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
