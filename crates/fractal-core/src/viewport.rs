use glam::DVec2;

use crate::{Complex, ConfigError};

// ---------------------------------------------------------------------------
// PlaneBounds
// ---------------------------------------------------------------------------

/// Axis-aligned rectangle of the complex plane; `y` increases upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlaneBounds {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    fn span_x(&self) -> f64 {
        self.x_max - self.x_min
    }

    fn span_y(&self) -> f64 {
        self.y_max - self.y_min
    }
}

// ---------------------------------------------------------------------------
// Viewport — affine map between pixel space and the complex plane
// ---------------------------------------------------------------------------

/// The pixel↔plane mapping, mutated in place by pan and zoom.
///
/// `origin` is the pixel position of the plane origin; it may lie far
/// outside the raster. Fields stay private so the positive-scale invariant
/// cannot be broken from outside.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    origin: DVec2,
    scale_x: f64,
    scale_y: f64,
    bounds: PlaneBounds,
}

impl Viewport {
    /// Derive the map that stretches `bounds` across a `width` × `height`
    /// raster: the left/right pixel edges land on `x_min`/`x_max` and the
    /// top/bottom edges on `y_max`/`y_min`.
    pub fn new(bounds: PlaneBounds, width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyRaster { width, height });
        }
        let span_x = bounds.span_x();
        let span_y = bounds.span_y();
        if !span_x.is_finite() || !span_y.is_finite() || span_x <= 0.0 || span_y <= 0.0 {
            return Err(ConfigError::DegenerateBounds);
        }
        Ok(Self::spanning(bounds, width, height))
    }

    /// Same derivation as [`Viewport::new`] without the checks, for callers
    /// that already hold a validated raster size and bounds.
    pub(crate) fn spanning(bounds: PlaneBounds, width: u32, height: u32) -> Self {
        let span_x = bounds.span_x();
        let span_y = bounds.span_y();
        Self {
            origin: DVec2::new(
                -bounds.x_min / span_x * width as f64,
                bounds.y_max / span_y * height as f64,
            ),
            scale_x: span_x / width as f64,
            scale_y: span_y / height as f64,
            bounds,
        }
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    /// Bounds this viewport was created from (not the currently visible
    /// rectangle; pan and zoom do not touch them).
    pub fn bounds(&self) -> PlaneBounds {
        self.bounds
    }

    /// Plane coordinate of a (possibly fractional) pixel position.
    pub fn pixel_to_plane(&self, p: DVec2) -> Complex {
        Complex::new(
            self.scale_x * (p.x - self.origin.x),
            -self.scale_y * (p.y - self.origin.y),
        )
    }

    /// Pixel position of a plane coordinate. Inverse of `pixel_to_plane`.
    pub fn plane_to_pixel(&self, c: Complex) -> DVec2 {
        DVec2::new(
            self.origin.x + c.re / self.scale_x,
            self.origin.y - c.im / self.scale_y,
        )
    }

    /// Shift the view by a drag distance in pixels. Scale is untouched.
    pub fn pan(&mut self, delta: DVec2) {
        self.origin += delta;
    }

    /// Rescale both axes by `factor` (> 1 widens the view, < 1 narrows it),
    /// keeping the plane point under `anchor` at the same pixel. `factor`
    /// must be positive; scales stay positive only under that contract.
    ///
    /// The correction compares the plane points the anchor maps to before
    /// and after the rescale with the origin still unchanged; their
    /// difference, converted back to pixels at the new scale, is exactly
    /// how far the origin has to move.
    pub fn zoom(&mut self, factor: f64, anchor: DVec2) {
        debug_assert!(factor > 0.0, "zoom factor must be positive, got {factor}");
        let before = self.pixel_to_plane(anchor);
        self.scale_x *= factor;
        self.scale_y *= factor;
        let after = self.pixel_to_plane(anchor);
        self.origin.x += (after.re - before.re) / self.scale_x;
        self.origin.y -= (after.im - before.im) / self.scale_y;
    }

    /// Re-derive scales and origin for a new raster size from the bounds
    /// this viewport was created with. Accumulated pan/zoom is discarded.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ConfigError> {
        *self = Viewport::new(self.bounds, width, height)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
