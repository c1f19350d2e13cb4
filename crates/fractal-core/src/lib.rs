pub mod color;
pub mod escape;
pub mod render;
pub mod variants;
pub mod viewport;

use thiserror::Error;

use crate::color::{PaletteMode, Rgb, DEFAULT_PALETTE};
use crate::escape::IterationResult;
use crate::viewport::PlaneBounds;

// ---------------------------------------------------------------------------
// Complex — a point in the mathematical plane
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };

    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Squared magnitude, `re² + im²`.
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }
}

// ---------------------------------------------------------------------------
// RenderConfig — read-only parameters shared by every pixel of a pass
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Iteration cap for the escape loop. Must be at least 1.
    pub max_iterations: u32,
    /// Scale multiplier applied per zoom step. Must be greater than 1.
    pub zoom_speed: f64,
    /// How many times the palette cycles across the full iteration range.
    pub color_mult: f64,
    /// Colors the escape gradient interpolates between. Must be non-empty.
    pub palette: Vec<Rgb>,
    pub palette_mode: PaletteMode,
}

impl RenderConfig {
    pub fn default() -> Self {
        Self {
            max_iterations: 150,
            zoom_speed: 1.2,
            color_mult: 1.0,
            palette: DEFAULT_PALETTE.to_vec(),
            palette_mode: PaletteMode::Smooth,
        }
    }

    /// Reject invalid configuration up front; the per-pixel paths assume
    /// these invariants and never re-check them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if !self.zoom_speed.is_finite() || self.zoom_speed <= 1.0 {
            return Err(ConfigError::BadZoomSpeed(self.zoom_speed));
        }
        if !self.color_mult.is_finite() || self.color_mult < 0.0 {
            return Err(ConfigError::BadColorMult(self.color_mult));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("max_iterations must be at least 1")]
    ZeroIterations,
    #[error("zoom_speed must be a finite value greater than 1, got {0}")]
    BadZoomSpeed(f64),
    #[error("color_mult must be finite and non-negative, got {0}")]
    BadColorMult(f64),
    #[error("raster size must be non-zero, got {width}x{height}")]
    EmptyRaster { width: u32, height: u32 },
    #[error("plane bounds must span a positive finite area on both axes")]
    DegenerateBounds,
}

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

/// Tag selecting which recurrence (and color rule) a context renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractalKind {
    Mandelbrot,
    BurningShip,
}

impl FractalKind {
    pub const ALL: [FractalKind; 2] = [FractalKind::Mandelbrot, FractalKind::BurningShip];

    pub fn name(self) -> &'static str {
        match self {
            FractalKind::Mandelbrot => "Mandelbrot",
            FractalKind::BurningShip => "Burning Ship",
        }
    }

    /// Plane rectangle framing the whole set at the default zoom.
    pub fn default_bounds(self) -> PlaneBounds {
        match self {
            FractalKind::Mandelbrot => PlaneBounds::new(-2.5, 1.0, -1.25, 1.25),
            FractalKind::BurningShip => PlaneBounds::new(-1.25, 2.25, -0.75, 1.75),
        }
    }

    pub fn create(self) -> Box<dyn Fractal> {
        match self {
            FractalKind::Mandelbrot => Box::new(variants::Mandelbrot),
            FractalKind::BurningShip => Box::new(variants::BurningShip),
        }
    }
}

/// One escape-time recurrence. Everything that differs between variants
/// lives here; the evaluator and frame renderer are shared.
pub trait Fractal: Send + Sync {
    fn kind(&self) -> FractalKind;

    /// One application of the recurrence, `z' = f(z, c)`.
    fn step(&self, z: Complex, c: Complex) -> Complex;

    /// Cheap membership test for plane regions known to never escape; the
    /// evaluator short-circuits the iteration loop when this returns true.
    fn known_bounded(&self, _c: Complex) -> bool {
        false
    }

    /// Map an iteration result to a color under this variant's rule.
    fn colorize(&self, result: IterationResult, config: &RenderConfig) -> Rgb;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- Complex ---------------------------------------------------------------

    #[test]
    fn norm_sqr_of_three_four_is_twenty_five() {
        assert!((Complex::new(3.0, 4.0).norm_sqr() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn zero_has_zero_magnitude() {
        assert_eq!(Complex::ZERO.norm_sqr(), 0.0);
    }

    // --- FractalKind -----------------------------------------------------------

    #[test]
    fn all_contains_both_variants() {
        assert_eq!(FractalKind::ALL.len(), 2);
        assert!(FractalKind::ALL.contains(&FractalKind::Mandelbrot));
        assert!(FractalKind::ALL.contains(&FractalKind::BurningShip));
    }

    #[test]
    fn kind_names_are_unique_and_nonempty() {
        let names: Vec<_> = FractalKind::ALL.iter().map(|k| k.name()).collect();
        for name in &names {
            assert!(!name.is_empty());
        }
        assert_ne!(names[0], names[1]);
    }

    #[test]
    fn created_variant_reports_its_kind() {
        for kind in FractalKind::ALL {
            assert_eq!(kind.create().kind(), kind);
        }
    }

    #[test]
    fn default_bounds_pin_the_home_windows() {
        let m = FractalKind::Mandelbrot.default_bounds();
        assert_eq!((m.x_min, m.x_max, m.y_min, m.y_max), (-2.5, 1.0, -1.25, 1.25));
        let b = FractalKind::BurningShip.default_bounds();
        assert_eq!((b.x_min, b.x_max, b.y_min, b.y_max), (-1.25, 2.25, -0.75, 1.75));
    }

    // --- RenderConfig::validate ------------------------------------------------

    #[test]
    fn default_config_is_valid() {
        assert_eq!(RenderConfig::default().validate(), Ok(()));
    }

    #[test]
    fn empty_palette_is_rejected() {
        let mut config = RenderConfig::default();
        config.palette.clear();
        assert_eq!(config.validate(), Err(ConfigError::EmptyPalette));
    }

    #[test]
    fn zero_iterations_is_rejected() {
        let mut config = RenderConfig::default();
        config.max_iterations = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroIterations));
    }

    #[test]
    fn zoom_speed_of_one_is_rejected() {
        // A multiplier of exactly 1 would make zoom a no-op.
        let mut config = RenderConfig::default();
        config.zoom_speed = 1.0;
        assert_eq!(config.validate(), Err(ConfigError::BadZoomSpeed(1.0)));
    }

    #[test]
    fn nan_zoom_speed_is_rejected() {
        let mut config = RenderConfig::default();
        config.zoom_speed = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::BadZoomSpeed(_))));
    }

    #[test]
    fn negative_color_mult_is_rejected() {
        let mut config = RenderConfig::default();
        config.color_mult = -0.5;
        assert_eq!(config.validate(), Err(ConfigError::BadColorMult(-0.5)));
    }

    #[test]
    fn zero_color_mult_is_allowed() {
        // Zero is a legal density: every escaped point lands on palette[0].
        let mut config = RenderConfig::default();
        config.color_mult = 0.0;
        assert_eq!(config.validate(), Ok(()));
    }
}
