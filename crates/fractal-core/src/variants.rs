use crate::color::{self, PaletteMode, Rgb};
use crate::escape::IterationResult;
use crate::{Complex, Fractal, FractalKind, RenderConfig};

// ---------------------------------------------------------------------------
// Mandelbrot
// ---------------------------------------------------------------------------

pub struct Mandelbrot;

impl Fractal for Mandelbrot {
    fn kind(&self) -> FractalKind {
        FractalKind::Mandelbrot
    }

    fn step(&self, z: Complex, c: Complex) -> Complex {
        Complex::new(z.re * z.re - z.im * z.im + c.re, 2.0 * z.re * z.im + c.im)
    }

    fn known_bounded(&self, c: Complex) -> bool {
        in_main_cardioid(c) || in_period2_bulb(c)
    }

    fn colorize(&self, result: IterationResult, config: &RenderConfig) -> Rgb {
        match result {
            IterationResult::Bounded => Rgb::BLACK,
            IterationResult::Escaped { iterations, smooth } => match config.palette_mode {
                PaletteMode::Smooth => color::smooth_palette_color(
                    &config.palette,
                    smooth,
                    config.max_iterations,
                    config.color_mult,
                ),
                PaletteMode::Discrete => color::discrete_palette_color(
                    &config.palette,
                    iterations,
                    config.max_iterations,
                ),
            },
        }
    }
}

/// Main cardioid membership: `q·(q + (re − ¼)) < ¼·im²` with
/// `q = (re − ¼)² + im²`. Strict inequality, so boundary points fall
/// through to the iteration loop.
#[inline]
pub fn in_main_cardioid(c: Complex) -> bool {
    let xq = c.re - 0.25;
    let im_sq = c.im * c.im;
    let q = xq * xq + im_sq;
    q * (q + xq) < 0.25 * im_sq
}

/// Period-2 bulb membership: `(re + 1)² + im² < 1/16`.
#[inline]
pub fn in_period2_bulb(c: Complex) -> bool {
    let xp = c.re + 1.0;
    xp * xp + c.im * c.im < 0.0625
}

// ---------------------------------------------------------------------------
// Burning Ship
// ---------------------------------------------------------------------------

pub struct BurningShip;

impl Fractal for BurningShip {
    fn kind(&self) -> FractalKind {
        FractalKind::BurningShip
    }

    // Sign convention: c is subtracted on both axes and the cross term is
    // folded with abs() before the subtraction. Deliberate; the rendered
    // set depends on it, so do not "correct" it to the textbook ship
    // recurrence.
    fn step(&self, z: Complex, c: Complex) -> Complex {
        Complex::new(
            z.re * z.re - z.im * z.im - c.re,
            (2.0 * z.re * z.im).abs() - c.im,
        )
    }

    fn colorize(&self, result: IterationResult, config: &RenderConfig) -> Rgb {
        match result {
            IterationResult::Bounded => Rgb::BLACK,
            IterationResult::Escaped { iterations, .. } => {
                color::grayscale(iterations, config.max_iterations)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
