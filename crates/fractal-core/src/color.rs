// ---------------------------------------------------------------------------
// Rgb
// ---------------------------------------------------------------------------

/// One 8-bit-per-channel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Default seven-color cycle: primaries, then secondaries, then white.
pub const DEFAULT_PALETTE: [Rgb; 7] = [
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 255, 0),
    Rgb::new(255, 0, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 255, 255),
];

/// How Mandelbrot escapes pick their palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteMode {
    /// Continuous gradient over the smooth iteration count.
    Smooth,
    /// Direct palette indexing over the discrete count.
    Discrete,
}

// ---------------------------------------------------------------------------
// Palette sampling
// ---------------------------------------------------------------------------

/// Blend two colors channel-wise. `weight = 1.0` gives `first` exactly and
/// `0.0` gives `second` exactly.
pub fn gradient(first: Rgb, second: Rgb, weight: f64) -> Rgb {
    let w = weight.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (f64::from(a) * w + f64::from(b) * (1.0 - w)).round() as u8;
    Rgb::new(
        mix(first.r, second.r),
        mix(first.g, second.g),
        mix(first.b, second.b),
    )
}

/// Smooth-mode lookup: map `mu` to a position in `[0, len]` that cycles
/// `color_mult` times across the iteration range, then blend the entry at
/// `floor(position)` (wrapping) with its successor. The blend weight is
/// `1 − fract(position)`, so the entry itself shows fully as the
/// fractional part approaches zero.
///
/// The caller guarantees a non-empty palette; configuration validation
/// rejects empty ones up front.
pub fn smooth_palette_color(palette: &[Rgb], mu: f64, max_iterations: u32, color_mult: f64) -> Rgb {
    let len = palette.len();
    let position =
        (len as f64 * (mu / f64::from(max_iterations)) * color_mult).clamp(0.0, len as f64);
    let idx = (position.floor() as usize) % len;
    let next = (idx + 1) % len;
    gradient(palette[idx], palette[next], 1.0 - position.fract())
}

/// Discrete-mode lookup over the raw iteration count, clamped to the last
/// entry.
pub fn discrete_palette_color(palette: &[Rgb], iterations: u32, max_iterations: u32) -> Rgb {
    let len = palette.len();
    let idx = (len as f64 * f64::from(iterations) / f64::from(max_iterations)).floor() as usize;
    palette[idx.min(len - 1)]
}

/// Burning Ship escape shading: near-white for instant escapes, fading to
/// black as the count approaches the cap.
pub fn grayscale(iterations: u32, max_iterations: u32) -> Rgb {
    let gray = (255.0 * (1.0 - f64::from(iterations) / f64::from(max_iterations))).floor() as u8;
    Rgb::new(gray, gray, gray)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- gradient --------------------------------------------------------------

    #[test]
    fn gradient_weight_one_returns_first_color() {
        let pairs = [
            (Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)),
            (Rgb::new(1, 2, 3), Rgb::new(200, 100, 50)),
            (Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)),
        ];
        for (c1, c2) in pairs {
            assert_eq!(gradient(c1, c2, 1.0), c1);
        }
    }

    #[test]
    fn gradient_weight_zero_returns_second_color() {
        let pairs = [
            (Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)),
            (Rgb::new(1, 2, 3), Rgb::new(200, 100, 50)),
            (Rgb::new(17, 93, 211), Rgb::new(0, 0, 0)),
        ];
        for (c1, c2) in pairs {
            assert_eq!(gradient(c1, c2, 0.0), c2);
        }
    }

    #[test]
    fn gradient_midpoint_averages_channels() {
        let mid = gradient(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), 0.5);
        assert_eq!(mid, Rgb::new(128, 128, 128));
    }

    #[test]
    fn gradient_clamps_out_of_range_weights() {
        let c1 = Rgb::new(10, 20, 30);
        let c2 = Rgb::new(200, 150, 100);
        assert_eq!(gradient(c1, c2, 1.5), c1);
        assert_eq!(gradient(c1, c2, -0.3), c2);
    }

    // --- smooth_palette_color --------------------------------------------------

    #[test]
    fn smooth_blends_within_the_first_segment() {
        // position = 2 · (12.5/100) · 1 = 0.25 → weight 0.75 toward entry 0
        let palette = [Rgb::new(100, 0, 0), Rgb::new(200, 0, 0)];
        let got = smooth_palette_color(&palette, 12.5, 100, 1.0);
        assert_eq!(got, Rgb::new(125, 0, 0));
    }

    #[test]
    fn smooth_wraps_from_last_entry_back_to_first() {
        // position = 1.5 → blend entry 1 with entry 0 at weight 0.5
        let palette = [Rgb::new(100, 0, 0), Rgb::new(200, 0, 0)];
        let got = smooth_palette_color(&palette, 75.0, 100, 1.0);
        assert_eq!(got, Rgb::new(150, 0, 0));
    }

    #[test]
    fn smooth_position_is_clamped_to_palette_span() {
        let palette = [Rgb::new(100, 0, 0), Rgb::new(200, 0, 0)];
        // Raw position would be 20; clamped to 2, which wraps to entry 0.
        assert_eq!(
            smooth_palette_color(&palette, 1000.0, 100, 1.0),
            palette[0]
        );
        // Negative smooth values clamp to 0.
        assert_eq!(smooth_palette_color(&palette, -5.0, 100, 1.0), palette[0]);
    }

    #[test]
    fn smooth_single_entry_palette_always_returns_it() {
        let palette = [Rgb::new(42, 42, 42)];
        for mu in [0.0, 0.3, 7.7, 99.0] {
            assert_eq!(smooth_palette_color(&palette, mu, 100, 1.0), palette[0]);
        }
    }

    #[test]
    fn smooth_color_mult_compresses_the_cycle() {
        // Doubling color_mult doubles the position: mu 25 at mult 2 lands
        // where mu 50 lands at mult 1.
        let palette = [Rgb::new(10, 0, 0), Rgb::new(250, 0, 0)];
        assert_eq!(
            smooth_palette_color(&palette, 25.0, 100, 2.0),
            smooth_palette_color(&palette, 50.0, 100, 1.0)
        );
    }

    // --- discrete_palette_color ------------------------------------------------

    #[test]
    fn discrete_low_counts_pick_the_first_entry() {
        // floor(7 · 21/150) = 0, floor(7 · 22/150) = 1
        assert_eq!(
            discrete_palette_color(&DEFAULT_PALETTE, 21, 150),
            DEFAULT_PALETTE[0]
        );
        assert_eq!(
            discrete_palette_color(&DEFAULT_PALETTE, 22, 150),
            DEFAULT_PALETTE[1]
        );
    }

    #[test]
    fn discrete_high_counts_pick_the_last_entry() {
        // floor(7 · 149/150) = 6
        assert_eq!(
            discrete_palette_color(&DEFAULT_PALETTE, 149, 150),
            DEFAULT_PALETTE[6]
        );
    }

    #[test]
    fn discrete_index_is_clamped_at_the_cap() {
        // iterations == max never escapes in practice; the clamp keeps the
        // lookup total anyway.
        assert_eq!(
            discrete_palette_color(&DEFAULT_PALETTE, 150, 150),
            DEFAULT_PALETTE[6]
        );
    }

    // --- grayscale -------------------------------------------------------------

    #[test]
    fn grayscale_fades_with_iteration_count() {
        assert_eq!(grayscale(1, 150), Rgb::new(253, 253, 253));
        assert_eq!(grayscale(75, 150), Rgb::new(127, 127, 127));
        assert_eq!(grayscale(149, 150), Rgb::new(1, 1, 1));
    }

    #[test]
    fn grayscale_channels_are_equal() {
        for iterations in [1, 10, 60, 140] {
            let c = grayscale(iterations, 150);
            assert_eq!(c.r, c.g);
            assert_eq!(c.g, c.b);
        }
    }

    // --- defaults --------------------------------------------------------------

    #[test]
    fn default_palette_runs_red_to_white() {
        assert_eq!(DEFAULT_PALETTE.len(), 7);
        assert_eq!(DEFAULT_PALETTE[0], Rgb::new(255, 0, 0));
        assert_eq!(DEFAULT_PALETTE[6], Rgb::new(255, 255, 255));
    }
}
